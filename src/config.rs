//! Runtime configuration
//!
//! Everything that used to be a hard-coded constant in the shell version is
//! carried in an explicit `Config` value passed into every component, so
//! tests can use distinct worktree roots per test case.

use std::path::PathBuf;

/// Configuration for a single invocation.
#[derive(Debug, Clone)]
pub struct Config {
    /// Worktrees root, relative to the repository root.
    pub worktrees_root: PathBuf,
    /// Remote used for branch-existence probes and fetches.
    pub remote: String,
    /// Editor command appended to the emitted `cd` line.
    pub editor: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            worktrees_root: PathBuf::from(".worktrees"),
            remote: "origin".to_string(),
            editor: "vi".to_string(),
        }
    }
}

impl Config {
    /// Build the default configuration, picking up `$EDITOR` if set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(editor) = std::env::var("EDITOR") {
            if !editor.trim().is_empty() {
                config.editor = editor;
            }
        }
        config
    }
}
