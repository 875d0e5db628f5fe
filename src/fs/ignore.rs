//! Keeping the worktrees root out of version control
//!
//! The worktrees root lives inside the repository, so it has to be ignored
//! or every checkout shows up as untracked noise. `ensure_ignored` is safe
//! to call on every invocation: it checks before writing.

use std::io::Write;
use std::path::Path;

use crate::config::Config;
use crate::error::Error;

/// Ensure the worktrees root exists and is covered by `.gitignore`.
///
/// Creates the worktrees root directory if absent. If a `.gitignore` exists
/// at the repository root and does not already reference the worktrees
/// root, appends an ignore entry preceded by a blank line and a comment.
/// If no `.gitignore` exists, none is created.
pub fn ensure_ignored(repo_root: &Path, config: &Config) -> Result<(), Error> {
    let worktrees_root = repo_root.join(&config.worktrees_root);
    if !worktrees_root.exists() {
        std::fs::create_dir_all(&worktrees_root)?;
    }

    let gitignore = repo_root.join(".gitignore");
    if !gitignore.exists() {
        return Ok(());
    }

    let entry = config.worktrees_root.to_string_lossy().to_string();
    let content = std::fs::read_to_string(&gitignore)?;
    if is_covered(&content, &entry) {
        return Ok(());
    }

    let mut file = std::fs::OpenOptions::new().append(true).open(&gitignore)?;
    let leading = if content.ends_with('\n') || content.is_empty() {
        ""
    } else {
        "\n"
    };
    write!(file, "{leading}\n# per-branch worktrees managed by grove\n{entry}/\n")?;
    tracing::debug!(path = %gitignore.display(), %entry, "appended ignore entry");

    Ok(())
}

/// Check if an ignore-file already covers the worktrees root.
fn is_covered(content: &str, entry: &str) -> bool {
    let with_slash = format!("{entry}/");
    content.lines().any(|line| {
        let trimmed = line.trim();
        trimmed == entry || trimmed == with_slash
    })
}
