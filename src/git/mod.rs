//! Git operations for worktree resolution
//!
//! This module provides:
//! - Branch name normalization and existence probes (local and remote)
//! - Worktree path mapping, porcelain listing, and provisioning
//! - A small runner wrapping `std::process::Command`

pub mod branch;
pub mod runner;
pub mod worktree;

pub use branch::{fetch_remote, local_branch_exists, normalize_branch, remote_branch_exists};
pub use worktree::{
    is_registered_worktree, list_worktrees, provision, worktree_path, ProvisionMode,
    WorktreeRecord,
};

use crate::error::Error;
use std::path::{Path, PathBuf};

/// Discover the repository root from a working directory.
///
/// Fails with [`Error::NotARepository`] when invoked outside a git tree.
pub fn repo_root(cwd: &Path) -> Result<PathBuf, Error> {
    let output = std::process::Command::new("git")
        .args(["rev-parse", "--show-toplevel"])
        .current_dir(cwd)
        .output()
        .map_err(Error::Io)?;

    if !output.status.success() {
        return Err(Error::NotARepository);
    }

    let root = String::from_utf8_lossy(&output.stdout).trim().to_string();
    Ok(PathBuf::from(root))
}
