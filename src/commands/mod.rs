//! Entry-point commands
//!
//! Each command takes one `ExistenceFacts` snapshot at entry, classifies it
//! with a pure function, and produces a single [`crate::action::Action`].
//! Facts are never re-checked mid-flight; a branch created concurrently by
//! another process surfaces as a provisioning failure, not a graceful merge.

pub mod list;
pub mod new;
pub mod switch;

use anyhow::Result;
use std::path::Path;

use crate::config::Config;
use crate::git::{is_registered_worktree, local_branch_exists, remote_branch_exists};

/// The three independent facts a dispatch decision is based on.
///
/// Computed fresh on every invocation; nothing is cached between runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExistenceFacts {
    /// A registered worktree exists at the mapped path.
    pub worktree_exists: bool,
    /// A local branch ref resolves.
    pub local_branch_exists: bool,
    /// The remote advertises a head with this name.
    pub remote_branch_exists: bool,
}

impl ExistenceFacts {
    /// Probe the repository, the local refs, and the remote once.
    pub fn gather(branch: &str, path: &Path, repo_root: &Path, config: &Config) -> Result<Self> {
        Ok(Self {
            worktree_exists: is_registered_worktree(path, repo_root)?,
            local_branch_exists: local_branch_exists(branch, repo_root),
            remote_branch_exists: remote_branch_exists(branch, repo_root, config),
        })
    }
}
