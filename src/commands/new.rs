//! Create a new branch together with its worktree

use anyhow::Result;
use std::path::Path;

use crate::action::Action;
use crate::commands::ExistenceFacts;
use crate::config::Config;
use crate::error::Error;
use crate::git::{normalize_branch, provision, worktree_path, ProvisionMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Plan {
    /// The branch already resolves locally or remotely.
    BranchConflict,
    /// No branch, but the mapped path is already a registered worktree.
    /// The conflict is reported, yet the path is still surfaced.
    WorktreeConflict,
    Create,
}

fn classify(facts: &ExistenceFacts) -> Plan {
    if facts.local_branch_exists || facts.remote_branch_exists {
        Plan::BranchConflict
    } else if facts.worktree_exists {
        Plan::WorktreeConflict
    } else {
        Plan::Create
    }
}

/// Create branch `branch` off the current HEAD in a fresh worktree.
pub fn execute(branch: Option<String>, repo_root: &Path, config: &Config) -> Result<Action> {
    let Some(branch) = branch else {
        return Err(Error::MissingBranch.into());
    };

    let name = normalize_branch(&branch, config).to_string();
    let path = worktree_path(&name, repo_root, config)?;
    let facts = ExistenceFacts::gather(&name, &path, repo_root, config)?;
    tracing::debug!(branch = %name, ?facts, "classified create request");

    match classify(&facts) {
        Plan::BranchConflict => {
            Err(Error::Conflict(format!("branch '{name}' already exists")).into())
        }
        Plan::WorktreeConflict => Ok(Action::ConflictingWorktree {
            message: format!("worktree already exists at {}", path.display()),
            path,
        }),
        Plan::Create => {
            let path = provision(&name, &path, ProvisionMode::CreateNew, repo_root, config)?;
            Ok(Action::ChangeDirectory(path))
        }
    }
}
