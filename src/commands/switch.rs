//! Switch to a branch's worktree, creating it on demand

use anyhow::Result;
use std::path::Path;

use crate::action::{Action, ListFormat};
use crate::commands::ExistenceFacts;
use crate::config::Config;
use crate::error::Error;
use crate::git::{list_worktrees, normalize_branch, provision, worktree_path, ProvisionMode};

/// What to do for a given facts snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Plan {
    /// The worktree is already provisioned.
    ChangeDirectory,
    /// The branch exists (locally or remotely) but has no worktree yet.
    Attach,
    /// The branch resolves nowhere.
    NotFound,
}

fn classify(facts: &ExistenceFacts) -> Plan {
    if facts.worktree_exists {
        Plan::ChangeDirectory
    } else if facts.local_branch_exists || facts.remote_branch_exists {
        Plan::Attach
    } else {
        Plan::NotFound
    }
}

/// Resolve or create the worktree for `branch` and emit the cd action.
///
/// Without a branch argument, prints the worktree listing instead.
pub fn execute(branch: Option<String>, repo_root: &Path, config: &Config) -> Result<Action> {
    let Some(branch) = branch else {
        let records = list_worktrees(repo_root)?;
        return Ok(Action::Listing {
            records,
            format: ListFormat::Plain,
        });
    };

    let name = normalize_branch(&branch, config).to_string();
    let path = worktree_path(&name, repo_root, config)?;
    let facts = ExistenceFacts::gather(&name, &path, repo_root, config)?;
    tracing::debug!(branch = %name, ?facts, "classified switch request");

    match classify(&facts) {
        Plan::ChangeDirectory => Ok(Action::ChangeDirectory(path)),
        Plan::Attach => {
            let path = provision(&name, &path, ProvisionMode::AttachExisting, repo_root, config)?;
            Ok(Action::ChangeDirectory(path))
        }
        Plan::NotFound => Err(Error::BranchNotFound(name).into()),
    }
}
