//! List registered worktrees

use anyhow::Result;
use std::path::Path;

use crate::action::{Action, ListFormat};
use crate::git::list_worktrees;

pub fn execute(json: bool, repo_root: &Path) -> Result<Action> {
    let records = list_worktrees(repo_root)?;
    let format = if json {
        ListFormat::Json
    } else {
        ListFormat::Plain
    };
    Ok(Action::Listing { records, format })
}
