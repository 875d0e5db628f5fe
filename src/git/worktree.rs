//! Worktree path mapping, listing, and provisioning
//!
//! Every branch maps to a deterministic directory under the worktrees root.
//! Provisioning shells out to `git worktree add` while holding an advisory
//! lock on the worktrees root so concurrent invocations cannot interleave
//! their existence checks with each other's directory creation.

use anyhow::Result;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Error;
use crate::fs::ignore::ensure_ignored;
use crate::fs::locking::WorktreesLock;
use crate::git::branch::{fetch_remote, normalize_branch};
use crate::git::runner::{run_git, run_git_checked};

/// One entry of the porcelain worktree listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorktreeRecord {
    /// Absolute path to the worktree directory.
    pub path: PathBuf,
    /// Checked-out branch, absent for a detached HEAD.
    pub branch: Option<String>,
}

/// How to materialize a worktree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProvisionMode {
    /// Bind the worktree to a branch that already exists (locally or on the
    /// remote). Fetches the remote first so a remote-only branch starts from
    /// its latest known state.
    AttachExisting,
    /// Create a new branch off the current HEAD together with the worktree.
    CreateNew,
}

/// Map a branch name to its worktree directory.
///
/// The remote qualifier is stripped first, then every `/` is replaced with
/// `-` so hierarchical branch names stay flat on disk; no other
/// normalization is applied. Deterministic: the same branch always maps to
/// the same path for a given repository root.
pub fn worktree_path(branch: &str, repo_root: &Path, config: &Config) -> Result<PathBuf, Error> {
    let name = normalize_branch(branch, config);
    if name.is_empty() {
        return Err(Error::InvalidBranchName);
    }
    let sanitized = name.replace('/', "-");
    Ok(repo_root.join(&config.worktrees_root).join(sanitized))
}

/// List all registered worktrees.
pub fn list_worktrees(repo_root: &Path) -> Result<Vec<WorktreeRecord>> {
    let stdout = run_git_checked(&["worktree", "list", "--porcelain"], repo_root)?;
    Ok(parse_worktree_list(&stdout))
}

/// Parse `git worktree list --porcelain` output.
///
/// Blocks are blank-line-delimited. A block contributes a record iff it has
/// a `worktree ` line; the `branch ` line is optional (detached HEAD) and
/// has its `refs/heads/` prefix stripped.
fn parse_worktree_list(output: &str) -> Vec<WorktreeRecord> {
    let mut records = Vec::new();
    let mut path: Option<PathBuf> = None;
    let mut branch: Option<String> = None;

    // Trailing "" flushes the last block.
    for line in output.lines().chain(std::iter::once("")) {
        if line.is_empty() {
            if let Some(path) = path.take() {
                records.push(WorktreeRecord {
                    path,
                    branch: branch.take(),
                });
            }
            branch = None;
            continue;
        }

        if let Some(rest) = line.strip_prefix("worktree ") {
            path = Some(PathBuf::from(rest));
        } else if let Some(rest) = line.strip_prefix("branch ") {
            let name = rest.strip_prefix("refs/heads/").unwrap_or(rest);
            branch = Some(name.to_string());
        }
    }

    records
}

/// Check whether `path` is a registered worktree.
///
/// The porcelain listing is the source of truth, not a raw directory probe:
/// a stale directory left behind at the mapped path does not count as a
/// worktree. Paths are canonicalized for comparison where possible.
pub fn is_registered_worktree(path: &Path, repo_root: &Path) -> Result<bool> {
    let canonical = path.canonicalize().ok();

    for record in list_worktrees(repo_root)? {
        let record_canonical = record.path.canonicalize().ok();
        let matches = match (&canonical, &record_canonical) {
            (Some(a), Some(b)) => a == b,
            _ => record.path == path,
        };
        if matches {
            return Ok(true);
        }
    }

    Ok(false)
}

/// Materialize a worktree for `branch` at `path`.
///
/// Ensures the worktrees root exists and is git-ignored, then runs the
/// creation primitive for the requested mode. The advisory lock on the
/// worktrees root is held for the whole operation. Returns the worktree
/// path on success; a non-zero git outcome is surfaced, not retried.
pub fn provision(
    branch: &str,
    path: &Path,
    mode: ProvisionMode,
    repo_root: &Path,
    config: &Config,
) -> Result<PathBuf> {
    let worktrees_root = repo_root.join(&config.worktrees_root);
    std::fs::create_dir_all(&worktrees_root).map_err(Error::Io)?;
    let _lock = WorktreesLock::acquire(&worktrees_root)?;

    ensure_ignored(repo_root, config)?;

    let name = normalize_branch(branch, config);
    let path_str = path.to_string_lossy();

    let output = match mode {
        ProvisionMode::AttachExisting => {
            fetch_remote(repo_root, config);
            run_git(&["worktree", "add", path_str.as_ref(), name], repo_root)?
        }
        ProvisionMode::CreateNew => {
            run_git(&["worktree", "add", "-b", name, path_str.as_ref()], repo_root)?
        }
    };

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::git("worktree add", stderr.trim().to_string()).into());
    }

    tracing::debug!(branch = %name, path = %path.display(), ?mode, "worktree provisioned");
    Ok(path.to_path_buf())
}
