//! Branch name handling and branch-existence probes

use std::io::Read;
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::Duration;

use wait_timeout::ChildExt;

use crate::config::Config;
use crate::git::runner::run_git_bool;

/// How long the remote-heads probe may block before being killed.
const REMOTE_PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Strip the configured remote qualifier from a branch name.
///
/// `origin/feature/foo` and `feature/foo` refer to the same branch as far
/// as worktree resolution is concerned, so the prefix is dropped before any
/// other processing.
pub fn normalize_branch<'a>(name: &'a str, config: &Config) -> &'a str {
    let prefix = format!("{}/", config.remote);
    name.strip_prefix(&prefix).unwrap_or(name)
}

/// Check if a local branch ref resolves.
pub fn local_branch_exists(name: &str, repo_root: &Path) -> bool {
    run_git_bool(
        &["rev-parse", "--verify", "--quiet", &format!("refs/heads/{name}")],
        repo_root,
    )
}

/// Check if the remote advertises a head named `name`.
///
/// Performs a network round-trip (`git ls-remote --heads`). A probe that
/// fails or exceeds [`REMOTE_PROBE_TIMEOUT`] is treated as "branch absent"
/// rather than an error, so the tool stays usable offline; the condition is
/// logged so real connectivity problems are not silently masked.
pub fn remote_branch_exists(name: &str, repo_root: &Path, config: &Config) -> bool {
    let child = Command::new("git")
        .args(["ls-remote", "--heads", &config.remote, name])
        .current_dir(repo_root)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn();

    let mut child = match child {
        Ok(child) => child,
        Err(err) => {
            tracing::warn!(%name, %err, "failed to spawn remote probe; treating branch as absent");
            return false;
        }
    };

    match child.wait_timeout(REMOTE_PROBE_TIMEOUT) {
        Ok(Some(status)) if status.success() => {
            let mut stdout = String::new();
            if let Some(mut pipe) = child.stdout.take() {
                let _ = pipe.read_to_string(&mut stdout);
            }
            !stdout.trim().is_empty()
        }
        Ok(Some(status)) => {
            tracing::warn!(%name, %status, "remote probe failed; treating branch as absent");
            false
        }
        Ok(None) => {
            let _ = child.kill();
            let _ = child.wait();
            tracing::warn!(%name, "remote probe timed out; treating branch as absent");
            false
        }
        Err(err) => {
            tracing::warn!(%name, %err, "remote probe did not complete; treating branch as absent");
            false
        }
    }
}

/// Synchronize remote-tracking refs with a full fetch of the configured remote.
///
/// A failed fetch is logged and swallowed: attaching to a branch that exists
/// locally should still work offline, and a remote-only branch will surface
/// the problem from `git worktree add` instead.
pub fn fetch_remote(repo_root: &Path, config: &Config) {
    match crate::git::runner::run_git(&["fetch", &config.remote], repo_root) {
        Ok(output) if output.status.success() => {}
        Ok(output) => {
            let stderr = String::from_utf8_lossy(&output.stderr);
            tracing::warn!(remote = %config.remote, stderr = %stderr.trim(), "git fetch failed");
        }
        Err(err) => {
            tracing::warn!(remote = %config.remote, %err, "git fetch did not run");
        }
    }
}
