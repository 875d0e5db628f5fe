//! Git command runner
//!
//! Centralized helpers for running git with consistent error handling,
//! keeping subprocess boilerplate out of the rest of the crate.

use anyhow::{Context, Result};
use std::path::Path;
use std::process::{Command, Output};

use crate::error::Error;

/// Run a git command and return the raw Output.
///
/// Wraps `Command::new("git")` with `current_dir` and error context. Use
/// this when you need both stdout and stderr or custom error handling.
pub fn run_git(args: &[&str], repo_root: &Path) -> Result<Output> {
    tracing::debug!(?args, "running git");
    Command::new("git")
        .args(args)
        .current_dir(repo_root)
        .output()
        .with_context(|| format!("Failed to execute: git {}", args.join(" ")))
}

/// Run a git command, check for success, and return stdout as a trimmed String.
///
/// On failure, returns an [`Error::Git`] carrying the stderr content.
pub fn run_git_checked(args: &[&str], repo_root: &Path) -> Result<String> {
    let output = run_git(args, repo_root)?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let cmd = args.first().unwrap_or(&"");
        return Err(Error::git(cmd, stderr.trim().to_string()).into());
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Run a git command and return true if exit code is 0.
///
/// Silently swallows errors (both spawn failures and non-zero exits).
/// Use this for status checks like ref verification.
pub fn run_git_bool(args: &[&str], repo_root: &Path) -> bool {
    run_git(args, repo_root)
        .map(|output| output.status.success())
        .unwrap_or(false)
}
