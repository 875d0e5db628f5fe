//! Error taxonomy for worktree resolution and provisioning

use thiserror::Error;

/// Errors surfaced to the user. Every variant terminates the invocation
/// with exit code 1; nothing is retried internally.
#[derive(Debug, Error)]
pub enum Error {
    /// Invoked outside a git working tree.
    #[error("not inside a git repository")]
    NotARepository,

    /// A subcommand that requires a branch name was called without one.
    #[error("a branch name is required")]
    MissingBranch,

    /// The branch name is empty after normalization.
    #[error("branch name must not be empty")]
    InvalidBranchName,

    /// The branch resolves neither locally nor on the remote.
    #[error("branch '{0}' not found locally or on the remote")]
    BranchNotFound(String),

    /// Creation was requested for something that already exists.
    #[error("{0}")]
    Conflict(String),

    /// A git subprocess exited non-zero.
    #[error("git {command} failed: {stderr}")]
    Git { command: String, stderr: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Build a `Git` error from the failed subcommand and its stderr.
    pub fn git(command: &str, stderr: impl Into<String>) -> Self {
        Self::Git {
            command: command.to_string(),
            stderr: stderr.into(),
        }
    }
}
