//! Advisory locking for the worktrees root
//!
//! Two invocations racing on the same branch can interleave an existence
//! check with the other's `git worktree add`. An `fs2` advisory lock on a
//! file inside the worktrees root serializes provisioning and ignore-file
//! mutation across processes. Advisory locks are cooperative - only other
//! grove invocations are kept out.

use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::path::Path;

use crate::error::Error;

/// Name of the lock file inside the worktrees root.
const LOCK_FILE: &str = ".lock";

/// Exclusive lock on the worktrees root, released on drop.
#[derive(Debug)]
pub struct WorktreesLock {
    file: File,
}

impl WorktreesLock {
    /// Block until the exclusive lock on `worktrees_root` is acquired.
    ///
    /// The worktrees root directory must already exist.
    pub fn acquire(worktrees_root: &Path) -> Result<Self, Error> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(worktrees_root.join(LOCK_FILE))?;
        file.lock_exclusive()?;
        Ok(Self { file })
    }
}

impl Drop for WorktreesLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
    }
}
