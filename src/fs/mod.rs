//! Filesystem concerns: ignore-file maintenance and advisory locking

pub mod ignore;
pub mod locking;

pub use ignore::ensure_ignored;
pub use locking::WorktreesLock;
