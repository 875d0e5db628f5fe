//! Create-new behavior against real git repositories

use grove::action::Action;
use grove::commands::new;
use grove::error::Error;
use grove::git::local_branch_exists;

use crate::helpers::{
    clone_repo, clone_root, create_branch, git, git_stdout, init_test_repo, setup_remote,
    test_config,
};

#[test]
fn test_creates_branch_and_worktree() {
    let repo = init_test_repo();
    let config = test_config();
    let head = git_stdout(&["rev-parse", "HEAD"], repo.path());

    let action = new::execute(Some("feat".to_string()), repo.path(), &config).unwrap();
    let Action::ChangeDirectory(path) = action else {
        panic!("Expected ChangeDirectory");
    };

    assert_eq!(path, repo.path().join(".worktrees").join("feat"));
    assert!(local_branch_exists("feat", repo.path()));
    // New branch starts from the invoking repository's HEAD
    assert_eq!(git_stdout(&["rev-parse", "HEAD"], &path), head);
}

#[test]
fn test_missing_branch_is_usage_error() {
    let repo = init_test_repo();
    let config = test_config();

    let err = new::execute(None, repo.path(), &config).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<Error>(),
        Some(Error::MissingBranch)
    ));
}

#[test]
fn test_existing_local_branch_conflicts() {
    let repo = init_test_repo();
    let config = test_config();
    create_branch("taken", repo.path());

    let err = new::execute(Some("taken".to_string()), repo.path(), &config).unwrap_err();
    assert!(matches!(err.downcast_ref::<Error>(), Some(Error::Conflict(_))));
    // Conflict performs no provisioning
    assert!(!repo.path().join(".worktrees").join("taken").exists());
}

#[test]
fn test_existing_remote_branch_conflicts() {
    let upstream = init_test_repo();
    create_branch("upstream-feat", upstream.path());
    let remote = setup_remote(upstream.path());

    let clone_dir = clone_repo(&remote.path().join("origin.git"));
    let root = clone_root(&clone_dir);
    let config = test_config();

    let err = new::execute(Some("upstream-feat".to_string()), &root, &config).unwrap_err();
    assert!(matches!(err.downcast_ref::<Error>(), Some(Error::Conflict(_))));
}

#[test]
fn test_orphaned_worktree_conflict_still_surfaces_path() {
    let repo = init_test_repo();
    let config = test_config();

    new::execute(Some("feat".to_string()), repo.path(), &config).unwrap();
    let worktree = repo.path().join(".worktrees").join("feat");

    // Detach the worktree and delete the branch: the worktree stays
    // registered while the branch is gone
    git(&["checkout", "--detach"], &worktree);
    git(&["branch", "-D", "feat"], repo.path());

    let action = new::execute(Some("feat".to_string()), repo.path(), &config).unwrap();
    match action {
        Action::ConflictingWorktree { path, message } => {
            assert_eq!(path, worktree);
            assert!(message.contains("already exists"));
        }
        other => panic!("Expected ConflictingWorktree, got {other:?}"),
    }
}

#[test]
fn test_hierarchical_branch_creates_flat_directory() {
    let repo = init_test_repo();
    let config = test_config();

    let action = new::execute(Some("feat/ui".to_string()), repo.path(), &config).unwrap();
    let Action::ChangeDirectory(path) = action else {
        panic!("Expected ChangeDirectory");
    };

    assert_eq!(path, repo.path().join(".worktrees").join("feat-ui"));
    assert_eq!(
        git_stdout(&["rev-parse", "--abbrev-ref", "HEAD"], &path),
        "feat/ui"
    );
}

#[test]
fn test_empty_branch_name_is_invalid() {
    let repo = init_test_repo();
    let config = test_config();

    let err = new::execute(Some(String::new()), repo.path(), &config).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<Error>(),
        Some(Error::InvalidBranchName)
    ));
}
