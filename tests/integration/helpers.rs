//! Shared test helpers: real git repositories in temp directories

use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

use grove::config::Config;

/// Run a git command in `cwd`, panicking on failure.
pub fn git(args: &[&str], cwd: &Path) {
    let output = Command::new("git")
        .args(args)
        .current_dir(cwd)
        .output()
        .expect("Failed to run git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Run a git command in `cwd` and return trimmed stdout.
pub fn git_stdout(args: &[&str], cwd: &Path) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(cwd)
        .output()
        .expect("Failed to run git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Create a temporary git repository with an initial commit on `main`.
pub fn init_test_repo() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let repo_root = temp_dir.path();

    git(&["init"], repo_root);
    git(&["config", "user.email", "test@test.com"], repo_root);
    git(&["config", "user.name", "Test User"], repo_root);

    std::fs::write(repo_root.join("README.md"), "# Test Repository\n")
        .expect("Failed to write README.md");
    git(&["add", "."], repo_root);
    git(&["commit", "-m", "Initial commit"], repo_root);
    git(&["branch", "-M", "main"], repo_root);

    temp_dir
}

/// Create a local branch without checking it out.
pub fn create_branch(name: &str, repo_root: &Path) {
    git(&["branch", name], repo_root);
}

/// Clone `repo_root` to a bare repository and wire it up as `origin`.
///
/// Returns the directory holding the bare repo; keep it alive for the
/// duration of the test.
pub fn setup_remote(repo_root: &Path) -> TempDir {
    let remote_dir = TempDir::new().expect("Failed to create temp directory");
    let bare = remote_dir.path().join("origin.git");
    git(
        &[
            "clone",
            "--bare",
            &repo_root.to_string_lossy(),
            &bare.to_string_lossy(),
        ],
        repo_root,
    );
    git(&["remote", "add", "origin", &bare.to_string_lossy()], repo_root);
    git(&["fetch", "origin"], repo_root);
    remote_dir
}

/// Clone the bare repository at `bare` into a fresh working repo.
pub fn clone_repo(bare: &Path) -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let target = temp_dir.path().join("clone");
    git(
        &["clone", &bare.to_string_lossy(), &target.to_string_lossy()],
        bare,
    );
    git(&["config", "user.email", "test@test.com"], &target);
    git(&["config", "user.name", "Test User"], &target);
    temp_dir
}

/// Path of the working clone created by [`clone_repo`].
pub fn clone_root(clone_dir: &TempDir) -> PathBuf {
    clone_dir.path().join("clone")
}

/// Configuration used by the tests: defaults plus a fixed editor so the
/// rendered protocol line is deterministic.
pub fn test_config() -> Config {
    Config {
        editor: "code".to_string(),
        ..Config::default()
    }
}
