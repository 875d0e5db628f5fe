//! Listing behavior

use grove::action::{Action, ListFormat};
use grove::commands::{list, new};
use grove::git::list_worktrees;

use crate::helpers::{init_test_repo, test_config};

#[test]
fn test_listing_includes_created_worktrees() {
    let repo = init_test_repo();
    let config = test_config();

    new::execute(Some("feat".to_string()), repo.path(), &config).unwrap();

    let records = list_worktrees(repo.path()).unwrap();
    assert_eq!(records.len(), 2);
    assert!(records
        .iter()
        .any(|record| record.branch.as_deref() == Some("feat")));
}

#[test]
fn test_json_listing_round_trips() {
    let repo = init_test_repo();
    let config = test_config();

    let action = list::execute(true, repo.path()).unwrap();
    let Action::Listing { format, .. } = &action else {
        panic!("Expected Listing");
    };
    assert_eq!(*format, ListFormat::Json);

    let mut out = Vec::new();
    let mut err = Vec::new();
    action.render(&config, &mut out, &mut err).unwrap();

    let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(parsed[0]["branch"], "main");
}
