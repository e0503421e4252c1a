//! End-to-end tests for the milestone commands.

use std::fs;

use predicates::prelude::*;

use crate::helpers::agx;

#[test]
fn milestone_create_archives_numbered_transcripts() {
    let dir = tempfile::tempdir().unwrap();
    let handoffs = dir.path().join("handoffs");
    fs::create_dir_all(&handoffs).unwrap();
    fs::write(handoffs.join("1-chat_transcript.md"), "first").unwrap();
    fs::write(handoffs.join("2-chat_transcript.md"), "second").unwrap();

    agx(dir.path())
        .args([
            "milestone",
            "create",
            "auth refactor",
            "--dir",
            handoffs.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Moved 2 transcript files"));

    let milestone = handoffs.join("3-auth-refactor");
    assert!(milestone.join("1-chat_transcript.md").is_file());
    assert!(milestone.join("2-chat_transcript.md").is_file());
    assert!(!handoffs.join("1-chat_transcript.md").exists());
}

#[test]
fn milestone_create_with_empty_directory_is_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let handoffs = dir.path().join("handoffs");
    fs::create_dir_all(&handoffs).unwrap();

    agx(dir.path())
        .args([
            "milestone",
            "create",
            "nothing",
            "--dir",
            handoffs.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing to archive"));
}

#[test]
fn milestone_list_shows_created_milestones() {
    let dir = tempfile::tempdir().unwrap();
    let handoffs = dir.path().join("handoffs");
    fs::create_dir_all(&handoffs).unwrap();
    fs::write(handoffs.join("1-a.md"), "a").unwrap();

    agx(dir.path())
        .args([
            "milestone",
            "create",
            "first",
            "--dir",
            handoffs.to_str().unwrap(),
        ])
        .assert()
        .success();

    agx(dir.path())
        .args(["milestone", "list", "--dir", handoffs.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("2-first"))
        .stdout(predicate::str::contains("Milestones: 1 total"));
}

#[test]
fn milestone_list_with_no_milestones() {
    let dir = tempfile::tempdir().unwrap();
    let handoffs = dir.path().join("handoffs");
    fs::create_dir_all(&handoffs).unwrap();

    agx(dir.path())
        .args(["milestone", "list", "--dir", handoffs.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No milestones"));
}
