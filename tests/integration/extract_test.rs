//! End-to-end tests for the extract command.

use std::fs;

use predicates::prelude::*;

use crate::helpers::{agx, sample_cleaned, sample_export};

#[test]
fn extract_cleans_a_sample_export() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("session.md");
    fs::write(&input, sample_export()).unwrap();

    agx(dir.path())
        .args(["extract", input.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Extracted 4 messages"))
        .stdout(predicate::str::contains("Size reduction:"));

    let output = dir.path().join("session_clean.md");
    assert_eq!(fs::read_to_string(&output).unwrap(), sample_cleaned());
}

#[test]
fn extract_honors_explicit_output_path() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("session.md");
    let output = dir.path().join("condensed.md");
    fs::write(&input, sample_export()).unwrap();

    agx(dir.path())
        .args([
            "extract",
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
        ])
        .assert()
        .success();

    assert!(output.is_file());
    assert!(!dir.path().join("session_clean.md").exists());
}

#[test]
fn extract_missing_input_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();

    agx(dir.path())
        .args(["extract", dir.path().join("absent.md").to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed"));

    assert!(!dir.path().join("absent_clean.md").exists());
}

#[test]
fn extract_rejects_output_flag_with_multiple_inputs() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.md");
    let b = dir.path().join("b.md");
    fs::write(&a, sample_export()).unwrap();
    fs::write(&b, sample_export()).unwrap();

    agx(dir.path())
        .args([
            "extract",
            a.to_str().unwrap(),
            b.to_str().unwrap(),
            "-o",
            "out.md",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("single input"));
}

#[test]
fn extract_processes_multiple_files() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.md");
    let b = dir.path().join("b.md");
    fs::write(&a, sample_export()).unwrap();
    fs::write(&b, sample_export()).unwrap();

    agx(dir.path())
        .args(["extract", a.to_str().unwrap(), b.to_str().unwrap()])
        .assert()
        .success();

    assert!(dir.path().join("a_clean.md").is_file());
    assert!(dir.path().join("b_clean.md").is_file());
}

#[test]
fn extract_with_handoffs_writes_numbered_output() {
    let dir = tempfile::tempdir().unwrap();
    let handoffs = dir.path().join("handoffs");
    fs::create_dir_all(&handoffs).unwrap();
    fs::write(handoffs.join("2-earlier.md"), "x").unwrap();

    let input = dir.path().join("export.md");
    fs::write(&input, sample_export()).unwrap();

    agx(dir.path())
        .args([
            "extract",
            input.to_str().unwrap(),
            "--handoffs",
            handoffs.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("3-chat_transcript.md"));

    assert!(handoffs.join("3-chat_transcript.md").is_file());
}

#[test]
fn extract_scans_chat_history_when_no_files_given() {
    let dir = tempfile::tempdir().unwrap();
    let handoffs = dir.path().join("handoffs");
    let history = handoffs.join("0-system").join("chat_history");
    fs::create_dir_all(&history).unwrap();
    fs::write(history.join("export.md"), sample_export()).unwrap();

    agx(dir.path())
        .args(["extract", "--handoffs", handoffs.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Extracted 4 messages"));

    assert!(handoffs.join("1-chat_transcript.md").is_file());
    // The original export is left in place for the user to clean up.
    assert!(history.join("export.md").is_file());
}

#[test]
fn extract_with_no_headers_reports_zero_messages() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("notes.md");
    fs::write(&input, "plain notes without any transcript markup\n").unwrap();

    agx(dir.path())
        .args(["extract", input.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No messages extracted"));

    assert_eq!(
        fs::read_to_string(dir.path().join("notes_clean.md")).unwrap(),
        ""
    );
}

#[test]
fn extract_without_inputs_fails_with_usage_hint() {
    let dir = tempfile::tempdir().unwrap();

    agx(dir.path())
        .args(["extract"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No transcript files"));
}
