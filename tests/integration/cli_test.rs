//! CLI surface tests: help, version, completions, config.

use predicates::prelude::*;

use crate::helpers::agx;

#[test]
fn help_shows_quick_start() {
    let dir = tempfile::tempdir().unwrap();

    agx(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("QUICK START"))
        .stdout(predicate::str::contains("extract"));
}

#[test]
fn version_prints_crate_version() {
    let dir = tempfile::tempdir().unwrap();

    agx(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn completions_generate_zsh_script() {
    let dir = tempfile::tempdir().unwrap();

    agx(dir.path())
        .args(["completions", "--shell", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("agx"));
}

#[test]
fn completions_without_shell_shows_usage() {
    let dir = tempfile::tempdir().unwrap();

    agx(dir.path())
        .args(["completions"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--shell"));
}

#[test]
fn config_show_prints_defaults() {
    let dir = tempfile::tempdir().unwrap();

    agx(dir.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("output_suffix"))
        .stdout(predicate::str::contains("_clean"));
}
