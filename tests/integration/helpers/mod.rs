//! Shared helpers for integration tests.

use std::path::Path;

use assert_cmd::Command;

/// Build an `agx` command with HOME pointed at the test directory, so user
/// configuration never leaks into test runs.
pub fn agx(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("agx").expect("agx binary");
    cmd.env("HOME", home);
    cmd
}

/// A small but representative Roo-Code style export: task and feedback
/// tags, environment details, a thinking section, a tool invocation and
/// its result, and a completion wrapper.
pub fn sample_export() -> String {
    [
        "**User:**",
        "",
        "<task>Fix the login bug</task>",
        "",
        "<environment_details>",
        "cwd: /home/dev/app",
        "</environment_details>",
        "",
        "---",
        "",
        "**Assistant:**",
        "",
        "<thinking>The session cookie is dropped on refresh.</thinking>",
        "I will patch the session handling.",
        "",
        "<apply_diff>",
        "<path>src/session.rs</path>",
        "</apply_diff>",
        "",
        "---",
        "",
        "**User:**",
        "",
        "[apply_diff] Result:",
        "Changes applied.",
        "",
        "<feedback>works now, thanks</feedback>",
        "",
        "---",
        "",
        "**Assistant:**",
        "",
        "<attempt_completion>",
        "<result>",
        "Login no longer drops the session.",
        "</result>",
        "</attempt_completion>",
        "",
    ]
    .join("\n")
}

/// The expected cleaned form of [`sample_export`].
pub fn sample_cleaned() -> String {
    [
        "**User:**",
        "",
        "Fix the login bug",
        "",
        "---",
        "",
        "**Assistant:**",
        "",
        "<thinking>The session cookie is dropped on refresh.</thinking>",
        "I will patch the session handling.",
        "",
        "---",
        "",
        "**User:**",
        "",
        "works now, thanks",
        "",
        "---",
        "",
        "**Assistant:**",
        "",
        "Login no longer drops the session.",
    ]
    .join("\n")
}
