//! Tests for `ShellRunner` against the real platform shell.

#![cfg(unix)]

use std::fs;

use tui_install_core::CommandRunner;
use tui_install_runtime::ShellRunner;

#[test]
fn test_runs_in_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("marker.txt"), "present").unwrap();

    let result = ShellRunner::new().run("cat marker.txt", Some(dir.path()), true);

    assert!(result.success, "stderr: {}", result.stderr);
    assert_eq!(result.stdout, "present");
}

#[test]
fn test_shell_features_are_available() {
    // Install templates chain commands with `&&`
    let result = ShellRunner::new().run("true && echo chained", None, true);
    assert!(result.success);
    assert_eq!(result.stdout.trim(), "chained");

    let result = ShellRunner::new().run("false && echo unreachable", None, true);
    assert!(!result.success);
    assert!(result.stdout.is_empty());
}

#[test]
fn test_unknown_command_fails_without_panicking() {
    let result = ShellRunner::new().run(
        "definitely_not_a_real_command_12345 --version",
        None,
        false,
    );
    assert!(!result.success);
    assert!(!result.stderr.is_empty());
}

#[test]
fn test_run_checked_matches_run() {
    let runner = ShellRunner::new();
    assert_eq!(
        runner.run_checked("echo same", None),
        runner.run("echo same", None, true)
    );
}
