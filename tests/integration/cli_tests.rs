//! CLI integration tests for configforge.
//!
//! These tests verify the command-line interface behavior using assert_cmd.

use predicates::prelude::*;

use crate::integration::fixtures::create_empty_project;

// ==================== Help and Version ====================

#[test]
fn test_help_output() {
    create_empty_project()
        .cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Merge, validate, encrypt and decrypt .env files",
        ))
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("merge"))
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("encrypt"))
        .stdout(predicate::str::contains("decrypt"));
}

#[test]
fn test_merge_help_lists_options() {
    create_empty_project()
        .cmd()
        .args(["merge", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--separator"))
        .stdout(predicate::str::contains("--output"))
        .stdout(predicate::str::contains("--on-conflict"))
        .stdout(predicate::str::contains("keep-existing"));
}

#[test]
fn test_version_output() {
    create_empty_project()
        .cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("configforge"))
        .stdout(predicate::str::is_match(r"\d+\.\d+\.\d+").unwrap());
}

// ==================== Argument Errors ====================

#[test]
fn test_missing_subcommand_is_an_error() {
    create_empty_project()
        .cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_merge_without_files_is_an_error() {
    create_empty_project()
        .cmd()
        .arg("merge")
        .assert()
        .failure()
        .stderr(predicate::str::contains("<FILES>"));
}

#[test]
fn test_unknown_policy_is_an_error() {
    create_empty_project()
        .cmd()
        .args(["merge", "A.env", "--on-conflict", "coin-flip"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

// ==================== Completions ====================

#[test]
fn test_bash_completions() {
    create_empty_project()
        .cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("configforge"))
        .stdout(predicate::str::contains("merge"));
}

#[test]
fn test_zsh_completions() {
    create_empty_project()
        .cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef configforge"));
}

// ==================== Debug Logging ====================

#[test]
fn test_debug_logs_to_stderr_only() {
    let project = create_empty_project();
    project.write("A.env", "X=1\n");

    project
        .cmd()
        .args(["--debug", "merge", "A.env"])
        .assert()
        .success()
        .stderr(predicate::str::contains("DEBUG"))
        .stdout(predicate::str::contains("DEBUG").not());
}
