//! Integration tests for `configforge merge`.

use predicates::prelude::*;

use crate::integration::fixtures::{create_conflict_project, create_project};

// ==================== Conflict Resolution ====================

#[test]
fn test_prompt_use_new_value() {
    let project = create_conflict_project();

    project
        .cmd()
        .args(["merge", "A.env", "B.env"])
        .write_stdin("2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully merged 2 file(s) → .env.merged"))
        .stdout(predicate::str::contains("[!] Found 1 variable conflict(s):"))
        .stdout(predicate::str::contains("PORT: \"3000\" → \"4000\" (from B.env)"))
        .stderr(predicate::str::contains("Conflict detected for \"PORT\""))
        .stderr(predicate::str::contains("1) Keep existing value: 3000"))
        .stderr(predicate::str::contains("2) Use new value: 4000"));

    assert_eq!(
        project.read(".env.merged"),
        "PORT=4000\nHOST=localhost\nDEBUG=true\n"
    );
}

#[test]
fn test_prompt_keep_existing_value() {
    let project = create_conflict_project();

    project
        .cmd()
        .args(["merge", "A.env", "B.env"])
        .write_stdin("1\n")
        .assert()
        .success();

    assert_eq!(
        project.read(".env.merged"),
        "PORT=3000\nHOST=localhost\nDEBUG=true\n"
    );
}

#[test]
fn test_prompt_reasks_on_invalid_choice() {
    let project = create_conflict_project();

    project
        .cmd()
        .args(["merge", "A.env", "B.env"])
        .write_stdin("7\nabc\n2\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Please enter a number between 1 and 2."));

    assert!(project.read(".env.merged").starts_with("PORT=4000\n"));
}

#[test]
fn test_closed_stdin_aborts_without_output() {
    let project = create_conflict_project();

    project
        .cmd()
        .args(["merge", "A.env", "B.env"])
        .write_stdin("")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Prompt failed"));

    assert!(!project.exists(".env.merged"));
}

#[test]
fn test_policy_flag_skips_prompt() {
    let project = create_conflict_project();

    project
        .cmd()
        .args(["merge", "A.env", "B.env", "--on-conflict", "use-new"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Conflict detected").not());

    assert!(project.read(".env.merged").starts_with("PORT=4000\n"));
}

#[test]
fn test_fail_policy_exit_code() {
    let project = create_conflict_project();

    project
        .cmd()
        .args(["merge", "A.env", "B.env", "--on-conflict", "fail"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Conflict for \"PORT\""));

    assert!(!project.exists(".env.merged"));
}

#[test]
fn test_identical_values_are_not_conflicts() {
    let project = create_project(&[("A.env", "PORT=3000\n"), ("B.env", "PORT=3000\nX=1\n")]);

    project
        .cmd()
        .args(["merge", "A.env", "B.env"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("conflict").not());

    assert_eq!(project.read(".env.merged"), "PORT=3000\nX=1\n");
}

// ==================== Missing Input ====================

#[test]
fn test_missing_file_aborts_without_output() {
    let project = create_conflict_project();

    project
        .cmd()
        .args(["merge", "A.env", "B.env", "C.env"])
        .write_stdin("2\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("File not found"))
        .stderr(predicate::str::contains("C.env"));

    assert!(!project.exists(".env.merged"));
}

// ==================== Output File ====================

#[test]
fn test_custom_output_and_separator() {
    let project = create_project(&[("a.env", "A=1\n"), ("b.env", "B=2\n")]);

    project
        .cmd()
        .args(["merge", "a.env", "b.env", "-o", "out.env", "-s", "# ---"])
        .assert()
        .success()
        .stdout(predicate::str::contains("→ out.env"));

    assert_eq!(project.read("out.env"), "A=1\n# ---\nB=2\n# ---\n");
    assert!(!project.exists(".env.merged"));
}

#[test]
fn test_unwritable_output_is_a_general_error() {
    let project = create_project(&[("a.env", "A=1\n")]);

    project
        .cmd()
        .args(["merge", "a.env", "-o", "missing_dir/out.env"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to write"))
        .stderr(predicate::str::contains("File not found").not());
}

#[test]
fn test_separator_that_parses_as_pair_is_rejected() {
    let project = create_project(&[("a.env", "A=1\n")]);

    project
        .cmd()
        .args(["merge", "a.env", "-s", "SEP=1"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("Invalid separator"));

    assert!(!project.exists(".env.merged"));
}

#[test]
fn test_existing_output_declined() {
    let project = create_project(&[("a.env", "A=1\n"), (".env.merged", "OLD=1\n")]);

    project
        .cmd()
        .args(["merge", "a.env"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("exists and will be overwritten"))
        .stderr(predicate::str::contains("Merging cancelled by user."));

    assert_eq!(project.read(".env.merged"), "OLD=1\n");
}

#[test]
fn test_existing_output_default_answer_is_no() {
    let project = create_project(&[("a.env", "A=1\n"), (".env.merged", "OLD=1\n")]);

    project
        .cmd()
        .args(["merge", "a.env"])
        .write_stdin("\n")
        .assert()
        .success();

    assert_eq!(project.read(".env.merged"), "OLD=1\n");
}

#[test]
fn test_existing_output_confirmed() {
    let project = create_project(&[("a.env", "A=1\n"), (".env.merged", "OLD=1\n")]);

    project
        .cmd()
        .args(["merge", "a.env"])
        .write_stdin("y\n")
        .assert()
        .success();

    assert_eq!(project.read(".env.merged"), "A=1\n");
}

#[test]
fn test_yes_flag_overwrites_without_asking() {
    let project = create_project(&[("a.env", "A=1\n"), (".env.merged", "OLD=1\n")]);

    project
        .cmd()
        .args(["merge", "a.env", "--yes"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Continue merging?").not());

    assert_eq!(project.read(".env.merged"), "A=1\n");
}

// ==================== Merge Properties ====================

#[test]
fn test_remerging_output_is_idempotent() {
    let project = create_conflict_project();

    project
        .cmd()
        .args(["merge", "A.env", "B.env", "--on-conflict", "use-new", "-s", "#"])
        .assert()
        .success();
    let first = project.read(".env.merged");

    project
        .cmd()
        .args(["merge", ".env.merged", "-o", "again.env", "-s", "#"])
        .assert()
        .success();

    assert_eq!(project.read("again.env"), first);
}

#[test]
fn test_comments_blank_lines_and_empty_values() {
    let project = create_project(&[
        ("a.env", "# header\n\n  URL = http://x/?a=b  \r\nEMPTY=\nFLAG\n"),
        ("b.env", "# only a comment\n"),
    ]);

    project
        .cmd()
        .args(["merge", "a.env", "b.env"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully merged 2 file(s)"));

    assert_eq!(project.read(".env.merged"), "URL=http://x/?a=b\n");
}

#[test]
fn test_empty_inputs_write_single_newline() {
    let project = create_project(&[("empty.env", "")]);

    project.cmd().args(["merge", "empty.env"]).assert().success();

    assert_eq!(project.read(".env.merged"), "\n");
}
