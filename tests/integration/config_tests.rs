//! Integration tests for configuration loading and merging.

use std::path::Path;

use configforge::config::{ColorMode, Config};
use configforge::dotenv::ConflictPolicy;
use predicates::prelude::*;

use crate::integration::fixtures::{create_conflict_project, create_empty_project};

fn printed_config(output: &[u8]) -> Config {
    toml::from_str(&String::from_utf8_lossy(output)).expect("config output should be TOML")
}

// ==================== Config Command ====================

#[test]
fn test_default_config_output() {
    let project = create_empty_project();

    let output = project.cmd().arg("config").output().unwrap();

    assert!(output.status.success());
    assert_eq!(printed_config(&output.stdout), Config::default());
}

#[test]
fn test_example_config_is_valid() {
    let project = create_empty_project();

    let output = project.cmd().args(["config", "--example"]).output().unwrap();

    assert!(output.status.success());
    let config = printed_config(&output.stdout);
    assert_eq!(config.merge.on_conflict, Some(ConflictPolicy::Prompt));
    assert_eq!(config.appearance.color, Some(ColorMode::Auto));
}

// ==================== Layering ====================

#[test]
fn test_user_project_and_cli_layers() {
    let project = create_empty_project();
    project.write_user_config(
        r##"
[merge]
output = "user.env"
separator = "# user"

[appearance]
banner = false
"##,
    );
    project.write(
        ".configforgerc.toml",
        r#"
[merge]
output = "project.env"
"#,
    );
    project.write(
        "cli.toml",
        r#"
[merge]
on_conflict = "keep-existing"
"#,
    );

    let output = project
        .cmd()
        .args(["config", "--config", "cli.toml"])
        .output()
        .unwrap();
    let config = printed_config(&output.stdout);

    assert_eq!(config.merge.output.as_deref(), Some(Path::new("project.env")));
    assert_eq!(config.merge.separator.as_deref(), Some("# user"));
    assert_eq!(config.merge.on_conflict, Some(ConflictPolicy::KeepExisting));
    assert_eq!(config.appearance.banner, Some(false));
}

#[test]
fn test_no_config_ignores_files() {
    let project = create_empty_project();
    project.write(".configforgerc.toml", "[merge]\noutput = \"project.env\"\n");

    let output = project.cmd().args(["config", "--no-config"]).output().unwrap();

    assert_eq!(printed_config(&output.stdout), Config::default());
}

#[test]
fn test_project_config_drives_merge() {
    let project = create_conflict_project();
    project.write(
        ".configforgerc.toml",
        r#"
[merge]
output = "merged.env"
on_conflict = "keep-existing"
"#,
    );

    project
        .cmd()
        .args(["merge", "A.env", "B.env"])
        .assert()
        .success()
        .stdout(predicate::str::contains("→ merged.env"));

    assert_eq!(
        project.read("merged.env"),
        "PORT=3000\nHOST=localhost\nDEBUG=true\n"
    );
}

#[test]
fn test_cli_flags_override_config() {
    let project = create_conflict_project();
    project.write(
        ".configforgerc.toml",
        "[merge]\noutput = \"merged.env\"\non_conflict = \"keep-existing\"\n",
    );

    project
        .cmd()
        .args(["merge", "A.env", "B.env", "-o", "flag.env", "--on-conflict", "use-new"])
        .assert()
        .success();

    assert!(project.read("flag.env").starts_with("PORT=4000\n"));
    assert!(!project.exists("merged.env"));
}

// ==================== Broken Config ====================

#[test]
fn test_broken_project_config_is_a_warning() {
    let project = create_empty_project();
    project.write(".configforgerc.toml", "[merge\n");

    project
        .cmd()
        .arg("config")
        .assert()
        .success()
        .stderr(predicate::str::contains("Failed to load project config"));
}

#[test]
fn test_broken_cli_config_is_an_error() {
    let project = create_empty_project();
    project.write("broken.toml", "[merge]\non_conflict = 3\n");

    project
        .cmd()
        .args(["config", "--config", "broken.toml"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("Invalid config"));
}

#[test]
fn test_missing_cli_config_is_an_error() {
    let project = create_empty_project();

    project
        .cmd()
        .args(["config", "--config", "absent.toml"])
        .assert()
        .code(2);
}

// ==================== Appearance ====================

#[test]
fn test_auto_color_honors_no_color() {
    let project = create_conflict_project();

    project
        .cmd()
        .args(["merge", "A.env", "B.env", "--on-conflict", "keep-existing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}[").not());
}

#[test]
fn test_always_color_overrides_environment() {
    let project = create_conflict_project();
    project.write(".configforgerc.toml", "[appearance]\ncolor = \"always\"\n");

    project
        .cmd()
        .args(["merge", "A.env", "B.env", "--on-conflict", "keep-existing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}["));
}
