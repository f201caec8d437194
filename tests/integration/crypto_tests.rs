//! Integration tests for `configforge encrypt` and `configforge decrypt`.

use predicates::prelude::*;

use crate::integration::fixtures::create_project;

const KEY: &str = "correct horse battery staple";

#[test]
fn test_encrypt_then_decrypt() {
    let project = create_project(&[("secrets.env", "API_KEY=abc\nDB_PASS=p=w\n")]);

    project
        .cmd()
        .args(["encrypt", "secrets.env", "--key", KEY])
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully encrypted: secrets.env"))
        .stdout(predicate::str::contains("Encryption process completed."));

    let envelope = project.read("secrets.env.enc");
    let shape = regex::Regex::new(r"^IV:[0-9a-f]{32}\nDATA:[A-Za-z0-9+/]+=*$").unwrap();
    assert!(shape.is_match(&envelope), "unexpected envelope: {envelope:?}");

    project
        .cmd()
        .args(["decrypt", "secrets.env.enc", "-k", KEY])
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully decrypted: secrets.env.enc"));

    assert_eq!(project.read("secrets.env.dec"), "API_KEY=abc\nDB_PASS=p=w\n");
}

#[test]
fn test_key_from_environment() {
    let project = create_project(&[("a.env", "A=1\n")]);

    project
        .cmd()
        .args(["encrypt", "a.env"])
        .env("CONFIGFORGE_KEY", KEY)
        .assert()
        .success();
    assert!(project.exists("a.env.enc"));
}

#[test]
fn test_key_is_required() {
    let project = create_project(&[("a.env", "A=1\n")]);

    project
        .cmd()
        .args(["encrypt", "a.env"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--key"));
    assert!(!project.exists("a.env.enc"));
}

#[test]
fn test_missing_file_is_skipped() {
    let project = create_project(&[("a.env", "A=1\n")]);

    project
        .cmd()
        .args(["encrypt", "missing.env", "a.env", "--key", KEY])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Could not process missing.env"))
        .stdout(predicate::str::contains("Successfully encrypted: a.env"))
        .stderr(predicate::str::contains("1 of 2 file(s) could not be encrypted"));

    assert!(project.exists("a.env.enc"));
}

#[test]
fn test_decrypt_rejects_plain_file() {
    let project = create_project(&[("a.env", "A=1\n")]);

    project
        .cmd()
        .args(["decrypt", "a.env", "--key", KEY])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Invalid encrypted file format"));

    assert!(!project.exists("a.env.dec"));
}

#[test]
fn test_existing_output_declined() {
    let project = create_project(&[("a.env", "A=1\n"), ("a.env.enc", "previous")]);

    project
        .cmd()
        .args(["encrypt", "a.env", "--key", KEY])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists and will be overwritten"))
        .stderr(predicate::str::contains("Encryption cancelled by user."));

    assert_eq!(project.read("a.env.enc"), "previous");
}

#[test]
fn test_existing_output_with_yes() {
    let project = create_project(&[("a.env", "A=1\n"), ("a.env.enc", "previous")]);

    project
        .cmd()
        .args(["-y", "encrypt", "a.env", "--key", KEY])
        .assert()
        .success();

    assert!(project.read("a.env.enc").starts_with("IV:"));
}
