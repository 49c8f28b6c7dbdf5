use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_the_owner_flag() {
    Command::cargo_bin("picstash")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--owner"))
        .stdout(predicate::str::contains("Photo hosting desktop client"));
}

#[test]
fn missing_owner_exits_with_a_hint() {
    let dir = tempfile::tempdir().unwrap();
    Command::cargo_bin("picstash")
        .unwrap()
        .arg("--config")
        .arg(dir.path().join("config"))
        .env("HOME", dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("--owner"));
}
