//! CLI help output integration tests

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_root_help() {
    Command::cargo_bin("kyc")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Know Your Country"))
        .stdout(predicate::str::contains("browse"))
        .stdout(predicate::str::contains("list"));
}

#[test]
fn test_browse_help() {
    Command::cargo_bin("kyc")
        .unwrap()
        .args(["browse", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--region"))
        .stdout(predicate::str::contains("--search"))
        .stdout(predicate::str::contains("--log-file"));
}

#[test]
fn test_list_help() {
    Command::cargo_bin("kyc")
        .unwrap()
        .args(["list", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("OUTPUT FORMATS"));
}

#[test]
fn test_list_region_values() {
    Command::cargo_bin("kyc")
        .unwrap()
        .args(["list", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("oceania"));
}

#[test]
fn test_invalid_region_is_rejected() {
    Command::cargo_bin("kyc")
        .unwrap()
        .args(["list", "--region", "atlantis"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("atlantis"));
}

#[test]
fn test_json_conflicts_with_simple() {
    Command::cargo_bin("kyc")
        .unwrap()
        .args(["list", "--json", "--simple"])
        .assert()
        .failure();
}
