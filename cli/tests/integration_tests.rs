use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

/// Helper to get the saft binary
fn saft_cmd() -> Command {
    Command::cargo_bin("saft").unwrap()
}

#[test]
fn test_help_command() {
    saft_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("stuck-at fault analyzer"));
}

#[test]
fn test_version_command() {
    saft_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("saft"));
}

#[test]
fn test_report_table_shape() {
    saft_cmd()
        .arg("report")
        .assert()
        .success()
        .stdout(predicate::str::contains("Inputs: a b c d e"))
        .stdout(predicate::str::contains("<fault-free>"))
        .stdout(predicate::str::contains("q0"))
        .stdout(predicate::str::contains("z1"))
        .stdout(predicate::str::contains("Redundant faults:"));
}

#[test]
fn test_report_row_count() {
    let output = saft_cmd().arg("report").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();

    // one table row per input state, each starting with its state index
    let rows = stdout
        .lines()
        .filter(|line| {
            line.split_whitespace()
                .next()
                .is_some_and(|token| token.parse::<u64>().is_ok())
        })
        .count();
    assert_eq!(rows, 32);
}

#[test]
fn test_parallel_report_matches_sequential() {
    let sequential = saft_cmd().arg("report").output().unwrap();
    let parallel = saft_cmd().args(["report", "--parallel"]).output().unwrap();
    assert!(sequential.status.success());
    assert!(parallel.status.success());
    assert_eq!(sequential.stdout, parallel.stdout);
}

#[test]
fn test_pla_to_stdout() {
    saft_cmd()
        .arg("pla")
        .assert()
        .success()
        .stdout(predicate::str::contains(".i 5"))
        .stdout(predicate::str::contains(".o 17"))
        .stdout(predicate::str::contains(".ilb a b c d e"))
        .stdout(predicate::str::contains(".e"));
}

#[test]
fn test_pla_to_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("table.pla");

    saft_cmd()
        .arg("pla")
        .arg("-o")
        .arg(&path)
        .assert()
        .success();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with(".i 5\n"));
    assert!(text.contains(".p 32\n"));
    assert!(text.trim_end().ends_with(".e"));

    // 32 cube rows, none of which are dot-directives
    let cubes = text.lines().filter(|line| !line.starts_with('.')).count();
    assert_eq!(cubes, 32);
}
