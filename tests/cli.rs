//! End-to-end checks of the failure paths, which all exit before a window opens.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn plotter() -> Command {
    Command::cargo_bin("ps-plotter").unwrap()
}

fn csv_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn missing_argument_is_a_usage_error() {
    plotter()
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_exits_zero() {
    for flag in ["--help", "-h"] {
        plotter()
            .arg(flag)
            .assert()
            .success()
            .stdout(predicate::str::contains("FILEPATH"));
    }
}

#[test]
fn unknown_flag_is_rejected() {
    plotter()
        .args(["--width", "3", "data.csv"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn nonexistent_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    plotter()
        .arg(dir.path().join("missing.csv"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::function(|err: &str| {
            err.matches("failed to open").count() == 1
        }));
}

#[test]
fn single_field_row_fails() {
    let file = csv_file("42\n");
    plotter()
        .arg(file.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("expected at least 2 fields"));
}

#[test]
fn non_numeric_humidity_fails() {
    let file = csv_file("1,abc\n");
    plotter()
        .arg(file.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("'abc' is not a base-10 integer"));
}

#[test]
fn blank_line_fails() {
    let file = csv_file("0,55\n\n1,57\n");
    plotter()
        .arg(file.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("line 2: expected at least 2 fields, found 0"));
}

#[test]
fn header_row_fails_before_rendering() {
    let file = csv_file("x,y\n1,2\n");
    plotter()
        .arg(file.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("line 1"));
}
