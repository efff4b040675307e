//! End-to-end tests for the `ccwc` binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn ccwc() -> Command {
    Command::new(env!("CARGO_BIN_EXE_ccwc"))
}

fn fixture(dir: &TempDir, name: &str, contents: &[u8]) -> String {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path.display().to_string()
}

fn stdout_fields(output: &[u8]) -> Vec<String> {
    String::from_utf8(output.to_vec()).unwrap().split_whitespace().map(str::to_string).collect()
}

#[test]
fn shows_help() {
    ccwc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--bytes").and(predicate::str::contains("--chars")));
}

#[test]
fn default_kinds_for_file() {
    let dir = TempDir::new().unwrap();
    let path = fixture(&dir, "hello.txt", b"hello world\n");

    let output = ccwc().arg(&path).assert().success().get_output().stdout.clone();
    assert_eq!(stdout_fields(&output), vec!["1", "2", "12", path.as_str()]);
}

#[test]
fn empty_file_counts_zero() {
    let dir = TempDir::new().unwrap();
    let path = fixture(&dir, "empty.txt", b"");

    let output = ccwc().arg(&path).assert().success().get_output().stdout.clone();
    assert_eq!(stdout_fields(&output), vec!["0", "0", "0", path.as_str()]);
}

#[test]
fn unterminated_line_is_not_counted() {
    let dir = TempDir::new().unwrap();
    let path = fixture(&dir, "abc.txt", b"abc");

    let output = ccwc().args(["-l", path.as_str()]).assert().success().get_output().stdout.clone();
    assert_eq!(stdout_fields(&output), vec!["0", path.as_str()]);
}

#[test]
fn bytes_and_chars_differ_for_multibyte() {
    let dir = TempDir::new().unwrap();
    let path = fixture(&dir, "cafe.txt", "café".as_bytes());

    let output = ccwc().args(["-c", "-m", path.as_str()]).assert().success().get_output().stdout.clone();
    assert_eq!(stdout_fields(&output), vec!["5", "4", path.as_str()]);
}

#[test]
fn stdin_has_no_label() {
    ccwc()
        .write_stdin("a b\nc\n")
        .assert()
        .success()
        .stdout(" 2 3 6\n");
}

#[test]
fn stdin_is_read_once_for_many_kinds() {
    ccwc()
        .args(["-lwmc", "-"])
        .write_stdin("one two\nthree\n")
        .assert()
        .success()
        .stdout("  2  3 14 14\n");
}

#[test]
fn flag_order_and_duplicates_are_kept() {
    let dir = TempDir::new().unwrap();
    let path = fixture(&dir, "dup.txt", b"x y z\n");

    let output = ccwc().args(["-w", "-c", "-w", path.as_str()]).assert().success().get_output().stdout.clone();
    assert_eq!(stdout_fields(&output), vec!["3", "6", "3", path.as_str()]);
}

#[test]
fn json_output() {
    let output = ccwc()
        .args(["--format", "json", "-l"])
        .write_stdin("a\nb\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["counts"][0]["kind"], "lines");
    assert_eq!(value["counts"][0]["value"], 2);
    assert!(value["source"].is_null());
}

#[test]
fn missing_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.txt").display().to_string();

    ccwc()
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(format!("ccwc: '{path}': No such file or directory\n"));
}

#[test]
fn invalid_utf8_fails_without_partial_output() {
    let dir = TempDir::new().unwrap();
    let path = fixture(&dir, "latin1.txt", &[b'o', b'k', 0xe9, b'\n']);

    ccwc()
        .args(["-c", "-l", path.as_str()])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("invalid UTF-8"));
}

#[test]
fn invalid_utf8_is_fine_for_bytes_only() {
    let dir = TempDir::new().unwrap();
    let path = fixture(&dir, "latin1.txt", &[b'o', b'k', 0xe9, b'\n']);

    let output = ccwc().args(["-c", path.as_str()]).assert().success().get_output().stdout.clone();
    assert_eq!(stdout_fields(&output), vec!["4", path.as_str()]);
}

#[test]
fn empty_file_name_is_rejected() {
    ccwc()
        .arg("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("file name must not be empty"));
}

#[test]
fn repeated_runs_match() {
    let dir = TempDir::new().unwrap();
    let path = fixture(&dir, "same.txt", b"alpha beta\ngamma\n");

    let first = ccwc().arg(&path).assert().success().get_output().stdout.clone();
    let second = ccwc().arg(&path).assert().success().get_output().stdout.clone();
    assert_eq!(first, second);
}
