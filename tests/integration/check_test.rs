//! `fieldgate check`

use crate::common::{fieldgate_command, run_fieldgate, stderr, stdout};
use crate::support::fixtures::fixture_path;

use std::io::Write;
use std::process::Stdio;
use tempfile::TempDir;

fn fixture_arg(name: &str) -> String {
    fixture_path(name).to_string_lossy().to_string()
}

#[test]
fn test_check_sample_text_output() {
    let tmp = TempDir::new().unwrap();
    let output = run_fieldgate(tmp.path(), &["check", &fixture_arg("passports_sample")]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Records:"), "{}", out);
    let line = out
        .lines()
        .find(|l| l.trim_start().starts_with("Required fields present:"))
        .unwrap();
    assert!(line.ends_with("2 (50.0%)"), "{}", line);
}

#[test]
fn test_check_quiet_prints_two_counts() {
    let tmp = TempDir::new().unwrap();
    let output = run_fieldgate(
        tmp.path(),
        &["--quiet", "check", &fixture_arg("passports_invalid")],
    );

    assert!(output.status.success());
    assert_eq!(stdout(&output), "4\n0\n");
}

#[test]
fn test_check_json_output() {
    let tmp = TempDir::new().unwrap();
    let output = run_fieldgate(
        tmp.path(),
        &["check", "--format", "json", &fixture_arg("passports_sample")],
    );

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["total"], 4);
    assert_eq!(value["phase1"], 2);
    assert_eq!(value["phase2"], 2);
}

#[test]
fn test_check_verbose_lists_failures() {
    let tmp = TempDir::new().unwrap();
    let output = run_fieldgate(
        tmp.path(),
        &["check", "--verbose", &fixture_arg("passports_sample")],
    );

    let out = stdout(&output);
    assert!(out.contains("record 2: missing hgt"), "{}", out);
    assert!(out.contains("record 4: missing byr"), "{}", out);
}

#[test]
fn test_check_verbose_json_includes_invalid_fields() {
    let tmp = TempDir::new().unwrap();
    let output = run_fieldgate(
        tmp.path(),
        &[
            "check",
            "--format",
            "json",
            "--verbose",
            &fixture_arg("passports_invalid"),
        ],
    );

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let failures = value["failures"].as_array().unwrap();
    assert_eq!(failures.len(), 4);
    assert_eq!(failures[0]["invalid"][0], "eyr");
}

#[test]
fn test_check_strict_exit_code() {
    let tmp = TempDir::new().unwrap();

    let failing = run_fieldgate(
        tmp.path(),
        &["check", "--strict", &fixture_arg("passports_sample")],
    );
    assert_eq!(failing.status.code(), Some(1));

    let passing = run_fieldgate(
        tmp.path(),
        &["check", "--strict", &fixture_arg("passports_valid")],
    );
    assert!(passing.status.success());
}

#[test]
fn test_check_reads_stdin() {
    let tmp = TempDir::new().unwrap();
    let mut child = fieldgate_command(tmp.path(), &["--quiet", "check", "-"])
        .env("FIELDGATE_LOG", "debug")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn fieldgate");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"byr:1937 iyr:2017 eyr:2020 hgt:183cm\nhcl:#fffffd ecl:gry pid:86003332\n")
        .unwrap();

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    assert_eq!(stdout(&output), "1\n0\n");
    // Logging goes to stderr only
    assert!(stderr(&output).contains("DEBUG"), "{}", stderr(&output));
}

#[test]
fn test_check_malformed_input_fails() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("bad.txt");
    std::fs::write(&input, "byr:1937 iyr2017\n").unwrap();

    let output = run_fieldgate(tmp.path(), &["check", "bad.txt"]);
    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.contains("iyr2017"), "{}", err);
}

#[test]
fn test_check_missing_input_fails() {
    let tmp = TempDir::new().unwrap();
    let output = run_fieldgate(tmp.path(), &["check", "nope.txt"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("nope.txt"));
}
