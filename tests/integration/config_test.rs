//! Config discovery, `init` and `rules`

use crate::common::{run_fieldgate, stderr, stdout};
use crate::support::fixtures::fixture_path;

use fieldgate::config::Config;
use serial_test::serial;
use std::fs;
use tempfile::TempDir;

fn write_project_config(dir: &std::path::Path, content: &str) {
    let config_dir = dir.join(".fieldgate");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.md"), content).unwrap();
}

#[test]
fn test_init_writes_default_config() {
    let tmp = TempDir::new().unwrap();
    let output = run_fieldgate(tmp.path(), &["init"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let config = Config::load_from(&tmp.path().join(".fieldgate/config.md")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_init_refuses_to_overwrite() {
    let tmp = TempDir::new().unwrap();
    write_project_config(tmp.path(), "---\nrules: {}\n---\n");

    let output = run_fieldgate(tmp.path(), &["init"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("--force"));

    let forced = run_fieldgate(tmp.path(), &["init", "--force"]);
    assert!(forced.status.success());
    let config = Config::load_from(&tmp.path().join(".fieldgate/config.md")).unwrap();
    assert_eq!(config.rules.len(), 7);
}

#[test]
fn test_check_uses_project_config() {
    let tmp = TempDir::new().unwrap();
    // No rules: every record with the required fields is fully valid
    write_project_config(tmp.path(), "---\nrules: {}\n---\n");

    let output = run_fieldgate(
        tmp.path(),
        &[
            "--quiet",
            "check",
            &fixture_path("passports_invalid").to_string_lossy(),
        ],
    );
    assert!(output.status.success());
    assert_eq!(stdout(&output), "4\n4\n");
}

#[test]
fn test_check_with_explicit_config() {
    let tmp = TempDir::new().unwrap();
    let config_path = tmp.path().join("strict-pid.md");
    fs::write(
        &config_path,
        r#"---
schema:
  fields: [pid]
  ignore: []
rules:
  pid: { type: pattern, regex: "^[0-9]{9}$" }
---
"#,
    )
    .unwrap();

    let input = tmp.path().join("batch.txt");
    fs::write(&input, "pid:012345678\n\npid:01234567x\n\ncid:1\n").unwrap();

    let output = run_fieldgate(
        tmp.path(),
        &["--quiet", "check", "--config", "strict-pid.md", "batch.txt"],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "2\n1\n");
}

#[test]
fn test_explicit_config_must_exist() {
    let tmp = TempDir::new().unwrap();
    let output = run_fieldgate(tmp.path(), &["rules", "--config", "missing.md"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("missing.md"));
}

#[test]
fn test_invalid_project_config_is_reported() {
    let tmp = TempDir::new().unwrap();
    write_project_config(
        tmp.path(),
        "---\nrules:\n  byr: { type: year, min: 2002, max: 1920 }\n---\n",
    );

    let output = run_fieldgate(tmp.path(), &["rules"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("config.md"));
}

#[test]
fn test_rules_lists_passport_table() {
    let tmp = TempDir::new().unwrap();
    let output = run_fieldgate(tmp.path(), &["rules"]);

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("byr iyr eyr hgt hcl ecl pid"), "{}", out);
    assert!(out.contains("height [150, 193] cm or [59, 76] in"), "{}", out);
    assert!(out.contains("exactly 9 characters"), "{}", out);
}

#[test]
fn test_completion_script() {
    let tmp = TempDir::new().unwrap();
    let output = run_fieldgate(tmp.path(), &["completion", "bash"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("fieldgate"));
}

#[test]
#[serial]
fn test_config_load_reads_current_directory() {
    let original_dir = std::env::current_dir().expect("Failed to get current dir");
    let tmp = TempDir::new().unwrap();
    write_project_config(tmp.path(), "---\nschema:\n  fields: [a]\n  ignore: []\n---\n");

    std::env::set_current_dir(tmp.path()).unwrap();
    let loaded = Config::load();
    std::env::set_current_dir(&original_dir).unwrap();

    let config = loaded.unwrap();
    assert_eq!(config.schema.fields, vec!["a"]);
    assert_eq!(config.rules.len(), 7);
}

#[test]
#[serial]
fn test_config_load_defaults_without_file() {
    let original_dir = std::env::current_dir().expect("Failed to get current dir");
    let tmp = TempDir::new().unwrap();

    std::env::set_current_dir(tmp.path()).unwrap();
    let loaded = Config::load();
    std::env::set_current_dir(&original_dir).unwrap();

    assert_eq!(loaded.unwrap(), Config::default());
}
