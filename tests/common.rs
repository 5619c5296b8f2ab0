//! Common test helpers for integration tests

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

pub fn fieldgate_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_fieldgate"))
}

/// Binary command in `dir` with colors and logging off.
pub fn fieldgate_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new(fieldgate_binary());
    cmd.args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("FIELDGATE_QUIET")
        .env_remove("FIELDGATE_LOG");
    cmd
}

pub fn run_fieldgate(dir: &Path, args: &[&str]) -> Output {
    fieldgate_command(dir, args)
        .output()
        .expect("Failed to run fieldgate")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
