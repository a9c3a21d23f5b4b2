//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test file uses every fixture

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the resistor-code binary
pub fn resistor_bin() -> &'static str {
    env!("CARGO_BIN_EXE_resistor-code")
}

/// Creates an empty config directory that lives as long as the returned guard.
pub fn temp_config_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp config dir")
}

/// Runs the binary with `args` against the given config directory.
pub fn run_with_config(args: &[&str], config_dir: &Path) -> Output {
    Command::new(resistor_bin())
        .env("RESISTOR_CODE_CONFIG_DIR", config_dir)
        .env_remove("RUST_LOG")
        .env_remove("NO_COLOR")
        .args(args)
        .output()
        .expect("Failed to execute command")
}

/// Runs the binary with `args` and a fresh, empty config directory.
pub fn run(args: &[&str]) -> Output {
    let config_dir = temp_config_dir();
    run_with_config(args, config_dir.path())
}

/// Writes `content` as config.toml inside `config_dir`.
pub fn write_config(config_dir: &Path, content: &str) {
    fs::write(config_dir.join("config.toml"), content).expect("Failed to write config.toml");
}

/// Stdout as a string.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Stderr as a string.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Parses stdout as JSON, failing the test with stderr on error.
pub fn json(output: &Output) -> serde_json::Value {
    serde_json::from_str(&stdout(output)).unwrap_or_else(|e| {
        panic!(
            "Should parse JSON ({e}). stdout: {} stderr: {}",
            stdout(output),
            stderr(output)
        )
    })
}

/// Asserts the process exited with `code`, showing stderr otherwise.
pub fn assert_exit(output: &Output, code: i32) {
    assert_eq!(
        output.status.code(),
        Some(code),
        "Unexpected exit code. stdout: {} stderr: {}",
        stdout(output),
        stderr(output)
    );
}
