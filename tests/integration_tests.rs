//! Integration tests for the rainorshine CLI

use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/colombo_forecast.json");

/// Command isolated from the user's config directory and `RAINORSHINE__*` variables.
/// The returned directory must outlive the command.
fn isolated_command() -> (Command, TempDir) {
    let home = tempfile::tempdir().expect("Failed to create temp dir");
    let mut command = Command::new(env!("CARGO_BIN_EXE_rainorshine"));
    command
        .env_remove("RUST_LOG")
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"));
    for (key, _) in std::env::vars_os() {
        if key.to_string_lossy().starts_with("RAINORSHINE__") {
            command.env_remove(key);
        }
    }
    (command, home)
}

fn rainorshine(args: &[&str]) -> Output {
    rainorshine_with_env(args, &[])
}

fn rainorshine_with_env(args: &[&str], vars: &[(&str, &str)]) -> Output {
    let (mut command, _home) = isolated_command();
    command
        .args(args)
        .envs(vars.iter().copied())
        .output()
        .expect("Failed to execute command")
}

/// Test that the CLI shows help with explicit help flag
#[test]
fn test_cli_help() {
    let output = rainorshine(&["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("rainorshine"));
    assert!(stdout.contains("classify"));
    assert!(stdout.contains("render"));
}

/// Test classify prints the storm precedence for thunder-with-rain
#[test]
fn test_classify_command() {
    let output = rainorshine(&["classify", "1276"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Category:  Storm"));
    assert!(stdout.contains("storm, rain"));
    assert!(stdout.contains("lightning-with-rain"));
}

#[test]
fn test_classify_json_unmapped_negative_code() {
    let output = rainorshine(&["classify", "-5", "--json", "--night"]);

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["visuals"]["category"], "default");
    assert_eq!(report["visuals"]["animation"], "none");
    assert_eq!(report["visuals"]["icon"]["tint"], "#FFA726");
    assert!(report["description"].is_null());
}

#[test]
fn test_render_file() {
    let output = rainorshine(&["render", "--file", FIXTURE, "--json"]);

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["location"], "Colombo, Western, Sri Lanka");
    assert_eq!(report["current"]["category"], "storm");
    assert_eq!(report["uv"], "high");
    assert_eq!(report["hourly"].as_array().unwrap().len(), 5);
}

#[test]
fn test_render_stdin_with_overrides() {
    let (mut command, _home) = isolated_command();
    let mut child = command
        .args(["render", "--units", "imperial", "--max-hours", "2"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn command");

    let payload = std::fs::read_to_string(FIXTURE).unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(payload.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("85°F"));
    assert!(stdout.contains("2024-06-19 01:00"));
    assert!(!stdout.contains("2024-06-19 02:00"));
}

#[test]
fn test_render_rejects_out_of_range_max_hours() {
    for value in ["0", "169"] {
        let output = rainorshine(&["render", "--file", FIXTURE, "--max-hours", value]);

        assert!(!output.status.success(), "--max-hours {value} was accepted");
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("--max-hours"));
    }
}

#[test]
fn test_render_uses_environment_overrides() {
    let output = rainorshine_with_env(
        &["render", "--file", FIXTURE],
        &[
            ("RAINORSHINE__DISPLAY__MAX_HOURLY_ITEMS", "2"),
            ("RAINORSHINE__DISPLAY__UNITS", "imperial"),
        ],
    );

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("85°F"));
    assert!(stdout.contains("2024-06-19 01:00"));
    assert!(!stdout.contains("2024-06-19 02:00"));
}

#[test]
fn test_invalid_environment_override_is_reported() {
    let output = rainorshine_with_env(
        &["classify", "1000"],
        &[("RAINORSHINE__LOGGING__FORMAT", "xml")],
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Configuration error"));
}

#[test]
fn test_render_missing_file_fails() {
    let output = rainorshine(&["render", "--file", "does/not/exist.json"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("File operation failed"));
}

#[test]
fn test_table_lists_documented_codes() {
    let output = rainorshine(&["table", "--json"]);

    assert!(output.status.success());
    let rows: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(rows.len(), 48);
    let thunder_snow = rows.iter().find(|r| r["code"] == 1282).unwrap();
    assert_eq!(thunder_snow["category"], "storm");
    assert_eq!(thunder_snow["memberships"], serde_json::json!(["storm", "snow"]));
}

#[test]
fn test_invalid_config_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[logging]\nlevel = \"loud\"\n").unwrap();

    let output = rainorshine(&["--config", path.to_str().unwrap(), "classify", "1000"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Configuration error"));
}
