//! CLI tests for the `ralph-sessions` binary.
//!
//! Prompts need a terminal, so these only cover what works without one.

use std::process::{Command, Stdio};

use ralph_sessions::exit_codes;

#[test]
fn version_flag_succeeds() {
    let output = Command::new(env!("CARGO_BIN_EXE_ralph-sessions"))
        .arg("--version")
        .output()
        .expect("ralph-sessions --version");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert!(String::from_utf8_lossy(&output.stdout).contains("ralph-sessions"));
}

#[test]
fn non_interactive_run_fails_without_writing() {
    let temp = tempfile::tempdir().expect("tempdir");

    let output = Command::new(env!("CARGO_BIN_EXE_ralph-sessions"))
        .current_dir(temp.path())
        .env_remove("RALPH_SESSIONS_CONFIG")
        .env_remove("RUST_LOG")
        .stdin(Stdio::null())
        .output()
        .expect("ralph-sessions");

    assert_eq!(output.status.code(), Some(exit_codes::FAILED));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error: "));
    assert_eq!(std::fs::read_dir(temp.path()).expect("read dir").count(), 0);
}

#[test]
fn invalid_config_fails_before_prompting() {
    let temp = tempfile::tempdir().expect("tempdir");
    let config_path = temp.path().join("config.toml");
    std::fs::write(&config_path, "fallback_test_command = \"\"\n").expect("write config");

    let output = Command::new(env!("CARGO_BIN_EXE_ralph-sessions"))
        .current_dir(temp.path())
        .env("RALPH_SESSIONS_CONFIG", &config_path)
        .stdin(Stdio::null())
        .output()
        .expect("ralph-sessions");

    assert_eq!(output.status.code(), Some(exit_codes::FAILED));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("fallback_test_command must not be empty"));
    assert!(!String::from_utf8_lossy(&output.stdout).contains("Setup Wizard"));
}
