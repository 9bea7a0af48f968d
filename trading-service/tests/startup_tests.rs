// Process-level startup tests for the trading-service binary

use std::io::Write;
use std::net::TcpListener;
use std::process::{Command, Output};

fn run_with_config(path: &str) -> Output {
    Command::new(env!("CARGO_BIN_EXE_trading-service"))
        .args(["-f", path])
        .output()
        .expect("Failed to run trading-service binary")
}

fn write_config(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temp config");
    file.write_all(content.as_bytes())
        .expect("Failed to write temp config");
    file
}

/// A port that is free right now
fn free_port() -> u16 {
    TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port()
}

fn assert_config_failure(output: &Output) {
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to read config"), "stderr: {}", stderr);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("Starting trading service"), "stdout: {}", stdout);
}

#[test]
fn test_missing_config_aborts() {
    let output = run_with_config("does/not/exist.yaml");
    assert_config_failure(&output);
}

#[test]
fn test_malformed_config_aborts_before_binding() {
    let port = free_port();
    let config = write_config(".yaml", &format!("Name: trading\nHost: 127.0.0.1\nPort: {}\nLog: [", port));

    let output = run_with_config(config.path().to_str().unwrap());
    assert_config_failure(&output);

    // The port named in the broken config is still free
    assert!(TcpListener::bind(("127.0.0.1", port)).is_ok());
}

#[test]
fn test_invalid_config_aborts() {
    let config = write_config(".yaml", "Name: trading\nPort: 0\n");

    let output = run_with_config(config.path().to_str().unwrap());
    assert_config_failure(&output);
}

#[test]
fn test_unsupported_extension_aborts() {
    let config = write_config(".ini", "Name=trading\nPort=8888\n");

    let output = run_with_config(config.path().to_str().unwrap());
    assert_config_failure(&output);
}

#[test]
fn test_bind_failure_exits_non_zero() {
    let taken = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = taken.local_addr().unwrap().port();
    let config = write_config(".yaml", &format!("Name: trading\nHost: 127.0.0.1\nPort: {}\n", port));

    let output = run_with_config(config.path().to_str().unwrap());
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to start server"), "stderr: {}", stderr);
}
