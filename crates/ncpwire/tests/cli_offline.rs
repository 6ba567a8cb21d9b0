#![cfg(feature = "cli")]

use std::process::{Command, Output};

fn ncpwire(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ncpwire"))
        .arg("--log-level")
        .arg("error")
        .args(args)
        .output()
        .expect("ncpwire should run")
}

fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be json")
}

#[test]
fn version_prints_crate_version() {
    let output = ncpwire(&["version"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.trim(),
        format!("ncpwire {}", env!("CARGO_PKG_VERSION"))
    );
}

#[test]
fn version_extended_reports_catalog_size() {
    let output = ncpwire(&["version", "--extended"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("catalog: 203 commands, 58 events"));
}

#[test]
fn catalog_lists_one_class_as_json() {
    let output = ncpwire(&["--format", "json", "catalog", "--class", "user"]);
    assert!(output.status.success());

    let entries = stdout_json(&output);
    let entries = entries.as_array().expect("catalog should print an array");
    let names: Vec<_> = entries
        .iter()
        .filter_map(|e| e.get("name").and_then(|n| n.as_str()))
        .collect();
    assert!(names.contains(&"user_message_to_target"));
    let reset = entries
        .iter()
        .find(|e| e.get("name").and_then(|n| n.as_str()) == Some("user_reset_to_dfu"))
        .expect("user_reset_to_dfu should be listed");
    assert!(reset.get("response").is_none());
}

#[test]
fn catalog_rejects_unknown_class() {
    let output = ncpwire(&["catalog", "--class", "bogus"]);
    assert_eq!(output.status.code(), Some(64));
}

#[test]
fn decode_get_version_command() {
    let output = ncpwire(&["--format", "json", "decode", "0000011b"]);
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["kind"], "command");
    assert_eq!(json["class"], "system");
    assert_eq!(json["name"], "system_get_version");
    assert_eq!(json["fields"].as_array().map(Vec::len), Some(0));
}

#[test]
fn decode_event_fields() {
    // system_soft_timer, handle 7
    let output = ncpwire(&["--format", "json", "decode", "80 01 01 07 07"]);
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["kind"], "event");
    assert_eq!(json["name"], "system_soft_timer");
    assert_eq!(json["fields"][0]["name"], "handle");
    assert_eq!(json["fields"][0]["value"], 7);
}

#[test]
fn decode_unknown_key_shows_raw_payload() {
    let output = ncpwire(&["--format", "json", "decode", "8002 7e00 abcd"]);
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["class_id"], 0x7e);
    assert_eq!(json["payload"], "abcd");
}

#[test]
fn decode_rejects_bad_frames() {
    // Kind bits 0b11.
    assert_eq!(ncpwire(&["decode", "c0000100"]).status.code(), Some(60));
    // Declared length 2, only 1 byte present.
    assert_eq!(ncpwire(&["decode", "0002010000"]).status.code(), Some(60));
    // Payload shorter than the event layout.
    assert_eq!(ncpwire(&["decode", "80000107"]).status.code(), Some(60));
    assert_eq!(ncpwire(&["decode", "xyz"]).status.code(), Some(64));
}

#[test]
fn send_unknown_command_is_usage_error() {
    let output = ncpwire(&["send", "/nonexistent/ncp.sock", "system_bogus"]);
    assert_eq!(output.status.code(), Some(64));
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown command"));
}

#[test]
fn info_against_missing_socket_fails() {
    let output = ncpwire(&["info", "/nonexistent/ncp.sock", "--timeout", "200ms"]);
    assert_eq!(output.status.code(), Some(1));
}
