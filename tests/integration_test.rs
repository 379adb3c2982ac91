//! Integration tests for the event-gate CLI.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

const FILTERS: &str = r#"[
    { "property": "$host", "type": "string", "operator": "not_contains", "value": "localhost" },
    { "property": "foo", "type": "number", "operator": "gt", "value": 10 },
    { "property": "bar", "type": "boolean", "operator": "is", "value": true }
]"#;

/// Write a config file and filters file into a per-test temp directory and
/// return the config path.
fn setup(test_name: &str, filters_json: Option<&str>, config_extras: &str) -> PathBuf {
    let dir = std::env::temp_dir()
        .join(format!("event-gate-test-{}", std::process::id()))
        .join(test_name);
    fs::create_dir_all(&dir).expect("Failed to create test directory");

    let mut config = String::new();
    if let Some(json) = filters_json {
        let filters_path = dir.join("filters.json");
        fs::write(&filters_path, json).expect("Failed to write filters file");
        config.push_str(&format!("filters_path = \"{}\"\n", filters_path.display()));
    }
    config.push_str(config_extras);

    let config_path = dir.join("config.toml");
    fs::write(&config_path, config).expect("Failed to write config file");
    config_path
}

/// Run event-gate with the given subcommand args and stdin, returning
/// (stdout, stderr, exit_code).
fn run_gate(config_path: &PathBuf, args: &[&str], stdin_input: &str) -> (String, String, i32) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_event-gate"))
        .args(args)
        .arg("-c")
        .arg(config_path)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn event-gate");

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(stdin_input.as_bytes()).unwrap();
    }

    let output = child.wait_with_output().expect("Failed to read output");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

#[test]
fn test_event_satisfying_conditions_passes_through_unchanged() {
    let config = setup(
        "keep",
        Some(FILTERS),
        "events_to_drop = \"to_drop_event\"\n",
    );
    let line = r#"{"event":"test event","properties":{"$host":"example.com","foo":20,"bar":true}}"#;
    let (stdout, _stderr, exit_code) = run_gate(&config, &["run"], &format!("{line}\n"));

    assert_eq!(exit_code, 0);
    assert_eq!(stdout, format!("{line}\n"), "Kept event must be echoed verbatim");
}

#[test]
fn test_event_failing_a_condition_is_suppressed() {
    let config = setup("drop-condition", Some(FILTERS), "");
    let line =
        r#"{"event":"test event","properties":{"$host":"localhost:8000","foo":20,"bar":true}}"#;
    let (stdout, _stderr, exit_code) = run_gate(&config, &["run"], &format!("{line}\n"));

    assert_eq!(exit_code, 0);
    assert!(stdout.is_empty(), "Dropped event must produce no output: {stdout}");
}

#[test]
fn test_event_named_in_drop_list_is_suppressed() {
    let config = setup(
        "drop-name",
        Some(FILTERS),
        "events_to_drop = \"to_drop_event\"\n",
    );
    let line =
        r#"{"event":"to_drop_event","properties":{"$host":"example.com","foo":20,"bar":true}}"#;
    let (stdout, _stderr, exit_code) = run_gate(&config, &["run"], &format!("{line}\n"));

    assert_eq!(exit_code, 0);
    assert!(stdout.is_empty());
}

#[test]
fn test_property_less_event_passes_through() {
    // No properties object at all: kept even though the name is in the drop list.
    let config = setup(
        "property-less",
        Some(FILTERS),
        "events_to_drop = \"to_drop_event\"\n",
    );
    let line = r#"{"event":"to_drop_event"}"#;
    let (stdout, _stderr, exit_code) = run_gate(&config, &["run"], &format!("{line}\n"));

    assert_eq!(exit_code, 0);
    assert_eq!(stdout, format!("{line}\n"));
}

#[test]
fn test_missing_property_kept_under_yes_policy() {
    let config = setup(
        "keep-undefined",
        Some(FILTERS),
        "keep_undefined_properties = \"Yes\"\n",
    );
    let line = r#"{"event":"test_event","properties":{"foo":20,"bar":true}}"#;
    let (stdout, _stderr, exit_code) = run_gate(&config, &["run"], &format!("{line}\n"));

    assert_eq!(exit_code, 0);
    assert_eq!(stdout, format!("{line}\n"));
}

#[test]
fn test_missing_property_dropped_under_default_policy() {
    let config = setup("drop-undefined", Some(FILTERS), "");
    let line = r#"{"event":"test_event","properties":{"foo":20,"bar":true}}"#;
    let (stdout, _stderr, exit_code) = run_gate(&config, &["run"], &format!("{line}\n"));

    assert_eq!(exit_code, 0);
    assert!(stdout.is_empty());
}

#[test]
fn test_malformed_input_line_fails_the_run_but_keeps_valid_events() {
    let config = setup("malformed", Some(FILTERS), "");
    let line = r#"{"event":"test event","properties":{"$host":"example.com","foo":20,"bar":true}}"#;
    let input = format!("not json at all\n{line}\n");
    let (stdout, _stderr, exit_code) = run_gate(&config, &["run"], &input);

    assert_ne!(exit_code, 0, "Malformed input should fail the run");
    assert_eq!(stdout, format!("{line}\n"), "Valid events are still forwarded");
}

#[test]
fn test_check_accepts_valid_configuration() {
    let config = setup(
        "check-ok",
        Some(FILTERS),
        "events_to_drop = \"to_drop_event\"\n",
    );
    let (_stdout, stderr, exit_code) = run_gate(&config, &["check"], "");

    assert_eq!(exit_code, 0, "Valid configuration should pass check: {stderr}");
    assert!(stderr.contains("3 condition(s)"), "stderr: {stderr}");
}

#[test]
fn test_check_rejects_operator_not_registered_for_type() {
    let bad = r#"[{ "property": "x", "type": "string", "operator": "gt", "value": "y" }]"#;
    let config = setup("check-bad-operator", Some(bad), "");
    let (_stdout, stderr, exit_code) = run_gate(&config, &["check"], "");

    assert_ne!(exit_code, 0);
    assert!(stderr.contains("gt"), "Error should name the operator: {stderr}");
}

#[test]
fn test_check_rejects_undecodable_filters_file() {
    let config = setup("check-bad-json", Some("null"), "");
    let (_stdout, _stderr, exit_code) = run_gate(&config, &["check"], "");

    assert_ne!(exit_code, 0);
}

#[test]
fn test_run_without_filters_file_keeps_events_with_properties() {
    let config = setup("no-filters", None, "");
    let line = r#"{"event":"anything","properties":{"foo":1}}"#;
    let (stdout, _stderr, exit_code) = run_gate(&config, &["run"], &format!("{line}\n"));

    assert_eq!(exit_code, 0);
    assert_eq!(stdout, format!("{line}\n"));
}
