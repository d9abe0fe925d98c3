//! End-to-end tests for the lifecoach CLI binary.
//!
//! Each test points `HOME` at its own temp directory, so the binary
//! reads and writes data files under that directory and tests cannot
//! see each other's state.

use std::path::Path;
use std::process::Command;

use tempfile::tempdir;

/// Run the CLI with the given args. Returns (stdout, stderr, exit code).
fn run_cli(home: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_lifecoach-cli"))
        .env("HOME", home)
        .env_remove("LIFECOACH_ENV")
        .args(args)
        .output()
        .expect("Failed to execute CLI binary");

    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.code().unwrap_or(-1),
    )
}

fn parse_json(stdout: &str) -> serde_json::Value {
    serde_json::from_str(stdout.trim()).expect("CLI output is not valid JSON")
}

/// Add an activity and return its id.
fn add_activity(home: &Path, name: &str, priority: &str, effort: &str) -> String {
    let (stdout, stderr, code) = run_cli(
        home,
        &[
            "activity", "add", name, "--priority", priority, "--effort", effort,
        ],
    );
    assert_eq!(code, 0, "activity add failed: {stderr}");
    // Output is a single "Activity added: <id>" line.
    stdout
        .trim()
        .rsplit(' ')
        .next()
        .expect("missing id in output")
        .to_string()
}

#[test]
fn test_cli_help_command() {
    let home = tempdir().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["--help"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Usage"));
    assert!(stdout.contains("coach"));
    assert!(stdout.contains("activity"));
}

#[test]
fn test_coach_suggest_empty_catalog_rests() {
    let home = tempdir().unwrap();
    let (stdout, _, code) = run_cli(
        home.path(),
        &["coach", "suggest", "--energy", "medium", "--time", "morning"],
    );
    assert_eq!(code, 0);
    assert!(stdout.contains("Take a rest"));
    assert!(stdout.contains("Rest is also a practice"));
    assert!(stdout.contains("What would make this morning feel meaningful?"));
}

#[test]
fn test_coach_suggest_json_picks_high_priority() {
    let home = tempdir().unwrap();
    add_activity(home.path(), "Walk", "low", "low");
    add_activity(home.path(), "Write essay", "high", "medium");

    let (stdout, _, code) = run_cli(
        home.path(),
        &[
            "coach", "suggest", "--energy", "high", "--time", "morning", "--json",
        ],
    );
    assert_eq!(code, 0);

    let suggestion = parse_json(&stdout);
    assert_eq!(suggestion["main_activity"]["name"], "Write essay");
    assert_eq!(
        suggestion["quote"],
        "What matters most deserves your attention. Start with intention."
    );
    assert_eq!(
        suggestion["reflection_prompt"],
        "How do you want to channel this energy today?"
    );
}

#[test]
fn test_coach_suggest_low_energy_filters_and_reads_gently() {
    let home = tempdir().unwrap();
    add_activity(home.path(), "Deep work", "high", "high");
    add_activity(home.path(), "Stretch", "low", "low");

    let (stdout, _, code) = run_cli(
        home.path(),
        &[
            "coach", "suggest", "--energy", "low", "--time", "afternoon", "--json",
        ],
    );
    assert_eq!(code, 0);

    let suggestion = parse_json(&stdout);
    assert_eq!(suggestion["main_activity"]["name"], "Stretch");
    assert_eq!(
        suggestion["quote"],
        "Gentle steps forward are still progress. Honor where you are."
    );
    assert_eq!(
        suggestion["reflection_prompt"],
        "What would feel restorative right now?"
    );
}

#[test]
fn test_coach_suggest_rejects_unknown_energy() {
    let home = tempdir().unwrap();
    let (_, stderr, code) = run_cli(
        home.path(),
        &["coach", "suggest", "--energy", "extreme", "--time", "morning"],
    );
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"));
    assert!(stderr.contains("extreme"));
}

#[test]
fn test_activity_lifecycle() {
    let home = tempdir().unwrap();
    let id = add_activity(home.path(), "Read", "low", "low");

    let (stdout, _, code) = run_cli(home.path(), &["activity", "list", "--json"]);
    assert_eq!(code, 0);
    let listed = parse_json(&stdout);
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["id"], id.as_str());
    assert_eq!(listed[0]["name"], "Read");
    assert_eq!(listed[0]["priority"], "low");

    let (_, stderr, code) = run_cli(
        home.path(),
        &["activity", "update", &id, "--priority", "high"],
    );
    assert_eq!(code, 0, "update failed: {stderr}");

    let (stdout, _, _) = run_cli(home.path(), &["activity", "list", "--json"]);
    let listed = parse_json(&stdout);
    assert_eq!(listed[0]["priority"], "high");
    assert_eq!(listed[0]["effort_level"], "low");

    // Prefixes resolve as long as they are unique.
    let (stdout, _, code) = run_cli(home.path(), &["activity", "remove", &id[..8]]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Activity removed"));

    let (stdout, _, _) = run_cli(home.path(), &["activity", "list"]);
    assert!(stdout.contains("No activities"));
}

#[test]
fn test_activity_list_filters_by_priority() {
    let home = tempdir().unwrap();
    add_activity(home.path(), "Walk", "low", "low");
    add_activity(home.path(), "Write essay", "high", "medium");

    let (stdout, _, code) = run_cli(
        home.path(),
        &["activity", "list", "--priority", "high", "--json"],
    );
    assert_eq!(code, 0);
    let listed = parse_json(&stdout);
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["name"], "Write essay");
}

#[test]
fn test_activity_remove_unknown_id_fails() {
    let home = tempdir().unwrap();
    let (_, stderr, code) = run_cli(home.path(), &["activity", "remove", "no-such-id"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"));
}

#[test]
fn test_session_log_and_list() {
    let home = tempdir().unwrap();
    let id = add_activity(home.path(), "Journal", "medium", "low");

    let (stdout, stderr, code) = run_cli(
        home.path(),
        &[
            "session", "log", "--energy", "medium", "--time", "morning", "--activity",
            &id[..8], "--duration", "25",
        ],
    );
    assert_eq!(code, 0, "session log failed: {stderr}");
    assert!(stdout.contains("Session logged: Journal"));

    let (stdout, _, code) = run_cli(home.path(), &["session", "list"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Journal"));
    assert!(stdout.contains("25 min"));

    let (stdout, _, _) = run_cli(home.path(), &["session", "list", "--json"]);
    let sessions = parse_json(&stdout);
    assert_eq!(sessions.as_array().unwrap().len(), 1);
    assert_eq!(sessions[0]["activity_id"], id.as_str());
    assert_eq!(sessions[0]["activity_name"], "Journal");
    assert_eq!(sessions[0]["energy_level"], "medium");
}

#[test]
fn test_session_log_rest() {
    let home = tempdir().unwrap();
    let (stdout, _, code) = run_cli(
        home.path(),
        &["session", "log", "--energy", "low", "--time", "afternoon"],
    );
    assert_eq!(code, 0);
    assert!(stdout.contains("Rest session logged"));

    let (stdout, _, _) = run_cli(home.path(), &["session", "list", "--json"]);
    let sessions = parse_json(&stdout);
    assert!(sessions[0]["activity_id"].is_null());
}

#[test]
fn test_config_default_energy_drives_suggestions() {
    let home = tempdir().unwrap();
    add_activity(home.path(), "Deep work", "high", "high");
    add_activity(home.path(), "Stretch", "low", "low");

    let (stdout, _, code) = run_cli(home.path(), &["config", "get", "coach.default_energy"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "medium");

    let (_, stderr, code) = run_cli(
        home.path(),
        &["config", "set", "coach.default_energy", "low"],
    );
    assert_eq!(code, 0, "config set failed: {stderr}");

    let (stdout, _, _) = run_cli(home.path(), &["config", "get", "coach.default_energy"]);
    assert_eq!(stdout.trim(), "low");

    // No --energy flag: the configured default applies, so the
    // high-effort activity is out of reach.
    let (stdout, _, code) = run_cli(
        home.path(),
        &["coach", "suggest", "--time", "afternoon", "--json"],
    );
    assert_eq!(code, 0);
    let suggestion = parse_json(&stdout);
    assert_eq!(suggestion["main_activity"]["name"], "Stretch");
}

#[test]
fn test_config_set_rejects_unknown_key() {
    let home = tempdir().unwrap();
    let (_, stderr, code) = run_cli(
        home.path(),
        &["config", "set", "coach.nonexistent_key", "3"],
    );
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"));
    assert!(stderr.contains("coach.nonexistent_key"));
}

#[test]
fn test_config_reset_restores_defaults() {
    let home = tempdir().unwrap();
    let (_, _, code) = run_cli(
        home.path(),
        &["config", "set", "coach.morning_cutoff_hour", "14"],
    );
    assert_eq!(code, 0);

    let (_, _, code) = run_cli(home.path(), &["config", "reset"]);
    assert_eq!(code, 0);

    let (stdout, _, _) = run_cli(home.path(), &["config", "get", "coach.morning_cutoff_hour"]);
    assert_eq!(stdout.trim(), "12");
}
