//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run against the dev data
//! directory and verify outputs.

use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "rangelog-cli", "--"])
        .args(args)
        .env("RANGELOG_ENV", "dev")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_stats_summary() {
    let (stdout, _, code) = run_cli(&["stats", "summary"]);
    assert_eq!(code, 0, "Stats summary failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("summary is JSON");
    assert!(parsed.get("total_sessions").is_some());
    assert!(parsed.get("current_streak").is_some());
}

#[test]
fn test_stats_streaks() {
    let (stdout, _, code) = run_cli(&["stats", "streaks"]);
    assert_eq!(code, 0, "Stats streaks failed");
    assert!(stdout.contains("Current streak"));
    assert!(stdout.contains("Longest streak"));
}

#[test]
fn test_stats_recent() {
    let (_, _, code) = run_cli(&["stats", "recent"]);
    assert_eq!(code, 0, "Stats recent failed");
}

#[test]
fn test_log_ball_striking_and_delete() {
    let (stdout, _, code) = run_cli(&[
        "log",
        "ball-striking",
        "--date",
        "2026-01-15",
        "--towel",
        "3",
        "--jump",
        "10",
    ]);
    assert_eq!(code, 0, "Log ball striking failed");
    assert!(stdout.contains("2 drill(s) recorded"));

    let (stdout, _, code) = run_cli(&["log", "list", "ball_striking"]);
    assert_eq!(code, 0, "Log list failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("list is JSON");
    let sessions = parsed.as_array().expect("array of sessions");
    assert!(!sessions.is_empty());

    let id = sessions.last().unwrap()["id"].as_i64().unwrap();
    let (stdout, _, code) = run_cli(&["log", "delete", &id.to_string()]);
    assert_eq!(code, 0, "Log delete failed");
    assert!(stdout.contains("deleted"));
}

#[test]
fn test_log_requires_at_least_one_drill() {
    let (_, stderr, code) = run_cli(&["log", "putting", "--date", "2026-01-15"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("at least one drill"));
}

#[test]
fn test_test_tables_and_scorecard() {
    let (stdout, _, code) = run_cli(&["test", "tables"]);
    assert_eq!(code, 0, "Test tables failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("tables are JSON");
    assert!(parsed.get("50 Yards F").is_some());

    let (_, _, code) = run_cli(&["test", "scorecard"]);
    assert_eq!(code, 0, "Test scorecard failed");
}

#[test]
fn test_test_submit_rejects_unknown_shot() {
    let (_, stderr, code) = run_cli(&["test", "submit", "--score", "moon_shot=4"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("unknown shot type"));
}

#[test]
fn test_drill_status() {
    let (_, _, code) = run_cli(&["drill", "status"]);
    assert_eq!(code, 0, "Drill status failed");
}

#[test]
fn test_drill_wedge_ladder_lifecycle() {
    // Make sure no drill is active; cancel fails harmlessly when idle.
    let _ = run_cli(&["drill", "cancel"]);

    let (stdout, _, code) = run_cli(&[
        "drill", "start", "wedge-ladder", "--start", "40", "--end", "60",
    ]);
    assert_eq!(code, 0, "Drill start failed");
    assert!(stdout.contains("targets"));

    let (stdout, _, code) = run_cli(&[
        "drill",
        "submit",
        "--results",
        "40,45,50,55,60",
        "--date",
        "2026-01-16",
    ]);
    assert_eq!(code, 0, "Drill submit failed");
    assert!(stdout.contains("Session saved"));

    let (stdout, _, code) = run_cli(&["drill", "cancel"]);
    assert_eq!(code, 0, "Drill cancel failed");
    assert!(stdout.contains("cancelled"));

    let (_, _, code) = run_cli(&["drill", "history"]);
    assert_eq!(code, 0, "Drill history failed");
}

#[test]
fn test_putting_history_empty_is_ok() {
    let (_, _, code) = run_cli(&["putting", "history", "--test", "lag"]);
    assert_eq!(code, 0, "Putting history failed");

    let (_, stderr, code) = run_cli(&["putting", "history", "--test", "bowling"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("unknown test"));
}

#[test]
fn test_loop_log_and_stats() {
    let (stdout, _, code) = run_cli(&[
        "loop",
        "log",
        "--date",
        "2026-01-17",
        "--h1",
        "6",
        "--h1-fairway",
        "--h2",
        "3",
        "--h2-gir",
        "--h3",
        "5",
    ]);
    assert_eq!(code, 0, "Loop log failed");
    assert!(stdout.contains("total 14 (par 12)"));

    let (stdout, _, code) = run_cli(&["loop", "stats"]);
    assert_eq!(code, 0, "Loop stats failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("stats are JSON");
    assert!(parsed.get("scoring_average").is_some());

    let (_, _, code) = run_cli(&["loop", "list"]);
    assert_eq!(code, 0, "Loop list failed");
}

#[test]
fn test_config_get_set_list() {
    let (_, _, code) = run_cli(&["config", "list"]);
    assert_eq!(code, 0, "Config list failed");

    let (_, _, code) = run_cli(&["config", "set", "trend.moving_average_window", "4"]);
    assert_eq!(code, 0, "Config set failed");

    let (stdout, _, code) = run_cli(&["config", "get", "trend.moving_average_window"]);
    assert_eq!(code, 0, "Config get failed");
    assert_eq!(stdout.trim(), "4");

    let (_, _, code) = run_cli(&["config", "set", "trend.moving_average_window", "3"]);
    assert_eq!(code, 0, "Config reset failed");
}

#[test]
fn test_config_unknown_key_rejected() {
    let (_, stderr, code) = run_cli(&["config", "get", "nope.nothing"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("unknown config key"));
}

#[test]
fn test_drills_list_and_show() {
    let (stdout, _, code) = run_cli(&["drills", "list"]);
    assert_eq!(code, 0, "Drills list failed");
    assert!(stdout.contains("Towel Drill"));

    let (stdout, _, code) = run_cli(&["drills", "show", "towel drill"]);
    assert_eq!(code, 0, "Drills show failed");
    assert!(stdout.contains("Level 1"));
}

#[test]
fn test_goals_show() {
    let (_, _, code) = run_cli(&["goals", "show"]);
    assert_eq!(code, 0, "Goals show failed");
}

#[test]
fn test_completions_generate() {
    let (stdout, _, code) = run_cli(&["completions", "bash"]);
    assert_eq!(code, 0, "Completions failed");
    assert!(stdout.contains("rangelog"));
}
