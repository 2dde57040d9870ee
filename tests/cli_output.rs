//! CLI Output Tests
//!
//! - stdout carries exactly one JSON envelope line
//! - Degraded-path log lines (failed signal, failed history write) go to stderr

use std::path::Path;
use std::process::{Command, Output};

use serde_json::{json, Value};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

const OVERRIDE_VARS: [&str; 5] = [
    "MYSTIC_SALT",
    "HOROSCOPE_API_URL",
    "DREAM_API_URL",
    "GOOGLE_SEARCH_API_URL",
    "TIKTOK_API_URL",
];

fn run_generate(temp_dir: &TempDir, config: Value) -> Output {
    let config_path = temp_dir.path().join("config.json");
    std::fs::write(&config_path, config.to_string()).unwrap();

    let mut command = Command::new(env!("CARGO_BIN_EXE_mystic4d"));
    command.arg("generate").arg("--config").arg(&config_path);
    for var in OVERRIDE_VARS {
        command.env_remove(var);
    }
    command.output().unwrap()
}

/// Parse stdout as exactly one envelope line
fn single_envelope(output: &Output) -> Value {
    let stdout = String::from_utf8(output.stdout.clone()).unwrap();
    let lines: Vec<&str> = stdout.lines().filter(|l| !l.trim().is_empty()).collect();
    assert_eq!(lines.len(), 1, "stdout: {}", stdout);
    serde_json::from_str(lines[0]).unwrap()
}

fn history_path(dir: &Path) -> String {
    dir.join("history.json").display().to_string()
}

// =============================================================================
// Degraded Generation
// =============================================================================

/// Port 9 (discard) is closed on test hosts, so the dream source fails.
#[test]
fn test_failed_signal_keeps_stdout_clean() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_generate(
        &temp_dir,
        json!({
            "signals": { "dream_url": "http://127.0.0.1:9/dream", "timeout_ms": 1000 },
            "history": { "path": history_path(temp_dir.path()) },
        }),
    );

    assert!(output.status.success());
    let envelope = single_envelope(&output);
    assert_eq!(envelope["status"], "ok");
    assert_eq!(envelope["data"]["sourceHealth"]["dream"], false);
    assert_eq!(envelope["data"]["recorded"], true);

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("SIGNAL_FAILED"), "stderr: {}", stderr);
}

#[test]
fn test_failed_history_write_keeps_stdout_clean() {
    let temp_dir = TempDir::new().unwrap();
    // A regular file where the history directory should be
    let blocker = temp_dir.path().join("blocker");
    std::fs::write(&blocker, "").unwrap();

    let output = run_generate(
        &temp_dir,
        json!({ "history": { "path": history_path(&blocker) } }),
    );

    assert!(output.status.success());
    let envelope = single_envelope(&output);
    assert_eq!(envelope["status"], "ok");
    assert_eq!(envelope["data"]["recorded"], false);
    assert_eq!(envelope["data"]["number"].as_str().unwrap().len(), 4);

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("HISTORY_WRITE_FAILED"), "stderr: {}", stderr);
}
