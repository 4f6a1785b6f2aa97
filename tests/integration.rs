#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};
use tempfile::TempDir;

fn run_hook(project: &Path, args: &[&str], json: &str) -> (String, String, i32) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_python-claude"))
        .args(args)
        .env("CLAUDE_PROJECT_DIR", project)
        .env_remove("PYTHON_CLAUDE_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn");

    if let Some(mut stdin) = child.stdin.take() {
        // Unknown commands exit before reading stdin
        let _ = stdin.write_all(json.as_bytes());
    }

    let output = child.wait_with_output().expect("failed to wait");

    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.code().unwrap_or(-1),
    )
}

/// Point the test check at a shell snippet so no Python tooling is needed
fn configure_test_command(project: &Path, script: &str) {
    let dir = project.join(".claude");
    fs::create_dir_all(&dir).unwrap();
    let config = format!(
        "preset: none\ncommands:\n  test: [sh, -c, {}]\n",
        serde_json::to_string(script).unwrap()
    );
    fs::write(dir.join("quality-hooks.yaml"), config).unwrap();
}

fn edit(project: &Path, file: &str) {
    let json = format!(r#"{{"tool_input":{{"file_path":"{}"}}}}"#, file);
    let (_, _, code) = run_hook(project, &["edited"], &json);
    assert_eq!(code, 0);
}

fn test_tracking_file(project: &Path) -> std::path::PathBuf {
    project.join(".claude/debug/test-files.txt")
}

#[test]
fn test_no_command_prints_usage() {
    let temp = TempDir::new().unwrap();
    let (stdout, stderr, code) = run_hook(temp.path(), &[], "");
    assert_eq!(code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Usage: python-claude <command>"));
    assert!(stderr.contains("Available hooks:"));
}

#[test]
fn test_unknown_command_fails() {
    let temp = TempDir::new().unwrap();
    let (_stdout, stderr, code) = run_hook(temp.path(), &["bogus"], "");
    assert_eq!(code, 1);
    assert!(stderr.contains("Unknown command: bogus"));
    assert!(stderr.contains("session start"));
}

#[test]
fn test_invalid_json_fails() {
    let temp = TempDir::new().unwrap();
    let (_stdout, _stderr, code) = run_hook(temp.path(), &["edited"], "not valid json");
    assert_ne!(code, 0, "Invalid JSON should cause non-zero exit");
}

#[test]
fn test_empty_stdin_is_noop() {
    let temp = TempDir::new().unwrap();
    let (stdout, _stderr, code) = run_hook(temp.path(), &["edited"], "");
    assert_eq!(code, 0);
    assert!(stdout.is_empty());
    assert!(!temp.path().join(".claude").exists());
}

#[test]
fn test_edited_tracks_python_files_once() {
    let temp = TempDir::new().unwrap();
    edit(temp.path(), "/src/app.py");
    edit(temp.path(), "/src/app.py");
    edit(temp.path(), "/src/readme.md");

    let debug = temp.path().join(".claude/debug");
    for name in [
        "edited-files.txt",
        "lint-files.txt",
        "typecheck-files.txt",
        "test-files.txt",
    ] {
        assert_eq!(
            fs::read_to_string(debug.join(name)).unwrap(),
            "/src/app.py\n",
            "{}",
            name
        );
    }
}

#[test]
fn test_session_scoped_tracking() {
    let temp = TempDir::new().unwrap();
    let json = r#"{"session_id":"abc","tool_input":{"file_path":"/src/app.py"}}"#;
    let (_, _, code) = run_hook(temp.path(), &["edited"], json);
    assert_eq!(code, 0);

    let session = temp.path().join(".claude/debug/sessions/abc");
    assert!(session.join("test-files.txt").exists());
    assert!(fs::read_to_string(session.join("hooks.log"))
        .unwrap()
        .contains("[edited] /src/app.py"));
}

#[test]
fn test_toggle_round_trip() {
    let temp = TempDir::new().unwrap();
    let (stdout, _, code) = run_hook(temp.path(), &["toggle", "lint"], "");
    assert_eq!(code, 0);
    assert_eq!(stdout, "Lint is now disabled\n");

    let state = fs::read_to_string(temp.path().join(".claude/quality-checks.json")).unwrap();
    let state: serde_json::Value = serde_json::from_str(&state).unwrap();
    assert_eq!(state, serde_json::json!({"lint": false}));

    let (stdout, _, code) = run_hook(temp.path(), &["toggle", "lint"], "");
    assert_eq!(code, 0);
    assert_eq!(stdout, "Lint is now enabled\n");
}

#[test]
fn test_toggle_unknown_check() {
    let temp = TempDir::new().unwrap();
    let (stdout, stderr, code) = run_hook(temp.path(), &["toggle", "bogus"], "");
    assert_eq!(code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Unknown check: bogus"));
    assert!(stderr.contains("lint, typecheck, test"));
}

#[test]
fn test_session_start_reports_disabled_checks() {
    let temp = TempDir::new().unwrap();
    run_hook(temp.path(), &["disable", "lint"], "");
    run_hook(temp.path(), &["disable", "typecheck"], "");

    let (stdout, _, code) = run_hook(temp.path(), &["session", "start"], "");
    assert_eq!(code, 0);
    assert_eq!(stdout.lines().count(), 1);

    let output: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let context = output["additionalContext"].as_str().unwrap();
    assert!(context.contains("run test check"));
    assert!(!context.contains(" and "));
    assert!(output["systemMessage"]
        .as_str()
        .unwrap()
        .contains("lint, typecheck"));
}

#[test]
fn test_pytest_without_edits_does_nothing() {
    let temp = TempDir::new().unwrap();
    let marker = temp.path().join("ran");
    configure_test_command(temp.path(), &format!("touch {}", marker.display()));

    let (_, _, code) = run_hook(temp.path(), &["pytest"], "");
    assert_eq!(code, 0);
    assert!(!marker.exists());
}

#[test]
fn test_pytest_success_clears_tracking() {
    let temp = TempDir::new().unwrap();
    configure_test_command(temp.path(), "exit 0");
    edit(temp.path(), "/src/app.py");

    let (_, _, code) = run_hook(temp.path(), &["pytest"], "");
    assert_eq!(code, 0);
    assert!(!test_tracking_file(temp.path()).exists());
}

#[test]
fn test_pytest_failure_translated_and_retried() {
    let temp = TempDir::new().unwrap();
    configure_test_command(temp.path(), "exit 1");
    edit(temp.path(), "/src/app.py");

    let (_, _, code) = run_hook(temp.path(), &["pytest"], "");
    assert_eq!(code, 2);
    assert_eq!(
        fs::read_to_string(test_tracking_file(temp.path())).unwrap(),
        "/src/app.py\n"
    );
}

#[test]
fn test_pytest_other_codes_pass_through() {
    let temp = TempDir::new().unwrap();
    configure_test_command(temp.path(), "exit 5");
    edit(temp.path(), "/src/app.py");

    let (_, _, code) = run_hook(temp.path(), &["pytest"], "");
    assert_eq!(code, 5);
    assert!(test_tracking_file(temp.path()).exists());
}

#[test]
fn test_tool_stdout_goes_to_stderr() {
    let temp = TempDir::new().unwrap();
    configure_test_command(temp.path(), "echo 'FAILED test_app.py'; exit 1");
    edit(temp.path(), "/src/app.py");

    let (stdout, stderr, code) = run_hook(temp.path(), &["pytest"], "");
    assert_eq!(code, 2);
    assert!(stdout.is_empty());
    assert!(stderr.contains("FAILED test_app.py"));
}

#[test]
fn test_disabled_check_skips_tool() {
    let temp = TempDir::new().unwrap();
    configure_test_command(temp.path(), "exit 1");
    edit(temp.path(), "/src/app.py");
    run_hook(temp.path(), &["toggle", "test"], "");

    let (_, _, code) = run_hook(temp.path(), &["pytest"], "");
    assert_eq!(code, 0);
    assert!(test_tracking_file(temp.path()).exists());
}

#[test]
fn test_invalid_config_fails() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join(".claude");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("quality-hooks.yaml"), "preset: conda\n").unwrap();

    let (_, stderr, code) = run_hook(temp.path(), &["pytest"], "");
    assert_eq!(code, 1);
    assert!(stderr.contains("unknown preset"));
}

#[test]
fn test_invalid_config_keeps_toggles_working() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join(".claude");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("quality-hooks.yaml"), "preset: conda\n").unwrap();

    let (stdout, stderr, code) = run_hook(temp.path(), &["toggle", "lint"], "");
    assert_eq!(code, 0);
    assert_eq!(stdout, "Lint is now disabled\n");
    assert!(stderr.contains("unknown preset"));

    let (stdout, _, code) = run_hook(temp.path(), &["session", "start"], "");
    assert_eq!(code, 0);
    let output: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(output["systemMessage"].as_str().unwrap().contains("lint"));

    let (_, _, code) = run_hook(temp.path(), &["enable", "lint"], "");
    assert_eq!(code, 0);
}
