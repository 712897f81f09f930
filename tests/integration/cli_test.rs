//! Integration tests for the termscribe CLI

use std::time::Duration;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::fixture;

/// termscribe with an isolated (initially absent) config file
fn termscribe(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("termscribe").expect("binary should build");
    cmd.env("TERMSCRIBE_CONFIG", config_dir.path().join("config.toml"))
        .env("NO_COLOR", "1");
    cmd
}

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn help_lists_subcommands() {
    let dir = TempDir::new().unwrap();
    termscribe(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("bounce"))
        .stdout(predicate::str::contains("plot"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn run_without_program_is_usage_error() {
    let dir = TempDir::new().unwrap();
    termscribe(&dir)
        .arg("run")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("<PROGRAM>"));
}

// ============================================================================
// Run Tests
// ============================================================================

#[test]
fn run_headless_prints_final_canvas() {
    let dir = TempDir::new().unwrap();
    let expected = [
        "           ",
        "  @ # # #  ",
        "  #     #  ",
        "  #     #  ",
        "  # # # #  ",
    ]
    .join("\n")
        + "\n";

    termscribe(&dir)
        .arg("run")
        .arg(fixture("square.toml"))
        .arg("--headless")
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn run_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    termscribe(&dir)
        .args(["run", "/nonexistent/program.toml", "--headless"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("/nonexistent/program.toml"));
}

#[test]
fn run_invalid_program_reports_reason() {
    let dir = TempDir::new().unwrap();
    termscribe(&dir)
        .arg("run")
        .arg(fixture("bad_color.toml"))
        .arg("--headless")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unknown color 'ultraviolet'"));
}

#[test]
fn run_headless_ignores_scribe_frame_delay() {
    let dir = TempDir::new().unwrap();
    termscribe(&dir)
        .arg("run")
        .arg(fixture("slow.toml"))
        .arg("--headless")
        .timeout(Duration::from_secs(3))
        .assert()
        .success()
        .stdout(predicate::str::contains("*"));
}

#[test]
fn run_rejects_oversized_canvas() {
    let dir = TempDir::new().unwrap();
    let program = dir.path().join("huge.toml");
    std::fs::write(&program, "[canvas]\nwidth = 4294967296\nheight = 4294967296\n").unwrap();

    termscribe(&dir)
        .arg("run")
        .arg(&program)
        .arg("--headless")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("too large"));
}

#[test]
fn bounce_headless_respects_canvas_size() {
    let dir = TempDir::new().unwrap();
    let output = termscribe(&dir)
        .args(["bounce", "--width", "8", "--height", "3", "--steps", "30", "--headless"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines.iter().all(|line| line.chars().count() == 15));
    assert_eq!(stdout.matches('*').count(), 1);
}

#[test]
fn plot_headless_draws_every_column() {
    let dir = TempDir::new().unwrap();
    let output = termscribe(&dir)
        .args(["plot", "--width", "10", "--height", "9", "--amplitude", "2", "--headless"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 9);
    for column in 0..10 {
        let drawn = lines
            .iter()
            .any(|line| matches!(line.chars().nth(column * 2), Some('@') | Some('*')));
        assert!(drawn, "column {} is empty:\n{}", column, stdout);
    }
}

#[test]
fn plot_zero_period_is_usage_error() {
    let dir = TempDir::new().unwrap();
    termscribe(&dir)
        .args(["plot", "--period", "0", "--headless"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("non-zero"));
}

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn config_path_uses_env_override() {
    let dir = TempDir::new().unwrap();
    termscribe(&dir)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn config_init_then_show() {
    let dir = TempDir::new().unwrap();
    termscribe(&dir)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));
    assert!(dir.path().join("config.toml").exists());

    termscribe(&dir)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    termscribe(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[canvas]"))
        .stdout(predicate::str::contains("frame_delay_ms = 50"));
}

#[test]
fn config_file_changes_defaults() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[canvas]\nwidth = 4\nheight = 2\n",
    )
    .unwrap();

    let output = termscribe(&dir)
        .args(["bounce", "--steps", "3", "--headless"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    assert_eq!(stdout.lines().count(), 2);
    assert!(stdout.lines().all(|line| line.chars().count() == 7));
}

#[test]
fn completions_generate_for_bash() {
    let dir = TempDir::new().unwrap();
    termscribe(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("termscribe"));
}
