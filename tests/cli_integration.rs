//! CLI integration tests for the project board
//!
//! These drive the `board` binary through scripts, value checks and
//! configuration commands.

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Get a command instance for the board binary
fn board_cmd() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("board"));
    cmd.env_remove("BOARD_LOG");
    cmd
}

/// Writes a script into a fresh directory
fn script(source: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("board.txt");
    fs::write(&path, source).unwrap();
    (dir, path)
}

fn json_stdout(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

// =============================================================================
// Script Tests
// =============================================================================

#[test]
fn test_run_adds_and_lists_projects() {
    let (dir, path) = script("add Build API | Design the REST API | 3\n");

    board_cmd()
        .current_dir(dir.path())
        .arg("run")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created project: p-"))
        .stdout(predicate::str::contains("ACTIVE PROJECTS (1)"))
        .stdout(predicate::str::contains("Build API (3 people assigned)"))
        .stdout(predicate::str::contains("FINISHED PROJECTS (0)"));
}

#[test]
fn test_run_moves_project_by_position() {
    let (dir, path) = script(
        "add Build API | Design the REST API | 3\n\
         add Write docs | Document every endpoint | 2\n\
         move #1 finished\n",
    );

    board_cmd()
        .current_dir(dir.path())
        .arg("run")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Moved p-"))
        .stdout(predicate::str::contains("ACTIVE PROJECTS (1)"))
        .stdout(predicate::str::contains("FINISHED PROJECTS (1)"));
}

#[test]
fn test_run_reads_stdin() {
    board_cmd()
        .args(["run", "-"])
        .write_stdin("add Build API | Design the REST API | 2\nlist\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("ACTIVE PROJECTS (1)"));
}

#[test]
fn test_run_invalid_input_alerts_and_continues() {
    let (dir, path) = script(
        "add Build API | short | 3\n\
         add Write docs | Document every endpoint | 2\n",
    );

    board_cmd()
        .current_dir(dir.path())
        .arg("run")
        .arg(&path)
        .assert()
        .success()
        .stderr(predicate::str::contains("Invalid input, please try again!"))
        .stdout(predicate::str::contains("ACTIVE PROJECTS (1)"))
        .stdout(predicate::str::contains("Write docs"))
        .stdout(predicate::str::contains("Build API").not());
}

#[test]
fn test_run_people_bounds_are_strict() {
    let (dir, path) = script(
        "add One | Long enough description | 1\n\
         add Six | Long enough description | 6\n\
         add Two | Long enough description | 2\n\
         add Five | Long enough description | 5\n",
    );

    let output = board_cmd()
        .current_dir(dir.path())
        .args(["--format", "json", "run"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let report = json_stdout(&output);
    let titles: Vec<&str> = report["active"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Two", "Five"]);
}

#[test]
fn test_run_json_report() {
    let (dir, path) = script(
        "add Build API | Design the REST API | 3\n\
         move #1 finished\n\
         move #1 finished\n\
         move #9 active\n",
    );

    let output = board_cmd()
        .current_dir(dir.path())
        .args(["run", "--format", "json"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let report = json_stdout(&output);
    // One add and one real move; unchanged and missing moves are silent
    assert_eq!(report["notifications"], 2);
    assert_eq!(report["active"].as_array().unwrap().len(), 0);
    assert_eq!(report["finished"][0]["status"], "finished");
    assert_eq!(report["finished"][0]["people"], 3);

    let events = report["events"].as_array().unwrap();
    assert_eq!(events[0]["event"], "added");
    assert_eq!(events[1]["outcome"], "moved");
    assert_eq!(events[2]["outcome"], "unchanged");
    assert_eq!(events[3]["outcome"], "not_found");
    assert!(events[3]["id"].is_null());
}

#[test]
fn test_run_parse_error_fails_before_running() {
    let (dir, path) = script(
        "add Build API | Design the REST API | 3\n\
         archive #1\n",
    );

    board_cmd()
        .current_dir(dir.path())
        .arg("run")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2: unknown command 'archive'"))
        .stdout(predicate::str::contains("Created project").not());
}

#[test]
fn test_run_missing_script_fails() {
    let dir = TempDir::new().unwrap();

    board_cmd()
        .current_dir(dir.path())
        .args(["run", "missing.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read script"));
}

#[test]
fn test_run_uses_project_input_rules() {
    let (dir, path) = script("add Tiny | Short | 3\n");
    fs::create_dir_all(dir.path().join(".board")).unwrap();
    fs::write(
        dir.path().join(".board/config.toml"),
        "[input]\ndescription_min_length = 2\n",
    )
    .unwrap();

    board_cmd()
        .current_dir(dir.path())
        .arg("run")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("ACTIVE PROJECTS (1)"));
}

#[test]
fn test_verbose_flag_logs_to_stderr() {
    let (dir, path) = script("add Build API | short | 3\n");

    board_cmd()
        .current_dir(dir.path())
        .args(["--verbose", "run"])
        .arg(&path)
        .assert()
        .success()
        .stderr(predicate::str::contains("DEBUG"));
}

// =============================================================================
// Check Tests
// =============================================================================

#[test]
fn test_check_valid_value() {
    board_cmd()
        .args(["check", "Build API", "--required", "--min-length", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("valid"));
}

#[test]
fn test_check_min_length_is_strict() {
    board_cmd()
        .args(["check", "abcde", "--min-length", "5"])
        .assert()
        .failure();

    board_cmd()
        .args(["check", "abcdef", "--min-length", "5"])
        .assert()
        .success();
}

#[test]
fn test_check_numeric_bounds() {
    board_cmd()
        .args(["check", "3", "--number", "--min", "1", "--max", "6"])
        .assert()
        .success();

    board_cmd()
        .args(["check", "6", "--number", "--min", "1", "--max", "6"])
        .assert()
        .failure();
}

#[test]
fn test_check_reads_numbers_like_the_form() {
    // Blank is zero, which passes `required`
    board_cmd()
        .args(["check", "", "--number", "--required"])
        .assert()
        .success();

    // Unparsable is NaN, which fails any bound
    board_cmd()
        .args(["check", "three", "--number", "--min", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: invalid"));
}

#[test]
fn test_check_json_output() {
    let output = board_cmd()
        .args(["--format", "json", "check", "", "--required"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let result = json_stdout(&output);
    assert_eq!(result["valid"], false);
    assert_eq!(result["value"], "");
}

// =============================================================================
// Config Tests
// =============================================================================

#[test]
fn test_init_creates_config() {
    let dir = TempDir::new().unwrap();

    board_cmd()
        .arg("init")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized board"));

    assert!(dir.path().join(".board/config.toml").is_file());
}

#[test]
fn test_init_is_idempotent() {
    let dir = TempDir::new().unwrap();
    board_cmd().arg("init").arg(dir.path()).assert().success();

    let config = dir.path().join(".board/config.toml");
    fs::write(&config, "[input]\npeople_max = 9\n").unwrap();

    board_cmd().arg("init").arg(dir.path()).assert().success();
    assert_eq!(
        fs::read_to_string(&config).unwrap(),
        "[input]\npeople_max = 9\n"
    );
}

#[test]
fn test_config_shows_project_settings() {
    let dir = TempDir::new().unwrap();
    board_cmd().arg("init").arg(dir.path()).assert().success();

    board_cmd()
        .current_dir(dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("# project root:"))
        .stdout(predicate::str::contains("description_min_length = 5"));
}

#[test]
fn test_invalid_config_is_rejected() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join(".board")).unwrap();
    fs::write(
        dir.path().join(".board/config.toml"),
        "[input]\npeople_min = 3\npeople_max = 4\n",
    )
    .unwrap();

    board_cmd()
        .current_dir(dir.path())
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}
