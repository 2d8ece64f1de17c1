//! CLI behavior tests: exit codes, output file, JSON summary, init.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const SAMPLE_BUGS: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/test-data/bugs.json");

fn bugboard_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_bugboard"));
    cmd.current_dir(dir.path()).env("NO_COLOR", "1");
    cmd
}

#[test]
fn missing_input_reports_and_exits_0() {
    let dir = TempDir::new().unwrap();
    bugboard_cmd(&dir)
        .assert()
        .success()
        .stderr(predicate::str::contains("Could not find bugs.json"))
        .stderr(predicate::str::contains("Make sure"));
    assert!(!dir.path().join("qa-dashboard.html").exists());
}

#[test]
fn generates_dashboard_from_input_argument() {
    let dir = TempDir::new().unwrap();
    bugboard_cmd(&dir)
        .arg(SAMPLE_BUGS)
        .assert()
        .success()
        .stderr(predicate::str::contains("Loaded 3 bug reports"))
        .stderr(predicate::str::contains("Stats: 3 bugs across 3 titles"));

    let html = fs::read_to_string(dir.path().join("qa-dashboard.html")).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert_eq!(html.matches("class=\"bug-card\"").count(), 3);
    assert!(html.contains("https://www.youtube.com/embed/abc123"));
    assert!(html.contains("https://www.youtube.com/embed/xyz789"));
}

#[test]
fn default_input_in_working_directory() {
    let dir = TempDir::new().unwrap();
    fs::copy(SAMPLE_BUGS, dir.path().join("bugs.json")).unwrap();
    bugboard_cmd(&dir).assert().success();
    assert!(dir.path().join("qa-dashboard.html").exists());
}

#[test]
fn output_flag_creates_parent_dirs() {
    let dir = TempDir::new().unwrap();
    bugboard_cmd(&dir)
        .arg(SAMPLE_BUGS)
        .arg("-o")
        .arg("site/index.html")
        .assert()
        .success();
    assert!(dir.path().join("site/index.html").exists());
}

#[test]
fn json_summary_valid() {
    let dir = TempDir::new().unwrap();
    let output = bugboard_cmd(&dir)
        .arg(SAMPLE_BUGS)
        .arg("--json")
        .arg("--quiet")
        .output()
        .unwrap();
    assert!(output.status.success());
    let s = String::from_utf8_lossy(&output.stdout);
    let v: serde_json::Value = serde_json::from_str(s.trim()).expect("valid JSON");
    assert_eq!(v["total"], 3);
    assert_eq!(v["uniqueGames"], 3);
    assert_eq!(v["types"][0]["key"], "ai");
    assert_eq!(v["types"][0]["count"], 2);
}

#[test]
fn quiet_suppresses_info() {
    let dir = TempDir::new().unwrap();
    bugboard_cmd(&dir)
        .arg(SAMPLE_BUGS)
        .arg("-q")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn second_run_leaves_output_unchanged() {
    let dir = TempDir::new().unwrap();
    bugboard_cmd(&dir).arg(SAMPLE_BUGS).assert().success();
    let first = fs::read(dir.path().join("qa-dashboard.html")).unwrap();

    bugboard_cmd(&dir)
        .arg(SAMPLE_BUGS)
        .assert()
        .success()
        .stderr(predicate::str::contains("is up to date"));
    let second = fs::read(dir.path().join("qa-dashboard.html")).unwrap();
    assert_eq!(first, second);

    bugboard_cmd(&dir)
        .arg(SAMPLE_BUGS)
        .arg("--force")
        .assert()
        .success()
        .stderr(predicate::str::contains("Dashboard written to"));
}

#[test]
fn malformed_input_exit_2() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("bugs.json"), "[{\"id\": 1,").unwrap();
    bugboard_cmd(&dir)
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid bug data"));
}

#[test]
fn missing_explicit_config_exit_2() {
    let dir = TempDir::new().unwrap();
    bugboard_cmd(&dir)
        .arg("--config")
        .arg("nope.json")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn config_supplies_paths_and_profile() {
    let dir = TempDir::new().unwrap();
    fs::copy(SAMPLE_BUGS, dir.path().join("data.json")).unwrap();
    fs::write(
        dir.path().join(".bugboardrc.json"),
        r#"{"input": "data.json", "output": "out/board.html", "profile": {"name": "Ada Byron"}}"#,
    )
    .unwrap();
    bugboard_cmd(&dir).assert().success();
    let html = fs::read_to_string(dir.path().join("out/board.html")).unwrap();
    assert!(html.contains("Ada Byron"));
}

#[test]
fn duplicate_ids_warn_but_succeed() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("bugs.json"),
        r#"[{"id": "7", "game": "ds3"}, {"id": 7, "game": "ds3"}]"#,
    )
    .unwrap();
    bugboard_cmd(&dir)
        .assert()
        .success()
        .stderr(predicate::str::contains("bug id 7 appears 2 times; ids should be unique"));
}

#[test]
fn key_named_all_warns_but_succeeds() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("bugs.json"),
        r#"[{"id": "1", "type": "all"}, {"id": "2", "type": "ai"}]"#,
    )
    .unwrap();
    bugboard_cmd(&dir)
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "type key \"all\" is reserved for the All Bugs filter",
        ));
}

#[test]
fn shadowed_key_warns() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("bugs.json"),
        r#"[{"id": "1", "game": "ds3", "type": "ds3"}]"#,
    )
    .unwrap();
    bugboard_cmd(&dir)
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "filter key \"ds3\" is also a type key; its control only matches the game cards",
        ));
}

#[test]
fn init_creates_config() {
    let dir = TempDir::new().unwrap();
    bugboard_cmd(&dir)
        .arg("init")
        .arg("--name")
        .arg("Ada Byron")
        .assert()
        .success();
    let path = dir.path().join(".bugboardrc.json");
    let content = fs::read_to_string(&path).unwrap();
    let v: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(v["profile"]["name"], "Ada Byron");
    assert_eq!(v["input"], "bugs.json");
}

#[test]
fn init_does_not_overwrite() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".bugboardrc.json"), "{}").unwrap();
    bugboard_cmd(&dir)
        .arg("init")
        .assert()
        .success()
        .stderr(predicate::str::contains("already exists"));
    assert_eq!(
        fs::read_to_string(dir.path().join(".bugboardrc.json")).unwrap(),
        "{}"
    );
}
