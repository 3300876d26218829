//! Integration tests for the fastfit binary.
//!
//! Every test runs against a throwaway config file and data directory so the
//! user's real configuration is never read.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

struct Sandbox {
    dir: TempDir,
    config: PathBuf,
}

impl Sandbox {
    fn new() -> Self {
        Self::with_config("")
    }

    fn with_config(contents: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config = dir.path().join("config.toml");
        fs::write(&config, contents).unwrap();
        Self { dir, config }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("fastfit"));
        cmd.arg("--config")
            .arg(&self.config)
            .arg("--data-dir")
            .arg(self.path().join("data"));
        cmd
    }

    fn plan_json(&self, args: &[&str]) -> serde_json::Value {
        let output = self
            .cmd()
            .arg("plan")
            .arg("--json")
            .args(args)
            .output()
            .unwrap();
        assert!(
            output.status.success(),
            "plan failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        serde_json::from_slice(&output.stdout).unwrap()
    }
}

#[test]
fn test_cli_help() {
    Command::new(assert_cmd::cargo::cargo_bin!("fastfit"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Fasting-aware weekly workout planner",
        ));
}

#[test]
fn test_default_command_prints_plan() {
    let sandbox = Sandbox::new();

    sandbox
        .cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("WEEK 1 PLAN"))
        .stdout(predicate::str::contains("Mon"))
        .stdout(predicate::str::contains("Sun"));
}

#[test]
fn test_plan_json_has_seven_sessions() {
    let sandbox = Sandbox::new();
    let plan = sandbox.plan_json(&[]);

    let sessions = plan["sessions"].as_array().unwrap();
    assert_eq!(sessions.len(), 7);

    let days: Vec<&str> = sessions
        .iter()
        .map(|s| s["weekday"].as_str().unwrap())
        .collect();
    assert_eq!(days, vec!["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);

    assert_eq!(plan["protocol"], "16:8");
    assert_eq!(plan["chronotype"], "normal");
    for session in sessions {
        assert!(!session["exercises"].as_array().unwrap().is_empty());
    }
}

#[test]
fn test_plan_overrides_apply() {
    let sandbox = Sandbox::new();
    let plan = sandbox.plan_json(&[
        "--chronotype",
        "late",
        "--protocol",
        "18:6",
        "--eat-start",
        "13:00",
        "--week",
        "5",
        "--categories",
        "cardio,yoga",
    ]);

    assert_eq!(plan["chronotype"], "late");
    assert_eq!(plan["protocol"], "18:6");
    assert_eq!(plan["adaptation_week"], 5);

    for session in plan["sessions"].as_array().unwrap() {
        let category = session["category"].as_str().unwrap();
        assert!(category == "cardio" || category == "yoga", "{}", category);
    }
}

#[test]
fn test_profile_from_config_file() {
    let sandbox = Sandbox::with_config(
        r#"
[profile]
chronotype = "early"
adaptation_week = 3
"#,
    );
    let plan = sandbox.plan_json(&[]);

    assert_eq!(plan["chronotype"], "early");
    assert_eq!(plan["adaptation_week"], 3);
}

#[test]
fn test_progression_from_config_file() {
    let sandbox = Sandbox::with_config(
        r#"
[progression.cardio]
base = 10
step = 0
ceiling = 10
"#,
    );
    let plan = sandbox.plan_json(&["--categories", "cardio"]);

    for session in plan["sessions"].as_array().unwrap() {
        assert_eq!(session["duration_minutes"], 10);
    }
}

#[test]
fn test_invalid_rest_hours_fails() {
    let sandbox = Sandbox::new();

    sandbox
        .cmd()
        .args(["plan", "--rest-hours", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("min_rest_hours"));
}

#[test]
fn test_invalid_week_fails() {
    let sandbox = Sandbox::new();

    sandbox
        .cmd()
        .args(["plan", "--week", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("adaptation_week"));
}

#[test]
fn test_unknown_chronotype_rejected() {
    let sandbox = Sandbox::new();

    sandbox
        .cmd()
        .args(["plan", "--chronotype", "owl"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("owl"));
}

#[test]
fn test_bad_protocol_rejected() {
    let sandbox = Sandbox::new();

    sandbox
        .cmd()
        .args(["plan", "--protocol", "16:9"])
        .assert()
        .failure();
}

#[test]
fn test_invalid_custom_exercise_fails() {
    let sandbox = Sandbox::with_config(
        r#"
[[exercises.custom]]
category = "cardio"
id = "rowing"
name = "Rowing intervals"
tiers = []
"#,
    );

    sandbox
        .cmd()
        .arg("plan")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Catalog validation errors"));
}

#[test]
fn test_show_without_saved_plan() {
    let sandbox = Sandbox::new();

    sandbox
        .cmd()
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved plan found"));
}

#[test]
fn test_save_then_show() {
    let sandbox = Sandbox::new();

    sandbox
        .cmd()
        .args(["plan", "--save"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Plan saved"));

    assert!(sandbox
        .path()
        .join("data/plans/last_plan.json")
        .exists());

    sandbox
        .cmd()
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved plan"))
        .stdout(predicate::str::contains("WEEK 1 PLAN"));
}

#[test]
fn test_corrupt_saved_plan_is_treated_as_missing() {
    let sandbox = Sandbox::new();
    let plans = sandbox.path().join("data/plans");
    fs::create_dir_all(&plans).unwrap();
    fs::write(plans.join("last_plan.json"), "garbage").unwrap();

    sandbox
        .cmd()
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved plan found"));
}

#[test]
fn test_export_csv() {
    let sandbox = Sandbox::new();
    sandbox.cmd().args(["plan", "--save"]).assert().success();

    let output = sandbox.path().join("plan.csv");
    sandbox
        .cmd()
        .args(["export", "--format", "csv", "--output"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 7 sessions"));

    let contents = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 8);
    assert!(lines[0].starts_with("weekday,start,end,category"));
    assert!(lines[1].starts_with("Mon,"));
}

#[test]
fn test_export_json() {
    let sandbox = Sandbox::new();
    sandbox.cmd().args(["plan", "--save"]).assert().success();

    let output = sandbox.path().join("out/plan.json");
    sandbox
        .cmd()
        .args(["export", "--format", "json", "--output"])
        .arg(&output)
        .assert()
        .success();

    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert!(saved["id"].is_string());
    assert!(saved["generated_at"].is_string());
    assert_eq!(saved["plan"]["sessions"].as_array().unwrap().len(), 7);
}

#[test]
fn test_export_without_saved_plan_fails() {
    let sandbox = Sandbox::new();

    sandbox
        .cmd()
        .args(["export", "--output"])
        .arg(sandbox.path().join("plan.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("No saved plan"));
}

#[test]
fn test_chronotypes_lists_all_profiles() {
    let sandbox = Sandbox::new();

    sandbox
        .cmd()
        .arg("chronotypes")
        .assert()
        .success()
        .stdout(predicate::str::contains("early"))
        .stdout(predicate::str::contains("normal"))
        .stdout(predicate::str::contains("late"))
        .stdout(predicate::str::contains("06:00-07:00"));
}

#[test]
fn test_plan_is_deterministic() {
    let sandbox = Sandbox::new();
    let first = sandbox.plan_json(&["--week", "2"]);
    let second = sandbox.plan_json(&["--week", "2"]);
    assert_eq!(first, second);
}
