//! Integration tests for the devdoctor binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn devdoctor() -> Command {
    let mut cmd = Command::new(cargo_bin("devdoctor"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn node_project() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("package.json"), r#"{"name": "demo"}"#).unwrap();
    temp
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    devdoctor()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("toolchain"))
        .stdout(predicate::str::contains("detect"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("fix"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    devdoctor()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_requires_subcommand() -> Result<(), Box<dyn std::error::Error>> {
    devdoctor().assert().failure().code(2);
    Ok(())
}

#[test]
fn detect_lists_project_types() -> Result<(), Box<dyn std::error::Error>> {
    let temp = node_project();
    fs::write(temp.path().join("go.mod"), "module example.com/demo\n")?;

    devdoctor()
        .arg("detect")
        .arg("--path")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Detected project types:"))
        .stdout(predicate::str::contains("  - Node.js"))
        .stdout(predicate::str::contains("  - Go (modules)"));
    Ok(())
}

#[test]
fn detect_from_subdirectory_finds_root() -> Result<(), Box<dyn std::error::Error>> {
    let temp = node_project();
    let nested = temp.path().join("src").join("lib");
    fs::create_dir_all(&nested)?;

    devdoctor()
        .current_dir(&nested)
        .arg("detect")
        .assert()
        .success()
        .stdout(predicate::str::contains("  - Node.js"));
    Ok(())
}

#[test]
fn detect_empty_directory_reports_none() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;

    devdoctor()
        .arg("detect")
        .arg("--path")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("  None"));
    Ok(())
}

#[test]
fn check_json_is_parseable() -> Result<(), Box<dyn std::error::Error>> {
    let temp = node_project();

    let output = devdoctor()
        .args(["check", "--json", "--path"])
        .arg(temp.path())
        .output()?;

    assert!(matches!(output.status.code(), Some(0) | Some(1)));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(report["tool"]["name"], "devdoctor");
    assert_eq!(report["tool"]["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(report["project"]["types"][0], "Node.js");
    assert!(report.get("config").is_none());

    let checks = report["checks"].as_array().unwrap();
    assert_eq!(checks.len(), 11);
    let counted: u64 = ["pass", "warn", "fail", "info", "notApplicable"]
        .iter()
        .map(|key| report["summary"][key].as_u64().unwrap())
        .sum();
    assert_eq!(counted, 11);
    Ok(())
}

#[test]
fn check_json_includes_loaded_config() -> Result<(), Box<dyn std::error::Error>> {
    let temp = node_project();
    fs::write(
        temp.path().join(".devdoctor.yml"),
        "ignore_checks:\n  - system.docker\nrequire_checks:\n  - system.git\n",
    )?;

    let output = devdoctor()
        .args(["check", "--json-pretty", "--path"])
        .arg(temp.path())
        .output()?;

    let report: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(report["config"]["ignoreChecks"][0], "system.docker");
    assert_eq!(report["config"]["requireChecks"][0], "system.git");
    let ids: Vec<&str> = report["checks"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|c| c["id"].as_str())
        .collect();
    assert!(!ids.contains(&"system.docker"));
    Ok(())
}

#[test]
fn check_console_prints_groups() -> Result<(), Box<dyn std::error::Error>> {
    let temp = node_project();

    devdoctor()
        .args(["check", "--system-only", "--no-color", "--path"])
        .arg(temp.path())
        .assert()
        .stdout(predicate::str::contains("Config: none"))
        .stdout(predicate::str::contains("System checks"))
        .stdout(predicate::str::contains("system.git"))
        .stdout(predicate::str::contains("Summary:"));
    Ok(())
}

#[test]
fn check_missing_config_exits_two() -> Result<(), Box<dyn std::error::Error>> {
    let temp = node_project();

    devdoctor()
        .current_dir(temp.path())
        .args(["check", "--config", "missing.yml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error loading config"));
    Ok(())
}

#[test]
fn check_invalid_config_exits_two() -> Result<(), Box<dyn std::error::Error>> {
    let temp = node_project();
    fs::write(temp.path().join(".devdoctor.yml"), "ports: [99999]\n")?;

    devdoctor()
        .args(["check", "--path"])
        .arg(temp.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error loading config"));
    Ok(())
}

#[test]
fn check_scope_flags_conflict() -> Result<(), Box<dyn std::error::Error>> {
    devdoctor()
        .args(["check", "--system-only", "--project-only"])
        .assert()
        .code(2);
    Ok(())
}

#[test]
fn fix_without_apply_only_plans() -> Result<(), Box<dyn std::error::Error>> {
    let temp = node_project();

    devdoctor()
        .args(["fix", "--path"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("[SAFE] Install Node.js dependencies"))
        .stdout(predicate::str::contains("    - npm install"))
        .stdout(predicate::str::contains("Applying fixes:").not());
    assert!(!temp.path().join("node_modules").exists());
    Ok(())
}

#[test]
fn fix_yes_without_apply_prints_note() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;

    devdoctor()
        .args(["fix", "--yes", "--path"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Note: --yes has no effect without --apply.",
        ));
    Ok(())
}

#[test]
fn fix_apply_declined_is_cancelled() -> Result<(), Box<dyn std::error::Error>> {
    let temp = node_project();

    devdoctor()
        .args(["fix", "--apply", "--path"])
        .arg(temp.path())
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Apply 1 safe fix(es)? (y/n): "))
        .stdout(predicate::str::contains("Cancelled."));
    assert!(!temp.path().join("node_modules").exists());
    Ok(())
}
