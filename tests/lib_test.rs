//! Library integration tests.

use std::collections::BTreeSet;
use std::fs;

use devdoctor::checks::{
    failed_required, filter_ignored, Check, CheckContext, CheckRunner, CheckStatus,
};
use devdoctor::config::ConfigLoader;
use devdoctor::detection::{ProjectDetector, ProjectType};
use devdoctor::fix::{FixApplier, FixPlanner};
use devdoctor::report::{JsonReport, StatusCounts};
use devdoctor::shell::{FakeInvoker, Platform};
use devdoctor::DoctorError;
use tempfile::TempDir;

fn machine() -> FakeInvoker {
    let invoker = FakeInvoker::new();
    invoker.set_output("java", 0, "", "openjdk version \"17.0.9\" 2023-10-17");
    invoker.set_output("git", 0, "git version 2.43.0\n", "");
    invoker.set_output("node", 0, "v18.19.0\n", "");
    invoker
}

#[test]
fn error_types_are_public() {
    let err = DoctorError::ConfigValidationError {
        message: "'ports' must be a sequence".into(),
    };
    assert!(err.to_string().contains("ports"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> devdoctor::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use devdoctor::cli::{Cli, Commands};

    let cli = Cli::parse_from(["devdoctor", "check", "--json", "--show-na"]);
    match cli.command {
        Commands::Check(args) => {
            assert!(args.json);
            assert!(args.show_na);
        }
        other => panic!("expected check, got {:?}", other),
    }
}

#[test]
fn every_check_produces_exactly_one_result() {
    let temp = TempDir::new().unwrap();
    let invoker = machine();
    let ctx = CheckContext::new(temp.path(), ProjectDetector::detect(temp.path()), &invoker);

    let checks = Check::all();
    let results = CheckRunner::run(&checks, &ctx);

    assert_eq!(results.len(), checks.len());
    for (check, result) in checks.iter().zip(&results) {
        assert_eq!(check.id(), result.id);
    }

    let counts = StatusCounts::tally(&results);
    assert_eq!(
        counts.pass + counts.warn + counts.fail + counts.info + counts.not_applicable,
        results.len()
    );
}

#[test]
fn outdated_node_flows_from_detection_to_plan() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("package.json"), "{}").unwrap();
    fs::write(temp.path().join(".nvmrc"), "v20\n").unwrap();
    let nested = temp.path().join("packages").join("web");
    fs::create_dir_all(&nested).unwrap();

    let detection = ProjectDetector::detect(&nested);
    assert!(detection.has(ProjectType::Node));

    let invoker = machine();
    let ctx = CheckContext::new(&nested, detection, &invoker);
    let results = CheckRunner::run(&Check::all(), &ctx);

    let requirement = results
        .iter()
        .find(|r| r.id == "project.node.requirements")
        .unwrap();
    assert_eq!(requirement.status, CheckStatus::Fail);

    let plan = FixPlanner::new(Platform::MacOS).plan(&results, &ctx);
    let ids: Vec<&str> = plan.actions().iter().map(|a| a.id()).collect();
    assert!(ids.contains(&"project.node.requirements"));
    assert!(ids.contains(&"system.docker"));
    assert!(ids.contains(&"project.node.dependencies"));
    assert!(plan.caution().all(|a| !a.applyable()));
}

#[test]
fn config_drives_ignored_and_required_checks() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(".devdoctor.yml"),
        "ignore_checks: [system.java]\nrequire_checks: [system.docker]\nports: [3000]\n",
    )
    .unwrap();

    let config = ConfigLoader::load_from_project_root(temp.path())
        .unwrap()
        .unwrap();
    assert_eq!(config.ports, vec![3000]);

    let checks = filter_ignored(Check::system_checks(), &config.ignore_checks);
    assert!(checks.iter().all(|c| c.id() != "system.java"));

    let invoker = machine();
    let ctx = CheckContext::new(temp.path(), ProjectDetector::detect(temp.path()), &invoker);
    let results = CheckRunner::run(&checks, &ctx);

    let failed = failed_required(&results, &config.require_checks);
    assert_eq!(failed, BTreeSet::from(["system.docker".to_string()]));
}

#[test]
fn applying_a_plan_runs_only_safe_commands() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("package.json"), "{}").unwrap();

    let probes = FakeInvoker::new();
    let ctx = CheckContext::new(temp.path(), ProjectDetector::detect(temp.path()), &probes);
    let results = CheckRunner::run(&Check::all(), &ctx);
    let plan = FixPlanner::new(Platform::Linux).plan(&results, &ctx);
    assert!(plan.len() > 1);

    let runner = FakeInvoker::new();
    runner.set_output("npm", 0, "", "");
    let summary = FixApplier::new(&runner, temp.path()).apply(&plan);

    assert_eq!(summary.applied(), 1);
    assert!(!summary.has_skipped());
    assert_eq!(runner.calls(), vec![vec!["npm".to_string(), "install".to_string()]]);
}

#[test]
fn json_report_serializes_checks() {
    let temp = TempDir::new().unwrap();
    let invoker = machine();
    let ctx = CheckContext::new(temp.path(), ProjectDetector::detect(temp.path()), &invoker);
    let results = CheckRunner::run(&Check::system_checks(), &ctx);

    let json = JsonReport::new(ctx.detection(), &results, None)
        .to_json(false)
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["summary"]["pass"], 3);
    assert_eq!(value["summary"]["fail"], 1);
    assert_eq!(value["checks"][3]["id"], "system.docker");
    assert_eq!(value["checks"][3]["status"], "FAIL");
}
