//! Applying SAFE fix actions.

use std::io::BufRead;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{debug, info, warn};

use super::plan::{FixAction, FixPlan};
use crate::error::DoctorError;
use crate::shell::ProcessInvoker;

/// Bound for a single applied fix. Dependency installs outlast the probe bound.
pub const APPLY_TIMEOUT: Duration = Duration::from_secs(600);

/// What happened to one action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied,
    Skipped {
        /// Why the action did not complete.
        reason: String,
        /// Captured stderr when the command ran and exited non-zero.
        /// `None` when it could not be run at all.
        stderr: Option<String>,
    },
}

/// Outcome of one action, in plan order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionReport {
    pub id: String,
    pub title: String,
    pub command: String,
    pub outcome: ApplyOutcome,
}

impl ActionReport {
    pub fn applied(&self) -> bool {
        self.outcome == ApplyOutcome::Applied
    }
}

/// Result of applying a plan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplySummary {
    pub reports: Vec<ActionReport>,
}

impl ApplySummary {
    pub fn applied(&self) -> usize {
        self.reports.iter().filter(|r| r.applied()).count()
    }

    pub fn skipped(&self) -> usize {
        self.reports.len() - self.applied()
    }

    pub fn has_skipped(&self) -> bool {
        self.skipped() > 0
    }
}

/// Runs applyable actions in the project root, once each, in plan order.
pub struct FixApplier<'a> {
    invoker: &'a dyn ProcessInvoker,
    working_dir: PathBuf,
}

impl<'a> FixApplier<'a> {
    pub fn new(invoker: &'a dyn ProcessInvoker, working_dir: impl AsRef<Path>) -> Self {
        Self {
            invoker,
            working_dir: working_dir.as_ref().to_path_buf(),
        }
    }

    /// Apply every applyable action in `plan`. CAUTION actions are never run.
    pub fn apply(&self, plan: &FixPlan) -> ApplySummary {
        self.apply_with(plan, |_| {})
    }

    /// Like [`apply`](Self::apply), calling `on_report` after each action.
    pub fn apply_with(&self, plan: &FixPlan, mut on_report: impl FnMut(&ActionReport)) -> ApplySummary {
        let mut reports = Vec::new();
        for action in plan.applyable() {
            let report = ActionReport {
                id: action.id().to_string(),
                title: action.title().to_string(),
                command: action.commands().join(" "),
                outcome: self.apply_action(action),
            };
            on_report(&report);
            reports.push(report);
        }
        ApplySummary { reports }
    }

    /// Run one action. Failures are reported, not returned.
    pub fn apply_action(&self, action: &FixAction) -> ApplyOutcome {
        if !action.applyable() {
            return ApplyOutcome::Skipped {
                reason: format!("{} requires manual action", action.id()),
                stderr: None,
            };
        }

        let argv: Vec<&str> = action.commands().iter().map(String::as_str).collect();
        info!("Applying {}: {}", action.id(), argv.join(" "));

        match self.invoker.exec(&argv, Some(&self.working_dir)) {
            Ok(output) if output.success() => {
                debug!("{} applied", action.id());
                ApplyOutcome::Applied
            }
            Ok(output) => {
                let err = DoctorError::CommandFailed {
                    command: argv.join(" "),
                    code: output.exit_code,
                };
                warn!("{}", err);
                ApplyOutcome::Skipped {
                    reason: err.to_string(),
                    stderr: Some(output.stderr.trim().to_string()),
                }
            }
            Err(e) => {
                warn!("{} could not run: {}", action.id(), e);
                ApplyOutcome::Skipped {
                    reason: DoctorError::from(e).to_string(),
                    stderr: None,
                }
            }
        }
    }
}

/// Read one line and accept `y` or `yes` in any case. EOF declines.
pub fn read_confirmation(input: &mut dyn BufRead) -> bool {
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => false,
        Ok(_) => matches!(line.trim().to_lowercase().as_str(), "y" | "yes"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::Risk;
    use crate::shell::FakeInvoker;
    use std::io::Cursor;

    fn npm_ci() -> FixAction {
        FixAction::new(
            "project.node.dependencies",
            "Install Node.js dependencies",
            "",
            Risk::Safe,
            vec!["npm".to_string(), "ci".to_string()],
            true,
        )
    }

    fn docker() -> FixAction {
        FixAction::caution(
            "system.docker",
            "Install Docker",
            "",
            vec!["brew install --cask docker".to_string()],
        )
    }

    fn plan_of(actions: Vec<FixAction>) -> FixPlan {
        let mut plan = FixPlan::new();
        for action in actions {
            plan.push(action);
        }
        plan
    }

    #[test]
    fn runs_safe_action_once_as_argv() {
        let invoker = FakeInvoker::new();
        invoker.set_output("npm", 0, "added 10 packages", "");

        let summary = FixApplier::new(&invoker, "/project").apply(&plan_of(vec![npm_ci()]));

        assert_eq!(summary.applied(), 1);
        assert!(!summary.has_skipped());
        assert_eq!(invoker.calls(), vec![vec!["npm".to_string(), "ci".to_string()]]);
    }

    #[test]
    fn failed_action_does_not_block_later_actions() {
        let migrate = FixAction::new(
            "project.db.migrate",
            "Run migrations",
            "",
            Risk::Safe,
            vec!["migrate".to_string(), "up".to_string()],
            true,
        );
        let invoker = FakeInvoker::new();
        invoker.set_output("migrate", 1, "", "connection refused");
        invoker.set_output("npm", 0, "", "");

        let summary = FixApplier::new(&invoker, "/project").apply(&plan_of(vec![migrate, npm_ci()]));

        assert_eq!(summary.applied(), 1);
        assert_eq!(summary.skipped(), 1);
        assert_eq!(
            invoker.calls(),
            vec![
                vec!["migrate".to_string(), "up".to_string()],
                vec!["npm".to_string(), "ci".to_string()],
            ]
        );
        let ids: Vec<&str> = summary.reports.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["project.db.migrate", "project.node.dependencies"]);
        assert!(!summary.reports[0].applied());
        assert!(summary.reports[1].applied());
    }

    #[test]
    fn commands_run_in_working_directory() {
        let invoker = FakeInvoker::new();
        invoker.set_output("npm", 0, "", "");

        FixApplier::new(&invoker, "/project").apply(&plan_of(vec![npm_ci()]));

        let calls = invoker.calls_with_cwd();
        assert_eq!(calls[0].1.as_deref(), Some(Path::new("/project")));
    }

    #[test]
    fn caution_actions_never_run() {
        let invoker = FakeInvoker::new();
        invoker.set_output("npm", 0, "", "");
        invoker.set_output("brew", 0, "", "");

        let summary = FixApplier::new(&invoker, "/project").apply(&plan_of(vec![docker(), npm_ci()]));

        assert_eq!(summary.reports.len(), 1);
        assert!(!invoker.was_called_with(&["brew", "install", "--cask", "docker"]));
        assert_eq!(invoker.calls().len(), 1);
    }

    #[test]
    fn non_zero_exit_is_skipped_with_stderr() {
        let invoker = FakeInvoker::new();
        invoker.set_output("npm", 1, "", "npm ERR! missing lockfile\n");

        let summary = FixApplier::new(&invoker, "/project").apply(&plan_of(vec![npm_ci()]));

        assert_eq!(summary.skipped(), 1);
        let report = &summary.reports[0];
        assert_eq!(report.command, "npm ci");
        match &report.outcome {
            ApplyOutcome::Skipped { reason, stderr } => {
                assert!(reason.contains("npm ci"));
                assert_eq!(stderr.as_deref(), Some("npm ERR! missing lockfile"));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn missing_program_is_skipped_not_retried() {
        let invoker = FakeInvoker::new();

        let summary = FixApplier::new(&invoker, "/project").apply(&plan_of(vec![npm_ci()]));

        assert!(summary.has_skipped());
        assert!(matches!(
            &summary.reports[0].outcome,
            ApplyOutcome::Skipped { stderr: None, .. }
        ));
        assert_eq!(invoker.calls().len(), 1);
    }

    #[test]
    fn apply_with_reports_each_action() {
        let invoker = FakeInvoker::new();
        invoker.set_output("npm", 0, "", "");

        let mut seen = Vec::new();
        FixApplier::new(&invoker, "/project")
            .apply_with(&plan_of(vec![npm_ci()]), |report| seen.push(report.title.clone()));

        assert_eq!(seen, ["Install Node.js dependencies"]);
    }

    #[test]
    fn apply_action_refuses_guidance() {
        let invoker = FakeInvoker::new();
        let outcome = FixApplier::new(&invoker, "/project").apply_action(&docker());

        assert!(matches!(outcome, ApplyOutcome::Skipped { .. }));
        assert!(invoker.calls().is_empty());
    }

    #[test]
    fn confirmation_accepts_y_and_yes() {
        for answer in ["y\n", "yes\n", "  YES \n", "Y"] {
            assert!(read_confirmation(&mut Cursor::new(answer)), "{:?}", answer);
        }
    }

    #[test]
    fn confirmation_declines_everything_else() {
        for answer in ["", "\n", "n\n", "no\n", "yep\n"] {
            assert!(!read_confirmation(&mut Cursor::new(answer)), "{:?}", answer);
        }
    }
}
