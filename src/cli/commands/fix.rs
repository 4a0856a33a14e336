//! Fix command implementation.
//!
//! The `devdoctor fix` command runs every check, prints a fix plan and, with
//! `--apply`, runs the SAFE applyable actions after confirmation. CAUTION
//! actions are only ever printed.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::checks::{filter_ignored, Check, CheckContext, CheckRunner};
use crate::cli::args::FixArgs;
use crate::config::ConfigLoader;
use crate::detection::ProjectDetector;
use crate::error::Result;
use crate::fix::{read_confirmation, FixApplier, FixPlan, FixPlanner, APPLY_TIMEOUT};
use crate::report::{render_action_report, render_apply_summary, render_fix_plan};
use crate::shell::{Platform, ProcessInvoker, SystemInvoker};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::{resolve_path, EXIT_ERROR};

/// The fix command implementation.
pub struct FixCommand {
    working_dir: PathBuf,
    args: FixArgs,
    platform: Platform,
    probe_invoker: Box<dyn ProcessInvoker>,
    apply_invoker: Box<dyn ProcessInvoker>,
    input: RefCell<Box<dyn BufRead>>,
}

impl FixCommand {
    /// Create a new fix command for this machine, confirming on stdin.
    pub fn new(working_dir: &Path, args: FixArgs) -> Self {
        Self {
            working_dir: working_dir.to_path_buf(),
            args,
            platform: Platform::current(),
            probe_invoker: Box::new(SystemInvoker::new()),
            apply_invoker: Box::new(SystemInvoker::with_timeout(APPLY_TIMEOUT)),
            input: RefCell::new(Box::new(io::BufReader::new(io::stdin()))),
        }
    }

    /// Use different invokers for tool probes and for applying fixes.
    pub fn with_invokers(
        mut self,
        probe: Box<dyn ProcessInvoker>,
        apply: Box<dyn ProcessInvoker>,
    ) -> Self {
        self.probe_invoker = probe;
        self.apply_invoker = apply;
        self
    }

    /// Read the confirmation answer from `input`.
    pub fn with_input(mut self, input: Box<dyn BufRead>) -> Self {
        self.input = RefCell::new(input);
        self
    }

    /// Plan for this platform instead of the host.
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    fn apply(&self, ui: &mut dyn UserInterface, plan: &FixPlan, root: &Path) -> CommandResult {
        let count = plan.applyable().count();
        if count == 0 {
            ui.message("");
            ui.message("No SAFE actions to apply.");
            return CommandResult::success();
        }

        if !self.args.yes {
            debug!("Asking for confirmation (interactive: {})", ui.is_interactive());
            ui.message("");
            ui.prompt(&format!("Apply {} safe fix(es)? (y/n): ", count));
            let confirmed = read_confirmation(&mut **self.input.borrow_mut());
            if !confirmed {
                ui.warning("Cancelled.");
                return CommandResult::success();
            }
        }

        ui.message("");
        ui.show_header("Applying fixes:");
        ui.message("==============");

        let applier = FixApplier::new(self.apply_invoker.as_ref(), root);
        let summary = applier.apply_with(plan, |report| render_action_report(ui, report));
        render_apply_summary(ui, &summary, plan);

        if summary.has_skipped() {
            CommandResult::failure(1)
        } else {
            CommandResult::success()
        }
    }
}

impl Command for FixCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let target = resolve_path(&self.working_dir, self.args.path.as_deref());
        let detection = ProjectDetector::detect(&target);

        let config = match ConfigLoader::load_from_project_root(detection.root()) {
            Ok(config) => config,
            Err(e) => {
                ui.error(&format!("Error loading config: {}", e));
                return Ok(CommandResult::failure(EXIT_ERROR));
            }
        };

        let empty = BTreeSet::new();
        let ignored = config.as_ref().map_or(&empty, |c| &c.ignore_checks);
        let checks = filter_ignored(Check::all(), ignored);

        let ctx = CheckContext::new(&target, detection, self.probe_invoker.as_ref());
        let results = CheckRunner::run(&checks, &ctx);

        let plan = FixPlanner::new(self.platform).plan(&results, &ctx);
        debug!("Planned {} action(s)", plan.len());

        if self.args.yes && !self.args.apply {
            ui.message("Note: --yes has no effect without --apply.");
        }

        render_fix_plan(ui, &plan);

        if !self.args.apply {
            return Ok(CommandResult::success());
        }

        Ok(self.apply(ui, &plan, ctx.project_root()))
    }
}
