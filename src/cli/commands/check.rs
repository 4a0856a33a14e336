//! Check command implementation.
//!
//! The `devdoctor check` command detects the project, loads
//! `.devdoctor.yml`, runs the selected checks and renders the results as
//! console text or JSON.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::checks::{failed_required, filter_ignored, Check, CheckContext, CheckRunner, CheckStatus};
use crate::cli::args::CheckArgs;
use crate::config::ConfigLoader;
use crate::detection::ProjectDetector;
use crate::error::Result;
use crate::report::{ConsoleRenderer, JsonReport};
use crate::shell::{ProcessInvoker, SystemInvoker};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::{resolve_path, EXIT_ERROR};

/// The check command implementation.
pub struct CheckCommand {
    working_dir: PathBuf,
    args: CheckArgs,
    invoker: Box<dyn ProcessInvoker>,
}

impl CheckCommand {
    /// Create a new check command probing tools on this machine.
    pub fn new(working_dir: &Path, args: CheckArgs) -> Self {
        Self {
            working_dir: working_dir.to_path_buf(),
            args,
            invoker: Box::new(SystemInvoker::new()),
        }
    }

    /// Use a different process invoker for tool probes.
    pub fn with_invoker(mut self, invoker: Box<dyn ProcessInvoker>) -> Self {
        self.invoker = invoker;
        self
    }

    /// Checks selected by `--system-only` / `--project-only`.
    fn selected_checks(&self) -> Vec<Check> {
        if self.args.system_only {
            Check::system_checks()
        } else if self.args.project_only {
            Check::project_checks()
        } else {
            Check::all()
        }
    }

    fn json(&self) -> bool {
        self.args.json || self.args.json_pretty
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let target = resolve_path(&self.working_dir, self.args.path.as_deref());
        let detection = ProjectDetector::detect(&target);

        let explicit = self
            .args
            .config
            .as_deref()
            .map(|path| resolve_path(&self.working_dir, Some(path)));
        let loaded = match ConfigLoader::load(detection.root(), explicit.as_deref()) {
            Ok(loaded) => loaded,
            Err(e) => {
                ui.error(&format!("Error loading config: {}", e));
                return Ok(CommandResult::failure(EXIT_ERROR));
            }
        };

        if !self.json() {
            match &loaded {
                Some(loaded) => ui.message(&format!("Config: loaded from {}", loaded.path.display())),
                None => ui.message("Config: none"),
            }
        }

        let empty = BTreeSet::new();
        let config = loaded.as_ref().map(|l| &l.config);
        let ignored = config.map_or(&empty, |c| &c.ignore_checks);
        let required = config.map_or(&empty, |c| &c.require_checks);

        let checks = filter_ignored(self.selected_checks(), ignored);
        debug!("Running {} check(s)", checks.len());

        let ctx = CheckContext::new(&target, detection, self.invoker.as_ref());
        let results = CheckRunner::run(&checks, &ctx);
        let failed = failed_required(&results, required);

        if self.json() {
            JsonReport::new(ctx.detection(), &results, loaded.as_ref())
                .render(ui, self.args.json_pretty)?;
        } else {
            let verbose = ui.output_mode().is_verbose();
            ConsoleRenderer::new(self.args.show_na, verbose).render(
                ui,
                ctx.detection(),
                &results,
                &failed,
            );
        }

        let any_fail = results.iter().any(|r| r.status == CheckStatus::Fail);
        if any_fail || !failed.is_empty() {
            Ok(CommandResult::failure(1))
        } else {
            Ok(CommandResult::success())
        }
    }
}
