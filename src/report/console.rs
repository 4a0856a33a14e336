//! Human-readable check report.

use std::collections::BTreeSet;

use super::StatusCounts;
use crate::checks::{CheckResult, CheckStatus};
use crate::detection::DetectionResult;
use crate::ui::UserInterface;

/// Print the project root and detected type labels.
pub fn render_detection_header(ui: &mut dyn UserInterface, detection: &DetectionResult) {
    ui.message(&format!("Project root: {}", detection.root().display()));
    ui.message("Detected project types:");
    if detection.is_empty() {
        ui.message("  None");
    } else {
        for project_type in detection.types() {
            ui.message(&format!("  - {}", project_type.label()));
        }
    }
}

/// Console renderer for check results.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleRenderer {
    /// Show NOT_APPLICABLE results.
    pub show_na: bool,
    /// Show details and suggestions under each result.
    pub verbose: bool,
}

impl ConsoleRenderer {
    pub fn new(show_na: bool, verbose: bool) -> Self {
        Self { show_na, verbose }
    }

    /// Render the full report. Counts include hidden results.
    pub fn render(
        &self,
        ui: &mut dyn UserInterface,
        detection: &DetectionResult,
        results: &[CheckResult],
        failed_required: &BTreeSet<String>,
    ) {
        render_detection_header(ui, detection);
        ui.message("");

        // Anything outside `project.` is grouped with system checks.
        let (project, system): (Vec<&CheckResult>, Vec<&CheckResult>) =
            results.iter().partition(|r| r.id.starts_with("project."));

        self.render_group(ui, "System checks", &system);
        self.render_group(ui, "Project checks", &project);
        self.render_summary(ui, results, failed_required);
    }

    fn visible(&self, result: &CheckResult) -> bool {
        self.show_na || result.status != CheckStatus::NotApplicable
    }

    fn render_group(&self, ui: &mut dyn UserInterface, title: &str, group: &[&CheckResult]) {
        let visible: Vec<_> = group.iter().filter(|r| self.visible(r)).collect();
        if visible.is_empty() {
            return;
        }

        ui.show_header(title);
        for result in visible {
            ui.check_line(result.status, &result.id, &result.summary);
            if self.verbose {
                render_verbose(ui, result);
            }
        }
    }

    fn render_summary(
        &self,
        ui: &mut dyn UserInterface,
        results: &[CheckResult],
        failed_required: &BTreeSet<String>,
    ) {
        let counts = StatusCounts::tally(results);
        let mut line = format!(
            "Summary: PASS={} WARN={} FAIL={} INFO={}",
            counts.pass, counts.warn, counts.fail, counts.info
        );
        if !failed_required.is_empty() {
            let ids: Vec<&str> = failed_required.iter().map(String::as_str).collect();
            line.push_str(&format!(" Required checks failed: {}", ids.join(", ")));
        }
        ui.message(&line);

        if self.verbose {
            return;
        }
        if counts.fail > 0 {
            ui.message("Next steps: re-run with --verbose to see details and suggestions.");
        } else if counts.warn > 0 {
            ui.message("Next steps: re-run with --verbose to see recommendations.");
        }
    }
}

fn render_verbose(ui: &mut dyn UserInterface, result: &CheckResult) {
    if let Some(details) = result.details.as_deref().filter(|d| !d.is_empty()) {
        ui.message(&format!("  {}", details));
    }
    for suggestion in &result.suggestions {
        for command in &suggestion.commands {
            ui.message(&format!("  > {}", command));
        }
        if !suggestion.message.is_empty() {
            ui.message(&format!("  {}", suggestion.message));
        }
    }
}
