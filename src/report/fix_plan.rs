//! Fix plan and apply output.

use crate::checks::Risk;
use crate::fix::{ActionReport, ApplyOutcome, ApplySummary, FixAction, FixPlan};
use crate::ui::UserInterface;

/// Print the plan, system fixes first.
pub fn render_fix_plan(ui: &mut dyn UserInterface, plan: &FixPlan) {
    if plan.is_empty() {
        ui.success("No fixes needed. All checks passed.");
        return;
    }

    ui.show_header("Fix Plan:");
    ui.message("=========");
    ui.message("");
    ui.message(&format!(
        "Fix plan summary: SAFE={} CAUTION={}",
        plan.count(Risk::Safe),
        plan.count(Risk::Caution)
    ));
    ui.message("");

    let (system, project): (Vec<&FixAction>, Vec<&FixAction>) =
        plan.actions().iter().partition(|a| a.is_system());

    if !system.is_empty() {
        ui.show_header("System fixes:");
        ui.message("------------");
        for action in &system {
            render_action(ui, action);
        }
        ui.message("");
    }

    if !project.is_empty() {
        ui.show_header("Project fixes:");
        ui.message("-------------");
        for action in &project {
            render_action(ui, action);
        }
    }
}

fn render_action(ui: &mut dyn UserInterface, action: &FixAction) {
    ui.message("");
    ui.message(&format!("[{}] {}", action.risk(), action.title()));
    ui.message(&format!("  ID: {}", action.id()));
    ui.message(&format!("  Description: {}", action.description()));

    let commands = action.display_commands();
    if !commands.is_empty() {
        ui.message("  Commands:");
        for command in commands {
            ui.message(&format!("    - {}", command));
        }
    }

    let status = if action.risk() == Risk::Caution {
        "Suggestion only (not applied by DevDoctor)"
    } else if action.applyable() {
        "Can be applied automatically"
    } else {
        "Manual action required"
    };
    ui.message(&format!("  Status: {}", status));
}

/// Print one applied or skipped action. Failure detail goes to stderr.
pub fn render_action_report(ui: &mut dyn UserInterface, report: &ActionReport) {
    match &report.outcome {
        ApplyOutcome::Applied => ui.message(&format!("  Applied: {}", report.title)),
        ApplyOutcome::Skipped {
            stderr: Some(stderr),
            ..
        } => {
            ui.error(&format!("  Command failed: {}", report.command));
            ui.error(&format!("  Error: {}", stderr));
            ui.message(&format!(
                "  Skipped: {} (command execution failed)",
                report.title
            ));
        }
        ApplyOutcome::Skipped {
            reason,
            stderr: None,
        } => {
            ui.error(&format!("  Error applying {}: {}", report.title, reason));
            ui.message(&format!("  Skipped: {}", report.title));
        }
    }
}

/// Print the apply totals and the CAUTION actions left for the user.
pub fn render_apply_summary(ui: &mut dyn UserInterface, summary: &ApplySummary, plan: &FixPlan) {
    ui.message("");
    ui.message(&format!(
        "Summary: {} applied, {} skipped",
        summary.applied(),
        summary.skipped()
    ));

    let caution: Vec<&FixAction> = plan.caution().collect();
    if !caution.is_empty() {
        ui.message("");
        ui.message(&format!(
            "Note: {} CAUTION action(s) were not applied:",
            caution.len()
        ));
        for action in caution {
            ui.message(&format!("  - {}", action.title()));
        }
    }
}
