//! Rendering check results and fix plans through a [`UserInterface`](crate::ui::UserInterface).

pub mod console;
pub mod fix_plan;
pub mod json;

pub use console::{render_detection_header, ConsoleRenderer};
pub use fix_plan::{render_action_report, render_apply_summary, render_fix_plan};
pub use json::JsonReport;

use serde::Serialize;

use crate::checks::{CheckResult, CheckStatus};

/// Number of results per status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    pub pass: usize,
    pub warn: usize,
    pub fail: usize,
    pub info: usize,
    pub not_applicable: usize,
}

impl StatusCounts {
    /// Count every result, hidden or not.
    pub fn tally(results: &[CheckResult]) -> Self {
        let mut counts = Self::default();
        for result in results {
            *counts.slot(result.status) += 1;
        }
        counts
    }

    pub fn get(&self, status: CheckStatus) -> usize {
        match status {
            CheckStatus::Pass => self.pass,
            CheckStatus::Warn => self.warn,
            CheckStatus::Fail => self.fail,
            CheckStatus::Info => self.info,
            CheckStatus::NotApplicable => self.not_applicable,
        }
    }

    fn slot(&mut self, status: CheckStatus) -> &mut usize {
        match status {
            CheckStatus::Pass => &mut self.pass,
            CheckStatus::Warn => &mut self.warn,
            CheckStatus::Fail => &mut self.fail,
            CheckStatus::Info => &mut self.info,
            CheckStatus::NotApplicable => &mut self.not_applicable,
        }
    }
}
