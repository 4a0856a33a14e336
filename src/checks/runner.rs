//! Sequential check execution and post-run filtering.

use std::collections::BTreeSet;

use tracing::debug;

use super::context::CheckContext;
use super::result::{CheckResult, CheckStatus};
use super::Check;

/// Runs checks in order against one context.
pub struct CheckRunner;

impl CheckRunner {
    /// Run every check, returning results in the same order.
    pub fn run(checks: &[Check], ctx: &CheckContext<'_>) -> Vec<CheckResult> {
        checks
            .iter()
            .map(|check| {
                let result = check.run(ctx);
                debug!("{} -> {}", result.id, result.status);
                result
            })
            .collect()
    }
}

/// Drop checks whose id is ignored.
pub fn filter_ignored(checks: Vec<Check>, ignored: &BTreeSet<String>) -> Vec<Check> {
    checks
        .into_iter()
        .filter(|check| {
            let keep = !ignored.contains(check.id());
            if !keep {
                debug!("Ignoring check {}", check.id());
            }
            keep
        })
        .collect()
}

/// Ids of required checks that failed.
pub fn failed_required(results: &[CheckResult], required: &BTreeSet<String>) -> BTreeSet<String> {
    results
        .iter()
        .filter(|r| r.status == CheckStatus::Fail && required.contains(&r.id))
        .map(|r| r.id.clone())
        .collect()
}
