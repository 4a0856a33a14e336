//! Checks: environment facts turned into typed results.
//!
//! The set of checks is closed. [`Check`] names one of them and knows how to
//! run it; every check returns a [`CheckResult`] and never an error.

pub mod context;
pub mod project_info;
pub mod requirement;
pub mod result;
pub mod runner;
pub mod system;

pub use context::CheckContext;
pub use project_info::ProjectInfo;
pub use requirement::{requirement_check_id, run_requirement_check};
pub use result::{CheckResult, CheckStatus, Risk, Suggestion};
pub use runner::{failed_required, filter_ignored, CheckRunner};
pub use system::SystemTool;

use crate::requirements::Ecosystem;

/// One of the known checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Check {
    /// `system.<tool>`: is the tool on PATH.
    SystemTool(SystemTool),
    /// `project.<ecosystem>`: descriptive INFO.
    ProjectInfo(ProjectInfo),
    /// `project.<ecosystem>.requirements`: declared vs installed version.
    Requirement(Ecosystem),
}

impl Check {
    /// Stable check id.
    pub fn id(&self) -> &'static str {
        match self {
            Check::SystemTool(tool) => tool.id(),
            Check::ProjectInfo(info) => info.id(),
            Check::Requirement(ecosystem) => requirement_check_id(*ecosystem),
        }
    }

    /// Run the check.
    pub fn run(&self, ctx: &CheckContext<'_>) -> CheckResult {
        match self {
            Check::SystemTool(tool) => tool.run(ctx),
            Check::ProjectInfo(info) => info.run(ctx),
            Check::Requirement(ecosystem) => run_requirement_check(*ecosystem, ctx),
        }
    }

    /// System checks: java, git, node, docker.
    pub fn system_checks() -> Vec<Check> {
        SystemTool::ALL.into_iter().map(Check::SystemTool).collect()
    }

    /// Project info checks followed by requirement checks.
    pub fn project_checks() -> Vec<Check> {
        ProjectInfo::ALL
            .into_iter()
            .map(Check::ProjectInfo)
            .chain(Ecosystem::ALL.into_iter().map(Check::Requirement))
            .collect()
    }

    /// System checks, then project checks.
    pub fn all() -> Vec<Check> {
        let mut checks = Self::system_checks();
        checks.extend(Self::project_checks());
        checks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_checks_in_order() {
        let ids: Vec<_> = Check::all().iter().map(Check::id).collect();
        assert_eq!(
            ids,
            vec![
                "system.java",
                "system.git",
                "system.node",
                "system.docker",
                "project.java",
                "project.node",
                "project.compose",
                "project.node.requirements",
                "project.python.requirements",
                "project.go.requirements",
                "project.java.requirements",
            ]
        );
    }

    #[test]
    fn ids_are_namespaced() {
        for check in Check::all() {
            let id = check.id();
            assert!(id.starts_with("system.") || id.starts_with("project."), "{}", id);
        }
        assert!(Check::system_checks().iter().all(|c| c.id().starts_with("system.")));
        assert!(Check::project_checks().iter().all(|c| c.id().starts_with("project.")));
    }
}
