//! Descriptive project checks (`project.java`, `project.node`, `project.compose`).

use super::context::CheckContext;
use super::result::{CheckResult, CheckStatus};
use crate::detection::ProjectType;

/// An ecosystem whose presence is reported as INFO.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectInfo {
    Java,
    Node,
    Compose,
}

impl ProjectInfo {
    pub const ALL: [ProjectInfo; 3] = [ProjectInfo::Java, ProjectInfo::Node, ProjectInfo::Compose];

    pub fn id(self) -> &'static str {
        match self {
            ProjectInfo::Java => "project.java",
            ProjectInfo::Node => "project.node",
            ProjectInfo::Compose => "project.compose",
        }
    }

    pub fn run(self, ctx: &CheckContext<'_>) -> CheckResult {
        let detection = ctx.detection();
        let (present, label) = match self {
            ProjectInfo::Java => (detection.has_any(&ProjectType::JAVA), "Java"),
            ProjectInfo::Node => (detection.has(ProjectType::Node), "Node.js"),
            ProjectInfo::Compose => (detection.has(ProjectType::DockerCompose), "Docker Compose"),
        };

        if !present {
            return CheckResult::new(
                self.id(),
                CheckStatus::NotApplicable,
                format!("Not applicable (no {} project detected)", label),
            );
        }

        let summary = match self {
            ProjectInfo::Java => {
                let mut build_tools = Vec::new();
                if detection.has(ProjectType::JavaMaven) {
                    build_tools.push("Maven");
                }
                if detection.has(ProjectType::JavaGradle) {
                    build_tools.push("Gradle");
                }
                format!("Java project detected ({})", build_tools.join(", "))
            }
            ProjectInfo::Node => "Node.js project detected".to_string(),
            ProjectInfo::Compose => "Docker Compose detected".to_string(),
        };
        CheckResult::new(self.id(), CheckStatus::Info, summary)
    }
}
