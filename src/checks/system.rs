//! System tool presence checks (`system.*`).

use std::sync::LazyLock;

use regex::Regex;

use super::context::CheckContext;
use super::result::{CheckResult, CheckStatus, Suggestion};
use crate::shell::ExecOutput;

static JAVA_VERSION_OUTPUT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"version "([^"]+)""#).unwrap());

/// A tool that should be on PATH.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SystemTool {
    Java,
    Git,
    Node,
    Docker,
}

impl SystemTool {
    /// Every tool, in check order.
    pub const ALL: [SystemTool; 4] = [
        SystemTool::Java,
        SystemTool::Git,
        SystemTool::Node,
        SystemTool::Docker,
    ];

    /// Check id, e.g. `system.git`.
    pub fn id(self) -> &'static str {
        match self {
            SystemTool::Java => "system.java",
            SystemTool::Git => "system.git",
            SystemTool::Node => "system.node",
            SystemTool::Docker => "system.docker",
        }
    }

    /// Human-readable tool name.
    pub fn label(self) -> &'static str {
        match self {
            SystemTool::Java => "Java",
            SystemTool::Git => "Git",
            SystemTool::Node => "Node.js",
            SystemTool::Docker => "Docker",
        }
    }

    /// Find the tool for a `system.*` check id.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.id() == id)
    }

    fn probe(self) -> &'static [&'static str] {
        match self {
            SystemTool::Java => &["java", "-version"],
            SystemTool::Git => &["git", "--version"],
            SystemTool::Node => &["node", "-v"],
            SystemTool::Docker => &["docker", "--version"],
        }
    }

    fn install_hint(self) -> &'static str {
        match self {
            SystemTool::Java => {
                "Install Java from https://adoptium.net/ or your system package manager"
            }
            SystemTool::Git => {
                "Install Git from https://git-scm.com/downloads or your system package manager"
            }
            SystemTool::Node => {
                "Install Node.js from https://nodejs.org/ or your system package manager"
            }
            SystemTool::Docker => {
                "Install Docker from https://www.docker.com/get-started or your system package manager"
            }
        }
    }

    fn extract_version(self, output: &ExecOutput) -> Option<String> {
        match self {
            // `java -version` reports on stderr.
            SystemTool::Java => extract_java_version(&output.stderr),
            SystemTool::Node => {
                let version = output.stdout.trim();
                (!version.is_empty()).then(|| version.to_string())
            }
            // "git version 2.43.0"
            SystemTool::Git => output.stdout.split_whitespace().nth(2).map(str::to_string),
            // "Docker version 24.0.7, build afdd53b"
            SystemTool::Docker => output
                .stdout
                .split_whitespace()
                .nth(2)
                .map(|v| v.replace(',', "")),
        }
    }

    /// Probe the tool and report whether it is available.
    pub fn run(self, ctx: &CheckContext<'_>) -> CheckResult {
        let label = self.label();
        match ctx.invoker().exec(self.probe(), None) {
            Ok(output) if output.success() => {
                let summary = match self.extract_version(&output) {
                    Some(version) => format!("{} is available ({})", label, version),
                    None => format!("{} is available", label),
                };
                CheckResult::new(self.id(), CheckStatus::Pass, summary)
            }
            Ok(output) => self.missing(format!(
                "{} command returned non-zero exit code: {}",
                label,
                describe_exit(&output)
            )),
            Err(err) => self.missing(format!("{} not found: {}", label, err)),
        }
    }

    fn missing(self, details: String) -> CheckResult {
        CheckResult::new(
            self.id(),
            CheckStatus::Fail,
            format!("{} not found", self.label()),
        )
        .with_details(details)
        .with_suggestion(Suggestion::hint(self.install_hint()))
    }
}

/// Version from `java -version` output, e.g. `17.0.9` from `openjdk version "17.0.9"`.
pub(crate) fn extract_java_version(output: &str) -> Option<String> {
    JAVA_VERSION_OUTPUT
        .captures(output)
        .map(|caps| caps[1].to_string())
}

/// Exit code for messages; a signal-killed process has none.
pub(crate) fn describe_exit(output: &ExecOutput) -> String {
    output
        .exit_code
        .map_or_else(|| "none (terminated by signal)".to_string(), |code| code.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::DetectionResult;
    use crate::shell::FakeInvoker;
    use std::path::PathBuf;

    fn context(invoker: &FakeInvoker) -> CheckContext<'_> {
        let detection = DetectionResult::new(PathBuf::from("/p"), Default::default(), Vec::new());
        CheckContext::new("/p", detection, invoker)
    }

    #[test]
    fn java_reads_version_from_stderr() {
        let invoker = FakeInvoker::new();
        invoker.set_output(
            "java",
            0,
            "",
            "openjdk version \"17.0.9\" 2023-10-17\nOpenJDK Runtime Environment",
        );

        let result = SystemTool::Java.run(&context(&invoker));
        assert_eq!(result.status, CheckStatus::Pass);
        assert_eq!(result.summary, "Java is available (17.0.9)");
    }

    #[test]
    fn git_takes_third_token() {
        let invoker = FakeInvoker::new();
        invoker.set_output("git", 0, "git version 2.43.0\n", "");

        let result = SystemTool::Git.run(&context(&invoker));
        assert_eq!(result.summary, "Git is available (2.43.0)");
    }

    #[test]
    fn docker_strips_trailing_comma() {
        let invoker = FakeInvoker::new();
        invoker.set_output("docker", 0, "Docker version 24.0.7, build afdd53b\n", "");

        let result = SystemTool::Docker.run(&context(&invoker));
        assert_eq!(result.status, CheckStatus::Pass);
        assert_eq!(result.summary, "Docker is available (24.0.7)");
    }

    #[test]
    fn node_without_output_is_still_available() {
        let invoker = FakeInvoker::new();
        invoker.set_output("node", 0, "", "");

        let result = SystemTool::Node.run(&context(&invoker));
        assert_eq!(result.status, CheckStatus::Pass);
        assert_eq!(result.summary, "Node.js is available");
    }

    #[test]
    fn missing_tool_fails_with_install_hint() {
        let invoker = FakeInvoker::new();

        let result = SystemTool::Docker.run(&context(&invoker));
        assert_eq!(result.status, CheckStatus::Fail);
        assert_eq!(result.summary, "Docker not found");
        assert!(result.details.as_deref().unwrap().starts_with("Docker not found: "));
        assert_eq!(result.suggestions.len(), 1);
        assert!(result.suggestions[0].message.contains("docker.com/get-started"));
        assert!(result.suggestions[0].commands.is_empty());
    }

    #[test]
    fn non_zero_exit_fails() {
        let invoker = FakeInvoker::new();
        invoker.set_output("git", 128, "", "fatal");

        let result = SystemTool::Git.run(&context(&invoker));
        assert_eq!(result.status, CheckStatus::Fail);
        assert_eq!(
            result.details.as_deref(),
            Some("Git command returned non-zero exit code: 128")
        );
    }

    #[test]
    fn timeout_fails() {
        let invoker = FakeInvoker::new();
        invoker.set_timeout("java");

        let result = SystemTool::Java.run(&context(&invoker));
        assert_eq!(result.status, CheckStatus::Fail);
        assert!(result.details.unwrap().contains("timed out"));
    }

    #[test]
    fn from_id_round_trips() {
        for tool in SystemTool::ALL {
            assert_eq!(SystemTool::from_id(tool.id()), Some(tool));
        }
        assert_eq!(SystemTool::from_id("system.rust"), None);
    }
}
