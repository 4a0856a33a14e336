//! Turns failing check results into a risk-gated fix plan.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::plan::{FixAction, FixPlan};
use crate::checks::{CheckContext, CheckResult, CheckStatus, Risk, SystemTool};
use crate::detection::{file_exists, ProjectType};
use crate::requirements::Ecosystem;
use crate::shell::Platform;

static REQUIREMENT_SUMMARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Required: (.+) \(source: (.+)\), Local: (.+)$").unwrap());

/// Id of the dependency install action for Node projects.
pub const NODE_DEPENDENCIES_ID: &str = "project.node.dependencies";

/// Platform installer commands for system tools.
const INSTALLERS: &[(SystemTool, Platform, &str)] = &[
    (SystemTool::Docker, Platform::Windows, "winget install -e --id Docker.DockerDesktop"),
    (SystemTool::Docker, Platform::MacOS, "brew install --cask docker"),
    (SystemTool::Git, Platform::Windows, "winget install -e --id Git.Git"),
    (SystemTool::Git, Platform::MacOS, "brew install git"),
    (SystemTool::Node, Platform::Windows, "winget install -e --id OpenJS.NodeJS.LTS"),
    (SystemTool::Node, Platform::MacOS, "brew install node"),
    (SystemTool::Java, Platform::Windows, "winget install -e --id EclipseAdoptium.Temurin.21.JDK"),
    (SystemTool::Java, Platform::MacOS, "brew install --cask temurin"),
];

/// Installer command for `tool` on `platform`, if one is known.
pub fn installer_command(tool: SystemTool, platform: Platform) -> Option<&'static str> {
    INSTALLERS
        .iter()
        .find(|(t, p, _)| *t == tool && *p == platform)
        .map(|(_, _, command)| *command)
}

/// Builds fix plans for one platform.
#[derive(Debug, Clone)]
pub struct FixPlanner {
    platform: Platform,
}

impl Default for FixPlanner {
    fn default() -> Self {
        Self::new(Platform::current())
    }
}

impl FixPlanner {
    pub fn new(platform: Platform) -> Self {
        Self { platform }
    }

    /// Plan fixes for `results`.
    ///
    /// Each FAIL id yields at most one action; the first FAIL wins. A Node
    /// project without installed dependencies also gets a SAFE install
    /// action, independent of any result.
    pub fn plan(&self, results: &[CheckResult], ctx: &CheckContext<'_>) -> FixPlan {
        let mut plan = FixPlan::new();

        for result in results.iter().filter(|r| r.status == CheckStatus::Fail) {
            if plan.contains(&result.id) {
                debug!("Skipping duplicate failure {}", result.id);
                continue;
            }

            let action = if result.is_system() {
                Some(self.tool_action(result))
            } else if let Some(name) = requirement_ecosystem(&result.id) {
                Some(requirement_action(result, name, ctx))
            } else {
                None
            };

            if let Some(action) = action {
                debug!("Planned {} ({})", action.id(), action.risk());
                plan.push(action);
            }
        }

        if let Some(action) = node_dependency_action(ctx) {
            debug!("Planned {}", action.id());
            plan.push(action);
        }

        plan
    }

    fn tool_action(&self, result: &CheckResult) -> FixAction {
        let tool = SystemTool::from_id(&result.id);
        let label = tool
            .map(SystemTool::label)
            .unwrap_or_else(|| result.id.trim_start_matches("system."));

        let description = match tool {
            Some(SystemTool::Docker) => "Docker is not installed or not available. \
                Install Docker to enable container-based workflows."
                .to_string(),
            _ => format!("{} is not installed or not available on PATH.", label),
        };

        let mut commands = Vec::new();
        for command in suggestion_commands(result) {
            push_unique(&mut commands, command);
        }
        if let Some(installer) = tool.and_then(|t| installer_command(t, self.platform)) {
            push_unique(&mut commands, installer);
        }

        FixAction::caution(&result.id, format!("Install {}", label), description, commands)
    }
}

/// `project.<name>.requirements` gives `<name>`.
fn requirement_ecosystem(id: &str) -> Option<&str> {
    id.strip_prefix("project.")?
        .strip_suffix(".requirements")
        .filter(|name| !name.is_empty())
}

fn requirement_action(result: &CheckResult, name: &str, ctx: &CheckContext<'_>) -> FixAction {
    let ecosystem = Ecosystem::from_name(name);
    let label = ecosystem.map_or("runtime", Ecosystem::label);

    let parsed = REQUIREMENT_SUMMARY.captures(&result.summary);
    let description = match &parsed {
        Some(caps) => format!(
            "The project requires {} {} (declared in {}), but {} is installed.",
            label, &caps[1], &caps[2], &caps[3]
        ),
        None => format!(
            "The installed {} version does not match the project requirements.",
            label
        ),
    };

    let required = parsed.as_ref().map(|caps| caps[1].to_string()).or_else(|| {
        ecosystem
            .and_then(|eco| eco.read_requirement(ctx.project_root()))
            .map(|req| req.raw_value)
    });

    let mut commands = Vec::new();
    if let (Some(eco), Some(required)) = (ecosystem, required.as_deref()) {
        if let Some(command) = preferred_command(eco, required, ctx) {
            push_unique(&mut commands, &command);
        }
    }
    for command in suggestion_commands(result) {
        push_unique(&mut commands, command);
    }

    FixAction::caution(&result.id, format!("Align {} version", label), description, commands)
}

/// Switch to the pinned version when a pin file exists, else install it.
fn preferred_command(ecosystem: Ecosystem, required: &str, ctx: &CheckContext<'_>) -> Option<String> {
    let root = ctx.project_root();
    match ecosystem {
        Ecosystem::Node => {
            if file_exists(root, ".nvmrc") {
                Some("nvm use".to_string())
            } else {
                (ecosystem.parser())(required).map(|major| format!("nvm install {}", major))
            }
        }
        Ecosystem::Python => {
            if file_exists(root, ".python-version") {
                Some(format!("pyenv shell {}", required))
            } else {
                Some(format!("pyenv install {}", required))
            }
        }
        Ecosystem::Java => {
            if file_exists(root, ".sdkmanrc") {
                Some("sdk env".to_string())
            } else {
                Some("sdk install java".to_string())
            }
        }
        Ecosystem::Go => {
            if file_exists(root, ".go-version") {
                Some(format!("goenv shell {}", required))
            } else {
                Some(format!("go install golang.org/dl/go{}@latest", required))
            }
        }
    }
}

fn node_dependency_action(ctx: &CheckContext<'_>) -> Option<FixAction> {
    let root = ctx.project_root();
    if !ctx.detection().has(ProjectType::Node) || root.join("node_modules").exists() {
        return None;
    }

    let (commands, description) = if file_exists(root, "package-lock.json") {
        (
            vec!["npm".to_string(), "ci".to_string()],
            "node_modules is missing. Install the locked dependencies from package-lock.json.",
        )
    } else {
        (
            vec!["npm".to_string(), "install".to_string()],
            "node_modules is missing. Install the dependencies declared in package.json.",
        )
    };

    Some(FixAction::new(
        NODE_DEPENDENCIES_ID,
        "Install Node.js dependencies",
        description,
        Risk::Safe,
        commands,
        true,
    ))
}

fn suggestion_commands(result: &CheckResult) -> impl Iterator<Item = &str> {
    result
        .suggestions
        .iter()
        .flat_map(|s| s.commands.iter().map(String::as_str))
}

/// Append `candidate` unless it overlaps, by substring, a command already present.
fn push_unique(commands: &mut Vec<String>, candidate: &str) {
    let candidate = candidate.trim();
    if candidate.is_empty()
        || commands
            .iter()
            .any(|c| c.contains(candidate) || candidate.contains(c.as_str()))
    {
        return;
    }
    commands.push(candidate.to_string());
}
