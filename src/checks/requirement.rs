//! Requirement checks (`project.<ecosystem>.requirements`).
//!
//! Compare the version a project declares with the toolchain on PATH. A
//! missing tool or an unparsable version on either side is WARN; only a
//! definite mismatch is FAIL.

use tracing::debug;

use super::context::CheckContext;
use super::result::{CheckResult, CheckStatus, Risk, Suggestion};
use super::system::{describe_exit, extract_java_version};
use crate::detection::ProjectType;
use crate::requirements::{
    go_comparable_unit, parse_node_version, parse_python_ordinal, parse_python_version,
    satisfies_requirement, Ecosystem, Requirement,
};

/// Check id for an ecosystem's requirement check.
pub fn requirement_check_id(ecosystem: Ecosystem) -> &'static str {
    match ecosystem {
        Ecosystem::Node => "project.node.requirements",
        Ecosystem::Python => "project.python.requirements",
        Ecosystem::Java => "project.java.requirements",
        Ecosystem::Go => "project.go.requirements",
    }
}

/// Summary shape shared by PASS and FAIL results. The fix planner parses it.
pub fn requirement_summary(requirement: &Requirement, local: &str) -> String {
    format!(
        "Required: {} (source: {}), Local: {}",
        requirement.raw_value, requirement.source_file, local
    )
}

/// Run the requirement check for `ecosystem`.
pub fn run_requirement_check(ecosystem: Ecosystem, ctx: &CheckContext<'_>) -> CheckResult {
    let id = requirement_check_id(ecosystem);
    let label = ecosystem.label();

    if !is_applicable(ecosystem, ctx) {
        return CheckResult::new(
            id,
            CheckStatus::NotApplicable,
            format!("Not applicable (no {} project detected)", label),
        );
    }

    let Some(requirement) = ecosystem.read_requirement(ctx.project_root()) else {
        return CheckResult::new(
            id,
            CheckStatus::Info,
            format!("No {} version requirement specified", label),
        );
    };

    let local = match local_version(ecosystem, ctx) {
        Ok(local) => local,
        Err(reason) => {
            return CheckResult::new(id, CheckStatus::Warn, format!("{} not found", label))
                .with_details(format!(
                    "{}. Required: {} (source: {})",
                    reason, requirement.raw_value, requirement.source_file
                ));
        }
    };

    let summary = requirement_summary(&requirement, &local);

    let Some(required_major) = requirement.parsed_major else {
        return CheckResult::new(id, CheckStatus::Warn, "Required version format not recognized")
            .with_details(summary);
    };
    let Some(local_major) = (ecosystem.parser())(&local) else {
        return CheckResult::new(id, CheckStatus::Warn, "Local version format not recognized")
            .with_details(summary);
    };

    let satisfied = is_satisfied(ecosystem, &requirement, &local, required_major, local_major);
    debug!(
        "{}: required {} ({}), local {} ({}), satisfied: {}",
        id, requirement.raw_value, required_major, local, local_major, satisfied
    );

    if satisfied {
        return CheckResult::new(id, CheckStatus::Pass, summary);
    }

    let details = match ecosystem {
        Ecosystem::Java => format!(
            "Version mismatch: required minimum major {}, local major {}",
            required_major, local_major
        ),
        _ => format!(
            "Version mismatch: required major {}, local major {}",
            required_major, local_major
        ),
    };

    CheckResult::new(id, CheckStatus::Fail, summary)
        .with_details(details)
        .with_suggestion(mismatch_suggestion(ecosystem, &requirement, required_major))
}

fn is_applicable(ecosystem: Ecosystem, ctx: &CheckContext<'_>) -> bool {
    let detection = ctx.detection();
    match ecosystem {
        Ecosystem::Node => detection.has(ProjectType::Node),
        Ecosystem::Python => detection.has_any(&ProjectType::PYTHON),
        Ecosystem::Java => detection.has_any(&ProjectType::JAVA),
        Ecosystem::Go => detection.has(ProjectType::GoModules),
    }
}

fn is_satisfied(
    ecosystem: Ecosystem,
    requirement: &Requirement,
    local: &str,
    required_major: u32,
    local_major: u32,
) -> bool {
    let raw = requirement.raw_value.as_str();
    let minimum = raw.trim().starts_with(">=");

    match ecosystem {
        Ecosystem::Node => satisfies_requirement(raw, local, parse_node_version),
        // The general helper compares the major only; Python compares
        // major.minor ordinals when both sides have them.
        Ecosystem::Python => match (parse_python_ordinal(raw), parse_python_ordinal(local)) {
            (Some(required), Some(installed)) if minimum => installed >= required,
            (Some(required), Some(installed)) => installed == required,
            _ if minimum => satisfies_requirement(raw, local, parse_python_version),
            _ => required_major == local_major,
        },
        // Java requirements are minimums.
        Ecosystem::Java => local_major >= required_major,
        Ecosystem::Go => satisfies_requirement(&format!("go {}", raw), local, go_comparable_unit),
    }
}

fn mismatch_suggestion(ecosystem: Ecosystem, requirement: &Requirement, major: u32) -> Suggestion {
    match ecosystem {
        Ecosystem::Node => Suggestion::new(
            format!(
                "Install/use Node.js {}.x via nvm or your system package manager",
                major
            ),
            vec![format!("nvm install {}", major)],
            Risk::Safe,
        ),
        Ecosystem::Python => Suggestion::new(
            format!(
                "Install/use Python {}.x via pyenv or your system package manager",
                major
            ),
            vec![format!("pyenv install {}", requirement.raw_value)],
            Risk::Safe,
        ),
        Ecosystem::Java => Suggestion::hint(format!(
            "Install/use Java {} via https://adoptium.net/ or your system package manager",
            major
        )),
        Ecosystem::Go => Suggestion::hint(format!(
            "Install/use Go {} via https://go.dev/dl/ or your system package manager",
            requirement.raw_value
        )),
    }
}

/// The installed toolchain version, or the reason it could not be read.
fn local_version(ecosystem: Ecosystem, ctx: &CheckContext<'_>) -> Result<String, String> {
    let invoker = ctx.invoker();
    let label = ecosystem.label();

    match ecosystem {
        Ecosystem::Python => {
            // `python --version` wrote to stderr before 3.4.
            let version = ["python", "python3"].into_iter().find_map(|program| {
                let output = invoker.exec(&[program, "--version"], None).ok()?;
                if !output.success() {
                    return None;
                }
                let stdout = output.stdout.trim();
                let text = if stdout.is_empty() {
                    output.stderr.trim()
                } else {
                    stdout
                };
                (!text.is_empty()).then(|| text.to_string())
            });

            let version = version.ok_or_else(|| "Python not found".to_string())?;
            Ok(version
                .strip_prefix("Python ")
                .map(|v| v.trim().to_string())
                .unwrap_or(version))
        }
        Ecosystem::Node | Ecosystem::Java | Ecosystem::Go => {
            let argv: &[&str] = match ecosystem {
                Ecosystem::Node => &["node", "-v"],
                Ecosystem::Java => &["java", "-version"],
                _ => &["go", "version"],
            };

            let output = invoker
                .exec(argv, None)
                .map_err(|err| format!("{} not found: {}", label, err))?;
            if !output.success() {
                debug!("{} exited with {}", argv[0], describe_exit(&output));
                return Err(format!("{} not found", label));
            }

            let version = match ecosystem {
                Ecosystem::Java => extract_java_version(&output.stderr),
                Ecosystem::Go => Some(normalize_go_version(output.stdout.trim())),
                _ => Some(output.stdout.trim().to_string()),
            };
            version
                .filter(|v| !v.is_empty())
                .ok_or_else(|| format!("{} version output is empty", label))
        }
    }
}

/// `go version go1.21.0 linux/amd64` becomes `go 1.21.0`.
fn normalize_go_version(output: &str) -> String {
    if !output.starts_with("go version ") {
        return output.to_string();
    }
    match output.split_whitespace().nth(2) {
        Some(token) => match token.strip_prefix("go") {
            Some(rest) => format!("go {}", rest),
            None => token.to_string(),
        },
        None => output.to_string(),
    }
}
