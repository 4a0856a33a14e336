//! Check result types.

use std::fmt;

use serde::Serialize;

/// Outcome class of a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CheckStatus {
    /// Requirement satisfied, or tool present.
    Pass,
    /// Inconclusive: tool or version could not be determined.
    Warn,
    /// Tool missing or requirement definitively unmet.
    Fail,
    /// Descriptive only.
    Info,
    /// The ecosystem this check covers was not detected.
    NotApplicable,
}

impl CheckStatus {
    /// All statuses, in summary order.
    pub const ALL: [CheckStatus; 5] = [
        CheckStatus::Pass,
        CheckStatus::Warn,
        CheckStatus::Fail,
        CheckStatus::Info,
        CheckStatus::NotApplicable,
    ];

    /// Uppercase tag, e.g. `NOT_APPLICABLE`.
    pub fn as_str(self) -> &'static str {
        match self {
            CheckStatus::Pass => "PASS",
            CheckStatus::Warn => "WARN",
            CheckStatus::Fail => "FAIL",
            CheckStatus::Info => "INFO",
            CheckStatus::NotApplicable => "NOT_APPLICABLE",
        }
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a remediation may run unattended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Risk {
    Safe,
    Caution,
}

impl Risk {
    pub fn as_str(self) -> &'static str {
        match self {
            Risk::Safe => "SAFE",
            Risk::Caution => "CAUTION",
        }
    }
}

impl fmt::Display for Risk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A remediation hint attached to a check result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub message: String,
    pub commands: Vec<String>,
    pub risk: Risk,
}

impl Suggestion {
    /// Create a suggestion with commands.
    pub fn new(message: impl Into<String>, commands: Vec<String>, risk: Risk) -> Self {
        Self {
            message: message.into(),
            commands,
            risk,
        }
    }

    /// A message-only SAFE suggestion.
    pub fn hint(message: impl Into<String>) -> Self {
        Self::new(message, Vec::new(), Risk::Safe)
    }
}

/// Result of running one check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    /// Stable dotted id, `system.<tool>` or `project.<ecosystem>[.requirements]`.
    pub id: String,
    pub status: CheckStatus,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<Suggestion>,
}

impl CheckResult {
    /// Create a result with no details or suggestions.
    pub fn new(id: &str, status: CheckStatus, summary: impl Into<String>) -> Self {
        Self {
            id: id.to_string(),
            status,
            summary: summary.into(),
            details: None,
            suggestions: Vec::new(),
        }
    }

    /// Attach details.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Attach a suggestion.
    pub fn with_suggestion(mut self, suggestion: Suggestion) -> Self {
        self.suggestions.push(suggestion);
        self
    }

    /// Whether the id is in the `system.` namespace.
    pub fn is_system(&self) -> bool {
        self.id.starts_with("system.")
    }
}
