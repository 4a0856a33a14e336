//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all output for
//! later assertion. Besides the per-kind lists it keeps every line in the
//! order it was written, as plain text.
//!
//! # Example
//!
//! ```
//! use devdoctor::checks::CheckStatus;
//! use devdoctor::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.show_header("System checks");
//! ui.check_line(CheckStatus::Pass, "system.git", "Git is available (2.43.0)");
//!
//! assert_eq!(
//!     ui.lines(),
//!     ["System checks", "[PASS] system.git  Git is available (2.43.0)"]
//! );
//! ```

use super::{format_check_line, OutputMode, UserInterface};
use crate::checks::CheckStatus;

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    interactive: bool,
    lines: Vec<String>,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    prompts_shown: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Set whether this mock behaves as interactive.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    /// Every line written to stdout, in order. Errors are excluded.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// All stdout lines joined with newlines.
    pub fn output(&self) -> String {
        self.lines.join("\n")
    }

    /// Get all captured messages, including check lines.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all prompts that were shown.
    pub fn prompts_shown(&self) -> &[String] {
        &self.prompts_shown
    }

    /// Check if a message containing `msg` was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a success containing `msg` was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a warning containing `msg` was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if an error containing `msg` was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Check if any stdout line contains `text`.
    pub fn has_line(&self, text: &str) -> bool {
        self.lines.iter().any(|l| l.contains(text))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.lines.push(msg.to_string());
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.lines.push(msg.to_string());
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.lines.push(msg.to_string());
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_header(&mut self, title: &str) {
        self.lines.push(title.to_string());
        self.headers.push(title.to_string());
    }

    fn check_line(&mut self, status: CheckStatus, id: &str, summary: &str) {
        self.message(&format_check_line(status, id, summary));
    }

    fn prompt(&mut self, question: &str) {
        self.prompts_shown.push(question.to_string());
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}
