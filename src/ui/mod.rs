//! Output sink for commands and renderers.
//!
//! This module provides:
//! - [`UserInterface`] trait so renderers never print directly
//! - [`TerminalUI`] writing to stdout/stderr with optional colors
//! - [`MockUI`] capturing output for tests
//!
//! # Example
//!
//! ```
//! use devdoctor::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Project root: /work/app");
//! ui.error("Unexpected error: boom");
//!
//! assert!(ui.has_message("Project root"));
//! assert!(ui.has_error("boom"));
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, DoctorTheme};

use crate::checks::CheckStatus;

/// Trait for user-facing output.
///
/// This trait allows capturing output in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Write a line verbatim to standard output.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message on standard error.
    fn error(&mut self, msg: &str);

    /// Show a section heading.
    fn show_header(&mut self, title: &str);

    /// Show one check result line: `[STATUS] id  summary`.
    fn check_line(&mut self, status: CheckStatus, id: &str, summary: &str);

    /// Show a question without a trailing newline.
    fn prompt(&mut self, question: &str);

    /// Whether standard output is a terminal.
    fn is_interactive(&self) -> bool;
}

/// Plain text of a check result line.
pub fn format_check_line(status: CheckStatus, id: &str, summary: &str) -> String {
    format!("[{}] {}  {}", status, id, summary)
}
