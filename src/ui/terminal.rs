//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{DoctorTheme, OutputMode, UserInterface};
use crate::checks::CheckStatus;

/// Terminal UI: results on stdout, errors on stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: DoctorTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a terminal UI. `colors` comes from [`should_use_colors`](super::should_use_colors).
    pub fn new(mode: OutputMode, colors: bool) -> Self {
        let theme = if colors {
            DoctorTheme::new()
        } else {
            DoctorTheme::plain()
        };

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        writeln!(self.out, "{}", msg).ok();
    }

    fn success(&mut self, msg: &str) {
        writeln!(self.out, "{}", self.theme.format_success(msg)).ok();
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.out, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        writeln!(self.out, "{}", self.theme.format_header(title)).ok();
    }

    fn check_line(&mut self, status: CheckStatus, id: &str, summary: &str) {
        writeln!(
            self.out,
            "{} {}  {}",
            self.theme.format_status(status),
            id,
            summary
        )
        .ok();
    }

    fn prompt(&mut self, question: &str) {
        write!(self.out, "{}", question).ok();
        self.out.flush().ok();
    }

    fn is_interactive(&self) -> bool {
        self.out.is_term()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_ui_output_mode() {
        let ui = TerminalUI::new(OutputMode::Verbose, false);
        assert_eq!(ui.output_mode(), OutputMode::Verbose);
    }
}
