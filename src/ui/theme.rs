//! Visual theme and styling.

use console::Style;

use crate::checks::CheckStatus;

/// DevDoctor's visual theme.
#[derive(Debug, Clone)]
pub struct DoctorTheme {
    /// Style for success messages and PASS (green).
    pub success: Style,
    /// Style for warning messages and WARN (orange).
    pub warning: Style,
    /// Style for error messages and FAIL (red bold).
    pub error: Style,
    /// Style for INFO (cyan).
    pub info: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for section headings (bold).
    pub header: Style,
}

impl Default for DoctorTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl DoctorTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            info: Style::new().cyan(),
            dim: Style::new().dim(),
            header: Style::new().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            info: Style::new(),
            dim: Style::new(),
            header: Style::new(),
        }
    }

    /// Style for a check status tag.
    pub fn status_style(&self, status: CheckStatus) -> &Style {
        match status {
            CheckStatus::Pass => &self.success,
            CheckStatus::Warn => &self.warning,
            CheckStatus::Fail => &self.error,
            CheckStatus::Info => &self.info,
            CheckStatus::NotApplicable => &self.dim,
        }
    }

    /// Format a `[STATUS]` tag.
    pub fn format_status(&self, status: CheckStatus) -> String {
        self.status_style(status)
            .apply_to(format!("[{}]", status))
            .to_string()
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a section heading.
    pub fn format_header(&self, title: &str) -> String {
        self.header.apply_to(title).to_string()
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors(no_color_flag: bool) -> bool {
    if no_color_flag {
        return false;
    }

    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    console::Term::stdout().is_term()
}
