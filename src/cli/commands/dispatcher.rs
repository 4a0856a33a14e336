//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::ui::UserInterface;

use super::{CheckCommand, DetectCommand, FixCommand};

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    working_dir: PathBuf,
}

impl CommandDispatcher {
    /// Create a dispatcher. Relative `--path` values resolve against `working_dir`.
    pub fn new(working_dir: PathBuf) -> Self {
        Self { working_dir }
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Commands::Detect(args) => DetectCommand::new(&self.working_dir, args.clone()).execute(ui),
            Commands::Check(args) => CheckCommand::new(&self.working_dir, args.clone()).execute(ui),
            Commands::Fix(args) => FixCommand::new(&self.working_dir, args.clone()).execute(ui),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn dispatches_detect() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("go.mod"), "module x\n").unwrap();

        let cli = Cli::parse_from(["devdoctor", "detect"]);
        let mut ui = MockUI::new();
        let result = CommandDispatcher::new(temp.path().to_path_buf())
            .dispatch(&cli, &mut ui)
            .unwrap();

        assert_eq!(result, CommandResult::success());
        assert!(ui.has_line("  - Go (modules)"));
    }
}
