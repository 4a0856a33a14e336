//! DevDoctor CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use devdoctor::cli::commands::EXIT_ERROR;
use devdoctor::cli::{Cli, CommandDispatcher};
use devdoctor::ui::{should_use_colors, OutputMode, TerminalUI, UserInterface};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr so `--json` output stays parseable.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("devdoctor=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("devdoctor=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("DevDoctor starting with args: {:?}", cli);

    let mut ui = TerminalUI::new(
        OutputMode::from_verbose(cli.verbose),
        should_use_colors(cli.no_color),
    );

    let working_dir = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            ui.error(&format!("Cannot determine working directory: {}", e));
            return ExitCode::from(EXIT_ERROR as u8);
        }
    };

    let dispatcher = CommandDispatcher::new(working_dir);

    match dispatcher.dispatch(&cli, &mut ui) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Unexpected error: {}", e));
            ExitCode::from(EXIT_ERROR as u8)
        }
    }
}
