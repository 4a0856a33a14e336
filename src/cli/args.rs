//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// DevDoctor - Check a project's toolchain and plan safe fixes.
#[derive(Debug, Parser)]
#[command(name = "devdoctor")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Show details and suggestions under each result
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Detect project root and project types
    Detect(DetectArgs),

    /// Run environment and project checks
    Check(CheckArgs),

    /// Plan fixes for failing checks and optionally apply the safe ones
    Fix(FixArgs),
}

/// Arguments for the `detect` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct DetectArgs {
    /// Path to the project directory (default: current directory)
    #[arg(short, long)]
    pub path: Option<PathBuf>,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Path to the project directory (default: current directory)
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// Run only system-level checks
    #[arg(long, conflicts_with = "project_only")]
    pub system_only: bool,

    /// Run only project-level checks
    #[arg(long)]
    pub project_only: bool,

    /// Show not applicable checks in output
    #[arg(long)]
    pub show_na: bool,

    /// Path to the config file (default: .devdoctor.yml in project root)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Output results as pretty-printed JSON (implies --json)
    #[arg(long)]
    pub json_pretty: bool,
}

/// Arguments for the `fix` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct FixArgs {
    /// Path to the project directory (default: current directory)
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// Apply SAFE fixes after confirmation
    #[arg(long)]
    pub apply: bool,

    /// Skip confirmation prompt when applying fixes
    #[arg(long)]
    pub yes: bool,
}
