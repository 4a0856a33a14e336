//! Error types for DevDoctor operations.
//!
//! This module defines [`DoctorError`], the error type returned by commands
//! and the configuration loader, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - The detection, requirement and check pipeline never returns errors:
//!   failures there degrade to empty results or WARN/FAIL check results
//! - Process invocation has its own [`ExecError`](crate::shell::ExecError)
//!   so callers can tell a missing tool from a timeout
//! - Use `DoctorError` for failures that end a command (bad config, I/O)
//! - Use `anyhow::Error` (via `DoctorError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for DevDoctor commands.
#[derive(Debug, Error)]
pub enum DoctorError {
    /// Explicit configuration file not found.
    #[error("Config file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Invalid config file {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Configuration parsed but has the wrong shape.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// A fix command exited non-zero.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// Process invocation failed before producing an exit code.
    #[error(transparent)]
    Exec(#[from] crate::shell::ExecError),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for DevDoctor operations.
pub type Result<T> = std::result::Result<T, DoctorError>;
