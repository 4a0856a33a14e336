//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! Exit codes: 0 when everything passed, 1 for failing checks or skipped
//! fixes, 2 for configuration or unexpected errors.

pub mod check;
pub mod detect;
pub mod dispatcher;
pub mod fix;

pub use check::CheckCommand;
pub use detect::DetectCommand;
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use fix::FixCommand;

use std::path::{Path, PathBuf};

use crate::detection::normalize;

/// Exit code for configuration and unexpected errors.
pub const EXIT_ERROR: i32 = 2;

/// Absolute, normalized target for a `--path` argument.
pub(crate) fn resolve_path(working_dir: &Path, path: Option<&Path>) -> PathBuf {
    normalize(&working_dir.join(path.unwrap_or(Path::new("."))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_defaults_to_working_dir() {
        assert_eq!(
            resolve_path(Path::new("/work/app"), None),
            PathBuf::from("/work/app")
        );
    }

    #[test]
    fn resolve_relative_and_absolute() {
        assert_eq!(
            resolve_path(Path::new("/work/app"), Some(Path::new("../lib"))),
            PathBuf::from("/work/lib")
        );
        assert_eq!(
            resolve_path(Path::new("/work/app"), Some(Path::new("/srv/x"))),
            PathBuf::from("/srv/x")
        );
    }
}
