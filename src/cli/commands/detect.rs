//! Detect command implementation.
//!
//! The `devdoctor detect` command prints the project root, the detected
//! project types and the marker files that led to them.

use std::path::{Path, PathBuf};

use crate::cli::args::DetectArgs;
use crate::detection::ProjectDetector;
use crate::error::Result;
use crate::report::render_detection_header;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::resolve_path;

/// The detect command implementation.
pub struct DetectCommand {
    working_dir: PathBuf,
    args: DetectArgs,
}

impl DetectCommand {
    /// Create a new detect command.
    pub fn new(working_dir: &Path, args: DetectArgs) -> Self {
        Self {
            working_dir: working_dir.to_path_buf(),
            args,
        }
    }
}

impl Command for DetectCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let target = resolve_path(&self.working_dir, self.args.path.as_deref());
        let detection = ProjectDetector::detect(&target);

        render_detection_header(ui, &detection);

        if !detection.markers_found().is_empty() {
            ui.message("Markers found:");
            for marker in detection.markers_found() {
                ui.message(&format!("  - {}", marker));
            }
        }

        Ok(CommandResult::success())
    }
}
