//! Shared, read-only input to every check.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::detection::{DetectionResult, ProjectType};
use crate::shell::ProcessInvoker;

/// Everything a check may look at. Built once per run.
pub struct CheckContext<'a> {
    target_path: PathBuf,
    detection: DetectionResult,
    invoker: &'a dyn ProcessInvoker,
}

impl<'a> CheckContext<'a> {
    /// Create a context for the path the user pointed at.
    pub fn new(
        target_path: impl Into<PathBuf>,
        detection: DetectionResult,
        invoker: &'a dyn ProcessInvoker,
    ) -> Self {
        Self {
            target_path: target_path.into(),
            detection,
            invoker,
        }
    }

    /// The path the run was started from.
    pub fn target_path(&self) -> &Path {
        &self.target_path
    }

    /// The detected project root.
    pub fn project_root(&self) -> &Path {
        self.detection.root()
    }

    /// The detected project types.
    pub fn project_types(&self) -> &BTreeSet<ProjectType> {
        self.detection.types()
    }

    /// The full detection result.
    pub fn detection(&self) -> &DetectionResult {
        &self.detection
    }

    /// Process invoker for tool probes.
    pub fn invoker(&self) -> &dyn ProcessInvoker {
        self.invoker
    }
}
