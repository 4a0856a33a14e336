//! Project root and type detection.

use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};

use tracing::debug;

use super::markers::{has_any_marker, MARKER_TABLE};
use super::types::{DetectionResult, ProjectType};

/// Detects the project root and its ecosystems from marker files.
pub struct ProjectDetector;

impl ProjectDetector {
    /// Detect the project containing `start`.
    ///
    /// The root is the nearest ancestor of `start` (inclusive) holding any
    /// marker. If none is found before the filesystem root, `start` itself is
    /// the root. Types and markers are then rescanned at the root so that
    /// coexisting ecosystems are all reported.
    pub fn detect(start: &Path) -> DetectionResult {
        let start = normalize(start);
        let root = Self::find_project_root(&start);
        let types = Self::detect_types(&root);
        let markers_found = Self::collect_markers(&root, &types);

        debug!(
            "Detected root {} with {} type(s), markers {:?}",
            root.display(),
            types.len(),
            markers_found
        );

        DetectionResult::new(root, types, markers_found)
    }

    /// Walk upward from `start` to the first directory holding a marker.
    pub fn find_project_root(start: &Path) -> PathBuf {
        let start = normalize(start);
        let mut current = start.as_path();

        // The filesystem root itself is never a candidate.
        while let Some(parent) = current.parent() {
            if has_any_marker(current) {
                return current.to_path_buf();
            }
            current = parent;
        }

        debug!("No marker above {}, using it as root", start.display());
        start
    }

    /// All project types whose markers are present in `root`.
    pub fn detect_types(root: &Path) -> BTreeSet<ProjectType> {
        MARKER_TABLE
            .iter()
            .filter(|(_, markers)| markers.iter().any(|m| m.is_present(root)))
            .map(|(project_type, _)| *project_type)
            .collect()
    }

    fn collect_markers(root: &Path, types: &BTreeSet<ProjectType>) -> Vec<String> {
        MARKER_TABLE
            .iter()
            .filter(|(project_type, _)| types.contains(project_type))
            .flat_map(|(_, markers)| markers.iter().flat_map(|m| m.matches(root)))
            .collect()
    }
}

/// Make `path` absolute and lexically remove `.` and `..` components.
pub fn normalize(path: &Path) -> PathBuf {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
