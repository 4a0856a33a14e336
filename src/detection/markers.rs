//! Marker file predicates.
//!
//! A marker is either an exact filename or a single-level extension glob
//! (`*.sln`). Only regular files count. Listing or permission errors read
//! as "no marker here".

use std::fs;
use std::path::Path;

use super::types::ProjectType;

/// A file whose presence signals an ecosystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// Exact filename.
    File(&'static str),
    /// Any regular file whose name ends with `.<ext>`.
    Extension(&'static str),
}

impl Marker {
    /// Whether the marker is present in `dir`.
    pub fn is_present(self, dir: &Path) -> bool {
        match self {
            Marker::File(name) => file_exists(dir, name),
            Marker::Extension(ext) => !files_with_extension(dir, ext).is_empty(),
        }
    }

    /// Filenames in `dir` that match the marker.
    pub fn matches(self, dir: &Path) -> Vec<String> {
        match self {
            Marker::File(name) if file_exists(dir, name) => vec![name.to_string()],
            Marker::File(_) => Vec::new(),
            Marker::Extension(ext) => files_with_extension(dir, ext),
        }
    }
}

/// Markers per project type, in collection order.
pub const MARKER_TABLE: &[(ProjectType, &[Marker])] = &[
    (ProjectType::JavaMaven, &[Marker::File("pom.xml")]),
    (
        ProjectType::JavaGradle,
        &[Marker::File("build.gradle"), Marker::File("build.gradle.kts")],
    ),
    (ProjectType::Node, &[Marker::File("package.json")]),
    (
        ProjectType::DockerCompose,
        &[
            Marker::File("docker-compose.yml"),
            Marker::File("compose.yml"),
            Marker::File("compose.yaml"),
        ],
    ),
    (ProjectType::PythonPyproject, &[Marker::File("pyproject.toml")]),
    (ProjectType::PythonRequirements, &[Marker::File("requirements.txt")]),
    (ProjectType::PythonPipenv, &[Marker::File("Pipfile")]),
    (ProjectType::PythonSetuppy, &[Marker::File("setup.py")]),
    (ProjectType::GoModules, &[Marker::File("go.mod")]),
    (ProjectType::RustCargo, &[Marker::File("Cargo.toml")]),
    (ProjectType::DotnetSolution, &[Marker::Extension("sln")]),
    (ProjectType::DotnetCsproj, &[Marker::Extension("csproj")]),
    (ProjectType::DotnetFsproj, &[Marker::Extension("fsproj")]),
];

/// Whether `dir` contains any known marker.
pub fn has_any_marker(dir: &Path) -> bool {
    MARKER_TABLE
        .iter()
        .flat_map(|(_, markers)| markers.iter())
        .any(|marker| marker.is_present(dir))
}

/// Check if a regular file exists relative to `dir`.
pub fn file_exists(dir: &Path, file: &str) -> bool {
    fs::metadata(dir.join(file))
        .map(|meta| meta.is_file())
        .unwrap_or(false)
}

/// Regular files directly inside `dir` named `*.<ext>`, sorted by name.
pub fn files_with_extension(dir: &Path, ext: &str) -> Vec<String> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };

    let suffix = format!(".{}", ext);
    let mut names: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| fs::metadata(entry.path()).map(|m| m.is_file()).unwrap_or(false))
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| name.ends_with(&suffix))
        .collect();
    names.sort();
    names
}
