//! Detection result types.

use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};

/// Ecosystem a project root can be recognised as.
///
/// Variants are ordered; a set of types iterates in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProjectType {
    JavaMaven,
    JavaGradle,
    Node,
    DockerCompose,
    PythonPyproject,
    PythonRequirements,
    PythonPipenv,
    PythonSetuppy,
    GoModules,
    DotnetSolution,
    DotnetCsproj,
    DotnetFsproj,
    RustCargo,
}

/// Display labels, indexed by `ProjectType as usize`.
const PROJECT_TYPE_LABELS: [&str; 13] = [
    "Java (Maven)",
    "Java (Gradle)",
    "Node.js",
    "Docker Compose",
    "Python (pyproject)",
    "Python (requirements)",
    "Python (Pipenv)",
    "Python (setup.py)",
    "Go (modules)",
    ".NET (solution)",
    ".NET (C# project)",
    ".NET (F# project)",
    "Rust (Cargo)",
];

impl ProjectType {
    /// Every project type, in declaration order.
    pub const ALL: [ProjectType; 13] = [
        ProjectType::JavaMaven,
        ProjectType::JavaGradle,
        ProjectType::Node,
        ProjectType::DockerCompose,
        ProjectType::PythonPyproject,
        ProjectType::PythonRequirements,
        ProjectType::PythonPipenv,
        ProjectType::PythonSetuppy,
        ProjectType::GoModules,
        ProjectType::DotnetSolution,
        ProjectType::DotnetCsproj,
        ProjectType::DotnetFsproj,
        ProjectType::RustCargo,
    ];

    /// Python project types.
    pub const PYTHON: [ProjectType; 4] = [
        ProjectType::PythonPyproject,
        ProjectType::PythonRequirements,
        ProjectType::PythonPipenv,
        ProjectType::PythonSetuppy,
    ];

    /// Java project types.
    pub const JAVA: [ProjectType; 2] = [ProjectType::JavaMaven, ProjectType::JavaGradle];

    /// Human-readable label, e.g. `Java (Maven)`.
    pub fn label(self) -> &'static str {
        PROJECT_TYPE_LABELS[self as usize]
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of detecting a project from a start path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectionResult {
    root: PathBuf,
    types: BTreeSet<ProjectType>,
    markers_found: Vec<String>,
}

impl DetectionResult {
    /// Create a result.
    pub fn new(root: PathBuf, types: BTreeSet<ProjectType>, markers_found: Vec<String>) -> Self {
        Self {
            root,
            types,
            markers_found,
        }
    }

    /// The detected project root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Every ecosystem recognised at the root.
    pub fn types(&self) -> &BTreeSet<ProjectType> {
        &self.types
    }

    /// Marker filenames found at the root, in marker table order.
    pub fn markers_found(&self) -> &[String] {
        &self.markers_found
    }

    /// Whether the given type was detected.
    pub fn has(&self, project_type: ProjectType) -> bool {
        self.types.contains(&project_type)
    }

    /// Whether any of the given types was detected.
    pub fn has_any(&self, project_types: &[ProjectType]) -> bool {
        project_types.iter().any(|t| self.types.contains(t))
    }

    /// Whether no ecosystem was recognised.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
