//! Node.js requirement reader.
//!
//! Sources, by priority: `.nvmrc`, `.node-version`, `package.json`
//! `engines.node`.

use std::fs;
use std::path::Path;

use tracing::debug;

use super::requirement::{Ecosystem, Requirement};
use crate::detection::file_exists;

const VERSION_FILES: [&str; 2] = [".nvmrc", ".node-version"];

/// Read the Node.js requirement, if any source declares one.
pub fn read(project_root: &Path) -> Option<Requirement> {
    for file in VERSION_FILES {
        if let Some(content) = read_version_file(project_root, file) {
            debug!("Node requirement from {}: {}", file, content);
            return Some(Requirement::new(Ecosystem::Node, file, &content));
        }
    }

    let engines = read_engines_node(project_root)?;
    debug!("Node requirement from package.json: {}", engines);
    Some(Requirement::new(Ecosystem::Node, "package.json", &engines))
}

/// Trimmed, non-empty content of a version pin file.
pub(crate) fn read_version_file(project_root: &Path, file: &str) -> Option<String> {
    if !file_exists(project_root, file) {
        return None;
    }
    let content = fs::read_to_string(project_root.join(file)).ok()?;
    let trimmed = content.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn read_engines_node(project_root: &Path) -> Option<String> {
    if !file_exists(project_root, "package.json") {
        return None;
    }
    let content = fs::read_to_string(project_root.join("package.json")).ok()?;
    let manifest: serde_json::Value = serde_json::from_str(&content).ok()?;
    manifest
        .get("engines")?
        .get("node")?
        .as_str()
        .map(str::to_string)
}
