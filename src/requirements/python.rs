//! Python requirement reader.
//!
//! Sources, by priority: `.python-version`, then `requires-python` inside the
//! `[project]` table of `pyproject.toml`. The TOML is scanned line by line.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::node::read_version_file;
use super::requirement::{Ecosystem, Requirement};
use crate::detection::file_exists;

static REQUIRES_PYTHON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"requires-python\s*=\s*["']([^"']+)["']"#).unwrap());

/// Read the Python requirement, if any source declares one.
pub fn read(project_root: &Path) -> Option<Requirement> {
    if let Some(content) = read_version_file(project_root, ".python-version") {
        debug!("Python requirement from .python-version: {}", content);
        return Some(Requirement::new(Ecosystem::Python, ".python-version", &content));
    }

    if !file_exists(project_root, "pyproject.toml") {
        return None;
    }
    let content = fs::read_to_string(project_root.join("pyproject.toml")).ok()?;
    let value = requires_python(&content)?;
    debug!("Python requirement from pyproject.toml: {}", value);
    Some(Requirement::new(Ecosystem::Python, "pyproject.toml", &value))
}

fn requires_python(pyproject: &str) -> Option<String> {
    let mut in_project = false;
    for line in pyproject.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with("[project]") {
            in_project = true;
            continue;
        }
        if trimmed.starts_with('[') && !trimmed.starts_with("[project") {
            in_project = false;
            continue;
        }
        if in_project {
            if let Some(caps) = REQUIRES_PYTHON.captures(trimmed) {
                return Some(caps[1].to_string());
            }
        }
    }
    None
}
