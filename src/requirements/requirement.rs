//! Requirement and ecosystem types.

use std::fmt;
use std::path::Path;

use super::version::{
    go_comparable_unit, parse_java_version, parse_node_version, parse_python_version,
    VersionParser,
};
use super::{go, java, node, python};

/// Toolchain ecosystem that can declare a version requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ecosystem {
    Node,
    Python,
    Java,
    Go,
}

impl Ecosystem {
    /// Every ecosystem, in check order.
    pub const ALL: [Ecosystem; 4] = [
        Ecosystem::Node,
        Ecosystem::Python,
        Ecosystem::Go,
        Ecosystem::Java,
    ];

    /// Lowercase identifier, as used in check ids.
    pub fn name(self) -> &'static str {
        match self {
            Ecosystem::Node => "node",
            Ecosystem::Python => "python",
            Ecosystem::Java => "java",
            Ecosystem::Go => "go",
        }
    }

    /// Human-readable name.
    pub fn label(self) -> &'static str {
        match self {
            Ecosystem::Node => "Node.js",
            Ecosystem::Python => "Python",
            Ecosystem::Java => "Java",
            Ecosystem::Go => "Go",
        }
    }

    /// Parser producing this ecosystem's comparable unit.
    pub fn parser(self) -> VersionParser {
        match self {
            Ecosystem::Node => parse_node_version,
            Ecosystem::Python => parse_python_version,
            Ecosystem::Java => parse_java_version,
            Ecosystem::Go => go_comparable_unit,
        }
    }

    /// Find the ecosystem with this lowercase name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|eco| eco.name() == name)
    }

    /// Read this ecosystem's requirement from `project_root`.
    pub fn read_requirement(self, project_root: &Path) -> Option<Requirement> {
        match self {
            Ecosystem::Node => node::read(project_root),
            Ecosystem::Python => python::read(project_root),
            Ecosystem::Java => java::read(project_root),
            Ecosystem::Go => go::read(project_root),
        }
    }
}

impl fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A version constraint declared by a project file.
///
/// `parsed_major` is `None` when the raw value was found but could not be
/// normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    pub ecosystem: Ecosystem,
    pub source_file: String,
    pub raw_value: String,
    pub parsed_major: Option<u32>,
}

impl Requirement {
    /// Create a requirement, parsing `raw_value` with the ecosystem parser.
    pub fn new(ecosystem: Ecosystem, source_file: &str, raw_value: &str) -> Self {
        Self {
            ecosystem,
            source_file: source_file.to_string(),
            raw_value: raw_value.to_string(),
            parsed_major: (ecosystem.parser())(raw_value),
        }
    }

    /// Whether the raw value was normalized.
    pub fn is_parsed(&self) -> bool {
        self.parsed_major.is_some()
    }
}
