//! Go requirement reader (`go.mod` `go` directive).

use std::fs;
use std::path::Path;

use tracing::debug;

use super::requirement::{Ecosystem, Requirement};
use super::version::go_comparable_unit;
use crate::detection::file_exists;

/// Read the Go requirement from `go.mod`.
pub fn read(project_root: &Path) -> Option<Requirement> {
    if !file_exists(project_root, "go.mod") {
        return None;
    }
    let content = fs::read_to_string(project_root.join("go.mod")).ok()?;

    let line = content
        .lines()
        .map(str::trim)
        .find(|line| line.starts_with("go "))?;
    let raw = line["go ".len()..].trim();
    debug!("Go requirement from go.mod: {}", raw);

    Some(Requirement {
        ecosystem: Ecosystem::Go,
        source_file: "go.mod".to_string(),
        raw_value: raw.to_string(),
        parsed_major: go_comparable_unit(line),
    })
}
