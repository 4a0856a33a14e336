//! Version comparison.
//!
//! Each ecosystem maps a free-form version string to a single integer, its
//! comparable unit. Only that unit is compared, never full semver.

use std::sync::LazyLock;

use regex::Regex;

static NODE_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:v|>=|\^)?(\d+)(?:\.|x|$)").unwrap());

static PYTHON_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:>=)?(\d+)\.(\d+)").unwrap());

static GO_VERSION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"go\s+(\d+)\.(\d+)").unwrap());

static JAVA_LEGACY_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^1\.(\d+)(?:[._\-]|$)").unwrap());

static JAVA_MODERN_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)(?:\.|$)").unwrap());

/// Signature shared by the per-ecosystem parsers.
pub type VersionParser = fn(&str) -> Option<u32>;

fn capture_u32(re: &Regex, input: &str, group: usize) -> Option<u32> {
    re.captures(input)?.get(group)?.as_str().parse().ok()
}

/// Node major: `18`, `v18.19.0`, `^20`, `20.x`, `>=18` all parse.
pub fn parse_node_version(version: &str) -> Option<u32> {
    capture_u32(&NODE_VERSION, version.trim(), 1)
}

/// Python major. Requires both major and minor (`3.11`, `>=3.9`).
pub fn parse_python_version(version: &str) -> Option<u32> {
    capture_u32(&PYTHON_VERSION, version.trim(), 1)
}

/// Python `major * 100 + minor`, so `3.11` is 311 and `3.9` is 309.
pub fn parse_python_ordinal(version: &str) -> Option<u32> {
    let caps = PYTHON_VERSION.captures(version.trim())?;
    let major: u32 = caps.get(1)?.as_str().parse().ok()?;
    let minor: u32 = caps.get(2)?.as_str().parse().ok()?;
    major.checked_mul(100)?.checked_add(minor)
}

/// Comparable unit for Go: the `Y` in `go X.Y`.
///
/// Go's own major is pinned at 1, so the minor number is what distinguishes
/// toolchains. This is not a semantic-version major.
pub fn go_comparable_unit(version: &str) -> Option<u32> {
    capture_u32(&GO_VERSION, version.trim(), 2)
}

/// Java feature release. `1.8`, `1.8.0_292`, `17` and `17.0.1` give 8, 8, 17, 17.
pub fn parse_java_version(version: &str) -> Option<u32> {
    let trimmed = version.trim();
    capture_u32(&JAVA_LEGACY_VERSION, trimmed, 1)
        .or_else(|| capture_u32(&JAVA_MODERN_VERSION, trimmed, 1))
}

/// Whether `local` satisfies `required` under `parse`.
///
/// A `>=` prefix on the requirement means minimum, anything else means the
/// comparable units must be equal. Returns false when either side fails to
/// parse; callers treat that as inconclusive rather than a mismatch.
pub fn satisfies_requirement(required: &str, local: &str, parse: VersionParser) -> bool {
    let (Some(required_unit), Some(local_unit)) = (parse(required), parse(local)) else {
        return false;
    };

    if required.trim().starts_with(">=") {
        local_unit >= required_unit
    } else {
        local_unit == required_unit
    }
}
