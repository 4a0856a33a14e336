//! Locating, reading and validating `.devdoctor.yml`.
//!
//! The document is parsed into a `serde_yaml::Value` first so shape errors
//! can name the offending key instead of surfacing a generic serde message.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};
use tracing::debug;

use super::{DoctorConfig, LoadedConfig};
use crate::error::{DoctorError, Result};

/// File name looked up in the project root.
pub const CONFIG_FILE_NAME: &str = ".devdoctor.yml";

/// Loads [`DoctorConfig`] from disk.
pub struct ConfigLoader;

impl ConfigLoader {
    /// `<project_root>/.devdoctor.yml`.
    pub fn default_config_path(project_root: &Path) -> PathBuf {
        project_root.join(CONFIG_FILE_NAME)
    }

    /// Load the project's config file.
    ///
    /// Returns `Ok(None)` when there is no such regular file.
    pub fn load_from_project_root(project_root: &Path) -> Result<Option<DoctorConfig>> {
        let path = Self::default_config_path(project_root);
        if !path.is_file() {
            debug!("No config at {}", path.display());
            return Ok(None);
        }
        Self::load_from_explicit_path(&path).map(Some)
    }

    /// Load a config file the user named. The file must exist.
    pub fn load_from_explicit_path(path: &Path) -> Result<DoctorConfig> {
        if !path.exists() {
            return Err(DoctorError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        if !path.is_file() {
            return Err(DoctorError::ConfigParseError {
                path: path.to_path_buf(),
                message: "not a regular file".to_string(),
            });
        }

        let content = fs::read_to_string(path)?;
        let config = parse_config(&content, path)?;
        debug!(
            "Loaded config from {}: {} ignored, {} required",
            path.display(),
            config.ignore_checks.len(),
            config.require_checks.len()
        );
        Ok(config)
    }

    /// Load from `explicit` when given, else from the project root.
    pub fn load(project_root: &Path, explicit: Option<&Path>) -> Result<Option<LoadedConfig>> {
        match explicit {
            Some(path) => Ok(Some(LoadedConfig {
                path: path.to_path_buf(),
                config: Self::load_from_explicit_path(path)?,
            })),
            None => Ok(Self::load_from_project_root(project_root)?.map(|config| LoadedConfig {
                path: Self::default_config_path(project_root),
                config,
            })),
        }
    }
}

/// Parse and validate YAML content. `source_path` is used in errors.
pub fn parse_config(content: &str, source_path: &Path) -> Result<DoctorConfig> {
    let value: Value = serde_yaml::from_str(content).map_err(|e| DoctorError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })?;

    let map = match value {
        Value::Null => return Ok(DoctorConfig::default()),
        Value::Mapping(map) => map,
        _ => return Err(invalid("Config must be a YAML mapping (key-value pairs)")),
    };

    Ok(DoctorConfig {
        ignore_checks: string_set(&map, "ignore_checks")?,
        require_checks: string_set(&map, "require_checks")?,
        ports: ports(&map)?,
    })
}

fn invalid(message: impl Into<String>) -> DoctorError {
    DoctorError::ConfigValidationError {
        message: message.into(),
    }
}

/// A missing or null key is an empty list.
fn sequence<'a>(map: &'a Mapping, key: &str, kind: &str) -> Result<&'a [Value]> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(&[][..]),
        Some(Value::Sequence(items)) => Ok(items.as_slice()),
        Some(_) => Err(invalid(format!(
            "'{}' must be a sequence (list) of {}",
            key, kind
        ))),
    }
}

fn string_set(map: &Mapping, key: &str) -> Result<BTreeSet<String>> {
    sequence(map, key, "strings")?
        .iter()
        .map(|item| match item {
            Value::String(s) => Ok(s.clone()),
            Value::Null => Err(invalid(format!("'{}' contains null values", key))),
            other => Err(invalid(format!(
                "'{}' must contain only strings, found: {}",
                key,
                type_name(other)
            ))),
        })
        .collect()
}

fn ports(map: &Mapping) -> Result<Vec<u16>> {
    sequence(map, "ports", "integers")?
        .iter()
        .map(|item| match item {
            Value::Number(n) => n
                .as_u64()
                .and_then(|n| u16::try_from(n).ok())
                .ok_or_else(|| invalid(format!("'ports' contains an invalid port: {}", n))),
            Value::String(s) => s
                .trim()
                .parse::<u16>()
                .map_err(|_| invalid(format!("'ports' contains non-integer string: {}", s))),
            Value::Null => Err(invalid("'ports' contains null values")),
            other => Err(invalid(format!(
                "'ports' must contain only integers or integer strings, found: {}",
                type_name(other)
            ))),
        })
        .collect()
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}
