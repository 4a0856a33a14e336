//! Project configuration for DevDoctor.
//!
//! A project may carry a `.devdoctor.yml` at its root:
//!
//! ```yaml
//! ignore_checks:
//!   - system.docker
//! require_checks:
//!   - project.node.requirements
//! ports: [3000, "5432"]
//! ```
//!
//! Every key is optional and an empty file is the empty config.
//!
//! # Example
//!
//! ```
//! use devdoctor::config::ConfigLoader;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(".devdoctor.yml"), "ignore_checks: [system.docker]").unwrap();
//!
//! let config = ConfigLoader::load_from_project_root(temp.path()).unwrap().unwrap();
//! assert!(config.ignore_checks.contains("system.docker"));
//! ```

pub mod loader;

pub use loader::{ConfigLoader, CONFIG_FILE_NAME};

use std::collections::BTreeSet;

/// Settings read from `.devdoctor.yml`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DoctorConfig {
    /// Check ids removed before running.
    pub ignore_checks: BTreeSet<String>,

    /// Check ids whose FAIL fails the run.
    pub require_checks: BTreeSet<String>,

    /// Ports of interest. Parsed and validated but not checked yet.
    pub ports: Vec<u16>,
}

/// A config together with the file it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedConfig {
    pub path: std::path::PathBuf,
    pub config: DoctorConfig,
}
