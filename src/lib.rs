//! DevDoctor - Diagnose a project's toolchain requirements and plan safe fixes.
//!
//! DevDoctor inspects a directory, works out which ecosystems it belongs to,
//! probes the developer tools installed on the machine and compares declared
//! runtime versions against the local ones. Failures turn into a fix plan of
//! SAFE actions (which may be applied after confirmation) and CAUTION actions
//! (which are only ever printed).
//!
//! # Modules
//!
//! - [`checks`] - Check catalog, results and the runner
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - `.devdoctor.yml` loading and validation
//! - [`detection`] - Project root and ecosystem detection
//! - [`error`] - Error types and result aliases
//! - [`fix`] - Fix planning and application
//! - [`report`] - Console and JSON rendering
//! - [`requirements`] - Version pin readers and version parsing
//! - [`shell`] - Bounded external process execution
//! - [`ui`] - Terminal output and test doubles
//!
//! # Example
//!
//! ```
//! use devdoctor::checks::{Check, CheckContext, CheckRunner};
//! use devdoctor::detection::ProjectDetector;
//! use devdoctor::shell::FakeInvoker;
//!
//! let dir = tempfile::TempDir::new().unwrap();
//! let invoker = FakeInvoker::new();
//! let detection = ProjectDetector::detect(dir.path());
//! let ctx = CheckContext::new(dir.path(), detection, &invoker);
//!
//! let results = CheckRunner::run(&Check::system_checks(), &ctx);
//! assert_eq!(results.len(), 4);
//! ```

pub mod checks;
pub mod cli;
pub mod config;
pub mod detection;
pub mod error;
pub mod fix;
pub mod report;
pub mod requirements;
pub mod shell;
pub mod ui;

pub use error::{DoctorError, Result};
