//! Toolchain version requirements.
//!
//! Each ecosystem has a reader that consults a fixed priority list of files
//! and returns the first source present, parsed or not. Read and parse
//! errors fall through to the next source; nothing here returns an error.
//!
//! # Modules
//!
//! - [`version`] - Comparable-unit parsers and the satisfaction predicate
//! - [`node`], [`python`], [`java`], [`go`] - Per-ecosystem readers

pub mod go;
pub mod java;
pub mod node;
pub mod python;
pub mod requirement;
pub mod version;

pub use requirement::{Ecosystem, Requirement};
pub use version::{
    go_comparable_unit, parse_java_version, parse_node_version, parse_python_ordinal,
    parse_python_version, satisfies_requirement, VersionParser,
};
