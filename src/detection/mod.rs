//! Project root and ecosystem detection.

pub mod markers;
pub mod project;
pub mod types;

pub use markers::{file_exists, Marker};
pub use project::{normalize, ProjectDetector};
pub use types::{DetectionResult, ProjectType};
