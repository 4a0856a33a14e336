//! Machine-readable check report.
//!
//! ```json
//! {
//!   "tool": {"name": "devdoctor", "version": "0.3.0"},
//!   "project": {"root": "/work/app", "types": ["Node.js"]},
//!   "config": {"path": "/work/app/.devdoctor.yml", "ignoreChecks": [], "requireChecks": []},
//!   "summary": {"pass": 1, "warn": 0, "fail": 0, "info": 0, "notApplicable": 0},
//!   "checks": [{"id": "system.git", "status": "PASS", "summary": "Git is available (2.43.0)"}]
//! }
//! ```

use std::collections::BTreeSet;

use serde::Serialize;

use super::StatusCounts;
use crate::checks::CheckResult;
use crate::config::LoadedConfig;
use crate::detection::DetectionResult;
use crate::error::{DoctorError, Result};
use crate::ui::UserInterface;

pub const TOOL_NAME: &str = "devdoctor";

#[derive(Debug, Serialize)]
pub struct ToolInfo {
    pub name: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ProjectInfo {
    pub root: String,
    pub types: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigInfo<'a> {
    pub path: String,
    pub ignore_checks: &'a BTreeSet<String>,
    pub require_checks: &'a BTreeSet<String>,
}

/// The JSON document. Includes every result, NOT_APPLICABLE too.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub tool: ToolInfo,
    pub project: ProjectInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<ConfigInfo<'a>>,
    pub summary: StatusCounts,
    pub checks: &'a [CheckResult],
}

impl<'a> JsonReport<'a> {
    pub fn new(
        detection: &DetectionResult,
        results: &'a [CheckResult],
        config: Option<&'a LoadedConfig>,
    ) -> Self {
        Self {
            tool: ToolInfo {
                name: TOOL_NAME,
                version: env!("CARGO_PKG_VERSION"),
            },
            project: ProjectInfo {
                root: detection.root().display().to_string(),
                types: detection.types().iter().map(|t| t.label()).collect(),
            },
            config: config.map(|loaded| ConfigInfo {
                path: loaded.path.display().to_string(),
                ignore_checks: &loaded.config.ignore_checks,
                require_checks: &loaded.config.require_checks,
            }),
            summary: StatusCounts::tally(results),
            checks: results,
        }
    }

    /// Serialize, compact or indented.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        json.map_err(|e| DoctorError::Other(e.into()))
    }

    /// Write the document as one message.
    pub fn render(&self, ui: &mut dyn UserInterface, pretty: bool) -> Result<()> {
        ui.message(&self.to_json(pretty)?);
        Ok(())
    }
}
