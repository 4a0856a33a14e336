//! Fix planning and application.
//!
//! The planner maps FAIL results to [`FixAction`]s. Only SAFE actions with a
//! command may be applied; CAUTION actions are shown as guidance.

pub mod apply;
pub mod plan;
pub mod planner;

pub use apply::{read_confirmation, ActionReport, ApplyOutcome, ApplySummary, FixApplier, APPLY_TIMEOUT};
pub use plan::{FixAction, FixPlan};
pub use planner::{installer_command, FixPlanner, NODE_DEPENDENCIES_ID};
