//! Machine and configuration errors.

use crate::lint::TableIssue;
use thiserror::Error;

/// Errors reported by [`Machine::try_send`](crate::machine::Machine::try_send).
///
/// `send` never fails; this is the loud variant for callers that want an
/// unexpected event treated as a logic bug.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MachineError {
    #[error("No transition for event '{event}' in state '{state}'")]
    Unhandled { state: String, event: String },
}

/// Errors that can occur when loading or validating a machine config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config JSON could not be decoded: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config failed validation with {} issue(s)", .0.len())]
    Invalid(Vec<TableIssue>),
}
