//! Structural problems a lint can find in a machine config.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TableIssue {
    #[error("State '{state}' can never be entered from the initial state")]
    UnreachableState { state: String },

    #[error("State '{state}' has no outgoing transitions")]
    DeadEnd { state: String },

    #[error("Custom check failed: {message}")]
    Custom { message: String },
}
