//! Build errors for machine config builders.

use thiserror::Error;

/// Errors that can occur when building a machine config.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Event '{event}' in state '{state}' is mapped to both '{first}' and '{second}'")]
    ConflictingTransition {
        state: String,
        event: String,
        first: String,
        second: String,
    },
}
