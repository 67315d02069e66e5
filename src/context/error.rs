//! Registry errors.

use crate::context::registry::Lifecycle;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum RegistryError {
    #[error("Registry is {phase:?}; call init() first")]
    NotReady { phase: Lifecycle },

    #[error("No flow registered under '{key}'")]
    UnknownFlow { key: String },

    #[error("A flow is already registered under '{key}'")]
    DuplicateFlow { key: String },
}
