//! Builder API for ergonomic machine construction.
//!
//! This module provides a fluent config builder and macros for declaring
//! states, events and transition tables with minimal boilerplate.

pub mod config;
pub mod error;
pub mod macros;

pub use config::MachineConfigBuilder;
pub use error::BuildError;
