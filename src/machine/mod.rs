//! The state machine executor and its wrappers.
//!
//! - `Machine`: config in, `state()` / `send(event)` out
//! - `TrackedMachine`: adds request epochs so stale async results are dropped
//! - `SharedMachine`: cloneable `TrackedMachine` handle for in-flight effects
//! - `JournaledMachine`: adds a history of applied transitions
//!
//! All of them are synchronous. `send` never suspends and never fails; an
//! event without a table entry leaves the state as it was.

mod config;
mod error;
mod executor;
mod journal;
mod shared;
mod tracked;

pub use config::MachineConfig;
pub use error::{ConfigError, MachineError};
pub use executor::{Machine, MachineId, UnhandledPolicy};
pub use journal::JournaledMachine;
pub use shared::SharedMachine;
pub use tracked::{Settlement, Ticket, TrackedMachine};
