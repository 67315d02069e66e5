//! Core state machine types.
//!
//! This module contains the pure pieces every machine is built from:
//! - `State` and `Event` traits for the tags a machine works with
//! - `TransitionTable`, the static state -> event -> state mapping
//! - Immutable history tracking
//!
//! Nothing in this module performs I/O or logging.

mod history;
mod state;
mod table;

pub use history::{StateHistory, StateTransition};
pub use state::{Event, State};
pub use table::TransitionTable;
