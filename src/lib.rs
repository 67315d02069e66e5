//! Flowstate: table-driven finite state machines for UI flows
//!
//! A machine is a fixed transition table (state -> event -> next state) plus
//! a current state. `send` resolves an event with two lookups and either
//! moves to the configured state or, when there is no entry, leaves the
//! state alone. There is no queue, no guard and no I/O in the core.
//!
//! # Core Concepts
//!
//! - **State / Event**: opaque, comparable tags via the `State` and `Event` traits
//! - **TransitionTable**: the static mapping a machine executes
//! - **Machine**: `create(config)`, `state()`, `send(event)`
//! - **TrackedMachine**: request epochs so late async results are discarded
//! - **FlowRegistry**: explicitly owned set of named machines with a lifecycle
//!
//! # Example
//!
//! ```rust
//! use flowstate::flows::{form_config, FormEvent, FormState};
//! use flowstate::machine::Machine;
//!
//! let mut form = Machine::create(form_config());
//!
//! assert_eq!(form.send(FormEvent::Submit), FormState::Submitting);
//! assert!(form.state().is_submitting());
//! assert_eq!(form.send(FormEvent::SubmitError), FormState::Error);
//! assert_eq!(form.send(FormEvent::Reset), FormState::Idle);
//!
//! // Idle has no entry for SubmitSuccess, so nothing happens.
//! assert_eq!(form.send(FormEvent::SubmitSuccess), FormState::Idle);
//! ```

pub mod builder;
pub mod context;
pub mod core;
pub mod effects;
pub mod flows;
pub mod lint;
pub mod machine;

// Re-export commonly used types
pub use crate::core::{Event, State, StateHistory, StateTransition, TransitionTable};
pub use crate::machine::{Machine, MachineConfig, SharedMachine, TrackedMachine, UnhandledPolicy};
