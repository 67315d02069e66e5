//! Async integration using Stillwater 0.11 effects.
//!
//! The machine itself never suspends. This module is the "imperative shell"
//! around it: an operation is started with the flow's start event, its
//! effect runs against an environment, and the decoded result is delivered
//! as the success or failure event, guarded by the request epoch. The
//! machine is passed as a [`SharedMachine`](crate::machine::SharedMachine)
//! so it stays usable while the effect is suspended.
//!
//! # Example
//!
//! ```rust
//! use flowstate::effects::drive;
//! use flowstate::flows::{loading_config, LoadingEvent, LoadingState};
//! use flowstate::machine::SharedMachine;
//! use stillwater::prelude::*;
//!
//! let runtime = tokio::runtime::Runtime::new().unwrap();
//! runtime.block_on(async {
//!     let machine = SharedMachine::create(loading_config());
//!     let effect = from_fn(|_: &()| Ok::<_, String>(42));
//!
//!     let settled = drive(&machine, &LoadingEvent::flow(), effect, &()).await;
//!     assert_eq!(settled.outcome, Ok(42));
//!     assert_eq!(machine.state(), LoadingState::Success);
//! });
//! ```

mod driver;
mod flow;

pub use driver::{drive, Settled};
pub use flow::AsyncFlow;
