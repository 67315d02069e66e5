//! Request-epoch guard against stale async results.
//!
//! Every asynchronous operation launched around a machine is tagged with
//! the epoch current when it started. When it completes, its result event
//! is only applied if no newer operation (or reset) has happened since.

use crate::core::{Event, State};
use crate::machine::config::MachineConfig;
use crate::machine::executor::{Machine, MachineId};
use crate::machine::error::MachineError;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Captured epoch of one asynchronous operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ticket {
    epoch: u64,
}

impl Ticket {
    pub fn epoch(&self) -> u64 {
        self.epoch
    }
}

/// Outcome of settling an operation.
#[derive(Clone, Debug, PartialEq)]
pub enum Settlement<S: State> {
    /// Ticket was current; the event was sent and this is the resulting state
    Applied(S),

    /// A newer operation superseded this one; state was not touched
    Stale { ticket: u64, current: u64 },
}

impl<S: State> Settlement<S> {
    pub fn is_stale(&self) -> bool {
        matches!(self, Self::Stale { .. })
    }
}

/// Machine that tags async operations with a monotonically increasing epoch.
///
/// # Example
///
/// ```rust
/// use flowstate::flows::{loading_config, LoadingEvent, LoadingState};
/// use flowstate::machine::{Settlement, TrackedMachine};
///
/// let mut machine = TrackedMachine::create(loading_config());
///
/// let first = machine.begin(LoadingEvent::Load);
/// machine.send(LoadingEvent::Error);
/// let second = machine.begin(LoadingEvent::Retry);
///
/// // The first request resolves late and is discarded.
/// assert!(machine.settle(first, LoadingEvent::Success).is_stale());
/// assert_eq!(machine.state(), &LoadingState::Loading);
///
/// assert_eq!(
///     machine.settle(second, LoadingEvent::Success),
///     Settlement::Applied(LoadingState::Success)
/// );
/// ```
#[derive(Clone, Debug)]
pub struct TrackedMachine<S: State, E: Event> {
    machine: Machine<S, E>,
    epoch: u64,
}

impl<S: State, E: Event> TrackedMachine<S, E> {
    pub fn create(config: MachineConfig<S, E>) -> Self {
        Self::from_machine(Machine::create(config))
    }

    pub fn from_machine(machine: Machine<S, E>) -> Self {
        Self { machine, epoch: 0 }
    }

    pub fn state(&self) -> &S {
        self.machine.state()
    }

    pub fn id(&self) -> MachineId {
        self.machine.id()
    }

    /// Current epoch. Starts at 0 and only ever increases.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn machine(&self) -> &Machine<S, E> {
        &self.machine
    }

    /// Start a new operation: send `event` and issue a ticket for it.
    ///
    /// The epoch is bumped whether or not `event` has an entry, since the
    /// caller is about to launch new work either way. All earlier tickets
    /// become stale.
    pub fn begin(&mut self, event: E) -> Ticket {
        self.epoch += 1;
        self.machine.send(event);
        Ticket { epoch: self.epoch }
    }

    /// Whether `ticket` belongs to the newest operation.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.epoch == self.epoch
    }

    /// Deliver the result event of the operation identified by `ticket`.
    pub fn settle(&mut self, ticket: Ticket, event: E) -> Settlement<S> {
        if !self.is_current(ticket) {
            debug!(
                machine = %self.machine.id(),
                ticket = ticket.epoch,
                current = self.epoch,
                event = event.name(),
                "Discarding stale result"
            );
            return Settlement::Stale {
                ticket: ticket.epoch,
                current: self.epoch,
            };
        }
        Settlement::Applied(self.machine.send(event))
    }

    /// Send an event that is not tied to an operation.
    pub fn send(&mut self, event: E) -> S {
        self.machine.send(event)
    }

    pub fn try_send(&mut self, event: E) -> Result<S, MachineError> {
        self.machine.try_send(event)
    }

    /// Return to the initial state and invalidate every outstanding ticket.
    pub fn reset(&mut self) -> S {
        self.epoch += 1;
        self.machine.reset()
    }
}
