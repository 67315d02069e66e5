//! Cloneable handle to a tracked machine.
//!
//! Async operations outlive the `&mut` borrow of whoever started them. A
//! `SharedMachine` lets the starter, the UI and any later request act on the
//! same machine while an effect is in flight. The lock is only held for the
//! duration of a single synchronous call.

use crate::core::{Event, State};
use crate::machine::config::MachineConfig;
use crate::machine::executor::MachineId;
use crate::machine::tracked::{Settlement, Ticket, TrackedMachine};
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

/// Handle to a [`TrackedMachine`] shared between concurrent operations.
///
/// Clones point at the same machine.
///
/// # Example
///
/// ```rust
/// use flowstate::flows::{loading_config, LoadingEvent, LoadingState};
/// use flowstate::machine::SharedMachine;
///
/// let machine = SharedMachine::create(loading_config());
/// let widget = machine.clone();
///
/// let first = machine.begin(LoadingEvent::Load);
/// widget.send(LoadingEvent::Error);
/// let second = widget.begin(LoadingEvent::Retry);
///
/// assert!(machine.settle(first, LoadingEvent::Success).is_stale());
/// assert!(machine.is_current(second));
/// assert_eq!(machine.state(), LoadingState::Loading);
/// ```
pub struct SharedMachine<S: State, E: Event> {
    inner: Arc<Mutex<TrackedMachine<S, E>>>,
}

impl<S: State, E: Event> Clone for SharedMachine<S, E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: State, E: Event> fmt::Debug for SharedMachine<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let machine = self.inner.lock();
        f.debug_struct("SharedMachine")
            .field("id", &machine.id())
            .field("state", machine.state())
            .field("epoch", &machine.epoch())
            .finish()
    }
}

impl<S: State, E: Event> From<TrackedMachine<S, E>> for SharedMachine<S, E> {
    fn from(machine: TrackedMachine<S, E>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(machine)),
        }
    }
}

impl<S: State, E: Event> SharedMachine<S, E> {
    pub fn create(config: MachineConfig<S, E>) -> Self {
        TrackedMachine::create(config).into()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> S {
        self.inner.lock().state().clone()
    }

    pub fn id(&self) -> MachineId {
        self.inner.lock().id()
    }

    pub fn epoch(&self) -> u64 {
        self.inner.lock().epoch()
    }

    /// See [`TrackedMachine::begin`].
    pub fn begin(&self, event: E) -> Ticket {
        self.inner.lock().begin(event)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.inner.lock().is_current(ticket)
    }

    /// See [`TrackedMachine::settle`].
    pub fn settle(&self, ticket: Ticket, event: E) -> Settlement<S> {
        self.inner.lock().settle(ticket, event)
    }

    pub fn send(&self, event: E) -> S {
        self.inner.lock().send(event)
    }

    pub fn reset(&self) -> S {
        self.inner.lock().reset()
    }

    /// Whether both handles point at the same machine.
    pub fn same_machine(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}
