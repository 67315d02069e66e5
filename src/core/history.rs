//! Transition history tracking.
//!
//! Record of applied transitions. The executor itself keeps no history;
//! [`JournaledMachine`](crate::machine::JournaledMachine) opts in and
//! appends to its own history in place.

use super::state::{Event, State};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single applied transition.
///
/// # Example
///
/// ```rust
/// use flowstate::core::StateTransition;
/// use flowstate::flows::{LoadingEvent, LoadingState};
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: LoadingState::Idle,
///     event: LoadingEvent::Load,
///     to: LoadingState::Loading,
///     timestamp: Utc::now(),
///     sequence: 0,
/// };
/// assert!(!transition.is_reentry());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State, E: Event> {
    /// The state being transitioned from
    pub from: S,
    /// The event that triggered the transition
    pub event: E,
    /// The state being transitioned to
    pub to: S,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
    /// Position of this transition within its history
    pub sequence: u64,
}

impl<S: State, E: Event> StateTransition<S, E> {
    /// Whether the transition leaves the machine where it was.
    pub fn is_reentry(&self) -> bool {
        self.from == self.to
    }
}

/// Ordered history of state transitions.
///
/// `record` returns a new history with the transition added and leaves the
/// original untouched.
///
/// # Example
///
/// ```rust
/// use flowstate::core::{StateHistory, StateTransition};
/// use flowstate::flows::{LoadingEvent, LoadingState};
/// use chrono::Utc;
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         from: LoadingState::Idle,
///         event: LoadingEvent::Load,
///         to: LoadingState::Loading,
///         timestamp: Utc::now(),
///         sequence: 0,
///     })
///     .record(StateTransition {
///         from: LoadingState::Loading,
///         event: LoadingEvent::Success,
///         to: LoadingState::Success,
///         timestamp: Utc::now(),
///         sequence: 1,
///     });
///
/// let path = history.get_path();
/// assert_eq!(path.len(), 3); // Idle -> Loading -> Success
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State, E: Event> {
    transitions: Vec<StateTransition<S, E>>,
}

impl<S: State, E: Event> Default for StateHistory<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, E: Event> StateHistory<S, E> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, transition: StateTransition<S, E>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Append a transition in place.
    pub(crate) fn push(&mut self, transition: StateTransition<S, E>) {
        self.transitions.push(transition);
    }

    /// Drop the oldest transitions so that at most `limit` remain.
    pub(crate) fn keep_newest(&mut self, limit: usize) {
        let excess = self.transitions.len().saturating_sub(limit);
        if excess > 0 {
            self.transitions.drain(..excess);
        }
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the first transition, then the `to`
    /// state of each transition.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Events in the order they were applied.
    pub fn events(&self) -> Vec<&E> {
        self.transitions.iter().map(|t| &t.event).collect()
    }

    /// Duration from first to last transition, `None` when empty.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all transitions.
    pub fn transitions(&self) -> &[StateTransition<S, E>] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
