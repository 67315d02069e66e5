//! Machine wrapper that keeps a history of applied transitions.

use crate::core::{Event, State, StateHistory, StateTransition};
use crate::machine::config::MachineConfig;
use crate::machine::error::MachineError;
use crate::machine::executor::{Machine, UnhandledPolicy};
use chrono::Utc;

/// [`Machine`] plus a [`StateHistory`] of every transition it applied.
///
/// Ignored events leave no record but are logged according to the
/// machine's [`UnhandledPolicy`]. Mostly useful for asserting the path a
/// flow took and for diagnostics. Long-lived journals should set a
/// [`with_history_limit`](Self::with_history_limit).
///
/// # Example
///
/// ```rust
/// use flowstate::flows::{loading_config, LoadingEvent, LoadingState};
/// use flowstate::machine::JournaledMachine;
///
/// let mut machine = JournaledMachine::create(loading_config()).with_history_limit(2);
/// machine.send(LoadingEvent::Load);
/// machine.send(LoadingEvent::Error);
/// machine.send(LoadingEvent::Retry);
///
/// assert_eq!(
///     machine.history().get_path(),
///     vec![&LoadingState::Loading, &LoadingState::Error, &LoadingState::Loading]
/// );
/// ```
#[derive(Clone, Debug)]
pub struct JournaledMachine<S: State, E: Event> {
    machine: Machine<S, E>,
    history: StateHistory<S, E>,
    applied: u64,
    limit: Option<usize>,
}

impl<S: State, E: Event> JournaledMachine<S, E> {
    pub fn create(config: MachineConfig<S, E>) -> Self {
        Self::from_machine(Machine::create(config))
    }

    pub fn from_machine(machine: Machine<S, E>) -> Self {
        Self {
            machine,
            history: StateHistory::new(),
            applied: 0,
            limit: None,
        }
    }

    /// Set how unhandled events are reported.
    pub fn with_policy(mut self, policy: UnhandledPolicy) -> Self {
        self.machine = self.machine.with_policy(policy);
        self
    }

    /// Keep at most `limit` transitions, dropping the oldest first.
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self.history.keep_newest(limit);
        self
    }

    pub fn state(&self) -> &S {
        self.machine.state()
    }

    pub fn machine(&self) -> &Machine<S, E> {
        &self.machine
    }

    pub fn history(&self) -> &StateHistory<S, E> {
        &self.history
    }

    /// Total number of transitions applied, including any dropped by the
    /// history limit.
    pub fn applied(&self) -> u64 {
        self.applied
    }

    pub fn send(&mut self, event: E) -> S {
        let from = self.machine.state().clone();
        if self.machine.apply(&event) {
            self.record(from, event);
        } else {
            self.machine.report_unhandled(&event);
        }
        self.machine.state().clone()
    }

    pub fn try_send(&mut self, event: E) -> Result<S, MachineError> {
        let from = self.machine.state().clone();
        if !self.machine.apply(&event) {
            return Err(self.machine.unhandled(&event));
        }
        self.record(from, event);
        Ok(self.machine.state().clone())
    }

    fn record(&mut self, from: S, event: E) {
        self.history.push(StateTransition {
            from,
            event,
            to: self.machine.state().clone(),
            timestamp: Utc::now(),
            sequence: self.applied,
        });
        self.applied += 1;
        if let Some(limit) = self.limit {
            self.history.keep_newest(limit);
        }
    }
}
