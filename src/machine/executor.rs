//! Table-driven state machine executor.

use crate::core::{Event, State};
use crate::machine::config::MachineConfig;
use crate::machine::error::MachineError;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace, warn};
use uuid::Uuid;

/// Identifier attached to every log event a machine emits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MachineId(Uuid);

impl MachineId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MachineId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MachineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// What `send` does with an event that has no entry for the current state.
///
/// Either way the state is left unchanged; the policy only decides how loud
/// the no-op is. Use [`Machine::try_send`] to get an error instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnhandledPolicy {
    /// Silently ignore (trace-level log only)
    #[default]
    Ignore,

    /// Ignore but emit a warning
    Warn,
}

/// Finite state machine over a fixed transition table.
///
/// `send` is synchronous and O(1): two hash lookups, no queue, no guards.
/// The current state is always `initial` or a state named in the table.
///
/// # Example
///
/// ```rust
/// use flowstate::flows::{loading_config, LoadingEvent, LoadingState};
/// use flowstate::machine::Machine;
///
/// let mut machine = Machine::create(loading_config());
/// assert_eq!(machine.state(), &LoadingState::Idle);
///
/// assert_eq!(machine.send(LoadingEvent::Load), LoadingState::Loading);
/// assert_eq!(machine.send(LoadingEvent::Success), LoadingState::Success);
///
/// // No entry for Success + Success: ignored
/// assert_eq!(machine.send(LoadingEvent::Success), LoadingState::Success);
/// ```
#[derive(Debug)]
pub struct Machine<S: State, E: Event> {
    id: MachineId,
    config: MachineConfig<S, E>,
    current: S,
    policy: UnhandledPolicy,
}

/// A clone is a separate machine and gets its own id.
impl<S: State, E: Event> Clone for Machine<S, E> {
    fn clone(&self) -> Self {
        Self {
            id: MachineId::new(),
            config: self.config.clone(),
            current: self.current.clone(),
            policy: self.policy,
        }
    }
}

impl<S: State, E: Event> Machine<S, E> {
    /// Create a machine in `config.initial()`.
    ///
    /// Never fails: an incomplete or empty table is valid.
    pub fn create(config: MachineConfig<S, E>) -> Self {
        let current = config.initial().clone();
        Self {
            id: MachineId::new(),
            config,
            current,
            policy: UnhandledPolicy::default(),
        }
    }

    /// Set how unhandled events are reported.
    pub fn with_policy(mut self, policy: UnhandledPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Get current state (pure)
    pub fn state(&self) -> &S {
        &self.current
    }

    pub fn id(&self) -> MachineId {
        self.id
    }

    pub fn config(&self) -> &MachineConfig<S, E> {
        &self.config
    }

    pub fn policy(&self) -> UnhandledPolicy {
        self.policy
    }

    /// Whether `event` has an entry from the current state (pure)
    pub fn can_send(&self, event: &E) -> bool {
        self.config
            .transitions()
            .lookup(&self.current, event)
            .is_some()
    }

    /// Apply `event` and return the resulting state.
    ///
    /// If the table has no entry for `(state, event)` the state is left
    /// unchanged and returned as is.
    pub fn send(&mut self, event: E) -> S {
        if !self.apply(&event) {
            self.report_unhandled(&event);
        }
        self.current.clone()
    }

    /// Like `send`, but an event with no entry is an error.
    pub fn try_send(&mut self, event: E) -> Result<S, MachineError> {
        if self.apply(&event) {
            Ok(self.current.clone())
        } else {
            Err(self.unhandled(&event))
        }
    }

    /// Return to the configured initial state.
    pub fn reset(&mut self) -> S {
        debug!(
            machine = %self.id,
            from = self.current.name(),
            to = self.config.initial().name(),
            "State machine reset"
        );
        self.current = self.config.initial().clone();
        self.current.clone()
    }

    /// Look up and apply a transition. Returns false when there is none.
    pub(crate) fn apply(&mut self, event: &E) -> bool {
        let Some(next) = self.config.transitions().lookup(&self.current, event) else {
            return false;
        };

        debug!(
            machine = %self.id,
            from = self.current.name(),
            event = event.name(),
            to = next.name(),
            "State transition"
        );
        self.current = next.clone();
        true
    }

    /// Log an event that had no entry, at the level the policy asks for.
    pub(crate) fn report_unhandled(&self, event: &E) {
        match self.policy {
            UnhandledPolicy::Ignore => trace!(
                machine = %self.id,
                state = self.current.name(),
                event = event.name(),
                "Event ignored, no transition"
            ),
            UnhandledPolicy::Warn => warn!(
                machine = %self.id,
                state = self.current.name(),
                event = event.name(),
                "Event ignored, no transition"
            ),
        }
    }

    pub(crate) fn unhandled(&self, event: &E) -> MachineError {
        MachineError::Unhandled {
            state: self.current.name().to_string(),
            event: event.name().to_string(),
        }
    }
}
