//! Explicitly owned registry of named flows.

use crate::context::error::RegistryError;
use crate::core::{Event, State};
use crate::machine::{MachineConfig, Settlement, Ticket, TrackedMachine};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::info;

/// Lifecycle phase of a [`FlowRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lifecycle {
    Uninitialized,
    Ready,
    TornDown,
}

/// Application-wide set of named machines with a defined lifecycle.
///
/// Construct one at startup, hand out references, `reset` it on logout and
/// `teardown` it on shutdown. There is no global instance. Everything but
/// `init` and `phase` returns [`RegistryError::NotReady`] outside `Ready`.
///
/// # Example
///
/// ```rust
/// use flowstate::context::FlowRegistry;
/// use flowstate::flows::{loading_config, LoadingEvent, LoadingState};
///
/// let mut registry = FlowRegistry::new();
/// registry.init();
/// registry.register("chat-widget", loading_config()).unwrap();
///
/// registry.send("chat-widget", LoadingEvent::Load).unwrap();
/// assert_eq!(registry.state("chat-widget").unwrap(), &LoadingState::Loading);
///
/// // Logging out puts every flow back to its initial state.
/// registry.reset().unwrap();
/// assert_eq!(registry.state("chat-widget").unwrap(), &LoadingState::Idle);
/// ```
#[derive(Debug)]
pub struct FlowRegistry<S: State, E: Event> {
    phase: Lifecycle,
    flows: HashMap<String, TrackedMachine<S, E>>,
}

impl<S: State, E: Event> Default for FlowRegistry<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, E: Event> FlowRegistry<S, E> {
    pub fn new() -> Self {
        Self {
            phase: Lifecycle::Uninitialized,
            flows: HashMap::new(),
        }
    }

    pub fn phase(&self) -> Lifecycle {
        self.phase
    }

    /// Mark the registry ready. Also revives a torn-down registry.
    pub fn init(&mut self) {
        info!(from = ?self.phase, "Flow registry initialized");
        self.phase = Lifecycle::Ready;
    }

    /// Register a new machine under `key`.
    pub fn register(
        &mut self,
        key: impl Into<String>,
        config: MachineConfig<S, E>,
    ) -> Result<(), RegistryError> {
        self.ensure_ready()?;
        let key = key.into();
        if self.flows.contains_key(&key) {
            return Err(RegistryError::DuplicateFlow { key });
        }
        self.flows.insert(key, TrackedMachine::create(config));
        Ok(())
    }

    pub fn contains(&self, key: &str) -> Result<bool, RegistryError> {
        self.ensure_ready()?;
        Ok(self.flows.contains_key(key))
    }

    /// Registered keys, sorted.
    pub fn keys(&self) -> Result<Vec<&str>, RegistryError> {
        self.ensure_ready()?;
        let mut keys: Vec<&str> = self.flows.keys().map(String::as_str).collect();
        keys.sort_unstable();
        Ok(keys)
    }

    pub fn state(&self, key: &str) -> Result<&S, RegistryError> {
        self.ensure_ready()?;
        Ok(self.flow(key)?.state())
    }

    pub fn send(&mut self, key: &str, event: E) -> Result<S, RegistryError> {
        self.ensure_ready()?;
        Ok(self.flow_mut(key)?.send(event))
    }

    pub fn begin(&mut self, key: &str, event: E) -> Result<Ticket, RegistryError> {
        self.ensure_ready()?;
        Ok(self.flow_mut(key)?.begin(event))
    }

    pub fn settle(
        &mut self,
        key: &str,
        ticket: Ticket,
        event: E,
    ) -> Result<Settlement<S>, RegistryError> {
        self.ensure_ready()?;
        Ok(self.flow_mut(key)?.settle(ticket, event))
    }

    /// Put every machine back in its initial state.
    ///
    /// Outstanding tickets are invalidated, so requests launched before the
    /// reset cannot leak results into the fresh session.
    pub fn reset(&mut self) -> Result<(), RegistryError> {
        self.ensure_ready()?;
        for machine in self.flows.values_mut() {
            machine.reset();
        }
        info!(flows = self.flows.len(), "Flow registry reset");
        Ok(())
    }

    /// Drop every machine. `init` must be called again before further use.
    pub fn teardown(&mut self) -> Result<(), RegistryError> {
        self.ensure_ready()?;
        info!(flows = self.flows.len(), "Flow registry torn down");
        self.flows.clear();
        self.phase = Lifecycle::TornDown;
        Ok(())
    }

    fn ensure_ready(&self) -> Result<(), RegistryError> {
        if self.phase == Lifecycle::Ready {
            Ok(())
        } else {
            Err(RegistryError::NotReady { phase: self.phase })
        }
    }

    fn flow(&self, key: &str) -> Result<&TrackedMachine<S, E>, RegistryError> {
        self.flows.get(key).ok_or_else(|| RegistryError::UnknownFlow {
            key: key.to_string(),
        })
    }

    fn flow_mut(&mut self, key: &str) -> Result<&mut TrackedMachine<S, E>, RegistryError> {
        self.flows
            .get_mut(key)
            .ok_or_else(|| RegistryError::UnknownFlow {
                key: key.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flows::{loading_config, LoadingEvent, LoadingState};

    fn ready() -> FlowRegistry<LoadingState, LoadingEvent> {
        let mut registry = FlowRegistry::new();
        registry.init();
        registry
    }

    #[test]
    fn new_registry_is_uninitialized() {
        let mut registry: FlowRegistry<LoadingState, LoadingEvent> = FlowRegistry::new();
        assert_eq!(registry.phase(), Lifecycle::Uninitialized);
        assert_eq!(
            registry.register("orders", loading_config()),
            Err(RegistryError::NotReady {
                phase: Lifecycle::Uninitialized
            })
        );
    }

    #[test]
    fn register_rejects_duplicates() {
        let mut registry = ready();
        registry.register("orders", loading_config()).unwrap();

        assert_eq!(
            registry.register("orders", loading_config()),
            Err(RegistryError::DuplicateFlow {
                key: "orders".to_string()
            })
        );
    }

    #[test]
    fn unknown_key_is_an_error() {
        let mut registry = ready();
        assert_eq!(
            registry.send("missing", LoadingEvent::Load),
            Err(RegistryError::UnknownFlow {
                key: "missing".to_string()
            })
        );
    }

    #[test]
    fn flows_are_independent() {
        let mut registry = ready();
        registry.register("orders", loading_config()).unwrap();
        registry.register("wallet", loading_config()).unwrap();

        registry.send("orders", LoadingEvent::Load).unwrap();

        assert_eq!(registry.state("orders").unwrap(), &LoadingState::Loading);
        assert_eq!(registry.state("wallet").unwrap(), &LoadingState::Idle);
        assert_eq!(registry.keys().unwrap(), vec!["orders", "wallet"]);
    }

    #[test]
    fn reset_discards_in_flight_results() {
        let mut registry = ready();
        registry.register("chat", loading_config()).unwrap();

        let ticket = registry.begin("chat", LoadingEvent::Load).unwrap();
        registry.reset().unwrap();

        let settlement = registry
            .settle("chat", ticket, LoadingEvent::Success)
            .unwrap();
        assert!(settlement.is_stale());
        assert_eq!(registry.state("chat").unwrap(), &LoadingState::Idle);
    }

    #[test]
    fn teardown_drops_flows_until_reinit() {
        let mut registry = ready();
        registry.register("chat", loading_config()).unwrap();
        registry.teardown().unwrap();

        assert_eq!(registry.phase(), Lifecycle::TornDown);
        assert!(matches!(
            registry.state("chat"),
            Err(RegistryError::NotReady { .. })
        ));

        registry.init();
        assert_eq!(registry.contains("chat"), Ok(false));
        registry.register("chat", loading_config()).unwrap();
    }

    fn not_ready<T>(phase: Lifecycle) -> Result<T, RegistryError> {
        Err(RegistryError::NotReady { phase })
    }

    #[test]
    fn every_operation_needs_ready_phase() {
        let mut registry: FlowRegistry<LoadingState, LoadingEvent> = FlowRegistry::new();
        assert_eq!(registry.teardown(), not_ready(Lifecycle::Uninitialized));
        assert_eq!(registry.keys(), not_ready(Lifecycle::Uninitialized));
        assert_eq!(registry.contains("chat"), not_ready(Lifecycle::Uninitialized));
        assert_eq!(registry.reset(), not_ready(Lifecycle::Uninitialized));
        assert_eq!(registry.phase(), Lifecycle::Uninitialized);

        registry.init();
        registry.teardown().unwrap();
        assert_eq!(registry.teardown(), not_ready(Lifecycle::TornDown));
        assert_eq!(registry.keys(), not_ready(Lifecycle::TornDown));
        assert_eq!(registry.contains("chat"), not_ready(Lifecycle::TornDown));
        assert_eq!(
            registry.begin("chat", LoadingEvent::Load),
            not_ready(Lifecycle::TornDown)
        );
    }
}
