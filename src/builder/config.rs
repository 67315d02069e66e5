//! Builder for constructing machine configs.

use crate::builder::error::BuildError;
use crate::core::{Event, State, TransitionTable};
use crate::machine::{Machine, MachineConfig};

/// Fluent builder for [`MachineConfig`].
///
/// Unlike [`TransitionTable::insert`], which silently overwrites, the builder
/// rejects a `(state, event)` pair mapped to two different targets. Declaring
/// the same entry twice is harmless.
///
/// # Example
///
/// ```rust
/// use flowstate::builder::MachineConfigBuilder;
/// use flowstate::flows::{LoadingEvent, LoadingState};
///
/// let config = MachineConfigBuilder::new()
///     .initial(LoadingState::Idle)
///     .on(LoadingState::Idle, LoadingEvent::Load, LoadingState::Loading)
///     .on_any(
///         LoadingState::Error,
///         [LoadingEvent::Load, LoadingEvent::Retry],
///         LoadingState::Loading,
///     )
///     .build()
///     .unwrap();
///
/// assert_eq!(config.transitions().len(), 3);
/// ```
pub struct MachineConfigBuilder<S: State, E: Event> {
    initial: Option<S>,
    entries: Vec<(S, E, S)>,
}

impl<S: State, E: Event> MachineConfigBuilder<S, E> {
    pub fn new() -> Self {
        Self {
            initial: None,
            entries: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Map `event` in state `from` to `to`.
    pub fn on(mut self, from: S, event: E, to: S) -> Self {
        self.entries.push((from, event, to));
        self
    }

    /// Map each of `events` in state `from` to `to`.
    pub fn on_any<I>(mut self, from: S, events: I, to: S) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        for event in events {
            self.entries.push((from.clone(), event, to.clone()));
        }
        self
    }

    /// Add every entry of an existing table.
    pub fn table(mut self, table: &TransitionTable<S, E>) -> Self {
        for (from, event, to) in table.iter() {
            self.entries.push((from.clone(), event.clone(), to.clone()));
        }
        self
    }

    /// Build the config.
    pub fn build(self) -> Result<MachineConfig<S, E>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        let mut table = TransitionTable::new();
        for (from, event, to) in self.entries {
            if let Some(existing) = table.lookup(&from, &event) {
                if existing != &to {
                    return Err(BuildError::ConflictingTransition {
                        state: from.name().to_string(),
                        event: event.name().to_string(),
                        first: existing.name().to_string(),
                        second: to.name().to_string(),
                    });
                }
                continue;
            }
            table.insert(from, event, to);
        }

        Ok(MachineConfig::new(initial, table))
    }

    /// Build the config and create a machine from it.
    pub fn build_machine(self) -> Result<Machine<S, E>, BuildError> {
        Ok(Machine::create(self.build()?))
    }
}

impl<S: State, E: Event> Default for MachineConfigBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flows::{loading_table, LoadingEvent, LoadingState};

    #[test]
    fn builder_validates_required_fields() {
        let result = MachineConfigBuilder::<LoadingState, LoadingEvent>::new().build();

        assert!(matches!(result, Err(BuildError::MissingInitialState)));
    }

    #[test]
    fn empty_table_is_allowed() {
        let config = MachineConfigBuilder::<LoadingState, LoadingEvent>::new()
            .initial(LoadingState::Idle)
            .build()
            .unwrap();

        assert!(config.transitions().is_empty());
    }

    #[test]
    fn conflicting_entries_are_rejected() {
        let result = MachineConfigBuilder::new()
            .initial(LoadingState::Idle)
            .on(LoadingState::Idle, LoadingEvent::Load, LoadingState::Loading)
            .on(LoadingState::Idle, LoadingEvent::Load, LoadingState::Error)
            .build();

        assert_eq!(
            result.unwrap_err(),
            BuildError::ConflictingTransition {
                state: "Idle".to_string(),
                event: "Load".to_string(),
                first: "Loading".to_string(),
                second: "Error".to_string(),
            }
        );
    }

    #[test]
    fn duplicate_identical_entries_are_allowed() {
        let config = MachineConfigBuilder::new()
            .initial(LoadingState::Idle)
            .on(LoadingState::Idle, LoadingEvent::Load, LoadingState::Loading)
            .on(LoadingState::Idle, LoadingEvent::Load, LoadingState::Loading)
            .build()
            .unwrap();

        assert_eq!(config.transitions().len(), 1);
    }

    #[test]
    fn table_entries_are_merged() {
        let config = MachineConfigBuilder::new()
            .initial(LoadingState::Idle)
            .table(&loading_table())
            .build()
            .unwrap();

        assert_eq!(config.transitions(), &loading_table());
    }

    #[test]
    fn build_machine_starts_in_initial() {
        let machine = MachineConfigBuilder::new()
            .initial(LoadingState::Idle)
            .table(&loading_table())
            .build_machine()
            .unwrap();

        assert_eq!(machine.state(), &LoadingState::Idle);
    }
}
