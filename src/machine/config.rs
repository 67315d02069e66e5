//! Immutable machine configuration.

use crate::core::{Event, State, TransitionTable};
use crate::lint::TableLint;
use crate::machine::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use stillwater::validation::Validation;

/// `{ initial, transitions }` for one machine.
///
/// Fixed at construction; a machine never mutates its config. The table may
/// be incomplete, missing entries are treated as ignored events.
///
/// Configs can be shipped as data:
///
/// ```rust
/// use flowstate::flows::{LoadingEvent, LoadingState};
/// use flowstate::machine::MachineConfig;
///
/// let json = r#"{
///     "initial": "Idle",
///     "transitions": {
///         "Idle": { "Load": "Loading" },
///         "Loading": { "Success": "Success", "Error": "Error" }
///     }
/// }"#;
///
/// let config = MachineConfig::<LoadingState, LoadingEvent>::from_json(json).unwrap();
/// assert_eq!(config.initial(), &LoadingState::Idle);
/// assert_eq!(config.transitions().len(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct MachineConfig<S: State, E: Event> {
    initial: S,
    transitions: TransitionTable<S, E>,
}

impl<S: State, E: Event> MachineConfig<S, E> {
    pub fn new(initial: S, transitions: TransitionTable<S, E>) -> Self {
        Self {
            initial,
            transitions,
        }
    }

    pub fn initial(&self) -> &S {
        &self.initial
    }

    pub fn transitions(&self) -> &TransitionTable<S, E> {
        &self.transitions
    }

    /// The closed set of states a machine built from this config can be in:
    /// `initial` plus every state named in the table.
    pub fn declared_states(&self) -> HashSet<&S> {
        let mut states = self.transitions.states();
        states.insert(&self.initial);
        states
    }

    /// Decode a config from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encode this config as JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Run `lint` over this config, returning it unchanged if it passes.
    ///
    /// All issues are reported together.
    pub fn validated(self, lint: &TableLint<S, E>) -> Result<Self, ConfigError> {
        match lint.check(&self) {
            Validation::Success(_) => Ok(self),
            Validation::Failure(issues) => {
                Err(ConfigError::Invalid(issues.iter().cloned().collect()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flows::{form_config, loading_config, FormState, LoadingEvent, LoadingState};
    use crate::lint::{LintBuilder, TableIssue};

    #[test]
    fn declared_states_cover_initial_and_table() {
        let config = loading_config();
        let states = config.declared_states();
        assert_eq!(states.len(), 4);
        assert!(states.contains(&LoadingState::Error));
    }

    #[test]
    fn initial_outside_table_is_still_declared() {
        let config: MachineConfig<LoadingState, LoadingEvent> =
            MachineConfig::new(LoadingState::Success, TransitionTable::new());
        assert_eq!(config.declared_states().len(), 1);
        assert!(config.declared_states().contains(&LoadingState::Success));
    }

    #[test]
    fn json_roundtrip_preserves_config() {
        let config = loading_config();
        let json = config.to_json().unwrap();
        let back = MachineConfig::from_json(&json).unwrap();
        assert_eq!(config, back);
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let result = MachineConfig::<LoadingState, LoadingEvent>::from_json(
            r#"{"initial": "Sleeping", "transitions": {}}"#,
        );
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    fn validated_passes_clean_config() {
        let lint = LintBuilder::new().deny_unreachable().build();
        assert!(loading_config().validated(&lint).is_ok());
    }

    #[test]
    fn validated_reports_issues() {
        let lint = LintBuilder::new().deny_unreachable().build();
        match form_config().validated(&lint) {
            Err(ConfigError::Invalid(issues)) => {
                assert_eq!(
                    issues,
                    vec![TableIssue::UnreachableState {
                        state: FormState::Validating.name().to_string()
                    }]
                );
            }
            other => panic!("expected invalid config, got {other:?}"),
        }
    }
}
