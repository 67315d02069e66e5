//! Builder API for creating table lints.

use crate::core::{Event, State};
use crate::lint::issues::TableIssue;
use crate::lint::rules::{LintCheck, TableLint};
use crate::machine::MachineConfig;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Builder for creating table lints
pub struct LintBuilder<S: State, E: Event> {
    deny_unreachable: bool,
    deny_dead_ends: bool,
    required_checks: Vec<LintCheck<S, E>>,
}

impl<S: State, E: Event> LintBuilder<S, E> {
    pub fn new() -> Self {
        Self {
            deny_unreachable: false,
            deny_dead_ends: false,
            required_checks: Vec::new(),
        }
    }

    /// Report declared states that cannot be reached from the initial state
    pub fn deny_unreachable(mut self) -> Self {
        self.deny_unreachable = true;
        self
    }

    /// Report declared states with no outgoing transitions
    pub fn deny_dead_ends(mut self) -> Self {
        self.deny_dead_ends = true;
        self
    }

    /// Add a custom validation check
    pub fn require<F>(mut self, check: F) -> Self
    where
        F: Fn(&MachineConfig<S, E>) -> Validation<(), NonEmptyVec<TableIssue>>
            + Send
            + Sync
            + 'static,
    {
        self.required_checks.push(Box::new(check));
        self
    }

    /// Add a simple predicate check with error message
    pub fn require_pred<F>(mut self, predicate: F, error_msg: String) -> Self
    where
        F: Fn(&MachineConfig<S, E>) -> bool + Send + Sync + 'static,
    {
        let check = move |config: &MachineConfig<S, E>| {
            if predicate(config) {
                Validation::success(())
            } else {
                Validation::fail(TableIssue::Custom {
                    message: error_msg.clone(),
                })
            }
        };
        self.required_checks.push(Box::new(check));
        self
    }

    pub fn build(self) -> TableLint<S, E> {
        TableLint {
            deny_unreachable: self.deny_unreachable,
            deny_dead_ends: self.deny_dead_ends,
            required_checks: self.required_checks,
        }
    }
}

impl<S: State, E: Event> Default for LintBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flows::{loading_config, LoadingEvent, LoadingState};

    #[test]
    fn custom_check_can_inspect_initial() {
        let lint: TableLint<LoadingState, LoadingEvent> = LintBuilder::new()
            .require(|config: &MachineConfig<LoadingState, LoadingEvent>| {
                if config.initial() == &LoadingState::Idle {
                    Validation::success(())
                } else {
                    Validation::fail(TableIssue::Custom {
                        message: "machines must start idle".to_string(),
                    })
                }
            })
            .build();

        assert!(lint.check(&loading_config()).is_success());

        let table = loading_config().transitions().clone();
        let busy = MachineConfig::new(LoadingState::Loading, table);
        assert!(lint.check(&busy).is_failure());
    }

    #[test]
    fn default_builder_enables_nothing() {
        let lint: TableLint<LoadingState, LoadingEvent> = LintBuilder::default().build();
        assert!(!lint.deny_unreachable);
        assert!(!lint.deny_dead_ends);
        assert!(lint.required_checks.is_empty());
    }
}
