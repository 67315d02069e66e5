//! Lint rules over a machine config, using Validation to accumulate issues.

use crate::core::{Event, State};
use crate::lint::issues::TableIssue;
use crate::machine::MachineConfig;
use std::collections::{HashSet, VecDeque};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Type alias for custom lint check functions
pub type LintCheck<S, E> = Box<
    dyn Fn(&MachineConfig<S, E>) -> Validation<(), NonEmptyVec<TableIssue>> + Send + Sync,
>;

/// Set of structural checks over a [`MachineConfig`].
///
/// Nothing runs these automatically; a machine accepts any table.
pub struct TableLint<S: State, E: Event> {
    pub(crate) deny_unreachable: bool,
    pub(crate) deny_dead_ends: bool,
    pub(crate) required_checks: Vec<LintCheck<S, E>>,
}

impl<S: State, E: Event> TableLint<S, E> {
    /// Run every enabled check, accumulating ALL issues.
    pub fn check(&self, config: &MachineConfig<S, E>) -> Validation<(), NonEmptyVec<TableIssue>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<TableIssue>>> = Vec::new();

        if self.deny_unreachable {
            let reachable = reachable_states(config);
            for state in sorted_by_name(config.declared_states()) {
                let check = if reachable.contains(state) {
                    Validation::success(())
                } else {
                    Validation::fail(TableIssue::UnreachableState {
                        state: state.name().to_string(),
                    })
                };
                checks.push(check);
            }
        }

        if self.deny_dead_ends {
            for state in sorted_by_name(config.declared_states()) {
                let check = if config.transitions().has_outgoing(state) {
                    Validation::success(())
                } else {
                    Validation::fail(TableIssue::DeadEnd {
                        state: state.name().to_string(),
                    })
                };
                checks.push(check);
            }
        }

        for check_fn in &self.required_checks {
            checks.push(check_fn(config));
        }

        Validation::all_vec(checks).map(|_| ())
    }
}

/// States reachable from `initial` by following table entries.
fn reachable_states<S: State, E: Event>(config: &MachineConfig<S, E>) -> HashSet<&S> {
    let mut seen: HashSet<&S> = HashSet::new();
    let mut queue: VecDeque<&S> = VecDeque::new();
    seen.insert(config.initial());
    queue.push_back(config.initial());

    while let Some(state) = queue.pop_front() {
        for event in config.transitions().events_from(state) {
            if let Some(next) = config.transitions().lookup(state, event) {
                if seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }
    }
    seen
}

fn sorted_by_name<'a, S: State>(states: HashSet<&'a S>) -> Vec<&'a S> {
    let mut states: Vec<&S> = states.into_iter().collect();
    states.sort_by(|a, b| a.name().cmp(b.name()));
    states
}
