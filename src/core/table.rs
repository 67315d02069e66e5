//! Two-level transition table: state -> event -> next state.

use super::state::{Event, State};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Static mapping used to resolve transitions.
///
/// Not every `(state, event)` pair needs an entry. A missing entry means the
/// event does nothing in that state. Serializes as the nested map, e.g.
/// `{"Idle": {"Load": "Loading"}}`.
///
/// # Example
///
/// ```rust
/// use flowstate::core::TransitionTable;
/// use flowstate::flows::{LoadingEvent, LoadingState};
///
/// let table = TransitionTable::new()
///     .with(LoadingState::Idle, LoadingEvent::Load, LoadingState::Loading)
///     .with(LoadingState::Loading, LoadingEvent::Success, LoadingState::Success);
///
/// assert_eq!(
///     table.lookup(&LoadingState::Idle, &LoadingEvent::Load),
///     Some(&LoadingState::Loading)
/// );
/// assert_eq!(table.lookup(&LoadingState::Idle, &LoadingEvent::Success), None);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "", transparent)]
pub struct TransitionTable<S: State, E: Event> {
    entries: HashMap<S, HashMap<E, S>>,
}

impl<S: State, E: Event> Default for TransitionTable<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, E: Event> TransitionTable<S, E> {
    /// Create an empty table. Every event is ignored in every state.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Insert an entry, returning the previous target for this pair if any.
    pub fn insert(&mut self, from: S, event: E, to: S) -> Option<S> {
        self.entries.entry(from).or_default().insert(event, to)
    }

    /// Chainable form of [`insert`](Self::insert).
    pub fn with(mut self, from: S, event: E, to: S) -> Self {
        self.insert(from, event, to);
        self
    }

    /// Resolve `(state, event)` to the configured next state.
    pub fn lookup(&self, state: &S, event: &E) -> Option<&S> {
        self.entries.get(state).and_then(|events| events.get(event))
    }

    /// Events with an entry from `state`.
    pub fn events_from(&self, state: &S) -> Vec<&E> {
        self.entries
            .get(state)
            .map(|events| events.keys().collect())
            .unwrap_or_default()
    }

    /// Whether `state` has at least one outgoing entry.
    pub fn has_outgoing(&self, state: &S) -> bool {
        self.entries
            .get(state)
            .is_some_and(|events| !events.is_empty())
    }

    /// Whether `state` appears anywhere in the table, as source or target.
    pub fn contains_state(&self, state: &S) -> bool {
        self.entries.contains_key(state) || self.iter().any(|(_, _, to)| to == state)
    }

    /// Every state that appears in the table, as source or target.
    pub fn states(&self) -> HashSet<&S> {
        let mut states: HashSet<&S> = self.entries.keys().collect();
        for (_, _, to) in self.iter() {
            states.insert(to);
        }
        states
    }

    /// Number of `(state, event)` entries.
    pub fn len(&self) -> usize {
        self.entries.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over `(from, event, to)` entries in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, &E, &S)> {
        self.entries
            .iter()
            .flat_map(|(from, events)| events.iter().map(move |(event, to)| (from, event, to)))
    }
}
