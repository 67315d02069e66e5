//! Generic list/detail loading flow.
//!
//! ```text
//! Idle    + Load           -> Loading
//! Loading + Success        -> Success
//! Loading + Error          -> Error
//! Success + Load|Retry     -> Loading
//! Error   + Load|Retry     -> Loading
//! ```

use crate::core::TransitionTable;
use crate::effects::AsyncFlow;
use crate::machine::MachineConfig;

crate::state_enum! {
    /// Where a loading flow currently is.
    pub enum LoadingState {
        Idle,
        Loading,
        Success,
        Error,
    }
    error: [Error]
}

crate::event_enum! {
    /// Triggers of a loading flow.
    pub enum LoadingEvent {
        Load,
        Success,
        Error,
        Retry,
    }
}

impl LoadingState {
    /// Whether a request is in flight, i.e. a spinner should show.
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

impl LoadingEvent {
    /// `Load` starts the request, `Success` / `Error` settle it.
    pub fn flow() -> AsyncFlow<LoadingEvent> {
        AsyncFlow::new(Self::Load, Self::Success, Self::Error)
    }

    /// Same as [`flow`](Self::flow) but started with `Retry`.
    pub fn retry_flow() -> AsyncFlow<LoadingEvent> {
        AsyncFlow::new(Self::Retry, Self::Success, Self::Error)
    }
}

pub fn loading_table() -> TransitionTable<LoadingState, LoadingEvent> {
    crate::transition_table! {
        LoadingState::Idle => { LoadingEvent::Load => LoadingState::Loading },
        LoadingState::Loading => {
            LoadingEvent::Success => LoadingState::Success,
            LoadingEvent::Error => LoadingState::Error,
        },
        LoadingState::Success => {
            LoadingEvent::Load | LoadingEvent::Retry => LoadingState::Loading,
        },
        LoadingState::Error => {
            LoadingEvent::Load | LoadingEvent::Retry => LoadingState::Loading,
        },
    }
}

/// Loading table starting in `Idle`.
pub fn loading_config() -> MachineConfig<LoadingState, LoadingEvent> {
    MachineConfig::new(LoadingState::Idle, loading_table())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::State;

    #[test]
    fn table_has_expected_entries() {
        let table = loading_table();
        assert_eq!(table.len(), 7);

        let expected = [
            (LoadingState::Idle, LoadingEvent::Load, LoadingState::Loading),
            (LoadingState::Loading, LoadingEvent::Success, LoadingState::Success),
            (LoadingState::Loading, LoadingEvent::Error, LoadingState::Error),
            (LoadingState::Success, LoadingEvent::Load, LoadingState::Loading),
            (LoadingState::Success, LoadingEvent::Retry, LoadingState::Loading),
            (LoadingState::Error, LoadingEvent::Load, LoadingState::Loading),
            (LoadingState::Error, LoadingEvent::Retry, LoadingState::Loading),
        ];
        for (from, event, to) in expected {
            assert_eq!(table.lookup(&from, &event), Some(&to), "{from:?} + {event:?}");
        }
    }

    #[test]
    fn idle_ignores_retry() {
        assert_eq!(
            loading_table().lookup(&LoadingState::Idle, &LoadingEvent::Retry),
            None
        );
    }

    #[test]
    fn no_state_is_final() {
        for state in [
            LoadingState::Idle,
            LoadingState::Loading,
            LoadingState::Success,
            LoadingState::Error,
        ] {
            assert!(!state.is_final());
        }
        assert!(LoadingState::Error.is_error());
    }

    #[test]
    fn only_loading_is_busy() {
        assert!(LoadingState::Loading.is_busy());
        assert!(!LoadingState::Success.is_busy());
    }
}
