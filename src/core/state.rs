//! State and Event traits for table-driven machines.
//!
//! Both are opaque, comparable tags. A machine never inspects them beyond
//! equality and hashing; the extra methods exist for logging and for UI code
//! that renders conditionally on the current state.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine states.
///
/// All methods are pure - no side effects. States are used as keys of a
/// transition table, so they must be `Eq + Hash` in addition to the usual
/// clone/debug/serde bounds.
///
/// # Example
///
/// ```rust
/// use flowstate::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum FetchState {
///     Idle,
///     Fetching,
///     Failed,
/// }
///
/// impl State for FetchState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Idle => "Idle",
///             Self::Fetching => "Fetching",
///             Self::Failed => "Failed",
///         }
///     }
///
///     fn is_error(&self) -> bool {
///         matches!(self, Self::Failed)
///     }
/// }
///
/// assert!(FetchState::Failed.is_error());
/// assert!(!FetchState::Idle.is_final());
/// ```
pub trait State: Clone + Eq + Hash + Debug + Serialize + DeserializeOwned + Send + Sync {
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Informational only: the executor does not stop at final states, a
    /// table may still map events out of them.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Check if this is an error state.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}

/// Trait for events that drive a machine.
pub trait Event: Clone + Eq + Hash + Debug + Serialize + DeserializeOwned + Send + Sync {
    /// Get the event's name for display/logging.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestState {
        Idle,
        Busy,
        Done,
        Broken,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Idle => "Idle",
                Self::Busy => "Busy",
                Self::Done => "Done",
                Self::Broken => "Broken",
            }
        }

        fn is_final(&self) -> bool {
            matches!(self, Self::Done | Self::Broken)
        }

        fn is_error(&self) -> bool {
            matches!(self, Self::Broken)
        }
    }

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestEvent {
        Start,
        Finish,
    }

    impl Event for TestEvent {
        fn name(&self) -> &str {
            match self {
                Self::Start => "Start",
                Self::Finish => "Finish",
            }
        }
    }

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(TestState::Idle.name(), "Idle");
        assert_eq!(TestState::Busy.name(), "Busy");
        assert_eq!(TestState::Done.name(), "Done");
        assert_eq!(TestState::Broken.name(), "Broken");
    }

    #[test]
    fn is_final_and_is_error_identify_states() {
        assert!(!TestState::Idle.is_final());
        assert!(TestState::Done.is_final());
        assert!(!TestState::Done.is_error());
        assert!(TestState::Broken.is_error());
    }

    #[test]
    fn event_name_returns_correct_value() {
        assert_eq!(TestEvent::Start.name(), "Start");
        assert_eq!(TestEvent::Finish.name(), "Finish");
    }

    #[test]
    fn state_serializes_as_tag() {
        let json = serde_json::to_string(&TestState::Busy).unwrap();
        assert_eq!(json, "\"Busy\"");
        let back: TestState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, TestState::Busy);
    }

    #[test]
    fn states_hash_consistently() {
        use std::collections::HashSet;

        let set: HashSet<TestState> = [TestState::Idle, TestState::Idle, TestState::Busy]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
    }
}
