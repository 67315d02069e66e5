//! Macros for ergonomic machine construction.

/// Generate an enum plus its `State` implementation.
///
/// # Example
///
/// ```
/// use flowstate::state_enum;
///
/// state_enum! {
///     pub enum UploadState {
///         Idle,
///         Uploading,
///         Done,
///         Failed,
///     }
///     final: [Done]
///     error: [Failed]
/// }
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
        $(error: [$($error:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    _ => false,
                }
            }

            fn is_error(&self) -> bool {
                match self {
                    $($(Self::$error => true,)*)?
                    _ => false,
                }
            }
        }
    };
}

/// Generate an enum plus its `Event` implementation.
///
/// # Example
///
/// ```
/// use flowstate::event_enum;
///
/// event_enum! {
///     pub enum UploadEvent {
///         Start,
///         Finished,
///         Failed,
///     }
/// }
/// ```
#[macro_export]
macro_rules! event_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Event for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

/// Build a `TransitionTable` from a literal description.
///
/// Several events leading to the same target can be joined with `|`.
///
/// # Example
///
/// ```
/// use flowstate::transition_table;
/// use flowstate::flows::{LoadingEvent, LoadingState};
///
/// let table = transition_table! {
///     LoadingState::Idle => { LoadingEvent::Load => LoadingState::Loading },
///     LoadingState::Error => {
///         LoadingEvent::Load | LoadingEvent::Retry => LoadingState::Loading,
///     },
/// };
///
/// assert_eq!(table.len(), 3);
/// ```
#[macro_export]
macro_rules! transition_table {
    (
        $(
            $from:path => {
                $( $($event:path)|+ => $to:path ),* $(,)?
            }
        ),* $(,)?
    ) => {{
        let mut table = $crate::core::TransitionTable::new();
        $(
            $(
                $(
                    table.insert($from, $event, $to);
                )+
            )*
        )*
        table
    }};
}

#[cfg(test)]
mod tests {
    use crate::core::{Event, State, TransitionTable};

    state_enum! {
        enum TestState {
            Idle,
            Working,
            Complete,
            Failed,
        }
        final: [Complete, Failed]
        error: [Failed]
    }

    event_enum! {
        enum TestEvent {
            Start,
            Finish,
            Fail,
        }
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        let state = TestState::Idle;
        assert_eq!(state.name(), "Idle");
        assert!(!state.is_final());
        assert!(!state.is_error());

        assert!(TestState::Complete.is_final());
        assert!(!TestState::Complete.is_error());
        assert!(TestState::Failed.is_final());
        assert!(TestState::Failed.is_error());
    }

    #[test]
    fn state_enum_works_without_final_error() {
        state_enum! {
            enum MinimalState {
                One,
                Two,
            }
        }

        assert!(!MinimalState::One.is_final());
        assert!(!MinimalState::Two.is_error());
    }

    #[test]
    fn event_enum_macro_generates_trait() {
        assert_eq!(TestEvent::Start.name(), "Start");
        assert_eq!(TestEvent::Fail.name(), "Fail");
    }

    #[test]
    fn transition_table_macro_expands_alternatives() {
        let table: TransitionTable<TestState, TestEvent> = transition_table! {
            TestState::Idle => { TestEvent::Start => TestState::Working },
            TestState::Working => {
                TestEvent::Finish => TestState::Complete,
                TestEvent::Fail => TestState::Failed,
            },
            TestState::Failed => { TestEvent::Start | TestEvent::Finish => TestState::Working },
        };

        assert_eq!(table.len(), 5);
        assert_eq!(
            table.lookup(&TestState::Failed, &TestEvent::Finish),
            Some(&TestState::Working)
        );
        assert_eq!(table.lookup(&TestState::Complete, &TestEvent::Start), None);
    }
}
