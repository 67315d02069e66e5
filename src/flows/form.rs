//! Form submission flow.
//!
//! ```text
//! Idle       + Submit             -> Submitting
//! Validating + ValidationSuccess  -> Submitting
//! Validating + ValidationError    -> Error
//! Submitting + SubmitSuccess      -> Success
//! Submitting + SubmitError        -> Error
//! Success    + Submit             -> Submitting
//! Success    + Reset              -> Idle
//! Error      + Submit             -> Submitting
//! Error      + Reset              -> Idle
//! ```
//!
//! No entry leads into `Validating`; callers that validate client-side do so
//! before sending `Submit`.

use crate::core::TransitionTable;
use crate::effects::AsyncFlow;
use crate::machine::MachineConfig;

crate::state_enum! {
    /// Where a form currently is.
    pub enum FormState {
        Idle,
        Validating,
        Submitting,
        Success,
        Error,
    }
    error: [Error]
}

crate::event_enum! {
    /// Triggers of a form flow.
    pub enum FormEvent {
        Submit,
        ValidationSuccess,
        ValidationError,
        SubmitSuccess,
        SubmitError,
        Reset,
    }
}

impl FormState {
    /// Whether the submit button should be disabled.
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }
}

impl FormEvent {
    pub fn flow() -> AsyncFlow<FormEvent> {
        AsyncFlow::new(Self::Submit, Self::SubmitSuccess, Self::SubmitError)
    }
}

pub fn form_table() -> TransitionTable<FormState, FormEvent> {
    crate::transition_table! {
        FormState::Idle => { FormEvent::Submit => FormState::Submitting },
        FormState::Validating => {
            FormEvent::ValidationSuccess => FormState::Submitting,
            FormEvent::ValidationError => FormState::Error,
        },
        FormState::Submitting => {
            FormEvent::SubmitSuccess => FormState::Success,
            FormEvent::SubmitError => FormState::Error,
        },
        FormState::Success => {
            FormEvent::Submit => FormState::Submitting,
            FormEvent::Reset => FormState::Idle,
        },
        FormState::Error => {
            FormEvent::Submit => FormState::Submitting,
            FormEvent::Reset => FormState::Idle,
        },
    }
}

/// Form table starting in `Idle`.
pub fn form_config() -> MachineConfig<FormState, FormEvent> {
    MachineConfig::new(FormState::Idle, form_table())
}
