//! The two canonical flows: loading a resource and submitting a form.
//!
//! Both start in `Idle` and have no terminal state; a page can reload or
//! resubmit as often as it likes.

mod form;
mod loading;

pub use form::{form_config, form_table, FormEvent, FormState};
pub use loading::{loading_config, loading_table, LoadingEvent, LoadingState};
