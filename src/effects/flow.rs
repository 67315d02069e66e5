//! Start/success/failure event triple for one asynchronous operation.

use crate::core::Event;
use serde::{Deserialize, Serialize};

/// The events a flow sends around one asynchronous operation.
///
/// Decoding an operation's result happens once, at the boundary: `Ok` maps
/// to `success`, `Err` to `failure`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct AsyncFlow<E: Event> {
    pub start: E,
    pub success: E,
    pub failure: E,
}

impl<E: Event> AsyncFlow<E> {
    pub fn new(start: E, success: E, failure: E) -> Self {
        Self {
            start,
            success,
            failure,
        }
    }

    /// Event to settle with for `outcome`.
    pub fn event_for<T, Err>(&self, outcome: &Result<T, Err>) -> E {
        match outcome {
            Ok(_) => self.success.clone(),
            Err(_) => self.failure.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::flows::{FormEvent, LoadingEvent};

    #[test]
    fn event_for_maps_result_tags() {
        let flow = LoadingEvent::flow();
        let ok: Result<u32, String> = Ok(3);
        let err: Result<u32, String> = Err("timeout".to_string());

        assert_eq!(flow.event_for(&ok), LoadingEvent::Success);
        assert_eq!(flow.event_for(&err), LoadingEvent::Error);
    }

    #[test]
    fn canonical_flows_use_expected_events() {
        assert_eq!(LoadingEvent::retry_flow().start, LoadingEvent::Retry);
        let form = FormEvent::flow();
        assert_eq!(form.start, FormEvent::Submit);
        assert_eq!(form.success, FormEvent::SubmitSuccess);
        assert_eq!(form.failure, FormEvent::SubmitError);
    }
}
