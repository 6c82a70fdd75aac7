//! Trait abstraction for submission consumers to enable mocking in tests

use crate::state::SubmissionPayload;

/// Receives the payload of a valid submit.
///
/// Delivery is fire-and-forget: the sink owns the payload and reports nothing
/// back to the form.
#[cfg_attr(test, mockall::automock)]
pub trait SubmissionSink {
    fn deliver(&mut self, payload: SubmissionPayload);
}

impl<F> SubmissionSink for F
where
    F: FnMut(SubmissionPayload),
{
    fn deliver(&mut self, payload: SubmissionPayload) {
        self(payload)
    }
}
