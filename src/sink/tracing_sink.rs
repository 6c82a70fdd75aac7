//! Default sink: one structured log record per submission

use super::SubmissionSink;
use crate::state::SubmissionPayload;

/// Logs each payload as a JSON object at info level
#[derive(Debug, Default)]
pub struct TracingSink {
    delivered: usize,
}

impl TracingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of payloads logged so far
    pub fn delivered(&self) -> usize {
        self.delivered
    }
}

impl SubmissionSink for TracingSink {
    fn deliver(&mut self, payload: SubmissionPayload) {
        self.delivered += 1;
        tracing::info!(
            fields = payload.len(),
            payload = %payload.to_json(),
            "form submitted"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FormSchema, SubmitOutcome, ValidatedForm};

    #[test]
    fn test_counts_deliveries() {
        let schema = FormSchema::builder().text("gender", "Gender", vec![]).build().unwrap();
        let mut form = ValidatedForm::new(schema);
        let mut sink = TracingSink::new();

        assert!(matches!(form.submit(&mut sink), SubmitOutcome::Delivered(_)));
        assert!(matches!(form.submit(&mut sink), SubmitOutcome::Delivered(_)));
        assert_eq!(sink.delivered(), 2);
    }
}
