//! Validated form state and submission gate

use super::error::{ConfigurationError, FormError};
use super::field::FieldValue;
use super::payload::SubmissionPayload;
use super::schema::FormSchema;
use super::validator::{validate, FieldError, FieldValues, ValidationResult};
use crate::sink::SubmissionSink;
use chrono::{DateTime, Local};
use std::collections::BTreeSet;

/// Submission gate state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GateState {
    #[default]
    Editing,
    /// Only held while the payload is being handed to the sink
    Submitting,
}

/// Typed input events delivered by the UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    InputChanged { field: String, value: String },
    SubmitRequested,
    Reset,
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Payload handed to the sink; carries the running submission count
    Delivered(u64),
    /// Form was invalid; nothing was delivered
    Blocked(ValidationResult),
}

/// A form instance: field registry, validator output and submission gate
#[derive(Debug, Clone)]
pub struct ValidatedForm {
    schema: FormSchema,
    values: FieldValues,
    result: ValidationResult,
    gate: GateState,
    submissions: u64,
    last_submitted: Option<DateTime<Local>>,
    reset_on_submit: bool,
}

impl ValidatedForm {
    pub fn new(schema: FormSchema) -> Self {
        let values = initial_values(&schema);
        let result = validate(&schema, &values);
        Self {
            schema,
            values,
            result,
            gate: GateState::Editing,
            submissions: 0,
            last_submitted: None,
            reset_on_submit: false,
        }
    }

    /// Clear all fields after each delivered submission
    pub fn with_reset_on_submit(mut self, reset_on_submit: bool) -> Self {
        self.reset_on_submit = reset_on_submit;
        self
    }

    /// Check that the view renders exactly the fields the schema declares
    pub fn bind_rendered(&self, rendered: &[&str]) -> Result<(), ConfigurationError> {
        let declared: BTreeSet<&str> = self.schema.field_names().collect();
        let shown: BTreeSet<&str> = rendered.iter().copied().collect();

        let missing_in_view: Vec<String> =
            declared.difference(&shown).map(|s| s.to_string()).collect();
        let missing_in_schema: Vec<String> =
            shown.difference(&declared).map(|s| s.to_string()).collect();

        if missing_in_view.is_empty() && missing_in_schema.is_empty() {
            Ok(())
        } else {
            Err(ConfigurationError::RenderMismatch {
                missing_in_view,
                missing_in_schema,
            })
        }
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    pub fn value(&self, field: &str) -> Option<&FieldValue> {
        self.values.get(field)
    }

    pub fn validation(&self) -> &ValidationResult {
        &self.result
    }

    pub fn error(&self, field: &str) -> Option<&FieldError> {
        self.result.error(field)
    }

    pub fn is_valid(&self) -> bool {
        self.result.is_valid()
    }

    /// Whether the submit control should be enabled
    pub fn can_submit(&self) -> bool {
        self.gate_state() == GateState::Editing && self.result.is_valid()
    }

    pub fn gate_state(&self) -> GateState {
        self.gate
    }

    pub fn submissions(&self) -> u64 {
        self.submissions
    }

    pub fn last_submitted(&self) -> Option<DateTime<Local>> {
        self.last_submitted
    }

    /// Replace a field's raw input and re-validate the whole form
    pub fn set_value(
        &mut self,
        field: &str,
        raw: impl Into<String>,
    ) -> Result<&FieldValue, FormError> {
        let kind = self
            .schema
            .field(field)
            .map(|f| f.kind)
            .ok_or_else(|| ConfigurationError::UnknownField(field.to_string()))?;

        let value = FieldValue::with_raw(field, kind, raw.into());
        tracing::debug!(field = value.name(), kind = ?value.kind(), "field input");

        let mut next = self.values.clone();
        next.insert(field.to_string(), value);
        self.values = next;
        self.result = validate(&self.schema, &self.values);

        tracing::debug!(
            valid = self.result.is_valid(),
            errors = self.result.error_count(),
            "form revalidated"
        );

        self.values
            .get(field)
            .ok_or_else(|| ConfigurationError::UnknownField(field.to_string()).into())
    }

    /// Restore every field to its initial empty value
    pub fn reset(&mut self) {
        self.values = initial_values(&self.schema);
        self.result = validate(&self.schema, &self.values);
        tracing::debug!("form reset");
    }

    /// Deliver the current values if, and only if, the form is valid
    pub fn submit<S>(&mut self, sink: &mut S) -> SubmitOutcome
    where
        S: SubmissionSink + ?Sized,
    {
        let payload = match self.build_payload() {
            Some(payload) if self.can_submit() => payload,
            _ => {
                tracing::debug!(
                    errors = self.result.error_count(),
                    "submit blocked by validation"
                );
                return SubmitOutcome::Blocked(self.result.clone());
            }
        };

        self.gate = GateState::Submitting;
        sink.deliver(payload);
        self.submissions += 1;
        self.last_submitted = Some(Local::now());
        self.gate = GateState::Editing;

        tracing::info!(submission = self.submissions, "submission delivered");

        if self.reset_on_submit {
            self.reset();
        }
        SubmitOutcome::Delivered(self.submissions)
    }

    /// Apply a UI event; only submit requests produce an outcome
    pub fn handle_event<S>(
        &mut self,
        event: FormEvent,
        sink: &mut S,
    ) -> Result<Option<SubmitOutcome>, FormError>
    where
        S: SubmissionSink + ?Sized,
    {
        match event {
            FormEvent::InputChanged { field, value } => {
                self.set_value(&field, value)?;
                Ok(None)
            }
            FormEvent::SubmitRequested => Ok(Some(self.submit(sink))),
            FormEvent::Reset => {
                self.reset();
                Ok(None)
            }
        }
    }

    /// Typed values in declaration order; None if any value failed coercion
    fn build_payload(&self) -> Option<SubmissionPayload> {
        let entries = self
            .schema
            .fields()
            .iter()
            .map(|field| {
                let typed = self.values.get(&field.name)?.typed()?.clone();
                Some((field.name.clone(), typed))
            })
            .collect::<Option<Vec<_>>>()?;
        Some(SubmissionPayload::new(entries))
    }
}

fn initial_values(schema: &FormSchema) -> FieldValues {
    schema
        .fields()
        .iter()
        .map(|f| (f.name.clone(), FieldValue::new(&f.name, f.kind)))
        .collect()
}
