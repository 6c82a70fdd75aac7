//! Schema evaluation
//!
//! `validate` is a pure function of the schema and the current values. The
//! whole result is rebuilt on every call.

use super::field::FieldValue;
use super::schema::FormSchema;
use std::collections::BTreeMap;

/// Field values keyed by field name
pub type FieldValues = BTreeMap<String, FieldValue>;

/// The first failing rule of a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Rule kind tag (e.g. "required", "type", "min-value")
    pub kind: &'static str,
    pub message: String,
}

/// Per-field errors plus the overall validity flag
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationResult {
    errors: BTreeMap<String, FieldError>,
}

impl ValidationResult {
    /// True when no field has an error
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error(&self, field: &str) -> Option<&FieldError> {
        self.errors.get(field)
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}

/// Evaluate every field's rules in declaration order, keeping the first failure
pub fn validate(schema: &FormSchema, values: &FieldValues) -> ValidationResult {
    let mut errors = BTreeMap::new();

    for field in schema.fields() {
        let fallback;
        let value = match values.get(&field.name) {
            Some(value) => value,
            None => {
                fallback = FieldValue::new(&field.name, field.kind);
                &fallback
            }
        };

        if let Some(rule) = field.rules.iter().find(|rule| !rule.check(value)) {
            errors.insert(
                field.name.clone(),
                FieldError {
                    kind: rule.kind.tag(),
                    message: rule.message(),
                },
            );
        }
    }

    ValidationResult { errors }
}
