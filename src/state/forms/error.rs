//! Form errors
//!
//! Only programmer errors live here. Bad user input is never an `Err`; it is
//! reported as data through [`super::ValidationResult`].

use thiserror::Error;

/// Schema or wiring mistakes detected at initialization
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("unknown field '{0}'")]
    UnknownField(String),

    #[error("field '{0}' is declared more than once")]
    DuplicateField(String),

    #[error("schema declares no fields")]
    EmptySchema,

    #[error("rule '{rule}' cannot be applied to text field '{field}'")]
    RuleTypeMismatch { field: String, rule: &'static str },

    #[error("field '{field}': {reason}")]
    InvalidBounds { field: String, reason: String },

    #[error("schema and view disagree: missing from view {missing_in_view:?}, missing from schema {missing_in_schema:?}")]
    RenderMismatch {
        missing_in_view: Vec<String>,
        missing_in_schema: Vec<String>,
    },
}

/// Errors returned by form operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("form configuration error: {0}")]
    Configuration(#[from] ConfigurationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_field_message() {
        let err = FormError::from(ConfigurationError::UnknownField("email".to_string()));
        assert_eq!(
            err.to_string(),
            "form configuration error: unknown field 'email'"
        );
    }

    #[test]
    fn test_rule_mismatch_message() {
        let err = ConfigurationError::RuleTypeMismatch {
            field: "name".to_string(),
            rule: "min-value",
        };
        assert_eq!(
            err.to_string(),
            "rule 'min-value' cannot be applied to text field 'name'"
        );
    }
}
