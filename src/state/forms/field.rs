//! Form field value objects

use serde::{Deserialize, Serialize};

/// Semantic type of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    #[default]
    Text,
    Integer,
}

/// Type-safe coerced value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TypedValue {
    Text(String),
    Integer(i64),
}

/// Current value of a single named field.
///
/// The raw input is always kept. The typed value is `None` when an integer
/// field holds text that does not parse; that state is rejected by the
/// type-check rule instead of failing here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValue {
    name: String,
    kind: FieldKind,
    raw: String,
    typed: Option<TypedValue>,
}

impl FieldValue {
    /// Create an empty field value
    pub fn new(name: &str, kind: FieldKind) -> Self {
        Self::with_raw(name, kind, String::new())
    }

    /// Create a field value from raw input, coercing it to the field's kind
    pub fn with_raw(name: &str, kind: FieldKind, raw: String) -> Self {
        let typed = coerce(kind, &raw);
        Self {
            name: name.to_string(),
            kind,
            raw,
            typed,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Raw input exactly as typed
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Coerced value, if the raw input fits the field's kind
    pub fn typed(&self) -> Option<&TypedValue> {
        self.typed.as_ref()
    }

    /// Parsed integer (None for text fields and malformed input)
    pub fn as_integer(&self) -> Option<i64> {
        match self.typed {
            Some(TypedValue::Integer(n)) => Some(n),
            _ => None,
        }
    }

    /// Raw length in characters, not bytes
    pub fn char_len(&self) -> usize {
        self.raw.chars().count()
    }

    pub fn is_blank(&self) -> bool {
        self.raw.trim().is_empty()
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        self.raw.clone()
    }
}

fn coerce(kind: FieldKind, raw: &str) -> Option<TypedValue> {
    match kind {
        FieldKind::Text => Some(TypedValue::Text(raw.to_string())),
        FieldKind::Integer => raw.trim().parse::<i64>().ok().map(TypedValue::Integer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_text_field_is_empty_text() {
        let field = FieldValue::new("name", FieldKind::Text);
        assert_eq!(field.raw(), "");
        assert_eq!(field.typed(), Some(&TypedValue::Text(String::new())));
        assert!(field.is_blank());
    }

    #[test]
    fn test_new_integer_field_is_unparsed() {
        let field = FieldValue::new("age", FieldKind::Integer);
        assert!(field.typed().is_none());
        assert!(field.as_integer().is_none());
    }

    #[test]
    fn test_integer_coercion_trims_whitespace() {
        let field = FieldValue::with_raw("age", FieldKind::Integer, " 42 ".to_string());
        assert_eq!(field.as_integer(), Some(42));
        assert_eq!(field.raw(), " 42 ");
    }

    #[test]
    fn test_integer_coercion_failure_keeps_raw() {
        let field = FieldValue::with_raw("age", FieldKind::Integer, "abc".to_string());
        assert!(field.typed().is_none());
        assert_eq!(field.display_value(), "abc");
    }

    #[test]
    fn test_negative_integer() {
        let field = FieldValue::with_raw("year", FieldKind::Integer, "-5".to_string());
        assert_eq!(field.as_integer(), Some(-5));
    }

    #[test]
    fn test_char_len_counts_characters() {
        let field = FieldValue::with_raw("name", FieldKind::Text, "Zoë".to_string());
        assert_eq!(field.char_len(), 3);
    }

    #[test]
    fn test_typed_value_serializes_untagged() {
        let text = serde_json::to_string(&TypedValue::Text("F".to_string())).unwrap();
        let int = serde_json::to_string(&TypedValue::Integer(1990)).unwrap();
        assert_eq!(text, "\"F\"");
        assert_eq!(int, "1990");
    }
}
