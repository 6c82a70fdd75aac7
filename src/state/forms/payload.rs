//! Values handed to the consumer on a valid submit

use super::field::TypedValue;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Typed field values captured at the moment of a valid submit, in
/// declaration order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionPayload {
    entries: Vec<(String, TypedValue)>,
}

impl SubmissionPayload {
    pub(crate) fn new(entries: Vec<(String, TypedValue)>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Compact JSON object, e.g. `{"name":"Alice","age":18}`
    pub fn to_json(&self) -> String {
        // Serializing strings and integers into a String cannot fail
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Indented JSON for display
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

impl Serialize for SubmissionPayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SubmissionPayload {
        SubmissionPayload::new(vec![
            ("name".to_string(), TypedValue::Text("Alice".to_string())),
            ("age".to_string(), TypedValue::Integer(18)),
        ])
    }

    #[test]
    fn test_json_keeps_declaration_order() {
        assert_eq!(sample().to_json(), r#"{"name":"Alice","age":18}"#);
    }

    #[test]
    fn test_pretty_json() {
        let payload = sample();
        assert_eq!(payload.len(), 2);
        assert_eq!(
            payload.to_pretty_json(),
            "{\n  \"name\": \"Alice\",\n  \"age\": 18\n}"
        );
    }
}
