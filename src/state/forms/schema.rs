//! Declarative form schema
//!
//! A schema is an ordered list of fields, each with a semantic type and an
//! ordered list of rules. Schemas are checked once when built (or
//! deserialized) and are immutable afterwards.

use super::error::ConfigurationError;
use super::field::{FieldKind, FieldValue};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Kind tag and parameter of a rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum RuleKind {
    /// Raw input must not be blank
    Required,
    /// Raw input must coerce to the field's kind
    Type,
    MinLength { value: usize },
    MaxLength { value: usize },
    MinValue { value: i64 },
    MaxValue { value: i64 },
}

impl RuleKind {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Type => "type",
            Self::MinLength { .. } => "min-length",
            Self::MaxLength { .. } => "max-length",
            Self::MinValue { .. } => "min-value",
            Self::MaxValue { .. } => "max-value",
        }
    }

    fn is_numeric_only(&self) -> bool {
        matches!(self, Self::Type | Self::MinValue { .. } | Self::MaxValue { .. })
    }
}

/// A single validation predicate bound to a field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    #[serde(flatten)]
    pub kind: RuleKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Rule {
    pub fn new(kind: RuleKind) -> Self {
        Self {
            kind,
            message: None,
        }
    }

    pub fn required() -> Self {
        Self::new(RuleKind::Required)
    }

    pub fn type_check() -> Self {
        Self::new(RuleKind::Type)
    }

    pub fn min_length(value: usize) -> Self {
        Self::new(RuleKind::MinLength { value })
    }

    pub fn max_length(value: usize) -> Self {
        Self::new(RuleKind::MaxLength { value })
    }

    pub fn min_value(value: i64) -> Self {
        Self::new(RuleKind::MinValue { value })
    }

    pub fn max_value(value: i64) -> Self {
        Self::new(RuleKind::MaxValue { value })
    }

    /// Override the default message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Message shown when this rule fails
    pub fn message(&self) -> String {
        if let Some(message) = &self.message {
            return message.clone();
        }
        match &self.kind {
            RuleKind::Required => "Required".to_string(),
            RuleKind::Type => "Expected number, received nan".to_string(),
            RuleKind::MinLength { value } => {
                format!("String must contain at least {value} character(s)")
            }
            RuleKind::MaxLength { value } => {
                format!("String must contain at most {value} character(s)")
            }
            RuleKind::MinValue { value } => {
                format!("Number must be greater than or equal to {value}")
            }
            RuleKind::MaxValue { value } => {
                format!("Number must be less than or equal to {value}")
            }
        }
    }

    /// Evaluate the predicate against a field value
    pub fn check(&self, value: &FieldValue) -> bool {
        match &self.kind {
            RuleKind::Required => !value.is_blank(),
            RuleKind::Type => value.typed().is_some(),
            RuleKind::MinLength { value: min } => value.char_len() >= *min,
            RuleKind::MaxLength { value: max } => value.char_len() <= *max,
            RuleKind::MinValue { value: min } => value.as_integer().is_some_and(|n| n >= *min),
            RuleKind::MaxValue { value: max } => value.as_integer().is_some_and(|n| n <= *max),
        }
    }
}

/// Declaration of one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSchema {
    pub name: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub kind: FieldKind,
    #[serde(default)]
    pub rules: Vec<Rule>,
}

impl FieldSchema {
    pub fn new(name: &str, label: &str, kind: FieldKind, rules: Vec<Rule>) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            rules,
        }
    }

    /// Label for display, falling back to the field name
    pub fn display_label(&self) -> &str {
        if self.label.is_empty() {
            &self.name
        } else {
            &self.label
        }
    }

    fn check_rules(&self) -> Result<(), ConfigurationError> {
        if self.kind == FieldKind::Text {
            if let Some(rule) = self.rules.iter().find(|r| r.kind.is_numeric_only()) {
                return Err(ConfigurationError::RuleTypeMismatch {
                    field: self.name.clone(),
                    rule: rule.kind.tag(),
                });
            }
        }

        // Tightest bounds: largest minimum against smallest maximum
        let mut min_len: Option<usize> = None;
        let mut max_len: Option<usize> = None;
        let mut min_val: Option<i64> = None;
        let mut max_val: Option<i64> = None;
        for rule in &self.rules {
            match rule.kind {
                RuleKind::MinLength { value } => min_len = min_len.max(Some(value)),
                RuleKind::MaxLength { value } => {
                    max_len = Some(max_len.map_or(value, |m| m.min(value)))
                }
                RuleKind::MinValue { value } => min_val = min_val.max(Some(value)),
                RuleKind::MaxValue { value } => {
                    max_val = Some(max_val.map_or(value, |m| m.min(value)))
                }
                RuleKind::Required | RuleKind::Type => {}
            }
        }

        if let (Some(min), Some(max)) = (min_len, max_len) {
            if min > max {
                return Err(ConfigurationError::InvalidBounds {
                    field: self.name.clone(),
                    reason: format!("min-length {min} exceeds max-length {max}"),
                });
            }
        }
        if let (Some(min), Some(max)) = (min_val, max_val) {
            if min > max {
                return Err(ConfigurationError::InvalidBounds {
                    field: self.name.clone(),
                    reason: format!("min-value {min} exceeds max-value {max}"),
                });
            }
        }
        Ok(())
    }

    /// Integer fields get a leading type check unless one is declared
    fn normalize(&mut self) {
        if self.kind == FieldKind::Integer
            && !self.rules.iter().any(|r| r.kind == RuleKind::Type)
        {
            self.rules.insert(0, Rule::type_check());
        }
    }
}

/// Serialized shape of a schema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaDefinition {
    pub fields: Vec<FieldSchema>,
}

/// A checked, immutable form schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SchemaDefinition", into = "SchemaDefinition")]
pub struct FormSchema {
    fields: Vec<FieldSchema>,
}

impl FormSchema {
    /// Build a schema, failing fast on definition mistakes
    pub fn new(fields: Vec<FieldSchema>) -> Result<Self, ConfigurationError> {
        if fields.is_empty() {
            return Err(ConfigurationError::EmptySchema);
        }

        let mut seen = HashSet::new();
        for field in &fields {
            if !seen.insert(field.name.clone()) {
                return Err(ConfigurationError::DuplicateField(field.name.clone()));
            }
            field.check_rules()?;
        }

        let mut fields = fields;
        for field in &mut fields {
            field.normalize();
        }
        Ok(Self { fields })
    }

    pub fn builder() -> FormSchemaBuilder {
        FormSchemaBuilder::default()
    }

    /// Parse a schema from its JSON form
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn fields(&self) -> &[FieldSchema] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

impl TryFrom<SchemaDefinition> for FormSchema {
    type Error = ConfigurationError;

    fn try_from(def: SchemaDefinition) -> Result<Self, Self::Error> {
        Self::new(def.fields)
    }
}

impl From<FormSchema> for SchemaDefinition {
    fn from(schema: FormSchema) -> Self {
        Self {
            fields: schema.fields,
        }
    }
}

/// Incremental schema construction
#[derive(Debug, Default)]
pub struct FormSchemaBuilder {
    fields: Vec<FieldSchema>,
}

impl FormSchemaBuilder {
    pub fn text(mut self, name: &str, label: &str, rules: Vec<Rule>) -> Self {
        self.fields
            .push(FieldSchema::new(name, label, FieldKind::Text, rules));
        self
    }

    pub fn integer(mut self, name: &str, label: &str, rules: Vec<Rule>) -> Self {
        self.fields
            .push(FieldSchema::new(name, label, FieldKind::Integer, rules));
        self
    }

    pub fn build(self) -> Result<FormSchema, ConfigurationError> {
        FormSchema::new(self.fields)
    }
}
