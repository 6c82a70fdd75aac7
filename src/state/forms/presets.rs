//! Built-in person form schemas

use super::error::ConfigurationError;
use super::schema::{FormSchema, Rule};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Field names rendered by the person form, in display order
pub const PERSON_FIELDS: [&str; 4] = ["name", "age", "gender", "year"];

/// Which rule set the person form uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaPreset {
    /// Full schema: name length, minimum age and birth year
    #[default]
    Schema,
    /// Required/length rules with hand-written messages
    Registered,
    /// No declared rules; integer fields must still parse
    Uncontrolled,
}

impl SchemaPreset {
    pub const ALL: [SchemaPreset; 3] = [Self::Schema, Self::Registered, Self::Uncontrolled];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Schema => "schema",
            Self::Registered => "registered",
            Self::Uncontrolled => "uncontrolled",
        }
    }

    /// Cycle to the next preset
    pub fn next(&self) -> Self {
        match self {
            Self::Schema => Self::Registered,
            Self::Registered => Self::Uncontrolled,
            Self::Uncontrolled => Self::Schema,
        }
    }

    pub fn schema(&self) -> Result<FormSchema, ConfigurationError> {
        let builder = FormSchema::builder();
        match self {
            Self::Schema => builder
                .text("name", "Name", vec![Rule::min_length(3)])
                .integer("age", "Age", vec![Rule::min_value(18)])
                .text("gender", "Gender", vec![])
                .integer("year", "Birth Year", vec![Rule::min_value(1990)])
                .build(),
            Self::Registered => builder
                .text("name", "Name", vec![])
                .integer(
                    "age",
                    "Age",
                    vec![
                        Rule::required().with_message("age is required"),
                        Rule::type_check().with_message("age is required"),
                        Rule::min_length(2).with_message("Should be at least 18 years old"),
                    ],
                )
                .text("gender", "Gender", vec![])
                .integer(
                    "year",
                    "Birth Year",
                    vec![
                        Rule::required().with_message("enter a valid year"),
                        Rule::type_check().with_message("enter a valid year"),
                        Rule::min_length(4).with_message("not a valid year"),
                    ],
                )
                .build(),
            Self::Uncontrolled => builder
                .text("name", "Name", vec![])
                .integer("age", "Age", vec![])
                .text("gender", "Gender", vec![])
                .integer("year", "Birth Year", vec![])
                .build(),
        }
    }
}

impl fmt::Display for SchemaPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SchemaPreset {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| anyhow::anyhow!("unknown schema preset '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::form_state::ValidatedForm;

    #[test]
    fn test_every_preset_builds_and_matches_view() {
        for preset in SchemaPreset::ALL {
            let schema = preset.schema().unwrap();
            let form = ValidatedForm::new(schema);
            assert!(form.bind_rendered(&PERSON_FIELDS).is_ok(), "{preset}");
        }
    }

    #[test]
    fn test_registered_messages() {
        let mut form = ValidatedForm::new(SchemaPreset::Registered.schema().unwrap());
        assert_eq!(form.error("age").unwrap().message, "age is required");
        assert_eq!(form.error("year").unwrap().message, "enter a valid year");

        form.set_value("age", "9").unwrap();
        form.set_value("year", "199").unwrap();
        assert_eq!(
            form.error("age").unwrap().message,
            "Should be at least 18 years old"
        );
        assert_eq!(form.error("year").unwrap().message, "not a valid year");

        form.set_value("year", "abcd").unwrap();
        assert_eq!(form.error("year").unwrap().message, "enter a valid year");
    }

    #[test]
    fn test_schema_preset_scenario() {
        let mut form = ValidatedForm::new(SchemaPreset::Schema.schema().unwrap());
        form.set_value("name", "Alice").unwrap();
        form.set_value("age", "18").unwrap();
        form.set_value("gender", "F").unwrap();
        form.set_value("year", "1989").unwrap();
        assert_eq!(
            form.error("year").unwrap().message,
            "Number must be greater than or equal to 1990"
        );
        form.set_value("year", "1990").unwrap();
        assert!(form.is_valid());
    }

    #[test]
    fn test_uncontrolled_only_checks_types() {
        let mut form = ValidatedForm::new(SchemaPreset::Uncontrolled.schema().unwrap());
        form.set_value("age", "17").unwrap();
        form.set_value("year", "2001").unwrap();
        assert!(form.is_valid());
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "Registered".parse::<SchemaPreset>().unwrap(),
            SchemaPreset::Registered
        );
        assert!("zod".parse::<SchemaPreset>().is_err());
    }

    #[test]
    fn test_next_cycles() {
        let mut preset = SchemaPreset::default();
        for _ in 0..3 {
            preset = preset.next();
        }
        assert_eq!(preset, SchemaPreset::Schema);
    }
}
