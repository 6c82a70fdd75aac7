//! Form domain layer
//!
//! Field registry, declarative schema, pure validator and the submission
//! gate that guards delivery of collected values.

mod error;
mod field;
mod form_state;
mod payload;
mod presets;
mod schema;
mod validator;

pub use error::ConfigurationError;
pub use field::FieldValue;
pub use form_state::{FormEvent, SubmitOutcome, ValidatedForm};
pub use payload::SubmissionPayload;
pub use presets::{SchemaPreset, PERSON_FIELDS};
pub use schema::FormSchema;
pub use validator::FieldError;
