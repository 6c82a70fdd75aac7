//! Application state definitions

use super::forms::{ConfigurationError, SchemaPreset, ValidatedForm, PERSON_FIELDS};
use std::path::PathBuf;

/// Where the active schema came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaSource {
    Preset(SchemaPreset),
    File(PathBuf),
}

impl SchemaSource {
    pub fn label(&self) -> String {
        match self {
            Self::Preset(preset) => preset.label().to_string(),
            Self::File(path) => path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
        }
    }
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub form: ValidatedForm,
    pub schema_source: SchemaSource,
    /// Focused row: one per field, plus the submit button row at the end
    pub active_form_field: usize,
    /// Transient message shown in the status bar
    pub status_message: Option<String>,
    /// Pretty JSON of the last delivered payload while its dialog is open
    pub submitted_dialog: Option<String>,
}

impl AppState {
    /// Wrap a form, failing if it does not match the rendered person fields
    pub fn new(form: ValidatedForm, schema_source: SchemaSource) -> Result<Self, ConfigurationError> {
        form.bind_rendered(&PERSON_FIELDS)?;
        Ok(Self {
            form,
            schema_source,
            active_form_field: 0,
            status_message: None,
            submitted_dialog: None,
        })
    }

    /// Number of focusable rows (fields + submit button)
    pub fn field_count(&self) -> usize {
        PERSON_FIELDS.len() + 1
    }

    pub fn is_submit_row_active(&self) -> bool {
        self.active_form_field == PERSON_FIELDS.len()
    }

    /// Name of the focused field, None on the submit row
    pub fn active_field_name(&self) -> Option<&'static str> {
        PERSON_FIELDS.get(self.active_form_field).copied()
    }

    pub fn next_field(&mut self) {
        self.active_form_field = (self.active_form_field + 1) % self.field_count();
    }

    pub fn prev_field(&mut self) {
        if self.active_form_field == 0 {
            self.active_form_field = self.field_count() - 1;
        } else {
            self.active_form_field -= 1;
        }
    }

    pub fn has_dialog(&self) -> bool {
        self.submitted_dialog.is_some()
    }

    pub fn dismiss_dialog(&mut self) {
        self.submitted_dialog = None;
    }

    /// Swap in a new preset, keeping the reset-on-submit setting
    pub fn switch_preset(
        &mut self,
        preset: SchemaPreset,
        reset_on_submit: bool,
    ) -> Result<(), ConfigurationError> {
        let form = ValidatedForm::new(preset.schema()?).with_reset_on_submit(reset_on_submit);
        form.bind_rendered(&PERSON_FIELDS)?;
        self.form = form;
        self.schema_source = SchemaSource::Preset(preset);
        self.active_form_field = 0;
        tracing::info!(preset = %preset, "schema preset switched");
        Ok(())
    }
}
