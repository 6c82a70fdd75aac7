//! Application state and core logic

use crate::config::TuiConfig;
use crate::sink::{SubmissionSink, TracingSink};
use crate::state::{
    AppState, FormEvent, SchemaSource, SubmissionPayload, SubmitOutcome, ValidatedForm,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Loaded user configuration
    config: TuiConfig,
    /// Consumer of valid submissions
    sink: TracingSink,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance from configuration
    pub fn new(config: TuiConfig, env_preset: Option<&str>) -> Result<Self> {
        let (schema, source) = config.load_schema(env_preset)?;
        let form = ValidatedForm::new(schema)
            .with_reset_on_submit(config.reset_on_submit());
        let state = AppState::new(form, source)?;

        tracing::info!(
            schema = %state.schema_source.label(),
            fields = state.form.schema().len(),
            "form initialized"
        );

        Ok(Self {
            state,
            config,
            sink: TracingSink::new(),
            quit: false,
        })
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Number of payloads delivered to the sink
    pub fn delivered(&self) -> usize {
        self.sink.delivered()
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Submitted dialog is modal
        if self.state.has_dialog() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_dialog();
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.state.status_message = None;

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::F(2) => self.cycle_preset(),
            KeyCode::Tab | KeyCode::Down => self.state.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.prev_field(),
            _ => {
                if let Some(event) = form_event_for_key(&self.state, key) {
                    self.dispatch(event)?;
                } else if key.code == KeyCode::Enter {
                    self.state.next_field();
                }
            }
        }
        Ok(())
    }

    /// Apply a form event, routing submissions through the sink
    pub fn dispatch(&mut self, event: FormEvent) -> Result<()> {
        let mut shown = None;
        let sink = &mut self.sink;
        let mut deliver = |payload: SubmissionPayload| {
            shown = Some(payload.to_pretty_json());
            sink.deliver(payload);
        };

        let outcome = self.state.form.handle_event(event, &mut deliver)?;

        match outcome {
            Some(SubmitOutcome::Delivered(count)) => {
                let at = self
                    .state
                    .form
                    .last_submitted()
                    .map(|t| t.format("%H:%M:%S").to_string())
                    .unwrap_or_default();
                self.state.status_message = Some(format!("Submitted #{count} at {at}"));
                self.state.submitted_dialog = shown;
            }
            Some(SubmitOutcome::Blocked(result)) => {
                self.state.status_message = Some(format!(
                    "Fix {} field error(s) before submitting",
                    result.error_count()
                ));
            }
            None => {}
        }
        Ok(())
    }

    /// Switch to the next built-in preset and remember it in the config file
    fn cycle_preset(&mut self) {
        let SchemaSource::Preset(current) = self.state.schema_source else {
            self.state.status_message =
                Some("Schema loaded from file; presets are disabled".to_string());
            return;
        };

        let next = current.next();
        if let Err(e) = self
            .state
            .switch_preset(next, self.config.reset_on_submit())
        {
            tracing::error!("Failed to switch preset: {e}");
            self.state.status_message = Some(format!("Preset error: {e}"));
            return;
        }

        self.config.preset = Some(next);
        if let Err(e) = self.config.save() {
            tracing::warn!("Failed to save config: {e:?}");
        }
        self.state.status_message = Some(format!("Preset: {next}"));
    }
}

/// Map a key press to a form event for the focused row
pub fn form_event_for_key(state: &AppState, key: KeyEvent) -> Option<FormEvent> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('s') if ctrl => return Some(FormEvent::SubmitRequested),
        KeyCode::Enter if key.modifiers.contains(crate::platform::SUBMIT_MODIFIER) => {
            return Some(FormEvent::SubmitRequested)
        }
        KeyCode::Char('r') if ctrl => return Some(FormEvent::Reset),
        KeyCode::Enter if state.is_submit_row_active() => {
            return Some(FormEvent::SubmitRequested)
        }
        _ => {}
    }

    let field = state.active_field_name()?;
    let current = state.form.value(field).map(|v| v.raw()).unwrap_or_default();

    let value = match key.code {
        KeyCode::Char('u') if ctrl => String::new(),
        KeyCode::Char(_) if ctrl => return None,
        KeyCode::Char(c) => {
            let mut value = current.to_string();
            value.push(c);
            value
        }
        KeyCode::Backspace => {
            let mut value = current.to_string();
            value.pop()?;
            value
        }
        _ => return None,
    };

    Some(FormEvent::InputChanged {
        field: field.to_string(),
        value,
    })
}
