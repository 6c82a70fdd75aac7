//! Configuration handling for the TUI

use crate::state::{FormSchema, SchemaPreset, SchemaSource};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Environment variable that overrides the configured preset
pub const PRESET_ENV: &str = "PERSON_FORM_PRESET";

/// Default tracing filter when neither RUST_LOG nor the config sets one
pub const DEFAULT_LOG_FILTER: &str = "person_form_tui=info";

/// Log file written inside `log_dir`
pub const LOG_FILE_NAME: &str = "person-form-tui.log";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Built-in schema to start with
    pub preset: Option<SchemaPreset>,
    /// JSON schema file; takes precedence over `preset`
    pub schema_path: Option<PathBuf>,
    /// Clear the form after every delivered submission
    pub reset_on_submit: Option<bool>,
    /// tracing filter directive, e.g. "person_form_tui=debug"
    pub log_filter: Option<String>,
    /// Directory for the log file
    pub log_dir: Option<PathBuf>,
}

impl TuiConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "person-form", "person-form-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)
                    .with_context(|| format!("invalid config file {}", path.display()))?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    pub fn reset_on_submit(&self) -> bool {
        self.reset_on_submit.unwrap_or(false)
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }

    /// Where the log file goes; the terminal itself is owned by the UI
    pub fn log_dir(&self) -> PathBuf {
        self.log_dir
            .clone()
            .or_else(|| Self::project_dirs().map(|dirs| dirs.data_local_dir().to_path_buf()))
            .unwrap_or_else(std::env::temp_dir)
    }

    /// Preset after applying the environment override
    pub fn effective_preset(&self, env_value: Option<&str>) -> Result<SchemaPreset> {
        match env_value {
            Some(value) => value
                .parse()
                .with_context(|| format!("{PRESET_ENV} is not a valid preset")),
            None => Ok(self.preset.unwrap_or_default()),
        }
    }

    /// Resolve the schema to run with
    pub fn load_schema(&self, env_value: Option<&str>) -> Result<(FormSchema, SchemaSource)> {
        if let Some(path) = &self.schema_path {
            let content = fs::read_to_string(path)
                .with_context(|| format!("cannot read schema file {}", path.display()))?;
            let schema = FormSchema::from_json(&content)
                .with_context(|| format!("invalid schema file {}", path.display()))?;
            return Ok((schema, SchemaSource::File(path.clone())));
        }

        let preset = self.effective_preset(env_value)?;
        Ok((preset.schema()?, SchemaSource::Preset(preset)))
    }
}
