//! Configuration for song sheet formatting
//!
//! Settings can be built in code, deserialized from JSON or YAML, loaded
//! from a file, or passed in from JavaScript as a plain object. Missing
//! fields take their defaults, so `{}` is a valid configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_ORDER_MARKER: &str = "[Order]";
pub const DEFAULT_COLUMN_SEPARATOR: &str = " || ";

/// How runs of spaces inside a line are treated while transposing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WhitespaceMode {
    /// Keep interior spacing (chords stay aligned over lyrics)
    #[default]
    Preserve,
    /// Split on any whitespace run and rejoin with single spaces
    Collapse,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransposeSettings {
    /// Line that opens the order section (compared against the trimmed line)
    pub order_marker: String,

    /// Text placed between the two columns
    pub column_separator: String,

    pub whitespace: WhitespaceMode,

    /// Whether chords inside the order section are transposed too
    pub transpose_order_section: bool,
}

impl Default for TransposeSettings {
    fn default() -> Self {
        Self {
            order_marker: DEFAULT_ORDER_MARKER.to_string(),
            column_separator: DEFAULT_COLUMN_SEPARATOR.to_string(),
            whitespace: WhitespaceMode::Preserve,
            transpose_order_section: true,
        }
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid JSON settings: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML settings: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("unsupported settings file extension: {0:?}")]
    UnsupportedFormat(String),

    #[error("invalid settings: {0}")]
    Invalid(String),
}

impl TransposeSettings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: TransposeSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, SettingsError> {
        let settings: TransposeSettings = serde_yaml::from_str(yaml)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a `.json`, `.yaml` or `.yml` file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        let contents = std::fs::read_to_string(path)?;
        log::debug!("Loading transpose settings from {}", path.display());

        match extension.as_str() {
            "json" => Self::from_json(&contents),
            "yaml" | "yml" => Self::from_yaml(&contents),
            other => Err(SettingsError::UnsupportedFormat(other.to_string())),
        }
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let marker = &self.order_marker;
        if marker.is_empty() {
            return Err(SettingsError::Invalid("order marker must not be empty".into()));
        }
        if marker.trim() != marker {
            return Err(SettingsError::Invalid(format!(
                "order marker {:?} has surrounding whitespace and can never match a trimmed line",
                marker
            )));
        }
        if !(marker.starts_with('[') && marker.ends_with(']')) {
            return Err(SettingsError::Invalid(format!(
                "order marker {:?} must be a bracketed heading like [Order]",
                marker
            )));
        }

        if self.column_separator.is_empty() {
            return Err(SettingsError::Invalid("column separator must not be empty".into()));
        }
        if self.column_separator.contains('\n') {
            return Err(SettingsError::Invalid("column separator must be a single line".into()));
        }

        Ok(())
    }
}
