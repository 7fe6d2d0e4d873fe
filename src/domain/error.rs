use std::io;

use thiserror::Error;

/// Library-wide error type for framelab operations.
///
/// Prompt rendering itself never fails; these variants cover the edges
/// around it (files, configuration, catalogs, and the interactive surface).
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    YamlParseError(#[from] serde_yaml::Error),

    /// JSON encoding or decoding error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Preset or config file does not exist.
    #[error("File not found: {0}")]
    PresetNotFound(String),

    /// Preset file extension is not one of toml, yaml, yml, json.
    #[error("Unsupported preset format '{0}': expected .toml, .yaml, .yml or .json")]
    UnsupportedPresetFormat(String),

    /// A scenario entry failed validation.
    #[error("Invalid scenario #{index}: {reason}")]
    InvalidScenario { index: usize, reason: String },

    /// Scenario catalog has no entries.
    #[error("Scenario catalog is empty")]
    EmptyScenarioCatalog,

    /// Random scenarios are not available while studio mode overrides the look.
    #[error("Random scenarios are disabled while studio mode is active")]
    StudioModeActive,

    /// Option field name is not recognized.
    #[error("Unknown option field '{name}'. Available: {available}")]
    UnknownOptionField { name: String, available: String },

    /// Summary template failed to render.
    #[error("Failed to render template {template}: {reason}")]
    TemplateRenderError { template: String, reason: String },

    /// Clipboard access failed.
    #[error("Clipboard error: {0}")]
    ClipboardError(String),

    /// Interactive prompt failed or was aborted.
    #[error("Interactive input failed: {0}")]
    Interaction(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::TomlParseError(_)
            | AppError::YamlParseError(_)
            | AppError::JsonError(_)
            | AppError::UnsupportedPresetFormat(_)
            | AppError::InvalidScenario { .. }
            | AppError::EmptyScenarioCatalog
            | AppError::StudioModeActive
            | AppError::UnknownOptionField { .. } => io::ErrorKind::InvalidInput,
            AppError::PresetNotFound(_) => io::ErrorKind::NotFound,
            AppError::TemplateRenderError { .. }
            | AppError::ClipboardError(_)
            | AppError::Interaction(_) => io::ErrorKind::Other,
        }
    }
}
