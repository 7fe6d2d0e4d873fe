//! Configuration loaded from `framelab.toml`.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;
use crate::domain::locale::Locale;
use crate::domain::preset::ParameterOverrides;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "framelab.toml";

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FramelabConfig {
    /// Parameter values applied before presets and flags.
    #[serde(default)]
    pub defaults: ParameterOverrides,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl FramelabConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.defaults.resolve().map_err(|err| {
            AppError::config_error(format!("[defaults] is invalid: {err}"))
        })?;
        self.catalog.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// How rendered prompts are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Full document as pretty JSON.
    #[default]
    Json,
    /// Only the final technical prompt.
    Prompt,
    /// Human-readable card.
    Summary,
}

impl OutputFormat {
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Prompt => "prompt",
            OutputFormat::Summary => "summary",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "prompt" => Ok(OutputFormat::Prompt),
            "summary" => Ok(OutputFormat::Summary),
            other => Err(AppError::config_error(format!(
                "Unknown output format '{other}'. Available: json, prompt, summary"
            ))),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default)]
    pub locale: Locale,
    /// Copy rendered output to the clipboard.
    #[serde(default)]
    pub copy: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    /// YAML file of scenarios appended to the built-in catalog.
    #[serde(default)]
    pub extra_scenarios: Option<PathBuf>,
}

impl CatalogConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        match &self.extra_scenarios {
            Some(path) if path.as_os_str().is_empty() => {
                Err(AppError::config_error("catalog.extra_scenarios must not be empty"))
            }
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level() }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        let level = self.level.trim().to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(AppError::config_error(format!(
                "logging.level '{}' is not one of: {}",
                self.level,
                LOG_LEVELS.join(", ")
            )));
        }
        Ok(())
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Parse and validate config file content.
pub fn parse_config_content(content: &str) -> Result<FramelabConfig, AppError> {
    let config: FramelabConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
