//! Partial parameter sets read from preset files and config defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::AppError;
use crate::domain::parameters::ParameterSet;

/// On-disk preset encoding, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetFormat {
    Toml,
    Yaml,
    Json,
}

impl PresetFormat {
    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "toml" => Ok(PresetFormat::Toml),
            "yaml" | "yml" => Ok(PresetFormat::Yaml),
            "json" => Ok(PresetFormat::Json),
            _ => Err(AppError::UnsupportedPresetFormat(path.display().to_string())),
        }
    }

    /// Encode a full parameter set.
    pub fn serialize(&self, params: &ParameterSet) -> Result<String, AppError> {
        match self {
            PresetFormat::Toml => toml::to_string_pretty(params)
                .map_err(|err| AppError::config_error(format!("Failed to encode TOML preset: {err}"))),
            PresetFormat::Yaml => Ok(serde_yaml::to_string(params)?),
            PresetFormat::Json => Ok(serde_json::to_string_pretty(params)?),
        }
    }
}

/// Field overrides layered over the defaults.
///
/// Keys are `ParameterSet` field names. Layers merge key by key, with nested
/// tables (gel colours) merged recursively; nothing is checked until
/// [`ParameterOverrides::resolve`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterOverrides(Map<String, Value>);

impl ParameterOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse(format: PresetFormat, content: &str) -> Result<Self, AppError> {
        let overrides = match format {
            PresetFormat::Toml => toml::from_str(content)?,
            // An empty YAML document is null; treat it as no overrides.
            PresetFormat::Yaml => match serde_yaml::from_str::<Option<Self>>(content)? {
                Some(overrides) => overrides,
                None => Self::default(),
            },
            PresetFormat::Json => serde_json::from_str(content)?,
        };
        Ok(overrides)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Field names present in this layer.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Layer `other` on top of `self`.
    pub fn merge(&mut self, other: ParameterOverrides) {
        merge_maps(&mut self.0, other.0);
    }

    /// Apply the overrides to the reset defaults.
    ///
    /// Unknown keys or mistyped values are rejected.
    pub fn resolve(&self) -> Result<ParameterSet, AppError> {
        let mut base = match serde_json::to_value(ParameterSet::default())? {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        merge_maps(&mut base, self.0.clone());
        serde_json::from_value(Value::Object(base)).map_err(|err| {
            AppError::config_error(format!("Invalid parameter overrides: {err}"))
        })
    }
}

fn merge_maps(target: &mut Map<String, Value>, source: Map<String, Value>) {
    for (key, value) in source {
        match (target.get_mut(&key), value) {
            (Some(Value::Object(existing)), Value::Object(incoming)) => merge_maps(existing, incoming),
            (_, value) => {
                target.insert(key, value);
            }
        }
    }
}
