use serde::{Deserialize, Serialize};

use crate::domain::AppError;
use crate::domain::selection::MAINTAIN_ORIGINAL;

/// The technical half of a scenario. Every value is concrete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioSettings {
    pub lighting: String,
    pub style: String,
    pub grading: String,
    pub film_stock: String,
    pub lens: String,
    pub camera: String,
    pub aperture: String,
    pub texture: String,
    pub scale: String,
    pub pose: String,
    pub angle: String,
    pub ratio: String,
}

impl ScenarioSettings {
    fn fields(&self) -> [(&'static str, &str); 12] {
        [
            ("lighting", &self.lighting),
            ("style", &self.style),
            ("grading", &self.grading),
            ("film_stock", &self.film_stock),
            ("lens", &self.lens),
            ("camera", &self.camera),
            ("aperture", &self.aperture),
            ("texture", &self.texture),
            ("scale", &self.scale),
            ("pose", &self.pose),
            ("angle", &self.angle),
            ("ratio", &self.ratio),
        ]
    }
}

/// A curated look: narrative fragment plus matching settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioEntry {
    pub text: String,
    pub settings: ScenarioSettings,
}

impl ScenarioEntry {
    fn validate(&self, index: usize) -> Result<(), AppError> {
        if self.text.trim().is_empty() {
            return Err(AppError::InvalidScenario { index, reason: "text is empty".to_string() });
        }
        for (name, value) in self.settings.fields() {
            if value.trim().is_empty() {
                return Err(AppError::InvalidScenario { index, reason: format!("{name} is empty") });
            }
            if value == MAINTAIN_ORIGINAL {
                return Err(AppError::InvalidScenario {
                    index,
                    reason: format!("{name} must not be '{MAINTAIN_ORIGINAL}'"),
                });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ScenarioFile {
    scenarios: Vec<ScenarioEntry>,
}

/// Validated, non-empty list of scenarios.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioCatalog {
    entries: Vec<ScenarioEntry>,
}

impl ScenarioCatalog {
    /// Build a catalog, rejecting empty lists and invalid entries.
    pub fn new(entries: Vec<ScenarioEntry>) -> Result<Self, AppError> {
        if entries.is_empty() {
            return Err(AppError::EmptyScenarioCatalog);
        }
        for (index, entry) in entries.iter().enumerate() {
            entry.validate(index)?;
        }
        Ok(Self { entries })
    }

    /// Parse a catalog from YAML with a top-level `scenarios` list.
    pub fn from_yaml(content: &str) -> Result<Self, AppError> {
        Self::new(parse_entries(content)?)
    }

    /// Append further entries, validating them in their final positions.
    pub fn with_extra(self, extra: Vec<ScenarioEntry>) -> Result<Self, AppError> {
        let mut entries = self.entries;
        entries.extend(extra);
        Self::new(entries)
    }

    /// Append entries parsed from YAML.
    pub fn with_extra_yaml(self, content: &str) -> Result<Self, AppError> {
        let extra = parse_entries(content)?;
        self.with_extra(extra)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ScenarioEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[ScenarioEntry] {
        &self.entries
    }
}

fn parse_entries(content: &str) -> Result<Vec<ScenarioEntry>, AppError> {
    let file: ScenarioFile = serde_yaml::from_str(content)?;
    Ok(file.scenarios)
}
