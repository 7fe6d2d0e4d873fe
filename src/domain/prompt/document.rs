use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Structured prompt document. Field order is the emitted JSON key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptDocument {
    pub camera_override_protocol: String,
    pub volumetric_reconstruction: String,
    pub selected_parameters: SelectedParameters,
    pub consistency_anchors: ConsistencyAnchors,
    pub framing_boundaries: String,
    pub optical_physics: String,
    pub negative_prompt: String,
    pub final_technical_prompt: String,
}

/// Every resolved field, as rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedParameters {
    pub studio_mode: String,
    pub background: String,
    pub floor: String,
    pub camera: String,
    pub lens: String,
    pub aperture: String,
    pub angle: String,
    pub scale: String,
    pub pose: String,
    pub orbital_degree: String,
    pub dutch_roll: String,
    pub aspect_ratio: String,
    pub lighting: String,
    pub style: String,
    pub grading: String,
    pub texture: String,
    pub film_stock: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsistencyAnchors {
    pub model: String,
    pub garments: String,
    pub accessories: String,
    pub continuity: String,
    pub maintained_features: String,
}

/// Output of prompt rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    pub document: PromptDocument,
    /// The technical-prompt clauses in emitted order, before joining.
    pub clauses: Vec<String>,
}

impl RenderedDocument {
    pub fn final_technical_prompt(&self) -> &str {
        &self.document.final_technical_prompt
    }

    /// Pretty-printed JSON with two-space indentation.
    pub fn to_json(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string_pretty(&self.document)?)
    }
}
