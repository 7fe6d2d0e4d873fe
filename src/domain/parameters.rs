//! The parameter set fed into prompt rendering.

use serde::{Deserialize, Serialize};

use crate::domain::lighting::GelColors;
use crate::domain::material::{INFINITY_MATERIALS, is_infinity_material};
use crate::domain::scenario::ScenarioPick;
use crate::domain::selection::Selection;

pub const DEFAULT_NEGATIVE_PROMPT: &str =
    "low quality, blurry, distorted, plastic skin, bad anatomy, deformed feet";

const DEFAULT_STUDIO_COLOR: &str = "#ffffff";

/// Every user-selected value that shapes the rendered prompt.
///
/// Serialized forms use snake_case keys and the `"Maintain Original"` text
/// for maintained selections. Missing keys take the reset defaults, so a
/// preset only needs to list what it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParameterSet {
    /// Free-text scene description. Ignored in studio mode.
    pub narrative_text: String,
    pub angle: Selection,
    pub scale: Selection,
    pub pose: Selection,
    pub lighting: Selection,
    pub style: Selection,
    pub grading: Selection,
    pub texture: Selection,
    pub film_stock: Selection,
    pub lens: String,
    pub camera: String,
    pub aperture: String,
    pub ratio: String,
    /// Orbital position in degrees. Not clamped.
    pub orbital_degree: i32,
    /// Dutch roll as numeric text; empty means no roll.
    pub camera_roll: String,
    pub studio_mode: bool,
    pub studio_bg_color: String,
    pub studio_bg_texture: String,
    pub studio_floor_color: String,
    pub studio_floor_texture: String,
    pub negative_prompt: String,
    /// Only read when lighting is Coloured Gels.
    pub gels: GelColors,
}

impl Default for ParameterSet {
    fn default() -> Self {
        let infinity = INFINITY_MATERIALS[1].to_string();
        Self {
            narrative_text: String::new(),
            angle: Selection::Maintained,
            scale: Selection::Maintained,
            pose: Selection::Maintained,
            lighting: Selection::Maintained,
            style: Selection::Maintained,
            grading: Selection::Maintained,
            texture: Selection::Maintained,
            film_stock: Selection::Maintained,
            lens: "85mm Portrait".to_string(),
            camera: "Sony A7R V".to_string(),
            aperture: "f/1.8".to_string(),
            ratio: "3:4".to_string(),
            orbital_degree: 0,
            camera_roll: String::new(),
            studio_mode: false,
            studio_bg_color: DEFAULT_STUDIO_COLOR.to_string(),
            studio_bg_texture: infinity.clone(),
            studio_floor_color: DEFAULT_STUDIO_COLOR.to_string(),
            studio_floor_texture: infinity,
            negative_prompt: DEFAULT_NEGATIVE_PROMPT.to_string(),
            gels: GelColors::default(),
        }
    }
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore every field to its default value.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Set the backdrop material. The infinity curve also covers the floor.
    pub fn set_studio_bg_texture(&mut self, texture: impl Into<String>) {
        self.studio_bg_texture = texture.into();
        if is_infinity_material(&self.studio_bg_texture) {
            self.studio_floor_texture = self.studio_bg_texture.clone();
        }
    }

    /// Set the floor material. The infinity curve also covers the backdrop.
    pub fn set_studio_floor_texture(&mut self, texture: impl Into<String>) {
        self.studio_floor_texture = texture.into();
        if is_infinity_material(&self.studio_floor_texture) {
            self.studio_bg_texture = self.studio_floor_texture.clone();
        }
    }

    /// Overwrite the look with a picked scenario.
    ///
    /// Narrative and all twelve settings are replaced wholesale; the orbit
    /// moves to the picked direction and the roll is replaced. Studio fields,
    /// gels and the negative prompt are left alone.
    pub fn apply_scenario(&mut self, pick: &ScenarioPick<'_>) {
        let settings = &pick.scenario.settings;

        self.narrative_text = pick.scenario.text.clone();
        self.lighting = Selection::parse(&settings.lighting);
        self.style = Selection::parse(&settings.style);
        self.grading = Selection::parse(&settings.grading);
        self.film_stock = Selection::parse(&settings.film_stock);
        self.lens = settings.lens.clone();
        self.camera = settings.camera.clone();
        self.aperture = settings.aperture.clone();
        self.texture = Selection::parse(&settings.texture);
        self.scale = Selection::parse(&settings.scale);
        self.pose = Selection::parse(&settings.pose);
        self.angle = Selection::parse(&settings.angle);
        self.ratio = settings.ratio.clone();

        self.orbital_degree = pick.direction.degree;
        self.camera_roll = pick.camera_roll.clone();
    }
}

/// Coerce free-text degree input to an integer.
///
/// Reads an optional sign and the leading digits after surrounding
/// whitespace; trailing text is ignored. Anything without leading digits,
/// or beyond the `i32` range, yields 0.
pub fn coerce_degree(input: &str) -> i32 {
    let trimmed = input.trim();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits.find(|c: char| !c.is_ascii_digit()).unwrap_or(digits.len());
    let Ok(magnitude) = digits[..end].parse::<i64>() else {
        return 0;
    };
    let value = if negative { -magnitude } else { magnitude };
    i32::try_from(value).unwrap_or(0)
}
