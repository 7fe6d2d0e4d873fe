//! Lighting vocabulary expanded into descriptive phrases.

use serde::{Deserialize, Serialize};

use crate::domain::options::COLOURED_GELS;
use crate::domain::selection::Selection;

const COLOURED_GELS_PHRASE: &str =
    "creative coloured gel lighting with saturated colour casts sculpting the subject";

const LIGHTING_DESCRIPTIONS: &[(&str, &str)] = &[
    ("Butterfly Lighting", "butterfly lighting with a key light above the lens casting a soft shadow under the nose"),
    ("Rim Lighting", "rim lighting tracing a bright contour around the subject against a darker background"),
    ("Rembrandt Lighting", "Rembrandt lighting with a triangle of light on the shadowed cheek"),
    ("Softbox Studio", "large softbox studio lighting with even, wrapping, low-contrast illumination"),
    ("Gobo Shadows", "gobo lighting projecting patterned shadows across the subject"),
    ("Neon / Cyberpunk", "neon cyberpunk lighting with magenta and cyan practicals"),
    ("Golden Hour", "warm golden hour sunlight at a low angle with long soft shadows"),
    ("Neon Lights", "vivid neon lights with coloured spill"),
    ("Studio Light", "clean professional studio lighting"),
    ("Dramatic Light", "dramatic high-contrast lighting with deep shadows"),
    ("Hard Light", "hard direct light with crisp defined shadows"),
    ("Shadowy Light", "low-key shadowy lighting with most of the frame in darkness"),
    ("Backlight", "strong backlight separating the subject from the background"),
    ("Sunset", "sunset light with warm orange tones"),
    ("Balanced Light", "balanced natural lighting with gentle fill"),
    ("Soft Light", "soft diffused light with smooth gradations"),
];

/// Gel colours per light position. Empty strings count as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GelColors {
    pub left: Option<String>,
    pub right: Option<String>,
    pub back: Option<String>,
}

impl GelColors {
    /// Non-empty colours labelled by position, in Left, Right, Back order.
    pub fn labelled(&self) -> Vec<String> {
        [("Left", &self.left), ("Right", &self.right), ("Back", &self.back)]
            .into_iter()
            .filter_map(|(position, color)| {
                color
                    .as_deref()
                    .filter(|color| !color.is_empty())
                    .map(|color| format!("{position}: {color}"))
            })
            .collect()
    }
}

/// Descriptive phrase for a concrete lighting value, if one is known.
pub fn lighting_phrase(lighting: &str) -> Option<&'static str> {
    if lighting == COLOURED_GELS {
        return Some(COLOURED_GELS_PHRASE);
    }
    LIGHTING_DESCRIPTIONS.iter().find(|(key, _)| *key == lighting).map(|(_, phrase)| *phrase)
}

/// Describe the lighting selection.
///
/// Coloured gels append the set colours in parentheses, or `(None)` when no
/// gel is set. Other values use the description table and fall back to the
/// raw value. A maintained selection renders as the sentinel text.
pub fn describe_lighting(lighting: &Selection, gels: &GelColors) -> String {
    let Some(value) = lighting.value() else {
        return lighting.as_str().to_string();
    };

    if value == COLOURED_GELS {
        let colors = gels.labelled();
        let colors = if colors.is_empty() { "None".to_string() } else { colors.join(", ") };
        return format!("{COLOURED_GELS_PHRASE} ({colors})");
    }

    lighting_phrase(value).unwrap_or(value).to_string()
}
