//! Canonical option lists for every selectable field.
//!
//! Values here are canonical (never localized); display labels live in
//! [`crate::domain::locale`].

use std::fmt;

use crate::domain::AppError;
use crate::domain::selection::MAINTAIN_ORIGINAL;

pub const ANGLES: &[&str] =
    &[MAINTAIN_ORIGINAL, "Eye Level", "Low Angle", "High Angle", "Worm's Eye", "Bird's Eye", "Overhead"];

pub const SCALES: &[&str] = &[
    MAINTAIN_ORIGINAL,
    "Extreme Close-up (Eye/Mouth)",
    "Close-up (Head/Shoulder)",
    "Medium Shot (Chest)",
    "Medium Long Shot (Waist)",
    "Full Shot (Full Body)",
    "Wide Shot (General)",
    "Extreme Wide Shot",
    "Long Distance",
];

pub const POSES: &[&str] = &[
    MAINTAIN_ORIGINAL,
    "Frontal Standing",
    "90 Profile View",
    "Three-Quarter Turn",
    "Sitting / Crouching",
    "Dynamic Movement",
    "Over the Shoulder",
];

/// Lighting value that switches on per-position gel colours.
pub const COLOURED_GELS: &str = "Coloured Gels";

pub const LIGHTS: &[&str] = &[
    MAINTAIN_ORIGINAL,
    "Butterfly Lighting",
    "Rim Lighting",
    "Rembrandt Lighting",
    "Softbox Studio",
    "Gobo Shadows",
    "Neon / Cyberpunk",
    "Golden Hour",
    COLOURED_GELS,
];

/// Simplified lighting vocabulary offered alongside the technical setups.
pub const LIGHTS_BASIC: &[&str] = &[
    MAINTAIN_ORIGINAL,
    "Golden Hour",
    "Neon Lights",
    "Studio Light",
    "Dramatic Light",
    "Hard Light",
    "Shadowy Light",
    "Backlight",
    "Sunset",
    "Balanced Light",
    "Soft Light",
];

pub const STYLES: &[&str] = &[
    MAINTAIN_ORIGINAL,
    "Editorial",
    "Cinematic",
    "Belgesel",
    "Sokak Fotoğrafçılığı",
    "Minimalist",
    "Avant-garde",
];

pub const FILMS: &[&str] = &[
    MAINTAIN_ORIGINAL,
    "Kodak Portra 400",
    "Fujifilm Superia",
    "B&W High Grain",
    "Cinestill 800T",
    "Digital Sharp",
];

pub const TEXTURES: &[&str] =
    &[MAINTAIN_ORIGINAL, "Ultra-Detailed Pores", "Soft Skin Gloss", "Raw Skin Texture", "Matte Finish"];

pub const GRADINGS: &[&str] =
    &[MAINTAIN_ORIGINAL, "Teal & Orange", "Warm Vintage", "Muted Tones", "High Saturation", "Monochrome"];

pub const LENSES: &[&str] = &[
    "8mm Fisheye",
    "14mm Ultra-Wide",
    "24mm Wide",
    "35mm Street",
    "50mm Prime",
    "85mm Portrait",
    "200mm Telefoto",
];

pub const CAMERAS: &[&str] =
    &["Sony A7R V", "Canon EOS R5", "Nikon Z9", "Fujifilm GFX100 II", "Leica M11", "Arri Alexa Mini"];

pub const APERTURES: &[&str] = &["f/1.2", "f/1.8", "f/2.8", "f/4", "f/8", "f/11", "f/16"];

pub const RATIOS: &[&str] = &["1:1", "4:5", "3:4", "2:3", "9:16", "16:9", "4:3", "3:2", "2:1", "2.39:1"];

/// Studio backdrop materials, Turkish keys followed by English keys.
pub const STUDIO_BG_TEXTURES: &[&str] = &[
    "Eksiz Kağıt",
    "Kadife Kumaş",
    "Kaba Beton",
    "Parlatılmış Mermer",
    "Boyalı Tuğla",
    "Buzlu Cam",
    "Derin İpek",
    "Sonsuz Fon (Infinity)",
    "Seamless Paper",
    "Velvet Fabric",
    "Rough Concrete",
    "Polished Marble",
    "Painted Brick",
    "Frosted Glass",
    "Deep Silk",
    "Infinity Cyclorama",
];

/// Studio floor materials, Turkish keys followed by English keys.
pub const STUDIO_FLOOR_TEXTURES: &[&str] = &[
    "Parlak Epoksi",
    "Mat Ahşap",
    "Yansımalı Fayans",
    "Endüstriyel Beton",
    "Dokulu Halı",
    "Sonsuz Fon (Infinity)",
    "Glossy Epoxy",
    "Matte Wood",
    "Reflective Tiles",
    "Industrial Concrete",
    "Textured Carpet",
    "Infinity Cyclorama",
];

/// Every field that offers a fixed list of choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionField {
    Angle,
    Scale,
    Pose,
    Lighting,
    LightingBasic,
    Style,
    Grading,
    Texture,
    FilmStock,
    Lens,
    Camera,
    Aperture,
    Ratio,
    StudioBgTexture,
    StudioFloorTexture,
}

impl OptionField {
    pub const ALL: [OptionField; 15] = [
        OptionField::Angle,
        OptionField::Scale,
        OptionField::Pose,
        OptionField::Lighting,
        OptionField::LightingBasic,
        OptionField::Style,
        OptionField::Grading,
        OptionField::Texture,
        OptionField::FilmStock,
        OptionField::Lens,
        OptionField::Camera,
        OptionField::Aperture,
        OptionField::Ratio,
        OptionField::StudioBgTexture,
        OptionField::StudioFloorTexture,
    ];

    /// Name used on the command line and in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            OptionField::Angle => "angle",
            OptionField::Scale => "scale",
            OptionField::Pose => "pose",
            OptionField::Lighting => "lighting",
            OptionField::LightingBasic => "lighting-basic",
            OptionField::Style => "style",
            OptionField::Grading => "grading",
            OptionField::Texture => "texture",
            OptionField::FilmStock => "film-stock",
            OptionField::Lens => "lens",
            OptionField::Camera => "camera",
            OptionField::Aperture => "aperture",
            OptionField::Ratio => "ratio",
            OptionField::StudioBgTexture => "bg-texture",
            OptionField::StudioFloorTexture => "floor-texture",
        }
    }

    /// Parse a field from its name; underscores and case are tolerated.
    pub fn from_name(name: &str) -> Result<OptionField, AppError> {
        let normalized = name.trim().to_lowercase().replace('_', "-");
        let alias = match normalized.as_str() {
            "film" | "films" | "filmstock" => "film-stock",
            "light" | "lights" => "lighting",
            "angles" => "angle",
            "scales" => "scale",
            "poses" => "pose",
            "styles" => "style",
            "lenses" => "lens",
            "cameras" => "camera",
            "apertures" => "aperture",
            "ratios" => "ratio",
            other => other,
        };
        OptionField::ALL.into_iter().find(|field| field.name() == alias).ok_or_else(|| {
            AppError::UnknownOptionField {
                name: name.to_string(),
                available: OptionField::ALL.map(|field| field.name()).join(", "),
            }
        })
    }

    /// Whether the list carries the "Maintain Original" sentinel.
    pub fn has_sentinel(&self) -> bool {
        self.values().first() == Some(&MAINTAIN_ORIGINAL)
    }

    /// The canonical option values for this field.
    pub fn values(&self) -> &'static [&'static str] {
        match self {
            OptionField::Angle => ANGLES,
            OptionField::Scale => SCALES,
            OptionField::Pose => POSES,
            OptionField::Lighting => LIGHTS,
            OptionField::LightingBasic => LIGHTS_BASIC,
            OptionField::Style => STYLES,
            OptionField::Grading => GRADINGS,
            OptionField::Texture => TEXTURES,
            OptionField::FilmStock => FILMS,
            OptionField::Lens => LENSES,
            OptionField::Camera => CAMERAS,
            OptionField::Aperture => APERTURES,
            OptionField::Ratio => RATIOS,
            OptionField::StudioBgTexture => STUDIO_BG_TEXTURES,
            OptionField::StudioFloorTexture => STUDIO_FLOOR_TEXTURES,
        }
    }
}

impl fmt::Display for OptionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
