//! Display labels for canonical option values.
//!
//! Rendering always works on canonical English values; these tables only
//! decide how a value is shown to a person choosing it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;
use crate::domain::options::OptionField;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Tr,
}

impl Locale {
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Tr => "tr",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "tr" => Ok(Locale::Tr),
            other => Err(AppError::config_error(format!(
                "Unknown locale '{other}'. Available: en, tr"
            ))),
        }
    }
}

const KEEP_TR: (&str, &str) = ("Maintain Original", "Değiştirme");

const ANGLES_TR: &[(&str, &str)] = &[
    KEEP_TR,
    ("Eye Level", "Göz Hizası"),
    ("Low Angle", "Düşük Açı"),
    ("High Angle", "Yüksek Açı"),
    ("Worm's Eye", "Kurbağa Bakışı"),
    ("Bird's Eye", "Kuş Bakışı"),
    ("Overhead", "Üst Açı"),
];

const SCALES_TR: &[(&str, &str)] = &[
    KEEP_TR,
    ("Extreme Close-up (Eye/Mouth)", "Çok yakın plan"),
    ("Close-up (Head/Shoulder)", "Yakın plan"),
    ("Medium Shot (Chest)", "Göğüs plan"),
    ("Medium Long Shot (Waist)", "Bel plan"),
    ("Full Shot (Full Body)", "Boy plan"),
    ("Wide Shot (General)", "Genel plan"),
    ("Extreme Wide Shot", "Çok genel plan"),
    ("Long Distance", "Uzak mesafe"),
];

const POSES_TR: &[(&str, &str)] = &[
    KEEP_TR,
    ("Frontal Standing", "Düz Duruş"),
    ("90 Profile View", "Profil Duruş"),
    ("Three-Quarter Turn", "Üç Çeyrek Duruş"),
    ("Sitting / Crouching", "Oturur / Çömelmiş"),
    ("Dynamic Movement", "Dinamik / Hareketli"),
    ("Over the Shoulder", "Omuz Üstü Bakış"),
];

const LIGHTS_TR: &[(&str, &str)] = &[
    KEEP_TR,
    ("Butterfly Lighting", "Butterfly Aydınlatma"),
    ("Rim Lighting", "Rim Light (Kontur)"),
    ("Rembrandt Lighting", "Rembrandt"),
    ("Softbox Studio", "Yumuşak Stüdyo"),
    ("Gobo Shadows", "Gobo Gölgeleri"),
    ("Neon / Cyberpunk", "Neon Işıklar"),
    ("Golden Hour", "Altın Saat"),
    ("Coloured Gels", "Renkli Jelatinler"),
    ("Neon Lights", "Neon Işıklar"),
    ("Studio Light", "Stüdyo Işığı"),
    ("Dramatic Light", "Dramatik Işık"),
    ("Hard Light", "Sert Işık"),
    ("Shadowy Light", "Gölgeli Işık"),
    ("Backlight", "Arka Işık"),
    ("Sunset", "Gün Batımı"),
    ("Balanced Light", "Dengeli Işık"),
    ("Soft Light", "Yumuşak Işık"),
];

const STYLES_TR: &[(&str, &str)] = &[
    KEEP_TR,
    ("Editorial", "Editöryal"),
    ("Cinematic", "Sinematik"),
    ("Avant-garde", "Avangart"),
];

const FILMS_TR: &[(&str, &str)] = &[
    KEEP_TR,
    ("B&W High Grain", "Siyah Beyaz (Yüksek Gren)"),
    ("Digital Sharp", "Dijital Keskin"),
];

const TEXTURES_TR: &[(&str, &str)] = &[
    KEEP_TR,
    ("Ultra-Detailed Pores", "Gözenek Detaylı"),
    ("Soft Skin Gloss", "Yumuşak Cilt Parlaması"),
    ("Raw Skin Texture", "Ham Cilt Dokusu"),
    ("Matte Finish", "Mat Görünüm"),
];

const GRADINGS_TR: &[(&str, &str)] = &[
    KEEP_TR,
    ("Warm Vintage", "Sıcak Nostalji"),
    ("Muted Tones", "Soluk Tonlar"),
    ("High Saturation", "Yüksek Doygunluk"),
    ("Monochrome", "Siyah Beyaz"),
];

fn table(field: OptionField) -> &'static [(&'static str, &'static str)] {
    match field {
        OptionField::Angle => ANGLES_TR,
        OptionField::Scale => SCALES_TR,
        OptionField::Pose => POSES_TR,
        OptionField::Lighting | OptionField::LightingBasic => LIGHTS_TR,
        OptionField::Style => STYLES_TR,
        OptionField::FilmStock => FILMS_TR,
        OptionField::Texture => TEXTURES_TR,
        OptionField::Grading => GRADINGS_TR,
        _ => &[],
    }
}

/// Label to show for a canonical value. Unlisted values show as themselves.
pub fn display_label<'a>(field: OptionField, value: &'a str, locale: Locale) -> &'a str {
    match locale {
        Locale::En => value,
        Locale::Tr => table(field)
            .iter()
            .find(|(canonical, _)| *canonical == value)
            .map(|(_, label)| *label)
            .unwrap_or(value),
    }
}

/// Heading for a field.
pub fn field_heading(field: OptionField, locale: Locale) -> &'static str {
    match locale {
        Locale::En => match field {
            OptionField::Angle => "Angle",
            OptionField::Scale => "Scale",
            OptionField::Pose => "Pose",
            OptionField::Lighting | OptionField::LightingBasic => "Lighting",
            OptionField::Style => "Style",
            OptionField::Grading => "Grading",
            OptionField::Texture => "Skin Texture",
            OptionField::FilmStock => "Film Stock",
            OptionField::Lens => "Lens",
            OptionField::Camera => "Camera",
            OptionField::Aperture => "Aperture",
            OptionField::Ratio => "Aspect Ratio",
            OptionField::StudioBgTexture => "Background",
            OptionField::StudioFloorTexture => "Floor",
        },
        Locale::Tr => match field {
            OptionField::Angle => "Teknik Açı",
            OptionField::Scale => "Plan Ayarları",
            OptionField::Pose => "Model Pozu",
            OptionField::Lighting | OptionField::LightingBasic => "Aydınlatma",
            OptionField::Style => "Görsel Stil",
            OptionField::Grading => "Renk Grading",
            OptionField::Texture => "Cilt Dokusu",
            OptionField::FilmStock => "Film Stock",
            OptionField::Lens => "Lens Optiği",
            OptionField::Camera => "Kamera",
            OptionField::Aperture => "Diyafram",
            OptionField::Ratio => "En Boy Oranı",
            OptionField::StudioBgTexture => "Arka Plan",
            OptionField::StudioFloorTexture => "Zemin",
        },
    }
}
