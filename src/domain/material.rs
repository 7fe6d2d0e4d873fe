//! Studio material names to canonical English phrases.

/// Where a material is applied. Each surface has its own fallback phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialSurface {
    Background,
    Floor,
}

impl MaterialSurface {
    /// Phrase used when a material name has no mapping.
    pub fn fallback(&self) -> &'static str {
        match self {
            MaterialSurface::Background => "seamless",
            MaterialSurface::Floor => "studio floor",
        }
    }
}

/// Display name (any locale) to English description.
const MATERIAL_MAPPING: &[(&str, &str)] = &[
    ("Eksiz Kağıt", "Seamless Studio Paper"),
    ("Kadife Kumaş", "Premium Velvet Fabric"),
    ("Kaba Beton", "Rough Raw Concrete"),
    ("Parlatılmış Mermer", "Polished Marble Surface"),
    ("Boyalı Tuğla", "Painted Brick Wall"),
    ("Buzlu Cam", "Frosted Glass Panel"),
    ("Derin İpek", "Deep Silk Drape"),
    ("Sonsuz Fon (Infinity)", "Infinity Cyclorama Curve"),
    ("Parlak Epoksi", "High-Gloss Epoxy Floor"),
    ("Mat Ahşap", "Matte Hardwood Floor"),
    ("Yansımalı Fayans", "Reflective Tiled Surface"),
    ("Endüstriyel Beton", "Industrial Concrete Floor"),
    ("Dokulu Halı", "Textured Fabric Carpet"),
    ("Seamless Paper", "Seamless Studio Paper"),
    ("Velvet Fabric", "Premium Velvet Fabric"),
    ("Rough Concrete", "Rough Raw Concrete"),
    ("Polished Marble", "Polished Marble Surface"),
    ("Painted Brick", "Painted Brick Wall"),
    ("Frosted Glass", "Frosted Glass Panel"),
    ("Deep Silk", "Deep Silk Drape"),
    ("Infinity Cyclorama", "Infinity Cyclorama Curve"),
    ("Glossy Epoxy", "High-Gloss Epoxy Floor"),
    ("Matte Wood", "Matte Hardwood Floor"),
    ("Reflective Tiles", "Reflective Tiled Surface"),
    ("Industrial Concrete", "Industrial Concrete Floor"),
    ("Textured Carpet", "Textured Fabric Carpet"),
    ("Infinity Cyclorama Curve", "Infinity Cyclorama Curve"),
];

/// Material names that select the seamless infinity curve.
pub const INFINITY_MATERIALS: &[&str] =
    &["Sonsuz Fon (Infinity)", "Infinity Cyclorama", "Infinity Cyclorama Curve"];

/// Look up the English phrase for a material name.
pub fn english_material(name: &str) -> Option<&'static str> {
    MATERIAL_MAPPING.iter().find(|(key, _)| *key == name).map(|(_, phrase)| *phrase)
}

/// Resolve a material name to English, falling back to `fallback` when unknown.
pub fn resolve_material<'a>(name: &str, fallback: &'a str) -> &'a str {
    english_material(name).unwrap_or(fallback)
}

/// Resolve a material for a surface, using that surface's fallback.
pub fn resolve_surface_material(name: &str, surface: MaterialSurface) -> &'static str {
    resolve_material(name, surface.fallback())
}

/// Whether the material is the infinity curve (which spans wall and floor).
pub fn is_infinity_material(name: &str) -> bool {
    INFINITY_MATERIALS.contains(&name)
}
