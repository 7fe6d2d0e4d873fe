use serde::Serialize;

use super::document::RenderedDocument;
use crate::domain::AppError;
use crate::domain::locale::{Locale, display_label, field_heading};
use crate::domain::options::OptionField;
use crate::domain::parameters::ParameterSet;

/// Trait for rendering templates.
///
/// Keeps the template engine (minijinja) out of the domain layer.
pub trait TemplateRenderer {
    /// Render `template` with `context`. `template_name` is used in errors.
    fn render(
        &self,
        template: &str,
        context: &SummaryContext,
        template_name: &str,
    ) -> Result<String, AppError>;
}

/// One labelled line of the human-readable summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    pub heading: String,
    pub value: String,
}

/// Variables exposed to the summary template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryContext {
    pub locale: String,
    pub studio_mode: bool,
    pub narrative: String,
    pub orbit: String,
    pub dutch_roll: String,
    pub rows: Vec<SummaryRow>,
    pub maintained: Vec<String>,
    pub negative_prompt: String,
    pub prompt: String,
}

impl SummaryContext {
    /// Collect summary variables, labelling selections for `locale`.
    pub fn new(params: &ParameterSet, rendered: &RenderedDocument, locale: Locale) -> Self {
        let selected = &rendered.document.selected_parameters;
        let row = |field: OptionField, value: &str| SummaryRow {
            heading: field_heading(field, locale).to_string(),
            value: display_label(field, value, locale).to_string(),
        };

        let mut rows = vec![
            row(OptionField::Camera, &params.camera),
            row(OptionField::Lens, &params.lens),
            row(OptionField::Aperture, &params.aperture),
            row(OptionField::Ratio, &params.ratio),
            row(OptionField::Angle, params.angle.as_str()),
            row(OptionField::Scale, params.scale.as_str()),
            row(OptionField::Pose, params.pose.as_str()),
            row(OptionField::Lighting, params.lighting.as_str()),
            row(OptionField::Style, params.style.as_str()),
            row(OptionField::Grading, params.grading.as_str()),
            row(OptionField::Texture, params.texture.as_str()),
            row(OptionField::FilmStock, params.film_stock.as_str()),
        ];
        if params.studio_mode {
            rows.push(SummaryRow {
                heading: field_heading(OptionField::StudioBgTexture, locale).to_string(),
                value: selected.background.clone(),
            });
            rows.push(SummaryRow {
                heading: field_heading(OptionField::StudioFloorTexture, locale).to_string(),
                value: selected.floor.clone(),
            });
        }

        Self {
            locale: locale.code().to_string(),
            studio_mode: params.studio_mode,
            narrative: super::engine::effective_narrative(params).to_string(),
            orbit: selected.orbital_degree.clone(),
            dutch_roll: selected.dutch_roll.clone(),
            rows,
            maintained: super::engine::maintained_features(params)
                .into_iter()
                .map(str::to_string)
                .collect(),
            negative_prompt: rendered.document.negative_prompt.clone(),
            prompt: rendered.document.final_technical_prompt.clone(),
        }
    }
}
