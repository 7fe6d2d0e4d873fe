use dialoguer::{Confirm, Input, Select};

use crate::domain::locale::{display_label, field_heading};
use crate::domain::{AppError, Locale, OptionField, ParameterSet, Selection, coerce_degree};

fn interaction_error(err: dialoguer::Error) -> AppError {
    AppError::Interaction(err.to_string())
}

fn select_value(field: OptionField, current: &str, locale: Locale) -> Result<String, AppError> {
    let values = field.values();
    let labels: Vec<&str> = values.iter().map(|value| display_label(field, value, locale)).collect();
    let default = values.iter().position(|value| *value == current).unwrap_or(0);

    let index = Select::new()
        .with_prompt(field_heading(field, locale))
        .items(&labels)
        .default(default)
        .interact()
        .map_err(interaction_error)?;
    Ok(values[index].to_string())
}

fn input_text(prompt: &str, current: &str) -> Result<String, AppError> {
    Input::<String>::new()
        .with_prompt(prompt)
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()
        .map_err(interaction_error)
}

/// Walk through every field, starting from `params`.
pub(super) fn run_wizard(mut params: ParameterSet, locale: Locale) -> Result<ParameterSet, AppError> {
    params.studio_mode = Confirm::new()
        .with_prompt("Studio mode")
        .default(params.studio_mode)
        .interact()
        .map_err(interaction_error)?;

    if params.studio_mode {
        params.studio_bg_color = input_text("Background colour", &params.studio_bg_color)?;
        let bg = select_value(OptionField::StudioBgTexture, &params.studio_bg_texture, locale)?;
        params.set_studio_bg_texture(bg);
        params.studio_floor_color = input_text("Floor colour", &params.studio_floor_color)?;
        let floor = select_value(OptionField::StudioFloorTexture, &params.studio_floor_texture, locale)?;
        params.set_studio_floor_texture(floor);
    } else {
        params.narrative_text = input_text("Narrative", &params.narrative_text)?;
    }

    for (field, selection) in [
        (OptionField::Angle, &mut params.angle),
        (OptionField::Scale, &mut params.scale),
        (OptionField::Pose, &mut params.pose),
        (OptionField::Lighting, &mut params.lighting),
        (OptionField::Style, &mut params.style),
        (OptionField::Grading, &mut params.grading),
        (OptionField::Texture, &mut params.texture),
        (OptionField::FilmStock, &mut params.film_stock),
    ] {
        *selection = Selection::parse(&select_value(field, selection.as_str(), locale)?);
    }

    for (field, value) in [
        (OptionField::Camera, &mut params.camera),
        (OptionField::Lens, &mut params.lens),
        (OptionField::Aperture, &mut params.aperture),
        (OptionField::Ratio, &mut params.ratio),
    ] {
        *value = select_value(field, value, locale)?;
    }

    let degree = input_text("Orbital degree", &params.orbital_degree.to_string())?;
    params.orbital_degree = coerce_degree(&degree);
    params.camera_roll = input_text("Dutch roll (empty for none)", &params.camera_roll)?;
    params.negative_prompt = input_text("Negative prompt", &params.negative_prompt)?;

    Ok(params)
}
