use crate::domain::compass::resolve_direction;
use crate::domain::lighting::describe_lighting;
use crate::domain::material::{MaterialSurface, resolve_surface_material};
use crate::domain::parameters::ParameterSet;
use crate::domain::selection::Selection;

use super::document::{ConsistencyAnchors, PromptDocument, RenderedDocument, SelectedParameters};

const QUALITY_PREAMBLE: &str = "best quality, amazing aesthetics";

const VOLUMETRIC_RECONSTRUCTION: &str =
    "Maintain realism and standard proportions. Identity mapping active.";

const REFERENCE_DEFAULT: &str = "Reference Default";

const BASE_MAINTAINED: [&str; 4] = ["model", "clothes", "accessories", "consistency"];

const SCALE_PROTOCOL: &[(&str, &str)] = &[
    ("Full Shot (Full Body)", "head-to-toe full body frame"),
    ("Wide Shot (General)", "24mm wide perspective"),
    ("Extreme Wide Shot", "extreme wide subject smaller"),
    ("Long Distance", "tiny focal point epic landscape"),
];

/// Render a parameter set into a prompt document.
///
/// Pure and deterministic: equal inputs give equal documents. Unknown
/// option values render as their raw text.
pub fn build_prompt(params: &ParameterSet) -> RenderedDocument {
    let direction = resolve_direction(params.orbital_degree);
    let narrative = effective_narrative(params);
    let bg_material = resolve_surface_material(&params.studio_bg_texture, MaterialSurface::Background);
    let floor_material = resolve_surface_material(&params.studio_floor_texture, MaterialSurface::Floor);
    let maintained = maintained_features(params).join(", ");
    let lighting = describe_lighting(&params.lighting, &params.gels);

    let studio_status = if params.studio_mode { "ACTIVE" } else { "Inactive" };
    let (background, floor) = if params.studio_mode {
        (
            format!("{} ({})", params.studio_bg_color, params.studio_bg_texture),
            format!("{} ({})", params.studio_floor_color, params.studio_floor_texture),
        )
    } else {
        (REFERENCE_DEFAULT.to_string(), REFERENCE_DEFAULT.to_string())
    };
    let orbital = format!("{}° ({})", params.orbital_degree, direction.label);
    let roll = roll_degrees(&params.camera_roll);
    let dutch_roll = format!("{roll}°");

    let mut clauses = vec![weighted(QUALITY_PREAMBLE)];
    if params.studio_mode {
        clauses.push(weighted(&format!(
            "professional photography studio, seamless {} {} background",
            params.studio_bg_color, bg_material
        )));
        clauses.push(weighted(&format!(
            "subject standing on {} {} floor, clean minimalist environment",
            params.studio_floor_color, floor_material
        )));
    }
    clauses.push(weighted(&format!("shot on {}", params.camera)));
    clauses.push(braced(&params.lens));
    clauses.push(braced(&params.aperture));
    if !narrative.is_empty() {
        clauses.push(weighted(narrative));
    }
    if let Some(angle) = params.angle.value() {
        clauses.push(braced(angle));
    }
    if let Some(scale) = params.scale.value() {
        clauses.push(braced(scale_phrase(scale)));
    }
    if let Some(pose) = params.pose.value() {
        clauses.push(braced(&format!("{} pose", pose.to_lowercase())));
    }
    clauses.push(braced(&format!("studio mode: {studio_status}")));
    clauses.push(braced(&format!("background: {background}")));
    clauses.push(braced(&format!("floor: {floor}")));
    clauses.push(braced(&format!("orbital degree: {orbital}")));
    clauses.push(format!(
        "camera positioned at {} degrees orbit, {} view of the subject",
        params.orbital_degree, direction.label
    ));
    clauses.push(braced(&format!("dutch roll: {dutch_roll}")));
    clauses.push(braced(&format!("aspect ratio: {}", params.ratio)));
    if !params.lighting.is_maintained() {
        clauses.push(braced(&format!("lighting: {lighting}")));
    }
    push_labelled(&mut clauses, "style", &params.style);
    push_labelled(&mut clauses, "grading", &params.grading);
    push_labelled(&mut clauses, "texture", &params.texture);
    push_labelled(&mut clauses, "film stock", &params.film_stock);
    clauses.push(braced(&format!("match ref: {maintained}")));
    clauses.push(format!("Aspect Ratio {}", params.ratio));

    let mut protocol = format!("MANDATORY: shot on {}.", braced(&params.camera));
    if params.studio_mode {
        protocol.push_str(&format!(
            " FORCE BACKGROUND: {} {}. FORCE FLOOR: {} {}.",
            params.studio_bg_color, bg_material, params.studio_floor_color, floor_material
        ));
    }
    protocol.push_str(&format!(" Execute narrative {}. Technical parameters locked.", braced(narrative)));

    let document = PromptDocument {
        camera_override_protocol: protocol,
        volumetric_reconstruction: VOLUMETRIC_RECONSTRUCTION.to_string(),
        selected_parameters: SelectedParameters {
            studio_mode: studio_status.to_string(),
            background,
            floor,
            camera: params.camera.clone(),
            lens: params.lens.clone(),
            aperture: params.aperture.clone(),
            angle: params.angle.to_string(),
            scale: params.scale.to_string(),
            pose: params.pose.to_string(),
            orbital_degree: orbital,
            dutch_roll: dutch_roll.clone(),
            aspect_ratio: params.ratio.clone(),
            lighting,
            style: params.style.to_string(),
            grading: params.grading.to_string(),
            texture: params.texture.to_string(),
            film_stock: params.film_stock.to_string(),
        },
        consistency_anchors: ConsistencyAnchors {
            model: "identity lock".to_string(),
            garments: "garment sync".to_string(),
            accessories: "accessory lock".to_string(),
            continuity: "scene continuity".to_string(),
            maintained_features: maintained,
        },
        framing_boundaries: format!(
            "{} at {} aspect.",
            braced(params.scale.as_str()),
            braced(&params.ratio)
        ),
        optical_physics: format!(
            "Utilizing {} @ {}. Roll {}. Lens {}.",
            braced(&params.camera),
            braced(&params.aperture),
            braced(&dutch_roll),
            braced(&params.lens)
        ),
        negative_prompt: params.negative_prompt.clone(),
        final_technical_prompt: clauses.join(", "),
    };

    RenderedDocument { document, clauses }
}

/// Narrative actually used: empty in studio mode, otherwise trimmed.
pub fn effective_narrative(params: &ParameterSet) -> &str {
    if params.studio_mode { "" } else { params.narrative_text.trim() }
}

/// Features kept from the reference image, in emitted order.
///
/// Outside studio mode, each look field at its maintained value is listed
/// ahead of the fixed base entries. Studio mode lists only the base.
pub fn maintained_features(params: &ParameterSet) -> Vec<&'static str> {
    let mut features = Vec::with_capacity(9);
    if !params.studio_mode {
        let conditional = [
            (&params.lighting, "lighting"),
            (&params.grading, "grading"),
            (&params.style, "visual style"),
            (&params.texture, "skin texture"),
            (&params.film_stock, "film stock"),
        ];
        features.extend(
            conditional
                .into_iter()
                .filter(|(selection, _)| selection.is_maintained())
                .map(|(_, feature)| feature),
        );
    }
    features.extend(BASE_MAINTAINED);
    features
}

/// Framing phrase for a scale value, or the value itself when unlisted.
pub fn scale_phrase(scale: &str) -> &str {
    SCALE_PROTOCOL.iter().find(|(key, _)| *key == scale).map(|(_, phrase)| *phrase).unwrap_or(scale)
}

fn roll_degrees(camera_roll: &str) -> &str {
    if camera_roll.is_empty() { "0" } else { camera_roll }
}

fn push_labelled(clauses: &mut Vec<String>, label: &str, selection: &Selection) {
    if let Some(value) = selection.value() {
        clauses.push(braced(&format!("{label}: {value}")));
    }
}

/// `{text}`: a standard-weight clause.
fn braced(text: &str) -> String {
    format!("{{{text}}}")
}

/// `{{text}}`: an emphasized clause.
fn weighted(text: &str) -> String {
    format!("{{{{{text}}}}}")
}
