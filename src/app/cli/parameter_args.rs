use clap::Args;

use crate::domain::material::is_infinity_material;
use crate::domain::{ParameterSet, Selection, coerce_degree};

/// Per-field overrides applied after config defaults and presets.
#[derive(Args, Debug, Clone, Default)]
pub(super) struct ParameterArgs {
    /// Free-text scene description (ignored in studio mode)
    #[arg(short = 'n', long, help_heading = "Parameters")]
    narrative: Option<String>,
    /// Framing angle
    #[arg(long, help_heading = "Parameters")]
    angle: Option<String>,
    /// Shot scale
    #[arg(long, help_heading = "Parameters")]
    scale: Option<String>,
    /// Model pose
    #[arg(long, help_heading = "Parameters")]
    pose: Option<String>,
    /// Lighting setup
    #[arg(long, help_heading = "Parameters")]
    lighting: Option<String>,
    /// Visual style
    #[arg(long, help_heading = "Parameters")]
    style: Option<String>,
    /// Colour grading
    #[arg(long, help_heading = "Parameters")]
    grading: Option<String>,
    /// Skin texture
    #[arg(long, help_heading = "Parameters")]
    texture: Option<String>,
    /// Film stock
    #[arg(long, help_heading = "Parameters")]
    film_stock: Option<String>,
    #[arg(long, help_heading = "Parameters")]
    lens: Option<String>,
    #[arg(long, help_heading = "Parameters")]
    camera: Option<String>,
    #[arg(long, help_heading = "Parameters")]
    aperture: Option<String>,
    /// Aspect ratio, e.g. 4:5
    #[arg(long, help_heading = "Parameters")]
    ratio: Option<String>,
    /// Orbital degree; unparsable text counts as 0
    #[arg(long, allow_hyphen_values = true, help_heading = "Parameters")]
    degree: Option<String>,
    /// Dutch roll in degrees
    #[arg(long, allow_hyphen_values = true, help_heading = "Parameters")]
    roll: Option<String>,
    /// Enable studio mode
    #[arg(long, conflicts_with = "no_studio", help_heading = "Studio")]
    studio: bool,
    /// Disable studio mode
    #[arg(long, help_heading = "Studio")]
    no_studio: bool,
    /// Backdrop colour (hex)
    #[arg(long, help_heading = "Studio")]
    bg_color: Option<String>,
    /// Backdrop material
    #[arg(long, help_heading = "Studio")]
    bg_texture: Option<String>,
    /// Floor colour (hex)
    #[arg(long, help_heading = "Studio")]
    floor_color: Option<String>,
    /// Floor material
    #[arg(long, help_heading = "Studio")]
    floor_texture: Option<String>,
    /// Negative prompt
    #[arg(long, help_heading = "Parameters")]
    negative: Option<String>,
    /// Left gel colour (Coloured Gels lighting)
    #[arg(long, help_heading = "Gels")]
    gel_left: Option<String>,
    /// Right gel colour
    #[arg(long, help_heading = "Gels")]
    gel_right: Option<String>,
    /// Back gel colour
    #[arg(long, help_heading = "Gels")]
    gel_back: Option<String>,
}

impl ParameterArgs {
    /// Overwrite every field given on the command line.
    ///
    /// A given infinity-curve material covers both surfaces, whatever the
    /// flag order or the other material flag says. When both flags name an
    /// infinity material, the background's wins.
    pub(super) fn apply(&self, params: &mut ParameterSet) {
        if let Some(text) = &self.narrative {
            params.narrative_text = text.clone();
        }

        let selections = [
            (&self.angle, &mut params.angle),
            (&self.scale, &mut params.scale),
            (&self.pose, &mut params.pose),
            (&self.lighting, &mut params.lighting),
            (&self.style, &mut params.style),
            (&self.grading, &mut params.grading),
            (&self.texture, &mut params.texture),
            (&self.film_stock, &mut params.film_stock),
        ];
        for (flag, field) in selections {
            if let Some(value) = flag {
                *field = Selection::parse(value);
            }
        }

        let concrete = [
            (&self.lens, &mut params.lens),
            (&self.camera, &mut params.camera),
            (&self.aperture, &mut params.aperture),
            (&self.ratio, &mut params.ratio),
            (&self.roll, &mut params.camera_roll),
            (&self.bg_color, &mut params.studio_bg_color),
            (&self.floor_color, &mut params.studio_floor_color),
            (&self.negative, &mut params.negative_prompt),
        ];
        for (flag, field) in concrete {
            if let Some(value) = flag {
                *field = value.clone();
            }
        }

        if let Some(degree) = &self.degree {
            params.orbital_degree = coerce_degree(degree);
        }
        if self.studio {
            params.studio_mode = true;
        }
        if self.no_studio {
            params.studio_mode = false;
        }
        if let Some(texture) = &self.bg_texture {
            params.studio_bg_texture = texture.clone();
        }
        if let Some(texture) = &self.floor_texture {
            params.studio_floor_texture = texture.clone();
        }
        // Infinity sync runs after both materials are in place.
        let infinity = [&self.bg_texture, &self.floor_texture]
            .into_iter()
            .flatten()
            .find(|texture| is_infinity_material(texture));
        if let Some(texture) = infinity {
            params.set_studio_bg_texture(texture.clone());
        }

        let gels = [
            (&self.gel_left, &mut params.gels.left),
            (&self.gel_right, &mut params.gels.right),
            (&self.gel_back, &mut params.gels.back),
        ];
        for (flag, field) in gels {
            if let Some(color) = flag {
                *field = Some(color.clone());
            }
        }
    }
}
