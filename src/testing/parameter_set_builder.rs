use crate::domain::{GelColors, ParameterSet, Selection};

/// Fluent construction of parameter sets for tests.
#[derive(Debug, Clone, Default)]
pub struct ParameterSetBuilder {
    params: ParameterSet,
}

impl ParameterSetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn narrative(mut self, text: &str) -> Self {
        self.params.narrative_text = text.to_string();
        self
    }

    pub fn angle(mut self, value: &str) -> Self {
        self.params.angle = Selection::from(value);
        self
    }

    pub fn scale(mut self, value: &str) -> Self {
        self.params.scale = Selection::from(value);
        self
    }

    pub fn pose(mut self, value: &str) -> Self {
        self.params.pose = Selection::from(value);
        self
    }

    pub fn lighting(mut self, value: &str) -> Self {
        self.params.lighting = Selection::from(value);
        self
    }

    pub fn style(mut self, value: &str) -> Self {
        self.params.style = Selection::from(value);
        self
    }

    pub fn grading(mut self, value: &str) -> Self {
        self.params.grading = Selection::from(value);
        self
    }

    pub fn texture(mut self, value: &str) -> Self {
        self.params.texture = Selection::from(value);
        self
    }

    pub fn film_stock(mut self, value: &str) -> Self {
        self.params.film_stock = Selection::from(value);
        self
    }

    pub fn lens(mut self, value: &str) -> Self {
        self.params.lens = value.to_string();
        self
    }

    pub fn camera(mut self, value: &str) -> Self {
        self.params.camera = value.to_string();
        self
    }

    pub fn aperture(mut self, value: &str) -> Self {
        self.params.aperture = value.to_string();
        self
    }

    pub fn ratio(mut self, value: &str) -> Self {
        self.params.ratio = value.to_string();
        self
    }

    pub fn orbital_degree(mut self, degree: i32) -> Self {
        self.params.orbital_degree = degree;
        self
    }

    pub fn camera_roll(mut self, roll: &str) -> Self {
        self.params.camera_roll = roll.to_string();
        self
    }

    pub fn studio_mode(mut self, on: bool) -> Self {
        self.params.studio_mode = on;
        self
    }

    /// Set backdrop colour and material without infinity sync.
    pub fn studio_bg(mut self, color: &str, texture: &str) -> Self {
        self.params.studio_bg_color = color.to_string();
        self.params.studio_bg_texture = texture.to_string();
        self
    }

    /// Set floor colour and material without infinity sync.
    pub fn studio_floor(mut self, color: &str, texture: &str) -> Self {
        self.params.studio_floor_color = color.to_string();
        self.params.studio_floor_texture = texture.to_string();
        self
    }

    pub fn negative_prompt(mut self, text: &str) -> Self {
        self.params.negative_prompt = text.to_string();
        self
    }

    pub fn gels(mut self, gels: GelColors) -> Self {
        self.params.gels = gels;
        self
    }

    pub fn build(self) -> ParameterSet {
        self.params
    }
}
