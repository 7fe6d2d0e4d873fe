use crate::domain::prompt::TemplateRenderer;
use crate::domain::{FramelabConfig, ScenarioCatalog};
use crate::ports::PresetStore;

/// Application context holding dependencies for command execution.
pub struct AppContext<S: PresetStore, R: TemplateRenderer> {
    store: S,
    renderer: R,
    config: FramelabConfig,
    catalog: ScenarioCatalog,
}

impl<S: PresetStore, R: TemplateRenderer> AppContext<S, R> {
    pub fn new(store: S, renderer: R, config: FramelabConfig, catalog: ScenarioCatalog) -> Self {
        Self { store, renderer, config, catalog }
    }

    /// Store used for presets and config files.
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn config(&self) -> &FramelabConfig {
        &self.config
    }

    /// Built-in scenarios plus any configured extras.
    pub fn catalog(&self) -> &ScenarioCatalog {
        &self.catalog
    }
}
