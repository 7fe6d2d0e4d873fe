//! Store-backed loading of `framelab.toml`, presets and the scenario catalog.
//!
//! Pure schema parsing lives in `domain::configuration` and `domain::preset`.

mod load_catalog;
mod load_config;
mod load_preset;

pub use load_catalog::load_catalog;
pub use load_config::{load_config, peek_log_level};
pub use load_preset::{load_preset, save_preset};
