//! Curated scenarios and the random picker.

mod catalog;
mod picker;

pub use catalog::{ScenarioCatalog, ScenarioEntry, ScenarioSettings};
pub use picker::{MAX_PICK_ATTEMPTS, ROLL_PROBABILITY, ROLL_RANGE, ScenarioPick, pick_scenario};
