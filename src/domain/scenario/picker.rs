use rand::Rng;
use rand::seq::SliceRandom;

use super::catalog::{ScenarioCatalog, ScenarioEntry};
use crate::domain::compass::{COMPASS_DIRECTIONS, CompassDirection};

/// Draws allowed while trying to avoid the previous scenario.
pub const MAX_PICK_ATTEMPTS: usize = 5;

/// Probability that a pick also tilts the camera.
pub const ROLL_PROBABILITY: f64 = 0.3;

/// Inclusive bounds of the random dutch roll, in degrees.
pub const ROLL_RANGE: (i32, i32) = (-10, 10);

/// Result of a random scenario draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioPick<'a> {
    /// Catalog index; pass it back as `last_index` on the next call.
    pub index: usize,
    pub scenario: &'a ScenarioEntry,
    /// Orbital position, drawn independently of the scenario's framing angle.
    pub direction: &'static CompassDirection,
    /// Dutch roll as text, or empty for no roll.
    pub camera_roll: String,
}

/// Pick a random scenario, avoiding an immediate repeat of `last_index`.
///
/// With more than one entry the index is redrawn while it equals
/// `last_index`, for at most [`MAX_PICK_ATTEMPTS`] draws in total; the last
/// draw is accepted even if it repeats. A single-entry catalog is returned
/// as-is. The orbit and the roll are drawn afterwards.
///
/// Callers must not pick while studio mode is active.
pub fn pick_scenario<'a, R>(
    catalog: &'a ScenarioCatalog,
    last_index: Option<usize>,
    rng: &mut R,
) -> ScenarioPick<'a>
where
    R: Rng + ?Sized,
{
    let count = catalog.len();
    let mut index = rng.gen_range(0..count);
    if count > 1 {
        let mut attempts = 1;
        while Some(index) == last_index && attempts < MAX_PICK_ATTEMPTS {
            index = rng.gen_range(0..count);
            attempts += 1;
        }
    }

    let direction = COMPASS_DIRECTIONS.choose(rng).unwrap_or(&COMPASS_DIRECTIONS[0]);

    let camera_roll = if rng.gen_bool(ROLL_PROBABILITY) {
        rng.gen_range(ROLL_RANGE.0..=ROLL_RANGE.1).to_string()
    } else {
        String::new()
    };

    ScenarioPick { index, scenario: &catalog.entries()[index], direction, camera_roll }
}
