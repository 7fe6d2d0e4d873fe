//! Eight-point orbital compass used to annotate numeric camera positions.

use serde::Serialize;

/// A named camera position around the subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompassDirection {
    pub id: &'static str,
    pub label: &'static str,
    /// Orbital anchor in degrees.
    pub degree: i32,
    /// Rotation of the direction icon; only display surfaces read this.
    pub icon_pos: i32,
}

/// Fixed compass table. Order matters: it decides nearest-match ties.
pub static COMPASS_DIRECTIONS: [CompassDirection; 8] = [
    CompassDirection { id: "front", label: "Front", degree: 0, icon_pos: 90 },
    CompassDirection { id: "front-right", label: "Front-Right", degree: 45, icon_pos: 45 },
    CompassDirection { id: "right", label: "Right Side", degree: 90, icon_pos: 0 },
    CompassDirection { id: "back-right", label: "Back-Right", degree: 135, icon_pos: 315 },
    CompassDirection { id: "back", label: "Rear", degree: 180, icon_pos: 270 },
    CompassDirection { id: "back-left", label: "Back-Left", degree: 225, icon_pos: 225 },
    CompassDirection { id: "left", label: "Left Side", degree: 270, icon_pos: 180 },
    CompassDirection { id: "front-left", label: "Front-Left", degree: 315, icon_pos: 135 },
];

/// Resolve a degree to the nearest compass direction.
///
/// Distance is the plain absolute difference `|anchor - degree|`, with no
/// wraparound: 359 is 359 away from Front and 44 away from Front-Left, so it
/// resolves to Front-Left. Ties keep the entry listed first (22 resolves to
/// Front, not Front-Right). Any integer is accepted.
pub fn resolve_direction(degree: i32) -> &'static CompassDirection {
    let distance = |entry: &CompassDirection| (i64::from(entry.degree) - i64::from(degree)).abs();

    let mut best = &COMPASS_DIRECTIONS[0];
    for entry in &COMPASS_DIRECTIONS[1..] {
        if distance(entry) < distance(best) {
            best = entry;
        }
    }
    best
}

/// Look up a direction by its identifier.
pub fn direction_by_id(id: &str) -> Option<&'static CompassDirection> {
    COMPASS_DIRECTIONS.iter().find(|entry| entry.id == id)
}
