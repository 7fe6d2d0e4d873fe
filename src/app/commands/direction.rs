use crate::domain::{CompassDirection, coerce_degree, resolve_direction};

/// A degree coerced from free text and its nearest compass direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectionOutcome {
    pub degree: i32,
    pub direction: &'static CompassDirection,
}

/// Resolve free-text degree input. Unparsable text counts as 0.
pub fn resolve(input: &str) -> DirectionOutcome {
    let degree = coerce_degree(input);
    DirectionOutcome { degree, direction: resolve_direction(degree) }
}
