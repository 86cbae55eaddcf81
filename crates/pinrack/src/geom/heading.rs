/// Degrees in one full turn.
pub const FULL_TURN: f64 = 360.0;

#[inline]
pub fn degrees_to_radians(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

/// Add `delta` to `heading` and wrap the sum back into `[0, 360)` with a
/// single correction.
///
/// Pre: `heading ∈ [0, 360)` and `|delta| <= 360`.
/// Post: result `∈ [0, 360)`. Outside the precondition the result may still
/// lie outside that range; use `reduce_heading` for arbitrary input.
#[inline]
pub fn normalize_heading(heading: f64, delta: f64) -> f64 {
    let h = heading + delta;
    if h >= FULL_TURN {
        h - FULL_TURN
    } else if h < 0.0 {
        h + FULL_TURN
    } else {
        h
    }
}

/// Full reduction of an arbitrary finite heading into `[0, 360)`.
#[inline]
pub fn reduce_heading(heading: f64) -> f64 {
    let h = heading.rem_euclid(FULL_TURN);
    // rem_euclid can round up to exactly 360 for tiny negative input
    if h >= FULL_TURN {
        0.0
    } else {
        h
    }
}
