use nalgebra::Vector2;

use super::heading::degrees_to_radians;

/// A point in the rack plane. Copied and compared by value.
pub type Pos2 = Vector2<f64>;

/// Move `start` by `distance` along the compass `heading` (degrees).
///
/// `x' = x + d·sin(θ)`, `y' = y + d·cos(θ)`. Negative distances move backward.
#[inline]
pub fn translate(start: Pos2, heading: f64, distance: f64) -> Pos2 {
    let rad = degrees_to_radians(heading);
    Pos2::new(
        start.x + distance * rad.sin(),
        start.y + distance * rad.cos(),
    )
}
