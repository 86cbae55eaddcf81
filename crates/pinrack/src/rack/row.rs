use crate::geom::{normalize_heading, translate, Pos2};

/// Pins of one row centered on `center`, perpendicular to `heading`.
///
/// The first pin sits on the `heading - 90°` side, offset so the row is
/// symmetric about `center` for both odd and even counts; each further pin
/// steps `col_spacing` back across the row.
///
/// Post: exactly `pin_count` pins. A zero count yields an empty row.
pub fn generate_row(center: Pos2, heading: f64, col_spacing: f64, pin_count: usize) -> Vec<Pos2> {
    if pin_count == 0 {
        return Vec::new();
    }
    let row_heading = normalize_heading(heading, -90.0);
    let step_heading = normalize_heading(row_heading, -180.0);

    let first_offset = if pin_count % 2 == 1 {
        ((pin_count - 1) / 2) as f64 * col_spacing
    } else {
        (pin_count / 2) as f64 * col_spacing - col_spacing / 2.0
    };

    let mut pins = Vec::with_capacity(pin_count);
    let mut current = translate(center, row_heading, first_offset);
    pins.push(current);
    for _ in 1..pin_count {
        current = translate(current, step_heading, col_spacing);
        pins.push(current);
    }
    pins
}
