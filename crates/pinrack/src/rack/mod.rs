//! Rack and row generators.
//!
//! Model
//! - The rack is built row by row starting at the back-center point. Row 0 is
//!   the widest (`row_count` pins); each following row has one pin fewer and
//!   is centered `row_distance` further along the rack heading, so the single
//!   apex pin is emitted last.
//! - Rows run perpendicular to the heading. Pins within a row are emitted from
//!   the `heading - 90°` side across to the other side.
//!
//! Code cross-refs: `RackCfg`, `geom::translate`, `format::format_pins`

mod cfg;
mod row;

pub use cfg::{RackCfg, RackParams, ROW_SPACING_RATIO};
pub use row::generate_row;

use crate::geom::{translate, Pos2};

/// All pins of the rack, flattened in generation order.
///
/// Post: `len() == cfg.pin_count()`.
pub fn generate_pins(cfg: &RackCfg) -> Vec<Pos2> {
    let mut pins = Vec::with_capacity(cfg.pin_count());
    for row in RowCenters::new(cfg) {
        pins.extend(generate_row(
            row.center,
            cfg.heading(),
            cfg.col_spacing(),
            row.pin_count,
        ));
    }
    pins
}

/// Same pins as `generate_pins`, grouped by row (widest row first).
pub fn generate_rows(cfg: &RackCfg) -> Vec<Vec<Pos2>> {
    RowCenters::new(cfg)
        .map(|row| generate_row(row.center, cfg.heading(), cfg.col_spacing(), row.pin_count))
        .collect()
}

#[derive(Clone, Copy, Debug)]
struct RowSlot {
    center: Pos2,
    pin_count: usize,
}

/// Walks the row centers from the back row towards the apex.
struct RowCenters {
    center: Pos2,
    heading: f64,
    row_distance: f64,
    row_count: usize,
    index: usize,
}

impl RowCenters {
    fn new(cfg: &RackCfg) -> Self {
        Self {
            center: cfg.back_center(),
            heading: cfg.heading(),
            row_distance: cfg.row_distance(),
            row_count: cfg.row_count(),
            index: 0,
        }
    }
}

impl Iterator for RowCenters {
    type Item = RowSlot;

    fn next(&mut self) -> Option<RowSlot> {
        if self.index >= self.row_count {
            return None;
        }
        let slot = RowSlot {
            center: self.center,
            pin_count: self.row_count - self.index,
        };
        self.center = translate(self.center, self.heading, self.row_distance);
        self.index += 1;
        Some(slot)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.row_count - self.index;
        (left, Some(left))
    }
}

impl ExactSizeIterator for RowCenters {}
