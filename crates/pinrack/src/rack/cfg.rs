//! Rack configuration: raw boundary parameters and their validated form.
//!
//! - `RackParams`: every field optional, filled by whatever surface collects
//!   input (CLI flags, tests). No checks happen here.
//! - `RackCfg`: produced only by `RackParams::validate` (or `RackCfg::new`),
//!   so the generators never see a zero row count or a non-finite value.

use crate::error::RackError;
use crate::geom::{reduce_heading, Pos2};

/// Row spacing as a fraction of column spacing.
///
/// Kept at the legacy literal `1.72916 / 2` rather than `√3 / 2` so output
/// matches previously published racks to two decimals.
pub const ROW_SPACING_RATIO: f64 = 1.72916 / 2.0;

/// `n(n+1)/2`, or `None` when the product overflows `usize`.
fn triangular(n: usize) -> Option<usize> {
    n.checked_add(1).and_then(|m| m.checked_mul(n)).map(|p| p / 2)
}

/// Unvalidated rack parameters.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RackParams {
    pub back_center: Option<Pos2>,
    pub width: Option<f64>,
    pub row_count: Option<i64>,
    /// Defaults to 0° when absent.
    pub heading: Option<f64>,
}

impl RackParams {
    /// Check presence first, then values; the first failure wins.
    pub fn validate(&self) -> Result<RackCfg, RackError> {
        let back_center = self
            .back_center
            .ok_or(RackError::MissingArgument("pos"))?;
        let width = self.width.ok_or(RackError::MissingArgument("width"))?;
        let row_count = self
            .row_count
            .ok_or(RackError::MissingArgument("row_count"))?;
        let heading = self.heading.unwrap_or(0.0);

        if row_count <= 0 {
            return Err(RackError::invalid(
                "row_count",
                format!("must be at least 1, got {row_count}"),
            ));
        }
        let row_count = usize::try_from(row_count)
            .map_err(|_| RackError::invalid("row_count", format!("{row_count} is too large")))?;
        RackCfg::new(back_center, width, row_count, heading)
    }
}

/// Validated rack configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RackCfg {
    back_center: Pos2,
    width: f64,
    row_count: usize,
    heading: f64,
}

impl RackCfg {
    /// Pre: finite position, finite `width > 0`, `row_count >= 1`, finite heading.
    /// The heading is reduced into `[0, 360)`.
    pub fn new(
        back_center: Pos2,
        width: f64,
        row_count: usize,
        heading: f64,
    ) -> Result<Self, RackError> {
        if !(back_center.x.is_finite() && back_center.y.is_finite()) {
            return Err(RackError::invalid(
                "pos",
                format!("coordinates must be finite, got ({}, {})", back_center.x, back_center.y),
            ));
        }
        if !width.is_finite() {
            return Err(RackError::invalid("width", format!("must be finite, got {width}")));
        }
        if width <= 0.0 {
            return Err(RackError::invalid("width", format!("must be positive, got {width}")));
        }
        if row_count == 0 {
            return Err(RackError::invalid("row_count", "must be at least 1, got 0"));
        }
        if triangular(row_count).is_none() {
            return Err(RackError::invalid(
                "row_count",
                format!("{row_count} rows overflow the pin count"),
            ));
        }
        if !heading.is_finite() {
            return Err(RackError::invalid("heading", format!("must be finite, got {heading}")));
        }
        Ok(Self {
            back_center,
            width,
            row_count,
            heading: reduce_heading(heading),
        })
    }

    #[inline]
    pub fn back_center(&self) -> Pos2 {
        self.back_center
    }
    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }
    #[inline]
    pub fn row_count(&self) -> usize {
        self.row_count
    }
    /// Heading in `[0, 360)`.
    #[inline]
    pub fn heading(&self) -> f64 {
        self.heading
    }

    /// Distance between neighbouring pins in a row: `width / row_count`.
    #[inline]
    pub fn col_spacing(&self) -> f64 {
        self.width / self.row_count as f64
    }

    /// Distance between consecutive row centers along the heading.
    #[inline]
    pub fn row_distance(&self) -> f64 {
        self.col_spacing() * ROW_SPACING_RATIO
    }

    /// Total pins: the triangular number `R(R+1)/2`.
    #[inline]
    pub fn pin_count(&self) -> usize {
        // checked in `new`
        triangular(self.row_count).unwrap_or(usize::MAX)
    }

    /// Same rack turned by `delta` degrees about the back-center.
    #[cfg(test)]
    pub(crate) fn rotated(&self, delta: f64) -> Result<Self, RackError> {
        Self::new(self.back_center, self.width, self.row_count, self.heading + delta)
    }
}
