//! Planar geometry in compass convention.
//!
//! Purpose
//! - Keep the angle arithmetic used by the rack generator in one place:
//!   degree/radian conversion, bounded heading wraparound, and translation of
//!   a point along a heading.
//!
//! Convention
//! - Headings are bearings in degrees: 0° points along +y ("forward"), 90°
//!   along +x. Sine drives x and cosine drives y, the reverse of the usual
//!   math-angle convention.
//! - Positions are plain `nalgebra::Vector2<f64>` values.

mod heading;
mod types;

pub use heading::{degrees_to_radians, normalize_heading, reduce_heading, FULL_TURN};
pub use types::{translate, Pos2};
