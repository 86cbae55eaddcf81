//! Pin coordinates for a triangular bowling-pin rack.
//!
//! Layout
//! - `geom`: heading arithmetic and compass-style translation of points.
//! - `rack`: validated rack configuration plus the row and rack generators.
//! - `format`: text rendering of pin sequences, one `(x,y)` per line.
//! - `error`: typed failures raised while validating raw parameters.
//!
//! Everything here is a pure function of its inputs. Process arguments are
//! handled by the `cli` crate, which builds a `RackParams` and validates it
//! once before calling into the generators.

pub mod error;
pub mod format;
pub mod geom;
pub mod rack;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::RackError;
pub use geom::Pos2;
pub use rack::{RackCfg, RackParams};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::RackError;
    pub use crate::format::{format_pin, format_pins, PinList};
    pub use crate::geom::{degrees_to_radians, normalize_heading, translate, Pos2};
    pub use crate::rack::{generate_pins, generate_row, generate_rows, RackCfg, RackParams};
}
