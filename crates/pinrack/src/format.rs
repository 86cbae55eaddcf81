//! Text rendering of pin sequences.
//!
//! One pin per line as `(x,y)` with two decimals, lines joined by `\n` and no
//! trailing newline. Coordinates that round to zero from below print as
//! `0.00`, never `-0.00`. Exact binary ties round half to even, so `0.125`
//! prints `0.12`.

use std::fmt;

use crate::geom::Pos2;

fn fixed2(v: f64) -> String {
    let s = format!("{v:.2}");
    if s == "-0.00" {
        "0.00".to_string()
    } else {
        s
    }
}

/// `(x,y)` with both coordinates at two decimals.
pub fn format_pin(p: &Pos2) -> String {
    format!("({},{})", fixed2(p.x), fixed2(p.y))
}

pub fn format_pins(pins: &[Pos2]) -> String {
    PinList(pins).to_string()
}

/// Display adapter producing the same text as `format_pins` without an
/// intermediate allocation for the whole block.
#[derive(Clone, Copy, Debug)]
pub struct PinList<'a>(pub &'a [Pos2]);

impl fmt::Display for PinList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, p) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(&format_pin(p))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rack::{generate_pins, RackCfg};
    use nalgebra::vector;

    #[test]
    fn two_decimals() {
        assert_eq!(format_pin(&vector![1.0, -2.5]), "(1.00,-2.50)");
        assert_eq!(format_pin(&vector![1.23456, 4.32290]), "(1.23,4.32)");
        assert_eq!(format_pin(&vector![-0.004, 1e-17]), "(0.00,0.00)");
        assert_eq!(format_pin(&vector![-0.006, 100.0]), "(-0.01,100.00)");
    }

    #[test]
    fn exact_ties_round_half_to_even() {
        assert_eq!(format_pin(&vector![0.125, 0.375]), "(0.12,0.38)");
        assert_eq!(format_pin(&vector![-0.125, 2.5]), "(-0.12,2.50)");
    }

    #[test]
    fn joined_without_trailing_newline() {
        let pins = [vector![0.0, 0.0], vector![1.0, 2.0]];
        assert_eq!(format_pins(&pins), "(0.00,0.00)\n(1.00,2.00)");
        assert_eq!(format_pins(&[]), "");
    }

    #[test]
    fn single_pin_rack() {
        let cfg = RackCfg::new(vector![0.0, 0.0], 10.0, 1, 0.0).unwrap();
        assert_eq!(format_pins(&generate_pins(&cfg)), "(0.00,0.00)");
    }

    #[test]
    fn two_row_rack() {
        let cfg = RackCfg::new(vector![0.0, 0.0], 10.0, 2, 0.0).unwrap();
        assert_eq!(
            format_pins(&generate_pins(&cfg)),
            "(-2.50,0.00)\n(2.50,0.00)\n(0.00,4.32)"
        );
    }

    #[test]
    fn four_row_rack_offset_center() {
        let cfg = RackCfg::new(vector![10.0, 20.0], 40.0, 4, 0.0).unwrap();
        let expected = [
            "(-5.00,20.00)",
            "(5.00,20.00)",
            "(15.00,20.00)",
            "(25.00,20.00)",
            "(0.00,28.65)",
            "(10.00,28.65)",
            "(20.00,28.65)",
            "(5.00,37.29)",
            "(15.00,37.29)",
            "(10.00,45.94)",
        ]
        .join("\n");
        assert_eq!(format_pins(&generate_pins(&cfg)), expected);
    }

    #[test]
    fn pipeline_is_deterministic() {
        let cfg = RackCfg::new(vector![-3.0, 7.5], 23.0, 6, 211.0).unwrap();
        let a = format_pins(&generate_pins(&cfg));
        let b = format_pins(&generate_pins(&cfg));
        assert_eq!(a, b);
        assert_eq!(a, PinList(&generate_pins(&cfg)).to_string());
    }
}
