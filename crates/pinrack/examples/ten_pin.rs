//! Print a regulation ten-pin rack.
//!
//! Regulation pins sit 12 inches apart center to center. Column spacing is
//! `width / rows`, so four rows over a width of 48 gives that spacing.
//! Run with `cargo run -p pinrack --example ten_pin`.

use nalgebra::vector;
use pinrack::prelude::*;

fn main() -> Result<(), RackError> {
    let cfg = RackCfg::new(vector![0.0, 0.0], 48.0, 4, 0.0)?;
    let rows = generate_rows(&cfg);
    for (i, row) in rows.iter().enumerate() {
        println!("row {i}: {}", PinList(row).to_string().replace('\n', " "));
    }
    println!("total pins: {}", cfg.pin_count());
    Ok(())
}
