use anyhow::Result;
use pinrack::format::format_pins;
use pinrack::rack::{generate_pins, generate_rows};
use pinrack::{Pos2, RackCfg};
use serde::Serialize;

/// Output encodings offered by the CLI.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One `(x,y)` line per pin
    #[default]
    Text,
    /// Pretty JSON with the parameters and pins grouped by row
    Json,
}

#[derive(Debug, Serialize)]
struct Params {
    pos: [f64; 2],
    width: f64,
    row_count: usize,
    /// Heading as supplied, before reduction.
    heading: f64,
    heading_normalized: f64,
}

#[derive(Debug, Serialize)]
struct Pin {
    x: f64,
    y: f64,
}

impl From<&Pos2> for Pin {
    fn from(p: &Pos2) -> Self {
        Self { x: p.x, y: p.y }
    }
}

#[derive(Debug, Serialize)]
struct RackReport {
    version: &'static str,
    params: Params,
    pin_count: usize,
    rows: Vec<Vec<Pin>>,
}

impl RackReport {
    fn new(cfg: &RackCfg, heading: f64) -> Self {
        let back = cfg.back_center();
        let rows = generate_rows(cfg)
            .iter()
            .map(|row| row.iter().map(Pin::from).collect())
            .collect();
        Self {
            version: pinrack::VERSION,
            params: Params {
                pos: [back.x, back.y],
                width: cfg.width(),
                row_count: cfg.row_count(),
                heading,
                heading_normalized: cfg.heading(),
            },
            pin_count: cfg.pin_count(),
            rows,
        }
    }
}

/// Render the rack described by `cfg` in the requested format.
///
/// `heading` is the heading as the caller supplied it; JSON reports it next
/// to the reduced value the rack was built with.
pub fn render(cfg: &RackCfg, heading: f64, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format_pins(&generate_pins(cfg))),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&RackReport::new(cfg, heading))?),
    }
}
