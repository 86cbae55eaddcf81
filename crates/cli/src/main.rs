//! `pinrack`: print pin coordinates for a triangular bowling-pin rack.
//!
//! Flags are collected into `RackParams` and validated once; everything past
//! that point is the pure library pipeline. Logs go to stderr so stdout only
//! carries the rack.

use anyhow::{Context, Result};
use clap::Parser;
use pinrack::{Pos2, RackParams};
use tracing_subscriber::fmt::SubscriberBuilder;

mod report;

use report::{render, OutputFormat};

#[derive(Parser, Debug)]
#[command(name = "pinrack", version)]
#[command(about = "Compute pin coordinates for a triangular bowling-pin rack")]
struct Cmd {
    /// Back-center position of the rack
    #[arg(long, num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true)]
    pos: Option<Vec<f64>>,

    /// Width spanned by the widest row
    #[arg(long, allow_negative_numbers = true)]
    width: Option<f64>,

    /// Number of rows; the back row holds this many pins
    #[arg(long, allow_negative_numbers = true)]
    row_count: Option<i64>,

    /// Compass heading of the rack in degrees (0 = +y) [default: 0]
    #[arg(long, allow_negative_numbers = true)]
    heading: Option<f64>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

impl Cmd {
    fn params(&self) -> RackParams {
        let back_center = self.pos.as_deref().and_then(|v| match v {
            [x, y] => Some(Pos2::new(*x, *y)),
            _ => None,
        });
        RackParams {
            back_center,
            width: self.width,
            row_count: self.row_count,
            heading: self.heading,
        }
    }
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    println!("{}", run(&cmd)?);
    Ok(())
}

fn run(cmd: &Cmd) -> Result<String> {
    let params = cmd.params();
    tracing::debug!(?params, "params");
    let cfg = params
        .validate()
        .inspect_err(|err| tracing::debug!(field = err.field(), "validation failed"))
        .context("invalid rack parameters")?;
    tracing::info!(
        rows = cfg.row_count(),
        width = cfg.width(),
        heading = cfg.heading(),
        pins = cfg.pin_count(),
        format = ?cmd.format,
        "rack"
    );
    render(&cfg, params.heading.unwrap_or(cfg.heading()), cmd.format)
}
