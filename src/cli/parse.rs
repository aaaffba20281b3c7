use clap::{Args, Parser, Subcommand};

use crate::core::constants::{DEFAULT_AXIS_DIVIDE_COUNT, LABEL_DIGITS};

/// Top-level CLI structure.
#[derive(Parser)]
#[command(
    name = "axis-range",
    about = "Nice axis ranges, tick labels and pixel positions"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Round explicit bounds into an axis and list its ticks
    Range(RangeArgs),
    /// Derive an axis from samples and map each one to pixels
    Scan(ScanArgs),
    /// Print example invocations
    Examples,
}

/// Axis geometry shared by every subcommand.
#[derive(Args, Debug)]
pub struct GeometryArgs {
    /// Axis length in pixels (terminal width minus labels if omitted)
    #[arg(long)]
    pub size: Option<usize>,

    /// Number of intervals; yields one more tick than this
    #[arg(long, default_value_t = DEFAULT_AXIS_DIVIDE_COUNT)]
    pub divide_count: usize,

    /// Center category values inside their band
    #[arg(long)]
    pub boundary: bool,

    /// Emit timing diagnostics
    #[arg(long)]
    pub debug: bool,
}

/// `axis-range range …`
#[derive(Parser, Debug)]
pub struct RangeArgs {
    /// Raw lower bound of the data
    #[arg(long, allow_negative_numbers = true)]
    pub min: f64,

    /// Raw upper bound of the data
    #[arg(long, allow_negative_numbers = true)]
    pub max: f64,

    /// Fraction digits kept in tick labels
    #[arg(long, default_value_t = LABEL_DIGITS)]
    pub digits: usize,

    /// Abbreviate labels with k / M suffixes
    #[arg(long)]
    pub compact: bool,

    #[command(flatten)]
    pub geometry: GeometryArgs,
}

/// `axis-range scan …`
#[derive(Parser, Debug)]
pub struct ScanArgs {
    /// Sample file, one value per line (use `-` for stdin)
    #[arg(value_name = "FILE", default_value = "-")]
    pub file: String,

    #[command(flatten)]
    pub geometry: GeometryArgs,
}
