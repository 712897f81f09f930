//! Command-line interface definitions.
//!
//! Lives in the library so `xtask` can generate man pages from it.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

#[cfg(not(feature = "release"))]
const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "-",
    env!("VERGEN_GIT_SHA"),
    " (",
    env!("TERMSCRIBE_BUILD_DATE"),
    ")"
);

#[cfg(feature = "release")]
const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("TERMSCRIBE_BUILD_DATE"),
    ")"
);

#[derive(Debug, Parser)]
#[command(name = "termscribe")]
#[command(version = VERSION)]
#[command(about = "Animated turtle drawing on a terminal character grid")]
#[command(
    long_about = "Scribes walk across a fixed-size character canvas one cell at a time, \
leaving a trail and bouncing off the edges. Every step redraws the whole canvas."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run a drawing program (TOML)
    #[command(long_about = "Run a drawing program.

A program declares an optional [canvas] and any number of [[scribe]] tables,
each with an instruction list. Scribes run one after another.

Example:
  [canvas]
  width = 30
  height = 20

  [[scribe]]
  position = [5, 5]
  color = \"green\"
  instructions = [{ action = \"square\", size = 8 }]")]
    Run {
        /// Path to the program file
        program: PathBuf,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Bounce a single scribe around the canvas
    Bounce {
        /// Starting heading (0 = up, clockwise)
        #[arg(long, default_value_t = 130.0, allow_negative_numbers = true)]
        degrees: f64,
        /// Number of forward steps
        #[arg(long, default_value_t = 200)]
        steps: usize,
        #[command(flatten)]
        canvas: CanvasArgs,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Plot a sine wave across the canvas
    Plot {
        #[arg(long, default_value_t = 5.0, allow_negative_numbers = true)]
        amplitude: f64,
        /// Horizontal stretch: y = amplitude * sin(x / period) + offset
        #[arg(long, default_value_t = 4.0, value_parser = parse_period)]
        period: f64,
        /// Vertical center (defaults to the middle of the canvas)
        #[arg(long, allow_negative_numbers = true)]
        offset: Option<f64>,
        #[command(flatten)]
        canvas: CanvasArgs,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show or create the configuration file
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Print the configuration file path
    Path,
    /// Write a default configuration file if none exists
    Init,
}

/// Canvas size overrides.
#[derive(Debug, Clone, Args)]
pub struct CanvasArgs {
    /// Canvas width in cells (defaults to config)
    #[arg(long)]
    pub width: Option<usize>,
    /// Canvas height in cells (defaults to config)
    #[arg(long)]
    pub height: Option<usize>,
}

/// How frames are shown.
#[derive(Debug, Clone, Args)]
pub struct OutputArgs {
    /// Pause between frames in milliseconds (overrides config)
    #[arg(long)]
    pub delay_ms: Option<u64>,
    /// Disable colored marks
    #[arg(long)]
    pub no_color: bool,
    /// Skip the animation and print only the final canvas
    #[arg(long)]
    pub headless: bool,
}

/// A plot period must be finite and non-zero, or every point is NaN.
fn parse_period(value: &str) -> Result<f64, String> {
    let period: f64 = value
        .parse()
        .map_err(|e| format!("'{}' is not a number: {}", value, e))?;
    if period == 0.0 || !period.is_finite() {
        return Err(format!("period must be a finite, non-zero number (got {})", value));
    }
    Ok(period)
}
