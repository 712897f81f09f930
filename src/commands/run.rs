//! Run a drawing program

use std::path::Path;

use anyhow::{Context, Result};

use termscribe::cli::OutputArgs;
use termscribe::{Config, Program};

use super::{
    effective_config, frame_delay_override, make_sink, print_final, warn_if_oversized,
};

/// Load, validate and animate a program file.
#[cfg(not(tarpaulin_include))]
pub fn handle(path: &Path, output: &OutputArgs) -> Result<()> {
    let config = effective_config(Config::load()?, None, output);
    let mut program = Program::load(path)?;
    if let Some(delay) = frame_delay_override(output) {
        program.force_frame_delay_ms(delay);
    }

    let canvas = program.build_canvas(&config.canvas)?;
    warn_if_oversized(&canvas, output);

    let sink = make_sink(&config, output);
    let (easel, summary) = program
        .run(&config.canvas, &config.scribe, sink)
        .with_context(|| format!("Failed to run {}", path.display()))?;
    tracing::debug!(scribes = summary.scribes, frames = summary.frames, "program finished");

    if output.headless {
        print_final(easel.canvas())?;
    }
    Ok(())
}
