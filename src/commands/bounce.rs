//! Bounce a single scribe around the canvas

use anyhow::Result;

use termscribe::cli::{CanvasArgs, OutputArgs};
use termscribe::program::{Instruction, ScribeSpec};
use termscribe::{Config, Program};

use super::{effective_config, make_sink, print_final, warn_if_oversized};

/// Build the one-scribe program: start mid-canvas, then walk `steps` forward.
pub fn program(degrees: f64, steps: usize, config: &Config) -> Program {
    let center = [
        (config.canvas.width / 2) as f64,
        (config.canvas.height / 2) as f64,
    ];
    Program {
        canvas: None,
        scribes: vec![ScribeSpec {
            name: Some("bouncer".to_string()),
            position: Some(center),
            degrees: Some(degrees),
            instructions: vec![Instruction::Forward { steps }],
            ..ScribeSpec::default()
        }],
    }
}

#[cfg(not(tarpaulin_include))]
pub fn handle(degrees: f64, steps: usize, canvas: &CanvasArgs, output: &OutputArgs) -> Result<()> {
    let config = effective_config(Config::load()?, Some(canvas), output);
    let program = program(degrees, steps, &config);

    warn_if_oversized(&program.build_canvas(&config.canvas)?, output);

    let (easel, _) = program.run(&config.canvas, &config.scribe, make_sink(&config, output))?;
    if output.headless {
        print_final(easel.canvas())?;
    }
    Ok(())
}
