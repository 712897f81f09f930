//! Plot a sine wave

use anyhow::Result;

use termscribe::cli::{CanvasArgs, OutputArgs};
use termscribe::program::{Instruction, PlotFunction, ScribeSpec};
use termscribe::{Config, Program};

use super::{effective_config, make_sink, print_final, warn_if_oversized};

/// Build the plotting program; `offset` defaults to the vertical middle.
pub fn program(amplitude: f64, period: f64, offset: Option<f64>, config: &Config) -> Program {
    let offset = offset.unwrap_or((config.canvas.height / 2) as f64);
    let bottom = config.canvas.height.saturating_sub(1) as f64;
    let function = PlotFunction::Sine {
        amplitude,
        period,
        offset,
    };
    Program {
        canvas: None,
        scribes: vec![ScribeSpec {
            name: Some("plotter".to_string()),
            // The first draw lands on f(0); start there so no stray trail is left
            position: Some([0.0, function.eval(0.0).clamp(0.0, bottom)]),
            trail: Some('@'),
            instructions: vec![Instruction::Plot { function }],
            ..ScribeSpec::default()
        }],
    }
}

#[cfg(not(tarpaulin_include))]
pub fn handle(
    amplitude: f64,
    period: f64,
    offset: Option<f64>,
    canvas: &CanvasArgs,
    output: &OutputArgs,
) -> Result<()> {
    let config = effective_config(Config::load()?, Some(canvas), output);
    let program = program(amplitude, period, offset, &config);

    warn_if_oversized(&program.build_canvas(&config.canvas)?, output);

    let (easel, _) = program.run(&config.canvas, &config.scribe, make_sink(&config, output))?;
    if output.headless {
        print_final(easel.canvas())?;
    }
    Ok(())
}
