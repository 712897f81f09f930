//! Individual drawing instructions.

use std::io;

use serde::Deserialize;

use crate::canvas::{Easel, Point};
use crate::display::DisplaySink;
use crate::scribe::Scribe;

/// One step of a scribe's instruction list.
///
/// Written in TOML as an inline table tagged by `action`, e.g.
/// `{ action = "forward", steps = 5 }`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case", deny_unknown_fields)]
pub enum Instruction {
    Forward {
        #[serde(default = "one")]
        steps: usize,
    },
    Up {
        #[serde(default = "one")]
        steps: usize,
    },
    Down {
        #[serde(default = "one")]
        steps: usize,
    },
    Left {
        #[serde(default = "one")]
        steps: usize,
    },
    Right {
        #[serde(default = "one")]
        steps: usize,
    },
    Square {
        size: usize,
    },
    Degrees {
        angle: f64,
    },
    Position {
        at: [f64; 2],
    },
    Plot {
        function: PlotFunction,
    },
}

fn one() -> usize {
    1
}

impl Instruction {
    /// Carry out this instruction with `scribe` on `easel`.
    pub fn apply<S: DisplaySink>(
        &self,
        scribe: &mut Scribe,
        easel: &mut Easel<S>,
    ) -> io::Result<()> {
        match self {
            Self::Forward { steps } => scribe.forward(easel, *steps),
            Self::Up { steps } => scribe.draw_line_up(easel, *steps),
            Self::Down { steps } => scribe.draw_line_down(easel, *steps),
            Self::Left { steps } => scribe.draw_line_left(easel, *steps),
            Self::Right { steps } => scribe.draw_line_right(easel, *steps),
            Self::Square { size } => scribe.draw_square(easel, *size),
            Self::Degrees { angle } => {
                scribe.set_degrees(*angle);
                Ok(())
            }
            Self::Position { at } => {
                scribe.set_position(Point::from(*at));
                Ok(())
            }
            Self::Plot { function } => scribe.plot(easel, |x| function.eval(x)),
        }
    }
}

/// Functions a scribe can plot.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
pub enum PlotFunction {
    /// `amplitude * sin(x / period) + offset`
    Sine {
        amplitude: f64,
        period: f64,
        offset: f64,
    },
    /// `slope * x + intercept`
    Linear { slope: f64, intercept: f64 },
}

impl PlotFunction {
    pub fn eval(&self, x: f64) -> f64 {
        match *self {
            Self::Sine {
                amplitude,
                period,
                offset,
            } => amplitude * (x / period).sin() + offset,
            Self::Linear { slope, intercept } => slope * x + intercept,
        }
    }
}
