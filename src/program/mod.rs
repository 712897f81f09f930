//! Drawing programs: a canvas plus scribes with instruction lists.
//!
//! Programs are TOML files:
//!
//! ```toml
//! [canvas]
//! width = 30
//! height = 20
//!
//! [[scribe]]
//! name = "box"
//! position = [5, 5]
//! color = "green"
//! instructions = [{ action = "square", size = 8 }]
//! ```
//!
//! Fields a scribe leaves out fall back to the user's [`ScribeConfig`], and a
//! missing `[canvas]` falls back to [`CanvasConfig`]. Scribes run one after
//! another; each finishes its whole list before the next one starts.

mod error;
mod instruction;

pub use error::ProgramError;
pub use instruction::{Instruction, PlotFunction};

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use unicode_width::UnicodeWidthChar;

use crate::canvas::{Canvas, Easel, Point};
use crate::config::{CanvasConfig, ScribeConfig};
use crate::display::DisplaySink;
use crate::scribe::{Scribe, ScribeOptions};
use crate::style::parse_color;

/// Largest canvas a program may ask for, in cells.
pub const MAX_CANVAS_CELLS: usize = 1 << 20;

/// A parsed (not yet validated) drawing program.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Program {
    pub canvas: Option<CanvasSpec>,
    #[serde(default, rename = "scribe")]
    pub scribes: Vec<ScribeSpec>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CanvasSpec {
    pub width: usize,
    pub height: usize,
}

/// One scribe's settings and instructions as written in the file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScribeSpec {
    pub name: Option<String>,
    pub position: Option<[f64; 2]>,
    /// Initial heading; takes precedence over `direction`
    pub degrees: Option<f64>,
    pub direction: Option<[f64; 2]>,
    pub trail: Option<char>,
    pub mark: Option<char>,
    pub color: Option<String>,
    pub frame_delay_ms: Option<u64>,
    #[serde(default)]
    pub instructions: Vec<Instruction>,
}

/// A scribe ready to run, with the instructions it will carry out.
#[derive(Debug, Clone)]
pub struct PreparedScribe {
    pub name: String,
    pub scribe: Scribe,
    pub instructions: Vec<Instruction>,
}

/// Summary of a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub scribes: usize,
    pub frames: usize,
}

impl Program {
    /// Read and parse a program file.
    pub fn load(path: &Path) -> Result<Self, ProgramError> {
        let content = fs::read_to_string(path).map_err(|source| ProgramError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, ProgramError> {
        Ok(toml::from_str(content)?)
    }

    /// Build the blank canvas this program draws on.
    pub fn build_canvas(&self, defaults: &CanvasConfig) -> Result<Canvas, ProgramError> {
        let (width, height) = match &self.canvas {
            Some(spec) => (spec.width, spec.height),
            None => (defaults.width, defaults.height),
        };
        if width == 0 || height == 0 {
            return Err(ProgramError::EmptyCanvas { width, height });
        }
        match width.checked_mul(height) {
            Some(cells) if cells <= MAX_CANVAS_CELLS => Ok(Canvas::new(width, height)),
            _ => Err(ProgramError::CanvasTooLarge {
                width,
                height,
                max: MAX_CANVAS_CELLS,
            }),
        }
    }

    /// Make every scribe pause `delay_ms` between frames, whatever its own
    /// `frame_delay_ms` says.
    pub fn force_frame_delay_ms(&mut self, delay_ms: u64) {
        for scribe in &mut self.scribes {
            scribe.frame_delay_ms = Some(delay_ms);
        }
    }

    /// Validate every scribe against `canvas` and construct it.
    pub fn prepare(
        &self,
        canvas: &Canvas,
        defaults: &ScribeConfig,
    ) -> Result<Vec<PreparedScribe>, ProgramError> {
        self.scribes
            .iter()
            .enumerate()
            .map(|(index, spec)| spec.prepare(index, canvas, defaults))
            .collect()
    }

    /// Validate the program and run it to completion on a fresh canvas.
    pub fn run<S: DisplaySink>(
        &self,
        canvas_defaults: &CanvasConfig,
        scribe_defaults: &ScribeConfig,
        sink: S,
    ) -> Result<(Easel<S>, RunSummary), ProgramError> {
        let canvas = self.build_canvas(canvas_defaults)?;
        let prepared = self.prepare(&canvas, scribe_defaults)?;
        let mut easel = Easel::new(canvas, sink);
        let summary = run_scribes(prepared, &mut easel)?;
        Ok((easel, summary))
    }
}

/// Run each scribe's full instruction list in order on a shared easel.
pub fn run_scribes<S: DisplaySink>(
    prepared: Vec<PreparedScribe>,
    easel: &mut Easel<S>,
) -> Result<RunSummary, ProgramError> {
    let mut summary = RunSummary {
        scribes: prepared.len(),
        frames: 0,
    };
    for PreparedScribe {
        name,
        mut scribe,
        instructions,
    } in prepared
    {
        tracing::debug!(scribe = %name, count = instructions.len(), "running scribe");
        for instruction in &instructions {
            tracing::debug!(scribe = %name, ?instruction, "applying instruction");
            instruction.apply(&mut scribe, easel)?;
        }
        summary.frames += scribe.steps_drawn();
    }
    Ok(summary)
}

impl ScribeSpec {
    fn prepare(
        &self,
        index: usize,
        canvas: &Canvas,
        defaults: &ScribeConfig,
    ) -> Result<PreparedScribe, ProgramError> {
        let name = self
            .name
            .clone()
            .unwrap_or_else(|| format!("scribe-{}", index + 1));

        let color_name = self.color.as_deref().unwrap_or(&defaults.color);
        let color = parse_color(color_name).ok_or_else(|| ProgramError::UnknownColor {
            scribe: name.clone(),
            color: color_name.to_string(),
        })?;

        let trail = self.trail.unwrap_or(defaults.trail);
        let mark = self.mark.unwrap_or(defaults.mark);
        check_glyph(&name, "trail", trail)?;
        check_glyph(&name, "mark", mark)?;

        let position = self.position.map(Point::from).unwrap_or(Point::ORIGIN);
        if canvas.hits_wall(position).is_some() {
            return Err(ProgramError::OutOfBounds {
                scribe: name,
                x: position.x,
                y: position.y,
                width: canvas.width(),
                height: canvas.height(),
            });
        }

        let mut options = ScribeOptions {
            trail,
            mark,
            color: Some(color),
            frame_delay: self
                .frame_delay_ms
                .map(Duration::from_millis)
                .unwrap_or_else(|| defaults.frame_delay()),
            position,
            ..ScribeOptions::default()
        };
        if let Some([x, y]) = self.direction {
            let length = x.hypot(y);
            if !length.is_finite() || length == 0.0 {
                return Err(ProgramError::InvalidDirection { scribe: name, x, y });
            }
            options.direction = Point::new(x / length, y / length);
        }

        let mut scribe = Scribe::new(options);
        if let Some(degrees) = self.degrees {
            if !degrees.is_finite() {
                return Err(ProgramError::InvalidDegrees {
                    scribe: name,
                    degrees,
                });
            }
            scribe.set_degrees(degrees);
        }

        Ok(PreparedScribe {
            name,
            scribe,
            instructions: self.instructions.clone(),
        })
    }
}

fn check_glyph(scribe: &str, field: &'static str, glyph: char) -> Result<(), ProgramError> {
    if glyph.width() == Some(1) {
        Ok(())
    } else {
        Err(ProgramError::WideGlyph {
            scribe: scribe.to_string(),
            field,
            glyph,
        })
    }
}
