//! Scribes: cursors that walk the canvas one cell at a time.
//!
//! A scribe owns its position, heading and drawing style. It does not own the
//! canvas; every command takes the shared [`Easel`] explicitly, so several
//! scribes can take turns on the same surface.
//!
//! The heading is stored only as a direction vector. [`Scribe::degrees`] is
//! derived from it on demand, which keeps wall reflection correct no matter
//! how the direction was last set.
//!
//! # Submodules
//! - `shapes`: cardinal steps, straight lines and squares
//! - `plot`: function plotting (bypasses wall handling)

mod plot;
mod shapes;

use std::io;
use std::thread;
use std::time::Duration;

use ratatui::style::Color;

use crate::canvas::{Easel, Point, Wall};
use crate::display::DisplaySink;
use crate::style::Mark;

/// Construction parameters for a [`Scribe`].
#[derive(Debug, Clone, PartialEq)]
pub struct ScribeOptions {
    /// Glyph left behind on cells the scribe has moved off
    pub trail: char,
    /// Glyph drawn at the scribe's current cell
    pub mark: char,
    /// Color of the head mark (trails are never colored)
    pub color: Option<Color>,
    /// Pause after every rendered frame
    pub frame_delay: Duration,
    pub position: Point,
    /// Direction of travel per step; expected to be a unit vector
    pub direction: Point,
}

impl Default for ScribeOptions {
    fn default() -> Self {
        Self {
            trail: '.',
            mark: '*',
            color: Some(Color::Red),
            frame_delay: Duration::from_millis(50),
            position: Point::ORIGIN,
            direction: Point::new(0.0, 1.0),
        }
    }
}

/// A cursor that moves across a canvas leaving a trail.
#[derive(Debug, Clone)]
pub struct Scribe {
    position: Point,
    direction: Point,
    trail: char,
    mark: char,
    color: Option<Color>,
    frame_delay: Duration,
    steps_drawn: usize,
}

impl Default for Scribe {
    fn default() -> Self {
        Self::new(ScribeOptions::default())
    }
}

impl Scribe {
    pub fn new(options: ScribeOptions) -> Self {
        Self {
            position: options.position,
            direction: options.direction,
            trail: options.trail,
            mark: options.mark,
            color: options.color,
            frame_delay: options.frame_delay,
            steps_drawn: 0,
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn direction(&self) -> Point {
        self.direction
    }

    pub fn frame_delay(&self) -> Duration {
        self.frame_delay
    }

    /// Number of frames this scribe has drawn so far.
    pub fn steps_drawn(&self) -> usize {
        self.steps_drawn
    }

    /// Move without drawing or validating.
    pub fn set_position(&mut self, pos: Point) {
        self.position = pos;
    }

    /// Point the scribe at `angle` degrees: 0 is up, increasing clockwise.
    pub fn set_degrees(&mut self, angle: f64) {
        let radians = angle.to_radians();
        self.direction = Point::new(radians.sin(), -radians.cos());
    }

    /// Current heading in degrees, in `[0, 360)`, derived from the direction.
    pub fn degrees(&self) -> f64 {
        let degrees = self.direction.x.atan2(-self.direction.y).to_degrees();
        let normalized = degrees.rem_euclid(360.0);
        // rem_euclid can round up to exactly 360 for tiny negative inputs
        if normalized >= 360.0 {
            0.0
        } else {
            normalized
        }
    }

    /// Advance `steps` times along the current direction.
    ///
    /// A step that would leave the canvas draws nothing; it reflects the
    /// heading off the wall it would have crossed instead.
    pub fn forward<S: DisplaySink>(
        &mut self,
        easel: &mut Easel<S>,
        steps: usize,
    ) -> io::Result<()> {
        for _ in 0..steps {
            let candidate = self.position + self.direction;
            match easel.canvas().hits_wall(candidate) {
                None => self.draw(easel, candidate)?,
                Some(wall) => self.bounce(wall),
            }
        }
        Ok(())
    }

    /// Leave a trail at the current position, move to `new_pos`, draw the
    /// head mark there, render a frame and pause.
    ///
    /// `new_pos` is not bounds-checked.
    pub fn draw<S: DisplaySink>(&mut self, easel: &mut Easel<S>, new_pos: Point) -> io::Result<()> {
        let canvas = easel.canvas_mut();
        canvas.set_pos(self.position, Mark::plain(self.trail));
        self.position = new_pos;
        canvas.set_pos(self.position, Mark::new(self.mark, self.color));

        easel.render()?;
        self.steps_drawn += 1;
        tracing::trace!(x = new_pos.x, y = new_pos.y, "scribe drew frame");

        if !self.frame_delay.is_zero() {
            thread::sleep(self.frame_delay);
        }
        Ok(())
    }

    fn bounce(&mut self, wall: Wall) {
        let degrees = self.degrees();
        let reflected = match wall {
            Wall::Horizontal => 180.0 - degrees,
            Wall::Vertical => 360.0 - degrees,
        };
        tracing::debug!(?wall, from = degrees, to = reflected, "scribe bounced");
        self.set_degrees(reflected);
    }
}
