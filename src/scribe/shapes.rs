//! Cardinal steps and the shapes built from them.
//!
//! The cardinal helpers set the direction vector directly. Because the
//! heading in degrees is always derived from that vector, a wall bounce right
//! after a cardinal step reflects the way the scribe is actually travelling.

use std::io;

use super::Scribe;
use crate::canvas::{Easel, Point};
use crate::display::DisplaySink;

const UP: Point = Point { x: 0.0, y: -1.0 };
const DOWN: Point = Point { x: 0.0, y: 1.0 };
const LEFT: Point = Point { x: -1.0, y: 0.0 };
const RIGHT: Point = Point { x: 1.0, y: 0.0 };

impl Scribe {
    /// Face up and take one step.
    pub fn up<S: DisplaySink>(&mut self, easel: &mut Easel<S>) -> io::Result<()> {
        self.step_towards(easel, UP)
    }

    /// Face down and take one step.
    pub fn down<S: DisplaySink>(&mut self, easel: &mut Easel<S>) -> io::Result<()> {
        self.step_towards(easel, DOWN)
    }

    /// Face left and take one step.
    pub fn left<S: DisplaySink>(&mut self, easel: &mut Easel<S>) -> io::Result<()> {
        self.step_towards(easel, LEFT)
    }

    /// Face right and take one step.
    pub fn right<S: DisplaySink>(&mut self, easel: &mut Easel<S>) -> io::Result<()> {
        self.step_towards(easel, RIGHT)
    }

    pub fn draw_line_up<S: DisplaySink>(
        &mut self,
        easel: &mut Easel<S>,
        length: usize,
    ) -> io::Result<()> {
        self.line(easel, UP, length)
    }

    pub fn draw_line_down<S: DisplaySink>(
        &mut self,
        easel: &mut Easel<S>,
        length: usize,
    ) -> io::Result<()> {
        self.line(easel, DOWN, length)
    }

    pub fn draw_line_left<S: DisplaySink>(
        &mut self,
        easel: &mut Easel<S>,
        length: usize,
    ) -> io::Result<()> {
        self.line(easel, LEFT, length)
    }

    pub fn draw_line_right<S: DisplaySink>(
        &mut self,
        easel: &mut Easel<S>,
        length: usize,
    ) -> io::Result<()> {
        self.line(easel, RIGHT, length)
    }

    /// Trace a square with side `size`: right, down, left, then up.
    pub fn draw_square<S: DisplaySink>(
        &mut self,
        easel: &mut Easel<S>,
        size: usize,
    ) -> io::Result<()> {
        self.draw_line_right(easel, size)?;
        self.draw_line_down(easel, size)?;
        self.draw_line_left(easel, size)?;
        self.draw_line_up(easel, size)
    }

    fn line<S: DisplaySink>(
        &mut self,
        easel: &mut Easel<S>,
        direction: Point,
        length: usize,
    ) -> io::Result<()> {
        for _ in 0..length {
            self.step_towards(easel, direction)?;
        }
        Ok(())
    }

    fn step_towards<S: DisplaySink>(
        &mut self,
        easel: &mut Easel<S>,
        direction: Point,
    ) -> io::Result<()> {
        self.direction = direction;
        self.forward(easel, 1)
    }
}
