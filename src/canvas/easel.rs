//! A canvas paired with the sink its frames are shown on.

use std::io;

use super::Canvas;
use crate::display::DisplaySink;

/// Owns the shared canvas and its display sink.
///
/// Scribes borrow the easel mutably for each command; any number of scribes
/// may draw on the same easel one after another.
#[derive(Debug)]
pub struct Easel<S> {
    canvas: Canvas,
    sink: S,
}

impl<S: DisplaySink> Easel<S> {
    pub fn new(canvas: Canvas, sink: S) -> Self {
        Self { canvas, sink }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Show the current canvas as one frame.
    pub fn render(&mut self) -> io::Result<()> {
        self.canvas.render(&mut self.sink)
    }

    pub fn into_parts(self) -> (Canvas, S) {
        (self.canvas, self.sink)
    }
}
