//! Where rendered frames go.
//!
//! Rendering is abstracted behind [`DisplaySink`] so the grid logic can be
//! driven without a real terminal:
//! - `terminal`: clears the screen and prints each frame (crossterm)
//! - `memory`: records frames as plain text for tests and headless runs

mod memory;
mod terminal;

pub use memory::MemorySink;
pub use terminal::TerminalSink;

use std::io;

use crate::canvas::Canvas;

/// Receives one full frame of the canvas per call.
pub trait DisplaySink {
    fn show(&mut self, canvas: &Canvas) -> io::Result<()>;
}

impl<S: DisplaySink + ?Sized> DisplaySink for Box<S> {
    fn show(&mut self, canvas: &Canvas) -> io::Result<()> {
        (**self).show(canvas)
    }
}
