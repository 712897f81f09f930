//! Full-screen terminal output.

use std::io::{self, Write};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    queue,
    terminal::{Clear, ClearType},
};

use super::DisplaySink;
use crate::canvas::Canvas;
use crate::style::MarkFormatter;

/// Clears the terminal and prints the canvas on every frame.
pub struct TerminalSink<W: Write> {
    out: W,
    formatter: Box<dyn MarkFormatter>,
    hide_cursor: bool,
    cursor_hidden: bool,
}

impl TerminalSink<io::Stdout> {
    /// A sink writing to stdout.
    pub fn stdout(formatter: Box<dyn MarkFormatter>) -> Self {
        Self::new(io::stdout(), formatter)
    }
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W, formatter: Box<dyn MarkFormatter>) -> Self {
        Self {
            out,
            formatter,
            hide_cursor: true,
            cursor_hidden: false,
        }
    }

    /// Whether to hide the cursor while frames are being drawn.
    pub fn with_hidden_cursor(mut self, hide: bool) -> Self {
        self.hide_cursor = hide;
        self
    }
}

impl<W: Write> DisplaySink for TerminalSink<W> {
    fn show(&mut self, canvas: &Canvas) -> io::Result<()> {
        if self.hide_cursor && !self.cursor_hidden {
            queue!(self.out, Hide)?;
            self.cursor_hidden = true;
        }

        // Build the frame as one string to minimize syscalls
        let rows = canvas.rows(self.formatter.as_ref());
        let mut frame = String::with_capacity(canvas.width() * canvas.height() * 2);
        for row in &rows {
            frame.push_str(row);
            frame.push('\n');
        }

        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        self.out.write_all(frame.as_bytes())?;
        self.out.flush()
    }
}

impl<W: Write> Drop for TerminalSink<W> {
    fn drop(&mut self) {
        if self.cursor_hidden {
            let _ = queue!(self.out, Show);
            let _ = self.out.flush();
        }
    }
}
