//! termscribe - turtle graphics on a terminal character grid.
//!
//! A [`Canvas`] is a fixed grid of marks. [`Scribe`]s walk across it one
//! cell per step, leaving a trail, bouncing off the edges and redrawing the
//! whole grid after every step to animate.
//!
//! ```
//! use std::time::Duration;
//! use termscribe::{Canvas, Easel, MemorySink, Scribe, ScribeOptions};
//!
//! let mut easel = Easel::new(Canvas::new(10, 10), MemorySink::new());
//! let mut scribe = Scribe::new(ScribeOptions {
//!     frame_delay: Duration::ZERO,
//!     ..ScribeOptions::default()
//! });
//! scribe.draw_square(&mut easel, 4).unwrap();
//! assert_eq!(easel.sink().frame_count(), 16);
//! ```

pub mod canvas;
pub mod cli;
pub mod config;
pub mod display;
pub mod program;
pub mod scribe;
pub mod style;

pub use canvas::{Canvas, Easel, Point, Wall};
pub use config::Config;
pub use display::{DisplaySink, MemorySink, TerminalSink};
pub use program::{Program, ProgramError};
pub use scribe::{Scribe, ScribeOptions};
pub use style::{AnsiFormatter, Mark, MarkFormatter, PlainFormatter};
