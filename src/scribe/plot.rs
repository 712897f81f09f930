//! Function plotting.

use std::io;

use super::Scribe;
use crate::canvas::{Easel, Point};
use crate::display::DisplaySink;

impl Scribe {
    /// Draw `func` across the canvas: one frame per integer x in `0..width`.
    ///
    /// Points are drawn directly, without wall handling; values of `func` that
    /// fall outside the canvas produce frames with nothing drawn for that x.
    pub fn plot<S, F>(&mut self, easel: &mut Easel<S>, func: F) -> io::Result<()>
    where
        S: DisplaySink,
        F: Fn(f64) -> f64,
    {
        let width = easel.canvas().width();
        for x in 0..width {
            let x = x as f64;
            self.draw(easel, Point::new(x, func(x)))?;
        }
        Ok(())
    }
}
