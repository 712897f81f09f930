//! The drawing surface.
//!
//! A [`Canvas`] is a fixed-size grid of [`Mark`]s. Its dimensions never change
//! after construction. Bounds checking is done up front with
//! [`Canvas::hits_wall`]; [`Canvas::set_pos`] trusts its caller and drops (and
//! logs) any write that lands outside the grid.

mod easel;
mod point;

pub use easel::Easel;
pub use point::Point;

use crate::display::DisplaySink;
use crate::style::{Mark, MarkFormatter};

/// Which boundary a candidate point crosses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wall {
    /// The y-coordinate is outside `[0, height)` (top or bottom edge).
    Horizontal,
    /// The x-coordinate is outside `[0, width)` (left or right edge).
    Vertical,
}

/// Fixed-size 2D grid of marks.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: usize,
    height: usize,
    /// Row-major: cell (x, y) lives at `y * width + x`.
    cells: Vec<Mark>,
}

impl Canvas {
    /// Create a blank canvas.
    ///
    /// Panics if `width * height` overflows; programs are size-checked
    /// before they get here.
    pub fn new(width: usize, height: usize) -> Self {
        let len = width
            .checked_mul(height)
            .unwrap_or_else(|| panic!("canvas {}x{} has too many cells", width, height));
        Self {
            width,
            height,
            cells: vec![Mark::BLANK; len],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the integer cell (x, y) is on the grid.
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as u64) < self.width as u64 && (y as u64) < self.height as u64
    }

    /// Classify a candidate point against the canvas bounds.
    ///
    /// Both coordinates are rounded first. The x-axis is checked before the
    /// y-axis, so a point outside a corner reports [`Wall::Vertical`].
    /// Non-finite coordinates always count as a violation.
    pub fn hits_wall(&self, point: Point) -> Option<Wall> {
        let x = point.x.round_ties_even();
        let y = point.y.round_ties_even();
        if !(x >= 0.0 && x < self.width as f64) {
            Some(Wall::Vertical)
        } else if !(y >= 0.0 && y < self.height as f64) {
            Some(Wall::Horizontal)
        } else {
            None
        }
    }

    /// Write `mark` into the cell nearest to `pos`.
    ///
    /// No bounds check is expected of the caller here beyond having consulted
    /// [`Canvas::hits_wall`]; an out-of-range write is dropped.
    pub fn set_pos(&mut self, pos: Point, mark: Mark) {
        match self.index_of(pos) {
            Some(index) => self.cells[index] = mark,
            None => {
                tracing::warn!(
                    x = pos.x,
                    y = pos.y,
                    width = self.width,
                    height = self.height,
                    "dropping write outside the canvas"
                );
            }
        }
    }

    /// The mark at integer cell (x, y).
    pub fn mark_at(&self, x: usize, y: usize) -> Option<&Mark> {
        if x < self.width && y < self.height {
            self.cells.get(y * self.width + x)
        } else {
            None
        }
    }

    /// Reset every cell to blank.
    pub fn clear(&mut self) {
        self.cells.fill(Mark::BLANK);
    }

    /// The grid as printable lines, top row first.
    ///
    /// Each line is the decorated marks of that row in increasing x, joined by
    /// a single space.
    pub fn rows(&self, formatter: &dyn MarkFormatter) -> Vec<String> {
        if self.width == 0 {
            return vec![String::new(); self.height];
        }
        self.cells
            .chunks(self.width)
            .map(|row| {
                row.iter()
                    .map(|mark| formatter.decorate(mark))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect()
    }

    /// Present the whole grid on `sink`.
    pub fn render<S: DisplaySink + ?Sized>(&self, sink: &mut S) -> std::io::Result<()> {
        sink.show(self)
    }

    fn index_of(&self, pos: Point) -> Option<usize> {
        let (x, y) = pos.cell()?;
        if self.contains(x, y) {
            Some(y as usize * self.width + x as usize)
        } else {
            None
        }
    }
}
