//! Continuous positions on the canvas.

use std::ops::Add;

/// A position or a direction vector in canvas space.
///
/// x grows to the right and y grows downward, matching row order on screen.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The integer cell this point falls in (half rounds to even).
    ///
    /// Returns `None` for non-finite coordinates.
    pub fn cell(&self) -> Option<(i64, i64)> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return None;
        }
        Some((
            self.x.round_ties_even() as i64,
            self.y.round_ties_even() as i64,
        ))
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Point::new(x, y)
    }
}
