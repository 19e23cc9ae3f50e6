//! Touch sample positions.

/// A single touch sample in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StrokePoint {
    pub x: f64,
    pub y: f64,
}

impl StrokePoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns this point shifted by the given offset.
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl From<(f64, f64)> for StrokePoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}
