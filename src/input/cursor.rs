//! Tool cursor marker that follows the finger.

use super::tool::ToolIcon;
use crate::draw::StrokePoint;

/// Edge length of the marker icon in pixels.
pub const CURSOR_SIZE: f64 = 38.0;

/// Offset of the marker center from the touch point, so the finger does not cover it.
pub const CURSOR_OFFSET: (f64, f64) = (15.0, -20.0);

/// Small overlay icon tracking the last drawn point. Purely cosmetic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolCursorMarker {
    /// Marker center in canvas coordinates
    pub center: StrokePoint,
    pub icon: ToolIcon,
}

impl ToolCursorMarker {
    /// Creates a marker parked at the bottom-right corner, out of the way until the first stroke.
    pub fn parked(width: i32, height: i32) -> Self {
        Self {
            center: StrokePoint::new(width as f64, height as f64),
            icon: ToolIcon::PaintBrush,
        }
    }

    /// Moves the marker next to a touch point.
    pub fn follow(&mut self, point: StrokePoint) {
        self.center = point.offset(CURSOR_OFFSET.0, CURSOR_OFFSET.1);
    }

    /// Top-left corner and size of the marker frame.
    pub fn frame(&self) -> (f64, f64, f64, f64) {
        let half = CURSOR_SIZE / 2.0;
        (
            self.center.x - half,
            self.center.y - half,
            CURSOR_SIZE,
            CURSOR_SIZE,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follow_applies_offset() {
        let mut marker = ToolCursorMarker::parked(320, 480);
        assert_eq!(marker.center, StrokePoint::new(320.0, 480.0));

        marker.follow(StrokePoint::new(100.0, 100.0));
        assert_eq!(marker.center, StrokePoint::new(115.0, 80.0));
        assert_eq!(marker.frame(), (96.0, 61.0, 38.0, 38.0));
    }
}
