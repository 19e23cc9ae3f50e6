//! Generic touch event types delivered by the host.

use crate::draw::StrokePoint;

/// Phase of a single-touch gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    /// Finger down
    Began,
    /// Finger dragged
    Moved,
    /// Finger lifted
    Ended,
}

/// One touch sample. The host delivers these in order for the single active gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    pub position: StrokePoint,
}

impl TouchEvent {
    pub fn began(x: f64, y: f64) -> Self {
        Self::new(TouchPhase::Began, x, y)
    }

    pub fn moved(x: f64, y: f64) -> Self {
        Self::new(TouchPhase::Moved, x, y)
    }

    pub fn ended(x: f64, y: f64) -> Self {
        Self::new(TouchPhase::Ended, x, y)
    }

    fn new(phase: TouchPhase, x: f64, y: f64) -> Self {
        Self {
            phase,
            position: StrokePoint::new(x, y),
        }
    }
}
