//! Touch handling and the stroke compositing state machine.
//!
//! This module turns host touch events into strokes. It owns the active brush,
//! the temporary stroke layer and the committed canvas, and runs the
//! idle/stroking state machine that merges each finished gesture exactly once.

pub mod cursor;
pub mod events;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use cursor::ToolCursorMarker;
pub use events::{TouchEvent, TouchPhase};
pub use state::{DrawingState, LayerKind, StrokeCompositor, StrokeSummary};
pub use tool::{ToolIcon, ToolMode};
