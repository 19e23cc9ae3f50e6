//! Stroke compositing state machine and canvas layers.

use crate::draw::{
    BrushState, Color, DirtyTracker, RasterLayer, StrokePoint, WHITE, brush::MIN_DIAMETER,
    composite_layers,
};
use crate::input::{cursor::ToolCursorMarker, tool::ToolMode};
use crate::util::Rect;
use log::debug;

/// Current gesture state.
///
/// Only one gesture is tracked at a time (single-touch model).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawingState {
    /// No finger on the canvas
    Idle,
    /// A finger is down and the stroke is being drawn into the temporary layer
    Stroking {
        /// Where the gesture started
        origin: StrokePoint,
        /// Most recent sample; the next segment starts here
        last: StrokePoint,
        /// Whether any move event arrived since touch-down
        swiped: bool,
        /// Segments drawn so far in this gesture
        segments: usize,
    },
}

/// Selects one of the two canvas layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    /// The in-progress stroke (or a freshly imported image)
    Temporary,
    /// The persistent drawing
    Committed,
}

/// Outcome of a finished gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrokeSummary {
    /// Segments drawn into the temporary layer, including a synthesized dot
    pub segments: usize,
    /// True when the gesture was a tap and a zero-length segment was drawn
    pub dot: bool,
}

/// Owns the active brush, the temporary stroke layer and the committed canvas.
///
/// Touch samples are stroked into the temporary layer at full alpha. When the
/// gesture ends the temporary layer is merged into the committed canvas at the
/// brush opacity, in one step, and then cleared. Nothing else writes to the
/// committed canvas apart from [`reset`](Self::reset).
#[derive(Debug)]
pub struct StrokeCompositor {
    /// Active brush. While erasing its RGB holds the erase color.
    pub(super) brush: BrushState,
    /// Brush RGB to restore when the eraser is toggled off
    pub(super) draw_color: Color,
    /// Color painted by the eraser (the canvas background)
    pub(super) erase_color: Color,
    pub(super) mode: ToolMode,
    pub(super) state: DrawingState,
    pub(super) temporary: RasterLayer,
    pub(super) committed: RasterLayer,
    pub(super) cursor: ToolCursorMarker,
    pub(super) dirty: DirtyTracker,
    pub(super) width: i32,
    pub(super) height: i32,
}

impl StrokeCompositor {
    /// Creates a canvas of the given size with the default brush (black, opaque, 5px).
    pub fn new(width: i32, height: i32) -> Self {
        Self::with_brush(width, height, BrushState::default(), WHITE)
    }

    /// Creates a canvas with an explicit starting brush and erase color.
    ///
    /// # Arguments
    /// * `width` - Canvas width in pixels
    /// * `height` - Canvas height in pixels
    /// * `brush` - Initial brush
    /// * `erase_color` - Color painted by the eraser; normally the paper color
    pub fn with_brush(width: i32, height: i32, brush: BrushState, erase_color: Color) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            brush: BrushState {
                diameter: brush.diameter.max(MIN_DIAMETER),
                ..brush
            },
            draw_color: brush.stroke_color(),
            erase_color: erase_color.opaque(),
            mode: ToolMode::Drawing,
            state: DrawingState::Idle,
            temporary: RasterLayer::new(width, height),
            committed: RasterLayer::new(width, height),
            cursor: ToolCursorMarker::parked(width, height),
            dirty: DirtyTracker::new(),
            width,
            height,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// The brush strokes are currently drawn with (erase color included).
    pub fn brush(&self) -> BrushState {
        self.brush
    }

    pub fn state(&self) -> DrawingState {
        self.state
    }

    /// True while a finger is down.
    pub fn is_stroking(&self) -> bool {
        matches!(self.state, DrawingState::Stroking { .. })
    }

    pub fn tool_mode(&self) -> ToolMode {
        self.mode
    }

    pub fn cursor(&self) -> &ToolCursorMarker {
        &self.cursor
    }

    /// Read access to one of the canvas layers.
    pub fn layer(&self, kind: LayerKind) -> &RasterLayer {
        match kind {
            LayerKind::Temporary => &self.temporary,
            LayerKind::Committed => &self.committed,
        }
    }

    /// Drains the regions the host should repaint since the last call.
    pub fn take_dirty_regions(&mut self) -> Vec<Rect> {
        self.dirty.take_regions(self.width, self.height)
    }

    /// Merges the temporary layer into the committed canvas and clears it.
    ///
    /// The committed canvas is copied at full opacity, then the temporary layer
    /// is painted over it at the brush opacity current at merge time. A blank
    /// temporary layer leaves the committed canvas untouched.
    pub fn commit(&mut self) {
        if self.temporary.is_blank() {
            debug!("Nothing to merge; committed canvas unchanged");
            return;
        }

        let opacity = self.brush.opacity;
        match composite_layers(
            self.committed.surface(),
            self.temporary.surface(),
            opacity,
            self.width,
            self.height,
        ) {
            Some(merged) => {
                self.committed.replace(merged);
                debug!("Merged stroke layer at opacity {:.2}", opacity);
            }
            None => debug!("Skipping merge on zero-sized canvas"),
        }

        self.temporary.clear();
        self.dirty.mark_full();
    }
}
