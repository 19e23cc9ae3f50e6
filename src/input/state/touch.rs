use crate::draw::{StrokePoint, render_segment};
use crate::input::events::{TouchEvent, TouchPhase};
use log::debug;

use super::{DrawingState, StrokeCompositor, StrokeSummary};

impl StrokeCompositor {
    /// Dispatches a touch event to the matching handler.
    ///
    /// Returns the stroke summary when the event finished a gesture.
    pub fn handle_touch(&mut self, event: TouchEvent) -> Option<StrokeSummary> {
        match event.phase {
            TouchPhase::Began => {
                self.touch_began(event.position);
                None
            }
            TouchPhase::Moved => {
                self.touch_moved(event.position);
                None
            }
            TouchPhase::Ended => self.touch_ended(event.position),
        }
    }

    /// Processes a touch-down.
    ///
    /// # Behavior
    /// - Idle: starts a stroke with `point` as origin and last point
    /// - Stroking: restarts the gesture at `point`; whatever was drawn so far
    ///   stays in the temporary layer and is merged with the next gesture end
    pub fn touch_began(&mut self, point: StrokePoint) {
        if self.is_stroking() {
            debug!("Touch began during a stroke; restarting gesture");
        }
        self.state = DrawingState::Stroking {
            origin: point,
            last: point,
            swiped: false,
            segments: 0,
        };
        debug!("Stroke started at ({:.1}, {:.1})", point.x, point.y);
    }

    /// Processes a touch-move: strokes a segment from the last sample to `point`.
    ///
    /// Samples are connected as they arrive; no smoothing or resampling.
    pub fn touch_moved(&mut self, point: StrokePoint) {
        let DrawingState::Stroking { last, .. } = self.state else {
            debug!("Ignoring touch move while idle");
            return;
        };

        self.draw_segment(last, point);

        if let DrawingState::Stroking {
            last,
            swiped,
            segments,
            ..
        } = &mut self.state
        {
            *last = point;
            *swiped = true;
            *segments += 1;
        }
    }

    /// Processes a touch-up and merges the stroke into the committed canvas.
    ///
    /// A gesture without movement draws a zero-length segment first, so a tap
    /// leaves a dot. The lift position itself is not drawn; the stroke ends at
    /// the last sample.
    pub fn touch_ended(&mut self, _point: StrokePoint) -> Option<StrokeSummary> {
        let DrawingState::Stroking {
            last,
            swiped,
            segments,
            ..
        } = self.state
        else {
            debug!("Ignoring touch end while idle");
            return None;
        };

        let dot = !swiped;
        if dot {
            self.draw_segment(last, last);
        }
        let summary = StrokeSummary {
            segments: segments + usize::from(dot),
            dot,
        };

        self.commit();
        self.state = DrawingState::Idle;
        debug!(
            "Stroke finished: {} segment(s){}",
            summary.segments,
            if dot { " (dot)" } else { "" }
        );
        Some(summary)
    }

    /// Strokes one segment into the temporary layer with the active brush.
    fn draw_segment(&mut self, from: StrokePoint, to: StrokePoint) {
        self.cursor.follow(to);

        let color = self.brush.stroke_color();
        let width = self.brush.diameter;
        let Some(ctx) = self.temporary.context() else {
            return;
        };
        render_segment(&ctx, from, to, color, width);
        self.dirty.mark_segment(from, to, width);
    }
}
