use crate::draw::{
    BrushState, Color, PaletteColor, brush::MIN_DIAMETER, flatten_onto,
    render::paint_surface_scaled,
};
use crate::input::tool::ToolMode;
use crate::util::color_to_name;
use cairo::ImageSurface;
use log::{debug, info};

use super::{LayerKind, StrokeCompositor};

impl StrokeCompositor {
    /// Discards the committed drawing, leaving a transparent canvas.
    ///
    /// Independent of the gesture state: a stroke in progress keeps its
    /// temporary layer and is merged onto the empty canvas when it ends.
    pub fn reset(&mut self) {
        self.committed.clear();
        self.dirty.mark_full();
        info!("Canvas reset");
    }

    /// Switches between drawing and erasing.
    ///
    /// Erasing swaps the brush RGB for the erase color; switching back restores
    /// the exact RGB that was active before. Opacity and diameter are untouched.
    pub fn toggle_eraser(&mut self) -> ToolMode {
        match self.mode {
            ToolMode::Drawing => {
                self.draw_color = self.brush.stroke_color();
                self.brush.set_rgb(self.erase_color);
            }
            ToolMode::Erasing => {
                self.brush.set_rgb(self.draw_color);
            }
        }
        self.mode = self.mode.toggled();
        self.cursor.icon = self.mode.icon();
        debug!("Tool mode is now {:?}", self.mode);
        self.mode
    }

    /// Brush to hand to the settings panel.
    ///
    /// Carries the drawing color even while erasing, so the panel never edits
    /// the erase color.
    pub fn settings_snapshot(&self) -> BrushState {
        let mut snapshot = self.brush;
        snapshot.set_rgb(self.draw_color);
        snapshot
    }

    /// Applies the brush returned by the settings panel.
    ///
    /// The new values take effect from the next merge on. While erasing, the
    /// incoming RGB is remembered as the drawing color and the eraser stays on.
    pub fn apply_brush(&mut self, brush: BrushState) {
        let brush = BrushState {
            opacity: brush.opacity.clamp(0.0, 1.0),
            diameter: brush.diameter.max(MIN_DIAMETER),
            ..brush
        };

        self.draw_color = brush.stroke_color();
        self.brush = brush;
        if self.mode == ToolMode::Erasing {
            self.brush.set_rgb(self.erase_color);
        }
        debug!(
            "Brush updated: {} ({:.3}, {:.3}, {:.3}) opacity={:.2} diameter={:.1}",
            color_to_name(&self.draw_color),
            brush.red,
            brush.green,
            brush.blue,
            brush.opacity,
            brush.diameter
        );
    }

    /// Picks a toolbar color, keeping opacity and diameter. Leaves eraser mode.
    pub fn select_palette_color(&mut self, color: PaletteColor) {
        if self.mode == ToolMode::Erasing {
            self.mode = ToolMode::Drawing;
            self.cursor.icon = self.mode.icon();
        }
        self.draw_color = color.color();
        self.brush.set_rgb(self.draw_color);
        debug!("Palette color selected: {:?}", color);
    }

    /// Places an external image in the temporary layer, scaled to the canvas.
    ///
    /// The image is not part of the drawing until it is merged, either by the
    /// next gesture end or by [`commit`](Self::commit).
    pub fn import_image(&mut self, image: &ImageSurface) {
        self.temporary.clear();
        let (width, height) = (self.width, self.height);
        if let Some(ctx) = self.temporary.context() {
            paint_surface_scaled(&ctx, image, width, height);
        }
        self.dirty.mark_full();
        info!(
            "Imported {}x{} image into the stroke layer",
            image.width(),
            image.height()
        );
    }

    /// Deep copy of a layer for export. `None` on a zero-sized canvas.
    pub fn snapshot(&self, kind: LayerKind) -> Option<ImageSurface> {
        self.layer(kind).snapshot()
    }

    /// The committed canvas composited over an opaque background.
    pub fn flattened(&self, background: Color) -> Option<ImageSurface> {
        flatten_onto(
            self.committed.surface(),
            background,
            self.width,
            self.height,
        )
    }
}
