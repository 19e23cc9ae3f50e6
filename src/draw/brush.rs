//! Brush parameters shared by the canvas and the settings panel.

use super::color::{BLACK, Color};

/// Default brush diameter in pixels.
pub const DEFAULT_DIAMETER: f64 = 5.0;

/// Smallest diameter a brush may have.
pub const MIN_DIAMETER: f64 = 1.0;

/// Largest diameter reachable from the settings panel slider.
pub const MAX_DIAMETER: f64 = 50.0;

/// Color, opacity and diameter used for new strokes.
///
/// The canvas owns one instance as its active brush; the settings panel edits
/// an independent draft copy and hands it back when dismissed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrushState {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    /// Applied once per stroke, when the stroke is merged into the canvas.
    pub opacity: f64,
    /// Line width in pixels; always > 0.
    pub diameter: f64,
}

impl Default for BrushState {
    fn default() -> Self {
        Self::from_color(BLACK, 1.0, DEFAULT_DIAMETER)
    }
}

impl BrushState {
    /// Builds a brush from an RGB color. The color's alpha is ignored.
    pub fn from_color(color: Color, opacity: f64, diameter: f64) -> Self {
        Self {
            red: color.r,
            green: color.g,
            blue: color.b,
            opacity: opacity.clamp(0.0, 1.0),
            diameter: diameter.max(MIN_DIAMETER),
        }
    }

    /// Opaque stroke color. Stroke pixels are always written at full alpha.
    pub fn stroke_color(&self) -> Color {
        Color::rgb(self.red, self.green, self.blue)
    }

    /// Stroke color carrying the brush opacity, as shown by the preview swatch.
    pub fn preview_color(&self) -> Color {
        self.stroke_color().with_alpha(self.opacity)
    }

    /// The RGB triple.
    pub fn rgb(&self) -> (f64, f64, f64) {
        (self.red, self.green, self.blue)
    }

    /// Replaces the RGB triple, keeping opacity and diameter.
    pub fn set_rgb(&mut self, color: Color) {
        self.red = color.r;
        self.green = color.g;
        self.blue = color.b;
    }
}
