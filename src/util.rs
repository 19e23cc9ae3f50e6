//! Utility functions for colors, slider labels and geometry.
//!
//! This module provides:
//! - Name-to-color mapping used by the config file and touch scripts
//! - Slider value to label conversion for the settings panel
//! - Axis-aligned rectangles for dirty region tracking

use crate::draw::{Color, PaletteColor, StrokePoint};

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "magenta" (or "pink"), "yellow", "cyan", "white", "black"
pub fn name_to_color(name: &str) -> Option<Color> {
    name.parse::<PaletteColor>().ok().map(PaletteColor::color)
}

/// Maps a Color value to its human-readable name.
///
/// Uses approximate matching (threshold-based) to identify colors, returning
/// "Custom" for anything off the palette.
pub fn color_to_name(color: &Color) -> &'static str {
    let high = |v: f64| v > 0.9;
    let low = |v: f64| v < 0.1;
    match (color.r, color.g, color.b) {
        (r, g, b) if high(r) && low(g) && low(b) => "Red",
        (r, g, b) if low(r) && high(g) && low(b) => "Green",
        (r, g, b) if low(r) && low(g) && high(b) => "Blue",
        (r, g, b) if high(r) && low(g) && high(b) => "Magenta",
        (r, g, b) if high(r) && high(g) && low(b) => "Yellow",
        (r, g, b) if low(r) && high(g) && high(b) => "Cyan",
        (r, g, b) if high(r) && high(g) && high(b) => "White",
        (r, g, b) if low(r) && low(g) && low(b) => "Black",
        _ => "Custom",
    }
}

// ============================================================================
// Slider Labels
// ============================================================================

/// Converts a normalized slider value into the integer shown next to it.
///
/// `scale` is the label range: 255 for color channels, 100 for opacity and 50
/// for brush size.
pub fn slider_label(value: f64, scale: f64) -> i64 {
    (value * scale).round() as i64
}

// ============================================================================
// Geometry Utilities
// ============================================================================

/// Axis-aligned rectangle helper used for dirty region tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Creates a new rectangle. Width/height must be positive.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Option<Self> {
        if width <= 0 || height <= 0 {
            None
        } else {
            Some(Self {
                x,
                y,
                width,
                height,
            })
        }
    }

    /// Builds a rectangle from min/max bounds (inclusive min, exclusive max).
    ///
    /// Returns `None` when the extent does not fit in an `i32`.
    pub fn from_min_max(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Option<Self> {
        Self::new(min_x, min_y, max_x.checked_sub(min_x)?, max_y.checked_sub(min_y)?)
    }

    /// Returns true if rectangle has a positive area.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Returns true if the pixel at (`px`, `py`) lies inside the rectangle.
    pub fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x && py >= self.y && px < self.x + self.width && py < self.y + self.height
    }
}

/// Pixel bounds touched by a round-capped segment of the given width.
///
/// The box is padded by one pixel on each side to cover antialiasing.
/// Coordinates beyond the `i32` range saturate; a box too wide to represent
/// yields `None`.
pub fn segment_bounds(from: StrokePoint, to: StrokePoint, width: f64) -> Option<Rect> {
    let half = width.max(0.0) / 2.0;
    let min_x = ((from.x.min(to.x) - half).floor() as i32).saturating_sub(1);
    let min_y = ((from.y.min(to.y) - half).floor() as i32).saturating_sub(1);
    let max_x = ((from.x.max(to.x) + half).ceil() as i32).saturating_add(1);
    let max_y = ((from.y.max(to.y) + half).ceil() as i32).saturating_add(1);
    Rect::from_min_max(min_x, min_y, max_x, max_y)
}
