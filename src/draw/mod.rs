//! Rendering primitives and raster types (Cairo-based).
//!
//! This module defines the core drawing types used by the canvas:
//! - [`Color`]: RGBA color representation with the toolbar palette
//! - [`BrushState`]: color, opacity and diameter for new strokes
//! - [`RasterLayer`]: a fixed-size ARGB surface (temporary or committed)
//! - Rendering functions for segments, merges and previews

pub mod brush;
pub mod color;
pub mod dirty;
pub mod layer;
pub mod point;
pub mod render;

// Re-export commonly used types at module level
pub use brush::BrushState;
pub use color::{Color, PaletteColor};
pub use dirty::DirtyTracker;
pub use layer::{Pixel, RasterLayer};
pub use point::StrokePoint;
pub use render::{composite_layers, flatten_onto, render_brush_dot, render_segment, render_swatch};

pub use color::{BLACK, BLUE, CYAN, GREEN, MAGENTA, RED, WHITE, YELLOW};
