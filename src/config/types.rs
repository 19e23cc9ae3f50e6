//! Configuration type definitions.

use super::enums::{ColorSpec, PanelLayout};
use crate::draw::{BrushState, Color};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Canvas settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Canvas width in pixels (valid range: 1 - 8192)
    #[serde(default = "default_canvas_width")]
    pub width: i32,

    /// Canvas height in pixels (valid range: 1 - 8192)
    #[serde(default = "default_canvas_height")]
    pub height: i32,

    /// Paper color [R, G, B] (0.0-1.0 range). The eraser paints this color and
    /// exports are flattened onto it.
    #[serde(default = "default_background")]
    pub background: [f64; 3],
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_width(),
            height: default_canvas_height(),
            background: default_background(),
        }
    }
}

impl CanvasConfig {
    /// Background as an opaque color.
    pub fn background_color(&self) -> Color {
        let [r, g, b] = self.background;
        Color::rgb(r, g, b)
    }
}

/// Brush defaults applied when the canvas is created.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct BrushConfig {
    /// Default brush color - either a named color (red, green, blue, magenta,
    /// yellow, cyan, white, black) or an RGB array like `[255, 0, 0]` for red
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Default opacity (valid range: 0.0 - 1.0)
    #[serde(default = "default_opacity")]
    pub default_opacity: f64,

    /// Default diameter in pixels (valid range: 1.0 - 50.0)
    #[serde(default = "default_diameter")]
    pub default_diameter: f64,
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_opacity: default_opacity(),
            default_diameter: default_diameter(),
        }
    }
}

impl BrushConfig {
    /// Builds the initial brush from these defaults.
    pub fn to_brush(&self) -> BrushState {
        BrushState::from_color(
            self.default_color.to_color(),
            self.default_opacity,
            self.default_diameter,
        )
    }
}

/// Settings panel preferences.
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct PanelConfig {
    /// Layout variant (regular or compact)
    #[serde(default)]
    pub layout: PanelLayout,
}

/// Image export settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ExportConfig {
    /// Directory exported drawings are written to (`~` is expanded)
    #[serde(default = "default_export_directory")]
    pub directory: String,

    /// Filename template with chrono format specifiers (extension is added)
    #[serde(default = "default_filename_template")]
    pub filename_template: String,

    /// Composite the drawing over the canvas background before writing.
    /// When false the PNG keeps the transparent areas.
    #[serde(default = "default_flatten")]
    pub flatten: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: default_export_directory(),
            filename_template: default_filename_template(),
            flatten: default_flatten(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_canvas_width() -> i32 {
    768
}

fn default_canvas_height() -> i32 {
    1024
}

fn default_background() -> [f64; 3] {
    [1.0, 1.0, 1.0]
}

fn default_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_opacity() -> f64 {
    1.0
}

fn default_diameter() -> f64 {
    crate::draw::brush::DEFAULT_DIAMETER
}

fn default_export_directory() -> String {
    "~/Pictures/Fingerpaint".to_string()
}

fn default_filename_template() -> String {
    "drawing_%Y-%m-%d_%H%M%S".to_string()
}

fn default_flatten() -> bool {
    true
}
