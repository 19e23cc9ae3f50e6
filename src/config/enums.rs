//! Configuration enum types.

use crate::draw::{Color, color::BLACK};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Settings panel layout variant.
///
/// Both variants show the same controls; they differ only in preview sizes.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum PanelLayout {
    /// Full-size previews (tablets)
    #[default]
    Regular,
    /// Smaller previews (phones)
    Compact,
}

impl PanelLayout {
    /// Width and height of the color swatch preview.
    pub fn swatch_size(self) -> (i32, i32) {
        match self {
            PanelLayout::Regular => (120, 120),
            PanelLayout::Compact => (80, 80),
        }
    }

    /// Width and height of the brush-size preview.
    pub fn brush_preview_size(self) -> (i32, i32) {
        match self {
            PanelLayout::Regular => (100, 100),
            PanelLayout::Compact => (60, 60),
        }
    }
}

/// Color specification - either a named color or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// default_color = "black"
///
/// # Custom RGB color (0-255 per component)
/// default_color = [255, 128, 0]  # Orange
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color: red, green, blue, magenta, yellow, cyan, white, black
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`] struct.
    ///
    /// Unknown color names default to black with a warning. RGB arrays are
    /// converted from 0-255 range to 0.0-1.0 range with full opacity.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Name(name) => crate::util::name_to_color(name).unwrap_or_else(|| {
                warn!("Unknown color '{}', using black", name);
                BLACK
            }),
            ColorSpec::Rgb([r, g, b]) => Color::rgb(
                *r as f64 / 255.0,
                *g as f64 / 255.0,
                *b as f64 / 255.0,
            ),
        }
    }
}
