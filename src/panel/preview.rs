//! Preview surfaces shown inside the settings panel.

use crate::draw::{BLACK, Color, RasterLayer, render_brush_dot, render_swatch};

/// Border drawn around the color swatch.
pub const SWATCH_BORDER_WIDTH: f64 = 5.0;

/// Blur radius of the swatch drop shadow.
pub const SWATCH_SHADOW_RADIUS: f64 = 5.0;

/// Color swatch showing the draft color at the draft opacity.
#[derive(Debug)]
pub struct SwatchPreview {
    layer: RasterLayer,
    color: Color,
    /// Drop-shadow color; mirrors the swatch color
    shadow_color: Color,
}

impl SwatchPreview {
    pub fn new(width: i32, height: i32, color: Color) -> Self {
        let mut preview = Self {
            layer: RasterLayer::new(width, height),
            color,
            shadow_color: color,
        };
        preview.render(color);
        preview
    }

    /// Repaints the swatch with a new color.
    pub fn render(&mut self, color: Color) {
        self.color = color;
        self.shadow_color = color;

        let (width, height) = (self.layer.width(), self.layer.height());
        let Some(ctx) = self.layer.context() else {
            return;
        };
        render_swatch(&ctx, width, height, color, BLACK, SWATCH_BORDER_WIDTH);
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn shadow_color(&self) -> Color {
        self.shadow_color
    }

    pub fn layer(&self) -> &RasterLayer {
        &self.layer
    }
}

/// Brush-size preview: one black dot of the draft diameter, centered.
#[derive(Debug)]
pub struct SizePreview {
    layer: RasterLayer,
    diameter: f64,
}

impl SizePreview {
    pub fn new(width: i32, height: i32, diameter: f64) -> Self {
        let mut preview = Self {
            layer: RasterLayer::new(width, height),
            diameter,
        };
        preview.render(diameter);
        preview
    }

    /// Redraws the dot on a cleared surface.
    pub fn render(&mut self, diameter: f64) {
        self.diameter = diameter;
        self.layer.clear();

        let (width, height) = (self.layer.width(), self.layer.height());
        let Some(ctx) = self.layer.context() else {
            return;
        };
        render_brush_dot(&ctx, width, height, diameter, BLACK);
    }

    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    pub fn layer(&self) -> &RasterLayer {
        &self.layer
    }
}
