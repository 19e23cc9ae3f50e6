//! Drawing tool selection.

/// Whether strokes paint with the brush color or with the eraser color.
///
/// The eraser paints the canvas background color; it does not clear alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolMode {
    /// Strokes use the brush color (default)
    #[default]
    Drawing,
    /// Strokes use the erase color
    Erasing,
}

/// Icon shown on the tool button and on the cursor marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolIcon {
    PaintBrush,
    Eraser,
}

impl ToolMode {
    /// The opposite mode.
    pub fn toggled(self) -> Self {
        match self {
            ToolMode::Drawing => ToolMode::Erasing,
            ToolMode::Erasing => ToolMode::Drawing,
        }
    }

    pub fn icon(self) -> ToolIcon {
        match self {
            ToolMode::Drawing => ToolIcon::PaintBrush,
            ToolMode::Erasing => ToolIcon::Eraser,
        }
    }
}
