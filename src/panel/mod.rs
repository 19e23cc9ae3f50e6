//! Brush settings panel: sliders, labels and live previews.
//!
//! The panel edits a draft copy of the brush. Nothing reaches the canvas until
//! the panel is dismissed, at which point the draft is handed to the
//! completion callback (if one was registered).

pub mod preview;

pub use preview::{SizePreview, SwatchPreview};

use crate::config::PanelLayout;
use crate::draw::{BrushState, brush::MAX_DIAMETER};
use crate::util::slider_label;
use log::debug;

/// Label range for the color channel sliders.
pub const CHANNEL_LABEL_SCALE: f64 = 255.0;

/// Label range for the opacity slider.
pub const OPACITY_LABEL_SCALE: f64 = 100.0;

/// Lowest position of the size slider; keeps the diameter at one pixel or more.
///
/// Positions below it are raised to it, so the size label never reads "0"
/// (a raw `round(v * 50)` would for v < 0.01).
pub const MIN_SIZE_SLIDER: f64 = 0.02;

/// Color and opacity sliders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
    Opacity,
}

impl Channel {
    fn label_scale(self) -> f64 {
        match self {
            Channel::Opacity => OPACITY_LABEL_SCALE,
            _ => CHANNEL_LABEL_SCALE,
        }
    }
}

/// A slider position and the number shown next to it.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderRow {
    /// Normalized position in [0, 1]
    pub value: f64,
    pub label: String,
}

impl SliderRow {
    fn new(value: f64, scale: f64) -> Self {
        Self {
            value,
            label: slider_label(value, scale).to_string(),
        }
    }
}

/// One-shot callback receiving the final draft on dismiss.
pub type CompletionCallback = Box<dyn FnOnce(BrushState)>;

/// Settings panel editing a [`BrushState`] draft.
pub struct BrushSettingsPanel {
    draft: BrushState,
    layout: PanelLayout,
    red: SliderRow,
    green: SliderRow,
    blue: SliderRow,
    opacity: SliderRow,
    size: SliderRow,
    swatch: SwatchPreview,
    size_preview: SizePreview,
    on_complete: Option<CompletionCallback>,
}

impl std::fmt::Debug for BrushSettingsPanel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrushSettingsPanel")
            .field("draft", &self.draft)
            .field("layout", &self.layout)
            .field("has_callback", &self.on_complete.is_some())
            .finish()
    }
}

impl BrushSettingsPanel {
    /// Opens the panel on a copy of `initial`.
    ///
    /// Populates all five sliders and labels and renders both previews.
    pub fn new(initial: BrushState, layout: PanelLayout) -> Self {
        let size_value = (initial.diameter / MAX_DIAMETER).clamp(MIN_SIZE_SLIDER, 1.0);
        let (swatch_w, swatch_h) = layout.swatch_size();
        let (size_w, size_h) = layout.brush_preview_size();

        Self {
            draft: initial,
            layout,
            red: SliderRow::new(initial.red, CHANNEL_LABEL_SCALE),
            green: SliderRow::new(initial.green, CHANNEL_LABEL_SCALE),
            blue: SliderRow::new(initial.blue, CHANNEL_LABEL_SCALE),
            opacity: SliderRow::new(initial.opacity, OPACITY_LABEL_SCALE),
            size: SliderRow::new(size_value, MAX_DIAMETER),
            swatch: SwatchPreview::new(swatch_w, swatch_h, initial.preview_color()),
            size_preview: SizePreview::new(size_w, size_h, initial.diameter),
            on_complete: None,
        }
    }

    /// Registers the callback invoked by [`on_dismiss`](Self::on_dismiss).
    pub fn on_complete(mut self, callback: impl FnOnce(BrushState) + 'static) -> Self {
        self.on_complete = Some(Box::new(callback));
        self
    }

    /// The draft as edited so far.
    pub fn draft(&self) -> BrushState {
        self.draft
    }

    pub fn layout(&self) -> PanelLayout {
        self.layout
    }

    /// Slider row for a color or opacity channel.
    pub fn channel(&self, channel: Channel) -> &SliderRow {
        match channel {
            Channel::Red => &self.red,
            Channel::Green => &self.green,
            Channel::Blue => &self.blue,
            Channel::Opacity => &self.opacity,
        }
    }

    /// Slider row for the brush size.
    pub fn size(&self) -> &SliderRow {
        &self.size
    }

    pub fn swatch(&self) -> &SwatchPreview {
        &self.swatch
    }

    pub fn size_preview(&self) -> &SizePreview {
        &self.size_preview
    }

    /// Handles a color or opacity slider change.
    ///
    /// Updates the draft field and the label, then repaints the swatch (whose
    /// drop shadow follows the swatch color).
    pub fn on_channel_changed(&mut self, channel: Channel, value: f64) {
        let value = value.clamp(0.0, 1.0);
        let row = SliderRow::new(value, channel.label_scale());
        match channel {
            Channel::Red => {
                self.draft.red = value;
                self.red = row;
            }
            Channel::Green => {
                self.draft.green = value;
                self.green = row;
            }
            Channel::Blue => {
                self.draft.blue = value;
                self.blue = row;
            }
            Channel::Opacity => {
                self.draft.opacity = value;
                self.opacity = row;
            }
        }
        self.swatch.render(self.draft.preview_color());
        debug!("{:?} slider set to {:.3}", channel, value);
    }

    /// Handles a size slider change: diameter = value x 50.
    pub fn on_diameter_changed(&mut self, value: f64) {
        let value = value.clamp(MIN_SIZE_SLIDER, 1.0);
        self.size = SliderRow::new(value, MAX_DIAMETER);
        self.draft.diameter = value * MAX_DIAMETER;
        self.size_preview.render(self.draft.diameter);
        debug!("Brush size set to {:.1}px", self.draft.diameter);
    }

    /// Closes the panel, handing the draft to the completion callback if any.
    pub fn on_dismiss(self) {
        match self.on_complete {
            Some(callback) => callback(self.draft),
            None => debug!("Settings panel closed without a completion callback"),
        }
    }

    /// Closes the panel without reporting the draft.
    pub fn cancel(self) {
        debug!("Settings panel cancelled");
    }
}
