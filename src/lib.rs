//! Library exports for the fingerpaint canvas.
//!
//! The canvas core ([`StrokeCompositor`]) turns a single-touch gesture stream
//! into round-capped strokes on a temporary layer and merges each finished
//! stroke into the committed drawing at the brush opacity. The
//! [`BrushSettingsPanel`] edits a draft copy of the brush and reports it back
//! through a one-shot callback. Hosts (the `fingerpaint` binary, or a real UI)
//! own windowing and feed events in.

pub mod config;
pub mod draw;
pub mod image_io;
pub mod input;
pub mod panel;
pub mod script;
pub mod util;

pub use config::Config;
pub use input::StrokeCompositor;
pub use panel::BrushSettingsPanel;
