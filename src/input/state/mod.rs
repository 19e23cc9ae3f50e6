mod actions;
mod compositor;
mod touch;
#[cfg(test)]
mod tests;

pub use compositor::{DrawingState, LayerKind, StrokeCompositor, StrokeSummary};
