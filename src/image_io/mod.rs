//! Image import and export.
//!
//! Drawings are exported as PNG files named from a chrono template; imports
//! decode a PNG into a Cairo surface the canvas can place in its stroke layer.
//! No image format logic lives in the canvas itself.

pub mod file;
pub mod types;

pub use file::{
    FileSaveConfig, decode_png, encode_png, expand_tilde, generate_filename, load_png, save_png,
    write_png,
};
pub use types::ImageIoError;
