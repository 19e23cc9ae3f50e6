//! Error type for image import and export.

use thiserror::Error;

/// Errors that can occur while importing or exporting images.
#[derive(Debug, Error)]
pub enum ImageIoError {
    #[error("Image data could not be decoded: {0}")]
    InvalidImage(String),

    #[error("Image has no pixels")]
    EmptyImage,

    #[error("Failed to encode image: {0}")]
    EncodeError(String),

    #[error("Nothing to export: canvas has no pixels")]
    NothingToExport,

    #[error("File operation failed: {0}")]
    Io(#[from] std::io::Error),
}
