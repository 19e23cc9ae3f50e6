//! PNG reading and writing for imported pictures and exported drawings.

use super::types::ImageIoError;
use crate::config::ExportConfig;
use cairo::ImageSurface;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for file saving.
#[derive(Debug, Clone)]
pub struct FileSaveConfig {
    /// Directory to save drawings to.
    pub save_directory: PathBuf,
    /// Filename template (supports chrono format specifiers).
    pub filename_template: String,
    /// Image format extension.
    pub format: String,
}

impl Default for FileSaveConfig {
    fn default() -> Self {
        Self::from(&ExportConfig::default())
    }
}

impl From<&ExportConfig> for FileSaveConfig {
    fn from(config: &ExportConfig) -> Self {
        Self {
            save_directory: expand_tilde(&config.directory),
            filename_template: config.filename_template.clone(),
            format: "png".to_string(),
        }
    }
}

/// Generate a filename based on the template and current time.
///
/// # Arguments
/// * `template` - Template string with chrono format specifiers
/// * `format` - File extension (e.g., "png")
pub fn generate_filename(template: &str, format: &str) -> String {
    let now = Local::now();
    let filename = now.format(template).to_string();
    format!("{}.{}", filename, format)
}

/// Ensure the save directory exists, creating it if necessary.
///
/// Returns the canonicalized path to the directory.
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, ImageIoError> {
    if !directory.exists() {
        log::info!("Creating export directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Encodes a surface as PNG bytes.
pub fn encode_png(surface: &ImageSurface) -> Result<Vec<u8>, ImageIoError> {
    let mut buffer = Vec::new();
    surface
        .write_to_png(&mut buffer)
        .map_err(|err| ImageIoError::EncodeError(err.to_string()))?;
    Ok(buffer)
}

/// Decodes PNG bytes into a surface.
///
/// Fails on malformed data and on images without pixels; there is nothing to
/// retry for a bad payload.
pub fn decode_png(bytes: &[u8]) -> Result<ImageSurface, ImageIoError> {
    let mut reader = bytes;
    let surface = ImageSurface::create_from_png(&mut reader)
        .map_err(|err| ImageIoError::InvalidImage(err.to_string()))?;
    if surface.width() <= 0 || surface.height() <= 0 {
        return Err(ImageIoError::EmptyImage);
    }
    Ok(surface)
}

/// Reads a PNG file into a surface.
pub fn load_png(path: &Path) -> Result<ImageSurface, ImageIoError> {
    let bytes = fs::read(path)?;
    let surface = decode_png(&bytes).map_err(|err| match err {
        ImageIoError::InvalidImage(reason) => {
            ImageIoError::InvalidImage(format!("{}: {}", path.display(), reason))
        }
        other => other,
    })?;
    log::info!(
        "Loaded {}x{} image from {}",
        surface.width(),
        surface.height(),
        path.display()
    );
    Ok(surface)
}

/// Writes a surface as PNG to an explicit path.
pub fn write_png(surface: &ImageSurface, path: &Path) -> Result<(), ImageIoError> {
    let data = encode_png(surface)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_directory_exists(parent)?;
    }
    fs::write(path, &data)?;
    restrict_permissions(path)?;
    log::info!("Wrote {} ({} bytes)", path.display(), data.len());
    Ok(())
}

/// Saves a surface under a generated filename in the configured directory.
///
/// Returns the path of the written file.
pub fn save_png(surface: &ImageSurface, config: &FileSaveConfig) -> Result<PathBuf, ImageIoError> {
    let directory = ensure_directory_exists(&config.save_directory)?;

    let filename = generate_filename(&config.filename_template, &config.format);
    let file_path = directory.join(&filename);

    let data = encode_png(surface)?;
    log::info!(
        "Saving drawing to: {} ({} bytes)",
        file_path.display(),
        data.len()
    );
    fs::write(&file_path, &data)?;
    restrict_permissions(&file_path)?;

    Ok(file_path)
}

/// Sets exported files to user read/write only.
fn restrict_permissions(path: &Path) -> Result<(), ImageIoError> {
    #[cfg(unix)]
    {
        use std::fs::Permissions;
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, Permissions::from_mode(0o600))?;
    }
    #[cfg(not(unix))]
    let _ = path;
    Ok(())
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}
