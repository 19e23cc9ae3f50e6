//! Configuration file support for fingerpaint.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/fingerpaint/config.toml`. Settings include the canvas size and
//! paper color, brush defaults, the settings panel layout and export options.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::{ColorSpec, PanelLayout};
pub use types::{BrushConfig, CanvasConfig, ExportConfig, PanelConfig};

use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Largest accepted canvas edge in pixels.
pub const MAX_CANVAS_EDGE: i32 = 8192;

/// Clamps a canvas edge to 1 - [`MAX_CANVAS_EDGE`], warning when it was out of range.
pub fn clamp_canvas_edge(name: &str, value: i32) -> i32 {
    if (1..=MAX_CANVAS_EDGE).contains(&value) {
        return value;
    }
    warn!(
        "Invalid canvas {} {}, clamping to 1-{} range",
        name, value, MAX_CANVAS_EDGE
    );
    value.clamp(1, MAX_CANVAS_EDGE)
}

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [canvas]
/// width = 768
/// height = 1024
/// background = [1.0, 1.0, 1.0]
///
/// [brush]
/// default_color = "black"
/// default_opacity = 1.0
/// default_diameter = 5.0
///
/// [panel]
/// layout = "compact"
///
/// [export]
/// directory = "~/Pictures/Fingerpaint"
/// filename_template = "drawing_%Y-%m-%d_%H%M%S"
/// flatten = true
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Canvas size and paper color
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Initial brush
    #[serde(default)]
    pub brush: BrushConfig,

    /// Settings panel preferences
    #[serde(default)]
    pub panel: PanelConfig,

    /// Image export options
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `canvas.width`, `canvas.height`: 1 - 8192
    /// - `canvas.background`: 0.0 - 1.0 per component
    /// - `brush.default_opacity`: 0.0 - 1.0
    /// - `brush.default_diameter`: 1.0 - 50.0
    pub fn validate_and_clamp(&mut self) {
        self.canvas.width = clamp_canvas_edge("width", self.canvas.width);
        self.canvas.height = clamp_canvas_edge("height", self.canvas.height);

        for (i, component) in self.canvas.background.iter_mut().enumerate() {
            if !(0.0..=1.0).contains(component) {
                warn!(
                    "Invalid canvas background[{}] = {:.3}, clamping to 0.0-1.0",
                    i, component
                );
                *component = component.clamp(0.0, 1.0);
            }
        }

        if !(0.0..=1.0).contains(&self.brush.default_opacity) {
            warn!(
                "Invalid default_opacity {:.2}, clamping to 0.0-1.0 range",
                self.brush.default_opacity
            );
            self.brush.default_opacity = self.brush.default_opacity.clamp(0.0, 1.0);
        }

        if !(1.0..=50.0).contains(&self.brush.default_diameter) {
            warn!(
                "Invalid default_diameter {:.1}, clamping to 1.0-50.0 range",
                self.brush.default_diameter
            );
            self.brush.default_diameter = self.brush.default_diameter.clamp(1.0, 50.0);
        }

        if self.export.filename_template.trim().is_empty() {
            warn!("Empty export filename_template, falling back to default");
            self.export.filename_template = ExportConfig::default().filename_template;
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/fingerpaint/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("fingerpaint");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path, or returns defaults if it does not exist.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;
        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses configuration from TOML text without validating it.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Saves the current configuration to the default location.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory cannot be created
    /// - The config cannot be serialized to TOML
    /// - The file cannot be written
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// Creates a default configuration file with documentation comments.
    ///
    /// Writes the example config from `config.example.toml` to the user's config directory.
    ///
    /// # Errors
    /// Returns an error if:
    /// - A config file already exists at the target path
    /// - The config directory cannot be created
    /// - The file cannot be written
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&config_path, EXAMPLE_CONFIG)?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

/// Documented example configuration shipped with the binary.
pub const EXAMPLE_CONFIG: &str = include_str!("../../config.example.toml");
