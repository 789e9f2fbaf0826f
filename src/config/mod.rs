//! Configuration file support for plotcanvas.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/plotcanvas/config.toml`. Settings include canvas size and colors,
//! fonts, and grid appearance.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{CanvasConfig, GridConfig, TextConfig};

use crate::draw::{Canvas, FontDescriptor, FontSet};
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [canvas]
/// width = 1000.0
/// height = 1000.0
/// background = "white"
/// text_color = "black"
///
/// [text]
/// font_family = "Sans"
/// fallback_families = ["DejaVu Sans"]
/// title_size = 48.0
///
/// [grid]
/// line_size = 1.0
/// intervals = 10.0
/// color = [200, 200, 200]
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Canvas size and colors
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Font settings
    #[serde(default)]
    pub text: TextConfig,

    /// Grid appearance
    #[serde(default)]
    pub grid: GridConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `canvas.width`, `canvas.height`: 1.0 - 16384.0
    /// - `text.title_size`: 4.0 - 512.0
    /// - `grid.line_size`: 0.1 - 50.0
    /// - `grid.intervals`: 1.0 - 1000.0
    pub fn validate_and_clamp(&mut self) {
        clamp_field("canvas.width", &mut self.canvas.width, 1.0, 16384.0);
        clamp_field("canvas.height", &mut self.canvas.height, 1.0, 16384.0);
        clamp_field("text.title_size", &mut self.text.title_size, 4.0, 512.0);
        clamp_field("grid.line_size", &mut self.grid.line_size, 0.1, 50.0);
        clamp_field("grid.intervals", &mut self.grid.intervals, 1.0, 1000.0);

        if self.text.font_family.trim().is_empty() {
            log::warn!("Empty font_family, falling back to 'Sans'");
            self.text.font_family = "Sans".to_string();
        }

        let valid_weight = matches!(
            self.text.font_weight.to_lowercase().as_str(),
            "normal" | "bold" | "light" | "ultralight" | "heavy" | "ultrabold"
        ) || self
            .text
            .font_weight
            .parse::<u32>()
            .is_ok_and(|w| (100..=900).contains(&w));

        if !valid_weight {
            log::warn!(
                "Invalid font_weight '{}', falling back to 'normal'",
                self.text.font_weight
            );
            self.text.font_weight = "normal".to_string();
        }

        if !matches!(
            self.text.font_style.to_lowercase().as_str(),
            "normal" | "italic" | "oblique"
        ) {
            log::warn!(
                "Invalid font_style '{}', falling back to 'normal'",
                self.text.font_style
            );
            self.text.font_style = "normal".to_string();
        }
    }

    /// Builds the font set described by the `[text]` section.
    pub fn font_set(&self) -> FontSet {
        let mut fonts = FontSet::new(FontDescriptor::new(
            self.text.font_family.clone(),
            self.text.font_weight.clone(),
            self.text.font_style.clone(),
        ));
        for family in &self.text.fallback_families {
            fonts.register(FontDescriptor::regular(family.clone()));
        }
        fonts
    }

    /// Builds a canvas with the configured size, text color and fonts.
    pub fn canvas(&self) -> Canvas {
        let mut canvas = Canvas::with_fonts(self.canvas.width, self.canvas.height, self.font_set());
        canvas.text_color = self.canvas.text_color.to_color();
        canvas
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/plotcanvas/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("plotcanvas");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default path, or returns defaults if not found.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::get_config_path()?)
    }

    /// Loads configuration from `config_path`, or returns defaults if the file is missing.
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or contains invalid TOML.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Saves the configuration to `config_path`, creating parent directories.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// Saves the configuration to the default path.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path()?)
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

fn clamp_field(name: &str, value: &mut f64, min: f64, max: f64) {
    if !(min..=max).contains(&*value) {
        let clamped = if value.is_nan() { min } else { value.clamp(min, max) };
        log::warn!(
            "Invalid {} {:.1}, clamping to {:.1}-{:.1} range",
            name,
            value,
            min,
            max
        );
        *value = clamped;
    }
}
