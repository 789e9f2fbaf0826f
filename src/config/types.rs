//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::draw::TextAlignment;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Canvas size and colors.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Canvas width in pixels (valid range: 1 - 16384)
    #[serde(default = "default_width")]
    pub width: f64,

    /// Canvas height in pixels (valid range: 1 - 16384)
    #[serde(default = "default_height")]
    pub height: f64,

    /// Background fill - a named color or an RGB/RGBA array
    #[serde(default = "default_background")]
    pub background: ColorSpec,

    /// Color used by text that is not given one explicitly
    #[serde(default = "default_text_color")]
    pub text_color: ColorSpec,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            background: default_background(),
            text_color: default_text_color(),
        }
    }
}

/// Font and title settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct TextConfig {
    /// Font family name (e.g., "Sans", "Monospace", "Go")
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Families tried, in order, for glyphs the primary family lacks
    #[serde(default)]
    pub fallback_families: Vec<String>,

    /// Font weight (e.g., "normal", "bold", "light", or 100-900)
    #[serde(default = "default_font_weight")]
    pub font_weight: String,

    /// Font style (e.g., "normal", "italic", "oblique")
    #[serde(default = "default_font_style")]
    pub font_style: String,

    /// Title font size in pixels (valid range: 4.0 - 512.0)
    #[serde(default = "default_title_size")]
    pub title_size: f64,

    /// Title anchor (start, middle, end)
    #[serde(default = "default_title_anchor")]
    pub title_anchor: TextAlignment,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            font_family: default_font_family(),
            fallback_families: Vec::new(),
            font_weight: default_font_weight(),
            font_style: default_font_style(),
            title_size: default_title_size(),
            title_anchor: default_title_anchor(),
        }
    }
}

/// Grid appearance.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GridConfig {
    /// Line thickness in pixels (valid range: 0.1 - 50.0)
    #[serde(default = "default_line_size")]
    pub line_size: f64,

    /// Number of intervals along each axis (valid range: 1 - 1000)
    #[serde(default = "default_intervals")]
    pub intervals: f64,

    /// Line color
    #[serde(default = "default_grid_color")]
    pub color: ColorSpec,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            line_size: default_line_size(),
            intervals: default_intervals(),
            color: default_grid_color(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_width() -> f64 {
    1000.0
}

fn default_height() -> f64 {
    1000.0
}

fn default_background() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_text_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_font_family() -> String {
    "Sans".to_string()
}

fn default_font_weight() -> String {
    "normal".to_string()
}

fn default_font_style() -> String {
    "normal".to_string()
}

fn default_title_size() -> f64 {
    48.0
}

fn default_title_anchor() -> TextAlignment {
    TextAlignment::Middle
}

fn default_line_size() -> f64 {
    1.0
}

fn default_intervals() -> f64 {
    10.0
}

fn default_grid_color() -> ColorSpec {
    ColorSpec::Rgb([200, 200, 200])
}
