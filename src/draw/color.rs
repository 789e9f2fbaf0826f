//! RGBA color type and predefined color constants.

use serde::{Deserialize, Serialize};

/// Represents an RGBA color with 8-bit channels.
///
/// # Examples
///
/// ```
/// use plotcanvas::draw::Color;
/// let red = Color::rgb(255, 0, 0);
/// let semi_transparent_blue = Color::new(0, 0, 255, 128);
/// assert_eq!(red.a, 255);
/// assert_eq!(semi_transparent_blue.a, 128);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha (0 = fully transparent, 255 = fully opaque)
    pub a: u8,
}

impl Color {
    /// Creates a new color from RGBA channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a fully opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Returns the channels normalized to 0.0 - 1.0, in the order Cairo expects.
    pub fn to_rgba_f64(self) -> (f64, f64, f64, f64) {
        (
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
            self.a as f64 / 255.0,
        )
    }

    /// Makes this color the current Cairo source.
    pub fn apply(self, ctx: &cairo::Context) {
        let (r, g, b, a) = self.to_rgba_f64();
        ctx.set_source_rgba(r, g, b, a);
    }
}

impl Default for Color {
    fn default() -> Self {
        BLACK
    }
}

// ============================================================================
// Predefined Color Constants
// ============================================================================

pub const RED: Color = Color::rgb(255, 0, 0);
pub const GREEN: Color = Color::rgb(0, 255, 0);
pub const BLUE: Color = Color::rgb(0, 0, 255);
pub const YELLOW: Color = Color::rgb(255, 255, 0);
pub const ORANGE: Color = Color::rgb(255, 128, 0);
/// Pink/magenta
pub const PINK: Color = Color::rgb(255, 0, 255);
pub const WHITE: Color = Color::rgb(255, 255, 255);
/// Default text color of a new canvas
pub const BLACK: Color = Color::rgb(0, 0, 0);
pub const TRANSPARENT: Color = Color::new(0, 0, 0, 0);
