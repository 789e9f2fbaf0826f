//! Drawing command values produced by [`Canvas`](super::Canvas) operations.

use super::color::Color;
use super::font::FontSet;
use super::image::DecodedImage;
use crate::util::{Point, Rect};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Text anchor mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum TextAlignment {
    /// Left edge at x
    #[default]
    Start,
    /// Center at x
    Middle,
    /// Right edge at x
    End,
}

impl TextAlignment {
    pub fn to_pango(self) -> pango::Alignment {
        match self {
            TextAlignment::Start => pango::Alignment::Left,
            TextAlignment::Middle => pango::Alignment::Center,
            TextAlignment::End => pango::Alignment::Right,
        }
    }
}

/// A primitive drawing instruction, ready to submit to a backend.
///
/// Commands are plain values: building one has no side effects, and the
/// caller decides when (and whether) to append it to a
/// [`DrawList`](super::DrawList).
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Solid fill of a rectangle
    Fill { rect: Rect, color: Color },
    /// Text block laid out from `origin` inside a box `layout_width` wide
    Text {
        /// Top-left corner of the layout box
        origin: Point,
        /// Width of the layout box that `alignment` applies within
        layout_width: f64,
        /// Font size in pixels
        size: f64,
        alignment: TextAlignment,
        text: String,
        color: Color,
        fonts: FontSet,
    },
    /// Decoded image scaled into `rect`
    Image { image: DecodedImage, rect: Rect },
}

impl DrawCommand {
    /// Returns the painted region for fills and images.
    ///
    /// Text extents depend on font shaping, so text commands return `None`.
    pub fn rect(&self) -> Option<Rect> {
        match self {
            DrawCommand::Fill { rect, .. } | DrawCommand::Image { rect, .. } => Some(*rect),
            DrawCommand::Text { .. } => None,
        }
    }
}
