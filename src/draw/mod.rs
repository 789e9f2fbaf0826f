//! Drawing primitives and the Cairo backend that renders them.
//!
//! This module defines the core drawing types:
//! - [`Canvas`]: computes geometry for text, rectangles, lines, grids and images
//! - [`DrawCommand`]: the primitive instruction each canvas operation returns
//! - [`DrawList`]: append-only container the caller submits to a backend
//! - Rendering functions for Cairo/Pango output

pub mod canvas;
pub mod color;
pub mod command;
pub mod font;
pub mod image;
pub mod list;
pub mod render;

// Re-export commonly used types at module level
pub use canvas::Canvas;
pub use color::Color;
pub use command::{DrawCommand, TextAlignment};
pub use font::{FontDescriptor, FontSet};
pub use self::image::{DecodedImage, load_image};
pub use list::DrawList;
pub use render::{render_command, render_commands, render_to_png};

pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, TRANSPARENT, WHITE, YELLOW};
