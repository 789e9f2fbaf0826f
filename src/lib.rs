//! Canvas drawing primitives rendered with Cairo and Pango.
//!
//! A [`Canvas`](draw::Canvas) turns positions, sizes and colors into
//! [`DrawCommand`](draw::DrawCommand) values. Callers collect them in a
//! [`DrawList`](draw::DrawList) and hand the list to [`draw::render_commands`]
//! or [`draw::render_to_png`].
//!
//! ```
//! use plotcanvas::draw::{Canvas, DrawList, RED};
//!
//! let canvas = Canvas::new(400.0, 300.0);
//! let mut list = DrawList::new();
//! list.push(canvas.center_rect(200.0, 150.0, 50.0, 50.0, RED));
//! list.extend(canvas.grid(400.0, 300.0, 1.0, 10.0, RED).unwrap());
//! assert_eq!(list.len(), 23);
//! ```

pub mod config;
pub mod draw;
pub mod error;
pub mod util;

pub use config::Config;
pub use error::CanvasError;
