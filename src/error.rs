//! Error type shared by canvas operations and the Cairo backend.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building or rendering drawing commands.
#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("Failed to open image {}: {source}", .path.display())]
    ImageOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode image {}: {source}", .path.display())]
    ImageDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Grid interval count must be positive and at most 100000, got {0}")]
    InvalidGridInterval(f64),

    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("Failed to write PNG: {0}")]
    CairoIo(#[from] cairo::IoError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
