//! Image loading for image drawing commands.

use crate::error::CanvasError;
use image::{ImageReader, RgbaImage};
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// A decoded RGBA8 pixel buffer.
///
/// Cloning is cheap (the pixels are shared), so the same image can back any
/// number of drawing commands.
#[derive(Clone)]
pub struct DecodedImage {
    pixels: Arc<RgbaImage>,
}

impl DecodedImage {
    pub fn new(pixels: RgbaImage) -> Self {
        Self {
            pixels: Arc::new(pixels),
        }
    }

    /// Natural width in pixels.
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Natural height in pixels.
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }
}

impl fmt::Debug for DecodedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecodedImage")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

/// Two images are equal when they share the same pixel buffer.
impl PartialEq for DecodedImage {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.pixels, &other.pixels)
    }
}

/// Opens and decodes an image file (PNG, JPEG or GIF).
///
/// The format is sniffed from the file contents, falling back to the extension.
///
/// # Errors
/// - [`CanvasError::ImageOpen`] if the file cannot be opened or read
/// - [`CanvasError::ImageDecode`] if the bytes are not a supported image
pub fn load_image(path: impl AsRef<Path>) -> Result<DecodedImage, CanvasError> {
    let path = path.as_ref();
    let open_err = |source| CanvasError::ImageOpen {
        path: path.to_path_buf(),
        source,
    };

    let reader = ImageReader::open(path)
        .map_err(open_err)?
        .with_guessed_format()
        .map_err(open_err)?;

    let decoded = reader.decode().map_err(|source| CanvasError::ImageDecode {
        path: path.to_path_buf(),
        source,
    })?;

    let image = DecodedImage::new(decoded.into_rgba8());
    log::debug!(
        "Loaded image {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_is_an_open_error() {
        let temp = TempDir::new().unwrap();
        let err = load_image(temp.path().join("nope.png")).unwrap_err();
        assert!(matches!(err, CanvasError::ImageOpen { .. }));
    }

    #[test]
    fn garbage_bytes_are_a_decode_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        let err = load_image(&path).unwrap_err();
        assert!(matches!(err, CanvasError::ImageDecode { .. }));
    }

    #[test]
    fn decodes_png_with_natural_bounds() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("swatch.png");
        RgbaImage::from_pixel(200, 100, image::Rgba([10, 20, 30, 255]))
            .save(&path)
            .unwrap();

        let image = load_image(&path).unwrap();
        assert_eq!((image.width(), image.height()), (200, 100));
        assert_eq!(image.pixels().get_pixel(0, 0).0, [10, 20, 30, 255]);
    }

    #[test]
    fn clones_share_pixels() {
        let image = DecodedImage::new(RgbaImage::new(2, 2));
        assert_eq!(image.clone(), image);
        assert_ne!(DecodedImage::new(RgbaImage::new(2, 2)), image);
    }
}
