//! Canvas: turns semantic drawing requests into [`DrawCommand`] values.

use super::color::{BLACK, Color};
use super::command::{DrawCommand, TextAlignment};
use super::font::FontSet;
use super::image::{DecodedImage, load_image};
use crate::error::CanvasError;
use crate::util::{self, Point, Rect};
use std::path::Path;

/// Largest interval count [`Canvas::grid`] accepts.
pub const MAX_GRID_INTERVALS: f64 = 100_000.0;

/// Canvas dimensions plus text defaults.
///
/// Every operation is a pure function of its arguments and this state; the
/// returned commands are appended to a [`DrawList`](super::DrawList) by the caller.
#[derive(Debug, Clone)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
    /// Used by text operations that are not given a color
    pub text_color: Color,
    pub fonts: FontSet,
}

impl Canvas {
    /// Creates a canvas with black text and the default font set.
    pub fn new(width: f64, height: f64) -> Self {
        Self::with_fonts(width, height, FontSet::default())
    }

    pub fn with_fonts(width: f64, height: f64, fonts: FontSet) -> Self {
        Self {
            width,
            height,
            text_color: BLACK,
            fonts,
        }
    }

    /// Horizontal offset of the layout box for text anchored at `x`.
    ///
    /// The layout box spans the canvas width, so middle and end anchors shift
    /// by half or all of the canvas width and let the layout align within it.
    pub fn text_offset(&self, x: f64, alignment: TextAlignment) -> f64 {
        match alignment {
            TextAlignment::Start => x,
            TextAlignment::Middle => x - self.width / 2.0,
            TextAlignment::End => x - self.width,
        }
    }

    /// Places text at (x, y) with the given anchor.
    ///
    /// `color` overrides the canvas text color when given.
    pub fn text_aligned(
        &self,
        x: f64,
        y: f64,
        size: f64,
        alignment: TextAlignment,
        text: &str,
        color: Option<Color>,
    ) -> DrawCommand {
        DrawCommand::Text {
            origin: Point::new(self.text_offset(x, alignment), y),
            layout_width: self.width,
            size,
            alignment,
            text: text.to_string(),
            color: color.unwrap_or(self.text_color),
            fonts: self.fonts.clone(),
        }
    }

    /// Text with its left edge at x.
    pub fn text(&self, x: f64, y: f64, size: f64, text: &str, color: Option<Color>) -> DrawCommand {
        self.text_aligned(x, y, size, TextAlignment::Start, text, color)
    }

    /// Text centered at x.
    pub fn text_mid(&self, x: f64, y: f64, size: f64, text: &str, color: Option<Color>) -> DrawCommand {
        self.text_aligned(x, y, size, TextAlignment::Middle, text, color)
    }

    /// Text with its right edge at x.
    pub fn text_end(&self, x: f64, y: f64, size: f64, text: &str, color: Option<Color>) -> DrawCommand {
        self.text_aligned(x, y, size, TextAlignment::End, text, color)
    }

    /// Filled rectangle with one corner at (x, y) and dimensions (w, h).
    pub fn rect(&self, x: f64, y: f64, w: f64, h: f64, color: Color) -> DrawCommand {
        DrawCommand::Fill {
            rect: Rect::from_corners(x, y + h, x + w, y),
            color,
        }
    }

    /// Filled rectangle centered at (x, y) with dimensions (w, h).
    pub fn center_rect(&self, x: f64, y: f64, w: f64, h: f64, color: Color) -> DrawCommand {
        DrawCommand::Fill {
            rect: Rect::from_corners(x - w / 2.0, y + h / 2.0, x + w / 2.0, y - h / 2.0),
            color,
        }
    }

    /// Vertical line starting at (x, y); half of the width `w` lies on each side of x.
    pub fn vline(&self, x: f64, y: f64, w: f64, h: f64, color: Color) -> DrawCommand {
        self.rect(x - w / 2.0, y, w, h, color)
    }

    /// Horizontal line starting at (x, y); half of the height `h` lies on each side of y.
    pub fn hline(&self, x: f64, y: f64, w: f64, h: f64, color: Color) -> DrawCommand {
        self.rect(x, y - h / 2.0, w, h, color)
    }

    /// Grid of `line_size` thick lines dividing `width` x `height` into `intervals` steps.
    ///
    /// Horizontal lines come first (top to bottom), then vertical lines (left to right).
    ///
    /// # Errors
    /// [`CanvasError::InvalidGridInterval`] unless `intervals` is positive and at
    /// most [`MAX_GRID_INTERVALS`].
    pub fn grid(
        &self,
        width: f64,
        height: f64,
        line_size: f64,
        intervals: f64,
        color: Color,
    ) -> Result<Vec<DrawCommand>, CanvasError> {
        if !(intervals > 0.0 && intervals <= MAX_GRID_INTERVALS) {
            return Err(CanvasError::InvalidGridInterval(intervals));
        }

        let rows = util::grid_steps(height, intervals);
        let columns = util::grid_steps(width, intervals);

        let mut commands = Vec::with_capacity(rows.len() + columns.len());
        commands.extend(
            rows.into_iter()
                .map(|y| self.hline(0.0, y, width, line_size, color)),
        );
        commands.extend(
            columns
                .into_iter()
                .map(|x| self.vline(x, 0.0, line_size, height, color)),
        );
        Ok(commands)
    }

    /// Loads the image at `path` and centers it at (x, y).
    ///
    /// See [`Canvas::center_decoded_image`] for the sizing rules.
    ///
    /// # Errors
    /// [`CanvasError::ImageOpen`] or [`CanvasError::ImageDecode`] when the file
    /// cannot be read or decoded; nothing is drawn in that case.
    pub fn center_image(
        &self,
        path: impl AsRef<Path>,
        x: f64,
        y: f64,
        w: u32,
        h: u32,
        scale: f64,
    ) -> Result<DrawCommand, CanvasError> {
        let image = load_image(path)?;
        Ok(self.center_decoded_image(&image, x, y, w, h, scale))
    }

    /// Centers an already decoded image at (x, y).
    ///
    /// The target size is `(w, h)` scaled by `scale` percent. When both `w` and
    /// `h` are zero the image's natural size is used instead, still scaled.
    pub fn center_decoded_image(
        &self,
        image: &DecodedImage,
        x: f64,
        y: f64,
        w: u32,
        h: u32,
        scale: f64,
    ) -> DrawCommand {
        let sc = scale / 100.0;
        let (base_w, base_h) = if w == 0 && h == 0 {
            (image.width(), image.height())
        } else {
            (w, h)
        };
        let imw = base_w as f64 * sc;
        let imh = base_h as f64 * sc;

        let left = x - imw / 2.0;
        let top = y - imh / 2.0;
        DrawCommand::Image {
            image: image.clone(),
            rect: Rect::from_origin_size(left, top, imw, imh),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLUE, DrawList, RED, WHITE};
    use image::RgbaImage;

    fn canvas() -> Canvas {
        Canvas::new(1000.0, 800.0)
    }

    fn text_origin(cmd: &DrawCommand) -> Point {
        match cmd {
            DrawCommand::Text { origin, .. } => *origin,
            other => panic!("expected text command, got {other:?}"),
        }
    }

    #[test]
    fn new_canvas_defaults_to_black_text() {
        let canvas = canvas();
        assert_eq!(canvas.text_color, Color::new(0, 0, 0, 255));
        assert_eq!((canvas.width, canvas.height), (1000.0, 800.0));
    }

    #[test]
    fn text_offset_follows_alignment() {
        let canvas = canvas();
        for x in [0.0, 12.5, 640.0] {
            assert_eq!(text_origin(&canvas.text(x, 30.0, 12.0, "a", None)).x, x);
            assert_eq!(
                text_origin(&canvas.text_mid(x, 30.0, 12.0, "a", None)).x,
                x - 500.0
            );
            assert_eq!(
                text_origin(&canvas.text_end(x, 30.0, 12.0, "a", None)).x,
                x - 1000.0
            );
        }
    }

    #[test]
    fn text_uses_canvas_color_unless_overridden() {
        let mut canvas = canvas();
        canvas.text_color = BLUE;

        match canvas.text(0.0, 0.0, 10.0, "hi", None) {
            DrawCommand::Text {
                color,
                layout_width,
                alignment,
                ..
            } => {
                assert_eq!(color, BLUE);
                assert_eq!(layout_width, 1000.0);
                assert_eq!(alignment, TextAlignment::Start);
            }
            other => panic!("unexpected {other:?}"),
        }

        match canvas.text_end(0.0, 0.0, 10.0, "hi", Some(RED)) {
            DrawCommand::Text { color, .. } => assert_eq!(color, RED),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn rect_spans_origin_plus_size() {
        let rect = canvas().rect(10.0, 20.0, 30.0, 40.0, RED).rect().unwrap();
        assert_eq!(rect, Rect::from_corners(10.0, 20.0, 40.0, 60.0));
    }

    #[test]
    fn center_rect_matches_corner_rect() {
        let canvas = canvas();
        let (x, y, w, h) = (15.0, -5.0, 50.0, 24.0);
        assert_eq!(
            canvas.rect(x, y, w, h, RED),
            canvas.center_rect(x + w / 2.0, y + h / 2.0, w, h, RED)
        );
    }

    #[test]
    fn lines_are_offset_rects() {
        let canvas = canvas();
        let (x, y, w, h) = (100.0, 50.0, 4.0, 300.0);
        assert_eq!(
            canvas.vline(x, y, w, h, WHITE),
            canvas.rect(x - w / 2.0, y, w, h, WHITE)
        );
        assert_eq!(
            canvas.hline(x, y, h, w, WHITE),
            canvas.rect(x, y - w / 2.0, h, w, WHITE)
        );
    }

    #[test]
    fn grid_emits_rows_then_columns() {
        let canvas = canvas();
        let commands = canvas.grid(100.0, 100.0, 2.0, 10.0, BLUE).unwrap();
        assert_eq!(commands.len(), 22);

        for (i, cmd) in commands[..11].iter().enumerate() {
            let y = i as f64 * 10.0;
            assert_eq!(*cmd, canvas.hline(0.0, y, 100.0, 2.0, BLUE));
        }
        for (i, cmd) in commands[11..].iter().enumerate() {
            let x = i as f64 * 10.0;
            assert_eq!(*cmd, canvas.vline(x, 0.0, 2.0, 100.0, BLUE));
        }
    }

    #[test]
    fn grid_rejects_out_of_range_intervals() {
        let canvas = canvas();
        for bad in [0.0, -3.0, f64::NAN, f64::INFINITY, 1e10] {
            assert!(matches!(
                canvas.grid(100.0, 100.0, 1.0, bad, RED),
                Err(CanvasError::InvalidGridInterval(_))
            ));
        }
    }

    #[test]
    fn natural_size_image_is_centered() {
        let image = DecodedImage::new(RgbaImage::new(200, 100));
        let cmd = canvas().center_decoded_image(&image, 300.0, 200.0, 0, 0, 100.0);
        assert_eq!(
            cmd.rect().unwrap(),
            Rect::from_corners(200.0, 150.0, 400.0, 250.0)
        );
    }

    #[test]
    fn explicit_image_size_is_scaled() {
        let image = DecodedImage::new(RgbaImage::new(200, 100));
        let rect = canvas()
            .center_decoded_image(&image, 0.0, 0.0, 40, 60, 50.0)
            .rect()
            .unwrap();
        assert_eq!(rect, Rect::from_corners(-10.0, -15.0, 10.0, 15.0));
    }

    #[test]
    fn natural_size_respects_scale() {
        let image = DecodedImage::new(RgbaImage::new(200, 100));
        let rect = canvas()
            .center_decoded_image(&image, 100.0, 100.0, 0, 0, 25.0)
            .rect()
            .unwrap();
        assert_eq!(rect.width(), 50.0);
        assert_eq!(rect.height(), 25.0);
        assert_eq!(rect.center(), Point::new(100.0, 100.0));
    }

    #[test]
    fn missing_image_reports_error_and_draws_nothing() {
        let canvas = canvas();
        let mut list = DrawList::new();
        match canvas.center_image("/nonexistent/plotcanvas.png", 0.0, 0.0, 0, 0, 100.0) {
            Ok(cmd) => list.push(cmd),
            Err(err) => assert!(matches!(err, CanvasError::ImageOpen { .. })),
        }
        assert!(list.is_empty());
    }
}
