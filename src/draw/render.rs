//! Cairo-based rendering of drawing commands.

use super::canvas::Canvas;
use super::color::Color;
use super::command::{DrawCommand, TextAlignment};
use super::font::FontSet;
use super::image::DecodedImage;
use super::list::DrawList;
use crate::error::CanvasError;
use crate::util::{Point, Rect};
use std::fs::File;
use std::path::Path;

/// Renders every command of a list in order (first command = bottom layer).
pub fn render_commands(ctx: &cairo::Context, list: &DrawList) -> Result<(), CanvasError> {
    log::debug!("Rendering {} draw commands", list.len());
    for command in list {
        render_command(ctx, command)?;
    }
    Ok(())
}

/// Renders a single command to a Cairo context.
pub fn render_command(ctx: &cairo::Context, command: &DrawCommand) -> Result<(), CanvasError> {
    match command {
        DrawCommand::Fill { rect, color } => render_fill(ctx, rect, *color),
        DrawCommand::Text {
            origin,
            layout_width,
            size,
            alignment,
            text,
            color,
            fonts,
        } => render_text(
            ctx,
            *origin,
            *layout_width,
            *size,
            *alignment,
            text,
            *color,
            fonts,
        ),
        DrawCommand::Image { image, rect } => render_image(ctx, image, rect),
    }
}

/// Fills a rectangle with a solid color.
pub fn render_fill(ctx: &cairo::Context, rect: &Rect, color: Color) -> Result<(), CanvasError> {
    color.apply(ctx);
    ctx.rectangle(rect.min.x, rect.min.y, rect.width(), rect.height());
    ctx.fill()?;
    Ok(())
}

/// Lays out and paints text with Pango.
///
/// The coordinate frame is moved to `origin` for the duration of the layout
/// and restored afterwards. The layout box is `layout_width` wide and
/// `alignment` positions each line inside it.
#[allow(clippy::too_many_arguments)]
pub fn render_text(
    ctx: &cairo::Context,
    origin: Point,
    layout_width: f64,
    size: f64,
    alignment: TextAlignment,
    text: &str,
    color: Color,
    fonts: &FontSet,
) -> Result<(), CanvasError> {
    ctx.save()?;
    ctx.translate(origin.x, origin.y);

    // Grayscale antialiasing; subpixel fringes on transparent surfaces
    ctx.set_antialias(cairo::Antialias::Best);

    let layout = pangocairo::functions::create_layout(ctx);

    let mut font_desc = pango::FontDescription::from_string(&fonts.to_pango_string(size));
    font_desc.set_absolute_size(size * pango::SCALE as f64);
    layout.set_font_description(Some(&font_desc));

    if layout_width > 0.0 {
        layout.set_width((layout_width * pango::SCALE as f64).round() as i32);
    }
    layout.set_alignment(alignment.to_pango());
    layout.set_text(text);

    ctx.move_to(0.0, 0.0);
    color.apply(ctx);
    pangocairo::functions::show_layout(ctx, &layout);

    ctx.restore()?;
    Ok(())
}

/// Paints a decoded image scaled into `rect`.
pub fn render_image(
    ctx: &cairo::Context,
    image: &DecodedImage,
    rect: &Rect,
) -> Result<(), CanvasError> {
    if image.width() == 0 || image.height() == 0 || !rect.is_valid() {
        return Ok(());
    }

    let surface = image_surface(image)?;
    let scale_x = rect.width() / image.width() as f64;
    let scale_y = rect.height() / image.height() as f64;

    ctx.save()?;
    ctx.translate(rect.min.x, rect.min.y);
    ctx.scale(scale_x, scale_y);
    // Pad so edge pixels are not blended with transparency when upscaled
    let pattern = cairo::SurfacePattern::create(&surface);
    pattern.set_extend(cairo::Extend::Pad);
    ctx.set_source(&pattern)?;
    ctx.rectangle(0.0, 0.0, image.width() as f64, image.height() as f64);
    ctx.clip();
    ctx.paint()?;
    ctx.restore()?;
    Ok(())
}

/// Converts straight RGBA pixels into a premultiplied ARGB32 Cairo surface.
fn image_surface(image: &DecodedImage) -> Result<cairo::ImageSurface, CanvasError> {
    let width = image.width() as i32;
    let height = image.height() as i32;
    let stride = cairo::Format::ARgb32.stride_for_width(image.width())?;

    let mut buf = vec![0u8; stride as usize * height as usize];
    for (y, row) in image.pixels().rows().enumerate() {
        let line = &mut buf[y * stride as usize..];
        for (x, pixel) in row.enumerate() {
            let [r, g, b, a] = pixel.0;
            let premultiply = |c: u8| ((c as u16 * a as u16 + 127) / 255) as u8;
            // Native-endian ARGB32: little-endian hosts store B, G, R, A.
            let argb = u32::from_be_bytes([a, premultiply(r), premultiply(g), premultiply(b)]);
            line[x * 4..x * 4 + 4].copy_from_slice(&argb.to_ne_bytes());
        }
    }

    let surface =
        cairo::ImageSurface::create_for_data(buf, cairo::Format::ARgb32, width, height, stride)?;
    Ok(surface)
}

/// Creates an image surface the size of `canvas`, filled with `background`.
pub fn canvas_surface(
    canvas: &Canvas,
    background: Color,
) -> Result<(cairo::ImageSurface, cairo::Context), CanvasError> {
    let width = canvas.width.ceil().max(1.0) as i32;
    let height = canvas.height.ceil().max(1.0) as i32;

    let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
    let ctx = cairo::Context::new(&surface)?;

    background.apply(&ctx);
    ctx.set_operator(cairo::Operator::Source);
    ctx.paint()?;
    ctx.set_operator(cairo::Operator::Over);

    Ok((surface, ctx))
}

/// Rasterizes `list` over `background` and writes the result as a PNG file.
pub fn render_to_png(
    canvas: &Canvas,
    background: Color,
    list: &DrawList,
    path: &Path,
) -> Result<(), CanvasError> {
    let (surface, ctx) = canvas_surface(canvas, background)?;
    render_commands(&ctx, list)?;
    drop(ctx);

    surface.flush();
    let mut file = File::create(path)?;
    surface.write_to_png(&mut file)?;

    log::info!(
        "Wrote {}x{} PNG to {}",
        surface.width(),
        surface.height(),
        path.display()
    );
    Ok(())
}
