use anyhow::Context;
use clap::Parser;
use plotcanvas::config::Config;
use plotcanvas::draw::{DrawList, render_to_png};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "plotcanvas")]
#[command(
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("PLOTCANVAS_GIT_HASH"), ")"),
    about = "Render canvas drawing primitives to a PNG image"
)]
struct Cli {
    /// Output PNG path
    #[arg(long, short = 'o', value_name = "FILE")]
    output: PathBuf,

    /// Config file (defaults to ~/.config/plotcanvas/config.toml)
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Canvas width, overriding the config file
    #[arg(long)]
    width: Option<f64>,

    /// Canvas height, overriding the config file
    #[arg(long)]
    height: Option<f64>,

    /// Draw the configured grid over the whole canvas
    #[arg(long, short = 'g')]
    grid: bool,

    /// Title text placed near the top of the canvas
    #[arg(long, short = 't')]
    title: Option<String>,

    /// Image centered on the canvas (png, jpeg or gif)
    #[arg(long, short = 'i', value_name = "FILE")]
    image: Option<PathBuf>,

    /// Target image width; leave both dimensions at 0 for the natural size
    #[arg(long, default_value_t = 0)]
    image_width: u32,

    /// Target image height; leave both dimensions at 0 for the natural size
    #[arg(long, default_value_t = 0)]
    image_height: u32,

    /// Image scale in percent
    #[arg(long, short = 's', default_value_t = 100.0)]
    scale: f64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(width) = cli.width {
        config.canvas.width = width;
    }
    if let Some(height) = cli.height {
        config.canvas.height = height;
    }
    config.validate_and_clamp();

    let canvas = config.canvas();
    let mut list = DrawList::new();

    if cli.grid {
        let grid = &config.grid;
        list.extend(canvas.grid(
            canvas.width,
            canvas.height,
            grid.line_size,
            grid.intervals,
            grid.color.to_color(),
        )?);
    }

    if let Some(path) = &cli.image {
        let image = canvas
            .center_image(
                path,
                canvas.width / 2.0,
                canvas.height / 2.0,
                cli.image_width,
                cli.image_height,
                cli.scale,
            )
            .context("Failed to place image")?;
        list.push(image);
    }

    if let Some(title) = &cli.title {
        let size = config.text.title_size;
        list.push(canvas.text_aligned(
            canvas.width / 2.0,
            size / 2.0,
            size,
            config.text.title_anchor,
            title,
            None,
        ));
    }

    log::info!("Rendering {} commands", list.len());
    render_to_png(
        &canvas,
        config.canvas.background.to_color(),
        &list,
        &cli.output,
    )
    .with_context(|| format!("Failed to render {}", cli.output.display()))?;

    println!("Wrote {}", cli.output.display());
    Ok(())
}
