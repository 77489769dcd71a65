use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use glint_renderer::{render_scene, CancelToken};

/// Render a GLINT scene file to a PNG.
#[derive(Parser)]
#[command(name = "glint", version)]
struct Args {
    /// Scene description (JSON)
    scene: PathBuf,

    /// Output image path
    #[arg(short, long, default_value = "render.png")]
    output: PathBuf,

    /// Image width in pixels
    #[arg(long, default_value_t = 800)]
    width: usize,

    /// Image height in pixels
    #[arg(long, default_value_t = 450)]
    height: usize,

    /// Override the scene's recursion depth
    #[arg(long)]
    depth: Option<u32>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();

    let mut scene = glint_core::load_scene(&args.scene)
        .with_context(|| format!("failed to load {}", args.scene.display()))?;
    if let Some(depth) = args.depth {
        scene.settings.recursion_depth = depth;
    }

    // Logging every row drowns the terminal on wide images
    let update_cycle = (10_000 / args.width.max(1)).max(1);
    let height = args.height;

    let start = Instant::now();
    let buffer = render_scene(
        &scene,
        args.width,
        args.height,
        |y| {
            if y % update_cycle == 0 || y + 1 == height {
                log::info!(
                    "rendering... row {}/{} ({:.0}%)",
                    y + 1,
                    height,
                    100.0 * (y + 1) as f64 / height as f64
                );
            }
        },
        &CancelToken::new(),
    );
    log::info!("render finished in {:.2?}", start.elapsed());

    let image = image::RgbaImage::from_raw(
        args.width as u32,
        args.height as u32,
        buffer.to_rgba8(),
    )
    .context("frame buffer dimensions do not match image")?;
    // Row 0 of the buffer is the bottom of the frame; PNG wants top-down
    let image = image::imageops::flip_vertical(&image);
    image
        .save(&args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    log::info!("wrote {}", args.output.display());
    Ok(())
}
