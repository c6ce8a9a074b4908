use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use tinyray_renderer::{demo_scene, try_render};

mod cli;

use cli::Args;

/// Initialize the logger with the specified level
fn init_logger(level: LevelFilter) {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logger(args.log_level.into());

    log::info!("Starting tinyray");

    let mut scene = demo_scene();
    if args.no_floor {
        scene.set_checkerboard(None);
    }

    let camera = args.camera();
    let config = args.render_config();

    let image = try_render(&camera, &scene, &config).context("Failed to render scene")?;
    image
        .save_png(&args.output)
        .with_context(|| format!("Failed to write {}", args.output))?;

    Ok(())
}
