use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use pyrite_core::{load_scene, validate, SceneDescription};
use pyrite_renderer::{render, render_parallel, save_image, Camera, Scene};
use rand::rngs::StdRng;
use rand::SeedableRng;

mod cli;

use cli::Args;

/// Initialize the logger; RUST_LOG directives override `level`.
fn init_logger(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.log_level.into());

    let mut desc = match &args.scene {
        Some(path) => load_scene(path)
            .with_context(|| format!("Failed to load scene {}", path.display()))?,
        None => {
            log::info!("No scene given, using the reference scene");
            SceneDescription::reference()
        }
    };
    args.apply_overrides(&mut desc);
    validate(&desc).context("Invalid scene after command line overrides")?;

    if args.dump_scene {
        println!("{}", serde_json::to_string_pretty(&desc)?);
        return Ok(());
    }

    if args.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(args.threads)
            .build_global()
            .context("Failed to configure the render thread pool")?;
    }

    let start = Instant::now();
    let scene = Scene::from_description(&desc);
    let camera = Camera::from_settings(&desc.camera);
    log::debug!("Scene built in {:?}", start.elapsed());

    log::info!(
        "Rendering {}x{} @ {} spp, max depth {}, {} spheres",
        desc.camera.width,
        desc.camera.height,
        desc.render.samples_per_pixel,
        desc.render.max_depth,
        scene.len()
    );

    let start = Instant::now();
    let image = if args.single_threaded {
        let mut rng = StdRng::seed_from_u64(desc.render.seed);
        render(&camera, &scene, &desc.render, &mut rng)
    } else {
        render_parallel(&camera, &scene, &desc.render)
    };
    log::info!("Rendered in {:?}", start.elapsed());

    save_image(&image, &args.output)
        .with_context(|| format!("Failed to save {}", args.output.display()))?;

    Ok(())
}
