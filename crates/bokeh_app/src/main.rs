mod scene;

use anyhow::{Context, Result};
use bokeh_renderer::RenderSettings;
use rand::rngs::StdRng;
use rand::SeedableRng;

const SETTINGS_PATH: &str = "bokeh.json";

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Starting bokeh");

    let settings = RenderSettings::load_or_default(SETTINGS_PATH)
        .with_context(|| format!("Failed to load {}", SETTINGS_PATH))?;

    let mut rng = match settings.scene_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let world = scene::final_scene(&mut rng);
    log::info!("Scene built with {} objects", world.len());

    let mut camera = settings.camera();
    camera
        .render_to_file(&world, &settings.output)
        .with_context(|| format!("Failed to write {}", settings.output.display()))?;

    log::info!("Done");
    Ok(())
}
