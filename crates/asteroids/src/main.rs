//! Headless asteroids runner
//!
//! Loads `asteroids.toml` (or the file named by `ASTEROIDS_CONFIG`) if it
//! exists, then plays a scripted session and logs how it went.

use asteroids::{AsteroidScene, GameConfig, ScriptedPilot};
use rust_engine::config::Config;
use rust_engine::{Application, Engine};

/// Frames to play when the configuration sets no limit (one minute at 60Hz)
const DEFAULT_FRAMES: u64 = 60 * 60;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let path = std::env::var("ASTEROIDS_CONFIG").unwrap_or_else(|_| "asteroids.toml".to_string());
    let config = GameConfig::load_or_default(&path)?;
    config.validate()?;

    let mut engine_config = config.engine.clone();
    let frames = *engine_config.max_frames.get_or_insert(DEFAULT_FRAMES);

    let mut scene = AsteroidScene::new(config);
    let mut engine = Engine::new(engine_config)?;
    engine.start(&mut scene)?;

    let pilot = ScriptedPilot::default();
    let mut frame = 0;
    while engine.is_running() && frame < frames {
        pilot.drive(engine.input_mut(), frame);
        engine.step(&mut scene)?;
        frame += 1;
    }

    scene.cleanup(&mut engine);
    Ok(())
}
