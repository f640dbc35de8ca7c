//! End-to-end scenarios: a scene driven by the engine, and the gameplay
//! properties that must hold over a long session.

use asteroids::{AsteroidScene, GameConfig, ScriptedPilot, Session, ShipControls};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_engine::foundation::math::Vec2;
use rust_engine::input::KeyCode;
use rust_engine::pool::Poolable;
use rust_engine::{Application, Engine, EngineError};
use std::path::PathBuf;

fn asset_dir(name: &str, sheet_frames: u32) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("asteroids_it_{}_{}", name, std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    image::RgbaImage::new(64, 64).save(dir.join("vessel.png")).unwrap();
    image::RgbaImage::new(96 * sheet_frames, 96)
        .save(dir.join("asteroid_sprite.png"))
        .unwrap();
    dir
}

fn config_for(dir: &PathBuf) -> GameConfig {
    let mut config = GameConfig::default();
    config.engine.asset_root = dir.display().to_string();
    config.gameplay.rng_seed = Some(17);
    config
}

fn session() -> Session {
    Session::with_rng(
        &GameConfig::default(),
        Vec2::new(64.0, 64.0),
        Vec2::new(96.0, 96.0),
        StdRng::seed_from_u64(8),
    )
    .unwrap()
}

#[test]
fn engine_spawns_on_the_timer() {
    rust_engine::foundation::logging::init_for_tests();
    let dir = asset_dir("timer", 3);
    let mut config = config_for(&dir);
    config.engine.max_frames = Some(96);

    let mut scene = AsteroidScene::new(config.clone());
    Engine::run(config.engine, &mut scene).unwrap();

    let session = scene.session().unwrap();
    assert_eq!(session.stats().frames, 96);
    assert_eq!(session.stats().waves, 1);
    let active = session.asteroids().count_active();
    assert!((2..=6).contains(&active));
    assert!(scene.debug_bounds().shapes().len() > 1);

    std::fs::remove_dir_all(dir).ok();
}

#[test]
fn missing_assets_abort_the_session() {
    let dir = std::env::temp_dir().join(format!("asteroids_it_empty_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let config = config_for(&dir);

    let mut scene = AsteroidScene::new(config.clone());
    let result = Engine::run(config.engine, &mut scene);
    assert!(matches!(result, Err(EngineError::AssetError(_))));
    assert!(scene.session().is_none());

    std::fs::remove_dir_all(dir).ok();
}

#[test]
fn sprite_sheet_needs_three_frames() {
    let dir = asset_dir("short_sheet", 2);
    let config = config_for(&dir);

    let mut scene = AsteroidScene::new(config.clone());
    assert!(Engine::run(config.engine, &mut scene).is_err());

    std::fs::remove_dir_all(dir).ok();
}

#[test]
fn held_keys_reach_the_ship() {
    let dir = asset_dir("keys", 3);
    let config = config_for(&dir);

    let mut scene = AsteroidScene::new(config.clone());
    let mut engine = Engine::new(config.engine).unwrap();
    engine.start(&mut scene).unwrap();

    engine.input_mut().handle_key_input(KeyCode::Left, true);
    engine.input_mut().handle_key_input(KeyCode::Right, true);
    engine.input_mut().handle_key_input(KeyCode::Space, true);
    engine.step(&mut scene).unwrap();
    engine.step(&mut scene).unwrap();

    let ship = scene.session().unwrap().ship();
    assert_eq!(ship.body.velocity, Vec2::new(500.0, 0.0));
    assert_eq!(ship.ammo, 8);

    scene.cleanup(&mut engine);
    assert!(engine.time().is_empty());
    std::fs::remove_dir_all(dir).ok();
}

#[test]
fn scripted_pilot_plays_a_full_minute() {
    let dir = asset_dir("pilot", 3);
    let config = config_for(&dir);

    let mut scene = AsteroidScene::new(config.clone());
    let mut engine = Engine::new(config.engine).unwrap();
    engine.start(&mut scene).unwrap();

    let pilot = ScriptedPilot::default();
    let mut last_life = u32::MAX;
    let mut last_ammo = u32::MAX;
    for frame in 0..3600 {
        pilot.drive(engine.input_mut(), frame);
        engine.step(&mut scene).unwrap();

        let session = scene.session().unwrap();
        let ship = session.ship();
        assert!(ship.life <= last_life);
        assert!(ship.ammo <= last_ammo);
        assert!(session.asteroids().count_active() <= 50);
        assert_eq!(session.life_display().text(), format!("Life: {}", ship.life));
        last_life = ship.life;
        last_ammo = ship.ammo;
    }

    let stats = scene.session().unwrap().stats();
    assert!(stats.waves >= 37);
    assert!(stats.recycled_off_screen > 0);

    std::fs::remove_dir_all(dir).ok();
}

#[test]
fn velocity_is_always_zero_or_full_speed() {
    let mut session = session();
    let mut rng = StdRng::seed_from_u64(42);

    for frame in 0..2000 {
        if frame % 96 == 0 {
            session.on_spawn_timer();
        }
        let controls = ShipControls {
            left: rng.gen(),
            right: rng.gen(),
            up: rng.gen(),
            down: rng.gen(),
            fire: rng.gen(),
        };
        session.update(&controls, 1.0 / 60.0);

        let velocity = session.ship().body.velocity;
        for axis in [velocity.x, velocity.y] {
            assert!(axis == 0.0 || axis.abs() == 500.0, "unexpected speed {axis}");
        }
    }
}

#[test]
fn last_life_scenario() {
    let mut config = GameConfig::default();
    config.gameplay.starting_lives = 1;
    let mut session = Session::with_rng(
        &config,
        Vec2::new(64.0, 64.0),
        Vec2::new(96.0, 96.0),
        StdRng::seed_from_u64(1),
    )
    .unwrap();

    let key = session.spawn_asteroids(1).spawned[0];
    session.on_overlap(key);
    assert_eq!(session.ship().life, 0);
    assert_eq!(session.life_display().text(), "Life: 0");

    session.on_overlap(key);
    assert_eq!(session.ship().life, 0);

    // The recycled asteroid goes back into play on the next request
    let again = session.spawn_asteroids(1).spawned[0];
    assert_eq!(again, key);
    assert!(session.asteroids().get_member(key).unwrap().is_active());
}
