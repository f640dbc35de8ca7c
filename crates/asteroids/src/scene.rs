//! The game scene: wires the session into the engine's lifecycle

use rust_engine::assets::{AssetError, AssetManager};
use rust_engine::debug::DebugBounds;
use rust_engine::foundation::math::Vec2;
use rust_engine::foundation::time::{TimerConfig, TimerId};
use rust_engine::{AppError, Application, Engine};

use crate::config::GameConfig;
use crate::controls::{ControlBindings, ShipControls};
use crate::session::Session;

/// Asteroid-dodging scene
pub struct AsteroidScene {
    config: GameConfig,
    bindings: ControlBindings,
    session: Option<Session>,
    spawn_timer: Option<TimerId>,
    debug: DebugBounds,
}

impl AsteroidScene {
    /// Create a scene; nothing is built until the engine starts it
    pub fn new(config: GameConfig) -> Self {
        let debug = DebugBounds::new(config.engine.physics.debug);
        Self {
            config,
            bindings: ControlBindings::default(),
            session: None,
            spawn_timer: None,
            debug,
        }
    }

    /// Use different keys for the ship controls
    pub fn with_bindings(mut self, bindings: ControlBindings) -> Self {
        self.bindings = bindings;
        self
    }

    /// The running session, once created
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Mutable access to the running session
    pub fn session_mut(&mut self) -> Option<&mut Session> {
        self.session.as_mut()
    }

    /// Body outlines collected on the last frame
    pub fn debug_bounds(&self) -> &DebugBounds {
        &self.debug
    }

    /// The recurring spawn timer, once registered
    pub fn spawn_timer(&self) -> Option<TimerId> {
        self.spawn_timer
    }

    fn session_or_err(&mut self) -> Result<&mut Session, AppError> {
        self.session
            .as_mut()
            .ok_or_else(|| AppError::GameLogic("scene used before create".to_string()))
    }
}

impl Application for AsteroidScene {
    fn preload(&mut self, assets: &mut AssetManager) -> Result<(), AppError> {
        let declared = &self.config.assets;
        assets.load_image(&declared.ship_key, &declared.ship_path)?;
        let sheet = assets.load_spritesheet(
            &declared.asteroid_key,
            &declared.asteroid_path,
            declared.frame_width,
            declared.frame_height,
        )?;

        let needed = self.config.gameplay.asteroid_frames;
        if sheet.frame_count() < needed {
            return Err(AssetError::InvalidSpriteSheet(format!(
                "'{}' has {} frame(s), {} needed",
                declared.asteroid_key,
                sheet.frame_count(),
                needed
            ))
            .into());
        }
        Ok(())
    }

    fn create(&mut self, engine: &mut Engine) -> Result<(), AppError> {
        let ship = engine.assets.image(&self.config.assets.ship_key)?;
        let sheet = engine.assets.spritesheet(&self.config.assets.asteroid_key)?;

        // The engine owns canvas and physics settings for this run
        self.config.engine = engine.config().clone();

        let session = Session::new(
            &self.config,
            Vec2::new(ship.width as f32, ship.height as f32),
            Vec2::new(sheet.frame_width as f32, sheet.frame_height as f32),
        )?;

        let timer = engine
            .time_mut()
            .add_event(TimerConfig::looping_millis(self.config.gameplay.spawn_interval_ms));

        self.session = Some(session);
        self.spawn_timer = Some(timer);
        log::info!(
            "Scene created on a {}x{} canvas, spawning every {}ms",
            self.config.engine.width,
            self.config.engine.height,
            self.config.gameplay.spawn_interval_ms
        );
        Ok(())
    }

    fn update(&mut self, engine: &mut Engine, delta_time: f32) -> Result<(), AppError> {
        let controls = ShipControls::capture(engine.input(), &self.bindings);
        let session = self.session_or_err()?;
        let report = session.update(&controls, delta_time);

        if !report.collisions.is_empty() {
            log::trace!("{} collision(s) this frame", report.collisions.len());
        }

        if self.debug.is_enabled() {
            if let Some(session) = &self.session {
                session.collect_debug_bounds(&mut self.debug);
                log::trace!("{} debug outline(s)", self.debug.shapes().len());
            }
        }
        Ok(())
    }

    fn on_timer(&mut self, _engine: &mut Engine, timer: TimerId) -> Result<(), AppError> {
        if self.spawn_timer != Some(timer) {
            return Ok(());
        }
        self.session_or_err()?.on_spawn_timer();
        Ok(())
    }

    fn cleanup(&mut self, engine: &mut Engine) {
        if let Some(timer) = self.spawn_timer.take() {
            engine.time_mut().remove_event(timer);
        }
        if let Some(session) = &self.session {
            let ship = session.ship();
            log::info!(
                "Session ended: life {}, ammo {}, score {}, {:?}",
                ship.life,
                ship.ammo,
                ship.score,
                session.stats()
            );
        }
    }
}
