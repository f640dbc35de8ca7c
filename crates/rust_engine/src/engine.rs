//! Core engine implementation

use crate::{
    application::Application,
    assets::AssetManager,
    foundation::time::{FrameClock, TimerEvents},
    input::InputManager,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main engine struct
///
/// The engine owns the session-lifetime subsystems and drives the
/// application's lifecycle hooks from a single fixed-step loop.
pub struct Engine {
    /// Asset manifest populated during preload
    pub assets: AssetManager,

    /// Keyboard state, polled by the application once per frame
    pub input: InputManager,

    /// Frame timing
    clock: FrameClock,

    /// Recurring and one-shot timer events
    time: TimerEvents,

    /// Engine configuration
    config: EngineConfig,

    /// Whether preload and create have completed
    started: bool,

    /// Whether the engine should continue running
    running: bool,
}

impl Engine {
    /// Create a new engine instance
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        log::info!(
            "Initializing engine ({}x{}, step {:.4}s)...",
            config.width,
            config.height,
            config.time_step
        );

        config.validate()?;

        let assets = AssetManager::new(&config.asset_root);
        let clock = FrameClock::fixed(config.time_step);

        Ok(Self {
            assets,
            input: InputManager::new(),
            clock,
            time: TimerEvents::new(),
            config,
            started: false,
            running: true,
        })
    }

    /// Run the engine main loop with the given application
    ///
    /// Stops when the configured frame limit is reached or [`Engine::quit`]
    /// is called from inside a hook.
    pub fn run<T: Application>(config: EngineConfig, app: &mut T) -> Result<(), EngineError> {
        let mut engine = Self::new(config)?;
        engine.start(app)?;

        log::info!("Starting main loop...");

        while engine.running {
            if let Some(limit) = engine.config.max_frames {
                if engine.clock.frame_count() >= limit {
                    break;
                }
            }
            engine.step(app)?;
        }

        app.cleanup(&mut engine);

        log::info!(
            "Engine shutdown complete after {} frames",
            engine.clock.frame_count()
        );
        Ok(())
    }

    /// Run the one-shot lifecycle stages: preload, then create
    ///
    /// Asset failures are fatal for the session.
    pub fn start<T: Application>(&mut self, app: &mut T) -> Result<(), EngineError> {
        if self.started {
            return Err(EngineError::InitializationFailed(
                "engine already started".to_string(),
            ));
        }

        app.preload(&mut self.assets)
            .map_err(|e| EngineError::AssetError(format!("App preload: {e}")))?;
        log::info!("Preload complete: {} asset(s)", self.assets.len());

        app.create(self)
            .map_err(|e| EngineError::ApplicationError(format!("App create: {e}")))?;

        self.started = true;
        Ok(())
    }

    /// Advance the session by one frame
    ///
    /// Timers that came due during this frame are dispatched before the
    /// application's update hook.
    pub fn step<T: Application>(&mut self, app: &mut T) -> Result<(), EngineError> {
        if !self.started {
            return Err(EngineError::InitializationFailed(
                "step called before start".to_string(),
            ));
        }

        let delta_time = self.clock.tick();

        for timer in self.time.advance(delta_time) {
            app.on_timer(self, timer)
                .map_err(|e| EngineError::ApplicationError(format!("App timer: {e}")))?;
        }

        app.update(self, delta_time)
            .map_err(|e| EngineError::ApplicationError(format!("App update: {e}")))?;

        log::trace!("Frame {} complete", self.clock.frame_count());
        Ok(())
    }

    /// Request engine shutdown
    pub fn quit(&mut self) {
        log::info!("Engine shutdown requested");
        self.running = false;
    }

    /// Whether the main loop is still running
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Frame clock
    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    /// Timer events
    pub fn time(&self) -> &TimerEvents {
        &self.time
    }

    /// Mutable access to timer events, used to register recurring callbacks
    pub fn time_mut(&mut self) -> &mut TimerEvents {
        &mut self.time
    }

    /// Get the input manager
    pub fn input(&self) -> &InputManager {
        &self.input
    }

    /// Get mutable access to the input manager
    pub fn input_mut(&mut self) -> &mut InputManager {
        &mut self.input
    }
}

/// Engine configuration
///
/// Mirrors the settings a browser arcade host would take as a literal
/// configuration object: canvas, colours and physics flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Canvas width in pixels
    pub width: u32,

    /// Canvas height in pixels
    pub height: u32,

    /// Background colour name or hex string
    pub background_color: String,

    /// Identifier of the host element the canvas is attached to
    pub parent: String,

    /// Arcade physics settings
    pub physics: PhysicsConfig,

    /// Fixed simulation step in seconds
    pub time_step: f32,

    /// Stop after this many frames (None = run until quit)
    pub max_frames: Option<u64>,

    /// Directory asset paths are resolved against
    pub asset_root: String,
}

/// Arcade physics configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Global gravity applied to every body (units/sec²)
    pub gravity: (f32, f32),

    /// Collect body bounds for debug drawing
    pub debug: bool,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: (0.0, 0.0),
            debug: true,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
            background_color: "black".to_string(),
            parent: "asteroids-game".to_string(),
            physics: PhysicsConfig::default(),
            time_step: 1.0 / 60.0,
            max_frames: None,
            asset_root: "assets".to_string(),
        }
    }
}

impl EngineConfig {
    /// Check that the configuration can drive a session
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.width == 0 || self.height == 0 {
            return Err(EngineError::ConfigError(format!(
                "canvas must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        if !(self.time_step.is_finite() && self.time_step > 0.0) {
            return Err(EngineError::ConfigError(format!(
                "time step must be positive, got {}",
                self.time_step
            )));
        }
        Ok(())
    }
}

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Initialization error
    #[error("Engine initialization failed: {0}")]
    InitializationFailed(String),

    /// Asset system error
    #[error("Asset system error: {0}")]
    AssetError(String),

    /// Application error
    #[error("Application error: {0}")]
    ApplicationError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::AppError;
    use crate::foundation::time::{TimerConfig, TimerId};

    #[derive(Default)]
    struct Recorder {
        preloaded: bool,
        created: bool,
        updates: u32,
        timer: Option<TimerId>,
        timer_hits: u32,
        cleaned_up: bool,
        order: Vec<&'static str>,
    }

    impl Application for Recorder {
        fn preload(&mut self, _assets: &mut AssetManager) -> Result<(), AppError> {
            self.preloaded = true;
            self.order.push("preload");
            Ok(())
        }

        fn create(&mut self, engine: &mut Engine) -> Result<(), AppError> {
            self.created = true;
            self.order.push("create");
            self.timer = Some(engine.time_mut().add_event(TimerConfig::looping(0.05)));
            Ok(())
        }

        fn update(&mut self, _engine: &mut Engine, _delta_time: f32) -> Result<(), AppError> {
            self.updates += 1;
            self.order.push("update");
            Ok(())
        }

        fn on_timer(&mut self, _engine: &mut Engine, timer: TimerId) -> Result<(), AppError> {
            assert_eq!(Some(timer), self.timer);
            self.timer_hits += 1;
            self.order.push("timer");
            Ok(())
        }

        fn cleanup(&mut self, _engine: &mut Engine) {
            self.cleaned_up = true;
        }
    }

    struct FailingPreload;

    impl Application for FailingPreload {
        fn preload(&mut self, assets: &mut AssetManager) -> Result<(), AppError> {
            assets.load_image("missing", "does/not/exist.png")?;
            Ok(())
        }

        fn create(&mut self, _engine: &mut Engine) -> Result<(), AppError> {
            panic!("create must not run after a failed preload");
        }

        fn update(&mut self, _engine: &mut Engine, _delta_time: f32) -> Result<(), AppError> {
            Ok(())
        }
    }

    fn limited(frames: u64) -> EngineConfig {
        EngineConfig {
            time_step: 0.01,
            max_frames: Some(frames),
            ..EngineConfig::default()
        }
    }

    #[test]
    fn test_run_drives_lifecycle_in_order() {
        let mut app = Recorder::default();
        Engine::run(limited(10), &mut app).unwrap();

        assert!(app.preloaded);
        assert!(app.created);
        assert!(app.cleaned_up);
        assert_eq!(app.updates, 10);
        assert_eq!(&app.order[..2], &["preload", "create"]);
    }

    #[test]
    fn test_timers_fire_before_update() {
        let mut app = Recorder::default();
        Engine::run(limited(10), &mut app).unwrap();

        // 10 frames of 10ms with a 50ms loop fires twice
        assert_eq!(app.timer_hits, 2);
        let first_timer = app.order.iter().position(|s| *s == "timer").unwrap();
        assert_eq!(app.order[first_timer + 1], "update");
    }

    #[test]
    fn test_missing_asset_is_fatal() {
        let mut app = FailingPreload;
        let result = Engine::run(limited(1), &mut app);
        assert!(matches!(result, Err(EngineError::AssetError(_))));
    }

    #[test]
    fn test_step_requires_start() {
        let mut engine = Engine::new(EngineConfig::default()).unwrap();
        let mut app = Recorder::default();
        assert!(engine.step(&mut app).is_err());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = EngineConfig {
            width: 0,
            ..EngineConfig::default()
        };
        assert!(matches!(Engine::new(config), Err(EngineError::ConfigError(_))));
    }

    #[test]
    fn test_default_config_matches_arcade_canvas() {
        let config = EngineConfig::default();
        assert_eq!((config.width, config.height), (1200, 800));
        assert_eq!(config.background_color, "black");
        assert_eq!(config.physics.gravity, (0.0, 0.0));
        assert!(config.physics.debug);
    }
}
