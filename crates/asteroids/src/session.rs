//! Session state
//!
//! One owned aggregate holds everything a running game needs: the ship, the
//! asteroid pool, the life display and the RNG. The scene (or a test) calls
//! its three entry points; nothing else mutates game state.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rust_engine::config::ConfigError;
use rust_engine::debug::{BoundsKind, DebugBounds};
use rust_engine::foundation::math::Vec2;
use rust_engine::physics::overlapping;
use rust_engine::pool::{ObjectPool, PoolKey};

use crate::components::{Asteroid, LifeDisplay, Ship};
use crate::config::{GameConfig, GameplayConfig};
use crate::controls::ShipControls;
use crate::systems::{self, CollisionOutcome, SpawnReport, SpawnSettings};

/// Running totals for a session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Frames simulated
    pub frames: u64,
    /// Spawn timer firings handled
    pub waves: u64,
    /// Asteroids brought into play
    pub spawned: u64,
    /// Spawn requests dropped because the pool was full
    pub skipped_spawns: u64,
    /// Asteroids recycled after leaving the canvas
    pub recycled_off_screen: u64,
    /// Ship / asteroid collisions that recycled an asteroid
    pub collisions: u64,
    /// Rounds fired
    pub shots: u64,
}

/// What happened during one frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// Asteroids recycled after leaving the canvas
    pub recycled: usize,
    /// A round was spent
    pub fired: bool,
    /// Outcome of every overlap found after the ship moved
    pub collisions: Vec<CollisionOutcome>,
}

/// All state of one game session
pub struct Session {
    gameplay: GameplayConfig,
    canvas: Vec2,
    gravity: Vec2,
    spawn: SpawnSettings,
    ship: Ship,
    asteroids: ObjectPool<Asteroid>,
    life_display: LifeDisplay,
    rng: StdRng,
    stats: SessionStats,
}

impl Session {
    /// Start a session: ship at the canvas center, empty pool, life shown
    ///
    /// Seeds the RNG from `gameplay.rng_seed` when set.
    pub fn new(config: &GameConfig, ship_size: Vec2, asteroid_size: Vec2) -> Result<Self, ConfigError> {
        let rng = config
            .gameplay
            .rng_seed
            .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        Self::with_rng(config, ship_size, asteroid_size, rng)
    }

    /// Start a session with an explicit RNG
    pub fn with_rng(
        config: &GameConfig,
        ship_size: Vec2,
        asteroid_size: Vec2,
        rng: StdRng,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let canvas = Vec2::new(config.engine.width as f32, config.engine.height as f32);
        let gravity = Vec2::new(config.engine.physics.gravity.0, config.engine.physics.gravity.1);
        let ship = Ship::new(canvas * 0.5, ship_size, &config.gameplay);
        let life_display = LifeDisplay::new(&config.hud, ship.life);
        let asteroids = ObjectPool::new(config.gameplay.pool_capacity, move || Asteroid::new(asteroid_size));

        log::info!(
            "Session created: {} lives, {} ammo, pool of {}",
            ship.life,
            ship.ammo,
            asteroids.max_size()
        );

        Ok(Self {
            gameplay: config.gameplay.clone(),
            canvas,
            gravity,
            spawn: SpawnSettings::from_config(&config.gameplay, config.engine.width),
            ship,
            asteroids,
            life_display,
            rng,
            stats: SessionStats::default(),
        })
    }

    /// Advance one frame
    ///
    /// Asteroids fall and leave, the ship is steered from `controls`, fire
    /// spends ammo, the ship moves, and every overlap it ends up in is
    /// handled as a collision.
    pub fn update(&mut self, controls: &ShipControls, delta_time: f32) -> FrameReport {
        let recycled = systems::advance_asteroids(
            &mut self.asteroids,
            self.gameplay.fall_step,
            self.canvas.y,
        );

        systems::steer_ship(&mut self.ship, controls, self.gameplay.ship_speed);
        let fired = systems::fire_weapon(&mut self.ship, controls);

        self.ship.body.integrate(delta_time, self.gravity);

        let hits = overlapping(
            &self.ship.body,
            self.asteroids
                .iter_active()
                .map(|(key, asteroid)| (key, &asteroid.body)),
        );
        let collisions: Vec<CollisionOutcome> = hits
            .into_iter()
            .map(|key| self.on_overlap(key))
            .collect();

        self.stats.frames += 1;
        self.stats.recycled_off_screen += recycled as u64;
        self.stats.shots += u64::from(fired);

        FrameReport {
            recycled,
            fired,
            collisions,
        }
    }

    /// Handle the spawn timer: spawn one wave
    pub fn on_spawn_timer(&mut self) -> SpawnReport {
        let report = systems::spawn_wave(&mut self.asteroids, &mut self.rng, &self.spawn);
        self.stats.waves += 1;
        self.record_spawn(&report);
        report
    }

    /// Spawn exactly `count` asteroids, outside the timer
    pub fn spawn_asteroids(&mut self, count: u32) -> SpawnReport {
        let report = systems::spawn_asteroids(&mut self.asteroids, &mut self.rng, &self.spawn, count);
        self.record_spawn(&report);
        report
    }

    /// Handle the ship overlapping an asteroid
    pub fn on_overlap(&mut self, asteroid: PoolKey) -> CollisionOutcome {
        let outcome = systems::handle_collision(
            &mut self.ship,
            &mut self.asteroids,
            &mut self.life_display,
            asteroid,
        );
        if outcome != CollisionOutcome::Ignored {
            self.stats.collisions += 1;
        }
        outcome
    }

    /// Record the bounds of the ship and every active asteroid
    pub fn collect_debug_bounds(&self, debug: &mut DebugBounds) {
        debug.begin_frame();
        debug.push(self.ship.body.bounds(), BoundsKind::Player);
        for (_, asteroid) in self.asteroids.iter_active() {
            debug.push(asteroid.body.bounds(), BoundsKind::Hazard);
        }
    }

    /// The player ship
    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    /// Mutable access to the ship, for scripted setups
    pub fn ship_mut(&mut self) -> &mut Ship {
        &mut self.ship
    }

    /// The asteroid pool
    pub fn asteroids(&self) -> &ObjectPool<Asteroid> {
        &self.asteroids
    }

    /// Mutable access to the asteroid pool, for scripted setups
    pub fn asteroids_mut(&mut self) -> &mut ObjectPool<Asteroid> {
        &mut self.asteroids
    }

    /// The life counter overlay
    pub fn life_display(&self) -> &LifeDisplay {
        &self.life_display
    }

    /// Canvas size
    pub fn canvas(&self) -> Vec2 {
        self.canvas
    }

    /// Running totals
    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    fn record_spawn(&mut self, report: &SpawnReport) {
        self.stats.spawned += report.spawned.len() as u64;
        self.stats.skipped_spawns += u64::from(report.skipped);
    }
}
