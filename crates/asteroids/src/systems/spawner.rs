//! Asteroid spawner
//!
//! Pulls a random number of asteroids out of the pool and drops them in
//! above the canvas. A new asteroid that lands on top of another one is
//! moved sideways a bounded number of times at spawn time; nothing keeps
//! watching it afterwards.

use rand::Rng;
use rust_engine::pool::{ObjectPool, PoolKey, Poolable};

use crate::components::Asteroid;
use crate::config::GameplayConfig;

/// Parameters of a spawn wave
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnSettings {
    /// Fewest asteroids requested per wave
    pub min_count: u32,
    /// Most asteroids requested per wave
    pub max_count: u32,
    /// Vertical spawn position
    pub spawn_y: f32,
    /// Horizontal positions are drawn from `0..=canvas_width`
    pub canvas_width: u32,
    /// Frames are drawn from `0..frame_count`
    pub frame_count: u32,
    /// Sideways re-rolls allowed to clear an overlap
    pub overlap_retries: u32,
}

impl SpawnSettings {
    /// Build settings from gameplay configuration and canvas width
    pub fn from_config(gameplay: &GameplayConfig, canvas_width: u32) -> Self {
        Self {
            min_count: gameplay.min_asteroids,
            max_count: gameplay.max_asteroids,
            spawn_y: gameplay.spawn_y,
            canvas_width,
            frame_count: gameplay.asteroid_frames,
            overlap_retries: gameplay.spawn_overlap_retries,
        }
    }
}

/// What a spawn call did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpawnReport {
    /// Asteroids asked for
    pub requested: u32,
    /// Asteroids brought into play, in spawn order
    pub spawned: Vec<PoolKey>,
    /// Requests dropped because the pool was full
    pub skipped: u32,
    /// Sideways moves made to clear overlaps
    pub nudges: u32,
}

/// Spawn a wave of `min_count..=max_count` asteroids
pub fn spawn_wave<R: Rng>(
    asteroids: &mut ObjectPool<Asteroid>,
    rng: &mut R,
    settings: &SpawnSettings,
) -> SpawnReport {
    let count = rng.gen_range(settings.min_count..=settings.max_count.max(settings.min_count));
    spawn_asteroids(asteroids, rng, settings, count)
}

/// Try to bring `count` asteroids into play
///
/// A full pool is not an error: the request is counted as skipped.
pub fn spawn_asteroids<R: Rng>(
    asteroids: &mut ObjectPool<Asteroid>,
    rng: &mut R,
    settings: &SpawnSettings,
    count: u32,
) -> SpawnReport {
    let mut report = SpawnReport {
        requested: count,
        ..SpawnReport::default()
    };

    for _ in 0..count {
        let Some(key) = asteroids.get() else {
            report.skipped += 1;
            continue;
        };

        let frame = rng.gen_range(0..settings.frame_count.max(1));
        let x = random_x(rng, settings.canvas_width);

        if let Some(asteroid) = asteroids.get_member_mut(key) {
            asteroid.set_active(true);
            asteroid.set_visible(true);
            asteroid.frame = frame;
            asteroid.body.position.x = x;
            asteroid.body.position.y = settings.spawn_y;
        }

        report.nudges += clear_spawn_overlap(asteroids, rng, key, settings);
        report.spawned.push(key);
    }

    if report.skipped > 0 {
        log::debug!(
            "Spawned {}/{} asteroid(s), pool full ({} active)",
            report.spawned.len(),
            report.requested,
            asteroids.count_active()
        );
    } else {
        log::debug!("Spawned {} asteroid(s)", report.spawned.len());
    }
    report
}

/// Move a freshly spawned asteroid sideways until it clears every other
/// active asteroid or the retries run out; returns the moves made
fn clear_spawn_overlap<R: Rng>(
    asteroids: &mut ObjectPool<Asteroid>,
    rng: &mut R,
    key: PoolKey,
    settings: &SpawnSettings,
) -> u32 {
    let mut nudges = 0;

    while nudges < settings.overlap_retries {
        let Some(spawned) = asteroids.get_member(key) else {
            break;
        };
        let blocked = asteroids
            .iter_active()
            .any(|(other, asteroid)| other != key && asteroid.body.overlaps(&spawned.body));
        if !blocked {
            break;
        }

        let x = random_x(rng, settings.canvas_width);
        if let Some(asteroid) = asteroids.get_member_mut(key) {
            asteroid.body.position.x = x;
        }
        nudges += 1;
    }

    nudges
}

fn random_x<R: Rng>(rng: &mut R, canvas_width: u32) -> f32 {
    rng.gen_range(0..=canvas_width) as f32
}
