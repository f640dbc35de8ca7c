//! Gameplay systems
//!
//! Free functions over the session's parts. The session decides when each
//! runs; the systems only mutate what they are handed.

pub mod collision;
pub mod movement;
pub mod spawner;

pub use collision::{handle_collision, CollisionOutcome};
pub use movement::{advance_asteroids, fire_weapon, steer_ship};
pub use spawner::{spawn_asteroids, spawn_wave, SpawnReport, SpawnSettings};
