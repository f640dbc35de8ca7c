//! Ship / asteroid collision handling

use rust_engine::pool::{ObjectPool, PoolKey, Poolable};

use crate::components::{Asteroid, LifeDisplay, Ship};

/// Result of handling one ship / asteroid overlap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionOutcome {
    /// The asteroid was not in play; nothing changed
    Ignored,
    /// The asteroid was recycled and the ship lost a life
    Damaged {
        /// Lives left after the hit
        life: u32,
    },
    /// The asteroid was recycled but the ship had no lives to lose
    Absorbed,
}

/// Recycle the asteroid and take a life from the ship
///
/// Only an active asteroid counts, so a stale overlap against an asteroid
/// that was already recycled this frame does nothing.
pub fn handle_collision(
    ship: &mut Ship,
    asteroids: &mut ObjectPool<Asteroid>,
    display: &mut LifeDisplay,
    asteroid: PoolKey,
) -> CollisionOutcome {
    let in_play = asteroids
        .get_member(asteroid)
        .is_some_and(Poolable::is_active);
    if !in_play {
        return CollisionOutcome::Ignored;
    }

    asteroids.kill_and_hide(asteroid);

    if ship.take_hit() {
        display.refresh(ship.life);
        log::debug!("Ship hit, {} life left", ship.life);
        if ship.is_depleted() {
            log::info!("Ship has no lives left");
        }
        CollisionOutcome::Damaged { life: ship.life }
    } else {
        CollisionOutcome::Absorbed
    }
}
