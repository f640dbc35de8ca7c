//! Per-frame movement: falling asteroids and ship steering

use rust_engine::pool::{ObjectPool, PoolKey};

use crate::components::{Asteroid, Ship};
use crate::controls::ShipControls;

/// Move every active asteroid down by `fall_step`, then recycle the ones
/// that have left the bottom of the canvas
///
/// Returns how many asteroids were recycled.
pub fn advance_asteroids(
    asteroids: &mut ObjectPool<Asteroid>,
    fall_step: f32,
    canvas_height: f32,
) -> usize {
    asteroids.for_each_active_mut(|_, asteroid| {
        asteroid.body.position.y += fall_step;
    });

    let off_screen: Vec<PoolKey> = asteroids
        .iter_active()
        .filter(|(_, asteroid)| asteroid.body.position.y > canvas_height)
        .map(|(key, _)| key)
        .collect();

    for &key in &off_screen {
        asteroids.kill_and_hide(key);
    }

    if !off_screen.is_empty() {
        log::trace!("Recycled {} asteroid(s) below the canvas", off_screen.len());
    }
    off_screen.len()
}

/// Rewrite the ship's velocity from this frame's controls
///
/// Each axis ends up at exactly 0 or ±`speed`.
pub fn steer_ship(ship: &mut Ship, controls: &ShipControls, speed: f32) {
    ship.body.set_velocity(0.0);
    ship.body.set_velocity_x(controls.horizontal(speed));
    ship.body.set_velocity_y(controls.vertical(speed));
}

/// Spend a round while fire is held
///
/// There is no fire-rate limit: a held key spends one round every frame.
pub fn fire_weapon(ship: &mut Ship, controls: &ShipControls) -> bool {
    if !controls.fire {
        return false;
    }
    let fired = ship.fire();
    if fired {
        log::debug!("Fired, {} round(s) left", ship.ammo);
    }
    fired
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameplayConfig;
    use rust_engine::foundation::math::Vec2;
    use rust_engine::pool::Poolable;

    fn pool_with(positions: &[(f32, f32)]) -> (ObjectPool<Asteroid>, Vec<PoolKey>) {
        let mut pool = ObjectPool::new(10, || Asteroid::new(Vec2::new(96.0, 96.0)));
        let keys = positions
            .iter()
            .map(|&(x, y)| {
                let key = pool.get().unwrap();
                let asteroid = pool.get_member_mut(key).unwrap();
                asteroid.set_active(true);
                asteroid.set_visible(true);
                asteroid.body.position = Vec2::new(x, y);
                key
            })
            .collect();
        (pool, keys)
    }

    #[test]
    fn test_active_asteroids_fall() {
        let (mut pool, keys) = pool_with(&[(100.0, -192.0), (300.0, 10.0)]);
        assert_eq!(advance_asteroids(&mut pool, 5.0, 800.0), 0);

        assert_eq!(pool.get_member(keys[0]).unwrap().body.position.y, -187.0);
        assert_eq!(pool.get_member(keys[1]).unwrap().body.position.y, 15.0);
    }

    #[test]
    fn test_inactive_asteroids_stay_put() {
        let (mut pool, keys) = pool_with(&[(100.0, 50.0)]);
        pool.kill_and_hide(keys[0]);
        advance_asteroids(&mut pool, 5.0, 800.0);
        assert_eq!(pool.get_member(keys[0]).unwrap().body.position.y, 50.0);
    }

    #[test]
    fn test_below_canvas_is_recycled() {
        let (mut pool, keys) = pool_with(&[(0.0, 801.0), (1200.0, 795.0), (600.0, 400.0)]);
        assert_eq!(advance_asteroids(&mut pool, 5.0, 800.0), 1);

        let gone = pool.get_member(keys[0]).unwrap();
        assert!(!gone.active);
        assert!(!gone.visible);
        // 795 + 5 lands exactly on the edge, which is still on screen
        assert!(pool.get_member(keys[1]).unwrap().active);
        assert_eq!(pool.count_active(), 2);
    }

    #[test]
    fn test_steering_sets_exact_speeds() {
        let mut ship = Ship::new(Vec2::zeros(), Vec2::new(10.0, 10.0), &GameplayConfig::default());
        ship.body.velocity = Vec2::new(123.0, -7.0);

        steer_ship(&mut ship, &ShipControls::default(), 500.0);
        assert_eq!(ship.body.velocity, Vec2::zeros());

        let controls = ShipControls {
            left: true,
            down: true,
            ..ShipControls::default()
        };
        steer_ship(&mut ship, &controls, 500.0);
        assert_eq!(ship.body.velocity, Vec2::new(-500.0, 500.0));
    }

    #[test]
    fn test_fire_spends_one_round_per_frame() {
        let mut ship = Ship::new(Vec2::zeros(), Vec2::new(10.0, 10.0), &GameplayConfig::default());
        let held = ShipControls {
            fire: true,
            ..ShipControls::default()
        };

        for _ in 0..15 {
            fire_weapon(&mut ship, &held);
        }
        assert_eq!(ship.ammo, 0);
        assert!(!fire_weapon(&mut ship, &ShipControls::default()));
    }
}
