//! Game-specific components

use rust_engine::foundation::math::{Vec2, Vec4};
use rust_engine::physics::ArcadeBody;
use rust_engine::pool::Poolable;
use rust_engine::ui::UIText;

use crate::config::{GameplayConfig, HudConfig};

/// Player ship
#[derive(Debug, Clone)]
pub struct Ship {
    /// Physics body; velocity is rewritten from the controls every frame
    pub body: ArcadeBody,

    /// Remaining lives, never below zero
    pub life: u32,

    /// Remaining ammunition, never below zero
    pub ammo: u32,

    /// Score (kept for the HUD; nothing awards points yet)
    pub score: u32,
}

impl Ship {
    /// Create a ship at `position` with the configured starting counters
    pub fn new(position: Vec2, size: Vec2, gameplay: &GameplayConfig) -> Self {
        Self {
            body: ArcadeBody::new(position, size),
            life: gameplay.starting_lives,
            ammo: gameplay.starting_ammo,
            score: gameplay.starting_score,
        }
    }

    /// Lose one life if any remain; returns whether a life was lost
    pub fn take_hit(&mut self) -> bool {
        if self.life > 0 {
            self.life -= 1;
            true
        } else {
            false
        }
    }

    /// Spend one round if any remain; returns whether a round was spent
    pub fn fire(&mut self) -> bool {
        if self.ammo > 0 {
            self.ammo -= 1;
            true
        } else {
            false
        }
    }

    /// Whether every life has been lost
    pub fn is_depleted(&self) -> bool {
        self.life == 0
    }
}

/// Falling asteroid, recycled through the asteroid pool
#[derive(Debug, Clone)]
pub struct Asteroid {
    /// Physics body
    pub body: ArcadeBody,

    /// In play and eligible for collisions
    pub active: bool,

    /// Drawn by the renderer
    pub visible: bool,

    /// Sprite sheet frame
    pub frame: u32,
}

impl Asteroid {
    /// Create an out-of-play asteroid of the given size
    pub fn new(size: Vec2) -> Self {
        let mut body = ArcadeBody::new(Vec2::zeros(), size);
        body.enabled = false;
        body.allow_gravity = false;
        Self {
            body,
            active: false,
            visible: false,
            frame: 0,
        }
    }
}

impl Poolable for Asteroid {
    fn is_active(&self) -> bool {
        self.active
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
        self.body.enabled = active;
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

/// On-screen life counter
///
/// Holds no state of its own beyond the rendered text; the ship's `life`
/// is the source of truth.
#[derive(Debug, Clone)]
pub struct LifeDisplay {
    text: UIText,
}

impl LifeDisplay {
    /// Create the overlay and render the initial value
    pub fn new(hud: &HudConfig, life: u32) -> Self {
        let [r, g, b, a] = hud.color;
        let mut display = Self {
            text: UIText::new(hud.x, hud.y)
                .with_font_size(hud.font_size)
                .with_color(Vec4::new(r, g, b, a))
                .with_depth(hud.depth),
        };
        display.refresh(life);
        display
    }

    /// Text shown for a given number of lives
    pub fn format(life: u32) -> String {
        format!("Life: {life}")
    }

    /// Re-render from the current life count
    pub fn refresh(&mut self, life: u32) {
        self.text.set_text(Self::format(life));
    }

    /// Currently displayed text
    pub fn text(&self) -> &str {
        &self.text.text
    }

    /// The underlying widget, for a host renderer
    pub fn widget(&self) -> &UIText {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ship_starts_with_configured_counters() {
        let ship = Ship::new(Vec2::new(600.0, 400.0), Vec2::new(64.0, 64.0), &GameplayConfig::default());
        assert_eq!(ship.life, 3);
        assert_eq!(ship.ammo, 10);
        assert_eq!(ship.score, 0);
        assert_eq!(ship.body.velocity, Vec2::zeros());
    }

    #[test]
    fn test_life_floors_at_zero() {
        let gameplay = GameplayConfig {
            starting_lives: 1,
            ..GameplayConfig::default()
        };
        let mut ship = Ship::new(Vec2::zeros(), Vec2::new(1.0, 1.0), &gameplay);
        assert!(ship.take_hit());
        assert!(ship.is_depleted());
        assert!(!ship.take_hit());
        assert_eq!(ship.life, 0);
    }

    #[test]
    fn test_ammo_floors_at_zero() {
        let gameplay = GameplayConfig {
            starting_ammo: 2,
            ..GameplayConfig::default()
        };
        let mut ship = Ship::new(Vec2::zeros(), Vec2::new(1.0, 1.0), &gameplay);
        assert!(ship.fire());
        assert!(ship.fire());
        assert!(!ship.fire());
        assert_eq!(ship.ammo, 0);
    }

    #[test]
    fn test_asteroid_activation_toggles_body() {
        let mut asteroid = Asteroid::new(Vec2::new(96.0, 96.0));
        assert!(!asteroid.body.enabled);
        asteroid.set_active(true);
        assert!(asteroid.body.enabled);
        asteroid.set_active(false);
        assert!(!asteroid.body.enabled);
    }

    #[test]
    fn test_life_display_renders_value() {
        let mut display = LifeDisplay::new(&HudConfig::default(), 3);
        assert_eq!(display.text(), "Life: 3");
        display.refresh(0);
        assert_eq!(display.text(), "Life: 0");
        assert_eq!(display.widget().font_size, 32.0);
    }
}
