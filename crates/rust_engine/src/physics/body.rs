//! Arcade body: a rectangle with a velocity

use crate::foundation::math::{Rect, Vec2};

/// Axis-aligned physics body positioned by its center
#[derive(Debug, Clone, PartialEq)]
pub struct ArcadeBody {
    /// Center position in screen space
    pub position: Vec2,

    /// Velocity in units per second
    pub velocity: Vec2,

    /// Half of the body's width and height
    pub half_size: Vec2,

    /// Disabled bodies are skipped by overlap queries
    pub enabled: bool,

    /// Whether global gravity applies to this body
    pub allow_gravity: bool,
}

impl ArcadeBody {
    /// Create a resting body at `position` with the given full size
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::zeros(),
            half_size: size * 0.5,
            enabled: true,
            allow_gravity: true,
        }
    }

    /// Set both velocity components to the same value
    pub fn set_velocity(&mut self, value: f32) {
        self.velocity = Vec2::new(value, value);
    }

    /// Set the horizontal velocity
    pub fn set_velocity_x(&mut self, value: f32) {
        self.velocity.x = value;
    }

    /// Set the vertical velocity
    pub fn set_velocity_y(&mut self, value: f32) {
        self.velocity.y = value;
    }

    /// Move the body by its velocity over `delta_time` seconds
    pub fn integrate(&mut self, delta_time: f32, gravity: Vec2) {
        if self.allow_gravity {
            self.velocity += gravity * delta_time;
        }
        self.position += self.velocity * delta_time;
    }

    /// Current bounds
    pub fn bounds(&self) -> Rect {
        Rect::from_center_extents(self.position, self.half_size)
    }

    /// Whether this body's bounds intersect another's
    pub fn overlaps(&self, other: &ArcadeBody) -> bool {
        self.bounds().intersects(&other.bounds())
    }
}
