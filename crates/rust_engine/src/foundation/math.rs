//! Math utilities and types
//!
//! Provides the vector aliases and the 2D bounds type used by arcade bodies.

pub use nalgebra::{Vector2, Vector4};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 4D vector type, used for RGBA colours
pub type Vec4 = Vector4<f32>;

/// Axis-aligned rectangle in screen space (y grows downwards)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Minimum corner (left, top)
    pub min: Vec2,
    /// Maximum corner (right, bottom)
    pub max: Vec2,
}

impl Rect {
    /// Create a new rect from min and max corners
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Create a rect centered at a point with given half extents
    pub fn from_center_extents(center: Vec2, extents: Vec2) -> Self {
        Self {
            min: center - extents,
            max: center + extents,
        }
    }

    /// Get the center of the rect
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Get the extents (half-size) of the rect
    pub fn extents(&self) -> Vec2 {
        (self.max - self.min) * 0.5
    }

    /// Width of the rect
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Height of the rect
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Check if this rect contains a point (edges inclusive)
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x &&
        point.y >= self.min.y && point.y <= self.max.y
    }

    /// Check if this rect overlaps another
    ///
    /// Rects that only share an edge do not overlap.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.min.x < other.max.x && self.max.x > other.min.x &&
        self.min.y < other.max.y && self.max.y > other.min.y
    }
}
