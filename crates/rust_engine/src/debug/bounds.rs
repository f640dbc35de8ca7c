//! Body-bounds debug collection

use crate::foundation::math::{Rect, Vec4};

/// What a debug outline belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundsKind {
    /// Player-controlled body
    Player,
    /// Body that damages the player
    Hazard,
}

/// Color scheme for bounds outlines
#[derive(Clone, Debug)]
pub struct DebugColors {
    /// Color for player bodies
    pub player: Vec4,
    /// Color for hazard bodies
    pub hazard: Vec4,
}

impl Default for DebugColors {
    fn default() -> Self {
        Self {
            player: Vec4::new(1.0, 0.0, 1.0, 1.0),  // Magenta
            hazard: Vec4::new(0.0, 1.0, 0.0, 1.0),  // Green
        }
    }
}

/// One outline to draw this frame
#[derive(Debug, Clone, PartialEq)]
pub struct DebugRect {
    /// Bounds of the body
    pub bounds: Rect,
    /// What the body is
    pub kind: BoundsKind,
    /// Outline color
    pub color: Vec4,
}

/// Per-frame collector of body outlines
#[derive(Debug, Clone)]
pub struct DebugBounds {
    enabled: bool,
    colors: DebugColors,
    shapes: Vec<DebugRect>,
}

impl DebugBounds {
    /// Create a collector; a disabled collector ignores every push
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            colors: DebugColors::default(),
            shapes: Vec::new(),
        }
    }

    /// Set custom color scheme
    pub fn with_colors(mut self, colors: DebugColors) -> Self {
        self.colors = colors;
        self
    }

    /// Whether outlines are being collected
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Drop last frame's outlines
    pub fn begin_frame(&mut self) {
        self.shapes.clear();
    }

    /// Record a body outline
    pub fn push(&mut self, bounds: Rect, kind: BoundsKind) {
        if !self.enabled {
            return;
        }
        let color = match kind {
            BoundsKind::Player => self.colors.player,
            BoundsKind::Hazard => self.colors.hazard,
        };
        self.shapes.push(DebugRect { bounds, kind, color });
    }

    /// Outlines collected since the last `begin_frame`
    pub fn shapes(&self) -> &[DebugRect] {
        &self.shapes
    }
}
