//! Text widget - labels and text display

use crate::foundation::math::Vec4;

/// UI text label component
#[derive(Debug, Clone, PartialEq)]
pub struct UIText {
    /// Position of the top-left corner in screen pixels
    pub position: (f32, f32),

    /// Text content to display
    pub text: String,

    /// Font size in pixels
    pub font_size: f32,

    /// Text color (RGBA)
    pub color: Vec4,

    /// Layering depth (higher = on top)
    pub depth: f32,

    /// Whether this element is visible
    pub visible: bool,

    /// Bumped every time the text content actually changes
    revision: u64,
}

impl Default for UIText {
    fn default() -> Self {
        Self {
            position: (0.0, 0.0),
            text: String::new(),
            font_size: 24.0,
            color: Vec4::new(1.0, 1.0, 1.0, 1.0),
            depth: 0.0,
            visible: true,
            revision: 0,
        }
    }
}

impl UIText {
    /// Create a new text label at a screen position
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            position: (x, y),
            ..Default::default()
        }
    }

    /// Set font size (builder pattern)
    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    /// Set color (builder pattern)
    pub fn with_color(mut self, color: Vec4) -> Self {
        self.color = color;
        self
    }

    /// Set depth (builder pattern)
    pub fn with_depth(mut self, depth: f32) -> Self {
        self.depth = depth;
        self
    }

    /// Replace the text content
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text != self.text {
            self.text = text;
            self.revision += 1;
        }
    }

    /// How many times the content has changed, for renderers caching glyphs
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
