//! Input management system
//!
//! Keyboard input is polled: the host reports presses and releases as they
//! happen, and game code reads the held state once per frame.

use bitflags::bitflags;

bitflags! {
    /// Set of held keys
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct KeySet: u16 {
        /// Left arrow
        const LEFT = 1 << 0;
        /// Right arrow
        const RIGHT = 1 << 1;
        /// Up arrow
        const UP = 1 << 2;
        /// Down arrow
        const DOWN = 1 << 3;
        /// Space bar
        const SPACE = 1 << 4;
        /// Enter key
        const ENTER = 1 << 5;
        /// Escape key
        const ESCAPE = 1 << 6;
        /// W key
        const W = 1 << 7;
        /// A key
        const A = 1 << 8;
        /// S key
        const S = 1 << 9;
        /// D key
        const D = 1 << 10;
    }
}

/// Key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Left arrow
    Left,
    /// Right arrow
    Right,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Space key
    Space,
    /// Enter key
    Enter,
    /// Escape key
    Escape,
    /// W key
    W,
    /// A key
    A,
    /// S key
    S,
    /// D key
    D,
}

impl KeyCode {
    /// The flag representing this key in a [`KeySet`]
    pub fn flag(self) -> KeySet {
        match self {
            KeyCode::Left => KeySet::LEFT,
            KeyCode::Right => KeySet::RIGHT,
            KeyCode::Up => KeySet::UP,
            KeyCode::Down => KeySet::DOWN,
            KeyCode::Space => KeySet::SPACE,
            KeyCode::Enter => KeySet::ENTER,
            KeyCode::Escape => KeySet::ESCAPE,
            KeyCode::W => KeySet::W,
            KeyCode::A => KeySet::A,
            KeyCode::S => KeySet::S,
            KeyCode::D => KeySet::D,
        }
    }
}

/// Input manager tracking which keys are currently held
#[derive(Debug, Default, Clone)]
pub struct InputManager {
    held: KeySet,
}

impl InputManager {
    /// Create a new input manager with no keys held
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle key input
    pub fn handle_key_input(&mut self, key: KeyCode, pressed: bool) {
        if pressed {
            self.held.insert(key.flag());
        } else {
            self.held.remove(key.flag());
        }
    }

    /// Check whether a key is currently held
    pub fn is_down(&self, key: KeyCode) -> bool {
        self.held.contains(key.flag())
    }

    /// All currently held keys
    pub fn held(&self) -> KeySet {
        self.held
    }

    /// Release every key (e.g. when the host loses focus)
    pub fn release_all(&mut self) {
        self.held = KeySet::empty();
    }
}
