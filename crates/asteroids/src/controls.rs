//! Ship controls captured from the keyboard once per frame

use rust_engine::input::{InputManager, KeyCode};

/// Which keys drive which control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlBindings {
    /// Move left
    pub left: KeyCode,
    /// Move right
    pub right: KeyCode,
    /// Move up
    pub up: KeyCode,
    /// Move down
    pub down: KeyCode,
    /// Fire
    pub fire: KeyCode,
}

impl Default for ControlBindings {
    fn default() -> Self {
        Self {
            left: KeyCode::Left,
            right: KeyCode::Right,
            up: KeyCode::Up,
            down: KeyCode::Down,
            fire: KeyCode::Space,
        }
    }
}

/// Snapshot of the five ship controls for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShipControls {
    /// Left held
    pub left: bool,
    /// Right held
    pub right: bool,
    /// Up held
    pub up: bool,
    /// Down held
    pub down: bool,
    /// Fire held
    pub fire: bool,
}

impl ShipControls {
    /// Read the bound keys from the current input state
    pub fn capture(input: &InputManager, bindings: &ControlBindings) -> Self {
        Self {
            left: input.is_down(bindings.left),
            right: input.is_down(bindings.right),
            up: input.is_down(bindings.up),
            down: input.is_down(bindings.down),
            fire: input.is_down(bindings.fire),
        }
    }

    /// Horizontal velocity for a given speed; right wins when both are held
    pub fn horizontal(&self, speed: f32) -> f32 {
        if self.right {
            speed
        } else if self.left {
            -speed
        } else {
            0.0
        }
    }

    /// Vertical velocity for a given speed; down wins when both are held
    pub fn vertical(&self, speed: f32) -> f32 {
        if self.down {
            speed
        } else if self.up {
            -speed
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_reads_bound_keys() {
        let mut input = InputManager::new();
        input.handle_key_input(KeyCode::Left, true);
        input.handle_key_input(KeyCode::Space, true);

        let controls = ShipControls::capture(&input, &ControlBindings::default());
        assert_eq!(
            controls,
            ShipControls {
                left: true,
                fire: true,
                ..ShipControls::default()
            }
        );
    }

    #[test]
    fn test_custom_bindings() {
        let bindings = ControlBindings {
            left: KeyCode::A,
            right: KeyCode::D,
            up: KeyCode::W,
            down: KeyCode::S,
            fire: KeyCode::Enter,
        };
        let mut input = InputManager::new();
        input.handle_key_input(KeyCode::D, true);
        input.handle_key_input(KeyCode::Right, true);

        let controls = ShipControls::capture(&input, &bindings);
        assert!(controls.right);
        assert!(!controls.left);
    }

    #[test]
    fn test_tie_breaks() {
        let controls = ShipControls {
            left: true,
            right: true,
            up: true,
            down: true,
            fire: false,
        };
        assert_eq!(controls.horizontal(500.0), 500.0);
        assert_eq!(controls.vertical(500.0), 500.0);
    }

    #[test]
    fn test_single_directions() {
        let left_up = ShipControls {
            left: true,
            up: true,
            ..ShipControls::default()
        };
        assert_eq!(left_up.horizontal(500.0), -500.0);
        assert_eq!(left_up.vertical(500.0), -500.0);
        assert_eq!(ShipControls::default().horizontal(500.0), 0.0);
    }
}
