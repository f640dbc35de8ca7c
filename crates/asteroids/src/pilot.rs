//! Scripted keyboard input for headless runs
//!
//! Weaves the ship left and right, drifts it up and down on a slower cycle,
//! and taps fire periodically.

use rust_engine::input::{InputManager, KeyCode};

/// Deterministic input script keyed by frame number
#[derive(Debug, Clone, Copy)]
pub struct ScriptedPilot {
    /// Frames spent moving in each horizontal direction
    pub weave_frames: u64,
    /// Frames spent moving in each vertical direction
    pub drift_frames: u64,
    /// Fire is held for one frame out of this many
    pub fire_every: u64,
}

impl Default for ScriptedPilot {
    fn default() -> Self {
        Self {
            weave_frames: 45,
            drift_frames: 30,
            fire_every: 30,
        }
    }
}

impl ScriptedPilot {
    /// Set the held keys for `frame`
    pub fn drive(&self, input: &mut InputManager, frame: u64) {
        input.release_all();

        let weave = frame / self.weave_frames.max(1);
        let horizontal = if weave % 2 == 0 { KeyCode::Left } else { KeyCode::Right };
        input.handle_key_input(horizontal, true);

        let drift = frame / self.drift_frames.max(1);
        let vertical = if drift % 2 == 0 { KeyCode::Up } else { KeyCode::Down };
        input.handle_key_input(vertical, true);

        if frame % self.fire_every.max(1) == 0 {
            input.handle_key_input(KeyCode::Space, true);
        }
    }
}
