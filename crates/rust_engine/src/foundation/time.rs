//! Time management utilities
//!
//! The engine runs on a fixed simulation step, so frame time is counted
//! rather than measured. Timer events are expressed in milliseconds and
//! fire on the first frame whose accumulated time reaches their delay.

use slotmap::{new_key_type, SlotMap};

/// Tolerance absorbing float drift when summing fixed steps (milliseconds)
const FIRE_EPSILON_MS: f64 = 1e-3;

/// Fixed-step frame clock
#[derive(Debug, Clone)]
pub struct FrameClock {
    step: f32,
    total_time: f64,
    frame_count: u64,
}

impl FrameClock {
    /// Create a clock advancing by `step` seconds per frame
    pub fn fixed(step: f32) -> Self {
        Self {
            step,
            total_time: 0.0,
            frame_count: 0,
        }
    }

    /// Advance one frame and return its delta time in seconds
    pub fn tick(&mut self) -> f32 {
        self.total_time += f64::from(self.step);
        self.frame_count += 1;
        self.step
    }

    /// Get the time step in seconds
    pub fn delta_time(&self) -> f32 {
        self.step
    }

    /// Get the total simulated time in seconds
    pub fn total_time(&self) -> f64 {
        self.total_time
    }

    /// Get the current frame count
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

new_key_type! {
    /// Handle to a registered timer event
    pub struct TimerId;
}

/// Parameters for a timer event
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimerConfig {
    /// Delay between firings in milliseconds
    pub delay_ms: f64,
    /// Fire repeatedly instead of once
    pub repeat: bool,
}

impl TimerConfig {
    /// Recurring timer with a delay in seconds
    pub fn looping(delay_secs: f32) -> Self {
        Self {
            delay_ms: f64::from(delay_secs) * 1000.0,
            repeat: true,
        }
    }

    /// Recurring timer with a delay in whole milliseconds
    pub fn looping_millis(delay_ms: u64) -> Self {
        Self {
            delay_ms: delay_ms as f64,
            repeat: true,
        }
    }

    /// One-shot timer with a delay in whole milliseconds
    pub fn once_millis(delay_ms: u64) -> Self {
        Self {
            delay_ms: delay_ms as f64,
            repeat: false,
        }
    }
}

#[derive(Debug, Clone)]
struct TimerEvent {
    config: TimerConfig,
    elapsed_ms: f64,
    fired: u64,
}

/// Registry of pending timer events
///
/// Holds no callbacks: [`TimerEvents::advance`] returns the ids that came due
/// and the caller dispatches them.
#[derive(Debug, Default)]
pub struct TimerEvents {
    events: SlotMap<TimerId, TimerEvent>,
}

impl TimerEvents {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a timer event
    ///
    /// Non-positive delays are clamped to one millisecond so a recurring
    /// timer can never fire unboundedly within a frame.
    pub fn add_event(&mut self, config: TimerConfig) -> TimerId {
        let config = TimerConfig {
            delay_ms: if config.delay_ms.is_finite() { config.delay_ms.max(1.0) } else { 1.0 },
            ..config
        };
        let id = self.events.insert(TimerEvent {
            config,
            elapsed_ms: 0.0,
            fired: 0,
        });
        log::debug!(
            "Registered {} timer {:?} every {}ms",
            if config.repeat { "recurring" } else { "one-shot" },
            id,
            config.delay_ms
        );
        id
    }

    /// Remove a timer event; returns whether it existed
    pub fn remove_event(&mut self, id: TimerId) -> bool {
        self.events.remove(id).is_some()
    }

    /// Whether a timer is still registered
    pub fn contains(&self, id: TimerId) -> bool {
        self.events.contains_key(id)
    }

    /// Number of times a timer has fired
    pub fn fire_count(&self, id: TimerId) -> Option<u64> {
        self.events.get(id).map(|event| event.fired)
    }

    /// Number of registered timers
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether no timers are registered
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Advance every timer by `delta_time` seconds
    ///
    /// Returns one entry per firing, so a recurring timer whose delay was
    /// crossed twice in one call appears twice. One-shot timers are removed
    /// after firing.
    pub fn advance(&mut self, delta_time: f32) -> Vec<TimerId> {
        let delta_ms = f64::from(delta_time) * 1000.0;
        let mut fired = Vec::new();
        let mut finished = Vec::new();

        for (id, event) in &mut self.events {
            event.elapsed_ms += delta_ms;
            while event.elapsed_ms + FIRE_EPSILON_MS >= event.config.delay_ms {
                event.elapsed_ms = (event.elapsed_ms - event.config.delay_ms).max(0.0);
                event.fired += 1;
                fired.push(id);
                if !event.config.repeat {
                    finished.push(id);
                    break;
                }
            }
        }

        for id in finished {
            self.events.remove(id);
        }

        fired
    }
}
