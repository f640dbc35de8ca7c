//! # Rust Engine
//!
//! A small headless engine for 2D arcade games.
//!
//! ## Features
//!
//! - **Lifecycle**: preload / create / update hooks driven by a fixed-step loop
//! - **Timers**: recurring and one-shot timer events dispatched to the application
//! - **Arcade physics**: velocity bodies with axis-aligned overlap tests
//! - **Pooling**: fixed-capacity object pools with recycle-instead-of-destroy semantics
//! - **Assets**: image and sprite sheet manifests validated at preload time
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rust_engine::prelude::*;
//!
//! struct MyApp;
//!
//! impl Application for MyApp {
//!     fn preload(&mut self, assets: &mut AssetManager) -> Result<(), AppError> {
//!         assets.load_image("ship", "ship.png")?;
//!         Ok(())
//!     }
//!
//!     fn create(&mut self, engine: &mut Engine) -> Result<(), AppError> {
//!         Ok(())
//!     }
//!
//!     fn update(&mut self, engine: &mut Engine, delta_time: f32) -> Result<(), AppError> {
//!         Ok(())
//!     }
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = EngineConfig::default();
//!     let mut app = MyApp;
//!     Engine::run(config, &mut app)?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

pub mod foundation;
pub mod assets;
pub mod config;
pub mod debug;
pub mod input;
pub mod physics;
pub mod pool;
pub mod ui;

mod application;
mod engine;

pub use application::{Application, AppError};
pub use engine::{Engine, EngineConfig, EngineError, PhysicsConfig};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        Application, AppError,
        Engine, EngineConfig, EngineError, PhysicsConfig,
        foundation::{
            math::{Vec2, Vec4, Rect},
            time::{FrameClock, TimerEvents, TimerId, TimerConfig},
        },
        assets::{AssetManager, AssetError, ImageInfo, SpriteSheet},
        config::{Config, ConfigError},
        debug::{DebugBounds, DebugRect, BoundsKind},
        input::{InputManager, KeyCode},
        physics::{ArcadeBody, overlap::overlapping},
        pool::{ObjectPool, Poolable, PoolKey},
        ui::UIText,
    };
}
