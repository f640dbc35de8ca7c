//! # Asteroids
//!
//! A ship dodges asteroids falling from the top of the canvas. Each hit
//! costs a life; holding fire spends ammunition.
//!
//! The game is a [`Session`] driven by an [`AsteroidScene`] plugged into the
//! engine's lifecycle:
//!
//! ```rust,no_run
//! use asteroids::{AsteroidScene, GameConfig};
//! use rust_engine::Engine;
//!
//! let config = GameConfig::default();
//! let mut scene = AsteroidScene::new(config.clone());
//! Engine::run(config.engine, &mut scene).unwrap();
//! ```

#![warn(missing_docs)]

pub mod components;
pub mod config;
pub mod controls;
pub mod pilot;
pub mod scene;
pub mod session;
pub mod systems;

pub use components::{Asteroid, LifeDisplay, Ship};
pub use config::GameConfig;
pub use controls::{ControlBindings, ShipControls};
pub use pilot::ScriptedPilot;
pub use scene::AsteroidScene;
pub use session::{FrameReport, Session, SessionStats};
