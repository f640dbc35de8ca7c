//! Application trait and lifecycle management

use crate::assets::{AssetError, AssetManager};
use crate::config::ConfigError;
use crate::engine::{Engine, EngineError};
use crate::foundation::time::TimerId;
use thiserror::Error;

/// Application lifecycle trait
///
/// Implement this trait to create your game or application using the engine.
/// The engine calls every hook from one thread; no two hooks ever overlap.
pub trait Application {
    /// Declare and load the assets the application needs
    ///
    /// Called once before `create`. Any error here aborts the session.
    fn preload(&mut self, assets: &mut AssetManager) -> Result<(), AppError>;

    /// Create the application state
    ///
    /// Called once after preload succeeded. Use this to build the initial
    /// game state, register timers and bind input.
    fn create(&mut self, engine: &mut Engine) -> Result<(), AppError>;

    /// Update the application
    ///
    /// Called every frame. Implement your game logic here.
    ///
    /// # Arguments
    /// * `engine` - Mutable reference to the engine
    /// * `delta_time` - Time since last frame in seconds
    fn update(&mut self, engine: &mut Engine, delta_time: f32) -> Result<(), AppError>;

    /// Handle a timer event registered through [`Engine::time_mut`]
    ///
    /// Called before `update` on the frame the timer came due.
    fn on_timer(&mut self, _engine: &mut Engine, _timer: TimerId) -> Result<(), AppError> {
        Ok(())
    }

    /// Cleanup the application
    ///
    /// Called when the session ends.
    fn cleanup(&mut self, _engine: &mut Engine) {}
}

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Engine error propagated to application level
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    /// Asset loading error
    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Game logic error
    #[error("Game logic error: {0}")]
    GameLogic(String),
}
