//! UI system
//!
//! On-screen overlays. Widgets hold what a host renderer needs to draw them;
//! they never own game state.

pub mod text;

pub use text::UIText;
