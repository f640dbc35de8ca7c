//! Arcade physics
//!
//! Axis-aligned bodies that move at a set velocity, plus overlap queries
//! between a body and a group of candidates. There is no collision response:
//! callers decide what an overlap means.

pub mod body;
pub mod overlap;

pub use body::ArcadeBody;
pub use overlap::overlapping;
