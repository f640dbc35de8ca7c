//! Debug module for visualization and debugging tools
//!
//! Collects body outlines each frame when physics debugging is on, so a host
//! renderer (or a log line) can show what the overlap tests see.

pub mod bounds;

pub use bounds::{BoundsKind, DebugBounds, DebugColors, DebugRect};
