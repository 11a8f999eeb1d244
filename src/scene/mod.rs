//! Scene-graph input model.
//!
//! The scene graph is produced by the external layout pass and is treated as immutable input by
//! the renderer.

/// Node kinds, style records and selection descriptors.
pub mod model;
/// Path commands in scene coordinates.
pub mod path;
