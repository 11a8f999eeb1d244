//! Geometry lowering and serialization.
//!
//! Scene coordinates are Cartesian (y up); output coordinates are SVG (y down). The flip happens
//! exactly once, when numbers are written.

/// Shape kinds to path commands.
pub mod lower;
/// Path commands to SVG path data and `kurbo` geometry.
pub mod svg_path;
/// Rigid transforms to SVG `transform` values.
pub mod transform;
