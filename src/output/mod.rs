//! Output tree: SVG elements with attached listeners, markup writing and export.

pub mod element;
pub mod events;
pub mod markup;
/// Pixel export through `resvg`.
pub mod raster;
