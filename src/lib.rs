//! chartsvg turns a laid-out chart scene graph into an SVG element tree.
//!
//! The layout pass produces an [`Element`] tree in Cartesian chart coordinates (y up). A
//! [`RenderSession`] walks it once per pass and emits an [`SvgElement`] tree (y down) with
//! resolved presentation attributes, stable mark ids, class tags derived from each node's data
//! payload, and pointer listeners wired to the host's selection handlers.
//!
//! # Pipeline overview
//!
//! 1. **Style**: `Style -> PresentationAttrs`, with color filters applied in CIELAB.
//! 2. **Geometry**: shape kinds lower to [`PathCommand`]s, serialized with the y axis flipped.
//! 3. **Identity**: data payloads parse once into a [`Datum`] that yields mark ids and classes.
//! 4. **Tree**: one output node per scene node; sub-charts render inside their container with
//!    row indices remapped at the boundary.
//!
//! Rendering never fails: malformed payloads fall back locally and an absent root renders to
//! nothing. Only the boundaries (JSON decoding, `usvg` export) return [`ChartResult`].
#![forbid(unsafe_code)]

mod color;
mod foundation;
mod geometry;
mod identity;
mod output;
mod render;
mod scene;
mod style;

pub use color::filter::{apply_color_filter, blend_toward_luminance, modify_number};
pub use color::lab::{Lab, lab_to_srgb, srgb_to_lab};
pub use foundation::core::{BezPath, Color, Point, Rect, Vec2};
pub use foundation::error::{ChartError, ChartResult};
pub use foundation::math::svg_number;
pub use geometry::lower::{
    circle_commands, ellipse_commands, line_commands, polygon_commands, rect_commands,
    shape_commands,
};
pub use geometry::svg_path::{bounding_box, render_svg_path, to_bez_path};
pub use geometry::transform::{ANGLE_EPSILON, render_transform};
pub use identity::datum::{Datum, UNADDRESSABLE_TAGS};
pub use identity::marks::{
    ClassTags, MARK_CLASS, MarkIdAllocator, MarkIdScheme, NAMESPACE_BLOCK, classify,
};
pub use identity::unique::{MAX_TOKEN_LEN, MIN_TOKEN_LEN, UniqueIdPool};
pub use output::element::{SvgElement, SvgNode, SvgTag};
pub use output::events::{Listener, Listeners, Modifiers, PointerEvent, PointerEventKind};
pub use output::markup::SvgDocument;
pub use output::raster::{MAX_RASTER_DIM, RasterImage};
pub use render::events::wire_listeners;
pub use render::nested::{NestedContainer, NestedRenderConfig, RemappedSelection};
pub use render::options::{RenderOptions, ResourceResolver, SelectHandler, SelectionQuery};
pub use render::session::{ROOT_KEY, RenderSession, SessionConfig, render};
pub use render::tree::{CHART_CONTAINER_CLASS, SELECTED_CLASS};
pub use scene::model::{
    ChartContainer, CircleShape, ColorFilter, Element, ElementKind, EllipseShape, Group,
    ImageMode, ImageShape, LineCap, LineJoin, LineShape, NumberModifier, PathShape,
    PlotSegmentRef, PolygonShape, RectShape, RigidTransform, Selectable, Style, TextAnchor,
    TextOnPathShape, TextShape,
};
pub use scene::path::{ArcTo, PathCommand};
pub use style::resolve::{NONE, PresentationAttrs, render_color, render_style};
