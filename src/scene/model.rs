use crate::{
    foundation::core::{Color, Point},
    foundation::error::ChartResult,
    scene::path::PathCommand,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One node of the scene graph produced by the layout pass.
///
/// The node kind and its geometry live in [`ElementKind`]; the remaining fields are shared by every
/// kind. On the wire the kind is the `"type"` field and the kind's fields sit next to the shared
/// ones:
///
/// ```json
/// { "type": "circle", "cx": 0, "cy": 0, "r": 4, "data": "{\"_TYPE\":\"symbol\"}" }
/// ```
pub struct Element {
    /// Kind tag plus kind-specific geometry.
    #[serde(flatten)]
    pub kind: ElementKind,
    /// Optional style record; absent fields fall back to documented defaults.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<Style>,
    /// Opaque serialized descriptor of the originating data element.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    /// Selection descriptor; present only on interactive nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selectable: Option<Selectable>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
/// Closed set of scene-graph node kinds.
pub enum ElementKind {
    /// Axis-aligned rectangle between two corners.
    Rect(RectShape),
    /// Circle around a center.
    Circle(CircleShape),
    /// Ellipse inscribed in the box between two corners.
    Ellipse(EllipseShape),
    /// Straight segment.
    Line(LineShape),
    /// Closed polygon.
    Polygon(PolygonShape),
    /// Free-form path given as commands.
    Path(PathShape),
    /// Text anchored at a point.
    Text(TextShape),
    /// Text laid out along a path.
    TextOnPath(TextOnPathShape),
    /// Raster or vector image referenced by URL.
    Image(ImageShape),
    /// A complete sub-chart embedded as a leaf.
    ChartContainer(ChartContainer),
    /// Ordered container of child nodes.
    Group(Group),
}

impl ElementKind {
    /// Wire name of the kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Rect(_) => "rect",
            Self::Circle(_) => "circle",
            Self::Ellipse(_) => "ellipse",
            Self::Line(_) => "line",
            Self::Polygon(_) => "polygon",
            Self::Path(_) => "path",
            Self::Text(_) => "text",
            Self::TextOnPath(_) => "text-on-path",
            Self::Image(_) => "image",
            Self::ChartContainer(_) => "chart-container",
            Self::Group(_) => "group",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RectShape {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CircleShape {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EllipseShape {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LineShape {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PolygonShape {
    #[serde(default)]
    pub points: Vec<Point>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PathShape {
    #[serde(default)]
    pub cmds: Vec<PathCommand>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextShape {
    pub cx: f64,
    pub cy: f64,
    pub text: String,
    pub font_family: String,
    pub font_size: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextOnPathShape {
    pub path_cmds: Vec<PathCommand>,
    pub text: String,
    pub font_family: String,
    pub font_size: f64,
    #[serde(default)]
    pub align: TextAnchor,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ImageShape {
    /// Left edge.
    pub x: f64,
    /// Bottom edge (y-up scene space).
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<ImageMode>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// Abstract image fit modes.
pub enum ImageMode {
    /// Fit inside the box, keeping the aspect ratio.
    Letterbox,
    /// Fill the box, ignoring the aspect ratio.
    Stretch,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A sub-chart that was laid out separately and is embedded as a single leaf.
///
/// The embedding node's own [`Element::selectable`] carries the row-index table that maps the
/// sub-chart's local rows to rows of the parent table.
pub struct ChartContainer {
    /// Root of the sub-chart's scene graph.
    pub chart: Box<Element>,
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Group {
    /// Children in paint order; later children paint over earlier ones.
    #[serde(default)]
    pub elements: Vec<Element>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transform: Option<RigidTransform>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Translation plus rotation (radians, counter-clockwise in y-up space).
pub struct RigidTransform {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub angle: f64,
}

impl RigidTransform {
    pub fn translate(x: f64, y: f64) -> Self {
        Self { x, y, angle: 0.0 }
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Abstract style record. Every field is optional.
pub struct Style {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_opacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_linecap: Option<LineCap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_linejoin: Option<LineJoin>,
    /// Raw SVG dash pattern, e.g. `"4 2"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_dasharray: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_opacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_anchor: Option<TextAnchor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_filter: Option<ColorFilter>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    Butt,
    #[default]
    Round,
    Square,
}

impl LineCap {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
            Self::Square => "square",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineJoin {
    Miter,
    #[default]
    Round,
    Bevel,
}

impl LineJoin {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Miter => "miter",
            Self::Round => "round",
            Self::Bevel => "bevel",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// Horizontal text anchoring; also used as the alignment of text along a path.
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Perceptual color adjustment applied to stroke and fill colors.
pub struct ColorFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saturation: Option<NumberModifier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lightness: Option<NumberModifier>,
}

impl ColorFilter {
    pub fn is_empty(&self) -> bool {
        self.saturation.is_none() && self.lightness.is_none()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Numeric adjustment: `set` overrides, otherwise `multiply`, `add`, `pow` in that order.
pub struct NumberModifier {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiply: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pow: Option<f64>,
}

impl NumberModifier {
    pub fn set(v: f64) -> Self {
        Self {
            set: Some(v),
            ..Self::default()
        }
    }

    pub fn multiply(v: f64) -> Self {
        Self {
            multiply: Some(v),
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Identifies which glyph and data rows an interactive node stands for.
pub struct Selectable {
    pub plot_segment: PlotSegmentRef,
    pub glyph_index: usize,
    pub row_indices: Vec<usize>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// The plot segment that owns a selectable glyph.
pub struct PlotSegmentRef {
    pub id: String,
    /// Name of the data table the segment iterates over.
    pub table: String,
}

impl Element {
    /// Wrap a kind with no style, payload or selection.
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            style: None,
            data: None,
            selectable: None,
        }
    }

    pub fn rect(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(ElementKind::Rect(RectShape { x1, y1, x2, y2 }))
    }

    pub fn circle(cx: f64, cy: f64, r: f64) -> Self {
        Self::new(ElementKind::Circle(CircleShape { cx, cy, r }))
    }

    pub fn ellipse(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(ElementKind::Ellipse(EllipseShape { x1, y1, x2, y2 }))
    }

    pub fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(ElementKind::Line(LineShape { x1, y1, x2, y2 }))
    }

    pub fn polygon(points: Vec<Point>) -> Self {
        Self::new(ElementKind::Polygon(PolygonShape { points }))
    }

    pub fn path(cmds: Vec<PathCommand>) -> Self {
        Self::new(ElementKind::Path(PathShape { cmds }))
    }

    pub fn text(
        cx: f64,
        cy: f64,
        text: impl Into<String>,
        font_family: impl Into<String>,
        font_size: f64,
    ) -> Self {
        Self::new(ElementKind::Text(TextShape {
            cx,
            cy,
            text: text.into(),
            font_family: font_family.into(),
            font_size,
        }))
    }

    pub fn group(elements: Vec<Element>, transform: Option<RigidTransform>) -> Self {
        Self::new(ElementKind::Group(Group {
            elements,
            transform,
            key: None,
        }))
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    pub fn with_data(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }

    pub fn with_selectable(mut self, selectable: Selectable) -> Self {
        self.selectable = Some(selectable);
        self
    }

    /// Decode a scene graph from its JSON form.
    pub fn from_json(json: &str) -> ChartResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encode the scene graph back to JSON.
    pub fn to_json(&self) -> ChartResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
