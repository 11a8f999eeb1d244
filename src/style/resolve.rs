use crate::{
    color::filter::apply_color_filter,
    foundation::core::Color,
    scene::model::{ColorFilter, LineCap, LineJoin, Style, TextAnchor},
};

/// Value written for absent stroke or fill.
pub const NONE: &str = "none";

#[derive(Clone, Debug, PartialEq)]
/// Concrete presentation attributes resolved from a [`Style`].
pub struct PresentationAttrs {
    pub stroke: String,
    pub stroke_opacity: f64,
    pub stroke_width: f64,
    pub stroke_linecap: LineCap,
    pub stroke_linejoin: LineJoin,
    pub stroke_dasharray: Option<String>,
    pub fill: String,
    pub fill_opacity: f64,
    pub text_anchor: TextAnchor,
    pub opacity: f64,
}

impl PresentationAttrs {
    /// `true` when a stroke color is painted.
    pub fn has_stroke(&self) -> bool {
        self.stroke != NONE
    }
}

impl Default for PresentationAttrs {
    fn default() -> Self {
        render_style(&Style::default())
    }
}

/// Format a color as `rgb(R,G,B)` after applying `filter`.
///
/// `None` maps to black, which is the fallback used where a color must always be painted.
pub fn render_color(color: Option<Color>, filter: Option<&ColorFilter>) -> String {
    let Some(mut color) = color else {
        return "rgb(0,0,0)".to_owned();
    };
    if let Some(filter) = filter {
        color = apply_color_filter(color, filter);
    }
    format!(
        "rgb({},{},{})",
        channel(color.r),
        channel(color.g),
        channel(color.b)
    )
}

fn channel(v: f64) -> i64 {
    v.round() as i64
}

/// Resolve a style record into presentation attributes with defaults applied.
pub fn render_style(style: &Style) -> PresentationAttrs {
    let filter = style.color_filter.as_ref();
    let paint = |c: Option<Color>| match c {
        Some(_) => render_color(c, filter),
        None => NONE.to_owned(),
    };

    PresentationAttrs {
        stroke: paint(style.stroke_color),
        stroke_opacity: style.stroke_opacity.unwrap_or(1.0),
        stroke_width: style.stroke_width.unwrap_or(1.0),
        stroke_linecap: style.stroke_linecap.unwrap_or_default(),
        stroke_linejoin: style.stroke_linejoin.unwrap_or_default(),
        stroke_dasharray: style.stroke_dasharray.clone(),
        fill: paint(style.fill_color),
        fill_opacity: style.fill_opacity.unwrap_or(1.0),
        text_anchor: style.text_anchor.unwrap_or_default(),
        opacity: style.opacity.unwrap_or(1.0),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/resolve.rs"]
mod tests;
