use anyhow::Context;

use crate::{
    foundation::{
        error::{ChartError, ChartResult},
        math::{svg_number, write_svg_number},
    },
    output::element::{SvgElement, SvgNode, SvgTag},
    style::resolve::PresentationAttrs,
};

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

impl SvgElement {
    /// Serialize this subtree as SVG markup. Listeners and keys are not part of the markup.
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        write_element(&mut out, self);
        out
    }
}

fn write_element(out: &mut String, el: &SvgElement) {
    out.push('<');
    out.push_str(el.tag.name());
    if let Some(id) = &el.id {
        write_attr(out, "id", id);
    }
    if let Some(class) = el.class_attr() {
        write_attr(out, "class", &class);
    }
    for (name, value) in &el.attrs {
        write_attr(out, name, value);
    }
    if let Some(style) = &el.style {
        write_presentation(out, style);
    }

    if el.children.is_empty() {
        out.push_str("/>");
        return;
    }
    out.push('>');
    for child in &el.children {
        match child {
            SvgNode::Element(child) => write_element(out, child),
            SvgNode::Text(text) => escape_into(out, text, false),
        }
    }
    out.push_str("</");
    out.push_str(el.tag.name());
    out.push('>');
}

fn write_presentation(out: &mut String, p: &PresentationAttrs) {
    write_attr(out, "stroke", &p.stroke);
    write_number_attr(out, "stroke-opacity", p.stroke_opacity);
    write_number_attr(out, "stroke-width", p.stroke_width);
    write_attr(out, "stroke-linecap", p.stroke_linecap.as_str());
    write_attr(out, "stroke-linejoin", p.stroke_linejoin.as_str());
    if let Some(dash) = &p.stroke_dasharray {
        write_attr(out, "stroke-dasharray", dash);
    }
    write_attr(out, "fill", &p.fill);
    write_number_attr(out, "fill-opacity", p.fill_opacity);
    write_attr(out, "text-anchor", p.text_anchor.as_str());
    write_number_attr(out, "opacity", p.opacity);
}

fn write_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    escape_into(out, value, true);
    out.push('"');
}

fn write_number_attr(out: &mut String, name: &str, value: f64) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    write_svg_number(out, value);
    out.push('"');
}

fn escape_into(out: &mut String, text: &str, in_attr: bool) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if in_attr => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}

#[derive(Clone, Debug)]
/// A rendered tree placed on a standalone canvas.
///
/// Chart coordinates are centered: the content group is translated so the chart origin sits at
/// the middle of the canvas.
pub struct SvgDocument {
    pub width: f64,
    pub height: f64,
    pub root: SvgElement,
}

impl SvgDocument {
    pub fn new(width: f64, height: f64, content: SvgElement) -> Self {
        let w = svg_number(width);
        let h = svg_number(height);
        let centered = SvgElement::new(SvgTag::G)
            .with_attr(
                "transform",
                format!("translate({},{})", svg_number(width / 2.0), svg_number(height / 2.0)),
            )
            .with_child(content);
        let root = SvgElement::new(SvgTag::Svg)
            .with_attr("xmlns", SVG_NS)
            .with_attr("xmlns:xlink", XLINK_NS)
            .with_attr("width", w.clone())
            .with_attr("height", h.clone())
            .with_attr("viewBox", format!("0 0 {w} {h}"))
            .with_child(centered);
        Self {
            width,
            height,
            root,
        }
    }

    pub fn to_markup(&self) -> String {
        self.root.to_markup()
    }

    /// Parse the written document into a `usvg` render tree.
    #[tracing::instrument(skip(self), fields(width = self.width, height = self.height))]
    pub fn to_usvg_tree(&self) -> ChartResult<usvg::Tree> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(ChartError::export(format!(
                "canvas must have a positive size, got {}x{}",
                self.width, self.height
            )));
        }
        let markup = self.to_markup();
        let opts = usvg::Options::default();
        let tree = usvg::Tree::from_data(markup.as_bytes(), &opts).context("parse svg tree")?;
        Ok(tree)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/output/markup.rs"]
mod tests;
