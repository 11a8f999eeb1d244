use smallvec::SmallVec;

use crate::{output::events::Listeners, style::resolve::PresentationAttrs};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SvgTag {
    Svg,
    G,
    Defs,
    Path,
    Text,
    TextPath,
    Image,
}

impl SvgTag {
    pub fn name(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::G => "g",
            Self::Defs => "defs",
            Self::Path => "path",
            Self::Text => "text",
            Self::TextPath => "textPath",
            Self::Image => "image",
        }
    }
}

#[derive(Clone, Debug)]
pub enum SvgNode {
    Element(SvgElement),
    Text(String),
}

impl SvgNode {
    pub fn as_element(&self) -> Option<&SvgElement> {
        match self {
            Self::Element(el) => Some(el),
            Self::Text(_) => None,
        }
    }
}

impl From<SvgElement> for SvgNode {
    fn from(el: SvgElement) -> Self {
        Self::Element(el)
    }
}

#[derive(Clone, Debug)]
/// One element of the renderer's output tree.
///
/// `id`, `class` and the presentation attributes in `style` are kept apart from the free-form
/// `attrs` so callers can inspect them without parsing strings. `key` is a reconciliation hint
/// for hosts and is never written to markup.
pub struct SvgElement {
    pub tag: SvgTag,
    pub key: Option<String>,
    pub id: Option<String>,
    pub class: SmallVec<[String; 4]>,
    /// Attributes in insertion order.
    pub attrs: Vec<(&'static str, String)>,
    pub style: Option<PresentationAttrs>,
    pub listeners: Listeners,
    pub children: Vec<SvgNode>,
}

impl SvgElement {
    pub fn new(tag: SvgTag) -> Self {
        Self {
            tag,
            key: None,
            id: None,
            class: SmallVec::new(),
            attrs: Vec::new(),
            style: None,
            listeners: Listeners::default(),
            children: Vec::new(),
        }
    }

    /// Builder form of [`SvgElement::set_attr`].
    pub fn with_attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn with_child(mut self, child: impl Into<SvgNode>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Set `name`, replacing an earlier value in place.
    pub fn set_attr(&mut self, name: &'static str, value: impl Into<String>) {
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.class.iter().any(|c| c == class)
    }

    /// Space-separated class list, or `None` when empty.
    pub fn class_attr(&self) -> Option<String> {
        (!self.class.is_empty()).then(|| self.class.join(" "))
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &SvgElement> {
        self.children.iter().filter_map(SvgNode::as_element)
    }

    /// Concatenated text content of this subtree.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }

    /// Depth-first pre-order walk over this element and its descendants.
    pub fn descendants(&self) -> Vec<&SvgElement> {
        let mut out = Vec::new();
        collect_elements(self, &mut out);
        out
    }
}

fn collect_elements<'a>(el: &'a SvgElement, out: &mut Vec<&'a SvgElement>) {
    out.push(el);
    for child in el.child_elements() {
        collect_elements(child, out);
    }
}

fn collect_text(el: &SvgElement, out: &mut String) {
    for child in &el.children {
        match child {
            SvgNode::Text(t) => out.push_str(t),
            SvgNode::Element(e) => collect_text(e, out),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/output/element.rs"]
mod tests;
