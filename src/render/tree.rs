use crate::{
    foundation::math::svg_number,
    geometry::{lower::shape_commands, svg_path::render_svg_path, transform::render_transform},
    identity::{
        datum::Datum,
        marks::{ClassTags, classify},
    },
    output::{
        element::{SvgElement, SvgNode, SvgTag},
        events::Listeners,
    },
    render::{
        events::wire_listeners,
        nested::{NestedContainer, NestedRenderConfig},
        options::RenderOptions,
        session::RenderSession,
    },
    scene::model::{
        ChartContainer, Element, ElementKind, Group, ImageMode, ImageShape, Style, TextAnchor,
        TextOnPathShape, TextShape,
    },
    style::resolve::{NONE, PresentationAttrs, render_color, render_style},
};

/// Class added to nodes whose rows the selection query reports as selected.
pub const SELECTED_CLASS: &str = "selected";
/// Class of the group wrapping an embedded sub-chart.
pub const CHART_CONTAINER_CLASS: &str = "chart-container";

const NESTED_CHART_KEY: &str = "chart";

/// Identity and interaction shared by every node kind.
struct Decoration {
    id: Option<String>,
    class: ClassTags,
    datum: Option<String>,
    interactive: bool,
    listeners: Listeners,
}

impl Decoration {
    fn apply(self, el: &mut SvgElement) {
        el.id = self.id;
        el.class.extend(self.class);
        if let Some(datum) = self.datum {
            el.set_attr("data-datum", datum);
        }
        if self.interactive {
            el.set_attr("cursor", "pointer");
            el.set_attr("pointer-events", "all");
        }
        el.listeners = self.listeners;
    }
}

impl RenderSession {
    /// Render `element` and its subtree. `instance_key` identifies the node across passes.
    pub(super) fn render_node(
        &mut self,
        element: &Element,
        options: &RenderOptions,
        instance_key: &str,
    ) -> SvgElement {
        // Ids are assigned before children so numbering follows document order.
        let decoration = self.decoration(element, options);
        let style_src = options
            .style_override
            .as_ref()
            .or(element.style.as_ref());
        let presentation =
            (!options.no_style).then(|| style_src.map(render_style).unwrap_or_default());

        let mut el = match &element.kind {
            kind @ (ElementKind::Rect(_)
            | ElementKind::Circle(_)
            | ElementKind::Ellipse(_)
            | ElementKind::Line(_)
            | ElementKind::Polygon(_)
            | ElementKind::Path(_)) => {
                let d = shape_commands(kind)
                    .map(|cmds| render_svg_path(&cmds))
                    .unwrap_or_default();
                let mut path = SvgElement::new(SvgTag::Path).with_attr("d", d);
                path.style = presentation;
                path
            }
            ElementKind::Text(text) => render_text(text, presentation),
            ElementKind::TextOnPath(shape) => {
                let reference = self.text_path_ref(instance_key);
                render_text_on_path(shape, &reference, style_src, presentation)
            }
            ElementKind::Image(image) => render_image(image, options, presentation),
            ElementKind::ChartContainer(container) => {
                self.render_chart_container(container, element, options, instance_key)
            }
            ElementKind::Group(group) => self.render_group(group, element, options, instance_key),
        };

        decoration.apply(&mut el);
        if el.key.is_none() {
            el.key = options.key.clone();
        }
        el
    }

    fn decoration(&mut self, element: &Element, options: &RenderOptions) -> Decoration {
        let mut class = ClassTags::new();
        if let Some(name) = &options.class_name {
            class.extend(name.split_whitespace().map(str::to_owned));
        }

        let mut id = None;
        if let Some(payload) = element.data.as_deref() {
            let datum = Datum::parse(payload);
            id = self.marks.mark_id(&datum);
            class.extend(classify(&datum));
        }

        let (interactive, listeners) = match &element.selectable {
            Some(selectable) => {
                if options.is_selected(selectable) {
                    class.push(SELECTED_CLASS.to_owned());
                }
                (true, wire_listeners(selectable, options))
            }
            None => (false, Listeners::default()),
        };

        Decoration {
            id,
            class,
            datum: element.data.clone(),
            interactive,
            listeners,
        }
    }

    fn render_group(
        &mut self,
        group: &Group,
        element: &Element,
        options: &RenderOptions,
        instance_key: &str,
    ) -> SvgElement {
        let opacity = element
            .style
            .as_ref()
            .and_then(|s| s.opacity)
            .unwrap_or(1.0);

        let mut g = SvgElement::new(SvgTag::G);
        g.key = group.key.clone().or_else(|| options.key.clone());
        if let Some(transform) = render_transform(group.transform.as_ref()) {
            g.set_attr("transform", transform);
        }
        g.set_attr("opacity", svg_number(opacity));

        for (index, child) in group.elements.iter().enumerate() {
            let key = format!("m{index}");
            let child_instance = format!("{instance_key}/{key}");
            let rendered = self.render_node(child, &options.for_child(key), &child_instance);
            g.children.push(rendered.into());
        }
        g
    }

    fn render_chart_container(
        &mut self,
        container: &ChartContainer,
        element: &Element,
        options: &RenderOptions,
        instance_key: &str,
    ) -> SvgElement {
        let config = match &element.selectable {
            Some(selectable) => NestedContainer::new(selectable.clone()).render_config(options),
            None => {
                tracing::debug!(
                    instance_key,
                    "chart container has no selectable, sub-chart renders without interaction"
                );
                NestedRenderConfig {
                    external_resource_resolver: options.external_resource_resolver.clone(),
                    chart_component_sync: options.chart_component_sync,
                    ..NestedRenderConfig::default()
                }
            }
        };

        let chart_instance = format!("{instance_key}/{NESTED_CHART_KEY}");
        let chart = self.render_node(
            &container.chart,
            &config.into_options(NESTED_CHART_KEY.to_owned()),
            &chart_instance,
        );

        let mut g = SvgElement::new(SvgTag::G).with_child(chart);
        g.class.push(CHART_CONTAINER_CLASS.to_owned());
        g
    }
}

fn render_text(text: &TextShape, presentation: Option<PresentationAttrs>) -> SvgElement {
    let pass = |style: Option<PresentationAttrs>| {
        let mut el = SvgElement::new(SvgTag::Text)
            .with_attr("font-family", text.font_family.clone())
            .with_attr("font-size", format!("{}px", svg_number(text.font_size)))
            .with_attr("x", svg_number(text.cx))
            .with_attr("y", svg_number(-text.cy))
            .with_child(SvgNode::Text(text.text.clone()));
        el.style = style;
        el
    };

    match presentation {
        Some(style) if style.has_stroke() => {
            let outline = PresentationAttrs {
                fill: style.stroke.clone(),
                stroke: NONE.to_owned(),
                ..style.clone()
            };
            let fill = PresentationAttrs {
                stroke: NONE.to_owned(),
                ..style
            };
            SvgElement::new(SvgTag::G)
                .with_child(pass(Some(outline)))
                .with_child(pass(Some(fill)))
        }
        other => pass(other),
    }
}

fn start_offset(align: TextAnchor) -> &'static str {
    match align {
        TextAnchor::Start => "0%",
        TextAnchor::Middle => "50%",
        TextAnchor::End => "100%",
    }
}

fn render_text_on_path(
    shape: &TextOnPathShape,
    reference: &str,
    style_src: Option<&Style>,
    presentation: Option<PresentationAttrs>,
) -> SvgElement {
    let mut guide = SvgElement::new(SvgTag::Path)
        .with_attr("fill", NONE)
        .with_attr("d", render_svg_path(&shape.path_cmds));
    guide.id = Some(reference.to_owned());

    let mut text = SvgElement::new(SvgTag::Text)
        .with_attr("font-family", shape.font_family.clone())
        .with_attr("font-size", format!("{}px", svg_number(shape.font_size)));
    match presentation {
        Some(mut style) => {
            style.text_anchor = shape.align;
            style.fill = render_color(
                style_src.and_then(|s| s.fill_color),
                style_src.and_then(|s| s.color_filter.as_ref()),
            );
            text.style = Some(style);
        }
        None => text.set_attr("text-anchor", shape.align.as_str()),
    }

    let text_path = SvgElement::new(SvgTag::TextPath)
        .with_attr("xlink:href", format!("#{reference}"))
        .with_attr("startOffset", start_offset(shape.align))
        .with_child(SvgNode::Text(shape.text.clone()));

    SvgElement::new(SvgTag::G)
        .with_child(SvgElement::new(SvgTag::Defs).with_child(guide))
        .with_child(text.with_child(text_path))
}

fn render_image(
    image: &ImageShape,
    options: &RenderOptions,
    presentation: Option<PresentationAttrs>,
) -> SvgElement {
    let mut el = SvgElement::new(SvgTag::Image)
        .with_attr("x", svg_number(image.x))
        .with_attr("y", svg_number(-image.y - image.height))
        .with_attr("width", svg_number(image.width))
        .with_attr("height", svg_number(image.height))
        .with_attr("xlink:href", options.resolve_resource(&image.src));
    if let Some(mode) = image.mode {
        let aspect = match mode {
            ImageMode::Letterbox => "meet",
            ImageMode::Stretch => "none",
        };
        el.set_attr("preserveAspectRatio", aspect);
    }
    el.style = presentation;
    el
}

#[cfg(test)]
#[path = "../../tests/unit/render/tree.rs"]
mod tests;
