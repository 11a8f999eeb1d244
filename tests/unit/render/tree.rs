use std::sync::{Arc, Mutex};

use super::*;
use crate::{
    foundation::core::{Color, Point},
    output::events::{Modifiers, PointerEvent},
    render::session::render,
    scene::{
        model::{PlotSegmentRef, RigidTransform, Selectable},
        path::PathCommand,
    },
};

fn selectable(table: &str, glyph: usize, rows: Vec<usize>) -> Selectable {
    Selectable {
        plot_segment: PlotSegmentRef {
            id: format!("{table}-seg"),
            table: table.to_string(),
        },
        glyph_index: glyph,
        row_indices: rows,
    }
}

fn red_fill() -> Style {
    Style {
        fill_color: Some(Color::rgb(255.0, 0.0, 0.0)),
        ..Style::default()
    }
}

#[test]
fn shape_carries_id_classes_datum_and_style() {
    let payload = r#"{"_TYPE":"symbol","_MARKID":"s1"}"#;
    let scene = Element::rect(0.0, 0.0, 2.0, 1.0)
        .with_style(red_fill())
        .with_data(payload);
    let out = render(Some(&scene), &RenderOptions::new().class_name("glyph")).unwrap();

    assert_eq!(out.tag, SvgTag::Path);
    assert_eq!(out.attr("d"), Some("M 0,0 L 0,-1 L 2,-1 L 2,0 Z"));
    assert_eq!(out.id.as_deref(), Some("mark1"));
    assert_eq!(out.class.as_slice(), ["glyph", "mark", "s1", "symbol"]);
    assert_eq!(out.attr("data-datum"), Some(payload));
    assert_eq!(out.style.as_ref().unwrap().fill, "rgb(255,0,0)");
    assert_eq!(out.attr("cursor"), None);
    assert!(out.listeners.is_empty());
}

#[test]
fn every_shape_kind_lowers_to_a_path() {
    let scenes = [
        Element::circle(0.0, 0.0, 1.0),
        Element::ellipse(0.0, 0.0, 2.0, 1.0),
        Element::line(0.0, 0.0, 1.0, 1.0),
        Element::polygon(vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(0.0, 1.0)]),
        Element::path(vec![PathCommand::move_to(0.0, 1.0), PathCommand::line_to(2.0, 3.0)]),
    ];
    for scene in &scenes {
        let out = render(Some(scene), &RenderOptions::new()).unwrap();
        assert_eq!(out.tag, SvgTag::Path, "{}", scene.kind.name());
        assert!(out.attr("d").is_some_and(|d| d.starts_with("M ")));
    }
}

#[test]
fn no_style_and_override() {
    let scene = Element::circle(0.0, 0.0, 1.0).with_style(red_fill());
    let bare = render(Some(&scene), &RenderOptions::new().no_style(true)).unwrap();
    assert!(bare.style.is_none());

    let blue = Style {
        fill_color: Some(Color::rgb(0.0, 0.0, 255.0)),
        ..Style::default()
    };
    let over = render(Some(&scene), &RenderOptions::new().style_override(blue)).unwrap();
    assert_eq!(over.style.unwrap().fill, "rgb(0,0,255)");
}

#[test]
fn unstyled_shape_gets_defaults() {
    let out = render(Some(&Element::circle(0.0, 0.0, 1.0)), &RenderOptions::new()).unwrap();
    assert_eq!(out.style, Some(PresentationAttrs::default()));
}

#[test]
fn selectable_node_is_interactive_and_marked_selected() {
    let scene = Element::circle(0.0, 0.0, 1.0).with_selectable(selectable("main", 0, vec![3]));
    let options = RenderOptions::new()
        .selection(|table: &str, rows: &[usize]| table == "main" && rows == [3])
        .on_click(|_: &Selectable, _: Modifiers| {});
    let out = render(Some(&scene), &options).unwrap();
    assert_eq!(out.attr("cursor"), Some("pointer"));
    assert_eq!(out.attr("pointer-events"), Some("all"));
    assert!(out.has_class(SELECTED_CLASS));
    assert!(out.listeners.on_click.is_some());
    assert!(out.listeners.on_mouse_enter.is_none());
}

#[test]
fn plain_text_is_one_node() {
    let scene = Element::text(3.0, 4.0, "Total", "serif", 12.0);
    let out = render(Some(&scene), &RenderOptions::new()).unwrap();
    assert_eq!(out.tag, SvgTag::Text);
    assert_eq!(out.attr("x"), Some("3"));
    assert_eq!(out.attr("y"), Some("-4"));
    assert_eq!(out.attr("font-family"), Some("serif"));
    assert_eq!(out.attr("font-size"), Some("12px"));
    assert_eq!(out.text_content(), "Total");
}

#[test]
fn stroked_text_renders_outline_then_fill() {
    let style = Style {
        stroke_color: Some(Color::rgb(255.0, 255.0, 255.0)),
        stroke_width: Some(3.0),
        fill_color: Some(Color::rgb(0.0, 0.0, 255.0)),
        ..Style::default()
    };
    let scene = Element::text(0.0, 0.0, "Label", "serif", 10.0)
        .with_style(style)
        .with_data(r#"{"_TYPE":"label"}"#);
    let out = render(Some(&scene), &RenderOptions::new()).unwrap();

    assert_eq!(out.tag, SvgTag::G);
    assert_eq!(out.id.as_deref(), Some("mark1"));
    let passes: Vec<_> = out.child_elements().collect();
    assert_eq!(passes.len(), 2);
    let outline = passes[0].style.as_ref().unwrap();
    let fill = passes[1].style.as_ref().unwrap();
    assert_eq!(outline.fill, "rgb(255,255,255)");
    assert_eq!(outline.stroke, NONE);
    assert_eq!(fill.fill, "rgb(0,0,255)");
    assert_eq!(fill.stroke, NONE);
    assert!(passes.iter().all(|p| p.tag == SvgTag::Text && p.text_content() == "Label"));
}

#[test]
fn text_on_path_structure() {
    let scene = Element::new(ElementKind::TextOnPath(TextOnPathShape {
        path_cmds: vec![PathCommand::move_to(0.0, 0.0), PathCommand::line_to(10.0, 5.0)],
        text: "along".to_string(),
        font_family: "serif".to_string(),
        font_size: 9.0,
        align: TextAnchor::End,
    }));
    let out = render(Some(&scene), &RenderOptions::new()).unwrap();

    assert_eq!(out.tag, SvgTag::G);
    let children: Vec<_> = out.child_elements().collect();
    assert_eq!(children[0].tag, SvgTag::Defs);
    let guide = children[0].child_elements().next().unwrap();
    let reference = guide.id.clone().unwrap();
    assert!(reference.starts_with('u'));
    assert_eq!(guide.attr("fill"), Some("none"));
    assert_eq!(guide.attr("d"), Some("M 0,0 L 10,-5"));

    let text = children[1];
    let style = text.style.as_ref().unwrap();
    assert_eq!(style.text_anchor, TextAnchor::End);
    assert_eq!(style.fill, "rgb(0,0,0)");
    let text_path = text.child_elements().next().unwrap();
    assert_eq!(text_path.tag, SvgTag::TextPath);
    assert_eq!(text_path.attr("xlink:href"), Some(format!("#{reference}").as_str()));
    assert_eq!(text_path.attr("startOffset"), Some("100%"));
    assert_eq!(text_path.text_content(), "along");
}

#[test]
fn image_flips_by_height_and_resolves_src() {
    let scene = Element::new(ElementKind::Image(ImageShape {
        x: 1.0,
        y: 2.0,
        width: 10.0,
        height: 4.0,
        src: "logo.png".to_string(),
        mode: Some(ImageMode::Letterbox),
    }));
    let options = RenderOptions::new().resource_resolver(|src: &str| format!("https://cdn/{src}"));
    let out = render(Some(&scene), &options).unwrap();
    assert_eq!(out.tag, SvgTag::Image);
    assert_eq!(out.attr("y"), Some("-6"));
    assert_eq!(out.attr("xlink:href"), Some("https://cdn/logo.png"));
    assert_eq!(out.attr("preserveAspectRatio"), Some("meet"));

    let ElementKind::Image(mut plain) = scene.kind.clone() else {
        unreachable!()
    };
    plain.mode = None;
    let out = render(Some(&Element::new(ElementKind::Image(plain))), &RenderOptions::new()).unwrap();
    assert_eq!(out.attr("preserveAspectRatio"), None);
    assert_eq!(out.attr("xlink:href"), Some("logo.png"));
}

#[test]
fn group_of_two_circles() {
    let scene = Element::group(
        vec![
            Element::circle(0.0, 0.0, 1.0).with_data(r#"{"_TYPE":"symbol"}"#),
            Element::circle(5.0, 0.0, 1.0).with_data(r#"{"_TYPE":"symbol"}"#),
        ],
        Some(RigidTransform::translate(10.0, 20.0)),
    );
    let out = render(
        Some(&scene),
        &RenderOptions::new().class_name("outer").no_style(true),
    )
    .unwrap();

    assert_eq!(out.tag, SvgTag::G);
    assert_eq!(out.attr("transform"), Some("translate(10,-20)"));
    assert_eq!(out.attr("opacity"), Some("1"));
    assert!(out.has_class("outer"));

    let children: Vec<_> = out.child_elements().collect();
    assert_eq!(children.len(), 2);
    assert_eq!(children[0].key.as_deref(), Some("m0"));
    assert_eq!(children[1].key.as_deref(), Some("m1"));
    assert_ne!(children[0].id, children[1].id);
    for child in &children {
        assert!(child.attr("transform").is_none());
        assert!(!child.has_class("outer"));
        assert!(child.style.is_some());
    }
}

#[test]
fn group_key_and_opacity_come_from_the_group() {
    let scene = Element::new(ElementKind::Group(Group {
        elements: vec![],
        transform: None,
        key: Some("legend".to_string()),
    }))
    .with_style(Style {
        opacity: Some(0.5),
        ..Style::default()
    });
    let out = render(Some(&scene), &RenderOptions::new().key("root")).unwrap();
    assert_eq!(out.key.as_deref(), Some("legend"));
    assert_eq!(out.attr("opacity"), Some("0.5"));
    assert!(out.attr("transform").is_none());
    assert!(out.style.is_none());
}

fn nested_scene() -> Element {
    let inner = Element::circle(0.0, 0.0, 1.0).with_selectable(selectable("local", 0, vec![1]));
    Element::new(ElementKind::ChartContainer(ChartContainer {
        chart: Box::new(Element::group(vec![inner], None)),
        width: 100.0,
        height: 50.0,
    }))
    .with_data(r#"{"_TYPE":"nested-chart"}"#)
}

#[test]
fn chart_container_remaps_clicks_into_parent_rows() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&calls);
    let options = RenderOptions::new()
        .class_name("outer")
        .on_click(move |s: &Selectable, _: Modifiers| {
            log.lock().unwrap().push((s.plot_segment.table.clone(), s.glyph_index, s.row_indices.clone()));
        });
    let scene = nested_scene().with_selectable(selectable("sales", 4, vec![20, 21]));
    let out = render(Some(&scene), &options).unwrap();

    assert_eq!(out.tag, SvgTag::G);
    assert_eq!(out.class.as_slice(), [CHART_CONTAINER_CLASS, "outer", "nested-chart"]);
    assert_eq!(out.id, None);

    // container > sub-chart group > circle
    let ev = PointerEvent::click();
    assert_eq!(out.dispatch(&[0, 0], &ev), 1);
    assert_eq!(*calls.lock().unwrap(), [("sales".to_string(), 4, vec![21])]);

    // A click on the container itself reports the container.
    assert_eq!(out.dispatch(&[], &PointerEvent::click()), 1);
    assert_eq!(calls.lock().unwrap()[1], ("sales".to_string(), 4, vec![20, 21]));

    let circle = out.descendants()[2];
    assert!(!circle.has_class("outer"));
}

#[test]
fn chart_container_selection_is_remapped() {
    let scene = nested_scene().with_selectable(selectable("sales", 0, vec![7, 8]));
    let options =
        RenderOptions::new().selection(|table: &str, rows: &[usize]| table == "sales" && rows == [8]);
    let out = render(Some(&scene), &options).unwrap();
    let circle = out.descendants()[2];
    assert_eq!(circle.tag, SvgTag::Path);
    assert!(circle.has_class(SELECTED_CLASS));
}

#[test]
fn chart_container_without_selectable_is_inert() {
    let options = RenderOptions::new()
        .on_click(|_: &Selectable, _: Modifiers| panic!("no handler expected"))
        .selection(|_: &str, _: &[usize]| true);
    let out = render(Some(&nested_scene()), &options).unwrap();
    let circle = out.descendants()[2];
    assert!(circle.listeners.is_empty());
    assert!(!circle.has_class(SELECTED_CLASS));
    assert_eq!(out.dispatch(&[0, 0], &PointerEvent::click()), 0);
}
