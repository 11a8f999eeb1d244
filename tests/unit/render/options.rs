use super::*;
use crate::scene::model::PlotSegmentRef;

fn selectable(rows: Vec<usize>) -> Selectable {
    Selectable {
        plot_segment: PlotSegmentRef {
            id: "seg".to_string(),
            table: "main".to_string(),
        },
        glyph_index: 0,
        row_indices: rows,
    }
}

#[test]
fn children_inherit_only_shared_options() {
    let parent = RenderOptions::new()
        .no_style(true)
        .class_name("highlight")
        .key("root")
        .chart_component_sync(true)
        .resource_resolver(|src: &str| format!("cdn/{src}"))
        .selection(|_: &str, _: &[usize]| true)
        .on_click(|_: &Selectable, _: Modifiers| {});

    let child = parent.for_child("m0".to_string());
    assert_eq!(child.key.as_deref(), Some("m0"));
    assert!(!child.no_style);
    assert!(child.class_name.is_none());
    assert!(child.style_override.is_none());
    assert!(child.chart_component_sync);
    assert!(child.on_click.is_some());
    assert!(child.on_mouse_enter.is_none());
    assert_eq!(child.resolve_resource("a.png"), "cdn/a.png");
    assert!(child.is_selected(&selectable(vec![1])));
}

#[test]
fn missing_resolver_passes_src_through() {
    assert_eq!(RenderOptions::new().resolve_resource("a.png"), "a.png");
}

#[test]
fn selection_query_sees_table_and_rows() {
    let options = RenderOptions::new()
        .selection(|table: &str, rows: &[usize]| table == "main" && rows.contains(&2));
    assert!(options.is_selected(&selectable(vec![2, 5])));
    assert!(!options.is_selected(&selectable(vec![1])));
    assert!(!RenderOptions::new().is_selected(&selectable(vec![2])));
}

#[test]
fn debug_hides_closures() {
    let dbg = format!("{:?}", RenderOptions::new().on_mouse_leave(|_: &Selectable, _: Modifiers| {}));
    assert!(dbg.contains("on_mouse_leave: true"));
    assert!(dbg.contains("selection: false"));
}
