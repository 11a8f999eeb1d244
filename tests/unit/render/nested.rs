use std::sync::Mutex;

use super::*;
use crate::scene::model::PlotSegmentRef;

fn container() -> NestedContainer {
    NestedContainer::new(Selectable {
        plot_segment: PlotSegmentRef {
            id: "outer".to_string(),
            table: "sales".to_string(),
        },
        glyph_index: 2,
        row_indices: vec![10, 11, 12],
    })
}

fn local(rows: Vec<usize>) -> Selectable {
    Selectable {
        plot_segment: PlotSegmentRef {
            id: "inner".to_string(),
            table: "local".to_string(),
        },
        glyph_index: 0,
        row_indices: rows,
    }
}

#[test]
fn remap_translates_through_row_table() {
    let c = container();
    assert_eq!(c.remap_rows(&[2, 0]), Some(vec![12, 10]));
    assert_eq!(c.remap_rows(&[]), Some(vec![]));
    assert_eq!(c.remap_rows(&[3]), None);
}

#[test]
fn route_without_hit_is_the_container() {
    let c = container();
    assert_eq!(c.route(None).as_ref(), Some(c.selectable()));
}

#[test]
fn route_keeps_container_segment_and_glyph() {
    let routed = container().route(Some(&local(vec![1]))).unwrap();
    assert_eq!(routed.plot_segment.id, "outer");
    assert_eq!(routed.glyph_index, 2);
    assert_eq!(routed.row_indices, [11]);
    assert_eq!(container().route(Some(&local(vec![7]))), None);
}

#[test]
fn remapped_selection_queries_parent_table() {
    let asked = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&asked);
    let parent: Arc<dyn SelectionQuery> = Arc::new(move |table: &str, rows: &[usize]| {
        log.lock().unwrap().push((table.to_string(), rows.to_vec()));
        rows.contains(&12)
    });
    let selection = container().selection(parent);

    assert!(selection.is_selected("local", &[2]));
    assert!(!selection.is_selected("local", &[0]));
    // Out of range answers false without asking the parent.
    assert!(!selection.is_selected("local", &[9]));
    assert_eq!(
        *asked.lock().unwrap(),
        [("sales".to_string(), vec![12]), ("sales".to_string(), vec![10])]
    );
}

#[test]
fn derived_handler_remaps_and_drops_failures() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&calls);
    let parent: SelectHandler = Arc::new(move |s: &Selectable, m: Modifiers| {
        log.lock().unwrap().push((s.row_indices.clone(), m.ctrl_key));
    });
    let handler = container().handler(&parent);

    let ctrl = Modifiers {
        ctrl_key: true,
        ..Modifiers::default()
    };
    handler(&local(vec![0, 1]), ctrl);
    handler(&local(vec![5]), ctrl);
    assert_eq!(*calls.lock().unwrap(), [(vec![10, 11], true)]);
}

#[test]
fn render_config_forwards_resolver_and_sync() {
    let options = RenderOptions::new()
        .chart_component_sync(true)
        .resource_resolver(|src: &str| src.to_uppercase())
        .class_name("outer-only");
    let config = container().render_config(&options);
    assert!(config.chart_component_sync);
    assert!(config.selection.is_none());
    assert!(config.on_click.is_none());

    let child = config.into_options("chart".to_string());
    assert_eq!(child.resolve_resource("x.png"), "X.PNG");
    assert!(child.class_name.is_none());
    assert_eq!(child.key.as_deref(), Some("chart"));
}
