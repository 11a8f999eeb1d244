use std::sync::Arc;

use crate::{
    output::events::Modifiers,
    render::options::{RenderOptions, ResourceResolver, SelectHandler, SelectionQuery},
    scene::model::Selectable,
};

#[derive(Clone, Debug)]
/// Bridges a sub-chart's row space to its parent's.
///
/// The container's `row_indices` maps each local row `i` of the sub-chart to parent row
/// `row_indices[i]`. Selection queries and handler calls crossing the boundary are translated
/// through it; a local index with no entry fails the whole translation.
pub struct NestedContainer {
    selectable: Arc<Selectable>,
}

impl NestedContainer {
    pub fn new(selectable: Selectable) -> Self {
        Self {
            selectable: Arc::new(selectable),
        }
    }

    pub fn selectable(&self) -> &Selectable {
        &self.selectable
    }

    /// Parent rows for `local_rows`, or `None` if any index is out of range.
    pub fn remap_rows(&self, local_rows: &[usize]) -> Option<Vec<usize>> {
        remap(&self.selectable.row_indices, local_rows)
    }

    /// The selectable to report to the parent for a hit inside the sub-chart.
    ///
    /// `None` means nothing inside was hit and yields the container's own selectable. A hit keeps
    /// the container's plot segment and glyph index with its rows remapped.
    pub fn route(&self, hit: Option<&Selectable>) -> Option<Selectable> {
        let Some(hit) = hit else {
            return Some((*self.selectable).clone());
        };
        match self.remap_rows(&hit.row_indices) {
            Some(row_indices) => Some(Selectable {
                plot_segment: self.selectable.plot_segment.clone(),
                glyph_index: self.selectable.glyph_index,
                row_indices,
            }),
            None => {
                tracing::warn!(
                    table = %self.selectable.plot_segment.table,
                    rows = ?hit.row_indices,
                    available = self.selectable.row_indices.len(),
                    "nested row index out of range, dropping event"
                );
                None
            }
        }
    }

    pub fn selection(&self, parent: Arc<dyn SelectionQuery>) -> RemappedSelection {
        RemappedSelection {
            parent,
            table: self.selectable.plot_segment.table.clone(),
            row_indices: self.selectable.row_indices.clone().into(),
        }
    }

    /// Wrap a parent handler so the sub-chart's selectables reach it remapped.
    pub fn handler(&self, parent: &SelectHandler) -> SelectHandler {
        let parent = Arc::clone(parent);
        let container = self.clone();
        Arc::new(move |hit: &Selectable, modifiers: Modifiers| {
            if let Some(routed) = container.route(Some(hit)) {
                parent(&routed, modifiers);
            }
        })
    }

    /// Everything the sub-chart inherits from the enclosing render.
    pub fn render_config(&self, options: &RenderOptions) -> NestedRenderConfig {
        let selection = options
            .selection
            .as_ref()
            .map(|parent| Arc::new(self.selection(Arc::clone(parent))) as Arc<dyn SelectionQuery>);
        NestedRenderConfig {
            external_resource_resolver: options.external_resource_resolver.clone(),
            chart_component_sync: options.chart_component_sync,
            selection,
            on_click: options.on_click.as_ref().map(|h| self.handler(h)),
            on_mouse_enter: options.on_mouse_enter.as_ref().map(|h| self.handler(h)),
            on_mouse_leave: options.on_mouse_leave.as_ref().map(|h| self.handler(h)),
        }
    }
}

fn remap(table: &[usize], local_rows: &[usize]) -> Option<Vec<usize>> {
    local_rows.iter().map(|&i| table.get(i).copied()).collect()
}

/// Selection query seen by a sub-chart; answers in terms of the parent's table and rows.
pub struct RemappedSelection {
    parent: Arc<dyn SelectionQuery>,
    table: String,
    row_indices: Arc<[usize]>,
}

impl SelectionQuery for RemappedSelection {
    fn is_selected(&self, _local_table: &str, local_rows: &[usize]) -> bool {
        match remap(&self.row_indices, local_rows) {
            Some(rows) => self.parent.is_selected(&self.table, &rows),
            None => {
                tracing::warn!(
                    table = %self.table,
                    rows = ?local_rows,
                    available = self.row_indices.len(),
                    "nested row index out of range, reporting unselected"
                );
                false
            }
        }
    }
}

#[derive(Clone, Default)]
/// The sub-chart's own render configuration.
pub struct NestedRenderConfig {
    pub external_resource_resolver: Option<ResourceResolver>,
    pub chart_component_sync: bool,
    pub selection: Option<Arc<dyn SelectionQuery>>,
    pub on_click: Option<SelectHandler>,
    pub on_mouse_enter: Option<SelectHandler>,
    pub on_mouse_leave: Option<SelectHandler>,
}

impl NestedRenderConfig {
    /// Options for rendering the sub-chart root under `key`.
    pub fn into_options(self, key: String) -> RenderOptions {
        RenderOptions {
            key: Some(key),
            chart_component_sync: self.chart_component_sync,
            external_resource_resolver: self.external_resource_resolver,
            selection: self.selection,
            on_click: self.on_click,
            on_mouse_enter: self.on_mouse_enter,
            on_mouse_leave: self.on_mouse_leave,
            ..RenderOptions::default()
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/nested.rs"]
mod tests;
