use std::{fmt, sync::Arc};

use crate::{
    output::events::Modifiers,
    scene::model::{Selectable, Style},
};

/// Maps an image `src` to the URL written into the output.
pub type ResourceResolver = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Receives the selectable an event was raised on.
pub type SelectHandler = Arc<dyn Fn(&Selectable, Modifiers) + Send + Sync>;

/// Answers whether a set of rows in a table is currently selected.
pub trait SelectionQuery: Send + Sync {
    fn is_selected(&self, table: &str, row_indices: &[usize]) -> bool;
}

impl<F> SelectionQuery for F
where
    F: Fn(&str, &[usize]) -> bool + Send + Sync,
{
    fn is_selected(&self, table: &str, row_indices: &[usize]) -> bool {
        self(table, row_indices)
    }
}

#[derive(Clone, Default)]
/// Per-pass rendering options.
///
/// Only the resolver, sync flag, selection query and handlers reach a group's children; see
/// [`RenderOptions::for_child`].
pub struct RenderOptions {
    /// Skip style resolution entirely.
    pub no_style: bool,
    /// Used instead of each element's own style.
    pub style_override: Option<Style>,
    /// Extra class token(s) placed before the datum classes.
    pub class_name: Option<String>,
    pub key: Option<String>,
    /// Passed through to nested charts; it has no effect on markup.
    pub chart_component_sync: bool,
    pub external_resource_resolver: Option<ResourceResolver>,
    pub selection: Option<Arc<dyn SelectionQuery>>,
    pub on_click: Option<SelectHandler>,
    pub on_mouse_enter: Option<SelectHandler>,
    pub on_mouse_leave: Option<SelectHandler>,
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn no_style(mut self, no_style: bool) -> Self {
        self.no_style = no_style;
        self
    }

    pub fn style_override(mut self, style: Style) -> Self {
        self.style_override = Some(style);
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn chart_component_sync(mut self, sync: bool) -> Self {
        self.chart_component_sync = sync;
        self
    }

    pub fn resource_resolver(
        mut self,
        resolver: impl Fn(&str) -> String + Send + Sync + 'static,
    ) -> Self {
        self.external_resource_resolver = Some(Arc::new(resolver));
        self
    }

    pub fn selection(mut self, selection: impl SelectionQuery + 'static) -> Self {
        self.selection = Some(Arc::new(selection));
        self
    }

    pub fn on_click(
        mut self,
        handler: impl Fn(&Selectable, Modifiers) + Send + Sync + 'static,
    ) -> Self {
        self.on_click = Some(Arc::new(handler));
        self
    }

    pub fn on_mouse_enter(
        mut self,
        handler: impl Fn(&Selectable, Modifiers) + Send + Sync + 'static,
    ) -> Self {
        self.on_mouse_enter = Some(Arc::new(handler));
        self
    }

    pub fn on_mouse_leave(
        mut self,
        handler: impl Fn(&Selectable, Modifiers) + Send + Sync + 'static,
    ) -> Self {
        self.on_mouse_leave = Some(Arc::new(handler));
        self
    }

    /// Options for a group child with the given key.
    pub fn for_child(&self, key: String) -> Self {
        Self {
            key: Some(key),
            chart_component_sync: self.chart_component_sync,
            external_resource_resolver: self.external_resource_resolver.clone(),
            selection: self.selection.clone(),
            on_click: self.on_click.clone(),
            on_mouse_enter: self.on_mouse_enter.clone(),
            on_mouse_leave: self.on_mouse_leave.clone(),
            ..Self::default()
        }
    }

    pub(crate) fn resolve_resource(&self, src: &str) -> String {
        match &self.external_resource_resolver {
            Some(resolve) => resolve(src),
            None => src.to_owned(),
        }
    }

    pub(crate) fn is_selected(&self, selectable: &Selectable) -> bool {
        self.selection.as_ref().is_some_and(|q| {
            q.is_selected(&selectable.plot_segment.table, &selectable.row_indices)
        })
    }
}

impl fmt::Debug for RenderOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderOptions")
            .field("no_style", &self.no_style)
            .field("style_override", &self.style_override)
            .field("class_name", &self.class_name)
            .field("key", &self.key)
            .field("chart_component_sync", &self.chart_component_sync)
            .field(
                "external_resource_resolver",
                &self.external_resource_resolver.is_some(),
            )
            .field("selection", &self.selection.is_some())
            .field("on_click", &self.on_click.is_some())
            .field("on_mouse_enter", &self.on_mouse_enter.is_some())
            .field("on_mouse_leave", &self.on_mouse_leave.is_some())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/options.rs"]
mod tests;
