use std::sync::Arc;

use crate::{
    output::events::{Listener, Listeners, PointerEvent},
    render::options::{RenderOptions, SelectHandler},
    scene::model::Selectable,
};

/// Build the listeners for an interactive node.
///
/// Each listener forwards `selectable` and the event's modifiers to the matching handler. The
/// click listener stops propagation before calling it, so enclosing interactive nodes do not
/// also report the click. Handlers that are not set produce no listener.
pub fn wire_listeners(selectable: &Selectable, options: &RenderOptions) -> Listeners {
    let selectable = Arc::new(selectable.clone());
    Listeners {
        on_click: options
            .on_click
            .as_ref()
            .map(|h| forward(h, &selectable, true)),
        on_mouse_enter: options
            .on_mouse_enter
            .as_ref()
            .map(|h| forward(h, &selectable, false)),
        on_mouse_leave: options
            .on_mouse_leave
            .as_ref()
            .map(|h| forward(h, &selectable, false)),
    }
}

fn forward(handler: &SelectHandler, selectable: &Arc<Selectable>, stop: bool) -> Listener {
    let handler = Arc::clone(handler);
    let selectable = Arc::clone(selectable);
    Arc::new(move |event: &PointerEvent| {
        if stop {
            event.stop_propagation();
        }
        handler(&selectable, event.modifiers());
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/events.rs"]
mod tests;
