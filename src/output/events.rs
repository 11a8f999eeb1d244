use std::{cell::Cell, fmt, sync::Arc};

use crate::output::element::{SvgElement, SvgNode};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    Click,
    MouseEnter,
    MouseLeave,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Modifier state handed to selection handlers.
pub struct Modifiers {
    pub shift_key: bool,
    pub ctrl_key: bool,
    pub meta_key: bool,
}

#[derive(Debug)]
/// A raw pointer event as delivered by the host.
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub shift_key: bool,
    pub ctrl_key: bool,
    pub meta_key: bool,
    pub alt_key: bool,
    stopped: Cell<bool>,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind) -> Self {
        Self {
            kind,
            shift_key: false,
            ctrl_key: false,
            meta_key: false,
            alt_key: false,
            stopped: Cell::new(false),
        }
    }

    pub fn click() -> Self {
        Self::new(PointerEventKind::Click)
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.shift_key = modifiers.shift_key;
        self.ctrl_key = modifiers.ctrl_key;
        self.meta_key = modifiers.meta_key;
        self
    }

    /// The subset of modifier state handlers see; `alt` is dropped.
    pub fn modifiers(&self) -> Modifiers {
        Modifiers {
            shift_key: self.shift_key,
            ctrl_key: self.ctrl_key,
            meta_key: self.meta_key,
        }
    }

    pub fn stop_propagation(&self) {
        self.stopped.set(true);
    }

    pub fn propagation_stopped(&self) -> bool {
        self.stopped.get()
    }
}

/// A host-side event listener.
pub type Listener = Arc<dyn Fn(&PointerEvent) + Send + Sync>;

#[derive(Clone, Default)]
/// Listeners attached to one output element. `None` means nothing is attached.
pub struct Listeners {
    pub on_click: Option<Listener>,
    pub on_mouse_enter: Option<Listener>,
    pub on_mouse_leave: Option<Listener>,
}

impl Listeners {
    pub fn get(&self, kind: PointerEventKind) -> Option<&Listener> {
        match kind {
            PointerEventKind::Click => self.on_click.as_ref(),
            PointerEventKind::MouseEnter => self.on_mouse_enter.as_ref(),
            PointerEventKind::MouseLeave => self.on_mouse_leave.as_ref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.on_click.is_none() && self.on_mouse_enter.is_none() && self.on_mouse_leave.is_none()
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("on_click", &self.on_click.is_some())
            .field("on_mouse_enter", &self.on_mouse_enter.is_some())
            .field("on_mouse_leave", &self.on_mouse_leave.is_some())
            .finish()
    }
}

impl SvgElement {
    /// Deliver `event` to the element at `path` (child indices from `self`).
    ///
    /// Clicks bubble from the target up to `self`, stopping once a listener stops propagation.
    /// Enter and leave go to the target only. Returns how many listeners ran; an invalid path
    /// delivers nothing.
    pub fn dispatch(&self, path: &[usize], event: &PointerEvent) -> usize {
        let mut chain = Vec::with_capacity(path.len() + 1);
        chain.push(self);
        let mut cur = self;
        for &idx in path {
            match cur.children.get(idx) {
                Some(SvgNode::Element(child)) => {
                    chain.push(child);
                    cur = child;
                }
                _ => return 0,
            }
        }

        if event.kind != PointerEventKind::Click {
            return match cur.listeners.get(event.kind) {
                Some(listener) => {
                    listener(event);
                    1
                }
                None => 0,
            };
        }

        let mut invoked = 0;
        for el in chain.iter().rev() {
            if let Some(listener) = el.listeners.get(event.kind) {
                listener(event);
                invoked += 1;
            }
            if event.propagation_stopped() {
                break;
            }
        }
        invoked
    }
}

#[cfg(test)]
#[path = "../../tests/unit/output/events.rs"]
mod tests;
