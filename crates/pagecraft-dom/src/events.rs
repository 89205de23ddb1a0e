//! Pointer event wiring for [`Element`] handles.
//!
//! There is no browser here, so nothing fires events on its own. A caller
//! (a test, a host shell) drives the tree by calling
//! [`Element::dispatch`], and any closures registered through
//! [`Element::add_event_listener`] run against the target element. That is
//! enough to express hover behavior: enter and leave are two event kinds,
//! and a decorator installs one closure for each.

use std::fmt;
use std::rc::Rc;

use crate::element::Element;

pub(crate) type Listener = Rc<dyn Fn(&Element)>;

/// The event kinds this engine knows about.
///
/// Pointer events cover mouse, touch and pen input alike, so hover wiring
/// uses `pointerenter`/`pointerleave` rather than the mouse-only pair.
/// Neither kind bubbles: a dispatch runs the target's own listeners only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    PointerEnter,
    PointerLeave,
}

impl EventKind {
    /// The DOM event name this kind corresponds to.
    pub fn name(self) -> &'static str {
        match self {
            EventKind::PointerEnter => "pointerenter",
            EventKind::PointerLeave => "pointerleave",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Element {
    /// Register `handler` to run whenever `kind` is dispatched to this
    /// element. Handlers stack: registering twice means running twice, in
    /// registration order.
    pub fn add_event_listener<F>(&self, kind: EventKind, handler: F)
    where
        F: Fn(&Element) + 'static,
    {
        self.data
            .listeners
            .borrow_mut()
            .push((kind, Rc::new(handler)));
    }

    /// Fire `kind` at this element, running every matching listener with
    /// the element as its argument.
    ///
    /// The listener list is snapshotted before the first handler runs, so a
    /// handler may freely mutate the tree or register further listeners;
    /// additions take effect from the next dispatch.
    pub fn dispatch(&self, kind: EventKind) {
        let handlers: Vec<Listener> = self
            .data
            .listeners
            .borrow()
            .iter()
            .filter(|(registered, _)| *registered == kind)
            .map(|(_, handler)| Rc::clone(handler))
            .collect();
        log::trace!("dispatch {kind} to <{}>, {} listener(s)", self.tag(), handlers.len());
        for handler in handlers {
            handler(self);
        }
    }

    /// How many listeners are registered for `kind` on this element.
    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.data
            .listeners
            .borrow()
            .iter()
            .filter(|(registered, _)| *registered == kind)
            .count()
    }
}
