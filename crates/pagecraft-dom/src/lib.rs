//! # pagecraft-dom
//!
//! A headless DOM engine: just enough of the platform DOM to let block
//! decorators run outside a browser.
//!
//! Page-assembly frameworks hand each block decorator a pre-rendered DOM
//! subtree; the decorator annotates it in place (classes, attributes) and
//! wires event listeners. This crate reproduces the surface that style of
//! code touches (element handles, `classList`, tree traversal,
//! `addEventListener`/dispatch, `innerHTML`/`outerHTML`) with no browser
//! and no event loop underneath.
//!
//! ## Architecture Overview
//!
//! Elements are shared-ownership handles: an [`Element`] is a cheap clone of
//! an `Rc`-backed node, and every clone sees (and may apply) the same
//! mutations. Parents hold children strongly, children hold parents weakly,
//! so a detached subtree is freed when the last outside handle drops.
//!
//! ```text
//! Element (handle, Clone)          caller-owned tree
//!   └── Rc<ElementData>
//!         ├── tag                  immutable, lowercase
//!         ├── classes              ClassList behind RefCell
//!         ├── attributes           name → value, sorted iteration
//!         ├── children             element and text nodes, in order
//!         ├── parent               Weak back-link
//!         └── listeners            (EventKind, callback) registry
//! ```
//!
//! Everything is single-threaded and synchronous: mutation happens on the
//! caller's stack, and [`Element::dispatch`] runs listeners before it
//! returns. There is no executor and nothing is `Send`.
//!
//! ## Module Structure
//!
//! ```text
//! pagecraft-dom/
//! ├── lib.rs         # Public API surface
//! ├── element.rs     # Element/Node handles, construction, traversal
//! ├── class_list.rs  # Ordered, duplicate-free class sets
//! ├── events.rs      # Listener registry and synchronous dispatch
//! └── markup.rs      # innerHTML/outerHTML serialization
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use pagecraft_dom::{Element, EventKind};
//!
//! let image = Element::new("img").with_attr("src", "hero.png");
//! let button = Element::new("a").with_class("button").with_text("Shop now");
//! let banner = Element::new("div")
//!     .with_class("banner")
//!     .with_child(image.clone())
//!     .with_child(button.clone());
//!
//! // Decorators mutate through handles and wire listeners that close over
//! // other handles.
//! let target = image.clone();
//! button.add_event_listener(EventKind::PointerEnter, move |_| target.add_class("zoom"));
//! button.dispatch(EventKind::PointerEnter);
//!
//! assert!(image.has_class("zoom"));
//! assert_eq!(
//!     banner.outer_html(),
//!     "<div class=\"banner\"><img src=\"hero.png\"><a class=\"button\">Shop now</a></div>",
//! );
//! ```

pub mod class_list;
pub mod element;
pub mod events;
pub mod markup;

pub use class_list::ClassList;
pub use element::{Ancestors, Descendants, Element, Node};
pub use events::EventKind;
