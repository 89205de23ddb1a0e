//! # pagecraft-blocks
//!
//! Decorators for pagecraft content blocks.
//!
//! A page is assembled from blocks: self-contained components the rendering
//! pipeline emits as plain nested `<div>` rows. Each block's root carries a
//! reserved `block` class, the block's own name as a class, and any author
//! options as further classes. After the pipeline inserts a block's markup,
//! it calls the block's decorator exactly once, which annotates the subtree
//! in place with the class hooks its stylesheet targets and wires any
//! behavior the block needs. Decorators never create or destroy content,
//! never touch anything outside their own subtree, and finish all mutation
//! before returning.
//!
//! One decorator ships today: [`teaser`].
//!
//! ```
//! use pagecraft_blocks::teaser;
//! use pagecraft_dom::Element;
//!
//! let heading = Element::new("h2").with_text("Summer sale");
//! let button = Element::new("a").with_class("button").with_text("Shop now");
//! let block = Element::new("div")
//!     .with_class("teaser")
//!     .with_class("block")
//!     .with_child(
//!         Element::new("div")
//!             .with_child(Element::new("picture").with_child(Element::new("img"))),
//!     )
//!     .with_child(Element::new("div").with_child(heading.clone()).with_child(button));
//!
//! teaser::decorate(&block)?;
//! assert!(heading.has_class("title"));
//! # Ok::<(), pagecraft_blocks::DecorateError>(())
//! ```

use thiserror::Error;

pub mod teaser;

/// Failures a decorator can hit on malformed block markup.
///
/// Decorators assume the rendering pipeline delivered the block shape they
/// were built for, so a hole in that shape is not recoverable: the error
/// names the missing piece and the block is left with whatever classes were
/// applied before the lookup failed.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DecorateError {
    #[error("block is missing required element: {0}")]
    MissingElement(&'static str),
}
