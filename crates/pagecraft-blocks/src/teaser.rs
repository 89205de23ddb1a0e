//! Teaser block decorator.
//!
//! A teaser pairs an image with a heading, supporting copy and a
//! call-to-action button. The pipeline renders it as two rows, image first:
//!
//! ```text
//! <div class="teaser block [options...]">
//!   <div>                              row 1: image
//!     <div><picture>...<img></picture></div>
//!   </div>
//!   <div>                              row 2: copy
//!     <div>
//!       <h2>Summer sale</h2>
//!       <p>Up to half price on selected lines.</p>
//!       <p>Terms and conditions: while stocks last.</p>
//!       <p class="button-container"><a class="button" href="/sale">Shop the sale</a></p>
//!     </div>
//!   </div>
//! </div>
//! ```
//!
//! [`decorate`] adds the class hooks the teaser stylesheet targets and wires
//! the hover zoom: while the pointer is over the call-to-action button, the
//! image carries a `zoom` class.

use pagecraft_dom::{Element, EventKind};

use crate::DecorateError;

/// Classes on a block root that mark it as a block rather than encode an
/// author option.
const RESERVED_CLASSES: &[&str] = &["block", "teaser"];

/// Author option that lays the image out beside the copy instead of above it.
const SIDE_BY_SIDE: &str = "side-by-side";

/// Paragraphs opening with this text are legal small print, styled apart
/// from the rest of the copy.
const TERMS_PREFIX: &str = "Terms and conditions:";

/// Decorate one teaser block in place.
///
/// The caller keeps ownership of the tree; this function annotates it and
/// returns, leaving only the two hover listeners holding handles to the
/// image. Applied classes:
///
/// - `content` on the last row,
/// - `title` on the first heading (any of `h1` through `h6`),
/// - `image` on the first `<img>`,
/// - `terms-and-conditions` on each paragraph opening with legal small print,
/// - `image-wrapper` on the first row when the `side-by-side` option is set,
///   or on the image's `<picture>` when no option is set at all. A block
///   carrying only unrecognized options gets no `image-wrapper` anywhere;
///   its stylesheet falls back to the plain stacked layout.
///
/// Finally the hover zoom listeners are attached to the call-to-action
/// button.
///
/// # Errors
///
/// [`DecorateError::MissingElement`] when the markup lacks a piece the
/// steps above need. Classes already applied stay applied; the pipeline is
/// expected to deliver well-formed teasers, so there is no rollback.
pub fn decorate(block: &Element) -> Result<(), DecorateError> {
    let opts = options(block);
    log::debug!("decorating teaser block, options {opts:?}");

    let content = block
        .children()
        .into_iter()
        .last()
        .filter(|el| el.tag() == "div")
        .ok_or(DecorateError::MissingElement("content row"))?;
    content.add_class("content");

    let title = block
        .descendants()
        .find(|el| el.heading_level().is_some())
        .ok_or(DecorateError::MissingElement("heading"))?;
    title.add_class("title");

    let image = block
        .descendants()
        .find(|el| el.tag() == "img")
        .ok_or(DecorateError::MissingElement("image"))?;
    image.add_class("image");

    for paragraph in block.descendants().filter(|el| el.tag() == "p") {
        if paragraph.inner_html().trim().starts_with(TERMS_PREFIX) {
            paragraph.add_class("terms-and-conditions");
        }
    }

    if opts.iter().any(|opt| opt == SIDE_BY_SIDE) {
        let image_row = block
            .children()
            .into_iter()
            .next()
            .filter(|el| el.tag() == "div")
            .ok_or(DecorateError::MissingElement("image row"))?;
        image_row.add_class("image-wrapper");
    } else if opts.is_empty() {
        let picture = image
            .ancestors()
            .find(|el| el.tag() == "picture")
            .ok_or(DecorateError::MissingElement("picture"))?;
        picture.add_class("image-wrapper");
    }
    // Unrecognized options fall through both branches: no image-wrapper.

    wire_zoom(block, &image)
}

/// The block's author options: its classes minus the reserved markers, in
/// markup order.
fn options(block: &Element) -> Vec<String> {
    let classes = block.classes();
    classes
        .iter()
        .filter(|class| !RESERVED_CLASSES.contains(class))
        .map(str::to_owned)
        .collect()
}

/// Wire the hover zoom: pointer enter on the call-to-action button zooms
/// the image, pointer leave zooms it back out.
fn wire_zoom(block: &Element, image: &Element) -> Result<(), DecorateError> {
    let button = block
        .descendants()
        .find(|el| el.has_class("button"))
        .ok_or(DecorateError::MissingElement("button"))?;

    let zoom_in = image.clone();
    button.add_event_listener(EventKind::PointerEnter, move |_| {
        zoom_in.add_class("zoom");
    });
    let zoom_out = image.clone();
    button.add_event_listener(EventKind::PointerLeave, move |_| {
        zoom_out.remove_class("zoom");
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn block_with_classes(classes: &[&str]) -> Element {
        let block = Element::new("div");
        for class in classes {
            block.add_class(class);
        }
        block
    }

    #[test]
    fn options_exclude_reserved_markers() {
        let block = block_with_classes(&["teaser", "block", "side-by-side", "dark"]);
        assert_eq!(options(&block), ["side-by-side", "dark"]);
    }

    #[test]
    fn options_are_empty_for_a_plain_block() {
        let block = block_with_classes(&["teaser", "block"]);
        assert_eq!(options(&block), Vec::<String>::new());
    }

    #[test]
    fn block_without_rows_is_rejected() {
        let block = block_with_classes(&["teaser", "block"]);
        assert_eq!(
            decorate(&block),
            Err(DecorateError::MissingElement("content row"))
        );
    }

    #[test]
    fn last_row_must_be_a_div() {
        let block = block_with_classes(&["teaser", "block"])
            .with_child(Element::new("div"))
            .with_child(Element::new("p").with_text("stray"));
        assert_eq!(
            decorate(&block),
            Err(DecorateError::MissingElement("content row"))
        );
    }

    #[test]
    fn block_without_heading_is_rejected_after_marking_content() {
        let block = block_with_classes(&["teaser", "block"])
            .with_child(Element::new("div").with_child(Element::new("p").with_text("copy")));

        assert_eq!(
            decorate(&block),
            Err(DecorateError::MissingElement("heading"))
        );
        // Mutation is in application order, so the content hook is already on.
        assert!(block.children()[0].has_class("content"));
    }

    #[test]
    fn block_without_image_is_rejected() {
        let block = block_with_classes(&["teaser", "block"]).with_child(
            Element::new("div").with_child(Element::new("h2").with_text("Sale")),
        );
        assert_eq!(decorate(&block), Err(DecorateError::MissingElement("image")));
    }

    #[test]
    fn block_without_button_is_rejected_after_class_pass() {
        let picture = Element::new("picture").with_child(Element::new("img"));
        let block = block_with_classes(&["teaser", "block"]).with_child(
            Element::new("div")
                .with_child(Element::new("h2").with_text("Sale"))
                .with_child(picture.clone()),
        );

        assert_eq!(decorate(&block), Err(DecorateError::MissingElement("button")));
        // Every class hook landed before the button lookup failed.
        assert!(picture.has_class("image-wrapper"));
        assert!(block.children()[0].has_class("content"));
    }

    #[test]
    fn default_layout_without_picture_is_rejected() {
        let block = block_with_classes(&["teaser", "block"]).with_child(
            Element::new("div")
                .with_child(Element::new("h2").with_text("Sale"))
                .with_child(Element::new("img")),
        );
        assert_eq!(
            decorate(&block),
            Err(DecorateError::MissingElement("picture"))
        );
    }

    #[test]
    fn side_by_side_needs_a_leading_row() {
        let block = block_with_classes(&["teaser", "block", "side-by-side"])
            .with_child(Element::new("p").with_text("stray"))
            .with_child(
                Element::new("div")
                    .with_child(Element::new("h2").with_text("Sale"))
                    .with_child(Element::new("img")),
            );
        assert_eq!(
            decorate(&block),
            Err(DecorateError::MissingElement("image row"))
        );
    }

    #[test]
    fn first_heading_in_document_order_wins() {
        let h3 = Element::new("h3").with_text("Kicker");
        let h2 = Element::new("h2").with_text("Sale");
        let block = block_with_classes(&["teaser", "block", "plain"]).with_child(
            Element::new("div")
                .with_child(h3.clone())
                .with_child(h2.clone())
                .with_child(Element::new("img"))
                .with_child(Element::new("a").with_class("button")),
        );

        decorate(&block).unwrap();

        assert!(h3.has_class("title"));
        assert!(!h2.has_class("title"));
    }

    #[test]
    fn terms_paragraphs_are_matched_on_trimmed_markup() {
        let exact = Element::new("p").with_text("Terms and conditions: apply.");
        let padded = Element::new("p").with_text("  Terms and conditions: padded.");
        let nested = Element::new("p")
            .with_text("Terms and conditions: see ")
            .with_child(Element::new("a").with_attr("href", "/legal").with_text("details"));
        let mid_sentence = Element::new("p").with_text("Read the Terms and conditions: first.");
        let wrapped = Element::new("p")
            .with_child(Element::new("em").with_text("Terms and conditions: emphasized."));

        let block = block_with_classes(&["teaser", "block", "plain"]).with_child(
            Element::new("div")
                .with_child(Element::new("h2").with_text("Sale"))
                .with_child(Element::new("img"))
                .with_child(exact.clone())
                .with_child(padded.clone())
                .with_child(nested.clone())
                .with_child(mid_sentence.clone())
                .with_child(wrapped.clone())
                .with_child(Element::new("a").with_class("button")),
        );

        decorate(&block).unwrap();

        assert!(exact.has_class("terms-and-conditions"));
        assert!(padded.has_class("terms-and-conditions"));
        assert!(nested.has_class("terms-and-conditions"));
        assert!(!mid_sentence.has_class("terms-and-conditions"));
        // The prefix must open the paragraph's own markup, not just its text.
        assert!(!wrapped.has_class("terms-and-conditions"));
    }

    #[test]
    fn zoom_targets_the_image_marked_during_decoration() {
        let img = Element::new("img");
        let picture = Element::new("picture").with_child(img.clone());
        let button = Element::new("a").with_class("button");
        let block = block_with_classes(&["teaser", "block"]).with_child(
            Element::new("div")
                .with_child(Element::new("h2").with_text("Sale"))
                .with_child(picture)
                .with_child(button.clone()),
        );

        decorate(&block).unwrap();

        button.dispatch(EventKind::PointerEnter);
        assert!(img.has_class("zoom"));
        button.dispatch(EventKind::PointerLeave);
        assert!(!img.has_class("zoom"));
    }
}
