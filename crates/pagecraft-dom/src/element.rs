use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::class_list::ClassList;
use crate::events::{EventKind, Listener};

/// A handle to one element node in a caller-owned tree.
///
/// `Element` is the node-handle type the whole crate revolves around. It is a
/// thin wrapper over a reference-counted node, so cloning a handle is cheap
/// and never copies the subtree: every clone addresses the same node, and a
/// mutation through one handle (a class added, a child appended, a listener
/// registered) is visible through all of them. This is what lets a decorator
/// annotate a tree it does not own, and lets listener closures keep a target
/// element alive without keeping the whole page alive.
///
/// ## Ownership
///
/// - Parents hold children strongly; children hold their parent weakly.
///   Dropping the last outside handle to a detached subtree frees it.
/// - Equality is node identity (`Rc::ptr_eq`), not structural comparison:
///   two separately built `<div>`s are never equal, while any two clones of
///   one handle always are.
///
/// ## Mutation
///
/// All interior state sits behind single-threaded cells, so mutating methods
/// take `&self` and no borrow guards escape the API; reads like
/// [`classes`](Element::classes) hand back snapshots. The type is `!Send` by
/// construction, which matches the synchronous, single-owner model this
/// engine targets.
///
/// ## Example
///
/// ```
/// use pagecraft_dom::Element;
///
/// let cell = Element::new("div").with_child(Element::new("h2").with_text("Sale"));
/// let row = Element::new("div").with_child(cell);
///
/// let heading = row.descendants().find(|el| el.heading_level().is_some()).unwrap();
/// heading.add_class("title");
///
/// assert_eq!(heading.tag(), "h2");
/// assert_eq!(heading.parent().unwrap().parent().unwrap(), row);
/// ```
pub struct Element {
    pub(crate) data: Rc<ElementData>,
}

pub(crate) struct ElementData {
    /// Lowercase tag name, fixed at construction.
    pub(crate) tag: String,
    pub(crate) classes: RefCell<ClassList>,
    pub(crate) attributes: RefCell<BTreeMap<String, String>>,
    pub(crate) children: RefCell<Vec<Node>>,
    pub(crate) parent: RefCell<Weak<ElementData>>,
    pub(crate) listeners: RefCell<Vec<(EventKind, Listener)>>,
}

/// One entry in an element's child list: a nested element or a text run.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Element {
    /// Create a detached element. The tag name is normalized to ASCII
    /// lowercase, as HTML parsers do.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            data: Rc::new(ElementData {
                tag: tag.into().to_ascii_lowercase(),
                classes: RefCell::new(ClassList::new()),
                attributes: RefCell::new(BTreeMap::new()),
                children: RefCell::new(Vec::new()),
                parent: RefCell::new(Weak::new()),
                listeners: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn tag(&self) -> &str {
        &self.data.tag
    }

    /// `Some(level)` for `h1` through `h6`, `None` for everything else.
    pub fn heading_level(&self) -> Option<u8> {
        match self.data.tag.as_str() {
            "h1" => Some(1),
            "h2" => Some(2),
            "h3" => Some(3),
            "h4" => Some(4),
            "h5" => Some(5),
            "h6" => Some(6),
            _ => None,
        }
    }

    /// Whether `self` and `other` are handles to the same node.
    pub fn ptr_eq(&self, other: &Element) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }

    // --- construction -----------------------------------------------------

    /// Builder form of [`add_class`](Element::add_class).
    pub fn with_class(self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    /// Builder form of [`set_attribute`](Element::set_attribute).
    pub fn with_attr(self, name: &str, value: &str) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Builder form of [`append_child`](Element::append_child).
    pub fn with_child(self, child: Element) -> Self {
        self.append_child(&child);
        self
    }

    /// Builder form of [`append_text`](Element::append_text).
    pub fn with_text(self, text: &str) -> Self {
        self.append_text(text);
        self
    }

    /// Append `child` as the last child, detaching it from any previous
    /// parent first. A node has at most one parent.
    pub fn append_child(&self, child: &Element) {
        debug_assert!(
            !self.ptr_eq(child) && !self.ancestors().any(|a| a.ptr_eq(child)),
            "appending an element into its own subtree"
        );
        child.detach();
        *child.data.parent.borrow_mut() = Rc::downgrade(&self.data);
        self.data.children.borrow_mut().push(Node::Element(child.clone()));
    }

    /// Append a text run as the last child.
    pub fn append_text(&self, text: impl Into<String>) {
        self.data.children.borrow_mut().push(Node::Text(text.into()));
    }

    /// Remove this element from its parent's child list, if it has one.
    pub fn detach(&self) {
        if let Some(parent) = self.parent() {
            parent.data.children.borrow_mut().retain(|node| match node {
                Node::Element(el) => !el.ptr_eq(self),
                Node::Text(_) => true,
            });
        }
        *self.data.parent.borrow_mut() = Weak::new();
    }

    // --- classes and attributes -------------------------------------------

    /// Snapshot of the element's class list.
    pub fn classes(&self) -> ClassList {
        self.data.classes.borrow().clone()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.data.classes.borrow().contains(class)
    }

    pub fn add_class(&self, class: &str) {
        self.data.classes.borrow_mut().add(class);
    }

    pub fn remove_class(&self, class: &str) {
        self.data.classes.borrow_mut().remove(class);
    }

    /// Look up an attribute value. `class` is answered from the class list.
    pub fn attribute(&self, name: &str) -> Option<String> {
        if name == "class" {
            let classes = self.data.classes.borrow();
            if classes.is_empty() {
                return None;
            }
            return Some(classes.to_string());
        }
        self.data.attributes.borrow().get(name).cloned()
    }

    /// Set an attribute, replacing any previous value. Setting `class`
    /// replaces the whole class list, as in the DOM.
    pub fn set_attribute(&self, name: &str, value: &str) {
        if name == "class" {
            *self.data.classes.borrow_mut() = ClassList::parse(value);
            return;
        }
        self.data
            .attributes
            .borrow_mut()
            .insert(name.to_owned(), value.to_owned());
    }

    /// Attributes as `(name, value)` pairs, sorted by name. The `class`
    /// attribute lives in [`classes`](Element::classes) and is not included.
    pub fn attributes(&self) -> Vec<(String, String)> {
        self.data
            .attributes
            .borrow()
            .iter()
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect()
    }

    // --- traversal --------------------------------------------------------

    pub fn parent(&self) -> Option<Element> {
        self.data.parent.borrow().upgrade().map(|data| Element { data })
    }

    /// Walk upward from the parent to the tree root. Does not yield `self`.
    pub fn ancestors(&self) -> Ancestors {
        Ancestors { next: self.parent() }
    }

    /// Direct element children, in order. Text runs are skipped; see
    /// [`child_nodes`](Element::child_nodes) for the full list.
    pub fn children(&self) -> Vec<Element> {
        self.data
            .children
            .borrow()
            .iter()
            .filter_map(|node| match node {
                Node::Element(el) => Some(el.clone()),
                Node::Text(_) => None,
            })
            .collect()
    }

    /// All direct children, elements and text runs alike.
    pub fn child_nodes(&self) -> Vec<Node> {
        self.data.children.borrow().clone()
    }

    /// Every element below this one in document order (pre-order,
    /// depth-first). Does not yield `self`, matching how a selector query
    /// searches a subtree.
    pub fn descendants(&self) -> Descendants {
        let mut stack = self.children();
        stack.reverse();
        Descendants { stack }
    }

    /// Concatenated text of all descendant text runs, in document order.
    pub fn text_content(&self) -> String {
        fn collect(el: &Element, out: &mut String) {
            for node in el.child_nodes() {
                match node {
                    Node::Text(text) => out.push_str(&text),
                    Node::Element(child) => collect(&child, out),
                }
            }
        }
        let mut out = String::new();
        collect(self, &mut out);
        out
    }
}

impl Clone for Element {
    /// Clone the handle, not the node. Both handles address the same element.
    fn clone(&self) -> Self {
        Self {
            data: Rc::clone(&self.data),
        }
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Element {}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("tag", &self.data.tag)
            .field("classes", &*self.data.classes.borrow())
            .field("children", &self.data.children.borrow().len())
            .finish()
    }
}

/// Iterator over an element's ancestors, nearest first.
pub struct Ancestors {
    next: Option<Element>,
}

impl Iterator for Ancestors {
    type Item = Element;

    fn next(&mut self) -> Option<Element> {
        let current = self.next.take()?;
        self.next = current.parent();
        Some(current)
    }
}

/// Pre-order iterator over an element's descendants.
pub struct Descendants {
    stack: Vec<Element>,
}

impl Iterator for Descendants {
    type Item = Element;

    fn next(&mut self) -> Option<Element> {
        let el = self.stack.pop()?;
        let mut children = el.children();
        children.reverse();
        self.stack.extend(children);
        Some(el)
    }
}
