use std::fmt;

/// An ordered, duplicate-free set of CSS class names.
///
/// Models the platform `classList`. Insertion order is preserved for
/// serialization, and both `add` of a present class and `remove` of an
/// absent one are no-ops. Decorators lean on the idempotent `add`:
/// re-applying a marker class (for example `zoom` on every pointer-enter)
/// never produces duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    classes: Vec<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `class` attribute value, splitting on ASCII whitespace and
    /// discarding duplicates.
    pub fn parse(value: &str) -> Self {
        let mut list = Self::new();
        for class in value.split_ascii_whitespace() {
            list.add(class);
        }
        list
    }

    /// Add a class. Returns `true` if it was newly inserted.
    pub fn add(&mut self, class: &str) -> bool {
        if self.contains(class) {
            return false;
        }
        self.classes.push(class.to_owned());
        true
    }

    /// Remove a class. Returns `true` if it was present.
    pub fn remove(&mut self, class: &str) -> bool {
        let before = self.classes.len();
        self.classes.retain(|c| c != class);
        self.classes.len() != before
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Classes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl fmt::Display for ClassList {
    /// Space-joined, as in a `class` attribute.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.classes.join(" "))
    }
}
