//! Element node and its builder-style constructors.

use std::collections::BTreeMap;

use super::NodeId;

/// A single element in the page tree.
///
/// Construct with [`Element::new`] and the chained setters, then attach it
/// with [`Document::append`](super::Document::append).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub(super) tag: String,
    pub(super) attributes: BTreeMap<String, String>,
    pub(super) classes: Vec<String>,
    pub(super) styles: BTreeMap<String, String>,
    pub(super) text: String,
    pub(super) children: Vec<NodeId>,
    pub(super) parent: Option<NodeId>,
}

impl Element {
    /// Create an empty element with the given tag name.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Set the `id` attribute.
    #[must_use]
    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    /// Add one or more whitespace-separated classes.
    #[must_use]
    pub fn class(mut self, classes: &str) -> Self {
        for class in classes.split_whitespace() {
            if !self.classes.iter().any(|c| c == class) {
                self.classes.push(class.to_string());
            }
        }
        self
    }

    /// Set an attribute. An empty value renders as a boolean attribute.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Set an inline style property.
    #[must_use]
    pub fn style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.styles.insert(property.into(), value.into());
        self
    }

    /// Set the element's own text.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// The `id` attribute, if set.
    pub fn element_id(&self) -> Option<&str> {
        self.attribute("id")
    }

    /// Look up an attribute value.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Whether the attribute is present (with any value).
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Class list in insertion order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Whether the class list contains `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Look up an inline style property.
    pub fn style_property(&self, property: &str) -> Option<&str> {
        self.styles.get(property).map(String::as_str)
    }

    /// The element's own text (not including descendants).
    pub fn own_text(&self) -> &str {
        &self.text
    }

    /// Child node ids in order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Parent node, `None` for the root and for detached nodes.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }
}
