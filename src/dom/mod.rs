//! In-memory document model.
//!
//! A small arena-backed element tree standing in for the browser DOM. Page
//! components query and mutate it through [`Document`]; the server renders
//! it to HTML once the components have run.
//!
//! Every mutating operation takes a [`NodeId`] and silently ignores ids that
//! do not belong to this document, mirroring how page scripts treat a
//! missing element.

mod element;
mod render;

pub use element::Element;

/// Handle to an element inside a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// Arena of elements rooted at a single `<html>` node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    nodes: Vec<Element>,
    focused: Option<NodeId>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a document containing only the `<html lang="en">` root.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Element::new("html").attr("lang", "en")],
            focused: None,
        }
    }

    /// The root element.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Attach `element` as the last child of `parent` and return its id.
    ///
    /// Any children or parent already recorded on `element` are discarded.
    pub fn append(&mut self, parent: NodeId, mut element: Element) -> NodeId {
        let id = NodeId(self.nodes.len());
        element.children.clear();
        element.parent = None;
        if let Some(p) = self.nodes.get_mut(parent.0) {
            p.children.push(id);
            element.parent = Some(parent);
        }
        self.nodes.push(element);
        id
    }

    /// Borrow an element.
    pub fn get(&self, node: NodeId) -> Option<&Element> {
        self.nodes.get(node.0)
    }

    fn get_mut(&mut self, node: NodeId) -> Option<&mut Element> {
        self.nodes.get_mut(node.0)
    }

    /// All attached elements in document (pre-)order, starting at the root.
    pub fn descendants(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![self.root()];
        while let Some(node) = stack.pop() {
            order.push(node);
            if let Some(element) = self.get(node) {
                stack.extend(element.children.iter().rev().copied());
            }
        }
        order
    }

    /// First attached element whose `id` attribute equals `id`.
    pub fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.find(|e| e.element_id() == Some(id))
    }

    /// Attached elements carrying `class`, in document order.
    pub fn elements_by_class(&self, class: &str) -> Vec<NodeId> {
        self.filter(|e| e.has_class(class))
    }

    /// Attached elements that have attribute `name`, in document order.
    pub fn elements_with_attribute(&self, name: &str) -> Vec<NodeId> {
        self.filter(|e| e.has_attribute(name))
    }

    fn find(&self, predicate: impl Fn(&Element) -> bool) -> Option<NodeId> {
        self.descendants()
            .into_iter()
            .find(|&n| self.get(n).is_some_and(&predicate))
    }

    fn filter(&self, predicate: impl Fn(&Element) -> bool) -> Vec<NodeId> {
        self.descendants()
            .into_iter()
            .filter(|&n| self.get(n).is_some_and(&predicate))
            .collect()
    }

    /// The element's own text, or `None` if the node does not exist.
    pub fn text(&self, node: NodeId) -> Option<&str> {
        self.get(node).map(Element::own_text)
    }

    /// Replace the element's content with plain text, detaching any children.
    pub fn set_text(&mut self, node: NodeId, text: impl Into<String>) {
        self.clear_children(node);
        if let Some(element) = self.get_mut(node) {
            element.text = text.into();
        }
    }

    /// Look up an attribute.
    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.get(node).and_then(|e| e.attribute(name))
    }

    /// Set an attribute.
    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: impl Into<String>) {
        if let Some(element) = self.get_mut(node) {
            element.attributes.insert(name.to_string(), value.into());
        }
    }

    /// Remove an attribute if present.
    pub fn remove_attribute(&mut self, node: NodeId, name: &str) {
        if let Some(element) = self.get_mut(node) {
            element.attributes.remove(name);
        }
    }

    /// Whether the element has attribute `name`.
    pub fn has_attribute(&self, node: NodeId, name: &str) -> bool {
        self.get(node).is_some_and(|e| e.has_attribute(name))
    }

    /// Add a class (no duplicates).
    pub fn add_class(&mut self, node: NodeId, class: &str) {
        if let Some(element) = self.get_mut(node) {
            if !element.has_class(class) {
                element.classes.push(class.to_string());
            }
        }
    }

    /// Remove a class if present.
    pub fn remove_class(&mut self, node: NodeId, class: &str) {
        if let Some(element) = self.get_mut(node) {
            element.classes.retain(|c| c != class);
        }
    }

    /// Whether the element carries `class`.
    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.get(node).is_some_and(|e| e.has_class(class))
    }

    /// Set an inline style property such as a CSS custom property.
    pub fn set_style_property(&mut self, node: NodeId, property: &str, value: impl Into<String>) {
        if let Some(element) = self.get_mut(node) {
            element.styles.insert(property.to_string(), value.into());
        }
    }

    /// Look up an inline style property.
    pub fn style_property(&self, node: NodeId, property: &str) -> Option<&str> {
        self.get(node).and_then(|e| e.style_property(property))
    }

    /// Children of `node` in order; empty for unknown nodes.
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.get(node).map(Element::children).unwrap_or_default()
    }

    /// Detach every child of `node`. Detached subtrees are unreachable by queries.
    pub fn clear_children(&mut self, node: NodeId) {
        let Some(element) = self.get_mut(node) else {
            return;
        };
        let detached = std::mem::take(&mut element.children);
        for child in detached {
            if let Some(c) = self.get_mut(child) {
                c.parent = None;
            }
        }
        if self.focused.is_some_and(|f| !self.is_attached(f)) {
            self.focused = None;
        }
    }

    /// Whether `node` is reachable from the root.
    pub fn is_attached(&self, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(n) = current {
            if n == self.root() {
                return true;
            }
            current = self.get(n).and_then(Element::parent);
        }
        false
    }

    /// Form-control value, held in the `value` attribute.
    pub fn value(&self, node: NodeId) -> Option<&str> {
        self.attribute(node, "value")
    }

    /// Set a form-control value.
    pub fn set_value(&mut self, node: NodeId, value: impl Into<String>) {
        self.set_attribute(node, "value", value);
    }

    /// Move input focus to `node`. Unknown or detached nodes are ignored.
    pub fn focus(&mut self, node: NodeId) {
        if self.is_attached(node) {
            self.focused = Some(node);
        }
    }

    /// The element holding input focus.
    pub fn active_element(&self) -> Option<NodeId> {
        self.focused
    }
}
