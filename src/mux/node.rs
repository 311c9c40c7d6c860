//! Trie vertex.
//!
//! # Design Decisions
//! - Children kept in registration order; a side index gives O(1) literal lookup
//! - A child's label is its key, the raw segment text used at registration
//! - Handlers are append-only

use std::collections::HashMap;

use crate::mux::segment;

/// A node of the routing trie.
#[derive(Debug, Clone)]
pub struct Node<H> {
    label: String,
    handlers: Vec<H>,
    children: Vec<Node<H>>,
    index: HashMap<String, usize>,
}

impl<H> Default for Node<H> {
    fn default() -> Self {
        Self {
            label: String::new(),
            handlers: Vec::new(),
            children: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<H> Node<H> {
    /// Create an empty namespace root.
    pub fn root() -> Self {
        Self::default()
    }

    fn with_handler(label: &str, handler: H) -> Self {
        Self {
            label: label.to_string(),
            handlers: vec![handler],
            ..Self::default()
        }
    }

    /// Raw segment text that reached this node (empty for an unregistered root).
    pub fn label(&self) -> &str {
        &self.label
    }

    pub(crate) fn set_label(&mut self, label: &str) {
        self.label = label.to_string();
    }

    /// Handlers in registration order.
    pub fn handlers(&self) -> &[H] {
        &self.handlers
    }

    pub(crate) fn push_handler(&mut self, handler: H) {
        self.handlers.push(handler);
    }

    /// Returns true if a route terminates here.
    pub fn is_terminal(&self) -> bool {
        !self.handlers.is_empty()
    }

    /// Children in registration order.
    pub fn children(&self) -> &[Node<H>] {
        &self.children
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Child registered under exactly `key`.
    pub fn child(&self, key: &str) -> Option<&Node<H>> {
        self.index.get(key).map(|&i| &self.children[i])
    }

    /// Child under `key`, created with the handler from `f` if missing.
    ///
    /// The flag is true when the child was created by this call.
    pub(crate) fn child_or_insert_with(
        &mut self,
        key: &str,
        f: impl FnOnce() -> H,
    ) -> (&mut Node<H>, bool) {
        if let Some(&i) = self.index.get(key) {
            return (&mut self.children[i], false);
        }
        (self.add_child(key, f()), true)
    }

    fn add_child(&mut self, key: &str, handler: H) -> &mut Node<H> {
        let i = self.children.len();
        self.children.push(Self::with_handler(key, handler));
        self.index.insert(key.to_string(), i);
        &mut self.children[i]
    }

    /// First parameter child in registration order.
    pub fn first_dynamic_child(&self) -> Option<&Node<H>> {
        self.children.iter().find(|c| segment::is_dynamic(&c.label))
    }
}
