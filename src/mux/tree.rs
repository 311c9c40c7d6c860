//! Namespaced routing trie.
//!
//! # Match Priority
//! ```text
//! for each path segment:
//!     1. literal child with the exact segment text
//!     2. first parameter child in registration order
//!        (constraint mismatch fails the search, no backtracking)
//! ```
//!
//! # Design Decisions
//! - Registration needs `&mut Tree`, search only `&Tree`; a built tree can be
//!   shared across threads behind an `Arc`
//! - Every node created by an insert carries that insert's handler, including
//!   intermediate segments seen for the first time
//! - Constraints are compiled lazily on first search through the pattern cache

use std::collections::BTreeMap;

use crate::mux::node::Node;
use crate::mux::pattern_cache::PatternCache;
use crate::mux::segment::{self, ROOT_PATH};
use crate::mux::types::{MuxError, MuxResult, Param, Params, RouteMatch};
use crate::observability::metrics;

/// A collection of independent routing tries keyed by namespace.
#[derive(Debug, Clone)]
pub struct Tree<H> {
    namespaces: BTreeMap<String, Node<H>>,
    patterns: PatternCache,
}

impl<H> Default for Tree<H> {
    fn default() -> Self {
        Self::with_pattern_cache(PatternCache::new(), std::iter::empty::<String>())
    }
}

impl<H> Tree<H> {
    /// Create a tree pre-seeded with empty namespaces.
    pub fn new<I, S>(namespaces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_pattern_cache(PatternCache::new(), namespaces)
    }

    /// Create a tree that compiles constraints through a shared cache.
    pub fn with_pattern_cache<I, S>(patterns: PatternCache, namespaces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let namespaces = namespaces
            .into_iter()
            .map(|name| (name.into(), Node::root()))
            .collect();
        Self {
            namespaces,
            patterns,
        }
    }

    /// The cache used to compile parameter constraints.
    pub fn pattern_cache(&self) -> &PatternCache {
        &self.patterns
    }

    /// Namespace names in lexical order.
    pub fn namespaces(&self) -> impl Iterator<Item = &str> {
        self.namespaces.keys().map(String::as_str)
    }

    /// Root node of a namespace.
    pub fn root(&self, namespace: &str) -> Option<&Node<H>> {
        self.namespaces.get(namespace)
    }

    /// Every terminal node of a namespace as `(path, handler count)`.
    ///
    /// Depth-first, children in registration order.
    pub fn routes(&self, namespace: &str) -> Vec<(String, usize)> {
        let mut out = Vec::new();
        if let Some(root) = self.namespaces.get(namespace) {
            if root.is_terminal() {
                out.push((ROOT_PATH.to_string(), root.handlers().len()));
            }
            for child in root.children() {
                collect_routes(child, String::new(), &mut out);
            }
        }
        out
    }
}

fn collect_routes<H>(node: &Node<H>, prefix: String, out: &mut Vec<(String, usize)>) {
    let path = format!("{}/{}", prefix, node.label());
    if node.is_terminal() {
        out.push((path.clone(), node.handlers().len()));
    }
    for child in node.children() {
        collect_routes(child, path.clone(), out);
    }
}

impl<H: Clone> Tree<H> {
    /// Register `handler` under `path` in `namespace`, creating the namespace if needed.
    pub fn insert(&mut self, namespace: &str, path: &str, handler: H) -> MuxResult<()> {
        let root = self
            .namespaces
            .entry(namespace.to_string())
            .or_insert_with(Node::root);

        if path == ROOT_PATH {
            if !root.label().is_empty() && !root.is_terminal() {
                return Err(MuxError::DuplicateRoot {
                    namespace: namespace.to_string(),
                });
            }
            root.set_label(ROOT_PATH);
            root.push_handler(handler);
            metrics::record_route_registered(namespace);
            tracing::debug!(namespace, path, "Registered root route");
            return Ok(());
        }

        let segments: Vec<&str> = segment::split_path(path).collect();
        let Some((last, init)) = segments.split_last() else {
            tracing::debug!(namespace, path, "Route has no segments, nothing registered");
            return Ok(());
        };

        let mut created = 0usize;
        let mut node = root;
        for key in init {
            let (next, is_new) = node.child_or_insert_with(key, || handler.clone());
            created += usize::from(is_new);
            node = next;
        }

        let (leaf, is_new) = node.child_or_insert_with(last, || handler.clone());
        if is_new {
            created += 1;
        } else {
            leaf.push_handler(handler);
        }

        metrics::record_route_registered(namespace);
        tracing::debug!(namespace, path, created_nodes = created, "Registered route");
        Ok(())
    }

    /// Resolve `path` in `namespace` to its handlers and bound parameters.
    pub fn search(&self, namespace: &str, path: &str) -> MuxResult<RouteMatch<H>> {
        let result = self.resolve(namespace, path);
        match &result {
            Ok(_) => metrics::record_search("matched"),
            Err(e) => {
                tracing::trace!(namespace, path, error = %e, "Route lookup failed");
                metrics::record_search(e.kind());
            }
        }
        result
    }

    fn resolve(&self, namespace: &str, path: &str) -> MuxResult<RouteMatch<H>> {
        let root = match self.namespaces.get(namespace) {
            Some(root) if !root.label().is_empty() || root.has_children() => root,
            _ => {
                return Err(MuxError::EmptyTree {
                    namespace: namespace.to_string(),
                })
            }
        };

        let no_handler = || MuxError::NoHandler {
            path: path.to_string(),
        };

        let mut params = Params::new();
        let mut node = root;

        for seg in segment::split_path(path) {
            if let Some(next) = node.child(seg) {
                node = next;
                continue;
            }

            let dynamic = node.first_dynamic_child().ok_or_else(no_handler)?;
            let key = dynamic.label();
            let regex = self.patterns.get(segment::extract_pattern(key))?;
            let name = segment::extract_param_name(key);

            if !regex.is_match(seg) {
                return Err(MuxError::ParamMismatch {
                    param: name.to_string(),
                    segment: seg.to_string(),
                });
            }

            params.push(Param::new(name, seg));
            node = dynamic;
        }

        if !node.is_terminal() {
            return Err(no_handler());
        }

        Ok(RouteMatch {
            handlers: node.handlers().to_vec(),
            params,
        })
    }
}
