//! Shared utilities for integration tests.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use trie_mux::config::{RouteConfig, RouteTableConfig};
use trie_mux::Tree;

/// Build a tree from `(namespace, path, handler)` triples, in order.
#[allow(dead_code)]
pub fn tree_from(routes: &[(&str, &str, &'static str)]) -> Tree<&'static str> {
    let mut tree = Tree::default();
    for (namespace, path, handler) in routes {
        tree.insert(namespace, path, *handler).unwrap();
    }
    tree
}

/// A route table with the usual CRUD shape.
#[allow(dead_code)]
pub fn sample_table() -> RouteTableConfig {
    let route = |namespace: &str, path: &str, handler: &str| RouteConfig {
        namespace: namespace.into(),
        path: path.into(),
        handler: handler.into(),
    };
    RouteTableConfig {
        namespaces: vec!["GET".into(), "POST".into()],
        routes: vec![
            route("GET", "/", "index"),
            route("GET", "/users", "list_users"),
            route("GET", r"/users/:id[^\d+$]", "show_user"),
            route("POST", "/users", "create_user"),
        ],
        ..Default::default()
    }
}

/// Write `content` to a fresh file under the system temp dir.
#[allow(dead_code)]
pub fn write_temp_file(name: &str, content: &str) -> PathBuf {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    let path = std::env::temp_dir().join(format!("trie_mux_{}_{}_{}", std::process::id(), n, name));
    std::fs::write(&path, content).unwrap();
    path
}
