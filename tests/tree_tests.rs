//! Registration and lookup behaviour of the routing tree.

use trie_mux::{MuxError, Param, Params, Tree};

mod common;

#[test]
fn test_literal_round_trip() {
    let tree = common::tree_from(&[("GET", "/api/v1/health", "health")]);

    let m = tree.search("GET", "/api/v1/health").unwrap();
    assert_eq!(m.handlers, vec!["health"]);
    assert!(m.params.is_empty());
}

#[test]
fn test_empty_segments_are_ignored() {
    let tree = common::tree_from(&[("GET", "//api///v1/", "v1")]);

    assert_eq!(tree.search("GET", "/api/v1").unwrap().handlers, vec!["v1"]);
    assert_eq!(tree.search("GET", "api/v1//").unwrap().handlers, vec!["v1"]);
}

#[test]
fn test_parameter_extraction() {
    let tree = common::tree_from(&[("GET", "/foo/:id", "show")]);

    let m = tree.search("GET", "/foo/123").unwrap();
    assert_eq!(m.handlers, vec!["show"]);
    assert_eq!(m.params, Params::from(vec![Param::new("id", "123")]));
}

#[test]
fn test_multiple_parameters_in_order() {
    let tree = common::tree_from(&[("GET", "/users/:user/posts/:post", "post")]);

    let m = tree.search("GET", "/users/alice/posts/7").unwrap();
    let bound: Vec<(&str, &str)> = m.params.iter().map(|p| (p.key(), p.value())).collect();
    assert_eq!(bound, vec![("user", "alice"), ("post", "7")]);
}

#[test]
fn test_constrained_parameter() {
    let tree = common::tree_from(&[("GET", r"/foo/:id[^\d+$]", "digits")]);

    let err = tree.search("GET", "/foo/abc").unwrap_err();
    match err {
        MuxError::ParamMismatch { param, segment } => {
            assert_eq!(param, "id");
            assert_eq!(segment, "abc");
        }
        other => panic!("unexpected error: {other}"),
    }

    let m = tree.search("GET", "/foo/42").unwrap();
    assert_eq!(m.handlers, vec!["digits"]);
    assert_eq!(m.params.get("id"), Some("42"));
}

#[test]
fn test_unanchored_constraint_searches_segment() {
    let tree = common::tree_from(&[("GET", r"/files/:name[\.txt]", "text")]);

    assert!(tree.search("GET", "/files/notes.txt").is_ok());
    assert!(tree.search("GET", "/files/notes.txt.bak").is_ok());
    assert!(matches!(
        tree.search("GET", "/files/notes.md"),
        Err(MuxError::ParamMismatch { .. })
    ));
}

#[test]
fn test_handlers_accumulate_in_order() {
    let tree = common::tree_from(&[("GET", "/x", "h1"), ("GET", "/x", "h2"), ("GET", "/x/", "h3")]);

    assert_eq!(tree.search("GET", "/x").unwrap().handlers, vec!["h1", "h2", "h3"]);
}

#[test]
fn test_root_path() {
    let tree = common::tree_from(&[("GET", "/", "index"), ("GET", "/", "audit")]);

    let m = tree.search("GET", "/").unwrap();
    assert_eq!(m.handlers, vec!["index", "audit"]);
    assert_eq!(tree.root("GET").unwrap().label(), "/");

    // Empty path resolves to the root as well
    assert_eq!(tree.search("GET", "").unwrap().handlers, vec!["index", "audit"]);
}

#[test]
fn test_root_without_handler() {
    let tree = common::tree_from(&[("GET", "/users", "list")]);

    assert!(matches!(
        tree.search("GET", "/"),
        Err(MuxError::NoHandler { .. })
    ));
}

#[test]
fn test_unknown_path() {
    let tree = common::tree_from(&[("GET", "/users", "list")]);

    assert!(matches!(
        tree.search("GET", "/nope"),
        Err(MuxError::NoHandler { ref path }) if path == "/nope"
    ));
    // Past a leaf with no children
    assert!(matches!(
        tree.search("GET", "/users/extra"),
        Err(MuxError::NoHandler { .. })
    ));
}

#[test]
fn test_empty_and_unknown_namespace() {
    let tree: Tree<&str> = Tree::new(["GET"]);

    assert!(matches!(
        tree.search("GET", "/nope"),
        Err(MuxError::EmptyTree { ref namespace }) if namespace == "GET"
    ));
    assert!(matches!(
        tree.search("PATCH", "/nope"),
        Err(MuxError::EmptyTree { .. })
    ));
}

#[test]
fn test_namespaces_are_independent() {
    let tree = common::tree_from(&[
        ("GET", "/users", "list"),
        ("POST", "/users", "create"),
    ]);

    assert_eq!(tree.search("GET", "/users").unwrap().handlers, vec!["list"]);
    assert_eq!(tree.search("POST", "/users").unwrap().handlers, vec!["create"]);
}

#[test]
fn test_dynamic_priority_follows_registration_order() {
    let first_wide = common::tree_from(&[
        ("GET", "/foo/:id", "wide"),
        ("GET", r"/foo/:id[^\d+$]", "narrow"),
    ]);
    assert_eq!(first_wide.search("GET", "/foo/1").unwrap().handlers, vec!["wide"]);

    let first_narrow = common::tree_from(&[
        ("GET", r"/foo/:id[^\d+$]", "narrow"),
        ("GET", "/foo/:id", "wide"),
    ]);
    assert_eq!(first_narrow.search("GET", "/foo/1").unwrap().handlers, vec!["narrow"]);
    // The wide sibling is never tried
    assert!(matches!(
        first_narrow.search("GET", "/foo/x"),
        Err(MuxError::ParamMismatch { .. })
    ));
}

#[test]
fn test_literal_siblings_before_parameter() {
    let tree = common::tree_from(&[
        ("GET", "/a/b", "b"),
        ("GET", "/a/:rest", "rest"),
        ("GET", "/a/c", "c"),
    ]);

    assert_eq!(tree.search("GET", "/a/c").unwrap().handlers, vec!["c"]);
    assert_eq!(tree.search("GET", "/a/z").unwrap().params.get("rest"), Some("z"));
}

#[test]
fn test_pattern_cache_reused_across_searches() {
    let tree = common::tree_from(&[
        ("GET", r"/a/:id[^\d+$]", "a"),
        ("GET", r"/b/:id[^\d+$]", "b"),
    ]);

    for _ in 0..10 {
        tree.search("GET", "/a/1").unwrap();
        tree.search("GET", "/b/2").unwrap();
    }

    let cache = tree.pattern_cache();
    assert_eq!(cache.len(), 1);
    assert_eq!(cache.compile_count(), 1);
}

#[test]
fn test_shared_pattern_cache_between_trees() {
    let cache = trie_mux::PatternCache::new();
    let mut get = Tree::with_pattern_cache(cache.clone(), ["GET"]);
    let mut post = Tree::with_pattern_cache(cache.clone(), ["POST"]);
    get.insert("GET", r"/:id[^\d+$]", 1).unwrap();
    post.insert("POST", r"/:id[^\d+$]", 2).unwrap();

    assert_eq!(get.search("GET", "/5").unwrap().handlers, vec![1]);
    assert_eq!(post.search("POST", "/6").unwrap().handlers, vec![2]);
    assert_eq!(cache.compile_count(), 1);
}
