//! Routing core.
//!
//! # Data Flow
//! ```text
//! Registration:
//!     Tree::insert(namespace, path, handler)
//!     → segment.rs (split path, classify segments)
//!     → node.rs (walk / extend the namespace trie)
//!
//! Lookup:
//!     Tree::search(namespace, path)
//!     → literal child by exact text
//!     → else first parameter child
//!         → pattern_cache.rs (compile constraint once)
//!     → RouteMatch { handlers, params } or MuxError
//! ```

pub mod node;
pub mod pattern_cache;
pub mod segment;
pub mod tree;
pub mod types;

pub use node::Node;
pub use pattern_cache::PatternCache;
pub use tree::Tree;
pub use types::{MuxError, MuxResult, Param, Params, RouteMatch};
