//! Namespaced path-matching trie for HTTP-style multiplexers.
//!
//! Routes are registered per namespace with literal segments, named parameters
//! (`:id`) and regex-constrained parameters (`:id[^\d+$]`). A search resolves a
//! path to the registered handlers plus the bound parameters.

pub mod config;
pub mod mux;
pub mod observability;

pub use config::schema::RouteTableConfig;
pub use mux::{MuxError, MuxResult, Param, Params, PatternCache, RouteMatch, Tree};
