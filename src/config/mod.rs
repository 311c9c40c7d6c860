//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! route table file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → RouteTableConfig (validated, immutable)
//!     → build_tree() registers every route in file order
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow minimal files
//! - Validation separates syntactic (serde) from semantic checks
//! - Constraints are checked eagerly here even though the tree compiles them lazily

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::LoggingConfig;
pub use schema::RouteConfig;
pub use schema::RouteTableConfig;
