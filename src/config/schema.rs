//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from route table files.

use serde::{Deserialize, Serialize};

use crate::mux::{MuxResult, Tree};

/// Root configuration: the route table and how to log while serving it.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RouteTableConfig {
    /// Namespaces seeded before any route is registered.
    pub namespaces: Vec<String>,

    /// Route definitions, registered in file order.
    pub routes: Vec<RouteConfig>,

    /// Logging settings.
    pub logging: LoggingConfig,
}

impl RouteTableConfig {
    /// Build a tree with every route registered; handlers are the handler names.
    pub fn build_tree(&self) -> MuxResult<Tree<String>> {
        let mut tree = Tree::new(self.namespaces.iter().cloned());
        for route in &self.routes {
            tree.insert(&route.namespace, &route.path, route.handler.clone())?;
        }
        tracing::info!(
            namespaces = tree.namespaces().count(),
            routes = self.routes.len(),
            "Route table built"
        );
        Ok(tree)
    }
}

/// A single route definition.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct RouteConfig {
    /// Namespace the route belongs to (e.g., an HTTP method).
    pub namespace: String,

    /// Route path, e.g. `/users/:id[^\d+$]`.
    pub path: String,

    /// Opaque handler name returned on a match.
    pub handler: String,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    pub level: String,

    /// Output format.
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}
