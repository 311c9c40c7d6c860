//! Search result types and error definitions.

use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while registering or resolving routes.
#[derive(Debug, Error)]
pub enum MuxError {
    /// Root route registration against a root that is labelled but carries no handlers.
    #[error("root node already exists in namespace {namespace:?}")]
    DuplicateRoot { namespace: String },

    /// Search against a namespace that has no routes.
    #[error("tree is empty for namespace {namespace:?}")]
    EmptyTree { namespace: String },

    /// No route terminates at the requested path.
    #[error("handler is not registered for {path:?}")]
    NoHandler { path: String },

    /// A constrained parameter rejected the path segment.
    #[error("param {param:?} does not match segment {segment:?}")]
    ParamMismatch { param: String, segment: String },

    /// A registered constraint is not a valid regular expression.
    #[error("invalid pattern {pattern:?}: {source}")]
    PatternCompile {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl MuxError {
    /// Short label for the error, used as a metrics outcome.
    pub fn kind(&self) -> &'static str {
        match self {
            MuxError::DuplicateRoot { .. } => "duplicate_root",
            MuxError::EmptyTree { .. } => "empty_tree",
            MuxError::NoHandler { .. } => "no_handler",
            MuxError::ParamMismatch { .. } => "param_mismatch",
            MuxError::PatternCompile { .. } => "pattern_compile",
        }
    }
}

/// Result type for routing operations.
pub type MuxResult<T> = Result<T, MuxError>;

/// A named value bound from a dynamic path segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Param {
    key: String,
    value: String,
}

impl Param {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Parameter name as declared in the route.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Path segment text bound to the parameter.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Parameters in the order they were bound along the path.
///
/// Duplicate keys are kept; lookups by name return the first binding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Params(Vec<Param>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, param: Param) {
        self.0.push(param);
    }

    /// Value of the first parameter named `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.iter().find(|p| p.key == key).map(Param::value)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Param> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = &'a Param;
    type IntoIter = std::slice::Iter<'a, Param>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Vec<Param>> for Params {
    fn from(params: Vec<Param>) -> Self {
        Self(params)
    }
}

/// Outcome of a successful search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteMatch<H> {
    /// Handlers registered at the terminal node, in registration order.
    pub handlers: Vec<H>,
    /// Parameters bound while walking the path.
    pub params: Params,
}
