//! Compiled pattern cache for parameter constraints.
//!
//! # Design Decisions
//! - Keyed by the raw regex source; entries are never evicted
//! - Compilation happens under the shard's entry lock, so a source is compiled
//!   at most once even with concurrent callers
//! - Cloning the cache shares the underlying store
//! - Regexes are handed out as `Arc` so callers share one match-scratch pool

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use regex::Regex;

use crate::mux::types::{MuxError, MuxResult};
use crate::observability::metrics;

/// A thread-safe get-or-compile store for constraint regexes.
#[derive(Debug, Clone, Default)]
pub struct PatternCache {
    inner: Arc<DashMap<String, Arc<Regex>>>,
    compiles: Arc<AtomicUsize>,
}

impl PatternCache {
    /// Create a new empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the compiled regex for `pattern`, compiling and storing it on first use.
    pub fn get(&self, pattern: &str) -> MuxResult<Arc<Regex>> {
        if let Some(regex) = self.inner.get(pattern) {
            metrics::record_pattern_cache_hit();
            return Ok(Arc::clone(regex.value()));
        }

        let regex = match self.inner.entry(pattern.to_string()) {
            // Another caller compiled it between the lookup and the entry lock
            Entry::Occupied(entry) => {
                metrics::record_pattern_cache_hit();
                return Ok(Arc::clone(entry.get()));
            }
            Entry::Vacant(entry) => {
                let regex = Regex::new(pattern).map_err(|source| MuxError::PatternCompile {
                    pattern: pattern.to_string(),
                    source,
                })?;
                self.compiles.fetch_add(1, Ordering::Relaxed);
                tracing::debug!(pattern = %pattern, "Compiled parameter pattern");
                Arc::clone(entry.insert(Arc::new(regex)).value())
            }
        };

        metrics::record_pattern_cache_miss();
        metrics::record_pattern_cache_size(self.inner.len());
        Ok(regex)
    }

    /// Returns true if `pattern` has already been compiled.
    pub fn contains(&self, pattern: &str) -> bool {
        self.inner.contains_key(pattern)
    }

    /// Number of distinct patterns stored.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Number of successful compilations performed by this cache.
    pub fn compile_count(&self) -> usize {
        self.compiles.load(Ordering::Relaxed)
    }
}
