//! Routing metrics.
//!
//! # Metrics
//! - `mux_pattern_cache_hits_total` (counter): constraint lookups served from cache
//! - `mux_pattern_cache_misses_total` (counter): constraints compiled
//! - `mux_pattern_cache_size` (gauge): distinct patterns stored
//! - `mux_routes_registered_total` (counter): inserts, by namespace
//! - `mux_search_total` (counter): searches, by outcome

use metrics::{counter, gauge};

pub fn record_pattern_cache_hit() {
    counter!("mux_pattern_cache_hits_total").increment(1);
}

pub fn record_pattern_cache_miss() {
    counter!("mux_pattern_cache_misses_total").increment(1);
}

pub fn record_pattern_cache_size(size: usize) {
    gauge!("mux_pattern_cache_size").set(size as f64);
}

pub fn record_route_registered(namespace: &str) {
    counter!("mux_routes_registered_total", "namespace" => namespace.to_string()).increment(1);
}

/// Record a search outcome (`matched` or an error kind).
pub fn record_search(outcome: &'static str) {
    counter!("mux_search_total", "outcome" => outcome).increment(1);
}
