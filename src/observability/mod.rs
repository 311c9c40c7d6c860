//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Routing core produces:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (counters and gauges via the metrics facade)
//!
//! Consumers:
//!     → subscriber installed by the binary (stderr, pretty or JSON)
//!     → whatever metrics recorder the embedding application installs
//! ```
//!
//! # Design Decisions
//! - The library never installs a subscriber or recorder itself
//! - Metric updates are no-ops until a recorder exists

pub mod logging;
pub mod metrics;
