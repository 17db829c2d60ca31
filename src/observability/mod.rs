//! Observability
//!
//! Structured logging and counters for the synchronizer:
//! - One log line = one event, JSON, synchronous, unbuffered
//! - Deterministic field ordering
//! - Counter-only metrics; monotonic, reset only on process start
//!
//! Observability is read-only: nothing here influences reconciliation or
//! leadership decisions.

mod events;
mod logger;
mod metrics;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot};
