//! Observability for lexicache
//!
//! Structured JSON logging, typed events and counter-only metrics.
//! Logs are synchronous and unbuffered; metrics reset only on process start.

mod events;
mod logger;
mod metrics;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use metrics::MetricsRegistry;
