//! Lightweight in-process metrics.
//!
//! Instruments are atomics behind `DashMap`s, rendered in the Prometheus text
//! exposition format by the `/metrics` handler. `track_requests` is the
//! router-wide middleware feeding the per-request series.

pub mod metrics;
mod middleware;

pub use metrics::ServerMetrics;
pub use middleware::track_requests;
