//! Lightweight in-process metrics.
//!
//! Decision counters and validation latency, stored as atomics and rendered in
//! Prometheus text format on demand.

pub mod metrics;
