//! Request counters for the prediction service.
//!
//! Counters live in a private Prometheus registry. Nothing is exported over
//! HTTP; `/stats` reads the prediction counter directly.

pub mod metrics;

pub use metrics::Metrics;
