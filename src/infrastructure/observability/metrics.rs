//! Prometheus counters for the prediction service
//!
//! All metrics use the `carprice_` prefix.

use prometheus::{IntCounter, IntCounterVec, Opts, Registry, TextEncoder};
use std::sync::Arc;

/// Reasons a prediction request can be turned away before scoring
pub const REJECT_MALFORMED: &str = "malformed";
pub const REJECT_VALIDATION: &str = "validation";

/// Prediction counters shared by every request handler.
///
/// Counters are atomic, so concurrent handlers never lose updates.
#[derive(Clone)]
pub struct Metrics {
    registry: Arc<Registry>,
    /// Predictions accepted for scoring
    pub predictions_total: IntCounter,
    /// Requests rejected before scoring, by reason
    pub rejections_total: IntCounterVec,
    /// Accepted requests the model failed to score
    pub scoring_failures_total: IntCounter,
}

impl Metrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let predictions_total = IntCounter::with_opts(Opts::new(
            "carprice_predictions_total",
            "Prediction requests accepted for scoring",
        ))?;
        registry.register(Box::new(predictions_total.clone()))?;

        let rejections_total = IntCounterVec::new(
            Opts::new(
                "carprice_predictions_rejected_total",
                "Prediction requests rejected before scoring",
            ),
            &["reason"],
        )?;
        registry.register(Box::new(rejections_total.clone()))?;

        let scoring_failures_total = IntCounter::with_opts(Opts::new(
            "carprice_scoring_failures_total",
            "Accepted prediction requests the model failed to score",
        ))?;
        registry.register(Box::new(scoring_failures_total.clone()))?;

        Ok(Self {
            registry: Arc::new(registry),
            predictions_total,
            rejections_total,
            scoring_failures_total,
        })
    }

    /// Number of predictions accepted since start
    pub fn request_count(&self) -> u64 {
        self.predictions_total.get()
    }

    pub fn record_rejection(&self, reason: &str) {
        self.rejections_total.with_label_values(&[reason]).inc();
    }

    pub fn rejections(&self, reason: &str) -> u64 {
        self.rejections_total.with_label_values(&[reason]).get()
    }

    /// Render all metrics in Prometheus text format
    pub fn render(&self) -> String {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        encoder
            .encode_to_string(&metric_families)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_creation() {
        let metrics = Metrics::new().expect("Failed to create metrics");
        assert_eq!(metrics.request_count(), 0);
        assert!(metrics.render().contains("carprice_predictions_total"));
    }

    #[test]
    fn test_clones_share_counters() {
        let metrics = Metrics::new().expect("Failed to create metrics");
        let clone = metrics.clone();
        clone.predictions_total.inc();
        clone.predictions_total.inc();
        assert_eq!(metrics.request_count(), 2);
    }

    #[test]
    fn test_rejections_by_reason() {
        let metrics = Metrics::new().expect("Failed to create metrics");
        metrics.record_rejection(REJECT_MALFORMED);
        metrics.record_rejection(REJECT_MALFORMED);
        metrics.record_rejection(REJECT_VALIDATION);

        assert_eq!(metrics.rejections(REJECT_MALFORMED), 2);
        assert_eq!(metrics.rejections(REJECT_VALIDATION), 1);
        assert!(metrics.render().contains("reason=\"malformed\""));
    }

    #[test]
    fn test_concurrent_increments_are_not_lost() {
        let metrics = Metrics::new().expect("Failed to create metrics");
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let m = metrics.clone();
                std::thread::spawn(move || {
                    for _ in 0..1_000 {
                        m.predictions_total.inc();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(metrics.request_count(), 8_000);
    }
}
