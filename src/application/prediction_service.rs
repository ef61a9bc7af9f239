//! Single-prediction inference boundary.
//!
//! Validates one [`FeatureVector`], builds its [`FeatureRow`] and hands it to
//! the shared [`PricePredictor`]. The predictor is immutable after startup and
//! shared read-only; the only mutable state is the atomic request counter.

use crate::domain::errors::{ScoringError, ValidationError};
use crate::domain::ml::feature_registry::FeatureRow;
use crate::domain::ml::predictor::PricePredictor;
use crate::domain::vehicle::{CategoryValidation, FeatureVector};
use crate::infrastructure::observability::Metrics;
use crate::infrastructure::observability::metrics::REJECT_VALIDATION;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, warn};

#[derive(Debug, Error)]
pub enum PredictionError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error(transparent)]
    Scoring(#[from] ScoringError),
}

#[derive(Clone)]
pub struct PredictionService {
    predictor: Arc<dyn PricePredictor>,
    validation: CategoryValidation,
    metrics: Metrics,
}

impl PredictionService {
    pub fn new(
        predictor: Arc<dyn PricePredictor>,
        validation: CategoryValidation,
        metrics: Metrics,
    ) -> Self {
        Self {
            predictor,
            validation,
            metrics,
        }
    }

    /// Scores one vehicle.
    ///
    /// A request counts as accepted once it passes validation, whether or
    /// not the model then manages to score it.
    pub fn predict(&self, vector: &FeatureVector) -> Result<f64, PredictionError> {
        if self.validation == CategoryValidation::Strict {
            if let Err(e) = vector.validate() {
                warn!(error = %e, "Rejected prediction request");
                self.metrics.record_rejection(REJECT_VALIDATION);
                return Err(e.into());
            }
        }

        let row = FeatureRow::from_vector(vector);
        self.metrics.predictions_total.inc();

        match self.predictor.predict(&row) {
            Ok(value) => {
                debug!(prediction = value, model = %self.predictor.name(), "Scored vehicle");
                Ok(value)
            }
            Err(e) => {
                error!(error = %e, model = %self.predictor.name(), "Model failed to score request");
                self.metrics.scoring_failures_total.inc();
                Err(e.into())
            }
        }
    }

    /// Predictions accepted since process start
    pub fn request_count(&self) -> u64 {
        self.metrics.request_count()
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn validation(&self) -> CategoryValidation {
        self.validation
    }

    pub fn model_name(&self) -> &str {
        self.predictor.name()
    }

    pub fn model_version(&self) -> &str {
        self.predictor.version()
    }
}
