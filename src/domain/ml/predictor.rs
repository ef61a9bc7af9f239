use crate::domain::errors::ScoringError;
use crate::domain::ml::feature_registry::FeatureRow;

/// Interface for price regression models
pub trait PricePredictor: Send + Sync {
    /// Score one feature row and return the predicted price
    fn predict(&self, row: &FeatureRow) -> Result<f64, ScoringError>;

    /// Get model name/type
    fn name(&self) -> &str;

    /// Get model version/id
    fn version(&self) -> &str;
}
