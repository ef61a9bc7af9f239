pub mod feature_registry;
pub mod predictor;

pub use feature_registry::{FEATURE_COLUMNS, FeatureRow, FeatureValue};
pub use predictor::PricePredictor;
