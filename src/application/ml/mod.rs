pub mod artifact;
pub mod encoder;
pub mod smartcore_predictor;

pub use artifact::{ARTIFACT_FORMAT_VERSION, ModelArtifact, PriceForest};
pub use encoder::{OrdinalEncoder, UNKNOWN_SENTINEL, UnknownCategoryPolicy};
pub use smartcore_predictor::SmartCorePredictor;
