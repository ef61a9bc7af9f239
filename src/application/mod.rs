// Model loading and scoring
pub mod ml;

// Validation and single-prediction boundary
pub mod prediction_service;

// Form client: HTTP calls and form state
pub mod client;
pub mod form;
