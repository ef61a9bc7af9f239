use super::artifact::ModelArtifact;
use crate::domain::errors::{ArtifactError, ScoringError};
use crate::domain::ml::feature_registry::FeatureRow;
use crate::domain::ml::predictor::PricePredictor;
use smartcore::linalg::basic::matrix::DenseMatrix;
use std::path::Path;
use tracing::info;

/// Random forest price model backed by a [`ModelArtifact`]
pub struct SmartCorePredictor {
    artifact: ModelArtifact,
}

impl SmartCorePredictor {
    pub fn from_artifact(artifact: ModelArtifact) -> Self {
        Self { artifact }
    }

    /// Loads the artifact at `model_path`. A missing or unreadable artifact
    /// is an error; there is no fallback model.
    pub fn load(model_path: &Path) -> Result<Self, ArtifactError> {
        let artifact = ModelArtifact::load(model_path)?;
        info!(
            path = %model_path.display(),
            name = %artifact.name,
            version = %artifact.version,
            unknown_policy = ?artifact.encoder.unknown_policy(),
            "Loaded price model"
        );
        Ok(Self::from_artifact(artifact))
    }
}

impl PricePredictor for SmartCorePredictor {
    fn predict(&self, row: &FeatureRow) -> Result<f64, ScoringError> {
        let input_vec = self.artifact.encoder.encode(row)?;
        let input_matrix =
            DenseMatrix::from_2d_vec(&vec![input_vec]).map_err(|e| ScoringError::Matrix {
                reason: e.to_string(),
            })?;

        let predictions = self
            .artifact
            .regressor
            .predict(&input_matrix)
            .map_err(|e| ScoringError::Model {
                reason: e.to_string(),
            })?;

        single_prediction(&predictions)
    }

    fn name(&self) -> &str {
        &self.artifact.name
    }

    fn version(&self) -> &str {
        &self.artifact.version
    }
}

/// Takes the only output of a one-row prediction. NaN and infinite
/// values are errors, never prices.
fn single_prediction(predictions: &[f64]) -> Result<f64, ScoringError> {
    let value = *predictions.first().ok_or(ScoringError::EmptyOutput)?;
    if !value.is_finite() {
        return Err(ScoringError::NonFinite { value });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ml::encoder::{OrdinalEncoder, UnknownCategoryPolicy};
    use crate::domain::vehicle::FeatureVector;
    use smartcore::ensemble::random_forest_regressor::{
        RandomForestRegressor, RandomForestRegressorParameters,
    };

    const BRANDS: [&str; 3] = ["bmw", "opel", "volkswagen"];
    const MODELS: [&str; 3] = ["3er", "astra", "golf"];

    fn vector(i: usize) -> FeatureVector {
        FeatureVector {
            vehicle_type: ["sedan", "wagon", "small"][i % 3].to_string(),
            registration_year: 1995 + (i % 20) as i32,
            gearbox: ["manual", "auto"][i % 2].to_string(),
            power: 60 + (i % 15) as i32 * 10,
            model: MODELS[i % 3].to_string(),
            kilometer: 150_000 - (i % 14) as i64 * 10_000,
            fuel_type: ["petrol", "gasoline"][i % 2].to_string(),
            brand: BRANDS[i % 3].to_string(),
            repaired: ["no", "yes"][i % 2].to_string(),
        }
    }

    fn price(v: &FeatureVector) -> f64 {
        500.0 + (v.registration_year - 1990) as f64 * 350.0 + v.power as f64 * 15.0
            - v.kilometer as f64 / 100.0
            + 1_500.0
    }

    fn predictor(policy: UnknownCategoryPolicy) -> SmartCorePredictor {
        let vectors: Vec<FeatureVector> = (0..60).map(vector).collect();
        let rows: Vec<FeatureRow> = vectors.iter().map(FeatureRow::from_vector).collect();
        let encoder = OrdinalEncoder::fit(&rows, policy);

        let x: Vec<Vec<f64>> = rows.iter().map(|r| encoder.encode(r).unwrap()).collect();
        let y: Vec<f64> = vectors.iter().map(price).collect();
        let params = RandomForestRegressorParameters::default()
            .with_n_trees(10)
            .with_max_depth(6);
        let forest =
            RandomForestRegressor::fit(&DenseMatrix::from_2d_vec(&x).unwrap(), &y, params)
                .unwrap();

        SmartCorePredictor::from_artifact(ModelArtifact::new("forest", "v1", encoder, forest))
    }

    #[test]
    fn test_prediction_is_finite_and_non_negative() {
        let model = predictor(UnknownCategoryPolicy::Error);
        let row = FeatureRow::from_vector(&vector(7));

        let value = model.predict(&row).unwrap();
        assert!(value.is_finite());
        assert!(value >= 0.0);
    }

    #[test]
    fn test_prediction_is_deterministic() {
        let model = predictor(UnknownCategoryPolicy::Error);
        let row = FeatureRow::from_vector(&vector(11));

        let first = model.predict(&row).unwrap();
        for _ in 0..5 {
            assert_eq!(model.predict(&row).unwrap(), first);
        }
    }

    #[test]
    fn test_unseen_category_fails_under_error_policy() {
        let model = predictor(UnknownCategoryPolicy::Error);
        let mut v = vector(3);
        v.fuel_type = "plasma".to_string();

        let err = model.predict(&FeatureRow::from_vector(&v)).unwrap_err();
        assert!(matches!(err, ScoringError::UnknownCategory { .. }));
    }

    #[test]
    fn test_unseen_category_scores_under_sentinel_policy() {
        let model = predictor(UnknownCategoryPolicy::Sentinel);
        let mut v = vector(3);
        v.brand = "trabant".to_string();

        assert!(model.predict(&FeatureRow::from_vector(&v)).is_ok());
    }

    #[test]
    fn test_name_and_version_come_from_artifact() {
        let model = predictor(UnknownCategoryPolicy::Error);
        assert_eq!(model.name(), "forest");
        assert_eq!(model.version(), "v1");
    }

    #[test]
    fn test_non_finite_output_is_rejected() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = single_prediction(&[bad]).unwrap_err();
            assert!(matches!(err, ScoringError::NonFinite { .. }), "got {err:?}");
        }
    }

    #[test]
    fn test_empty_output_is_rejected() {
        assert!(matches!(
            single_prediction(&[]),
            Err(ScoringError::EmptyOutput)
        ));
    }

    #[test]
    fn test_first_output_is_taken() {
        assert_eq!(single_prediction(&[4_250.0, 1.0]).unwrap(), 4_250.0);
    }
}
