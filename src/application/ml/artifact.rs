use crate::application::ml::encoder::OrdinalEncoder;
use crate::domain::errors::ArtifactError;
use crate::domain::ml::feature_registry::column_names;
use serde::{Deserialize, Serialize};
use smartcore::ensemble::random_forest_regressor::RandomForestRegressor;
use smartcore::linalg::basic::matrix::DenseMatrix;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Artifact layout version this build reads and writes
pub const ARTIFACT_FORMAT_VERSION: u32 = 1;

pub type PriceForest = RandomForestRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>>;

/// Serialized price model: column layout, categorical encoder and the
/// fitted regressor, stored together as one JSON document.
#[derive(Serialize, Deserialize)]
pub struct ModelArtifact {
    pub format_version: u32,
    pub name: String,
    pub version: String,
    pub columns: Vec<String>,
    pub encoder: OrdinalEncoder,
    pub regressor: PriceForest,
}

impl ModelArtifact {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        encoder: OrdinalEncoder,
        regressor: PriceForest,
    ) -> Self {
        Self {
            format_version: ARTIFACT_FORMAT_VERSION,
            name: name.into(),
            version: version.into(),
            columns: column_names(),
            encoder,
            regressor,
        }
    }

    /// Reads and checks an artifact from disk
    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        let file = File::open(path)?;
        let artifact: Self = serde_json::from_reader(BufReader::new(file))?;
        artifact.check()?;
        Ok(artifact)
    }

    pub fn save(&self, path: &Path) -> Result<(), ArtifactError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = File::create(path)?;
        serde_json::to_writer(BufWriter::new(file), self)?;
        Ok(())
    }

    fn check(&self) -> Result<(), ArtifactError> {
        if self.format_version != ARTIFACT_FORMAT_VERSION {
            return Err(ArtifactError::UnsupportedVersion {
                found: self.format_version,
                supported: ARTIFACT_FORMAT_VERSION,
            });
        }

        let expected = column_names();
        if self.columns != expected {
            return Err(ArtifactError::ColumnMismatch {
                expected,
                found: self.columns.clone(),
            });
        }

        self.encoder.check_columns()
    }
}
