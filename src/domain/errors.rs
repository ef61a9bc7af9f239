use thiserror::Error;

/// Errors raised while checking a feature vector at the service boundary
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid value '{value}' for {field}: expected one of {allowed}")]
    UnknownCategory {
        field: &'static str,
        value: String,
        allowed: String,
    },

    #[error("Field {field} must not be empty")]
    EmptyField { field: &'static str },
}

/// Errors raised by the model while scoring a single feature row
#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("Category '{value}' was not seen by the model for column {column}")]
    UnknownCategory { column: String, value: String },

    #[error("Feature row is missing column {column}")]
    MissingColumn { column: String },

    #[error("Matrix creation failed: {reason}")]
    Matrix { reason: String },

    #[error("Model prediction failed: {reason}")]
    Model { reason: String },

    #[error("No prediction returned")]
    EmptyOutput,

    #[error("Model returned a non-finite prediction: {value}")]
    NonFinite { value: f64 },
}

/// Errors raised while loading or saving a model artifact
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("Failed to read model artifact: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse model artifact: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unsupported artifact format v{found}, this build reads v{supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("Artifact columns {found:?} do not match expected {expected:?}")]
    ColumnMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("Artifact has no vocabulary for categorical column {column}")]
    MissingVocabulary { column: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_formatting() {
        let error = ValidationError::UnknownCategory {
            field: "fuel_type",
            value: "plasma".to_string(),
            allowed: "petrol, lpg".to_string(),
        };

        let msg = error.to_string();
        assert!(msg.contains("plasma"));
        assert!(msg.contains("fuel_type"));
        assert!(msg.contains("petrol, lpg"));
    }

    #[test]
    fn test_artifact_version_formatting() {
        let error = ArtifactError::UnsupportedVersion {
            found: 7,
            supported: 1,
        };

        let msg = error.to_string();
        assert!(msg.contains("v7"));
        assert!(msg.contains("v1"));
    }
}
