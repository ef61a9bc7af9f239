//! Ordinal encoding of categorical columns.
//!
//! Each categorical column carries an ordered vocabulary learned at training
//! time; a category encodes to its index in that vocabulary. Numeric columns
//! pass through as `f64`.

use crate::domain::errors::{ArtifactError, ScoringError};
use crate::domain::ml::feature_registry::{FeatureRow, FeatureValue, categorical_columns};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Encoded value for a category outside the vocabulary under
/// [`UnknownCategoryPolicy::Sentinel`]
pub const UNKNOWN_SENTINEL: f64 = -1.0;

/// What the encoder does with a category it has never seen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownCategoryPolicy {
    /// Fail the prediction
    #[default]
    Error,
    /// Encode as [`UNKNOWN_SENTINEL`] and let the model score it
    Sentinel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrdinalEncoder {
    vocabularies: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    unknown: UnknownCategoryPolicy,
}

impl OrdinalEncoder {
    pub fn new(unknown: UnknownCategoryPolicy) -> Self {
        Self {
            vocabularies: BTreeMap::new(),
            unknown,
        }
    }

    /// Learns a sorted vocabulary for every categorical column from `rows`
    pub fn fit(rows: &[FeatureRow], unknown: UnknownCategoryPolicy) -> Self {
        let mut seen: BTreeMap<String, BTreeSet<String>> = categorical_columns()
            .map(|column| (column.to_string(), BTreeSet::new()))
            .collect();

        for row in rows {
            for (column, value) in row.iter() {
                if let (FeatureValue::Category(category), Some(set)) = (value, seen.get_mut(column))
                {
                    set.insert(category.clone());
                }
            }
        }

        Self {
            vocabularies: seen
                .into_iter()
                .map(|(column, set)| (column, set.into_iter().collect()))
                .collect(),
            unknown,
        }
    }

    pub fn with_vocabulary<I, S>(mut self, column: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.vocabularies
            .insert(column.to_string(), values.into_iter().map(Into::into).collect());
        self
    }

    pub fn unknown_policy(&self) -> UnknownCategoryPolicy {
        self.unknown
    }

    pub fn vocabulary(&self, column: &str) -> Option<&[String]> {
        self.vocabularies.get(column).map(Vec::as_slice)
    }

    /// Ensures every categorical column has a vocabulary
    pub fn check_columns(&self) -> Result<(), ArtifactError> {
        for column in categorical_columns() {
            if !self.vocabularies.contains_key(column) {
                return Err(ArtifactError::MissingVocabulary {
                    column: column.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Encodes a row into the numeric vector the regressor expects
    pub fn encode(&self, row: &FeatureRow) -> Result<Vec<f64>, ScoringError> {
        row.iter()
            .map(|(column, value)| match value {
                FeatureValue::Number(n) => Ok(*n),
                FeatureValue::Category(category) => self.encode_category(column, category),
            })
            .collect()
    }

    fn encode_category(&self, column: &str, category: &str) -> Result<f64, ScoringError> {
        let vocabulary =
            self.vocabularies
                .get(column)
                .ok_or_else(|| ScoringError::MissingColumn {
                    column: column.to_string(),
                })?;

        match vocabulary.iter().position(|v| v == category) {
            Some(idx) => Ok(idx as f64),
            None => match self.unknown {
                UnknownCategoryPolicy::Sentinel => Ok(UNKNOWN_SENTINEL),
                UnknownCategoryPolicy::Error => Err(ScoringError::UnknownCategory {
                    column: column.to_string(),
                    value: category.to_string(),
                }),
            },
        }
    }
}
