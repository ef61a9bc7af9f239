use crate::domain::vehicle::FeatureVector;

/// Kind of value a model column holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Categorical,
    Numeric,
}

/// Ordered list of model columns.
/// This order MUST match the column order the model was trained on.
/// Any change here is a breaking change for model artifacts.
pub const FEATURE_COLUMNS: &[(&str, ColumnKind)] = &[
    ("vehicle_type", ColumnKind::Categorical),
    ("registration_year", ColumnKind::Numeric),
    ("gearbox", ColumnKind::Categorical),
    ("power", ColumnKind::Numeric),
    ("model", ColumnKind::Categorical),
    ("kilometer", ColumnKind::Numeric),
    ("fuel_type", ColumnKind::Categorical),
    ("brand", ColumnKind::Categorical),
    ("repaired", ColumnKind::Categorical),
];

/// Column names in training order
pub fn column_names() -> Vec<String> {
    FEATURE_COLUMNS
        .iter()
        .map(|(name, _)| name.to_string())
        .collect()
}

/// Names of the categorical columns in training order
pub fn categorical_columns() -> impl Iterator<Item = &'static str> {
    FEATURE_COLUMNS
        .iter()
        .filter(|(_, kind)| *kind == ColumnKind::Categorical)
        .map(|(name, _)| *name)
}

/// A single cell of a feature row
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureValue {
    Category(String),
    Number(f64),
}

/// Single-row tabular record handed to the model, one value per entry of
/// [`FEATURE_COLUMNS`] in the same order.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRow {
    values: Vec<FeatureValue>,
}

impl FeatureRow {
    /// Builds the row from a request. Text values are trimmed and
    /// lower-cased so un-normalized input scores the same as normalized.
    pub fn from_vector(vector: &FeatureVector) -> Self {
        let category = |s: &str| FeatureValue::Category(s.trim().to_lowercase());

        Self {
            values: vec![
                category(&vector.vehicle_type),
                FeatureValue::Number(vector.registration_year as f64),
                category(&vector.gearbox),
                FeatureValue::Number(vector.power as f64),
                category(&vector.model),
                FeatureValue::Number(vector.kilometer as f64),
                category(&vector.fuel_type),
                category(&vector.brand),
                category(&vector.repaired),
            ],
        }
    }

    pub fn get(&self, column: &str) -> Option<&FeatureValue> {
        FEATURE_COLUMNS
            .iter()
            .position(|(name, _)| *name == column)
            .and_then(|idx| self.values.get(idx))
    }

    /// Iterates `(column, value)` pairs in training order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &FeatureValue)> {
        FEATURE_COLUMNS
            .iter()
            .map(|(name, _)| *name)
            .zip(self.values.iter())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vector() -> FeatureVector {
        FeatureVector {
            vehicle_type: "Sedan".to_string(),
            registration_year: 2010,
            gearbox: "manual".to_string(),
            power: 120,
            model: "  Golf ".to_string(),
            kilometer: 100_000,
            fuel_type: "petrol".to_string(),
            brand: "VolksWagen".to_string(),
            repaired: "no".to_string(),
        }
    }

    #[test]
    fn test_row_length_matches_columns() {
        let row = FeatureRow::from_vector(&vector());
        assert_eq!(row.len(), FEATURE_COLUMNS.len());
        assert_eq!(column_names().len(), 9);
    }

    #[test]
    fn test_row_follows_training_order() {
        let row = FeatureRow::from_vector(&vector());
        let names: Vec<&str> = row.iter().map(|(name, _)| name).collect();
        assert_eq!(names, column_names());
    }

    #[test]
    fn test_text_values_are_normalized() {
        let row = FeatureRow::from_vector(&vector());
        assert_eq!(
            row.get("model"),
            Some(&FeatureValue::Category("golf".to_string()))
        );
        assert_eq!(
            row.get("brand"),
            Some(&FeatureValue::Category("volkswagen".to_string()))
        );
        assert_eq!(
            row.get("vehicle_type"),
            Some(&FeatureValue::Category("sedan".to_string()))
        );
    }

    #[test]
    fn test_numeric_values_are_widened() {
        let row = FeatureRow::from_vector(&vector());
        assert_eq!(row.get("kilometer"), Some(&FeatureValue::Number(100_000.0)));
        assert_eq!(row.get("unknown_column"), None);
    }

    #[test]
    fn test_categorical_columns() {
        let cats: Vec<&str> = categorical_columns().collect();
        assert_eq!(
            cats,
            vec!["vehicle_type", "gearbox", "model", "fuel_type", "brand", "repaired"]
        );
    }
}
