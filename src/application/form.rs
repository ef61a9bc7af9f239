//! Form state behind the price prediction window.
//!
//! Kept free of any GUI types so the clamping, normalization and rendering
//! rules can be exercised directly.

use crate::application::client::ClientError;
use crate::domain::vehicle::{FeatureVector, FuelType, Gearbox, RepairStatus, VehicleType};
use std::ops::RangeInclusive;

pub const YEAR_RANGE: RangeInclusive<i32> = 1950..=2015;
pub const POWER_RANGE: RangeInclusive<i32> = 1..=450;
pub const KILOMETER_RANGE: RangeInclusive<i64> = 5_000..=150_000;
pub const KILOMETER_STEP: i64 = 10_000;

#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub vehicle_type: VehicleType,
    pub gearbox: Gearbox,
    pub fuel_type: FuelType,
    pub repaired: RepairStatus,
    pub registration_year: i32,
    pub power: i32,
    pub kilometer: i64,
    pub brand: String,
    pub model: String,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            vehicle_type: VehicleType::ALL[0],
            gearbox: Gearbox::ALL[0],
            fuel_type: FuelType::ALL[0],
            repaired: RepairStatus::ALL[0],
            registration_year: 2010,
            power: 120,
            kilometer: 100_000,
            brand: "bmw".to_string(),
            model: "golf".to_string(),
        }
    }
}

impl FormState {
    /// Pulls numeric fields back into their widget ranges
    pub fn clamp(&mut self) {
        self.registration_year = self
            .registration_year
            .clamp(*YEAR_RANGE.start(), *YEAR_RANGE.end());
        self.power = self.power.clamp(*POWER_RANGE.start(), *POWER_RANGE.end());
        self.kilometer = self
            .kilometer
            .clamp(*KILOMETER_RANGE.start(), *KILOMETER_RANGE.end());
    }

    /// Builds the request body: numbers clamped, brand and model trimmed
    /// and lower-cased.
    pub fn to_feature_vector(&self) -> FeatureVector {
        let mut state = self.clone();
        state.clamp();

        FeatureVector {
            vehicle_type: state.vehicle_type.as_str().to_string(),
            registration_year: state.registration_year,
            gearbox: state.gearbox.as_str().to_string(),
            power: state.power,
            model: normalize_text(&state.model),
            kilometer: state.kilometer,
            fuel_type: state.fuel_type.as_str().to_string(),
            brand: normalize_text(&state.brand),
            repaired: state.repaired.as_str().to_string(),
        }
    }

    /// True when both free-text fields carry something to send
    pub fn is_complete(&self) -> bool {
        !self.brand.trim().is_empty() && !self.model.trim().is_empty()
    }
}

/// What the form shows after a submission completes
#[derive(Debug, Clone, PartialEq)]
pub enum FormOutcome {
    Priced { price: f64, submitted: FeatureVector },
    Failed { message: String },
}

impl FormOutcome {
    pub fn from_result(submitted: FeatureVector, result: Result<f64, ClientError>) -> Self {
        match result {
            Ok(price) => FormOutcome::Priced { price, submitted },
            Err(e) => FormOutcome::Failed {
                message: e.to_string(),
            },
        }
    }
}

pub fn normalize_text(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Echo of the submitted parameters, one `(label, value)` pair per field
pub fn summary_lines(vector: &FeatureVector) -> Vec<(&'static str, String)> {
    vec![
        ("Type", vector.vehicle_type.clone()),
        ("Year", vector.registration_year.to_string()),
        ("Gearbox", vector.gearbox.clone()),
        ("Power", format!("{} hp", vector.power)),
        ("Model", vector.model.clone()),
        ("Mileage", format!("{} km", group_thousands(vector.kilometer))),
        ("Fuel", vector.fuel_type.clone()),
        ("Brand", vector.brand.clone()),
        ("Repaired", vector.repaired.clone()),
    ]
}

/// Formats a price as whole euros with thousands separators, e.g. `€12,345`
pub fn format_price(value: f64) -> String {
    if !value.is_finite() {
        return "€n/a".to_string();
    }
    // `as` saturates at the i64 bounds
    let rounded = value.round() as i64;
    let digits = group_digits(rounded.unsigned_abs());
    if rounded < 0 {
        format!("-€{}", digits)
    } else {
        format!("€{}", digits)
    }
}

fn group_thousands(value: i64) -> String {
    let digits = group_digits(value.unsigned_abs());
    if value < 0 {
        format!("-{}", digits)
    } else {
        digits
    }
}

fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_first_options() {
        let state = FormState::default();
        assert_eq!(state.vehicle_type, VehicleType::Small);
        assert_eq!(state.gearbox, Gearbox::Manual);
        assert_eq!(state.fuel_type, FuelType::Petrol);
        assert_eq!(state.repaired, RepairStatus::Yes);
        assert_eq!(state.registration_year, 2010);
    }

    #[test]
    fn test_clamp_numeric_fields() {
        let mut state = FormState {
            registration_year: 1900,
            power: 9_000,
            kilometer: 0,
            ..FormState::default()
        };
        state.clamp();

        assert_eq!(state.registration_year, 1950);
        assert_eq!(state.power, 450);
        assert_eq!(state.kilometer, 5_000);
    }

    #[test]
    fn test_vector_normalizes_free_text() {
        let state = FormState {
            brand: "  Mercedes_Benz ".to_string(),
            model: " C_Klasse".to_string(),
            ..FormState::default()
        };
        let vector = state.to_feature_vector();

        assert_eq!(vector.brand, "mercedes_benz");
        assert_eq!(vector.model, "c_klasse");
        assert!(vector.validate().is_ok());
    }

    #[test]
    fn test_vector_is_clamped() {
        let state = FormState {
            power: 0,
            ..FormState::default()
        };
        assert_eq!(state.to_feature_vector().power, 1);
    }

    #[test]
    fn test_is_complete() {
        let mut state = FormState::default();
        assert!(state.is_complete());
        state.model = "  ".to_string();
        assert!(!state.is_complete());
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(12_345.4), "€12,345");
        assert_eq!(format_price(999.5), "€1,000");
        assert_eq!(format_price(0.0), "€0");
        assert_eq!(format_price(1_234_567.0), "€1,234,567");
        assert_eq!(format_price(-1_500.0), "-€1,500");
        assert_eq!(format_price(f64::NAN), "€n/a");
    }

    #[test]
    fn test_format_price_extreme_values_do_not_overflow() {
        assert_eq!(format_price(-1e30), "-€9,223,372,036,854,775,808");
        assert_eq!(format_price(f64::MIN), "-€9,223,372,036,854,775,808");
        assert_eq!(format_price(f64::MAX), "€9,223,372,036,854,775,807");
        assert_eq!(format_price(f64::NEG_INFINITY), "€n/a");
    }

    #[test]
    fn test_group_thousands_keeps_sign() {
        assert_eq!(group_thousands(-5_000), "-5,000");
        assert_eq!(group_thousands(i64::MIN), "-9,223,372,036,854,775,808");
    }

    #[test]
    fn test_outcome_from_result() {
        let vector = FormState::default().to_feature_vector();

        let priced = FormOutcome::from_result(vector.clone(), Ok(8_500.0));
        assert!(matches!(priced, FormOutcome::Priced { price, .. } if price == 8_500.0));

        let failed = FormOutcome::from_result(
            vector,
            Err(ClientError::MissingPrediction {
                body: "{}".to_string(),
            }),
        );
        match failed {
            FormOutcome::Failed { message } => assert!(message.contains("Unexpected response")),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_summary_lines_echo_every_field() {
        let vector = FormState::default().to_feature_vector();
        let lines = summary_lines(&vector);

        assert_eq!(lines.len(), 9);
        assert!(lines.contains(&("Mileage", "100,000 km".to_string())));
        assert!(lines.contains(&("Power", "120 hp".to_string())));
    }
}
