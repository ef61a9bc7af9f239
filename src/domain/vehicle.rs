//! Vehicle attributes accepted for price scoring.
//!
//! [`FeatureVector`] is the wire shape of a prediction request. The
//! enumerated attributes have typed counterparts ([`VehicleType`],
//! [`Gearbox`], [`FuelType`], [`RepairStatus`]) whose `FromStr`
//! implementations define the accepted domain for each field.

use crate::domain::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! categorical_attribute {
    (
        $(#[$meta:meta])*
        $name:ident, field = $field:literal, { $($variant:ident => $text:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Name of the request field carrying this attribute
            pub const FIELD: &'static str = $field;

            /// Every accepted value, in display order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }

            fn allowed() -> String {
                Self::ALL
                    .iter()
                    .map(|v| v.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($text => Ok($name::$variant),)+
                    _ => Err(ValidationError::UnknownCategory {
                        field: $field,
                        value: s.to_string(),
                        allowed: Self::allowed(),
                    }),
                }
            }
        }
    };
}

categorical_attribute!(
    /// Body style of the vehicle
    VehicleType, field = "vehicle_type", {
        Small => "small",
        Sedan => "sedan",
        Wagon => "wagon",
        Coupe => "coupe",
        Suv => "suv",
        Convertible => "convertible",
        Bus => "bus",
        Other => "other",
        Unknown => "unknown",
    }
);

categorical_attribute!(
    Gearbox, field = "gearbox", {
        Manual => "manual",
        Auto => "auto",
        Unknown => "unknown",
    }
);

categorical_attribute!(
    FuelType, field = "fuel_type", {
        Petrol => "petrol",
        Gasoline => "gasoline",
        Lpg => "lpg",
        Cng => "cng",
        Hybrid => "hybrid",
        Electric => "electric",
        Other => "other",
        Unknown => "unknown",
    }
);

categorical_attribute!(
    /// Whether the vehicle has been repaired after damage
    RepairStatus, field = "repaired", {
        Yes => "yes",
        No => "no",
        Unknown => "unknown",
    }
);

/// One vehicle submitted for scoring.
///
/// All nine fields are required. Integer fields reject floats and strings
/// during deserialization; enumerated fields arrive as plain strings and are
/// checked by [`FeatureVector::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub vehicle_type: String,
    pub registration_year: i32,
    pub gearbox: String,
    pub power: i32,
    pub model: String,
    pub kilometer: i64,
    pub fuel_type: String,
    pub brand: String,
    pub repaired: String,
}

impl FeatureVector {
    /// Checks enumerated fields against their domains and rejects blank
    /// free-text fields. Returns the first violation found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.vehicle_type.parse::<VehicleType>()?;
        self.gearbox.parse::<Gearbox>()?;
        self.fuel_type.parse::<FuelType>()?;
        self.repaired.parse::<RepairStatus>()?;

        if self.brand.trim().is_empty() {
            return Err(ValidationError::EmptyField { field: "brand" });
        }
        if self.model.trim().is_empty() {
            return Err(ValidationError::EmptyField { field: "model" });
        }

        Ok(())
    }
}

/// How strictly enumerated fields are checked before scoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryValidation {
    /// Out-of-domain values are rejected before reaching the model
    #[default]
    Strict,
    /// Values are forwarded untouched; the model's encoder decides
    Passthrough,
}

impl FromStr for CategoryValidation {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(CategoryValidation::Strict),
            "passthrough" => Ok(CategoryValidation::Passthrough),
            _ => anyhow::bail!(
                "Invalid CATEGORY_VALIDATION: {}. Must be 'strict' or 'passthrough'",
                s
            ),
        }
    }
}
