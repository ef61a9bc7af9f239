#![allow(dead_code)]

use axum::Router;
use carprice::application::ml::{
    ModelArtifact, OrdinalEncoder, SmartCorePredictor, UnknownCategoryPolicy,
};
use carprice::application::prediction_service::PredictionService;
use carprice::domain::ml::FeatureRow;
use carprice::domain::vehicle::{CategoryValidation, FeatureVector};
use carprice::infrastructure::observability::Metrics;
use carprice::interfaces::http::{AppState, create_router};
use smartcore::ensemble::random_forest_regressor::{
    RandomForestRegressor, RandomForestRegressorParameters,
};
use smartcore::linalg::basic::matrix::DenseMatrix;
use std::sync::Arc;

const VEHICLE_TYPES: [&str; 4] = ["sedan", "small", "wagon", "suv"];
const BRANDS: [&str; 4] = ["volkswagen", "bmw", "opel", "audi"];
const MODELS: [&str; 4] = ["golf", "3er", "astra", "a4"];

/// The request used throughout the API docs
pub fn sample_vector() -> FeatureVector {
    FeatureVector {
        vehicle_type: "sedan".to_string(),
        registration_year: 2010,
        gearbox: "manual".to_string(),
        power: 120,
        model: "golf".to_string(),
        kilometer: 100_000,
        fuel_type: "petrol".to_string(),
        brand: "volkswagen".to_string(),
        repaired: "no".to_string(),
    }
}

fn training_vector(i: usize) -> FeatureVector {
    FeatureVector {
        vehicle_type: VEHICLE_TYPES[i % 4].to_string(),
        registration_year: 1995 + (i % 20) as i32,
        gearbox: ["manual", "auto"][i % 2].to_string(),
        power: 60 + (i % 18) as i32 * 10,
        model: MODELS[i % 4].to_string(),
        kilometer: 150_000 - (i % 15) as i64 * 10_000,
        fuel_type: ["petrol", "gasoline"][i % 2].to_string(),
        brand: BRANDS[i % 4].to_string(),
        repaired: ["no", "yes"][i % 2].to_string(),
    }
}

fn training_price(v: &FeatureVector) -> f64 {
    let age_bonus = (v.registration_year - 1990) as f64 * 300.0;
    let mileage_penalty = v.kilometer as f64 / 50.0;
    (1_000.0 + age_bonus + v.power as f64 * 20.0 - mileage_penalty).max(200.0)
}

/// Fits a small forest on synthetic listings
pub fn artifact(policy: UnknownCategoryPolicy) -> ModelArtifact {
    let vectors: Vec<FeatureVector> = (0..80).map(training_vector).collect();
    let rows: Vec<FeatureRow> = vectors.iter().map(FeatureRow::from_vector).collect();
    let encoder = OrdinalEncoder::fit(&rows, policy);

    let x: Vec<Vec<f64>> = rows.iter().map(|r| encoder.encode(r).unwrap()).collect();
    let y: Vec<f64> = vectors.iter().map(training_price).collect();

    let params = RandomForestRegressorParameters::default()
        .with_n_trees(10)
        .with_max_depth(6);
    let forest =
        RandomForestRegressor::fit(&DenseMatrix::from_2d_vec(&x).unwrap(), &y, params).unwrap();

    ModelArtifact::new("synthetic-forest", "test", encoder, forest)
}

pub fn service(validation: CategoryValidation, policy: UnknownCategoryPolicy) -> PredictionService {
    let predictor = SmartCorePredictor::from_artifact(artifact(policy));
    PredictionService::new(Arc::new(predictor), validation, Metrics::new().unwrap())
}

pub fn app(validation: CategoryValidation, policy: UnknownCategoryPolicy) -> Router {
    let state = Arc::new(AppState::new(
        "Car Prices Predictor",
        "test",
        service(validation, policy),
    ));
    create_router(state)
}

pub fn default_app() -> Router {
    app(CategoryValidation::Strict, UnknownCategoryPolicy::Error)
}
