//! Error types for pricecast-core

use pricecast_io::IoError;
use thiserror::Error;

use crate::config::ConfigError;
use crate::model::ModelError;
use crate::predictor::PredictionError;

/// Result type alias for pricing operations
pub type Result<T> = std::result::Result<T, PricingError>;

/// Main error type for pricing operations
#[derive(Error, Debug)]
pub enum PricingError {
    /// No historical rows for the category, so no statistic is defined
    #[error("No historical rows for category {category:?}")]
    EmptyCohort { category: String },

    /// Category absent from the dataset
    #[error("Unknown category: {0:?}")]
    UnknownCategory(String),

    /// Product absent from the requested category
    #[error("Unknown product {product:?} in category {category:?}")]
    UnknownProduct { product: String, category: String },

    /// Status absent from the dataset
    #[error("Unknown status: {0:?}")]
    UnknownStatus(String),

    /// Caller-supplied quantity outside its fixed bound
    #[error("{field} override {value} is outside [{min}, {max}]")]
    OutOfRangeOverride {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// Calendar label that matches no weekday or month
    #[error("Unknown {kind} label: {label:?}")]
    UnknownLabel { kind: &'static str, label: String },

    /// Cohort column with no finite value to aggregate
    #[error("Column {column} has no usable values for category {category:?}")]
    MissingStatistic {
        column: &'static str,
        category: String,
    },

    /// Normalization range with max <= min
    #[error("Invalid normalization range [{min}, {max}]")]
    InvalidRange { min: f64, max: f64 },

    /// Feature value that cannot be submitted to the model
    #[error("Invalid feature {name}: {value}")]
    InvalidFeature { name: &'static str, value: f64 },

    /// The model failed or returned a malformed price
    #[error("Prediction failed: {0}")]
    PredictionFailure(#[from] PredictionError),

    /// Dataset loading errors
    #[error("Dataset error: {0}")]
    Io(#[from] IoError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Model artifact errors
    #[error("Model error: {0}")]
    Model(#[from] ModelError),
}

impl PricingError {
    /// Whether the request itself was invalid, as opposed to the data or model
    pub fn is_request_error(&self) -> bool {
        matches!(
            self,
            PricingError::UnknownCategory(_)
                | PricingError::UnknownProduct { .. }
                | PricingError::UnknownStatus(_)
                | PricingError::OutOfRangeOverride { .. }
                | PricingError::UnknownLabel { .. }
        )
    }
}
