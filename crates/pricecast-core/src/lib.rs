//! pricecast-core - Typical-value imputation and feature encoding
//!
//! Turns a partial price request into the complete feature record the price
//! model expects:
//!
//! 1. `catalog` validates the category, product and status against the data
//! 2. `typical` resolves representative values from the historical cohort
//! 3. `range` and `calendar` map between native units and the [0, 1] domain
//! 4. `feature` assembles the fixed 13-column record
//! 5. `predictor` hands the record to the model
//!
//! `pipeline::predict_price` runs the whole sequence against an initialized
//! `PricingContext`.

pub mod calendar;
pub mod catalog;
pub mod config;
pub mod context;
pub mod error;
pub mod feature;
pub mod model;
pub mod pipeline;
pub mod predictor;
pub mod range;
pub mod request;
pub mod typical;

pub use calendar::{Locale, Month, QuantizedCalendar, Weekday};
pub use catalog::Catalog;
pub use config::{ConfigError, DatasetConfig, DisplayConfig, ModelConfig, PricecastConfig};
pub use context::PricingContext;
pub use error::{PricingError, Result};
pub use feature::{build_feature_record, FeatureRecord, FeatureValue, CATEGORICAL_FEATURES, FEATURE_COLUMNS};
pub use model::{LinearModel, ModelError};
pub use pipeline::{predict_price, typical_selection, ParameterEcho, PriceReport, TypicalSelection};
pub use predictor::{PredictionError, PricePredictor};
pub use range::{denormalize, normalize, NormalizationRange, SALES_VOLUME_RANGE, STOCK_QUANTITY_RANGE};
pub use request::PriceRequest;
pub use typical::{resolve, resolve_cohort, CohortScope, Resolution, TypicalValues};

pub use pricecast_io::{HistoricalDataset, HistoricalRecord};
