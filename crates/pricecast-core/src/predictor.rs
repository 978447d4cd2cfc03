//! Boundary to the price model
//!
//! The core only guarantees a complete `FeatureRecord` whose categorical
//! columns are exactly `CATEGORICAL_FEATURES`. What the model does with it is
//! opaque. A failed or non-finite prediction ends the request; nothing is
//! retried.

use thiserror::Error;

use crate::feature::FeatureRecord;

/// Errors raised by a predictor backend
#[derive(Debug, Error)]
pub enum PredictionError {
    /// The backend could not produce a value
    #[error("{model}: {message}")]
    Backend { model: String, message: String },

    /// The backend produced something that is not a price
    #[error("{model} returned a non-finite price: {value}")]
    Malformed { model: String, value: f64 },
}

/// Interface for price models
pub trait PricePredictor: Send + Sync {
    /// Predict a price for one complete record
    fn predict(&self, record: &FeatureRecord) -> Result<f64, PredictionError>;

    /// Get model name/type
    fn name(&self) -> &str;
}

/// Call the predictor and reject malformed results
pub fn predict_checked(
    predictor: &dyn PricePredictor,
    record: &FeatureRecord,
) -> Result<f64, PredictionError> {
    let value = predictor.predict(record)?;
    if !value.is_finite() {
        return Err(PredictionError::Malformed {
            model: predictor.name().to_string(),
            value,
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feature::build_feature_record;
    use crate::typical::TypicalValues;

    struct Fixed(f64);

    impl PricePredictor for Fixed {
        fn predict(&self, _record: &FeatureRecord) -> Result<f64, PredictionError> {
            Ok(self.0)
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    fn record() -> FeatureRecord {
        let typical = TypicalValues {
            stock_quantity: 73,
            sales_volume: 74,
            reorder_level: 1.0,
            reorder_quantity: 1.0,
            inventory_turnover_rate: 1.0,
            average_price_per_category: 1.0,
            average_price_per_product_name: 1.0,
            price_to_sales_ratio: 1.0,
            day_of_week: 0.0,
            month: 0.0,
        };
        build_feature_record("Cola", "Beverages", "Active", 73, 74, 0.0, 0.0, &typical).unwrap()
    }

    #[test]
    fn test_finite_prediction_passes() {
        assert_eq!(predict_checked(&Fixed(9.5), &record()).unwrap(), 9.5);
    }

    #[test]
    fn test_nan_prediction_is_malformed() {
        let err = predict_checked(&Fixed(f64::NAN), &record()).unwrap_err();
        assert!(matches!(err, PredictionError::Malformed { .. }));
    }
}
