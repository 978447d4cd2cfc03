//! JSON model artifact
//!
//! `LinearModel` is the on-disk predictor shipped with pricecast: an
//! intercept, one weight per numeric feature and one offset per categorical
//! level. Levels the artifact has never seen contribute nothing.
//!
//! ```json
//! {
//!   "intercept": 1.5,
//!   "weights": { "Stock_Quantity": -0.8, "Average_Price_Per_Product_Name": 0.9 },
//!   "categorical": { "Category": { "Beverages": 0.3 } }
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::feature::{FeatureRecord, FeatureValue, CATEGORICAL_FEATURES, FEATURE_COLUMNS};
use crate::predictor::{PredictionError, PricePredictor};

/// Errors loading a model artifact
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Failed to read model {path}: {message}")]
    Io { path: String, message: String },

    #[error("Failed to parse model: {0}")]
    Parse(String),

    #[error("Unknown feature in model: {0}")]
    UnknownFeature(String),

    #[error("Non-finite coefficient for {0}")]
    NonFinite(String),
}

/// Linear price model loaded from JSON
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    #[serde(default)]
    pub intercept: f64,

    /// Numeric column name to weight
    #[serde(default)]
    pub weights: BTreeMap<String, f64>,

    /// Categorical column name to level offsets
    #[serde(default)]
    pub categorical: BTreeMap<String, BTreeMap<String, f64>>,
}

impl LinearModel {
    /// Load and validate an artifact from disk
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let content = std::fs::read_to_string(path).map_err(|e| ModelError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let model = Self::from_json(&content)?;

        tracing::info!(
            path = %path.display(),
            weights = model.weights.len(),
            "loaded price model"
        );

        Ok(model)
    }

    /// Parse and validate an artifact
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        let model: Self = serde_json::from_str(json).map_err(|e| ModelError::Parse(e.to_string()))?;
        model.validate()?;
        Ok(model)
    }

    /// Check every coefficient names a known column of the right kind
    pub fn validate(&self) -> Result<(), ModelError> {
        if !self.intercept.is_finite() {
            return Err(ModelError::NonFinite("intercept".to_string()));
        }

        for (name, weight) in &self.weights {
            let numeric = FEATURE_COLUMNS.contains(&name.as_str())
                && !CATEGORICAL_FEATURES.contains(&name.as_str());
            if !numeric {
                return Err(ModelError::UnknownFeature(name.clone()));
            }
            if !weight.is_finite() {
                return Err(ModelError::NonFinite(name.clone()));
            }
        }

        for (name, levels) in &self.categorical {
            if !CATEGORICAL_FEATURES.contains(&name.as_str()) {
                return Err(ModelError::UnknownFeature(name.clone()));
            }
            if let Some((level, _)) = levels.iter().find(|(_, v)| !v.is_finite()) {
                return Err(ModelError::NonFinite(format!("{name}={level}")));
            }
        }

        Ok(())
    }
}

impl PricePredictor for LinearModel {
    fn predict(&self, record: &FeatureRecord) -> Result<f64, PredictionError> {
        let mut price = self.intercept;

        for (name, value) in record.values() {
            match value {
                FeatureValue::Numeric(x) => {
                    price += self.weights.get(name).copied().unwrap_or(0.0) * x;
                }
                FeatureValue::Categorical(level) => {
                    price += self
                        .categorical
                        .get(name)
                        .and_then(|levels| levels.get(&level))
                        .copied()
                        .unwrap_or(0.0);
                }
            }
        }

        Ok(price)
    }

    fn name(&self) -> &str {
        "linear"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feature::build_feature_record;
    use crate::typical::TypicalValues;

    const ARTIFACT: &str = r#"{
        "intercept": 1.0,
        "weights": { "Stock_Quantity": 2.0, "Average_Price_Per_Product_Name": 1.0 },
        "categorical": { "Category": { "Beverages": 0.5 }, "Status": { "Active": 0.25 } }
    }"#;

    fn record(category: &str) -> FeatureRecord {
        let typical = TypicalValues {
            stock_quantity: 73,
            sales_volume: 74,
            reorder_level: 10.0,
            reorder_quantity: 20.0,
            inventory_turnover_rate: 1.0,
            average_price_per_category: 3.0,
            average_price_per_product_name: 4.0,
            price_to_sales_ratio: 0.5,
            day_of_week: 0.0,
            month: 0.0,
        };
        build_feature_record("Cola", category, "Active", 133, 74, 0.0, 0.0, &typical).unwrap()
    }

    #[test]
    fn test_linear_prediction() {
        let model = LinearModel::from_json(ARTIFACT).unwrap();
        // 1 + 2 * 1.0 + 4.0 + 0.5 + 0.25
        assert!((model.predict(&record("Beverages")).unwrap() - 7.75).abs() < 1e-12);
    }

    #[test]
    fn test_unseen_level_contributes_nothing() {
        let model = LinearModel::from_json(ARTIFACT).unwrap();
        assert!((model.predict(&record("Snacks")).unwrap() - 7.25).abs() < 1e-12);
    }

    #[test]
    fn test_weight_on_categorical_column_rejected() {
        let err = LinearModel::from_json(r#"{"weights": {"Category": 1.0}}"#).unwrap_err();
        assert!(matches!(err, ModelError::UnknownFeature(ref name) if name == "Category"));
    }

    #[test]
    fn test_unknown_column_rejected() {
        let err = LinearModel::from_json(r#"{"categorical": {"Color": {"red": 1.0}}}"#).unwrap_err();
        assert!(matches!(err, ModelError::UnknownFeature(_)));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            LinearModel::from_json("{ not json").unwrap_err(),
            ModelError::Parse(_)
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = LinearModel::load(Path::new("/nonexistent/model.json")).unwrap_err();
        assert!(matches!(err, ModelError::Io { .. }));
    }
}
