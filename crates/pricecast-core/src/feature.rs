//! Fixed-schema feature record submitted to the price model
//!
//! The model consumes 13 columns in a fixed order: three categorical strings
//! and ten numerics. Stock quantity and sales volume arrive in native units
//! and are normalized here; calendar values arrive already quantized.

use pricecast_io::schema as columns;
use serde::Serialize;

use crate::error::{PricingError, Result};
use crate::range::{SALES_VOLUME_RANGE, STOCK_QUANTITY_RANGE};
use crate::typical::TypicalValues;

/// Column order expected by the model
pub const FEATURE_COLUMNS: [&str; 13] = [
    columns::PRODUCT_NAME,
    columns::STOCK_QUANTITY,
    columns::REORDER_LEVEL,
    columns::REORDER_QUANTITY,
    columns::SALES_VOLUME,
    columns::INVENTORY_TURNOVER_RATE,
    columns::STATUS,
    columns::CATEGORY,
    columns::AVERAGE_PRICE_PER_CATEGORY,
    columns::AVERAGE_PRICE_PER_PRODUCT_NAME,
    columns::PRICE_TO_SALES_RATIO,
    columns::DAY_OF_WEEK,
    columns::MONTH,
];

/// Columns the model treats as categorical
pub const CATEGORICAL_FEATURES: [&str; 3] =
    [columns::PRODUCT_NAME, columns::STATUS, columns::CATEGORY];

/// One cell of a feature record
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Categorical(String),
    Numeric(f64),
}

impl FeatureValue {
    pub fn as_numeric(&self) -> Option<f64> {
        match self {
            FeatureValue::Numeric(v) => Some(*v),
            FeatureValue::Categorical(_) => None,
        }
    }

    pub fn as_categorical(&self) -> Option<&str> {
        match self {
            FeatureValue::Categorical(s) => Some(s),
            FeatureValue::Numeric(_) => None,
        }
    }

    pub fn is_categorical(&self) -> bool {
        matches!(self, FeatureValue::Categorical(_))
    }
}

/// Complete model input; only `build_feature_record` constructs one
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureRecord {
    product_name: String,
    stock_quantity: f64,
    reorder_level: f64,
    reorder_quantity: f64,
    sales_volume: f64,
    inventory_turnover_rate: f64,
    status: String,
    category: String,
    average_price_per_category: f64,
    average_price_per_product_name: f64,
    price_to_sales_ratio: f64,
    day_of_week: f64,
    month: f64,
}

impl FeatureRecord {
    /// Cells in `FEATURE_COLUMNS` order
    pub fn values(&self) -> [(&'static str, FeatureValue); 13] {
        use FeatureValue::{Categorical, Numeric};

        [
            (FEATURE_COLUMNS[0], Categorical(self.product_name.clone())),
            (FEATURE_COLUMNS[1], Numeric(self.stock_quantity)),
            (FEATURE_COLUMNS[2], Numeric(self.reorder_level)),
            (FEATURE_COLUMNS[3], Numeric(self.reorder_quantity)),
            (FEATURE_COLUMNS[4], Numeric(self.sales_volume)),
            (FEATURE_COLUMNS[5], Numeric(self.inventory_turnover_rate)),
            (FEATURE_COLUMNS[6], Categorical(self.status.clone())),
            (FEATURE_COLUMNS[7], Categorical(self.category.clone())),
            (FEATURE_COLUMNS[8], Numeric(self.average_price_per_category)),
            (FEATURE_COLUMNS[9], Numeric(self.average_price_per_product_name)),
            (FEATURE_COLUMNS[10], Numeric(self.price_to_sales_ratio)),
            (FEATURE_COLUMNS[11], Numeric(self.day_of_week)),
            (FEATURE_COLUMNS[12], Numeric(self.month)),
        ]
    }

    /// Look up a cell by column name
    pub fn get(&self, name: &str) -> Option<FeatureValue> {
        self.values()
            .into_iter()
            .find(|(column, _)| *column == name)
            .map(|(_, value)| value)
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Normalized stock quantity
    pub fn stock_quantity(&self) -> f64 {
        self.stock_quantity
    }

    /// Normalized sales volume
    pub fn sales_volume(&self) -> f64 {
        self.sales_volume
    }
}

/// Assemble the model input from the chosen and typical values
///
/// `stock_quantity` and `sales_volume` are native units and get normalized;
/// `day_of_week` and `month` are quantized floats and pass through. Every
/// other numeric comes from `typical`.
#[allow(clippy::too_many_arguments)]
pub fn build_feature_record(
    product_name: &str,
    category: &str,
    status: &str,
    stock_quantity: i64,
    sales_volume: i64,
    day_of_week: f64,
    month: f64,
    typical: &TypicalValues,
) -> Result<FeatureRecord> {
    let record = FeatureRecord {
        product_name: product_name.to_string(),
        stock_quantity: STOCK_QUANTITY_RANGE.normalize(stock_quantity as f64),
        reorder_level: typical.reorder_level,
        reorder_quantity: typical.reorder_quantity,
        sales_volume: SALES_VOLUME_RANGE.normalize(sales_volume as f64),
        inventory_turnover_rate: typical.inventory_turnover_rate,
        status: status.to_string(),
        category: category.to_string(),
        average_price_per_category: typical.average_price_per_category,
        average_price_per_product_name: typical.average_price_per_product_name,
        price_to_sales_ratio: typical.price_to_sales_ratio,
        day_of_week,
        month,
    };

    for (name, value) in record.values() {
        if let FeatureValue::Numeric(v) = value {
            if !v.is_finite() {
                return Err(PricingError::InvalidFeature { name, value: v });
            }
        }
    }

    for (name, value) in [(columns::DAY_OF_WEEK, day_of_week), (columns::MONTH, month)] {
        if !(0.0..=1.0).contains(&value) {
            return Err(PricingError::InvalidFeature { name, value });
        }
    }

    tracing::debug!(
        product = product_name,
        stock = record.stock_quantity,
        sales = record.sales_volume,
        "assembled feature record"
    );

    Ok(record)
}
