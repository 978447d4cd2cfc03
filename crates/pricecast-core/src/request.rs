//! Caller input for one price prediction

use serde::{Deserialize, Serialize};

use crate::calendar::{Month, Weekday};
use crate::error::{PricingError, Result};
use crate::range::{NormalizationRange, SALES_VOLUME_RANGE, STOCK_QUANTITY_RANGE};

/// A price request: the categorical selection plus optional overrides
///
/// Unset overrides are filled from the typical values of the cohort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRequest {
    pub category: String,
    pub product_name: String,
    pub status: String,
    /// Native units, within [14, 133]
    #[serde(default)]
    pub stock_quantity: Option<i64>,
    /// Native units, within [7, 141]
    #[serde(default)]
    pub sales_volume: Option<i64>,
    #[serde(default)]
    pub day_of_week: Option<Weekday>,
    #[serde(default)]
    pub month: Option<Month>,
}

impl PriceRequest {
    pub fn new(
        category: impl Into<String>,
        product_name: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            product_name: product_name.into(),
            status: status.into(),
            stock_quantity: None,
            sales_volume: None,
            day_of_week: None,
            month: None,
        }
    }

    pub fn with_stock_quantity(mut self, value: i64) -> Self {
        self.stock_quantity = Some(value);
        self
    }

    pub fn with_sales_volume(mut self, value: i64) -> Self {
        self.sales_volume = Some(value);
        self
    }

    pub fn with_day_of_week(mut self, day: Weekday) -> Self {
        self.day_of_week = Some(day);
        self
    }

    pub fn with_month(mut self, month: Month) -> Self {
        self.month = Some(month);
        self
    }

    /// Reject quantity overrides outside their bounds
    pub fn check_overrides(&self) -> Result<()> {
        check_bound("stock quantity", self.stock_quantity, &STOCK_QUANTITY_RANGE)?;
        check_bound("sales volume", self.sales_volume, &SALES_VOLUME_RANGE)
    }
}

fn check_bound(field: &'static str, value: Option<i64>, range: &NormalizationRange) -> Result<()> {
    match value {
        Some(value) if !range.contains_native(value) => {
            let (min, max) = range.native_bounds();
            Err(PricingError::OutOfRangeOverride {
                field,
                value,
                min,
                max,
            })
        }
        _ => Ok(()),
    }
}
