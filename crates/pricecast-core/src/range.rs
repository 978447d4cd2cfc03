//! Normalization ranges for quantities stored in [0, 1]
//!
//! The historical table stores stock quantity and sales volume min-max
//! scaled. These ranges are the fixed bounds of that scaling and also the
//! bounds callers may override within.

use serde::Serialize;

use crate::error::{PricingError, Result};

/// Native bounds of stock quantity
pub const STOCK_QUANTITY_RANGE: NormalizationRange = NormalizationRange::fixed(14.0, 133.0);

/// Native bounds of sales volume
pub const SALES_VOLUME_RANGE: NormalizationRange = NormalizationRange::fixed(7.0, 141.0);

/// Min-max scaling bounds; `max > min` always holds
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NormalizationRange {
    min: f64,
    max: f64,
}

impl NormalizationRange {
    /// Create a range, rejecting empty or inverted bounds
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !(min.is_finite() && max.is_finite() && max > min) {
            return Err(PricingError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    const fn fixed(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Integer bounds for native-unit input
    pub fn native_bounds(&self) -> (i64, i64) {
        (self.min as i64, self.max as i64)
    }

    /// Whether an integer quantity lies within the bounds (inclusive)
    pub fn contains_native(&self, value: i64) -> bool {
        let (min, max) = self.native_bounds();
        (min..=max).contains(&value)
    }

    /// Native value to [0, 1]
    pub fn normalize(&self, value: f64) -> f64 {
        normalize(value, self.min, self.max)
    }

    /// [0, 1] value to native units
    pub fn denormalize(&self, value: f64) -> f64 {
        denormalize(value, self.min, self.max)
    }

    /// [0, 1] value to whole native units, truncating toward zero
    pub fn denormalize_truncated(&self, value: f64) -> i64 {
        self.denormalize(value) as i64
    }
}

/// `(value - min) / (max - min)`
pub fn normalize(value: f64, min: f64, max: f64) -> f64 {
    (value - min) / (max - min)
}

/// `value * (max - min) + min`
pub fn denormalize(value: f64, min: f64, max: f64) -> f64 {
    value * (max - min) + min
}
