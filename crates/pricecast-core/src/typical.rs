//! Typical-value resolution from historical cohorts
//!
//! For a (product, category) pair the resolver picks a cohort of historical
//! rows and reduces each feature column to one representative value:
//!
//! | Column | Reducer | Unit |
//! |---|---|---|
//! | Stock_Quantity, Sales_Volume | median | denormalized, truncated to integer |
//! | Reorder_Level, Reorder_Quantity | median | native |
//! | Inventory_Turnover_Rate, Average_Price_*, Price_to_Sales_Ratio | mean | native |
//! | Day_of_Week, Month | mode (first seen wins ties) | quantized |
//!
//! The cohort is the exact product within the category, falling back to the
//! whole category when the product has no rows. An empty category is an
//! error; the resolver never widens to the whole dataset.

use pricecast_io::schema as columns;
use pricecast_io::{HistoricalDataset, HistoricalRecord};
use serde::{Deserialize, Serialize};

use crate::error::{PricingError, Result};
use crate::range::{SALES_VOLUME_RANGE, STOCK_QUANTITY_RANGE};

/// Representative value for every feature the caller may leave unset
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TypicalValues {
    /// Native units
    pub stock_quantity: i64,
    /// Native units
    pub sales_volume: i64,
    pub reorder_level: f64,
    pub reorder_quantity: f64,
    pub inventory_turnover_rate: f64,
    pub average_price_per_category: f64,
    pub average_price_per_product_name: f64,
    pub price_to_sales_ratio: f64,
    /// Quantized, as stored in the dataset
    pub day_of_week: f64,
    /// Quantized, as stored in the dataset
    pub month: f64,
}

impl TypicalValues {
    /// Number of resolved features
    pub const FIELD_COUNT: usize = 10;

    /// Feature name and value pairs, in dataset column order
    pub fn entries(&self) -> [(&'static str, f64); Self::FIELD_COUNT] {
        [
            (columns::STOCK_QUANTITY, self.stock_quantity as f64),
            (columns::REORDER_LEVEL, self.reorder_level),
            (columns::REORDER_QUANTITY, self.reorder_quantity),
            (columns::SALES_VOLUME, self.sales_volume as f64),
            (columns::INVENTORY_TURNOVER_RATE, self.inventory_turnover_rate),
            (columns::AVERAGE_PRICE_PER_CATEGORY, self.average_price_per_category),
            (
                columns::AVERAGE_PRICE_PER_PRODUCT_NAME,
                self.average_price_per_product_name,
            ),
            (columns::PRICE_TO_SALES_RATIO, self.price_to_sales_ratio),
            (columns::DAY_OF_WEEK, self.day_of_week),
            (columns::MONTH, self.month),
        ]
    }
}

/// Which rows the typical values were drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CohortScope {
    /// Rows of the requested product within the category
    Product,
    /// All rows of the category; the product had none
    Category,
}

/// Typical values together with the cohort they came from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    pub values: TypicalValues,
    pub scope: CohortScope,
    /// Rows in the cohort
    pub rows: usize,
}

/// Resolve typical values for a product within a category
pub fn resolve(
    dataset: &HistoricalDataset,
    product_name: &str,
    category: &str,
) -> Result<TypicalValues> {
    resolve_cohort(dataset, product_name, category).map(|r| r.values)
}

/// Resolve typical values and report the cohort used
pub fn resolve_cohort(
    dataset: &HistoricalDataset,
    product_name: &str,
    category: &str,
) -> Result<Resolution> {
    let mut scope = CohortScope::Product;
    let mut cohort = dataset.product_cohort(product_name, category);

    if cohort.is_empty() {
        tracing::warn!(
            product = product_name,
            category,
            "no rows for product, using category statistics"
        );
        scope = CohortScope::Category;
        cohort = dataset.category_cohort(category);
    }

    if cohort.is_empty() {
        return Err(PricingError::EmptyCohort {
            category: category.to_string(),
        });
    }

    let reducer = CohortReducer {
        rows: &cohort,
        category,
    };

    let values = TypicalValues {
        stock_quantity: STOCK_QUANTITY_RANGE
            .denormalize_truncated(reducer.median(columns::STOCK_QUANTITY, |r| r.stock_quantity)?),
        sales_volume: SALES_VOLUME_RANGE
            .denormalize_truncated(reducer.median(columns::SALES_VOLUME, |r| r.sales_volume)?),
        reorder_level: reducer.median(columns::REORDER_LEVEL, |r| r.reorder_level)?,
        reorder_quantity: reducer.median(columns::REORDER_QUANTITY, |r| r.reorder_quantity)?,
        inventory_turnover_rate: reducer
            .mean(columns::INVENTORY_TURNOVER_RATE, |r| r.inventory_turnover_rate)?,
        average_price_per_category: reducer
            .mean(columns::AVERAGE_PRICE_PER_CATEGORY, |r| r.average_price_per_category)?,
        average_price_per_product_name: reducer.mean(
            columns::AVERAGE_PRICE_PER_PRODUCT_NAME,
            |r| r.average_price_per_product_name,
        )?,
        price_to_sales_ratio: reducer
            .mean(columns::PRICE_TO_SALES_RATIO, |r| r.price_to_sales_ratio)?,
        day_of_week: reducer.mode(columns::DAY_OF_WEEK, |r| r.day_of_week)?,
        month: reducer.mode(columns::MONTH, |r| r.month)?,
    };

    tracing::debug!(
        product = product_name,
        category,
        ?scope,
        rows = cohort.len(),
        "resolved typical values"
    );

    Ok(Resolution {
        values,
        scope,
        rows: cohort.len(),
    })
}

/// Column reductions over one cohort
struct CohortReducer<'a> {
    rows: &'a [&'a HistoricalRecord],
    category: &'a str,
}

impl CohortReducer<'_> {
    fn column(&self, field: impl Fn(&HistoricalRecord) -> f64) -> Vec<f64> {
        self.rows.iter().map(|r| field(*r)).collect()
    }

    fn require(&self, column: &'static str, value: Option<f64>) -> Result<f64> {
        value.ok_or_else(|| PricingError::MissingStatistic {
            column,
            category: self.category.to_string(),
        })
    }

    fn median(&self, column: &'static str, field: impl Fn(&HistoricalRecord) -> f64) -> Result<f64> {
        self.require(column, pricecast_stats::median(&self.column(field)))
    }

    fn mean(&self, column: &'static str, field: impl Fn(&HistoricalRecord) -> f64) -> Result<f64> {
        self.require(column, pricecast_stats::mean(&self.column(field)))
    }

    fn mode(&self, column: &'static str, field: impl Fn(&HistoricalRecord) -> f64) -> Result<f64> {
        self.require(column, pricecast_stats::mode(&self.column(field)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(product: &str, category: &str, stock: f64, day: f64) -> HistoricalRecord {
        HistoricalRecord {
            product_name: product.to_string(),
            category: category.to_string(),
            status: "Active".to_string(),
            stock_quantity: stock,
            reorder_level: 10.0,
            reorder_quantity: 30.0,
            sales_volume: 0.5,
            inventory_turnover_rate: 2.0,
            average_price_per_category: 4.0,
            average_price_per_product_name: 5.0,
            price_to_sales_ratio: 0.2,
            day_of_week: day,
            month: 0.0,
        }
    }

    #[test]
    fn test_product_cohort_median_stock() {
        let dataset = HistoricalDataset::from_records(vec![
            row("Cola", "Beverages", 0.4, 0.0),
            row("Cola", "Beverages", 0.6, 0.0),
            row("Tea", "Beverages", 1.0, 0.0),
        ]);

        let resolution = resolve_cohort(&dataset, "Cola", "Beverages").unwrap();
        assert_eq!(resolution.scope, CohortScope::Product);
        assert_eq!(resolution.rows, 2);
        assert_eq!(resolution.values.stock_quantity, 73);
        assert_eq!(resolution.values.sales_volume, 74);
    }

    #[test]
    fn test_category_fallback() {
        let dataset = HistoricalDataset::from_records(vec![
            row("Cola", "Beverages", 0.0, 0.0),
            row("Tea", "Beverages", 1.0, 0.0),
            row("Chips", "Snacks", 0.5, 0.0),
        ]);

        let resolution = resolve_cohort(&dataset, "Juice", "Beverages").unwrap();
        assert_eq!(resolution.scope, CohortScope::Category);
        assert_eq!(resolution.rows, 2);
        assert_eq!(resolution.values.stock_quantity, 73);
    }

    #[test]
    fn test_empty_category_is_an_error() {
        let dataset = HistoricalDataset::from_records(vec![row("Cola", "Beverages", 0.5, 0.0)]);
        let err = resolve(&dataset, "Milk", "Dairy").unwrap_err();
        assert!(matches!(err, PricingError::EmptyCohort { ref category } if category == "Dairy"));
    }

    #[test]
    fn test_mode_tie_uses_first_row() {
        let dataset = HistoricalDataset::from_records(vec![
            row("Cola", "Beverages", 0.5, 0.5),
            row("Cola", "Beverages", 0.5, 0.166667),
            row("Cola", "Beverages", 0.5, 0.166667),
            row("Cola", "Beverages", 0.5, 0.5),
        ]);
        assert_eq!(resolve(&dataset, "Cola", "Beverages").unwrap().day_of_week, 0.5);
    }

    #[test]
    fn test_all_missing_column_is_an_error() {
        let mut record = row("Cola", "Beverages", 0.5, 0.0);
        record.price_to_sales_ratio = f64::NAN;
        let dataset = HistoricalDataset::from_records(vec![record]);

        match resolve(&dataset, "Cola", "Beverages").unwrap_err() {
            PricingError::MissingStatistic { column, .. } => {
                assert_eq!(column, columns::PRICE_TO_SALES_RATIO)
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_entries_cover_every_field() {
        let dataset = HistoricalDataset::from_records(vec![row("Cola", "Beverages", 0.5, 0.0)]);
        let values = resolve(&dataset, "Cola", "Beverages").unwrap();
        let entries = values.entries();

        assert_eq!(entries.len(), TypicalValues::FIELD_COUNT);
        assert!(entries.iter().all(|(_, v)| v.is_finite()));
    }
}
