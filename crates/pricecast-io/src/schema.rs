//! Header schema for the historical product table

use serde::{Deserialize, Serialize};

/// Product name column
pub const PRODUCT_NAME: &str = "Product_Name";
/// Category column
pub const CATEGORY: &str = "Category";
/// Status column
pub const STATUS: &str = "Status";
/// Normalized stock quantity column
pub const STOCK_QUANTITY: &str = "Stock_Quantity";
/// Reorder level column
pub const REORDER_LEVEL: &str = "Reorder_Level";
/// Reorder quantity column
pub const REORDER_QUANTITY: &str = "Reorder_Quantity";
/// Normalized sales volume column
pub const SALES_VOLUME: &str = "Sales_Volume";
/// Inventory turnover rate column
pub const INVENTORY_TURNOVER_RATE: &str = "Inventory_Turnover_Rate";
/// Average price per category column
pub const AVERAGE_PRICE_PER_CATEGORY: &str = "Average_Price_Per_Category";
/// Average price per product name column
pub const AVERAGE_PRICE_PER_PRODUCT_NAME: &str = "Average_Price_Per_Product_Name";
/// Price to sales ratio column
pub const PRICE_TO_SALES_RATIO: &str = "Price_to_Sales_Ratio";
/// Quantized weekday column
pub const DAY_OF_WEEK: &str = "Day_of_Week";
/// Quantized month column
pub const MONTH: &str = "Month";

/// Columns that must be present in the header, in canonical order
pub const REQUIRED_COLUMNS: [&str; 13] = [
    PRODUCT_NAME,
    CATEGORY,
    STATUS,
    STOCK_QUANTITY,
    REORDER_LEVEL,
    REORDER_QUANTITY,
    SALES_VOLUME,
    INVENTORY_TURNOVER_RATE,
    AVERAGE_PRICE_PER_CATEGORY,
    AVERAGE_PRICE_PER_PRODUCT_NAME,
    PRICE_TO_SALES_RATIO,
    DAY_OF_WEEK,
    MONTH,
];

/// Header layout of a dataset file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatasetSchema {
    /// Column names as they appear in the header
    pub columns: Vec<String>,
}

impl DatasetSchema {
    /// Create a schema from header names
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns }
    }

    /// Get column index by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Number of columns
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Required columns absent from this header, in canonical order
    pub fn missing_columns(&self) -> Vec<String> {
        REQUIRED_COLUMNS
            .iter()
            .filter(|name| self.column_index(name).is_none())
            .map(|name| name.to_string())
            .collect()
    }

    /// Header columns the loader does not use
    pub fn extra_columns(&self) -> Vec<&str> {
        self.columns
            .iter()
            .map(|c| c.as_str())
            .filter(|c| !REQUIRED_COLUMNS.contains(c))
            .collect()
    }
}
