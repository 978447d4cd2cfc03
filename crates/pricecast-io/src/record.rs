//! Typed row of the historical product table

use serde::{Deserialize, Deserializer, Serialize};

/// One historical product observation
///
/// `stock_quantity` and `sales_volume` are stored normalized to [0, 1];
/// `day_of_week` and `month` hold quantized calendar values. Every other
/// numeric column is in its native unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalRecord {
    #[serde(rename = "Product_Name")]
    pub product_name: String,

    #[serde(rename = "Category")]
    pub category: String,

    #[serde(rename = "Status")]
    pub status: String,

    #[serde(rename = "Stock_Quantity", deserialize_with = "numeric_cell")]
    pub stock_quantity: f64,

    #[serde(rename = "Reorder_Level", deserialize_with = "numeric_cell")]
    pub reorder_level: f64,

    #[serde(rename = "Reorder_Quantity", deserialize_with = "numeric_cell")]
    pub reorder_quantity: f64,

    #[serde(rename = "Sales_Volume", deserialize_with = "numeric_cell")]
    pub sales_volume: f64,

    #[serde(rename = "Inventory_Turnover_Rate", deserialize_with = "numeric_cell")]
    pub inventory_turnover_rate: f64,

    #[serde(rename = "Average_Price_Per_Category", deserialize_with = "numeric_cell")]
    pub average_price_per_category: f64,

    #[serde(
        rename = "Average_Price_Per_Product_Name",
        deserialize_with = "numeric_cell"
    )]
    pub average_price_per_product_name: f64,

    #[serde(rename = "Price_to_Sales_Ratio", deserialize_with = "numeric_cell")]
    pub price_to_sales_ratio: f64,

    #[serde(rename = "Day_of_Week", deserialize_with = "numeric_cell")]
    pub day_of_week: f64,

    #[serde(rename = "Month", deserialize_with = "numeric_cell")]
    pub month: f64,
}

impl HistoricalRecord {
    /// Whether this row belongs to the given category
    pub fn in_category(&self, category: &str) -> bool {
        self.category == category
    }

    /// Whether this row is the given product within the given category
    pub fn is_product(&self, product_name: &str, category: &str) -> bool {
        self.product_name == product_name && self.category == category
    }
}

/// Parse a numeric cell
///
/// Blank cells become NaN (missing). A decimal comma is accepted when the
/// cell has no decimal point.
fn numeric_cell<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_numeric(&raw).map_err(serde::de::Error::custom)
}

pub(crate) fn parse_numeric(raw: &str) -> Result<f64, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(f64::NAN);
    }

    let parsed = if trimmed.contains(',') && !trimmed.contains('.') {
        trimmed.replace(',', ".").parse::<f64>()
    } else {
        trimmed.parse::<f64>()
    };

    parsed.map_err(|_| format!("not a number: {:?}", trimmed))
}
