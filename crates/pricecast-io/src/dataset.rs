//! The loaded historical table and its cohort filters

use crate::reader::{open_file, IoResult};
use crate::record::HistoricalRecord;

/// Read-only historical product table
#[derive(Debug, Clone, Default)]
pub struct HistoricalDataset {
    records: Vec<HistoricalRecord>,
    source: Option<String>,
}

impl HistoricalDataset {
    /// Build a dataset from in-memory records
    pub fn from_records(records: Vec<HistoricalRecord>) -> Self {
        Self {
            records,
            source: None,
        }
    }

    /// Load a dataset file, choosing the reader from its extension
    pub fn load(path: &str, delimiter: u8) -> IoResult<Self> {
        let reader = open_file(path, delimiter)?;
        let records = reader.read_records()?;

        tracing::info!(
            path,
            format = reader.format_name(),
            rows = records.len(),
            "loaded historical dataset"
        );

        Ok(Self {
            records,
            source: Some(path.to_string()),
        })
    }

    /// All rows in file order
    pub fn records(&self) -> &[HistoricalRecord] {
        &self.records
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the dataset has no rows
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Path the dataset was loaded from, if any
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Rows for one product within one category, in file order
    pub fn product_cohort(&self, product_name: &str, category: &str) -> Vec<&HistoricalRecord> {
        self.records
            .iter()
            .filter(|r| r.is_product(product_name, category))
            .collect()
    }

    /// Rows for one category, in file order
    pub fn category_cohort(&self, category: &str) -> Vec<&HistoricalRecord> {
        self.records
            .iter()
            .filter(|r| r.in_category(category))
            .collect()
    }
}
