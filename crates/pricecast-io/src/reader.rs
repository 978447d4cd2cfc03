//! Dataset reader trait and common types
//!
//! The `DatasetReader` trait provides a uniform interface for reading the
//! historical product table from a delimited file.

use crate::record::HistoricalRecord;
use crate::schema::DatasetSchema;
use thiserror::Error;

/// Errors that can occur while loading the historical dataset
#[derive(Debug, Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Failed to open file: {0}")]
    OpenFailed(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("Invalid record on line {line}: {message}")]
    InvalidRecord { line: u64, message: String },
}

/// Result type for I/O operations
pub type IoResult<T> = Result<T, IoError>;

/// Trait for reading historical records
pub trait DatasetReader {
    /// Read the header schema
    fn read_schema(&self) -> IoResult<DatasetSchema>;

    /// Read every record, in file order
    fn read_records(&self) -> IoResult<Vec<HistoricalRecord>>;

    /// Get the file path (if applicable)
    fn path(&self) -> Option<&str> {
        None
    }

    /// Get the format name
    fn format_name(&self) -> &'static str;
}

/// A boxed reader for dynamic dispatch
pub type BoxedReader = Box<dyn DatasetReader>;

/// Open a dataset file and return an appropriate reader
///
/// `.tsv` files are always tab-separated; `.csv` and `.txt` use `delimiter`.
pub fn open_file(path: &str, delimiter: u8) -> IoResult<BoxedReader> {
    use crate::csv_reader::CsvReader;

    let extension = path
        .rsplit('.')
        .next()
        .map(|s| s.to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "csv" | "txt" => Ok(Box::new(CsvReader::open_with_delimiter(path, delimiter)?)),
        "tsv" => Ok(Box::new(CsvReader::open_with_delimiter(path, b'\t')?)),
        _ => Err(IoError::InvalidFormat(format!(
            "Unknown file extension: {}",
            extension
        ))),
    }
}

/// List supported file extensions
pub fn supported_extensions() -> Vec<&'static str> {
    vec!["csv", "tsv", "txt"]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_extensions() {
        assert!(supported_extensions().contains(&"csv"));
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let err = open_file("history.parquet", b';').err().unwrap();
        assert!(matches!(err, IoError::InvalidFormat(_)));
    }

    #[test]
    fn test_missing_columns_message_lists_all() {
        let err = IoError::MissingColumns(vec!["Month".into(), "Status".into()]);
        assert_eq!(err.to_string(), "Missing required columns: Month, Status");
    }
}
