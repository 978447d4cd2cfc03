//! Delimited dataset reader

use crate::reader::{DatasetReader, IoError, IoResult};
use crate::record::HistoricalRecord;
use crate::schema::DatasetSchema;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Delimiter used by the historical export
pub const DEFAULT_DELIMITER: u8 = b';';

/// CSV file reader
pub struct CsvReader {
    path: String,
    schema: DatasetSchema,
    delimiter: u8,
}

impl CsvReader {
    /// Open a semicolon-separated file
    pub fn open(path: &str) -> IoResult<Self> {
        Self::open_with_delimiter(path, DEFAULT_DELIMITER)
    }

    /// Open a delimited file and validate its header
    pub fn open_with_delimiter(path: &str, delimiter: u8) -> IoResult<Self> {
        if !Path::new(path).exists() {
            return Err(IoError::FileNotFound(path.to_string()));
        }

        let mut reader = Self::csv_reader(path, delimiter)?;
        let headers = reader
            .headers()
            .map_err(|e| IoError::InvalidFormat(e.to_string()))?
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>();

        let schema = DatasetSchema::new(headers);
        let missing = schema.missing_columns();
        if !missing.is_empty() {
            return Err(IoError::MissingColumns(missing));
        }

        let extra = schema.extra_columns();
        if !extra.is_empty() {
            tracing::debug!(path, ?extra, "ignoring unused dataset columns");
        }

        Ok(Self {
            path: path.to_string(),
            schema,
            delimiter,
        })
    }

    fn csv_reader(path: &str, delimiter: u8) -> IoResult<csv::Reader<BufReader<File>>> {
        let file = File::open(path).map_err(|e| IoError::OpenFailed(e.to_string()))?;
        Ok(csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(BufReader::new(file)))
    }
}

impl DatasetReader for CsvReader {
    fn read_schema(&self) -> IoResult<DatasetSchema> {
        Ok(self.schema.clone())
    }

    fn read_records(&self) -> IoResult<Vec<HistoricalRecord>> {
        let mut reader = Self::csv_reader(&self.path, self.delimiter)?;
        let headers = reader
            .headers()
            .map_err(|e| IoError::InvalidFormat(e.to_string()))?
            .clone();

        let mut records = Vec::new();
        for result in reader.records() {
            let row = result.map_err(|e| IoError::InvalidRecord {
                line: e.position().map(|p| p.line()).unwrap_or(0),
                message: e.to_string(),
            })?;
            let line = row.position().map(|p| p.line()).unwrap_or(0);

            let record: HistoricalRecord =
                row.deserialize(Some(&headers))
                    .map_err(|e| IoError::InvalidRecord {
                        line,
                        message: e.to_string(),
                    })?;
            records.push(record);
        }

        Ok(records)
    }

    fn path(&self) -> Option<&str> {
        Some(&self.path)
    }

    fn format_name(&self) -> &'static str {
        "CSV"
    }
}
