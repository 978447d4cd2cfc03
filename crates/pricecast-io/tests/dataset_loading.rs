//! Dataset loading integration tests

use pricecast_io::{open_file, HistoricalDataset, IoError, DEFAULT_DELIMITER};
use std::path::PathBuf;

fn fixture_path(name: &str) -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
        .to_string_lossy()
        .to_string()
}

#[test]
fn test_load_fixture_dataset() {
    let dataset = HistoricalDataset::load(&fixture_path("history.csv"), DEFAULT_DELIMITER).unwrap();

    assert_eq!(dataset.len(), 4);
    assert!(dataset.source().unwrap().ends_with("history.csv"));

    let tea = &dataset.records()[2];
    assert_eq!(tea.product_name, "Tea");
    assert_eq!(tea.stock_quantity, 0.3);
    assert!(tea.sales_volume.is_nan());
}

#[test]
fn test_fixture_schema_keeps_extra_columns() {
    let reader = open_file(&fixture_path("history.csv"), DEFAULT_DELIMITER).unwrap();
    let schema = reader.read_schema().unwrap();

    assert_eq!(schema.num_columns(), 14);
    assert_eq!(schema.extra_columns(), vec!["Warehouse"]);
    assert_eq!(reader.format_name(), "CSV");
}

#[test]
fn test_wrong_delimiter_reports_missing_columns() {
    let err = HistoricalDataset::load(&fixture_path("history.csv"), b',').unwrap_err();
    assert!(matches!(err, IoError::MissingColumns(_)));
}

#[test]
fn test_cohorts_on_fixture() {
    let dataset = HistoricalDataset::load(&fixture_path("history.csv"), DEFAULT_DELIMITER).unwrap();

    let cola = dataset.product_cohort("Cola", "Beverages");
    assert_eq!(cola.len(), 2);
    assert!(cola.iter().all(|r| r.product_name == "Cola"));
    assert_eq!(dataset.category_cohort("Beverages").len(), 3);
}
