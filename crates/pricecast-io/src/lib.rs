//! pricecast-io - Historical dataset I/O
//!
//! This crate loads the historical product table that typical values are
//! derived from:
//!
//! - **Schema**: the required column set and header validation
//! - **Records**: one typed `HistoricalRecord` per row
//! - **CSV**: delimited reader (semicolon by default) with per-line errors
//! - **Dataset**: the loaded, read-only table with cohort filters
//!
//! # Design
//!
//! The file is read eagerly once and never written back. Cohort filters
//! borrow from the loaded rows instead of copying them.

pub mod csv_reader;
pub mod dataset;
pub mod reader;
pub mod record;
pub mod schema;

pub use csv_reader::*;
pub use dataset::*;
pub use reader::*;
pub use record::*;
pub use schema::*;
