//! pricecast-stats - Aggregate statistics over historical cohorts
//!
//! This crate provides the reducers used to derive typical values:
//!
//! - **Median**: middle value, averaging the two middle values for even samples
//! - **Mean**: arithmetic mean
//! - **Mode**: most frequent value, ties broken by first appearance
//!
//! # Missing values
//!
//! Non-finite values (NaN, ±inf) are treated as missing and skipped, the same
//! way a dataframe skips nulls. Every reducer returns `None` when no finite
//! value remains.

pub mod mode;
pub mod summary;

pub use mode::*;
pub use summary::*;
