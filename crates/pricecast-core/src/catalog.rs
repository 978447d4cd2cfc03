//! Known categories, products and statuses
//!
//! Values keep the order in which they first appear in the dataset.

use std::collections::HashMap;

use pricecast_io::HistoricalDataset;
use serde::Serialize;

use crate::error::{PricingError, Result};
use crate::request::PriceRequest;

/// Value sets a request is validated against
#[derive(Debug, Clone, Default, Serialize)]
pub struct Catalog {
    categories: Vec<String>,
    products: HashMap<String, Vec<String>>,
    statuses: Vec<String>,
}

impl Catalog {
    /// Collect the known values from a dataset
    pub fn from_dataset(dataset: &HistoricalDataset) -> Self {
        let mut catalog = Self::default();

        for record in dataset.records() {
            if !catalog.categories.contains(&record.category) {
                catalog.categories.push(record.category.clone());
            }

            let products = catalog.products.entry(record.category.clone()).or_default();
            if !products.contains(&record.product_name) {
                products.push(record.product_name.clone());
            }

            if !catalog.statuses.contains(&record.status) {
                catalog.statuses.push(record.status.clone());
            }
        }

        catalog
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Products seen in a category, or `None` for an unknown category
    pub fn products_in(&self, category: &str) -> Option<&[String]> {
        self.products.get(category).map(|p| p.as_slice())
    }

    pub fn statuses(&self) -> &[String] {
        &self.statuses
    }

    /// Reject a category absent from the dataset
    pub fn check_category(&self, category: &str) -> Result<()> {
        if self.categories.iter().any(|c| c == category) {
            Ok(())
        } else {
            Err(PricingError::UnknownCategory(category.to_string()))
        }
    }

    /// Reject a product not seen within its category
    pub fn check_product(&self, product_name: &str, category: &str) -> Result<()> {
        let products = self
            .products_in(category)
            .ok_or_else(|| PricingError::UnknownCategory(category.to_string()))?;

        if products.iter().any(|p| p == product_name) {
            Ok(())
        } else {
            Err(PricingError::UnknownProduct {
                product: product_name.to_string(),
                category: category.to_string(),
            })
        }
    }

    /// Reject a status absent from the dataset
    pub fn check_status(&self, status: &str) -> Result<()> {
        if self.statuses.iter().any(|s| s == status) {
            Ok(())
        } else {
            Err(PricingError::UnknownStatus(status.to_string()))
        }
    }

    /// Validate the categorical part of a request
    pub fn validate(&self, request: &PriceRequest) -> Result<()> {
        self.check_category(&request.category)?;
        self.check_product(&request.product_name, &request.category)?;
        self.check_status(&request.status)
    }
}
