//! Process-wide pricing state
//!
//! The dataset and model are loaded once and never reloaded. A
//! `PricingContext` is the immutable handle holding both; the pipeline takes
//! it by reference. `PricingContext::shared` memoizes the first successful
//! initialization for the rest of the process. There is no teardown.

use std::sync::{Arc, OnceLock};

use pricecast_io::HistoricalDataset;

use crate::calendar::Locale;
use crate::catalog::Catalog;
use crate::config::PricecastConfig;
use crate::error::Result;
use crate::model::LinearModel;
use crate::predictor::PricePredictor;

static SHARED: OnceLock<Arc<PricingContext>> = OnceLock::new();

/// Loaded dataset, derived catalog and model
pub struct PricingContext {
    dataset: HistoricalDataset,
    catalog: Catalog,
    predictor: Box<dyn PricePredictor>,
    locale: Locale,
}

impl std::fmt::Debug for PricingContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PricingContext")
            .field("rows", &self.dataset.len())
            .field("categories", &self.catalog.categories().len())
            .field("model", &self.predictor.name())
            .field("locale", &self.locale)
            .finish()
    }
}

impl PricingContext {
    /// Load the dataset and model named by `config`
    pub fn initialize(config: &PricecastConfig) -> Result<Self> {
        config.validate()?;

        let dataset = HistoricalDataset::load(
            &config.dataset.path.to_string_lossy(),
            config.delimiter_byte()?,
        )?;
        let model = LinearModel::load(&config.model.path)?;

        Ok(Self::from_parts(dataset, Box::new(model), config.display.locale))
    }

    /// Assemble a context from already-loaded parts
    pub fn from_parts(
        dataset: HistoricalDataset,
        predictor: Box<dyn PricePredictor>,
        locale: Locale,
    ) -> Self {
        let catalog = Catalog::from_dataset(&dataset);
        Self {
            dataset,
            catalog,
            predictor,
            locale,
        }
    }

    /// The process-wide context, initializing it on first use
    ///
    /// Once initialized, later calls return the same handle and ignore
    /// `config`. A failed initialization is not cached.
    pub fn shared(config: &PricecastConfig) -> Result<Arc<Self>> {
        if let Some(context) = SHARED.get() {
            return Ok(Arc::clone(context));
        }

        let context = Arc::new(Self::initialize(config)?);
        Ok(Arc::clone(SHARED.get_or_init(|| context)))
    }

    pub fn dataset(&self) -> &HistoricalDataset {
        &self.dataset
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn predictor(&self) -> &dyn PricePredictor {
        self.predictor.as_ref()
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }
}
