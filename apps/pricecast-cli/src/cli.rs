//! Command-line arguments

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use pricecast_core::{Locale, Month, PriceRequest, QuantizedCalendar, Result, Weekday};

#[derive(Debug, Parser)]
#[command(name = "pricecast", version, about = "Retail price prediction from partial input")]
pub struct Cli {
    /// Config file (default: ./pricecast.toml, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Historical dataset file
    #[arg(long, global = true)]
    pub dataset: Option<PathBuf>,

    /// Dataset field delimiter
    #[arg(long, global = true)]
    pub delimiter: Option<char>,

    /// JSON model artifact
    #[arg(long, global = true)]
    pub model: Option<PathBuf>,

    /// Calendar label language (english or russian)
    #[arg(long, global = true)]
    pub locale: Option<Locale>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List known categories
    Categories,

    /// List products in a category
    Products {
        #[arg(long)]
        category: String,
    },

    /// List known statuses
    Statuses,

    /// Show typical values for a product
    Typical {
        #[arg(long)]
        category: String,

        #[arg(long)]
        product: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Predict a price
    Predict(PredictArgs),
}

#[derive(Debug, Args)]
pub struct PredictArgs {
    #[arg(long)]
    pub category: String,

    #[arg(long)]
    pub product: String,

    #[arg(long)]
    pub status: String,

    /// Stock quantity override (14-133)
    #[arg(long)]
    pub stock: Option<i64>,

    /// Sales volume override (7-141)
    #[arg(long)]
    pub sales: Option<i64>,

    /// Weekday label, e.g. Wednesday or Среда
    #[arg(long)]
    pub day: Option<String>,

    /// Month label, e.g. March or Март
    #[arg(long)]
    pub month: Option<String>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl PredictArgs {
    /// Build a request, resolving calendar labels
    pub fn to_request(&self) -> Result<PriceRequest> {
        let mut request = PriceRequest::new(&self.category, &self.product, &self.status);
        request.stock_quantity = self.stock;
        request.sales_volume = self.sales;
        request.day_of_week = self.day.as_deref().map(Weekday::parse_label).transpose()?;
        request.month = self.month.as_deref().map(Month::parse_label).transpose()?;
        Ok(request)
    }
}
