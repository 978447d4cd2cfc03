//! pricecast CLI
//!
//! Lists the known categories, products and statuses, shows the typical
//! values for a product, and predicts a price from a partial request.

mod cli;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};
use pricecast_core::{
    predict_price, typical_selection, PricecastConfig, PricingContext, PricingError,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so JSON output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let context = PricingContext::shared(&config)?;

    match &cli.command {
        Command::Categories => output::print_list(context.catalog().categories()),
        Command::Products { category } => {
            let products = context
                .catalog()
                .products_in(category)
                .ok_or_else(|| PricingError::UnknownCategory(category.clone()))?;
            output::print_list(products);
        }
        Command::Statuses => output::print_list(context.catalog().statuses()),
        Command::Typical {
            category,
            product,
            json,
        } => {
            let selection = typical_selection(&context, category, product)?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&selection)?);
            } else {
                output::print_typical(&selection);
            }
        }
        Command::Predict(args) => {
            let request = args.to_request()?;
            let report = predict_price(&context, &request)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                output::print_report(&report);
            }
        }
    }

    Ok(())
}

/// Config file, then command-line overrides
fn load_config(cli: &Cli) -> Result<PricecastConfig, PricingError> {
    let mut config = PricecastConfig::load_standard(cli.config.as_deref())?;

    if let Some(path) = &cli.dataset {
        config.dataset.path = path.clone();
    }
    if let Some(delimiter) = cli.delimiter {
        config.dataset.delimiter = delimiter;
    }
    if let Some(path) = &cli.model {
        config.model.path = path.clone();
    }
    if let Some(locale) = cli.locale {
        config.display.locale = locale;
    }

    config.validate()?;
    tracing::debug!(?config, "effective configuration");
    Ok(config)
}
