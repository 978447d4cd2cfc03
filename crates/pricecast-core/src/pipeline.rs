//! Request pipeline: validate, resolve, override, assemble, predict
//!
//! Every check that can fail on bad input runs before the model is called,
//! so the only error that can originate after assembly is a prediction
//! failure.

use serde::Serialize;

use crate::calendar::{Locale, Month, QuantizedCalendar, Weekday};
use crate::context::PricingContext;
use crate::error::Result;
use crate::feature::build_feature_record;
use crate::predictor::predict_checked;
use crate::request::PriceRequest;
use crate::typical::{resolve_cohort, CohortScope, TypicalValues};

/// Typical values plus the calendar options they select by default
#[derive(Debug, Clone, Serialize)]
pub struct TypicalSelection {
    pub values: TypicalValues,
    pub scope: CohortScope,
    pub rows: usize,
    pub day_of_week: Weekday,
    pub day_of_week_label: &'static str,
    pub month: Month,
    pub month_label: &'static str,
}

/// Every parameter the prediction actually used
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterEcho {
    pub product_name: String,
    pub status: String,
    pub category: String,
    /// Native units
    pub stock_quantity: i64,
    /// Native units
    pub sales_volume: i64,
    pub day_of_week: Weekday,
    pub day_of_week_label: &'static str,
    pub month: Month,
    pub month_label: &'static str,
}

/// Result of one prediction request
#[derive(Debug, Clone, Serialize)]
pub struct PriceReport {
    pub price: f64,
    pub model: String,
    pub parameters: ParameterEcho,
    /// Cohort the unset fields were filled from
    pub cohort: CohortScope,
    pub cohort_rows: usize,
}

impl PriceReport {
    /// Price rounded for display
    pub fn formatted_price(&self) -> String {
        format!("{:.2}", self.price)
    }
}

/// Typical values and default calendar selection for a product
pub fn typical_selection(
    context: &PricingContext,
    category: &str,
    product_name: &str,
) -> Result<TypicalSelection> {
    let catalog = context.catalog();
    catalog.check_category(category)?;
    catalog.check_product(product_name, category)?;

    let resolution = resolve_cohort(context.dataset(), product_name, category)?;
    let day = Weekday::nearest(resolution.values.day_of_week);
    let month = Month::nearest(resolution.values.month);
    let locale = context.locale();

    Ok(TypicalSelection {
        values: resolution.values,
        scope: resolution.scope,
        rows: resolution.rows,
        day_of_week: day,
        day_of_week_label: day.label(locale),
        month,
        month_label: month.label(locale),
    })
}

/// Run one prediction request end to end
pub fn predict_price(context: &PricingContext, request: &PriceRequest) -> Result<PriceReport> {
    context.catalog().validate(request)?;
    request.check_overrides()?;

    let resolution = resolve_cohort(context.dataset(), &request.product_name, &request.category)?;
    let typical = &resolution.values;

    let stock_quantity = request.stock_quantity.unwrap_or(typical.stock_quantity);
    let sales_volume = request.sales_volume.unwrap_or(typical.sales_volume);
    let day = request
        .day_of_week
        .unwrap_or_else(|| Weekday::nearest(typical.day_of_week));
    let month = request
        .month
        .unwrap_or_else(|| Month::nearest(typical.month));

    let record = build_feature_record(
        &request.product_name,
        &request.category,
        &request.status,
        stock_quantity,
        sales_volume,
        day.quantized(),
        month.quantized(),
        typical,
    )?;

    let predictor = context.predictor();
    let price = predict_checked(predictor, &record)?;

    tracing::info!(
        product = %request.product_name,
        category = %request.category,
        model = predictor.name(),
        price,
        "predicted price"
    );

    Ok(PriceReport {
        price,
        model: predictor.name().to_string(),
        parameters: echo(request, stock_quantity, sales_volume, day, month, context.locale()),
        cohort: resolution.scope,
        cohort_rows: resolution.rows,
    })
}

fn echo(
    request: &PriceRequest,
    stock_quantity: i64,
    sales_volume: i64,
    day: Weekday,
    month: Month,
    locale: Locale,
) -> ParameterEcho {
    ParameterEcho {
        product_name: request.product_name.clone(),
        status: request.status.clone(),
        category: request.category.clone(),
        stock_quantity,
        sales_volume,
        day_of_week: day,
        day_of_week_label: day.label(locale),
        month,
        month_label: month.label(locale),
    }
}
