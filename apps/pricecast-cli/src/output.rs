//! Plain-text rendering

use pricecast_core::{CohortScope, PriceReport, TypicalSelection};

pub fn print_list(items: &[String]) {
    for item in items {
        println!("{item}");
    }
}

fn scope_note(scope: CohortScope, rows: usize) -> String {
    match scope {
        CohortScope::Product => format!("{rows} product rows"),
        CohortScope::Category => format!("{rows} category rows (no rows for product)"),
    }
}

pub fn print_typical(selection: &TypicalSelection) {
    println!("Typical values ({}):", scope_note(selection.scope, selection.rows));
    for (name, value) in selection.values.entries() {
        println!("  {name:<32} {value}");
    }
    println!("  {:<32} {}", "Default day", selection.day_of_week_label);
    println!("  {:<32} {}", "Default month", selection.month_label);
}

pub fn print_report(report: &PriceReport) {
    let p = &report.parameters;

    println!("Predicted price: {}", report.formatted_price());
    println!();
    println!("Parameters used:");
    println!("  Product         {}", p.product_name);
    println!("  Status          {}", p.status);
    println!("  Category        {}", p.category);
    println!("  Stock quantity  {}", p.stock_quantity);
    println!("  Sales volume    {}", p.sales_volume);
    println!("  Day of week     {}", p.day_of_week_label);
    println!("  Month           {}", p.month_label);
    println!();
    println!(
        "Model {}, defaults from {}",
        report.model,
        scope_note(report.cohort, report.cohort_rows)
    );
}
