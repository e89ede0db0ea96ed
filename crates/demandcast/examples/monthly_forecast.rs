//! demandcast Monthly Forecasting Examples
//!
//! This example demonstrates the typical forecasting workflows:
//! - Forecasting from a clean historical slice
//! - Normalizing a tabular artifact with named fields
//! - Falling back to manual per-month entry

use demandcast::prelude::*;

fn main() -> Result<(), ForecastError> {
    println!("{}", "=".repeat(80));
    println!("demandcast Monthly Forecasting Examples");
    println!("{}", "=".repeat(80));
    println!();

    example_1_basic_forecast()?;
    example_2_tabular_source()?;
    example_3_manual_entry()?;

    Ok(())
}

/// Example 1: Basic Forecast
/// Forecasts six future months from twelve months of unit demand
fn example_1_basic_forecast() -> Result<(), ForecastError> {
    println!("Example 1: Basic Forecast");
    println!("{}", "-".repeat(80));

    let history = vec![
        120.0, 132.0, 98.0, 110.0, 125.0, 140.0, 151.0, 160.0, 149.0, 155.0, 170.0, 180.0,
    ];

    let model = Holt::new().alpha(0.2).beta(0.1).horizon(6).build()?;
    let result = model.forecast(&history)?;

    println!("{}", result);
    Ok(())
}

/// Example 2: Tabular Source
/// Normalizes an uploaded table with named month and value fields
fn example_2_tabular_source() -> Result<(), ForecastError> {
    println!("Example 2: Tabular Source");
    println!("{}", "-".repeat(80));

    // Exported spreadsheet headers routinely carry case and whitespace noise.
    let headers = vec!["Mois", " Quantité\nUVC "];
    let rows: Vec<Vec<&str>> = vec![
        vec!["Janvier", "120"],
        vec!["Février", "132,5"],
        vec!["Mars", "98"],
        vec!["Avril", "110"],
        vec!["Mai", "125"],
        vec!["Juin", "140"],
        vec!["Juillet", "151"],
        vec!["Août", "160"],
        vec!["Septembre", "149"],
        vec!["Octobre", "155"],
        vec!["Novembre", "170"],
        vec!["Décembre", "180"],
    ];

    let source = TabularSource::new(headers, rows)
        .month_field("mois")
        .value_field("quantité uvc");

    let model = Holt::<f64>::new().horizon(3).build()?;
    let result = model.forecast_source(&source)?;

    println!("{}", result);
    Ok(())
}

/// Example 3: Manual Entry
/// Fills a request-scoped form slot by slot, with lenient parsing
fn example_3_manual_entry() -> Result<(), ForecastError> {
    println!("Example 3: Manual Entry");
    println!("{}", "-".repeat(80));

    let mut form = ManualEntryForm::new();
    for (slot, raw) in [
        "120", "132,5", "98", "110", "125", "140", "151", "160", "149", "155", "170", "180",
    ]
    .iter()
    .enumerate()
    {
        form.set_slot(slot, raw)?;
    }

    let model = Holt::<f64>::new().horizon(3).build()?;
    let result = model.forecast_source(&form)?;

    println!("{}", result);

    // The form is request-scoped; reset it before reuse.
    form.reset();
    let blank: Vec<f64> = form.normalize()?;
    println!("After reset, all {} slots normalize to zero.", blank.len());

    println!();
    Ok(())
}
