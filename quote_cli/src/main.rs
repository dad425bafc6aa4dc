//! # Fenestra CLI Application
//!
//! Terminal front-end for the aluminium window/door estimator. Walks through
//! the same form the web UI presents, one field per prompt, then prints the
//! estimate and quotation with 2-decimal display rounding plus the raw JSON.
//!
//! Every numeric prompt accepts free text; junk coerces to zero in the forms
//! layer, exactly as the engine promises. Unknown glass or profile names
//! abort with a structured error.

use std::io::{self, BufRead, Write};
use std::path::Path;

use quote_core::calculations::{compute_estimate, compute_quotation};
use quote_core::file_io::{load_store, save_store, FileLock};
use quote_core::forms::{RawChargesForm, RawEstimateForm};
use quote_core::materials::{Finish, GlassType, MaterialRates, Profile};
use quote_core::project::ProjectStore;

const STORE_PATH: &str = "quotes.fen";

fn prompt(label: &str, default: &str) -> String {
    print!("{} [{}]: ", label, default);
    if io::stdout().flush().is_err() {
        return default.to_string();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default.to_string();
    }

    let trimmed = input.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

fn options_line<T: std::fmt::Display>(options: &[T]) -> String {
    options
        .iter()
        .map(|o| o.to_string())
        .collect::<Vec<_>>()
        .join(" / ")
}

fn operator_id() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "operator".to_string())
}

fn main() {
    println!("Fenestra CLI - Window & Door Quotation");
    println!("======================================");
    println!();
    println!("Glass types: {}", options_line(&GlassType::ALL));
    println!("Profiles:    {}", options_line(&Profile::ALL));
    println!("Finishes:    {}", options_line(&Finish::ALL));
    println!();

    let form = RawEstimateForm {
        width_mm: prompt("Width (mm)", "900"),
        height_mm: prompt("Height (mm)", "1200"),
        glass_type: prompt("Glass type", "Clear"),
        glass_thickness_mm: prompt("Glass thickness (mm)", "5"),
        profile: prompt("Profile series", "Series 60"),
        finish: prompt("Finish", "Powder Coated"),
        cost_per_kg: prompt("Cost per kg", "300"),
        accessories_kg: prompt("Accessories weight (kg)", "2"),
        profit_margin_pct: prompt("Profit margin (%)", "10"),
        discount_pct: prompt("Discount (%)", "0"),
    };

    let input = match form.parse() {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            std::process::exit(1);
        }
    };

    let charges = RawChargesForm {
        delivery_charge: prompt("Delivery charge", "0"),
        labor_charge: prompt("Labor charge", "0"),
        gst_percent: prompt("GST (%)", "18"),
    }
    .parse();

    let estimate = compute_estimate(&input, MaterialRates::standard());
    let quotation = compute_quotation(&estimate, &charges);

    println!();
    println!("═══════════════════════════════════════");
    println!("  ESTIMATE");
    println!("═══════════════════════════════════════");
    println!();
    println!("Opening:");
    println!("  Size:      {:.0} x {:.0} mm", input.width_mm, input.height_mm);
    println!("  Area:      {:.2} m²", estimate.area_m2);
    println!("  Perimeter: {:.2} m", estimate.perimeter_m);
    println!();
    println!("Weights:");
    println!(
        "  Glass ({}, {} mm): {:.2} kg",
        input.glass_type, input.glass_thickness_mm, estimate.glass_weight_kg
    );
    println!(
        "  Aluminium ({}):    {:.2} kg",
        input.profile, estimate.aluminium_weight_kg
    );
    println!("  Accessories:          {:.2} kg", estimate.accessories_kg);
    println!("  Total:                {:.2} kg", estimate.total_weight_kg);
    println!();
    println!("Cost ({}):", input.finish);
    println!("  Estimated: {:.2}", estimate.estimated_cost);
    println!(
        "  Final:     {:.2}  (margin {:.1}%, discount {:.1}%)",
        estimate.final_cost, input.profit_margin_pct, input.discount_pct
    );
    println!();
    println!("═══════════════════════════════════════");
    println!("  QUOTATION");
    println!("═══════════════════════════════════════");
    println!();
    println!("  Subtotal:    {:.2}", quotation.subtotal);
    println!("  GST {:.1}%:    {:.2}", charges.gst_percent, quotation.tax_amount);
    println!("  GRAND TOTAL: {:.2}", quotation.grand_total);
    println!("═══════════════════════════════════════");

    println!();
    println!("JSON Output:");
    let combined = serde_json::json!({ "estimate": estimate, "quotation": quotation });
    if let Ok(json) = serde_json::to_string_pretty(&combined) {
        println!("{}", json);
    }

    let record_name = prompt("Save inputs as (blank to skip)", "");
    if !record_name.is_empty() {
        if let Err(e) = save_to_store(&record_name, input) {
            eprintln!("Save failed: {}", e);
        }
    }
}

/// Save the input snapshot into the local quote store under a file lock.
fn save_to_store(
    name: &str,
    input: quote_core::EstimateInput,
) -> Result<(), quote_core::QuoteError> {
    let path = Path::new(STORE_PATH);
    let lock = FileLock::acquire(path, operator_id())?;

    let mut store = if path.exists() {
        load_store(path)?
    } else {
        ProjectStore::new("", operator_id())
    };

    store.save_record(name, input)?;
    save_store(&store, path)?;
    drop(lock);

    println!(
        "Saved '{}' to {} ({} record(s) kept)",
        name,
        STORE_PATH,
        store.record_count()
    );
    Ok(())
}
