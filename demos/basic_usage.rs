//! Basic usage example for flagcolors-rs
//!
//! This example demonstrates how to:
//! - Build a color map and a few country records in memory
//! - Invert the color map
//! - Annotate the records and print the result

use flagcolors_rs::prelude::*;
use flagcolors_rs::report::format_line;
use serde_json::json;

fn main() -> Result<()> {
    println!("=== flagcolors-rs Basic Usage Example ===\n");

    let color_map: ColorMap = serde_json::from_value(json!({
        "red": ["us", "fr", "jp"],
        "white": ["us", "fr", "jp"],
        "blue": ["us", "fr"]
    }))?;
    let mut countries: Vec<CountryRecord> = serde_json::from_value(json!([
        {"country": "United States", "flagCode": "us"},
        {"country": "Japan", "flagCode": "jp"},
        {"country": "Bhutan", "flagCode": "bt"}
    ]))?;

    // Example 1: Invert the color map
    println!("--- Example 1: Inverted map ---");
    let inverted = invert(&color_map);
    for (key, codes) in inverted.iter() {
        println!("{}", format_line(key, codes));
    }
    println!();

    // Example 2: Annotate records
    println!("--- Example 2: Annotated records ---");
    let stats = annotate(&mut countries, &inverted)?;
    println!(
        "Matched {} of {} records ({} without colors)",
        stats.matched, stats.records, stats.unmatched
    );
    println!("{}", serde_json::to_string_pretty(&countries)?);

    Ok(())
}
