//! Basic usage example for geosuggest-rs
//!
//! This example demonstrates how to:
//! - Build an index by hand and from a source file
//! - Normalize a user query
//! - Rank suggestions around a reference point
//!
//! Run with: cargo run --example basic_usage [path/to/cities.tsv]

use geosuggest_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== geosuggest-rs Basic Usage Example ===\n");

    // Example 1: Build an index by hand
    println!("--- Example 1: Hand-built index ---");
    let mut index = PlaceIndex::new();
    index.add(Place::new(1, "Toronto", 43.70011, -79.4163, "Canada", "ON"), "Toronto");
    index.add(Place::new(2, "Torrance", 33.83585, -118.34063, "USA", "CA"), "Torrance");
    index.add(Place::new(3, "Montréal", 45.50884, -73.58781, "Canada", "QC"), "Montreal");
    println!("Indexed {} places\n", index.len());

    // Example 2: Query near Toronto
    println!("--- Example 2: Suggestions for 'tor' near Toronto ---");
    for s in index.find("tor", 43.7, -79.4) {
        println!("  {:.1}  {}", s.score, s.name);
    }
    println!();

    // Example 3: Accented input
    println!("--- Example 3: Accented query ---");
    let prefix = strip_diacritics("Montré");
    let body = SuggestionsResponse::from(index.find(&prefix, 45.5, -73.6).as_slice());
    println!("  {}", render(&body));
    println!();

    // Example 4: Build from a source file, if one is given
    println!("--- Example 4: Build from source ---");
    match std::env::args().nth(1) {
        Some(path) => match PlaceIndex::load_from_path(&path, &IngestConfig::default()) {
            Ok((built, report)) => {
                println!("✓ {} places ({} lines skipped)", built.len(), report.skipped());
                for s in built.find("van", 49.25, -123.1).iter().take(5) {
                    println!("  {:.1}  {}", s.score, s.name);
                }
            }
            Err(e) => eprintln!("✗ Failed to build index: {e}"),
        },
        None => println!("  (pass a .tsv path to try this)"),
    }

    Ok(())
}

fn render(body: &SuggestionsResponse) -> String {
    body.to_json().unwrap_or_else(|e| format!("<serialization error: {e}>"))
}
