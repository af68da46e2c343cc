//! Offline shopping-list exporter
//!
//! Reads a selection file (`[{"id": "mojito", "quantity": 2}, ...]`), prints
//! the totals to stderr and writes the shopping list to stdout, or to the
//! file given as second argument.

use std::path::PathBuf;

use serde::Deserialize;

use galactic_cocktails::calculator::{aggregate, export_list, summarize};
use galactic_cocktails::catalog::Catalog;
use galactic_cocktails::models::Selection;
use galactic_cocktails::pricing::normalize_all;

#[derive(Debug, Deserialize)]
struct SelectionEntry {
    id: String,
    #[serde(default = "default_quantity")]
    quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

fn usage() -> String {
    "usage: shopping-list <selection.json> [output.txt]".to_string()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let input = args.next().map(PathBuf::from).ok_or_else(usage)?;
    let output = args.next().map(PathBuf::from);

    let entries: Vec<SelectionEntry> = serde_json::from_str(&std::fs::read_to_string(&input)?)?;

    let catalog = Catalog::builtin();
    let mut selection = Selection::new();
    for entry in &entries {
        match catalog.get_by_id(&entry.id) {
            Some(cocktail) => {
                selection = selection.with_added(
                    &cocktail.id,
                    &cocktail.name,
                    normalize_all(&cocktail.ingredients),
                    entry.quantity,
                );
            }
            None => eprintln!("Skipping unknown cocktail: {}", entry.id),
        }
    }

    let totals = aggregate(selection.recipes());
    for result in &totals.results {
        eprintln!(
            "{} x{}: {:.2} EUR ({}), {:.0} kcal, {}% alcool",
            result.name,
            result.quantity,
            result.total_price,
            result.formatted_price_range,
            result.total_calories,
            result.alcoholic_percentage
        );
    }
    eprintln!("Total: {:.2} EUR, {:.0} kcal", totals.total_cost, totals.total_calories);

    let text = export_list(&summarize(selection.recipes()));
    match output {
        Some(path) => {
            std::fs::write(&path, text)?;
            eprintln!("Shopping list written to {}", path.display());
        }
        None => println!("{}", text),
    }

    Ok(())
}
