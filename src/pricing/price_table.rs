//! Reference price table
//!
//! Supermarket prices for common cocktail ingredients, embedded from
//! `data/ingredient_prices.json` at compile time and parsed once.

use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// One priced product from the reference table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferencePriceEntry {
    #[serde(rename = "ingredient")]
    pub ingredient_name: String,
    pub volume_ml: f64,
    pub price_eur: f64,
    #[serde(rename = "eur_per_10ml")]
    pub price_per_10ml: f64,
    #[serde(rename = "eur_per_litre")]
    pub price_per_litre: f64,
    pub source: String,
    pub date: String,
}

static REFERENCE_PRICES: LazyLock<Vec<ReferencePriceEntry>> = LazyLock::new(|| {
    let json = include_str!("../../data/ingredient_prices.json");
    match serde_json::from_str::<Vec<ReferencePriceEntry>>(json) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::error!("Embedded price table is invalid, pricing falls back to defaults: {}", e);
            Vec::new()
        }
    }
});

/// The embedded reference price table, in file order
pub fn reference_prices() -> &'static [ReferencePriceEntry] {
    &REFERENCE_PRICES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_table_parses() {
        assert!(reference_prices().len() > 40);
    }

    #[test]
    fn test_entries_are_consistent() {
        for entry in reference_prices() {
            assert!(entry.volume_ml > 0.0, "{}", entry.ingredient_name);
            assert!(entry.price_per_10ml > 0.0, "{}", entry.ingredient_name);
            let derived = entry.price_eur / entry.volume_ml * 10.0;
            assert!(
                (derived - entry.price_per_10ml).abs() < 0.001,
                "{}: {} vs {}",
                entry.ingredient_name,
                derived,
                entry.price_per_10ml
            );
        }
    }
}
