//! Ingredient normalization
//!
//! Turns catalog ingredients into priced records ready for aggregation.

use uuid::Uuid;

use super::calories::resolve_calories;
use super::price::{normalize_name, PriceResolver};
use crate::models::{CatalogIngredient, PricedIngredient, RawIngredient};

/// Quantity assumed when a recipe gives none
pub const DEFAULT_QUANTITY: f64 = 10.0;

/// Name fragments that mark an ingredient as alcoholic
const ALCOHOL_MARKERS: &[&str] = &[
    "rhum",
    "vodka",
    "gin",
    "whisky",
    "whiskey",
    "tequila",
    "cognac",
    "brandy",
    "vermouth",
    "liqueur",
    "kirsch",
    "triple sec",
    "cointreau",
    "campari",
    "aperol",
    "spiritueux",
    "bitter",
    "alcool",
    "chartreuse",
    "porto",
    "vin",
];

/// Whether an ingredient name denotes an alcoholic ingredient
pub fn is_alcoholic(name: &str) -> bool {
    let name = normalize_name(name);
    ALCOHOL_MARKERS.iter().any(|marker| name.contains(marker))
}

/// Price and annotate one raw ingredient against the embedded price table
pub fn normalize(raw: &RawIngredient) -> PricedIngredient {
    normalize_with(PriceResolver::builtin(), raw)
}

/// Price and annotate one raw ingredient against a given resolver
pub fn normalize_with(resolver: &PriceResolver, raw: &RawIngredient) -> PricedIngredient {
    let (quantity, unit) = match &raw.quantity {
        Some(q) if q.is_present() => (q.value(), raw.unit.clone().unwrap_or_default()),
        _ => (DEFAULT_QUANTITY, String::new()),
    };

    let price = resolver.price(&raw.name);
    let calories = resolve_calories(&raw.name, quantity, &unit);

    PricedIngredient {
        id: Uuid::new_v4().to_string(),
        name: raw.name.clone(),
        quantity,
        unit,
        price,
        calories,
        is_alcoholic: is_alcoholic(&raw.name),
    }
}

/// Normalize every ingredient of a catalog recipe, keeping order
pub fn normalize_all(ingredients: &[CatalogIngredient]) -> Vec<PricedIngredient> {
    ingredients
        .iter()
        .map(|ingredient| normalize(&RawIngredient::from(ingredient)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawQuantity;
    use std::collections::HashSet;

    #[test]
    fn test_structured_ingredient() {
        let priced = normalize(&RawIngredient::new("Rhum blanc", 5.0, "cl"));
        assert_eq!(priced.name, "Rhum blanc");
        assert_eq!(priced.quantity, 5.0);
        assert_eq!(priced.unit, "cl");
        assert!(priced.is_alcoholic);
        assert!(priced.price > 0.0);
        assert_eq!(priced.calories, 325.0);
    }

    #[test]
    fn test_missing_quantity_uses_defaults() {
        let priced = normalize(&RawIngredient {
            name: "Rondelle d'orange".into(),
            quantity: None,
            unit: Some("pièce".into()),
        });
        assert_eq!(priced.quantity, DEFAULT_QUANTITY);
        assert_eq!(priced.unit, "");
        // no unit means no volume, hence no calories
        assert_eq!(priced.calories, 0.0);
    }

    #[test]
    fn test_text_quantity() {
        let priced = normalize(&RawIngredient {
            name: "Gin".into(),
            quantity: Some(RawQuantity::Text("4.5".into())),
            unit: Some("cl".into()),
        });
        assert_eq!(priced.quantity, 4.5);

        let top = normalize(&RawIngredient {
            name: "Eau gazeuse".into(),
            quantity: Some(RawQuantity::Text("Top".into())),
            unit: None,
        });
        assert_eq!(top.quantity, 0.0);
        assert_eq!(top.unit, "");
    }

    #[test]
    fn test_string_catalog_ingredient() {
        let priced = normalize_all(&[CatalogIngredient::Name("Glaçons".into())]);
        assert_eq!(priced.len(), 1);
        assert_eq!(priced[0].quantity, DEFAULT_QUANTITY);
        assert!(!priced[0].is_alcoholic);
    }

    #[test]
    fn test_alcohol_markers() {
        assert!(is_alcoholic("Vermouth rouge"));
        assert!(is_alcoholic("Angostura bitters"));
        assert!(is_alcoholic("Vin blanc"));
        assert!(!is_alcoholic("Jus d'ananas"));
        assert!(!is_alcoholic("Menthe"));
    }

    #[test]
    fn test_ids_are_unique() {
        let raw = RawIngredient::new("Menthe", 8.0, "feuilles");
        let ids: HashSet<String> = (0..50).map(|_| normalize(&raw).id).collect();
        assert_eq!(ids.len(), 50);
    }
}
