//! End-to-end tests for the cocktailatrice calculator.
//!
//! Selections are built the way the server builds them: catalog or raw
//! ingredients are normalized, added to a `Selection`, then aggregated,
//! summarized and exported.

use galactic_cocktails::calculator::{
    aggregate, export_list, format_price_range, summarize, AggregateResult, EMPTY_LIST_PLACEHOLDER,
};
use galactic_cocktails::catalog::Catalog;
use galactic_cocktails::models::{PricedIngredient, RawIngredient, Selection};
use galactic_cocktails::pricing::{
    normalize, normalize_all, resolve_calories, resolve_price, to_cl, PriceResolver, PriceSource,
};

const UNITS: &[&str] = &[
    "ml", "cl", "oz", "dash", "dashes", "cuillère à café", "cuillère à soupe", "gouttes",
    "trait", "pincée", "verre", "tasse", "zeste", "feuilles", "pièce", "", "poignée",
];

fn mojito_ingredients() -> Vec<PricedIngredient> {
    [
        RawIngredient::new("rhum blanc", 5.0, "cl"),
        RawIngredient::new("menthe", 8.0, "feuilles"),
        RawIngredient::new("citron vert", 1.0, "pièce"),
        RawIngredient::new("eau gazeuse", 10.0, "cl"),
        RawIngredient::new("sucre", 2.0, "cuillère à café"),
    ]
    .iter()
    .map(normalize)
    .collect()
}

fn catalog_selection(entries: &[(&str, u32)]) -> Selection {
    let catalog = Catalog::builtin();
    entries.iter().fold(Selection::new(), |selection, (id, quantity)| {
        let cocktail = catalog.get_by_id(id).unwrap();
        selection.with_added(id, &cocktail.name, normalize_all(&cocktail.ingredients), *quantity)
    })
}

#[test]
fn test_resolvers_are_finite_and_non_negative_for_every_unit() {
    for name in ["Rhum blanc", "Ingrédient mystère", "", "Glaçons", "Vodka Absolut"] {
        let price = resolve_price(name);
        assert!(price.is_finite() && price > 0.0, "price for {:?}", name);

        for unit in UNITS {
            let calories = resolve_calories(name, 3.0, unit);
            let volume = to_cl(3.0, unit);
            assert!(calories.is_finite() && calories >= 0.0, "{:?} {:?}", name, unit);
            assert!(volume.is_finite() && volume >= 0.0, "{:?}", unit);
        }
    }
}

#[test]
fn test_brand_query_matches_reference_entry() {
    let matched = PriceResolver::builtin().resolve("Vodka Absolut");
    match matched.source {
        PriceSource::Exact { reference } | PriceSource::Partial { reference } => {
            let reference = reference.to_lowercase();
            assert!(reference.contains("absolut") || reference.contains("vodka"));
        }
        other => panic!("fell through to {:?}", other),
    }
}

#[test]
fn test_empty_selection_aggregates_to_zero() {
    let result = aggregate(&[]);
    assert_eq!(result, AggregateResult::empty());
    assert!(result.results.is_empty());
    assert_eq!(result.total_cost, 0.0);
    assert_eq!(result.total_calories, 0.0);
}

#[test]
fn test_mojito_for_two() {
    let selection = Selection::new().with_added("mojito", "Mojito", mojito_ingredients(), 2);
    let result = aggregate(selection.recipes());
    let mojito = &result.results[0];

    assert_eq!(mojito.quantity, 2);
    let single = mojito_ingredients();
    for (scaled, one) in mojito.ingredients.iter().zip(&single) {
        assert_eq!(scaled.quantity, one.quantity * 2.0);
    }
    assert!(mojito.total_volume > 0.0);
    assert!(mojito.alcoholic_percentage > 0.0);
    assert!((mojito.price_per_cocktail - mojito.total_price / 2.0).abs() <= 0.01);

    // only the rum is alcoholic: 10 cl of 38.8 cl
    assert_eq!(mojito.total_volume, 38.8);
    assert_eq!(mojito.alcoholic_percentage, 26.0);
}

#[test]
fn test_grand_totals_match_recipe_totals() {
    let selection = catalog_selection(&[("mojito", 3), ("negroni", 2), ("pina-colada", 5), ("shirley-temple", 1)]);
    let result = aggregate(selection.recipes());

    let cost: f64 = result.results.iter().map(|r| r.total_price).sum();
    let calories: f64 = result.results.iter().map(|r| r.total_calories).sum();
    assert!((result.total_cost - cost).abs() <= 0.01 * result.results.len() as f64);
    assert!((result.total_calories - calories).abs() <= result.results.len() as f64);
}

#[test]
fn test_aggregate_is_idempotent() {
    let selection = catalog_selection(&[("margarita", 4), ("cosmopolitan", 2)]);
    assert_eq!(aggregate(selection.recipes()), aggregate(selection.recipes()));
}

#[test]
fn test_incremental_update_matches_fresh_selection() {
    let ingredients = mojito_ingredients();
    let incremental = Selection::new()
        .with_added("mojito", "Mojito", ingredients.clone(), 2)
        .with_increased("mojito");
    let fresh = Selection::new().with_added("mojito", "Mojito", ingredients, 3);

    assert_eq!(aggregate(incremental.recipes()), aggregate(fresh.recipes()));

    let a = incremental.get("mojito").unwrap();
    let b = fresh.get("mojito").unwrap();
    assert!((a.total_price - b.total_price).abs() < 1e-9);
    assert!((a.total_calories - b.total_calories).abs() < 1e-9);
}

#[test]
fn test_price_range_band() {
    assert_eq!(format_price_range(6.2), "5-7€");
    assert_eq!(format_price_range(0.4), "0-1€");
}

#[test]
fn test_shared_ingredient_merges_across_recipes() {
    let lime = || vec![normalize(&RawIngredient::new("citron vert", 1.0, "pièce"))];
    let selection = Selection::new()
        .with_added("daiquiri", "Daiquiri", lime(), 2)
        .with_added("caipirinha", "Caipirinha", lime(), 3);

    let summary = summarize(selection.recipes());
    assert_eq!(summary.len(), 1);
    assert_eq!(summary[0].name, "citron vert");
    assert_eq!(summary[0].quantity, 5.0);
}

#[test]
fn test_empty_export_is_placeholder_only() {
    let text = export_list(&summarize(Selection::new().recipes()));
    assert_eq!(text, EMPTY_LIST_PLACEHOLDER);
    assert!(!text.contains("ALCOOLS FORTS"));
}

#[test]
fn test_catalog_export_has_header_and_sections() {
    let selection = catalog_selection(&[("mojito", 10), ("aperol-spritz", 4)]);
    let text = export_list(&summarize(selection.recipes()));
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "Liste des ingrédients:");
    assert_eq!(lines[1], "========================");
    assert_eq!(lines[2], "ALCOOLS FORTS");
    // 10 x 5 cl of rum is 500 ml, shown in centiliters
    assert!(lines.contains(&"Rhum blanc: 50.00 cl"));
    assert!(text.contains("LIQUEURS ET VINS"));
}
