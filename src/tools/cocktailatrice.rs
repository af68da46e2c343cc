//! Cocktailatrice MCP Tools
//!
//! Ingredient pricing, the session selection, totals and the shopping list.
//! Selection tools take the current selection and return its replacement;
//! the server owns the stored value.

use serde::Serialize;

use crate::calculator::{
    aggregate, export_list, summarize, AggregateResult, IngredientSummaryEntry,
    SHOPPING_LIST_FILENAME,
};
use crate::catalog::Catalog;
use crate::models::{round_to, PricedIngredient, RawIngredient, RawQuantity, Selection, Totals};
use crate::pricing::{calories_per_cl, normalize_all, normalize_with, PriceResolver, PriceSource};

/// Step-by-step guide returned by `cocktailatrice_instructions`
pub const CALCULATOR_INSTRUCTIONS: &str = r#"
# Cocktailatrice

Estimate what a set of cocktails costs and how many calories it holds.

## Building a selection

1. Find cocktails with `search_cocktails`, `cocktails_by_category` or
   `cocktail_name_suggestions`.
2. `add_to_selection` with the cocktail id and a number of servings
   (default 1). Adding a cocktail that is already selected adds servings.
3. Adjust with `increase_quantity` / `decrease_quantity`. Decreasing a
   cocktail at 1 serving removes it. `remove_from_selection` and
   `clear_selection` drop entries outright.
4. `suggest_cocktails` with an event description (type of party, number of
   guests, mood, preferred spirit, budget) proposes a selection; pass
   `apply: true` to replace the current one with it.

## Reading the results

- `calculate_selection` gives, per cocktail: batch volume (cl), total price,
  price per cocktail with a ±1 € band, calories, and alcohol share of the
  volume. It also lists every ingredient merged across the selection.
- `export_shopping_list` renders the merged list grouped by aisle
  (spirits, liqueurs, juices, syrups, bitters, garnishes, other).

## Units and estimates

Prices are in euros per 10 ml, from a reference table of supermarket prices.
Unknown ingredients fall back to keyword categories, then to 0.50 € / 10 ml.
Ingredients without a quantity count as 10 units. Units such as "pièce" or
"feuilles" are priced but have no volume. All figures are estimates.
"#;

/// One ingredient with its price provenance
#[derive(Debug, Serialize)]
pub struct PriceIngredientResponse {
    pub ingredient: PricedIngredient,
    pub price_source: PriceSource,
    /// Cost of the given quantity
    pub cost: f64,
    pub calories_per_cl: f64,
}

/// Selected recipe line, without ingredient detail
#[derive(Debug, Serialize)]
pub struct SelectionLine {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    pub ingredient_count: usize,
    pub total_price: f64,
    pub total_calories: f64,
}

#[derive(Debug, Serialize)]
pub struct SelectionResponse {
    pub recipes: Vec<SelectionLine>,
    pub total_servings: u64,
    pub total_price: f64,
    pub total_calories: f64,
}

impl From<&Selection> for SelectionResponse {
    fn from(selection: &Selection) -> Self {
        let recipes: Vec<SelectionLine> = selection
            .recipes()
            .iter()
            .map(|r| SelectionLine {
                id: r.id.clone(),
                name: r.name.clone(),
                quantity: r.quantity,
                ingredient_count: r.ingredients.len(),
                total_price: round_to(r.total_price, 2),
                total_calories: r.total_calories.round(),
            })
            .collect();

        let totals = selection
            .recipes()
            .iter()
            .map(|r| r.totals())
            .sum::<Totals>()
            .rounded();

        Self {
            total_servings: recipes.iter().map(|r| u64::from(r.quantity)).sum(),
            recipes,
            total_price: totals.price,
            total_calories: totals.calories,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CalculationResponse {
    #[serde(flatten)]
    pub aggregate: AggregateResult,
    pub ingredients: Vec<IngredientSummaryEntry>,
}

#[derive(Debug, Serialize)]
pub struct ExportResponse {
    pub filename: &'static str,
    pub content: String,
    pub ingredient_count: usize,
}

pub fn price_ingredient(name: &str, quantity: Option<String>, unit: Option<String>) -> Result<PriceIngredientResponse, String> {
    if name.trim().is_empty() {
        return Err("Ingredient name must not be empty".to_string());
    }

    let raw = RawIngredient {
        name: name.to_string(),
        quantity: quantity.map(RawQuantity::Text),
        unit,
    };
    let resolver = PriceResolver::builtin();
    let ingredient = normalize_with(resolver, &raw);

    Ok(PriceIngredientResponse {
        price_source: resolver.resolve(name).source,
        cost: round_to(ingredient.cost(), 4),
        calories_per_cl: calories_per_cl(name),
        ingredient,
    })
}

fn require_selected(selection: &Selection, id: &str) -> Result<(), String> {
    match selection.get(id) {
        Some(_) => Ok(()),
        None => Err(format!("Cocktail not in selection: {}", id)),
    }
}

fn too_many_servings(id: &str) -> String {
    format!("Too many servings of {} (limit {})", id, u32::MAX)
}

/// Add servings of a catalog cocktail
pub fn add_to_selection(
    selection: &Selection,
    catalog: &Catalog,
    cocktail_id: &str,
    quantity: u32,
) -> Result<Selection, String> {
    let cocktail = catalog
        .get_by_id(cocktail_id)
        .ok_or_else(|| format!("Cocktail not found with id: {}", cocktail_id))?;

    let ingredients = normalize_all(&cocktail.ingredients);
    selection
        .try_added(&cocktail.id, &cocktail.name, ingredients, quantity)
        .ok_or_else(|| too_many_servings(cocktail_id))
}

pub fn increase_quantity(selection: &Selection, cocktail_id: &str) -> Result<Selection, String> {
    require_selected(selection, cocktail_id)?;
    selection
        .try_increased(cocktail_id)
        .ok_or_else(|| too_many_servings(cocktail_id))
}

/// One serving fewer; a cocktail at one serving leaves the selection
pub fn decrease_quantity(selection: &Selection, cocktail_id: &str) -> Result<Selection, String> {
    require_selected(selection, cocktail_id)?;
    Ok(selection.with_decreased(cocktail_id))
}

pub fn remove_from_selection(selection: &Selection, cocktail_id: &str) -> Result<Selection, String> {
    require_selected(selection, cocktail_id)?;
    Ok(selection.without(cocktail_id))
}

pub fn calculate_selection(selection: &Selection) -> CalculationResponse {
    CalculationResponse {
        aggregate: aggregate(selection.recipes()),
        ingredients: summarize(selection.recipes()),
    }
}

pub fn export_shopping_list(selection: &Selection) -> ExportResponse {
    let summary = summarize(selection.recipes());
    ExportResponse {
        filename: SHOPPING_LIST_FILENAME,
        content: export_list(&summary),
        ingredient_count: summary.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_ingredient_reports_source() {
        let response = price_ingredient("Vodka Absolut Blue", Some("4".into()), Some("cl".into())).unwrap();
        assert!(matches!(response.price_source, PriceSource::Exact { .. }));
        assert_eq!(response.ingredient.quantity, 4.0);
        assert!(response.ingredient.is_alcoholic);

        let response = price_ingredient("Glaçons", None, None).unwrap();
        assert_eq!(response.ingredient.quantity, 10.0);
        assert_eq!(response.ingredient.unit, "");

        assert!(price_ingredient(" ", None, None).is_err());
    }

    #[test]
    fn test_selection_round_trip_through_tools() {
        let catalog = Catalog::builtin();
        let selection = add_to_selection(&Selection::new(), catalog, "mojito", 2).unwrap();
        let selection = add_to_selection(&selection, catalog, "negroni", 1).unwrap();
        let selection = increase_quantity(&selection, "negroni").unwrap();
        let selection = decrease_quantity(&selection, "mojito").unwrap();

        let view = SelectionResponse::from(&selection);
        assert_eq!(view.total_servings, 3);
        assert_eq!(view.recipes[0].id, "mojito");
        assert_eq!(view.recipes[0].ingredient_count, 5);

        assert!(increase_quantity(&selection, "paloma").is_err());
        assert!(add_to_selection(&selection, catalog, "introuvable", 1).is_err());

        let selection = remove_from_selection(&selection, "mojito").unwrap();
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_serving_overflow_is_rejected() {
        let catalog = Catalog::builtin();
        let full = add_to_selection(&Selection::new(), catalog, "mojito", u32::MAX).unwrap();
        let full = add_to_selection(&full, catalog, "negroni", u32::MAX).unwrap();

        assert!(add_to_selection(&full, catalog, "mojito", 1).is_err());
        assert!(increase_quantity(&full, "mojito").is_err());
        assert_eq!(full.get("mojito").unwrap().quantity, u32::MAX);

        let view = SelectionResponse::from(&full);
        assert_eq!(view.total_servings, 2 * u64::from(u32::MAX));
    }

    #[test]
    fn test_calculation_matches_selection_totals() {
        let catalog = Catalog::builtin();
        let selection = add_to_selection(&Selection::new(), catalog, "margarita", 4).unwrap();
        let response = calculate_selection(&selection);
        let view = SelectionResponse::from(&selection);

        assert_eq!(response.aggregate.results.len(), 1);
        assert!((response.aggregate.total_cost - view.total_price).abs() < 0.011);
        assert!((response.aggregate.total_calories - view.total_calories).abs() <= 1.0);
        assert!(!response.ingredients.is_empty());
    }

    #[test]
    fn test_export_empty_selection() {
        let response = export_shopping_list(&Selection::new());
        assert_eq!(response.filename, "liste_ingredients_cocktails.txt");
        assert_eq!(response.content, "Aucun ingrédient sélectionné");
        assert_eq!(response.ingredient_count, 0);
    }
}
