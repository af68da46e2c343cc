//! Ingredient totals across the whole selection.

use std::collections::HashMap;

use serde::Serialize;

use crate::models::SelectedRecipe;

/// One shopping-list line before display conversion
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngredientSummaryEntry {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    /// Cost of the whole quantity
    pub price: f64,
    pub calories: f64,
}

/// Case- and accent-insensitive sort key, so "Écorce" sorts with "E"
fn sort_key(name: &str) -> String {
    let mut key = String::with_capacity(name.len());
    for c in name.chars().flat_map(char::to_lowercase) {
        match c {
            'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => key.push('a'),
            'ç' => key.push('c'),
            'è' | 'é' | 'ê' | 'ë' => key.push('e'),
            'ì' | 'í' | 'î' | 'ï' => key.push('i'),
            'ñ' => key.push('n'),
            'ò' | 'ó' | 'ô' | 'õ' | 'ö' => key.push('o'),
            'ù' | 'ú' | 'û' | 'ü' => key.push('u'),
            'ý' | 'ÿ' => key.push('y'),
            'æ' => key.push_str("ae"),
            'œ' => key.push_str("oe"),
            other => key.push(other),
        }
    }
    key
}

/// Merge every ingredient occurrence by (name, unit)
///
/// Sorted by name, ignoring case and accents.
pub fn summarize(selection: &[SelectedRecipe]) -> Vec<IngredientSummaryEntry> {
    let mut index: HashMap<(&str, &str), usize> = HashMap::new();
    let mut entries: Vec<IngredientSummaryEntry> = Vec::new();

    for recipe in selection {
        let q = f64::from(recipe.quantity);

        for ing in &recipe.ingredients {
            let quantity = ing.quantity * q;
            let price = ing.price * quantity / 10.0;
            let calories = ing.calories * q;

            match index.get(&(ing.name.as_str(), ing.unit.as_str())) {
                Some(&i) => {
                    let entry = &mut entries[i];
                    entry.quantity += quantity;
                    entry.price += price;
                    entry.calories += calories;
                }
                None => {
                    index.insert((ing.name.as_str(), ing.unit.as_str()), entries.len());
                    entries.push(IngredientSummaryEntry {
                        name: ing.name.clone(),
                        quantity,
                        unit: ing.unit.clone(),
                        price,
                        calories,
                    });
                }
            }
        }
    }

    entries.sort_by(|a, b| {
        sort_key(&a.name)
            .cmp(&sort_key(&b.name))
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
            .then_with(|| a.name.cmp(&b.name))
    });
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PricedIngredient;

    fn ingredient(name: &str, quantity: f64, unit: &str, price: f64, calories: f64) -> PricedIngredient {
        PricedIngredient {
            id: format!("{}-{}", name, unit),
            name: name.to_string(),
            quantity,
            unit: unit.to_string(),
            price,
            calories,
            is_alcoholic: false,
        }
    }

    #[test]
    fn test_empty_selection() {
        assert!(summarize(&[]).is_empty());
    }

    #[test]
    fn test_merges_same_name_and_unit() {
        let a = SelectedRecipe::new("a", "A", vec![ingredient("Citron vert", 1.0, "pièce", 0.4, 6.0)], 2);
        let b = SelectedRecipe::new("b", "B", vec![ingredient("Citron vert", 1.0, "pièce", 0.4, 6.0)], 3);
        let summary = summarize(&[a, b]);

        assert_eq!(summary.len(), 1);
        assert_eq!(summary[0].quantity, 5.0);
        assert!((summary[0].price - 0.2).abs() < 1e-9);
        assert_eq!(summary[0].calories, 30.0);
    }

    #[test]
    fn test_keeps_units_apart_and_sorts() {
        let recipe = SelectedRecipe::new(
            "a",
            "A",
            vec![
                ingredient("sucre", 1.0, "cuillère à café", 0.1, 10.0),
                ingredient("Angostura", 2.0, "dash", 1.0, 1.0),
                ingredient("sucre", 1.0, "morceau", 0.1, 10.0),
            ],
            1,
        );
        let summary = summarize(&[recipe]);
        let names: Vec<(&str, &str)> = summary.iter().map(|e| (e.name.as_str(), e.unit.as_str())).collect();
        assert_eq!(
            names,
            vec![("Angostura", "dash"), ("sucre", "cuillère à café"), ("sucre", "morceau")]
        );
    }

    #[test]
    fn test_accented_names_sort_with_their_letter() {
        let recipe = SelectedRecipe::new(
            "a",
            "A",
            vec![
                ingredient("Fraise", 2.0, "pièce", 0.3, 4.0),
                ingredient("Écorce d'orange", 1.0, "pièce", 0.1, 1.0),
                ingredient("Eau gazeuse", 10.0, "cl", 0.01, 0.0),
            ],
            1,
        );
        let names: Vec<String> = summarize(&[recipe]).into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["Eau gazeuse", "Écorce d'orange", "Fraise"]);
    }
}
