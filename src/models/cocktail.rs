//! Cocktail model
//!
//! Catalog entries as stored in `data/cocktails.json`, plus the fixed
//! browsing categories.

use serde::{Deserialize, Serialize};

use super::CatalogIngredient;

/// A cocktail recipe from the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cocktail {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<CatalogIngredient>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub alcohol_degree: f64,
    #[serde(default)]
    pub is_alcoholic: bool,
    #[serde(default)]
    pub preparation_time: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub glass_type: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub flavors: Vec<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub galaxy_origin: Option<String>,
    #[serde(default)]
    pub celestial_effect: Option<String>,
    #[serde(default)]
    pub star_rating: Option<f64>,
}

impl Cocktail {
    /// Lowercase haystack check used by catalog search
    pub fn matches(&self, needle_lower: &str) -> bool {
        let hit = |s: &str| s.to_lowercase().contains(needle_lower);

        hit(self.name.as_str())
            || self.ingredients.iter().any(|i| hit(i.name()))
            || hit(self.description.as_str())
            || self.tags.iter().any(|t| hit(t.as_str()))
            || self.categories.iter().any(|c| hit(c.as_str()))
    }

    pub fn ingredient_names(&self) -> Vec<&str> {
        self.ingredients.iter().map(CatalogIngredient::name).collect()
    }

    pub fn summary(&self) -> CocktailSummary {
        CocktailSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            image_url: self.image_url.clone(),
            alcohol_degree: self.alcohol_degree,
            is_alcoholic: self.is_alcoholic,
        }
    }
}

/// Card view of a cocktail, without ingredients or instructions
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CocktailSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image_url: Option<String>,
    pub alcohol_degree: f64,
    pub is_alcoholic: bool,
}

/// Name-only autocomplete hit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NameSuggestion {
    pub id: String,
    pub name: String,
}

/// A browsing category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_with_missing_fields() {
        let json = r#"{"name": "Brouillon", "ingredients": ["Glace", {"name": "Gin", "quantity": "4", "unit": "cl"}]}"#;
        let cocktail: Cocktail = serde_json::from_str(json).unwrap();
        assert!(cocktail.id.is_empty());
        assert!(cocktail.categories.is_empty());
        assert_eq!(cocktail.ingredient_names(), vec!["Glace", "Gin"]);
    }

    #[test]
    fn test_matches_ingredients_and_tags() {
        let json = r#"{"id": "x", "name": "Comète", "ingredients": ["Rhum ambré"], "tags": ["Été"]}"#;
        let cocktail: Cocktail = serde_json::from_str(json).unwrap();
        assert!(cocktail.matches("rhum"));
        assert!(cocktail.matches("été"));
        assert!(cocktail.matches("comè"));
        assert!(!cocktail.matches("vodka"));
    }
}
