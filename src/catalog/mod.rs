//! Cocktail catalog
//!
//! Read-only lookups over the embedded `data/cocktails.json` table.

use std::sync::LazyLock;

use crate::models::{Category, Cocktail, CocktailSummary, NameSuggestion};

const CATALOG_JSON: &str = include_str!("../../data/cocktails.json");

/// Category used for cocktails without alcohol
pub const NON_ALCOHOLIC_CATEGORY: &str = "sans-alcool";

/// Default number of autocomplete hits
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

const FEATURED_COUNT: usize = 3;

static CATEGORIES: &[Category] = &[
    Category {
        id: "rhum",
        name: "Rhum",
        description: "Cocktails à base de rhum, souvent associés aux saveurs tropicales",
    },
    Category {
        id: "vodka",
        name: "Vodka",
        description: "Cocktails à base de vodka, une base neutre qui se marie avec de nombreuses saveurs",
    },
    Category {
        id: "gin",
        name: "Gin",
        description: "Cocktails à base de gin, aux notes aromatiques et herbacées",
    },
    Category {
        id: "tequila",
        name: "Tequila",
        description: "Cocktails à base de tequila, souvent vifs et audacieux",
    },
    Category {
        id: "whisky",
        name: "Whisky",
        description: "Cocktails à base de whisky, avec des saveurs robustes et complexes",
    },
    Category {
        id: NON_ALCOHOLIC_CATEGORY,
        name: "Sans alcool",
        description: "Délicieux cocktails sans alcool pour tous",
    },
    Category {
        id: "classiques",
        name: "Classiques",
        description: "Les grands classiques de la mixologie qui ont traversé le temps",
    },
];

/// Recipe category labels each browsing category accepts
fn category_terms(category_id: &str) -> Option<&'static [&'static str]> {
    let terms: &'static [&'static str] = match category_id {
        "rhum" => &["rum", "light rum", "dark rum", "white rum", "rums", "rhum"],
        "vodka" => &["vodka"],
        "gin" => &["gin", "sloe gin"],
        "tequila" => &["tequila"],
        "whisky" => &["whiskey", "scotch", "bourbon", "rye", "rye whiskey", "whisky"],
        "classiques" => &["classic"],
        _ => return None,
    };
    Some(terms)
}

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| match Catalog::from_json(CATALOG_JSON) {
    Ok(catalog) => catalog,
    Err(e) => {
        tracing::error!("Embedded cocktail catalog is invalid: {}", e);
        Catalog::default()
    }
});

/// In-memory cocktail catalog
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    cocktails: Vec<Cocktail>,
}

impl Catalog {
    /// Catalog over the embedded data
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Entries without an id are dropped
    pub fn new(cocktails: Vec<Cocktail>) -> Self {
        let total = cocktails.len();
        let cocktails: Vec<Cocktail> = cocktails
            .into_iter()
            .filter(|c| !c.id.trim().is_empty())
            .collect();

        if cocktails.len() < total {
            tracing::debug!("Dropped {} catalog entries without an id", total - cocktails.len());
        }

        Self { cocktails }
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    pub fn all(&self) -> &[Cocktail] {
        &self.cocktails
    }

    pub fn len(&self) -> usize {
        self.cocktails.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cocktails.is_empty()
    }

    pub fn get_by_id(&self, id: &str) -> Option<&Cocktail> {
        self.cocktails.iter().find(|c| c.id == id)
    }

    /// Case-insensitive search over name, ingredients, description, tags and categories
    pub fn search(&self, query: &str) -> Vec<&Cocktail> {
        let needle = query.to_lowercase();
        self.cocktails.iter().filter(|c| c.matches(&needle)).collect()
    }

    /// Cocktails in a browsing category
    ///
    /// Unknown category ids are matched literally against recipe categories.
    pub fn by_category(&self, category_id: &str) -> Vec<&Cocktail> {
        if category_id == NON_ALCOHOLIC_CATEGORY {
            return self.cocktails.iter().filter(|c| !c.is_alcoholic).collect();
        }

        let literal = [category_id];
        let terms: &[&str] = match category_terms(category_id) {
            Some(terms) => terms,
            None => &literal,
        };
        let terms: Vec<String> = terms
            .iter()
            .map(|t| t.to_lowercase())
            .collect();

        self.cocktails
            .iter()
            .filter(|c| {
                c.categories.iter().any(|cat| {
                    let cat = cat.to_lowercase();
                    terms.iter().any(|t| cat.contains(t.as_str()))
                })
            })
            .collect()
    }

    /// Autocomplete on cocktail names: prefix hits first, then other substring hits
    pub fn suggestions(&self, partial: &str, limit: usize) -> Vec<NameSuggestion> {
        let query = partial.trim().to_lowercase();
        if query.chars().count() < 2 {
            return Vec::new();
        }

        let to_hit = |c: &Cocktail| NameSuggestion {
            id: c.id.clone(),
            name: c.name.clone(),
        };

        let mut hits: Vec<NameSuggestion> = self
            .cocktails
            .iter()
            .filter(|c| c.name.to_lowercase().starts_with(&query))
            .take(limit)
            .map(to_hit)
            .collect();

        if hits.len() < limit {
            let remaining = limit - hits.len();
            hits.extend(
                self.cocktails
                    .iter()
                    .filter(|c| {
                        let name = c.name.to_lowercase();
                        name.contains(&query) && !name.starts_with(&query)
                    })
                    .take(remaining)
                    .map(to_hit),
            );
        }

        hits
    }

    pub fn featured(&self) -> Vec<CocktailSummary> {
        self.cocktails
            .iter()
            .take(FEATURED_COUNT)
            .map(Cocktail::summary)
            .collect()
    }

    pub fn categories(&self) -> &'static [Category] {
        CATEGORIES
    }

    pub fn category(&self, id: &str) -> Option<&'static Category> {
        CATEGORIES.iter().find(|c| c.id == id)
    }

    /// Catalog entries for a list of favorite ids, in the order given.
    /// Ids the catalog no longer knows are skipped.
    pub fn favorite_cocktails<S: AsRef<str>>(&self, ids: &[S]) -> Vec<&Cocktail> {
        ids.iter().filter_map(|id| self.get_by_id(id.as_ref())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(cocktails: &[&Cocktail]) -> Vec<String> {
        cocktails.iter().map(|c| c.id.clone()).collect()
    }

    #[test]
    fn test_builtin_drops_entries_without_id() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 21);
        assert!(catalog.all().iter().all(|c| !c.id.is_empty()));
    }

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::builtin();
        let mojito = catalog.get_by_id("mojito").unwrap();
        assert_eq!(mojito.name, "Mojito");
        assert_eq!(mojito.ingredients.len(), 5);
        assert!(catalog.get_by_id("unknown").is_none());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = Catalog::builtin();
        let hits = ids(&catalog.search("MENTHE"));
        assert!(hits.contains(&"mojito".to_string()));
        assert!(hits.contains(&"virgin-mojito".to_string()));
        assert!(catalog.search("introuvable-xyz").is_empty());
    }

    #[test]
    fn test_by_category_mappings() {
        let catalog = Catalog::builtin();

        let rhum = ids(&catalog.by_category("rhum"));
        for id in ["mojito", "daiquiri", "pina-colada", "mai-tai", "long-island", "rhum-coca"] {
            assert!(rhum.contains(&id.to_string()), "missing {}", id);
        }

        let whisky = ids(&catalog.by_category("whisky"));
        assert_eq!(whisky, vec!["old-fashioned", "manhattan"]);

        let soft = ids(&catalog.by_category(NON_ALCOHOLIC_CATEGORY));
        assert_eq!(soft, vec!["virgin-mojito", "shirley-temple"]);

        // unknown ids match the recipe category literally
        assert_eq!(ids(&catalog.by_category("aperitif")), vec!["aperol-spritz"]);
    }

    #[test]
    fn test_suggestions_prefix_first() {
        let catalog = Catalog::builtin();
        assert!(catalog.suggestions(" m ", 5).is_empty());

        let hits = catalog.suggestions("mo", 5);
        let names: Vec<&str> = hits.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names[0], "Mojito");
        assert!(names.iter().any(|n| n.to_lowercase().contains("moscow")));
        // "Virgin Mojito" only contains the query, so it comes after the prefix hits
        let virgin = names.iter().position(|n| n.starts_with("Virgin")).unwrap();
        assert!(virgin >= 2);

        assert_eq!(catalog.suggestions("mo", 1).len(), 1);
    }

    #[test]
    fn test_featured_and_categories() {
        let catalog = Catalog::builtin();
        let featured = catalog.featured();
        assert_eq!(featured.len(), 3);
        assert_eq!(featured[0].id, "mojito");

        assert_eq!(catalog.categories().len(), 7);
        assert_eq!(catalog.category("sans-alcool").unwrap().name, "Sans alcool");
        assert!(catalog.category("cidre").is_none());
    }

    #[test]
    fn test_favorite_cocktails_skips_unknown() {
        let catalog = Catalog::builtin();
        let favs = catalog.favorite_cocktails(&["negroni", "gone", "mojito"]);
        assert_eq!(ids(&favs), vec!["negroni", "mojito"]);
    }
}
