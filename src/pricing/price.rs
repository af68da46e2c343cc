//! Price resolution
//!
//! Turns a free-text ingredient name into an estimated price per 10 ml.
//! Tiers are tried in order and the first hit wins: exact name, best
//! partial match, category average, hand-tuned garnish prices, then a
//! flat default.

use serde::Serialize;
use std::collections::HashMap;
use std::sync::LazyLock;

use super::price_table::{reference_prices, ReferencePriceEntry};

/// Price per 10 ml used when nothing else matches
pub const DEFAULT_PRICE_PER_10ML: f64 = 0.5;

/// Broad product families used for category-average pricing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceCategory {
    Rhum,
    Vodka,
    Gin,
    Whisky,
    Tequila,
    Liqueur,
    Sirop,
    Jus,
    Soda,
    Eau,
    Other,
}

/// Keyword groups in priority order; the first group with a keyword
/// contained in the name decides the category.
const CATEGORY_KEYWORDS: &[(PriceCategory, &[&str])] = &[
    (PriceCategory::Rhum, &["rhum", "rum", "bacardi", "havana", "captain", "agricole"]),
    (
        PriceCategory::Vodka,
        &["vodka", "absolut", "smirnoff", "grey goose", "żubrówka", "poliakov", "sobieski"],
    ),
    (PriceCategory::Gin, &["gin", "bombay", "tanqueray", "gordon", "hendrick"]),
    (
        PriceCategory::Whisky,
        &["whisky", "whiskey", "bourbon", "jack", "jameson", "woodford", "jim beam"],
    ),
    (PriceCategory::Tequila, &["tequila", "cuervo", "don julio"]),
    (
        PriceCategory::Liqueur,
        &["liqueur", "triple sec", "cointreau", "campari", "aperol", "cognac", "hennessy", "brandy"],
    ),
    (PriceCategory::Sirop, &["sirop", "monin", "teisseire", "eyguebelle", "guiot"]),
    (
        PriceCategory::Jus,
        &[
            "jus", "granini", "tropicana", "pago", "pulco", "citron", "orange", "ananas",
            "cranberry", "tomate", "pamplemousse",
        ],
    ),
    (
        PriceCategory::Soda,
        &[
            "soda", "schweppes", "fever tree", "canada dry", "ginger", "tonic", "7up", "sprite",
            "cola", "orangina",
        ],
    ),
    (PriceCategory::Eau, &["eau", "perrier", "san pellegrino"]),
];

/// Hand-tuned prices per 10 ml (or per unit) for garnishes and pantry items
const SPECIAL_PRICES: &[(&str, f64)] = &[
    ("menthe", 0.03),
    ("citron vert", 0.3),
    ("lime", 0.3),
    ("citron", 0.15),
    ("orange", 0.3),
    ("fraise", 0.15),
    ("sucre", 0.05),
    ("sugar", 0.05),
    ("sel", 0.01),
    ("zeste", 0.05),
    ("glace", 0.1),
    ("glaçon", 0.1),
    ("ice", 0.1),
    ("lait", 0.01),
    ("crème", 0.04),
    ("passion", 0.08),
    ("coco", 0.08),
];

/// Lowercase, collapse internal whitespace, trim
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Classify an already-normalized name into a price category
///
/// Returns `None` when no keyword group matches.
pub fn classify(normalized: &str) -> Option<PriceCategory> {
    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| normalized.contains(k)))
        .map(|(category, _)| *category)
}

/// Which tier produced a price
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "tier", rename_all = "snake_case")]
pub enum PriceSource {
    Exact { reference: String },
    Partial { reference: String },
    Category { category: PriceCategory },
    Special { keyword: &'static str },
    Default,
}

/// A resolved price with its provenance
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceMatch {
    pub price_per_10ml: f64,
    pub source: PriceSource,
}

/// Price lookup over a reference table, with indexes built once
#[derive(Debug)]
pub struct PriceResolver {
    entries: Vec<ReferencePriceEntry>,
    normalized_names: Vec<String>,
    exact: HashMap<String, usize>,
    category_averages: HashMap<PriceCategory, f64>,
}

static BUILTIN: LazyLock<PriceResolver> =
    LazyLock::new(|| PriceResolver::new(reference_prices().to_vec()));

impl PriceResolver {
    /// Build the exact-name index and category averages for a table
    pub fn new(entries: Vec<ReferencePriceEntry>) -> Self {
        let normalized_names: Vec<String> = entries
            .iter()
            .map(|e| normalize_name(&e.ingredient_name))
            .collect();

        // Later duplicates win, as with any keyed index
        let exact = normalized_names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();

        let mut buckets: HashMap<PriceCategory, Vec<f64>> = HashMap::new();
        for (entry, name) in entries.iter().zip(&normalized_names) {
            let category = classify(name).unwrap_or(PriceCategory::Other);
            buckets.entry(category).or_default().push(entry.price_per_10ml);
        }

        let category_averages = buckets
            .into_iter()
            .map(|(category, prices)| {
                let avg = prices.iter().sum::<f64>() / prices.len() as f64;
                (category, avg)
            })
            .collect();

        Self {
            entries,
            normalized_names,
            exact,
            category_averages,
        }
    }

    /// The resolver over the embedded reference table
    pub fn builtin() -> &'static PriceResolver {
        &BUILTIN
    }

    /// Mean price per 10 ml for a category; 0.5 when the category is empty
    pub fn category_average(&self, category: PriceCategory) -> f64 {
        self.category_averages
            .get(&category)
            .copied()
            .unwrap_or(DEFAULT_PRICE_PER_10ML)
    }

    /// Resolve a price for an ingredient name. Never fails.
    pub fn resolve(&self, ingredient_name: &str) -> PriceMatch {
        let query = normalize_name(ingredient_name);

        if let Some(&i) = self.exact.get(&query) {
            tracing::debug!("Exact price for '{}'", ingredient_name);
            return PriceMatch {
                price_per_10ml: self.entries[i].price_per_10ml,
                source: PriceSource::Exact {
                    reference: self.entries[i].ingredient_name.clone(),
                },
            };
        }

        if !query.is_empty() {
            if let Some(i) = self.best_partial_match(&query) {
                tracing::debug!(
                    "Partial price for '{}' via '{}'",
                    ingredient_name,
                    self.entries[i].ingredient_name
                );
                return PriceMatch {
                    price_per_10ml: self.entries[i].price_per_10ml,
                    source: PriceSource::Partial {
                        reference: self.entries[i].ingredient_name.clone(),
                    },
                };
            }
        }

        if let Some(category) = classify(&query) {
            tracing::debug!("Category price for '{}' ({:?})", ingredient_name, category);
            return PriceMatch {
                price_per_10ml: self.category_average(category),
                source: PriceSource::Category { category },
            };
        }

        if let Some(&(keyword, price)) = SPECIAL_PRICES.iter().find(|(k, _)| query.contains(k)) {
            return PriceMatch {
                price_per_10ml: price,
                source: PriceSource::Special { keyword },
            };
        }

        tracing::warn!("No price found for '{}', using default", ingredient_name);
        PriceMatch {
            price_per_10ml: DEFAULT_PRICE_PER_10ML,
            source: PriceSource::Default,
        }
    }

    /// Price per 10 ml for an ingredient name
    pub fn price(&self, ingredient_name: &str) -> f64 {
        self.resolve(ingredient_name).price_per_10ml
    }

    /// Highest-scoring reference whose name contains, or is contained in,
    /// the query. Ties keep table order.
    fn best_partial_match(&self, query: &str) -> Option<usize> {
        let query_len = query.chars().count();
        let mut best: Option<(usize, usize)> = None;

        for (i, name) in self.normalized_names.iter().enumerate() {
            let score = if name == query {
                usize::MAX
            } else if query.contains(name.as_str()) {
                2 * name.chars().count()
            } else if name.contains(query) {
                query_len
            } else {
                continue;
            };

            if best.map_or(true, |(_, top)| score > top) {
                best = Some((i, score));
            }
        }

        best.map(|(i, _)| i)
    }
}

/// Resolve a price per 10 ml against the embedded reference table
pub fn resolve_price(ingredient_name: &str) -> f64 {
    PriceResolver::builtin().price(ingredient_name)
}
