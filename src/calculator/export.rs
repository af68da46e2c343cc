//! Plain-text shopping list.

use serde::Serialize;

use super::summary::IngredientSummaryEntry;
use crate::pricing::{ml_for_ordering, to_display};

/// Download name for the exported list
pub const SHOPPING_LIST_FILENAME: &str = "liste_ingredients_cocktails.txt";

/// Text of an export with nothing selected
pub const EMPTY_LIST_PLACEHOLDER: &str = "Aucun ingrédient sélectionné";

const HEADER: [&str; 2] = ["Liste des ingrédients:", "========================"];

/// Shopping-list sections, in print order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShoppingCategory {
    StrongAlcohol,
    Liqueurs,
    Juices,
    Syrups,
    Bitters,
    Garnish,
    Other,
}

impl ShoppingCategory {
    pub const ALL: [ShoppingCategory; 7] = [
        Self::StrongAlcohol,
        Self::Liqueurs,
        Self::Juices,
        Self::Syrups,
        Self::Bitters,
        Self::Garnish,
        Self::Other,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::StrongAlcohol => "ALCOOLS FORTS",
            Self::Liqueurs => "LIQUEURS ET VINS",
            Self::Juices => "JUS ET SODAS",
            Self::Syrups => "SIROPS ET SUCRES",
            Self::Bitters => "AMERS ET BITTERS",
            Self::Garnish => "GARNITURES",
            Self::Other => "AUTRES INGRÉDIENTS",
        }
    }

    fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::StrongAlcohol => &[
                "vodka", "gin", "rhum", "rum", "whisky", "whiskey", "bourbon", "tequila",
                "cognac", "brandy", "scotch", "mezcal", "absinthe", "eau-de-vie", "rye",
            ],
            Self::Liqueurs => &[
                "liqueur", "crème de", "cointreau", "triple sec", "vermouth", "porto", "vin",
                "champagne", "prosecco", "amaretto", "baileys", "kahlua", "grand marnier",
                "chartreuse", "benedictine", "cherry heering", "maraschino", "aperol", "campari",
            ],
            Self::Juices => &[
                "jus", "juice", "citron", "lime", "orange", "ananas", "pineapple", "cranberry",
                "tomate", "pomme", "pamplemousse", "grapefruit", "cola", "soda", "tonic",
                "ginger ale", "ginger beer", "eau gazeuse", "perrier", "schweppes",
            ],
            Self::Syrups => &[
                "sirop", "syrup", "grenadine", "orgeat", "sucre", "sugar", "miel", "honey",
                "agave", "érable", "maple", "gomme", "canne",
            ],
            Self::Bitters => &["bitter", "angostura", "peychaud", "orange bitter", "amer"],
            Self::Garnish => &[
                "zeste", "tranche", "rondelle", "twist", "feuille", "menthe", "mint", "basilic",
                "cerise", "cherry", "olive", "oignon", "citron vert", "lime", "sel", "salt",
                "poivre", "pepper", "cannelle", "muscade", "glace", "ice",
            ],
            Self::Other => &[],
        }
    }

    /// First section with a keyword in the lowercase name
    pub fn classify(name: &str) -> Self {
        let lower = name.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.keywords().iter().any(|k| lower.contains(k)))
            .unwrap_or(Self::Other)
    }
}

/// Render the summary as the downloadable shopping list
pub fn export_list(summary: &[IngredientSummaryEntry]) -> String {
    if summary.is_empty() {
        return EMPTY_LIST_PLACEHOLDER.to_string();
    }

    let mut sections: Vec<Vec<(f64, &IngredientSummaryEntry)>> =
        vec![Vec::new(); ShoppingCategory::ALL.len()];

    for entry in summary {
        let section = ShoppingCategory::classify(&entry.name) as usize;
        sections[section].push((ml_for_ordering(entry.quantity, &entry.unit), entry));
    }

    let mut lines: Vec<String> = HEADER.iter().map(|s| s.to_string()).collect();

    for (category, mut entries) in ShoppingCategory::ALL.into_iter().zip(sections) {
        if entries.is_empty() {
            continue;
        }
        // stable, so equal volumes keep summary order
        entries.sort_by(|a, b| b.0.total_cmp(&a.0));

        if lines.len() > HEADER.len() {
            lines.push(String::new());
        }
        let title = category.title();
        lines.push(title.to_string());
        lines.push("-".repeat(title.chars().count()));

        for (_, entry) in entries {
            let shown = to_display(entry.quantity, &entry.unit);
            lines.push(format!("{}: {:.2} {}", entry.name, shown.quantity, shown.unit));
        }
    }

    lines.join("\n")
}
