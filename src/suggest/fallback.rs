//! Rule-based cocktail suggestions.
//!
//! Keyword heuristics over the event description: event type, headcount,
//! mood, budget and preferred spirit. Deterministic for a given prompt and catalog.

use async_trait::async_trait;

use super::{CocktailSuggestion, SuggestError, SuggestionProvider, SuggestionResponse};
use crate::catalog::Catalog;

const DINNER_MESSAGE: &str = "Pour votre dîner, j'ai sélectionné des cocktails élégants qui accompagneront parfaitement votre repas. Savourez ces mélanges raffinés!";
const BIG_PARTY_MESSAGE: &str = "Pour votre grande fête, voici une sélection de cocktails qui raviront tous vos invités et créeront une ambiance festive inoubliable!";
const PARTY_MESSAGE: &str = "Pour votre fête, j'ai choisi des cocktails qui plairont à tous et créeront une ambiance conviviale et détendue.";
const EXOTIC_SUFFIX: &str = " Ces cocktails aux saveurs exotiques vous transporteront sous les tropiques.";
const TECHNO_SUFFIX: &str = " Ces cocktails colorés et énergisants accompagneront parfaitement votre ambiance festive.";

/// Substitute for ids the catalog does not know
const SUBSTITUTE_ID: &str = "mojito";
const SUBSTITUTE_NAME: &str = "Mojito";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Spirit {
    Gin,
    Vodka,
    Rhum,
    Tequila,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mood {
    Exotic,
    Techno,
    Neutral,
}

/// What the event description asks for
#[derive(Debug, Clone, Copy)]
struct EventProfile {
    dinner: bool,
    big_party: bool,
    crowd: bool,
    high_budget: bool,
    mood: Mood,
    spirit: Spirit,
}

impl EventProfile {
    fn from_prompt(prompt: &str) -> Self {
        let lower = prompt.to_lowercase();
        let has = |needle: &str| lower.contains(needle);

        let mood = if has("exotique") {
            Mood::Exotic
        } else if has("techno") {
            Mood::Techno
        } else {
            Mood::Neutral
        };

        // gin > vodka > rhum > tequila; "mix" or nothing means no preference
        let spirit = if has("gin") {
            Spirit::Gin
        } else if has("vodka") {
            Spirit::Vodka
        } else if has("rhum") {
            Spirit::Rhum
        } else if has("tequila") {
            Spirit::Tequila
        } else {
            Spirit::Other
        };

        Self {
            dinner: has("dîner"),
            big_party: has("grosse fête"),
            crowd: prompt.contains("20-30") || prompt.contains("40-60"),
            high_budget: has("budget élevé") || prompt.contains("80-120") || prompt.contains("150-250"),
            mood,
            spirit,
        }
    }

    /// (id, name, servings for a crowd, servings otherwise)
    fn picks(&self) -> &'static [(&'static str, &'static str, u32, u32)] {
        if self.dinner {
            match self.spirit {
                Spirit::Gin => &[("negroni", "Negroni", 10, 5), ("gin-tonic", "Gin Tonic", 12, 6)],
                Spirit::Vodka => &[
                    ("cosmopolitan", "Cosmopolitan", 8, 4),
                    ("moscow-mule", "Moscow Mule", 10, 5),
                ],
                Spirit::Rhum => &[("daiquiri", "Daiquiri", 8, 4), ("mojito", "Mojito", 10, 5)],
                Spirit::Tequila => &[("margarita", "Margarita", 8, 4), ("paloma", "Paloma", 8, 4)],
                Spirit::Other => &[
                    ("old-fashioned", "Old Fashioned", 8, 4),
                    ("manhattan", "Manhattan", 8, 4),
                    ("negroni", "Negroni", 6, 3),
                ],
            }
        } else if !self.big_party {
            match self.mood {
                Mood::Exotic => &[
                    ("pina-colada", "Piña Colada", 15, 8),
                    ("mai-tai", "Mai Tai", 12, 6),
                    ("mojito", "Mojito", 15, 8),
                ],
                Mood::Techno => &[
                    ("long-island", "Long Island Iced Tea", 12, 6),
                    ("blue-lagoon", "Blue Lagoon", 12, 6),
                    ("cosmopolitan", "Cosmopolitan", 10, 5),
                ],
                Mood::Neutral => &[
                    ("mojito", "Mojito", 15, 8),
                    ("margarita", "Margarita", 12, 6),
                    ("aperol-spritz", "Aperol Spritz", 12, 6),
                ],
            }
        } else if self.high_budget {
            &[
                ("mojito", "Mojito", 30, 18),
                ("pina-colada", "Piña Colada", 25, 15),
                ("margarita", "Margarita", 25, 15),
                ("cosmopolitan", "Cosmopolitan", 20, 12),
                ("sex-on-the-beach", "Sex on the Beach", 20, 12),
            ]
        } else {
            &[
                ("mojito", "Mojito", 25, 15),
                ("gin-tonic", "Gin Tonic", 20, 12),
                ("vodka-orange", "Vodka Orange", 25, 15),
                ("rhum-coca", "Rhum Coca", 25, 15),
            ]
        }
    }

    fn message(&self) -> String {
        let mut message = if self.dinner {
            DINNER_MESSAGE
        } else if self.big_party {
            BIG_PARTY_MESSAGE
        } else {
            PARTY_MESSAGE
        }
        .to_string();

        match self.mood {
            Mood::Exotic => message.push_str(EXOTIC_SUFFIX),
            Mood::Techno => message.push_str(TECHNO_SUFFIX),
            Mood::Neutral => {}
        }
        message
    }
}

const CLASSICS: &[(&str, &str, u32, u32)] = &[
    ("mojito", "Mojito", 15, 8),
    ("margarita", "Margarita", 12, 6),
    ("gin-tonic", "Gin Tonic", 10, 5),
];

/// Append a pick if the catalog knows it, or the substitute when the catalog has one
fn push_pick(list: &mut Vec<CocktailSuggestion>, catalog: &Catalog, id: &str, name: &str, quantite: u32) {
    let known = !catalog.search(id).is_empty() || !catalog.search(name).is_empty();

    if known {
        list.push(CocktailSuggestion::new(id, name, quantite));
    } else if catalog.get_by_id(SUBSTITUTE_ID).is_some() {
        tracing::debug!("Unknown cocktail {} replaced by {}", id, SUBSTITUTE_ID);
        list.push(CocktailSuggestion::new(SUBSTITUTE_ID, SUBSTITUTE_NAME, quantite));
    }
}

fn push_all(
    list: &mut Vec<CocktailSuggestion>,
    catalog: &Catalog,
    picks: &[(&str, &str, u32, u32)],
    crowd: bool,
) {
    for &(id, name, crowd_qty, small_qty) in picks {
        let quantite = if crowd { crowd_qty } else { small_qty };
        push_pick(list, catalog, id, name, quantite);
    }
}

/// Suggestions for an event description, without any remote call
pub fn generate(catalog: &Catalog, prompt: &str) -> SuggestionResponse {
    let profile = EventProfile::from_prompt(prompt);

    let mut cocktails = Vec::new();
    push_all(&mut cocktails, catalog, profile.picks(), profile.crowd);

    if cocktails.is_empty() {
        push_all(&mut cocktails, catalog, CLASSICS, profile.crowd);
    }

    SuggestionResponse {
        cocktails,
        message: profile.message(),
    }
}

/// Provider that answers with [`generate`]
#[derive(Debug)]
pub struct RuleBasedProvider {
    catalog: &'static Catalog,
}

impl RuleBasedProvider {
    pub fn new(catalog: &'static Catalog) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl SuggestionProvider for RuleBasedProvider {
    async fn complete(&self, _system: &str, prompt: &str) -> Result<String, SuggestError> {
        serde_json::to_string(&generate(self.catalog, prompt))
            .map_err(|e| SuggestError::MalformedResponse(e.to_string()))
    }

    fn provider_name(&self) -> &'static str {
        "fallback"
    }

    fn model_name(&self) -> &str {
        "rules"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids_and_quantities(response: &SuggestionResponse) -> Vec<(&str, u32)> {
        response
            .cocktails
            .iter()
            .map(|c| (c.id.as_str(), c.quantite))
            .collect()
    }

    #[test]
    fn test_dinner_with_gin() {
        let response = generate(Catalog::builtin(), "Un dîner entre amis, on aime le gin");
        assert_eq!(ids_and_quantities(&response), vec![("negroni", 5), ("gin-tonic", 6)]);
        assert_eq!(response.message, DINNER_MESSAGE);
    }

    #[test]
    fn test_dinner_without_preference_for_a_crowd() {
        let response = generate(Catalog::builtin(), "dîner, 20-30 personnes, mix");
        assert_eq!(
            ids_and_quantities(&response),
            vec![("old-fashioned", 8), ("manhattan", 8), ("negroni", 6)]
        );
    }

    #[test]
    fn test_exotic_party() {
        let response = generate(Catalog::builtin(), "Soirée exotique");
        assert_eq!(
            ids_and_quantities(&response),
            vec![("pina-colada", 8), ("mai-tai", 6), ("mojito", 8)]
        );
        assert_eq!(response.message, format!("{}{}", PARTY_MESSAGE, EXOTIC_SUFFIX));
    }

    #[test]
    fn test_techno_suffix() {
        let response = generate(Catalog::builtin(), "fête techno 40-60");
        assert_eq!(response.cocktails[0], CocktailSuggestion::new("long-island", "Long Island Iced Tea", 12));
        assert!(response.message.ends_with(TECHNO_SUFFIX));
    }

    #[test]
    fn test_big_party_budgets() {
        let rich = generate(Catalog::builtin(), "Grosse fête, budget élevé");
        assert_eq!(rich.cocktails.len(), 5);
        assert_eq!(rich.cocktails[0].quantite, 18);
        assert_eq!(rich.message, BIG_PARTY_MESSAGE);

        let cheap = generate(Catalog::builtin(), "grosse fête 40-60");
        assert_eq!(
            ids_and_quantities(&cheap),
            vec![("mojito", 25), ("gin-tonic", 20), ("vodka-orange", 25), ("rhum-coca", 25)]
        );
    }

    #[test]
    fn test_unknown_cocktails_are_substituted() {
        let catalog = Catalog::from_json(
            r#"[{"id": "mojito", "name": "Mojito", "ingredients": ["Rhum blanc"]}]"#,
        )
        .unwrap();
        let response = generate(&catalog, "dîner tequila");
        assert_eq!(ids_and_quantities(&response), vec![("mojito", 4), ("mojito", 4)]);
    }

    #[test]
    fn test_empty_catalog_gives_no_cocktails() {
        let catalog = Catalog::default();
        let response = generate(&catalog, "dîner");
        assert!(response.cocktails.is_empty());
        assert_eq!(response.message, DINNER_MESSAGE);
    }

    #[tokio::test]
    async fn test_rule_based_provider_reply_parses() {
        let provider = RuleBasedProvider::new(Catalog::builtin());
        let raw = provider.complete("", "dîner vodka").await.unwrap();
        let parsed = super::super::parse_response(&raw).unwrap();
        assert_eq!(parsed, generate(Catalog::builtin(), "dîner vodka"));
    }
}
