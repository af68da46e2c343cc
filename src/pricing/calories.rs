//! Calorie estimation
//!
//! Keyword table of calories per centiliter (10 ml). Entries are ordered
//! so that specific names are tried before the generic key they contain,
//! e.g. "ginger ale" before "gin" and "cointreau" before "eau".
//!
//! The first matching key wins, so this order is deliberate: moving "gin"
//! above "ginger ale" or "jus" above "jus de citron" would give sodas and
//! lemon juice the calories of a spirit or of orange juice.

use super::price::normalize_name;
use super::units::to_cl;

/// Calories per centiliter when nothing matches
pub const DEFAULT_CALORIES_PER_CL: f64 = 10.0;

const CALORIES_PER_CL: &[(&str, f64)] = &[
    // Spirits and wines
    ("rhum", 65.0),
    ("vodka", 55.0),
    ("ginger ale", 9.0),
    ("ginger beer", 9.0),
    ("gin", 60.0),
    ("whisky", 65.0),
    ("whiskey", 65.0),
    ("bourbon", 65.0),
    ("tequila", 65.0),
    ("cognac", 70.0),
    ("brandy", 70.0),
    ("liqueur", 80.0),
    ("triple sec", 80.0),
    ("cointreau", 80.0),
    ("vermouth", 40.0),
    ("porto", 45.0),
    ("champagne", 20.0),
    ("prosecco", 20.0),
    ("bière", 10.0),
    ("vin", 18.0),
    // Syrups and sweeteners
    ("sirop", 85.0),
    ("sucre", 40.0),
    ("miel", 35.0),
    // Juices and sodas
    ("jus d'orange", 12.0),
    ("jus de citron", 5.0),
    ("jus de lime", 5.0),
    ("jus de cranberry", 12.0),
    ("jus d'ananas", 14.0),
    ("jus de tomate", 5.0),
    ("jus de pamplemousse", 10.0),
    ("jus", 12.0),
    ("coca", 11.0),
    ("soda", 10.0),
    ("tonic", 8.0),
    // Dairy
    ("crème de coco", 40.0),
    ("lait de coco", 25.0),
    ("lait", 15.0),
    ("crème", 35.0),
    ("yaourt", 17.0),
    // Fresh produce
    ("citron vert", 3.0),
    ("citron", 4.0),
    ("lime", 3.0),
    ("orange", 15.0),
    ("fraise", 5.0),
    ("menthe", 1.0),
    ("concombre", 2.0),
    // Zero or near zero
    ("eau", 0.0),
    ("glace", 0.0),
    ("sel", 0.0),
    ("poivre", 0.0),
    ("épice", 1.0),
];

/// Second pass for spirit and liqueur families the table spells differently
const FAMILY_CALORIES: &[(&[&str], f64)] = &[
    (&["rhum", "rum"], 65.0),
    (&["vodka"], 55.0),
    (&["gin"], 60.0),
    (&["whisky", "whiskey"], 65.0),
    (&["tequila"], 65.0),
    (&["liqueur", "triple sec", "cointreau"], 80.0),
    (&["sirop"], 85.0),
    (&["jus"], 12.0),
    (&["crème"], 35.0),
];

/// Calories per centiliter for an ingredient name
pub fn calories_per_cl(ingredient_name: &str) -> f64 {
    let name = normalize_name(ingredient_name);

    if let Some(&(_, calories)) = CALORIES_PER_CL.iter().find(|(key, _)| name.contains(key)) {
        return calories;
    }

    FAMILY_CALORIES
        .iter()
        .find(|(keys, _)| keys.iter().any(|k| name.contains(k)))
        .map(|(_, calories)| *calories)
        .unwrap_or(DEFAULT_CALORIES_PER_CL)
}

/// Estimated calories for a quantity of an ingredient
///
/// Units without a centiliter factor contribute a volume of zero, and so
/// zero calories.
pub fn resolve_calories(ingredient_name: &str, quantity: f64, unit: &str) -> f64 {
    (calories_per_cl(ingredient_name) * to_cl(quantity, unit)).max(0.0)
}
