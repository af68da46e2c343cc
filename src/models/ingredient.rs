//! Ingredient models
//!
//! Catalog ingredients arrive either as a bare name or as a structured
//! record; both become a `RawIngredient` before pricing.

use serde::{Deserialize, Serialize};

/// Quantity as written in a recipe: a number or free text ("6 cl", "Top")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawQuantity {
    Number(f64),
    Text(String),
}

impl RawQuantity {
    /// Whether a quantity was really given. Zero and blank text count as absent.
    pub fn is_present(&self) -> bool {
        match self {
            RawQuantity::Number(n) => *n != 0.0 && !n.is_nan(),
            RawQuantity::Text(s) => !s.is_empty(),
        }
    }

    /// Numeric value, reading the leading number of text quantities.
    /// Text without a leading number reads as 0.
    pub fn value(&self) -> f64 {
        let value = match self {
            RawQuantity::Number(n) => *n,
            RawQuantity::Text(s) => parse_leading_number(s).unwrap_or(0.0),
        };
        if value.is_finite() {
            value.max(0.0)
        } else {
            0.0
        }
    }
}

/// Parse the longest numeric prefix of a string ("6 cl" -> 6, "1.5cl" -> 1.5)
pub fn parse_leading_number(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if frac_end > frac_start || digits > 0 {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    // optional exponent, only if followed by digits
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}

/// A recipe ingredient as emitted by the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawIngredient {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<RawQuantity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl RawIngredient {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: None,
            unit: None,
        }
    }

    pub fn new(name: impl Into<String>, quantity: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: Some(RawQuantity::Number(quantity)),
            unit: Some(unit.into()),
        }
    }
}

/// Catalog ingredient representation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CatalogIngredient {
    Name(String),
    Structured(RawIngredient),
}

impl CatalogIngredient {
    pub fn name(&self) -> &str {
        match self {
            CatalogIngredient::Name(name) => name,
            CatalogIngredient::Structured(raw) => &raw.name,
        }
    }
}

impl From<CatalogIngredient> for RawIngredient {
    fn from(ingredient: CatalogIngredient) -> Self {
        match ingredient {
            CatalogIngredient::Name(name) => RawIngredient::named(name),
            CatalogIngredient::Structured(raw) => raw,
        }
    }
}

impl From<&CatalogIngredient> for RawIngredient {
    fn from(ingredient: &CatalogIngredient) -> Self {
        ingredient.clone().into()
    }
}

/// A priced, calorie-annotated ingredient
///
/// `price` is per 10 ml (one centiliter); `calories` covers the whole
/// `quantity` in `unit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricedIngredient {
    pub id: String,
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub price: f64,
    pub calories: f64,
    pub is_alcoholic: bool,
}

impl PricedIngredient {
    /// Cost of this ingredient for one cocktail
    pub fn cost(&self) -> f64 {
        self.quantity / 10.0 * self.price
    }

    /// Copy with the quantity multiplied, for display of a multi-serving batch
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            quantity: self.quantity * factor,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_leading_number() {
        assert_eq!(parse_leading_number("6"), Some(6.0));
        assert_eq!(parse_leading_number("6 cl"), Some(6.0));
        assert_eq!(parse_leading_number(" 1.5cl"), Some(1.5));
        assert_eq!(parse_leading_number(".5"), Some(0.5));
        assert_eq!(parse_leading_number("2e1"), Some(20.0));
        assert_eq!(parse_leading_number("2e"), Some(2.0));
        assert_eq!(parse_leading_number("Top"), None);
        assert_eq!(parse_leading_number(""), None);
        assert_eq!(parse_leading_number("."), None);
    }

    #[test]
    fn test_raw_quantity_value() {
        assert_eq!(RawQuantity::Text("abc".into()).value(), 0.0);
        assert_eq!(RawQuantity::Text("4".into()).value(), 4.0);
        assert_eq!(RawQuantity::Number(-3.0).value(), 0.0);
        assert!(!RawQuantity::Number(0.0).is_present());
        assert!(!RawQuantity::Text(String::new()).is_present());
        assert!(RawQuantity::Text("Top".into()).is_present());
    }

    #[test]
    fn test_catalog_ingredient_deserializes_both_shapes() {
        let json = r#"["Rondelle d'orange", {"name": "Gin", "quantity": "5", "unit": "cl"}]"#;
        let parsed: Vec<CatalogIngredient> = serde_json::from_str(json).unwrap();
        assert_eq!(parsed[0], CatalogIngredient::Name("Rondelle d'orange".into()));
        let raw: RawIngredient = parsed[1].clone().into();
        assert_eq!(raw.name, "Gin");
        assert_eq!(raw.quantity, Some(RawQuantity::Text("5".into())));
        assert_eq!(raw.unit.as_deref(), Some("cl"));
    }

    #[test]
    fn test_scaled_does_not_touch_original() {
        let ing = PricedIngredient {
            id: "a".into(),
            name: "Gin".into(),
            quantity: 5.0,
            unit: "cl".into(),
            price: 0.3,
            calories: 300.0,
            is_alcoholic: true,
        };
        let doubled = ing.scaled(2.0);
        assert_eq!(doubled.quantity, 10.0);
        assert_eq!(ing.quantity, 5.0);
        assert_eq!(doubled.id, ing.id);
        assert!((ing.cost() - 0.15).abs() < 1e-12);
    }
}
