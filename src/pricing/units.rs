//! Unit conversion tables
//!
//! Two tables coexist. The centiliter table drives volume aggregation
//! (total volume, alcohol share, calories); the milliliter table drives
//! shopping-list display and ordering. Lookups are exact and case-sensitive.

use serde::{Deserialize, Serialize};

// ============================================================================
// Volume Aggregation Factors (to centiliters)
// ============================================================================

/// Centiliters per fluid ounce (rounded, bar measure)
pub const CL_PER_OZ: f64 = 3.0;
/// Centiliters per dash of bitters
pub const CL_PER_DASH: f64 = 0.05;
/// Centiliters per teaspoon
pub const CL_PER_TSP: f64 = 0.5;
/// Centiliters per tablespoon
pub const CL_PER_TBSP: f64 = 1.5;
/// Centiliters per whole fruit or garnish piece
pub const CL_PER_PIECE: f64 = 3.0;
/// Centiliters per glass
pub const CL_PER_GLASS: f64 = 15.0;
/// Centiliters per cup
pub const CL_PER_CUP: f64 = 25.0;

/// Get the centiliter factor for a unit used in volume aggregation
///
/// Unknown units (and the empty unit) yield 0, which removes them from
/// volume-based figures while their price and calories still count.
pub fn cl_per_unit(unit: &str) -> f64 {
    match unit {
        "ml" => 0.1,
        "cl" => 1.0,
        "oz" => CL_PER_OZ,
        "dash" | "dashes" | "trait" => CL_PER_DASH,
        "feuilles" => 0.05,
        "pièce" => CL_PER_PIECE,
        "cuillère à café" | "cuillères à café" => CL_PER_TSP,
        "cuillère à soupe" | "cuillères à soupe" => CL_PER_TBSP,
        "gouttes" | "pincée" => 0.01,
        "verre" => CL_PER_GLASS,
        "tasse" => CL_PER_CUP,
        "zeste" => 0.1,
        _ => 0.0,
    }
}

/// Convert a quantity to centiliters using the aggregation table
pub fn to_cl(quantity: f64, unit: &str) -> f64 {
    quantity * cl_per_unit(unit)
}

// ============================================================================
// Display Factors (to milliliters)
// ============================================================================

/// Get the milliliter factor for a unit, if the display table knows it
pub fn ml_per_unit(unit: &str) -> Option<f64> {
    match unit {
        "ml" => Some(1.0),
        "cl" => Some(10.0),
        "l" => Some(1000.0),
        "oz" => Some(30.0),
        "dash" | "dashes" | "trait" => Some(0.5),
        "gouttes" => Some(0.1),
        "cuillère à café" | "cuillères à café" => Some(5.0),
        "cuillère à soupe" | "cuillères à soupe" => Some(15.0),
        _ => None,
    }
}

/// Milliliter volume used to order shopping-list lines
///
/// Units outside the display table count one milliliter per unit.
pub fn ml_for_ordering(quantity: f64, unit: &str) -> f64 {
    quantity * ml_per_unit(unit).unwrap_or(1.0)
}

/// A quantity expressed in the unit it should be displayed with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayQuantity {
    pub quantity: f64,
    pub unit: String,
}

/// Pick a display unit for a quantity
///
/// Above one liter the result is in liters, above 100 ml in centiliters,
/// otherwise in milliliters. Units the display table does not know pass
/// through untouched.
pub fn to_display(quantity: f64, unit: &str) -> DisplayQuantity {
    let Some(factor) = ml_per_unit(unit) else {
        return DisplayQuantity {
            quantity,
            unit: unit.to_string(),
        };
    };

    let ml = quantity * factor;
    if ml > 1000.0 {
        DisplayQuantity { quantity: ml / 1000.0, unit: "l".to_string() }
    } else if ml > 100.0 {
        DisplayQuantity { quantity: ml / 10.0, unit: "cl".to_string() }
    } else {
        DisplayQuantity { quantity: ml, unit: "ml".to_string() }
    }
}
