//! Cost and calorie totals
//!
//! Shared by selected recipes, per-recipe results and grand totals.

use serde::{Deserialize, Serialize};

/// Accumulated cost (EUR) and calories
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub price: f64,
    pub calories: f64,
}

impl Totals {
    pub fn zero() -> Self {
        Self::default()
    }

    /// Scale both figures by a multiplier
    pub fn scale(&self, multiplier: f64) -> Self {
        Self {
            price: self.price * multiplier,
            calories: self.calories * multiplier,
        }
    }

    /// Round price to cents and calories to whole units
    pub fn rounded(&self) -> Self {
        Self {
            price: round_to(self.price, 2),
            calories: self.calories.round(),
        }
    }
}

impl std::ops::Add for Totals {
    type Output = Totals;

    fn add(self, other: Totals) -> Totals {
        Totals {
            price: self.price + other.price,
            calories: self.calories + other.calories,
        }
    }
}

impl std::ops::Sub for Totals {
    type Output = Totals;

    fn sub(self, other: Totals) -> Totals {
        Totals {
            price: self.price - other.price,
            calories: self.calories - other.calories,
        }
    }
}

impl std::ops::Mul<f64> for Totals {
    type Output = Totals;

    fn mul(self, multiplier: f64) -> Totals {
        self.scale(multiplier)
    }
}

impl std::iter::Sum for Totals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Totals::zero(), |acc, t| acc + t)
    }
}

/// Round half away from zero to a number of decimals
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_and_scale() {
        let a = Totals { price: 1.25, calories: 100.0 };
        let b = Totals { price: 0.75, calories: 50.0 };
        let total: Totals = vec![a, b].into_iter().sum();
        assert_eq!(total, Totals { price: 2.0, calories: 150.0 });
        assert_eq!(a * 2.0, Totals { price: 2.5, calories: 200.0 });
        assert_eq!(total - b, a);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.234, 2), 1.23);
        assert_eq!(round_to(1.235_1, 2), 1.24);
        assert_eq!(round_to(12.34, 1), 12.3);
        assert_eq!(round_to(2.5, 0), 3.0);
    }
}
