//! Present/future value conversions and category-specific inflation
//!
//! Rates are whole-number percents compounded annually. Different expense
//! categories inflate at very different rates (education and healthcare far
//! outrun headline CPI), so goal targets can be grown by category.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// `present * (1 + r)^years`
#[must_use]
pub fn future_value(present_value: f64, years: f64, rate_pct: f64) -> f64 {
    present_value * (1.0 + rate_pct / 100.0).powf(years)
}

/// Inverse of `future_value`: discounts back to today.
#[must_use]
pub fn present_value(future_value: f64, years: f64, rate_pct: f64) -> f64 {
    future_value / (1.0 + rate_pct / 100.0).powf(years)
}

/// Expense category for inflation lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Education,
    Healthcare,
    Rent,
    Lifestyle,
    General,
}

/// Per-category annual inflation rates with a general fallback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryInflation {
    rates: FxHashMap<ExpenseCategory, f64>,
    general_rate_pct: f64,
}

impl Default for CategoryInflation {
    /// Long-run Indian category rates
    fn default() -> Self {
        let mut rates = FxHashMap::default();
        rates.insert(ExpenseCategory::Education, 10.0);
        rates.insert(ExpenseCategory::Healthcare, 12.0);
        rates.insert(ExpenseCategory::Rent, 8.0);
        rates.insert(ExpenseCategory::Lifestyle, 7.0);
        Self {
            rates,
            general_rate_pct: 6.0,
        }
    }
}

impl CategoryInflation {
    pub fn new(general_rate_pct: f64) -> Self {
        Self {
            rates: FxHashMap::default(),
            general_rate_pct,
        }
    }

    pub fn set_rate(&mut self, category: ExpenseCategory, rate_pct: f64) {
        self.rates.insert(category, rate_pct);
    }

    /// Category rate, falling back to the general rate.
    #[must_use]
    pub fn rate_for(&self, category: ExpenseCategory) -> f64 {
        self.rates
            .get(&category)
            .copied()
            .unwrap_or(self.general_rate_pct)
    }

    #[must_use]
    pub fn general_rate(&self) -> f64 {
        self.general_rate_pct
    }

    /// Grow `amount` by the category's rate over `years`.
    #[must_use]
    pub fn inflate(&self, amount: f64, category: ExpenseCategory, years: f64) -> f64 {
        future_value(amount, years, self.rate_for(category))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_future_value_compounds_annually() {
        let fv = future_value(100_000.0, 2.0, 10.0);
        assert!((fv - 121_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_round_trip() {
        for &(x, y, r) in &[(1.0, 0.0, 0.0), (50_000.0, 7.5, 6.0), (1e7, 30.0, 12.0)] {
            let back = present_value(future_value(x, y, r), y, r);
            assert!((back - x).abs() < x * 1e-12, "{x} {y} {r} -> {back}");
        }
    }

    #[test]
    fn test_zero_rate_is_identity() {
        assert_eq!(future_value(1_234.5, 10.0, 0.0), 1_234.5);
        assert_eq!(present_value(1_234.5, 10.0, 0.0), 1_234.5);
    }

    #[test]
    fn test_category_fallback() {
        let inflation = CategoryInflation::default();
        assert_eq!(inflation.rate_for(ExpenseCategory::Education), 10.0);
        assert_eq!(inflation.rate_for(ExpenseCategory::General), 6.0);

        let mut custom = CategoryInflation::new(5.0);
        assert_eq!(custom.rate_for(ExpenseCategory::Healthcare), 5.0);
        custom.set_rate(ExpenseCategory::Healthcare, 11.0);
        assert_eq!(custom.rate_for(ExpenseCategory::Healthcare), 11.0);
    }
}
