//! Debt definitions

use serde::{Deserialize, Serialize};

/// Loan category, used for payoff priority scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanCategory {
    CreditCard,
    Personal,
    Auto,
    Gold,
    Education,
    Mortgage,
    Business,
}

impl LoanCategory {
    /// Revolving/unsecured credit that tends to carry punishing rates
    pub fn is_high_interest(self) -> bool {
        matches!(self, LoanCategory::CreditCard | LoanCategory::Personal)
    }

    /// Categories whose interest is deductible, so early payoff forfeits a benefit
    pub fn has_tax_benefit(self) -> bool {
        matches!(self, LoanCategory::Mortgage | LoanCategory::Education)
    }
}

/// An outstanding debt as supplied by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebtRecord {
    pub name: String,
    pub principal: f64,
    /// Whole-number percent (24.0 means 24% per year)
    pub annual_rate_pct: f64,
    pub monthly_installment: f64,
    pub category: LoanCategory,
}

impl DebtRecord {
    /// Interest accrued in the first month at the contractual rate
    pub fn first_month_interest(&self) -> f64 {
        self.principal * self.annual_rate_pct / 12.0 / 100.0
    }
}

/// Ordering strategy for the optimized payoff schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayoffMethod {
    /// Highest interest rate first
    Avalanche,
    /// Smallest outstanding balance first
    Snowball,
}
