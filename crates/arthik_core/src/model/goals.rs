//! Goal definitions

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// How a goal will be funded when it comes due.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FundingType {
    Cash,
    Loan,
}

/// A savings goal as supplied by the caller.
///
/// Amounts are in the base currency; percentages are whole numbers
/// (`12.0` means 12%).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalSpec {
    pub name: String,
    pub target_amount: f64,
    pub target_date: Date,
    pub current_value: f64,
    /// Contribution capacity the household has planned for this goal
    pub monthly_contribution: f64,
    pub expected_return_pct: f64,
    pub volatility_pct: f64,
    pub funding: FundingType,
    /// Grow the target by inflation over the horizon before solving
    #[serde(default)]
    pub inflation_adjust: bool,
}

impl GoalSpec {
    /// Horizon in fractional years from `today` to the target date.
    ///
    /// The target date must be strictly in the future; the result is never
    /// negative.
    pub fn years_to_target(&self, today: Date) -> Result<f64, InputError> {
        if self.target_date <= today {
            return Err(InputError::TargetDateNotInFuture {
                target: self.target_date,
                today,
            });
        }
        let days = (self.target_date - today).get_days();
        Ok(f64::from(days) / 365.25)
    }
}
