use std::fmt;

use jiff::civil::Date;

/// Errors for inputs the validation layer should have rejected.
///
/// The engines never panic or loop on bad input; anything that would divide
/// by zero or iterate forever comes back as one of these instead.
#[derive(Debug, Clone)]
pub enum InputError {
    /// Monte Carlo was asked for zero trials
    NonPositiveIterations,
    NegativeAmount {
        what: &'static str,
        value: f64,
    },
    /// A horizon of zero or negative years where a forward-looking formula needs time to work with
    NonPositiveHorizon {
        years: f64,
    },
    TargetDateNotInFuture {
        target: Date,
        today: Date,
    },
    /// The installment does not even cover the first month's interest, so the
    /// balance can never reach zero
    InstallmentBelowInterest {
        debt: String,
        installment: f64,
        first_month_interest: f64,
    },
    /// A tax regime with no slabs cannot price any income
    EmptySlabTable,
    InvalidDistribution {
        mean: f64,
        std_dev: f64,
        reason: &'static str,
    },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::NonPositiveIterations => {
                write!(f, "iteration count must be at least 1")
            }
            InputError::NegativeAmount { what, value } => {
                write!(f, "{what} must not be negative (got {value})")
            }
            InputError::NonPositiveHorizon { years } => {
                write!(f, "horizon must be positive (got {years} years)")
            }
            InputError::TargetDateNotInFuture { target, today } => {
                write!(f, "target date {target} is not after {today}")
            }
            InputError::InstallmentBelowInterest {
                debt,
                installment,
                first_month_interest,
            } => {
                write!(
                    f,
                    "debt {debt:?}: installment {installment} cannot cover first month's interest {first_month_interest}"
                )
            }
            InputError::EmptySlabTable => write!(f, "tax regime has an empty slab table"),
            InputError::InvalidDistribution {
                mean,
                std_dev,
                reason,
            } => {
                write!(
                    f,
                    "invalid return distribution (mean={mean}, std_dev={std_dev}): {reason}"
                )
            }
        }
    }
}

impl std::error::Error for InputError {}

pub type Result<T> = std::result::Result<T, InputError>;
