//! Goal solver
//!
//! Annuity mathematics for the contribution a goal requires, bounded
//! months-to-target iteration, and the achievability bridge into the
//! projection engine. The binding rule for achievability: the projection is
//! fed what the household can actually afford (disposable income), never the
//! required amount, so the probability measures affordability instead of
//! tautologically landing near 50%.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::error::InputError;
use crate::inflation::future_value;
use crate::model::{
    DeductionInputs, GoalAchievability, GoalSpec, Horizon, TaxRegime, WindfallImpact,
};
use crate::montecarlo::{GoalSimulation, simulate_goal};
use crate::taxes::compute_tax;

/// Iteration cap for month-by-month accumulation: 50 years.
pub const MAX_MONTHS: u32 = 600;

/// Rates below this fall back to linear math instead of the annuity formula.
const DEGENERATE_RATE: f64 = 1e-9;

fn check_non_negative(what: &'static str, value: f64) -> Result<(), InputError> {
    if value < 0.0 || !value.is_finite() {
        return Err(InputError::NegativeAmount { what, value });
    }
    Ok(())
}

/// Monthly contribution required to grow `current` to `target` over `years`
/// at `annual_rate_pct`, by the ordinary-annuity formula on monthly
/// compounding. Never negative: zero when the compounded current amount
/// already covers the target. A near-zero rate falls back to straight
/// division.
pub fn required_monthly_contribution(
    current: f64,
    target: f64,
    years: f64,
    annual_rate_pct: f64,
) -> Result<f64, InputError> {
    check_non_negative("current", current)?;
    check_non_negative("target", target)?;
    check_non_negative("annual_rate_pct", annual_rate_pct)?;
    if !(years > 0.0) || !years.is_finite() {
        return Err(InputError::NonPositiveHorizon { years });
    }

    let months = (years * 12.0).round();
    if months < 1.0 {
        return Err(InputError::NonPositiveHorizon { years });
    }

    let r = annual_rate_pct / 12.0 / 100.0;

    if r < DEGENERATE_RATE {
        return Ok(((target - current) / months).max(0.0));
    }

    let growth = (1.0 + r).powf(months);
    let future_of_current = current * growth;
    if future_of_current >= target {
        return Ok(0.0);
    }

    Ok((target - future_of_current) * r / (growth - 1.0))
}

/// Months of contributing until `target` is met, capped at `MAX_MONTHS`.
///
/// Accumulates month by month: compound at the monthly rate, then add the
/// contribution. `Horizon::Unreachable` reports the cap; it is not an error.
pub fn months_to_target(
    current: f64,
    monthly_contribution: f64,
    annual_rate_pct: f64,
    target: f64,
) -> Result<Horizon, InputError> {
    check_non_negative("current", current)?;
    check_non_negative("monthly_contribution", monthly_contribution)?;
    check_non_negative("annual_rate_pct", annual_rate_pct)?;
    check_non_negative("target", target)?;

    if current >= target {
        return Ok(Horizon::Months(0));
    }

    let r = annual_rate_pct / 12.0 / 100.0;
    let mut value = current;
    for month in 1..=MAX_MONTHS {
        value = value * (1.0 + r) + monthly_contribution;
        if value >= target {
            return Ok(Horizon::Months(month));
        }
    }

    Ok(Horizon::Unreachable)
}

/// Months saved by adding `windfall` to the current amount: two independent
/// months-to-target runs compared, no closed form.
pub fn windfall_impact(
    current: f64,
    monthly_contribution: f64,
    annual_rate_pct: f64,
    target: f64,
    windfall: f64,
) -> Result<WindfallImpact, InputError> {
    check_non_negative("windfall", windfall)?;

    let without = months_to_target(current, monthly_contribution, annual_rate_pct, target)?;
    let with = months_to_target(
        current + windfall,
        monthly_contribution,
        annual_rate_pct,
        target,
    )?;

    let months_saved = match (without, with) {
        (Horizon::Months(a), Horizon::Months(b)) => Some(a.saturating_sub(b)),
        _ => None,
    };

    Ok(WindfallImpact {
        without_windfall: without,
        with_windfall: with,
        months_saved,
    })
}

/// Household cash-flow snapshot used to derive disposable income.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Household {
    pub annual_gross_income: f64,
    pub monthly_fixed_expenses: f64,
    pub monthly_emis: f64,
    /// Contributions already committed to other goals
    pub monthly_goal_contributions: f64,
}

/// Monthly amount actually available for a goal: net-of-tax income minus
/// fixed expenses, EMIs, and other goals' contributions, floored at zero.
pub fn disposable_income(
    household: &Household,
    regime: &TaxRegime,
    deductions: &DeductionInputs,
) -> Result<f64, InputError> {
    check_non_negative("annual_gross_income", household.annual_gross_income)?;
    check_non_negative("monthly_fixed_expenses", household.monthly_fixed_expenses)?;
    check_non_negative("monthly_emis", household.monthly_emis)?;
    check_non_negative(
        "monthly_goal_contributions",
        household.monthly_goal_contributions,
    )?;

    let tax = compute_tax(household.annual_gross_income, regime, deductions)?;
    let monthly_net = (household.annual_gross_income - tax.total_tax) / 12.0;

    Ok((monthly_net
        - household.monthly_fixed_expenses
        - household.monthly_emis
        - household.monthly_goal_contributions)
        .max(0.0))
}

/// Probability that a goal is met given the contribution the household can
/// actually afford.
///
/// The target is optionally grown by `inflation_rate_pct` over the horizon
/// when the goal opts in; the required contribution is solved against that
/// effective target; the projection runs on `affordable_contribution`.
pub fn goal_achievability(
    goal: &GoalSpec,
    today: Date,
    affordable_contribution: f64,
    inflation_rate_pct: f64,
    iterations: usize,
    seed: u64,
) -> Result<GoalAchievability, InputError> {
    check_non_negative("affordable_contribution", affordable_contribution)?;
    check_non_negative("inflation_rate_pct", inflation_rate_pct)?;

    let years = goal.years_to_target(today)?;

    let effective_target = if goal.inflation_adjust {
        future_value(goal.target_amount, years, inflation_rate_pct)
    } else {
        goal.target_amount
    };

    let required_contribution = required_monthly_contribution(
        goal.current_value,
        effective_target,
        years,
        goal.expected_return_pct,
    )?;

    let projection = simulate_goal(
        &GoalSimulation {
            current_amount: goal.current_value,
            monthly_contribution: affordable_contribution,
            expected_return_pct: goal.expected_return_pct,
            volatility_pct: goal.volatility_pct,
            years,
            target_amount: effective_target,
            iterations,
        },
        seed,
    )?;

    Ok(GoalAchievability {
        effective_target,
        required_contribution,
        affordable_contribution,
        probability: projection.success_probability,
        projection,
    })
}
