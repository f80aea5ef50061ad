//! Engine output types
//!
//! Every result here is built fresh per call and owned by the caller; the
//! engines keep nothing between invocations.

use serde::{Deserialize, Serialize};

/// Nearest-rank percentiles of one sorted terminal-value sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentileBand {
    pub p10: f64,
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
    pub p90: f64,
}

/// Distribution summary from one Monte Carlo run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Fraction of trials whose terminal value met or exceeded the target
    pub success_probability: f64,
    pub percentiles: PercentileBand,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

/// Tax charged by one slab, for the per-slab breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlabTax {
    pub lower: f64,
    pub upper: Option<f64>,
    pub rate_pct: f64,
    pub taxed_amount: f64,
    pub tax: f64,
}

/// Full liability for one income under one regime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxResult {
    pub gross_income: f64,
    /// Income remaining after the standard deduction and capped itemized deductions
    pub taxable_income: f64,
    /// Slab tax before the rebate
    pub base_tax: f64,
    /// Section 87A relief actually applied
    pub rebate: f64,
    pub surcharge: f64,
    pub cess: f64,
    pub capital_gains_tax: f64,
    pub total_tax: f64,
    /// Total tax over gross income (0 when gross is 0)
    pub effective_rate: f64,
    pub slab_breakdown: Vec<SlabTax>,
}

/// Which regime a comparison favors. Ties go to the new regime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegimeChoice {
    Old,
    New,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegimeComparison {
    pub old: TaxResult,
    pub new: TaxResult,
    /// `old.total_tax - new.total_tax`; positive means the new regime is cheaper
    pub savings: f64,
    pub cheaper: RegimeChoice,
}

/// Outcome of a bounded month-by-month iteration.
///
/// `Unreachable` is a reported condition, not an error: the iteration hit
/// the 600-month safety horizon without converging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Horizon {
    Months(u32),
    Unreachable,
}

impl Horizon {
    pub fn months(self) -> Option<u32> {
        match self {
            Horizon::Months(m) => Some(m),
            Horizon::Unreachable => None,
        }
    }
}

/// Months saved by adding a lump sum to a goal's current value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WindfallImpact {
    pub without_windfall: Horizon,
    pub with_windfall: Horizon,
    /// Present only when both runs reach the target within the horizon
    pub months_saved: Option<u32>,
}

/// What a goal needs versus what the household can afford.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalAchievability {
    /// Target after optional inflation adjustment over the horizon
    pub effective_target: f64,
    pub required_contribution: f64,
    /// Disposable income actually fed into the projection
    pub affordable_contribution: f64,
    pub probability: f64,
    pub projection: SimulationResult,
}

/// One month of one debt's schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRow {
    /// 1-based month index
    pub month: u32,
    /// Index into the input debt slice
    pub debt: usize,
    pub payment: f64,
    pub interest: f64,
    pub principal: f64,
    pub closing_balance: f64,
}

/// Per-debt totals across the whole schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebtSummary {
    pub name: String,
    /// Month the balance reached zero; `None` if it never did within the horizon
    pub cleared_in_month: Option<u32>,
    pub total_paid: f64,
    pub total_interest: f64,
}

/// An optimized payoff schedule plus its comparison against the
/// minimum-payments baseline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayoffPlan {
    pub schedule: Vec<PaymentRow>,
    pub per_debt: Vec<DebtSummary>,
    /// Months until every balance is zero, or `Unreachable` at the 600-month cap
    pub horizon: Horizon,
    pub total_paid: f64,
    pub total_interest: f64,
    pub baseline_horizon: Horizon,
    pub baseline_interest: f64,
    /// Zero when either run hit the cap
    pub months_saved: u32,
    pub interest_saved: f64,
}
