//! Stochastic projection engine
//!
//! Runs independent Monte Carlo trials of a monthly random walk over a
//! portfolio: each month draws one normally-distributed return, compounds
//! the balance, then adds the fixed contribution. Terminal values across all
//! trials form the sample that `SimulationResult` summarizes.
//!
//! Trials are embarrassingly parallel. With the `parallel` feature they fan
//! out over rayon; each trial derives its own `SmallRng` stream from the
//! call seed so results are deterministic either way.

use rand::distr::Distribution;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::InputError;
use crate::model::SimulationResult;
use crate::percentiles::band_from_sorted;

/// Normal variates via the Box-Muller transform.
///
/// Two uniform draws produce one variate per sample; the paired variate is
/// discarded. Implements `rand::distr::Distribution` so sampling reads the
/// same as any other distribution.
#[derive(Debug, Clone, Copy)]
pub struct BoxMullerNormal {
    mean: f64,
    std_dev: f64,
}

impl BoxMullerNormal {
    pub fn new(mean: f64, std_dev: f64) -> Result<Self, InputError> {
        if !mean.is_finite() || !std_dev.is_finite() {
            return Err(InputError::InvalidDistribution {
                mean,
                std_dev,
                reason: "parameters must be finite",
            });
        }
        if std_dev < 0.0 {
            return Err(InputError::InvalidDistribution {
                mean,
                std_dev,
                reason: "standard deviation must not be negative",
            });
        }
        Ok(Self { mean, std_dev })
    }
}

impl Distribution<f64> for BoxMullerNormal {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        // ln(0) guard: redraw until u1 is strictly positive
        let mut u1: f64 = rng.random();
        while u1 <= f64::EPSILON {
            u1 = rng.random();
        }
        let u2: f64 = rng.random();
        let z = (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos();
        self.mean + self.std_dev * z
    }
}

/// Inputs for a single-goal projection.
///
/// Percentages are whole numbers (`12.0` means 12% annual return).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalSimulation {
    pub current_amount: f64,
    pub monthly_contribution: f64,
    pub expected_return_pct: f64,
    pub volatility_pct: f64,
    pub years: f64,
    pub target_amount: f64,
    pub iterations: usize,
}

/// One named sub-portfolio for `simulate_portfolio`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetProjection {
    pub name: String,
    pub current_value: f64,
    pub monthly_contribution: f64,
    pub expected_return_pct: f64,
    pub volatility_pct: f64,
}

/// Annual percent figures to monthly mean / standard deviation.
fn monthly_distribution(
    expected_return_pct: f64,
    volatility_pct: f64,
) -> Result<BoxMullerNormal, InputError> {
    let mean = expected_return_pct / 100.0 / 12.0;
    let std_dev = volatility_pct / 100.0 / 12.0_f64.sqrt();
    BoxMullerNormal::new(mean, std_dev)
}

fn check_non_negative(what: &'static str, value: f64) -> Result<(), InputError> {
    if value < 0.0 || !value.is_finite() {
        return Err(InputError::NegativeAmount { what, value });
    }
    Ok(())
}

/// Walk one trial: compound, then contribute, every month.
fn run_trial(
    rng: &mut SmallRng,
    returns: &BoxMullerNormal,
    months: u32,
    start: f64,
    contribution: f64,
) -> f64 {
    let mut value = start;
    for _ in 0..months {
        let r = returns.sample(rng);
        value *= 1.0 + r;
        value += contribution;
    }
    value
}

/// Summarize terminal values into a `SimulationResult` against `target`.
fn summarize(mut terminals: Vec<f64>, target: f64) -> SimulationResult {
    terminals.sort_by(f64::total_cmp);

    let n = terminals.len();
    let successes = terminals.iter().filter(|&&v| v >= target).count();
    let mean = terminals.iter().sum::<f64>() / n as f64;

    SimulationResult {
        success_probability: successes as f64 / n as f64,
        percentiles: band_from_sorted(&terminals),
        mean,
        min: terminals[0],
        max: terminals[n - 1],
    }
}

/// Simulate a distribution of outcomes for one goal.
///
/// `years == 0` yields a single-point distribution at `current_amount` for
/// every trial; `iterations == 0` is an input error.
pub fn simulate_goal(params: &GoalSimulation, seed: u64) -> Result<SimulationResult, InputError> {
    if params.iterations == 0 {
        return Err(InputError::NonPositiveIterations);
    }
    check_non_negative("current_amount", params.current_amount)?;
    check_non_negative("monthly_contribution", params.monthly_contribution)?;
    check_non_negative("target_amount", params.target_amount)?;
    check_non_negative("years", params.years)?;

    let returns = monthly_distribution(params.expected_return_pct, params.volatility_pct)?;
    let months = (params.years * 12.0).round() as u32;

    let trial = |i: usize| {
        let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(i as u64));
        run_trial(
            &mut rng,
            &returns,
            months,
            params.current_amount,
            params.monthly_contribution,
        )
    };

    #[cfg(feature = "parallel")]
    let terminals: Vec<f64> = (0..params.iterations).into_par_iter().map(trial).collect();

    #[cfg(not(feature = "parallel"))]
    let terminals: Vec<f64> = (0..params.iterations).map(trial).collect();

    Ok(summarize(terminals, params.target_amount))
}

/// Simulate several named sub-portfolios and sum their terminal values
/// before taking percentiles.
///
/// Each asset's monthly draws are independent; cross-asset correlation is
/// not modeled.
pub fn simulate_portfolio(
    assets: &[AssetProjection],
    years: f64,
    target_amount: f64,
    iterations: usize,
    seed: u64,
) -> Result<SimulationResult, InputError> {
    if iterations == 0 {
        return Err(InputError::NonPositiveIterations);
    }
    check_non_negative("years", years)?;
    check_non_negative("target_amount", target_amount)?;

    let mut distributions = Vec::with_capacity(assets.len());
    for asset in assets {
        check_non_negative("current_value", asset.current_value)?;
        check_non_negative("monthly_contribution", asset.monthly_contribution)?;
        distributions.push(monthly_distribution(
            asset.expected_return_pct,
            asset.volatility_pct,
        )?);
    }

    let months = (years * 12.0).round() as u32;

    let trial = |i: usize| {
        let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(i as u64));
        assets
            .iter()
            .zip(&distributions)
            .map(|(asset, returns)| {
                run_trial(
                    &mut rng,
                    returns,
                    months,
                    asset.current_value,
                    asset.monthly_contribution,
                )
            })
            .sum::<f64>()
    };

    #[cfg(feature = "parallel")]
    let terminals: Vec<f64> = (0..iterations).into_par_iter().map(trial).collect();

    #[cfg(not(feature = "parallel"))]
    let terminals: Vec<f64> = (0..iterations).map(trial).collect();

    Ok(summarize(terminals, target_amount))
}
