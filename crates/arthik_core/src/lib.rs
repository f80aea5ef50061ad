//! Quantitative planning core for a personal-finance tool
//!
//! Pure, stateless computation over caller-supplied data:
//! - Progressive tax liability under selectable regimes (old/new Indian
//!   slabs, rebate, surcharge, cess, capital gains)
//! - Present/future value conversion and category-specific inflation
//! - Monte Carlo projection of portfolio outcomes with nearest-rank
//!   percentiles
//! - Debt payoff schedules (avalanche/snowball) with waterfall reallocation
//! - Goal solving: required contribution, months-to-target, achievability
//!
//! Every entry point takes a fully-formed input snapshot and returns a
//! fully-formed result; nothing here persists state, performs I/O, or holds
//! global configuration. The caller owns validation UX and presentation.
//!
//! ```ignore
//! use arthik_core::model::TaxRegime;
//! use arthik_core::taxes::compute_tax;
//!
//! let regime = TaxRegime::new_regime();
//! let result = compute_tax(1_200_000.0, &regime, &Default::default())?;
//! assert_eq!(result.taxable_income, 1_125_000.0);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Engine modules
// ============================================================================

pub mod debts;
pub mod error;
pub mod goals;
pub mod inflation;
pub mod montecarlo;
pub mod percentiles;
pub mod taxes;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use debts::build_payoff_plan;
pub use goals::{goal_achievability, months_to_target, required_monthly_contribution};
pub use inflation::{future_value, present_value};
pub use montecarlo::{simulate_goal, simulate_portfolio};
pub use taxes::{compare_regimes, compute_tax};
