//! Scenario file loading
//!
//! A scenario is one JSON document holding everything the engines need:
//! household cash flows, deduction claims, goals, debts, and projection
//! settings. The core never sees the file; this module deserializes it and
//! hands plain values across.

use std::fs;
use std::path::Path;

use color_eyre::eyre::{WrapErr, bail};
use serde::Deserialize;

use arthik_core::goals::Household;
use arthik_core::model::{DebtRecord, DeductionInputs, GoalSpec, TaxRegime};
use arthik_core::montecarlo::AssetProjection;

fn default_iterations() -> usize {
    1_000
}

fn default_inflation() -> f64 {
    6.0
}

#[derive(Debug, Deserialize)]
pub struct Scenario {
    pub household: Household,
    #[serde(default)]
    pub deductions: DeductionInputs,
    /// "old" or "new"
    #[serde(default = "Scenario::default_regime")]
    pub regime: String,
    #[serde(default)]
    pub goals: Vec<GoalSpec>,
    #[serde(default)]
    pub debts: Vec<DebtRecord>,
    #[serde(default)]
    pub assets: Vec<AssetProjection>,
    #[serde(default = "default_inflation")]
    pub inflation_rate_pct: f64,
    #[serde(default = "default_iterations")]
    pub iterations: usize,
    #[serde(default)]
    pub seed: u64,
}

impl Scenario {
    fn default_regime() -> String {
        "new".to_string()
    }

    pub fn load(path: &Path) -> color_eyre::Result<Self> {
        let text = fs::read_to_string(path)
            .wrap_err_with(|| format!("reading scenario file {}", path.display()))?;
        let scenario: Scenario = serde_json::from_str(&text)
            .wrap_err_with(|| format!("parsing scenario file {}", path.display()))?;
        tracing::debug!(
            goals = scenario.goals.len(),
            debts = scenario.debts.len(),
            "loaded scenario"
        );
        Ok(scenario)
    }

    pub fn tax_regime(&self) -> color_eyre::Result<TaxRegime> {
        regime_by_name(&self.regime)
    }
}

pub fn regime_by_name(name: &str) -> color_eyre::Result<TaxRegime> {
    match name {
        "old" => Ok(TaxRegime::old_regime()),
        "new" => Ok(TaxRegime::new_regime()),
        other => bail!("unknown tax regime {other:?} (expected \"old\" or \"new\")"),
    }
}
