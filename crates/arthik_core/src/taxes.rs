//! Progressive tax engine
//!
//! The calculation is regime-agnostic: every difference between the old and
//! new Indian regimes lives in `TaxRegime` data. The only branch keyed on
//! regime shape is whether itemized deductions are permitted at all.
//!
//! Order of operations, per liability:
//! 1. standard deduction
//! 2. capped itemized deductions (if permitted), floored at zero
//! 3. cumulative slab tax
//! 4. Section 87A rebate at or below the threshold
//! 5. tiered surcharge on base tax
//! 6. cess on (base tax + surcharge)
//! 7. capital gains tax, computed outside the slab table

use crate::error::InputError;
use crate::model::{
    DeductionInputs, RegimeChoice, RegimeComparison, SlabTax, TaxRegime, TaxResult,
};

/// Itemized deductions after each category's independent ceiling.
fn capped_deductions(regime: &TaxRegime, deductions: &DeductionInputs) -> f64 {
    if !regime.allows_itemized_deductions {
        return 0.0;
    }
    let health_ceiling = if deductions.senior_citizen {
        regime.ceilings.health_insurance_senior
    } else {
        regime.ceilings.health_insurance
    };
    deductions.section_80c.max(0.0).min(regime.ceilings.section_80c)
        + deductions.health_insurance.max(0.0).min(health_ceiling)
        + deductions.nps_additional.max(0.0).min(regime.ceilings.nps_additional)
        + deductions
            .home_loan_interest
            .max(0.0)
            .min(regime.ceilings.home_loan_interest)
}

/// Cumulative slab tax with a per-slab breakdown.
fn slab_tax(taxable: f64, regime: &TaxRegime) -> (f64, Vec<SlabTax>) {
    let mut tax = 0.0;
    let mut breakdown = Vec::new();

    for slab in &regime.slabs {
        let upper = slab.upper.unwrap_or(f64::INFINITY);
        let amount = (taxable.min(upper) - slab.lower).max(0.0);
        if amount <= 0.0 {
            continue;
        }
        let slab_charge = amount * slab.rate_pct / 100.0;
        tax += slab_charge;
        breakdown.push(SlabTax {
            lower: slab.lower,
            upper: slab.upper,
            rate_pct: slab.rate_pct,
            taxed_amount: amount,
            tax: slab_charge,
        });
    }

    (tax, breakdown)
}

/// Tiered surcharge: the single rate of the highest breakpoint crossed
/// applies to all of the base tax.
fn surcharge_rate_pct(taxable: f64, regime: &TaxRegime) -> f64 {
    regime
        .surcharge_tiers
        .iter()
        .filter(|tier| taxable > tier.threshold)
        .map(|tier| tier.rate_pct)
        .fold(0.0, f64::max)
}

/// Flat-rate capital gains tax, separate from slab tax.
fn capital_gains_tax(regime: &TaxRegime, deductions: &DeductionInputs) -> f64 {
    let ltcg = (deductions.long_term_gains.max(0.0) - regime.capital_gains.ltcg_exemption).max(0.0);
    let stcg = deductions.short_term_gains.max(0.0);
    ltcg * regime.capital_gains.ltcg_rate_pct / 100.0
        + stcg * regime.capital_gains.stcg_rate_pct / 100.0
}

/// Compute the total liability for a gross income under one regime.
pub fn compute_tax(
    gross_income: f64,
    regime: &TaxRegime,
    deductions: &DeductionInputs,
) -> Result<TaxResult, InputError> {
    if gross_income < 0.0 || !gross_income.is_finite() {
        return Err(InputError::NegativeAmount {
            what: "gross_income",
            value: gross_income,
        });
    }
    if regime.slabs.is_empty() {
        return Err(InputError::EmptySlabTable);
    }

    let taxable =
        (gross_income - regime.standard_deduction - capped_deductions(regime, deductions)).max(0.0);

    let (base_tax, slab_breakdown) = slab_tax(taxable, regime);

    let rebate = if taxable <= regime.rebate_threshold {
        base_tax.min(regime.rebate_cap)
    } else {
        0.0
    };
    let tax_after_rebate = base_tax - rebate;

    let surcharge = tax_after_rebate * surcharge_rate_pct(taxable, regime) / 100.0;
    let cess = (tax_after_rebate + surcharge) * regime.cess_rate_pct / 100.0;
    let cg_tax = capital_gains_tax(regime, deductions);

    let total_tax = tax_after_rebate + surcharge + cess + cg_tax;
    let effective_rate = if gross_income > 0.0 {
        total_tax / gross_income
    } else {
        0.0
    };

    Ok(TaxResult {
        gross_income,
        taxable_income: taxable,
        base_tax,
        rebate,
        surcharge,
        cess,
        capital_gains_tax: cg_tax,
        total_tax,
        effective_rate,
        slab_breakdown,
    })
}

/// Run the engine under both regimes and report which is cheaper.
/// Ties default to the new regime.
pub fn compare_regimes(
    gross_income: f64,
    old_regime: &TaxRegime,
    new_regime: &TaxRegime,
    deductions: &DeductionInputs,
) -> Result<RegimeComparison, InputError> {
    let old = compute_tax(gross_income, old_regime, deductions)?;
    let new = compute_tax(gross_income, new_regime, deductions)?;

    let savings = old.total_tax - new.total_tax;
    let cheaper = if new.total_tax <= old.total_tax {
        RegimeChoice::New
    } else {
        RegimeChoice::Old
    };

    Ok(RegimeComparison {
        old,
        new,
        savings,
        cheaper,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_income_zero_tax() {
        let regime = TaxRegime::new_regime();
        let result = compute_tax(0.0, &regime, &DeductionInputs::default()).unwrap();
        assert_eq!(result.total_tax, 0.0);
        assert_eq!(result.effective_rate, 0.0);
    }

    #[test]
    fn test_negative_income_rejected() {
        let regime = TaxRegime::new_regime();
        assert!(compute_tax(-1.0, &regime, &DeductionInputs::default()).is_err());
    }

    #[test]
    fn test_empty_slab_table_rejected() {
        let mut regime = TaxRegime::new_regime();
        regime.slabs.clear();
        assert!(compute_tax(100_000.0, &regime, &DeductionInputs::default()).is_err());
    }

    #[test]
    fn test_surcharge_tier_selection() {
        let regime = TaxRegime::new_regime();
        assert_eq!(surcharge_rate_pct(4_000_000.0, &regime), 0.0);
        assert_eq!(surcharge_rate_pct(6_000_000.0, &regime), 10.0);
        assert_eq!(surcharge_rate_pct(15_000_000.0, &regime), 15.0);
        assert_eq!(surcharge_rate_pct(25_000_000.0, &regime), 25.0);
        // boundary: surcharge starts strictly above the breakpoint
        assert_eq!(surcharge_rate_pct(5_000_000.0, &regime), 0.0);
    }

    #[test]
    fn test_old_regime_deduction_ceilings() {
        let regime = TaxRegime::old_regime();
        let deductions = DeductionInputs {
            section_80c: 400_000.0, // capped at 150k
            health_insurance: 60_000.0, // capped at 25k
            nps_additional: 10_000.0,   // under the 50k ceiling
            home_loan_interest: 250_000.0, // capped at 200k
            ..Default::default()
        };
        assert_eq!(capped_deductions(&regime, &deductions), 385_000.0);
    }

    #[test]
    fn test_senior_health_ceiling() {
        let regime = TaxRegime::old_regime();
        let deductions = DeductionInputs {
            health_insurance: 60_000.0,
            senior_citizen: true,
            ..Default::default()
        };
        assert_eq!(capped_deductions(&regime, &deductions), 50_000.0);
    }

    #[test]
    fn test_new_regime_ignores_itemized_deductions() {
        let regime = TaxRegime::new_regime();
        let with = DeductionInputs {
            section_80c: 150_000.0,
            ..Default::default()
        };
        let a = compute_tax(2_000_000.0, &regime, &with).unwrap();
        let b = compute_tax(2_000_000.0, &regime, &DeductionInputs::default()).unwrap();
        assert_eq!(a.total_tax, b.total_tax);
    }

    #[test]
    fn test_capital_gains_ltcg_exemption() {
        let regime = TaxRegime::new_regime();
        let deductions = DeductionInputs {
            long_term_gains: 125_000.0,
            ..Default::default()
        };
        // gains exactly at the exemption owe nothing
        assert_eq!(capital_gains_tax(&regime, &deductions), 0.0);

        let deductions = DeductionInputs {
            long_term_gains: 225_000.0,
            short_term_gains: 100_000.0,
            ..Default::default()
        };
        // 100k over exemption at 12.5% + 100k short-term at 20%
        let tax = capital_gains_tax(&regime, &deductions);
        assert!((tax - (12_500.0 + 20_000.0)).abs() < 1e-9);
    }

    #[test]
    fn test_compare_regimes_tie_prefers_new() {
        let regime = TaxRegime::new_regime();
        // identical regimes tie exactly
        let cmp =
            compare_regimes(1_000_000.0, &regime, &regime, &DeductionInputs::default()).unwrap();
        assert_eq!(cmp.savings, 0.0);
        assert_eq!(cmp.cheaper, RegimeChoice::New);
    }
}
