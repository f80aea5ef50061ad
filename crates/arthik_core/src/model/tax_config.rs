//! Tax regime configuration types
//!
//! A regime is pure data: slab table, deduction ceilings, rebate and
//! surcharge parameters. The calculation logic in the `taxes` module is
//! regime-agnostic; the old/new Indian regimes differ only in the values
//! carried here.

use serde::{Deserialize, Serialize};

/// A single slab in a progressive tax system.
///
/// Slabs are ordered and must cover `[0, inf)` with no gaps or overlaps;
/// `upper == None` marks the open-ended top slab.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxSlab {
    pub lower: f64,
    pub upper: Option<f64>,
    /// Marginal rate for income inside this slab, as a whole-number percent (5 means 5%)
    pub rate_pct: f64,
}

impl TaxSlab {
    pub fn new(lower: f64, upper: Option<f64>, rate_pct: f64) -> Self {
        Self {
            lower,
            upper,
            rate_pct,
        }
    }
}

/// A surcharge breakpoint. Tiered, not marginal: once taxable income crosses
/// `threshold` the whole base tax is multiplied by this tier's rate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SurchargeTier {
    pub threshold: f64,
    pub rate_pct: f64,
}

/// Independent ceilings on itemized deduction categories (old regime only).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DeductionCeilings {
    /// Combined ceiling across retirement-linked instruments (Section 80C)
    pub section_80c: f64,
    /// Health insurance premiums (Section 80D)
    pub health_insurance: f64,
    /// Higher 80D ceiling for senior citizens
    pub health_insurance_senior: f64,
    /// Additional NPS contribution (Section 80CCD(1B))
    pub nps_additional: f64,
    /// Home-loan interest (Section 24(b))
    pub home_loan_interest: f64,
}

impl DeductionCeilings {
    /// A regime that permits no itemized deductions at all
    pub const NONE: DeductionCeilings = DeductionCeilings {
        section_80c: 0.0,
        health_insurance: 0.0,
        health_insurance_senior: 0.0,
        nps_additional: 0.0,
        home_loan_interest: 0.0,
    };
}

/// Capital gains are taxed outside the slab table: long-term at a flat rate
/// after a fixed exemption, short-term at a flat rate with no exemption.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CapitalGainsRules {
    pub ltcg_rate_pct: f64,
    pub ltcg_exemption: f64,
    pub stcg_rate_pct: f64,
}

/// A complete, self-contained tax regime.
///
/// The two shipped presets model Indian FY2025-26. They are never merged;
/// the caller selects one per computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxRegime {
    pub name: String,
    /// Ordered slab table covering `[0, inf)`
    pub slabs: Vec<TaxSlab>,
    pub standard_deduction: f64,
    /// Section 87A: total slab tax is cancelled (up to `rebate_cap`) when
    /// taxable income is at or below this threshold
    pub rebate_threshold: f64,
    pub rebate_cap: f64,
    /// Ascending breakpoints; the highest crossed tier applies to all base tax
    pub surcharge_tiers: Vec<SurchargeTier>,
    /// Health & education cess on (base tax + surcharge)
    pub cess_rate_pct: f64,
    pub allows_itemized_deductions: bool,
    pub ceilings: DeductionCeilings,
    pub capital_gains: CapitalGainsRules,
}

const LAKH: f64 = 100_000.0;
const CRORE: f64 = 10_000_000.0;

impl TaxRegime {
    /// New regime, FY2025-26: wide slabs, higher standard deduction, no
    /// itemized deductions, rebate up to 12L income.
    pub fn new_regime() -> Self {
        Self {
            name: "new".to_string(),
            slabs: vec![
                TaxSlab::new(0.0, Some(4.0 * LAKH), 0.0),
                TaxSlab::new(4.0 * LAKH, Some(8.0 * LAKH), 5.0),
                TaxSlab::new(8.0 * LAKH, Some(12.0 * LAKH), 10.0),
                TaxSlab::new(12.0 * LAKH, Some(16.0 * LAKH), 15.0),
                TaxSlab::new(16.0 * LAKH, Some(20.0 * LAKH), 20.0),
                TaxSlab::new(20.0 * LAKH, Some(24.0 * LAKH), 25.0),
                TaxSlab::new(24.0 * LAKH, None, 30.0),
            ],
            standard_deduction: 75_000.0,
            rebate_threshold: 12.0 * LAKH,
            rebate_cap: 60_000.0,
            surcharge_tiers: vec![
                SurchargeTier {
                    threshold: 50.0 * LAKH,
                    rate_pct: 10.0,
                },
                SurchargeTier {
                    threshold: CRORE,
                    rate_pct: 15.0,
                },
                SurchargeTier {
                    threshold: 2.0 * CRORE,
                    rate_pct: 25.0,
                },
            ],
            cess_rate_pct: 4.0,
            allows_itemized_deductions: false,
            ceilings: DeductionCeilings::NONE,
            capital_gains: CapitalGainsRules {
                ltcg_rate_pct: 12.5,
                ltcg_exemption: 125_000.0,
                stcg_rate_pct: 20.0,
            },
        }
    }

    /// Old regime, FY2025-26: narrower slabs but itemized deductions allowed.
    pub fn old_regime() -> Self {
        Self {
            name: "old".to_string(),
            slabs: vec![
                TaxSlab::new(0.0, Some(2.5 * LAKH), 0.0),
                TaxSlab::new(2.5 * LAKH, Some(5.0 * LAKH), 5.0),
                TaxSlab::new(5.0 * LAKH, Some(10.0 * LAKH), 20.0),
                TaxSlab::new(10.0 * LAKH, None, 30.0),
            ],
            standard_deduction: 50_000.0,
            rebate_threshold: 5.0 * LAKH,
            rebate_cap: 12_500.0,
            surcharge_tiers: vec![
                SurchargeTier {
                    threshold: 50.0 * LAKH,
                    rate_pct: 10.0,
                },
                SurchargeTier {
                    threshold: CRORE,
                    rate_pct: 15.0,
                },
                SurchargeTier {
                    threshold: 2.0 * CRORE,
                    rate_pct: 25.0,
                },
                SurchargeTier {
                    threshold: 5.0 * CRORE,
                    rate_pct: 37.0,
                },
            ],
            cess_rate_pct: 4.0,
            allows_itemized_deductions: true,
            ceilings: DeductionCeilings {
                section_80c: 150_000.0,
                health_insurance: 25_000.0,
                health_insurance_senior: 50_000.0,
                nps_additional: 50_000.0,
                home_loan_interest: 200_000.0,
            },
            capital_gains: CapitalGainsRules {
                ltcg_rate_pct: 12.5,
                ltcg_exemption: 125_000.0,
                stcg_rate_pct: 20.0,
            },
        }
    }
}

/// Amounts the household actually claims, before ceilings are applied.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DeductionInputs {
    #[serde(default)]
    pub section_80c: f64,
    #[serde(default)]
    pub health_insurance: f64,
    #[serde(default)]
    pub nps_additional: f64,
    #[serde(default)]
    pub home_loan_interest: f64,
    /// Selects the higher 80D ceiling
    #[serde(default)]
    pub senior_citizen: bool,
    /// Realized long-term capital gains for the year
    #[serde(default)]
    pub long_term_gains: f64,
    /// Realized short-term capital gains for the year
    #[serde(default)]
    pub short_term_gains: f64,
}
