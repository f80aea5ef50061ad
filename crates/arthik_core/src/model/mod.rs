mod debts;
mod goals;
mod results;
mod tax_config;

pub use debts::{DebtRecord, LoanCategory, PayoffMethod};
pub use goals::{FundingType, GoalSpec};
pub use results::{
    DebtSummary, GoalAchievability, Horizon, PaymentRow, PayoffPlan, PercentileBand,
    RegimeChoice, RegimeComparison, SimulationResult, SlabTax, TaxResult, WindfallImpact,
};
pub use tax_config::{
    CapitalGainsRules, DeductionCeilings, DeductionInputs, SurchargeTier, TaxRegime, TaxSlab,
};
