//! Debt payoff simulator
//!
//! Two jobs: a priority score for "what should I attack first" advice, and a
//! month-by-month payoff schedule under avalanche or snowball ordering with
//! waterfall reallocation. Every debt accrues interest and receives its
//! contractual installment each month; the first still-open debt in sort
//! order additionally receives the pooled extra payment plus the installments
//! freed by debts that closed in earlier months. Freed installments keep
//! compounding onto the next target for the rest of the schedule.
//!
//! Ordering ties keep the input order (the sorts are stable), so two debts
//! with the same rate or balance pay off deterministically.

use crate::error::InputError;
use crate::model::{DebtRecord, DebtSummary, Horizon, PaymentRow, PayoffMethod, PayoffPlan};

/// Safety cap shared with the goal solver's iteration: 50 years.
pub const MAX_MONTHS: u32 = 600;

/// Weighted priority score; higher means pay this one first.
///
/// Bands on interest rate, a bonus for categorically expensive credit, a
/// small-balance bonus (quick psychological wins), and a penalty for loans
/// whose interest carries a tax benefit.
pub fn priority_score(debt: &DebtRecord) -> f64 {
    let rate = debt.annual_rate_pct;
    let mut score = if rate >= 30.0 {
        40.0
    } else if rate >= 18.0 {
        32.0
    } else if rate >= 12.0 {
        24.0
    } else if rate >= 8.0 {
        16.0
    } else {
        8.0
    };

    if debt.category.is_high_interest() {
        score += 20.0;
    }
    if debt.principal < 50_000.0 {
        score += 15.0;
    } else if debt.principal < 200_000.0 {
        score += 8.0;
    }
    if debt.category.has_tax_benefit() {
        score -= 18.0;
    }

    score
}

/// Indices of `debts` ordered by priority score descending, ties stable.
pub fn recommended_order(debts: &[DebtRecord]) -> Vec<usize> {
    let scores: Vec<f64> = debts.iter().map(priority_score).collect();
    let mut order: Vec<usize> = (0..debts.len()).collect();
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));
    order
}

/// Indices of `debts` in the order the chosen method attacks them.
fn payoff_order(debts: &[DebtRecord], method: PayoffMethod) -> Vec<usize> {
    let mut order: Vec<usize> = (0..debts.len()).collect();
    match method {
        PayoffMethod::Avalanche => {
            order.sort_by(|&a, &b| debts[b].annual_rate_pct.total_cmp(&debts[a].annual_rate_pct));
        }
        PayoffMethod::Snowball => {
            order.sort_by(|&a, &b| debts[a].principal.total_cmp(&debts[b].principal));
        }
    }
    order
}

/// Raw totals from one schedule run.
struct ScheduleOutcome {
    rows: Vec<PaymentRow>,
    total_paid_per_debt: Vec<f64>,
    total_interest_per_debt: Vec<f64>,
    cleared_in_month: Vec<Option<u32>>,
    months: u32,
    completed: bool,
}

/// Step the schedule month by month until all balances are zero or the cap
/// is hit. `extra` and freed-installment reallocation only apply when
/// `reallocate` is set (the minimum-payments baseline runs with neither).
fn simulate_schedule(
    debts: &[DebtRecord],
    order: &[usize],
    extra: f64,
    reallocate: bool,
    record_rows: bool,
) -> ScheduleOutcome {
    let n = debts.len();
    let monthly_rates: Vec<f64> = debts
        .iter()
        .map(|d| d.annual_rate_pct / 12.0 / 100.0)
        .collect();

    let mut balances: Vec<f64> = debts.iter().map(|d| d.principal).collect();
    let mut rows = Vec::new();
    let mut total_paid_per_debt = vec![0.0; n];
    let mut total_interest_per_debt = vec![0.0; n];
    let mut cleared_in_month: Vec<Option<u32>> = balances
        .iter()
        .map(|&b| if b <= 0.0 { Some(0) } else { None })
        .collect();

    let mut months = 0;
    for month in 1..=MAX_MONTHS {
        if balances.iter().all(|&b| b <= 0.0) {
            break;
        }
        months = month;

        // Installments freed by debts that closed in *prior* months
        let freed: f64 = if reallocate {
            (0..n)
                .filter(|&i| balances[i] <= 0.0)
                .map(|i| debts[i].monthly_installment)
                .sum()
        } else {
            0.0
        };

        // First open debt in sort order gets the pooled surplus this month
        let target = order.iter().copied().find(|&i| balances[i] > 0.0);

        for &i in order {
            if balances[i] <= 0.0 {
                continue;
            }

            let interest = balances[i] * monthly_rates[i];
            let mut payment = debts[i].monthly_installment;
            if reallocate && target == Some(i) {
                payment += extra + freed;
            }
            // Never overpay past a zero balance
            payment = payment.min(balances[i] + interest);

            balances[i] = (balances[i] + interest - payment).max(0.0);
            total_paid_per_debt[i] += payment;
            total_interest_per_debt[i] += interest;
            if balances[i] <= 0.0 && cleared_in_month[i].is_none() {
                cleared_in_month[i] = Some(month);
            }

            if record_rows {
                rows.push(PaymentRow {
                    month,
                    debt: i,
                    payment,
                    interest,
                    principal: payment - interest,
                    closing_balance: balances[i],
                });
            }
        }
    }

    let completed = balances.iter().all(|&b| b <= 0.0);

    ScheduleOutcome {
        rows,
        total_paid_per_debt,
        total_interest_per_debt,
        cleared_in_month,
        months,
        completed,
    }
}

/// Build the optimized payoff plan and its minimum-payments baseline.
///
/// Rejects up front any debt whose installment cannot cover its first
/// month's interest; such a balance can never amortize and the schedule
/// would only terminate by hitting the cap.
pub fn build_payoff_plan(
    debts: &[DebtRecord],
    extra_payment: f64,
    method: PayoffMethod,
) -> Result<PayoffPlan, InputError> {
    if extra_payment < 0.0 || !extra_payment.is_finite() {
        return Err(InputError::NegativeAmount {
            what: "extra_payment",
            value: extra_payment,
        });
    }
    for debt in debts {
        if debt.principal < 0.0 || !debt.principal.is_finite() {
            return Err(InputError::NegativeAmount {
                what: "principal",
                value: debt.principal,
            });
        }
        if debt.annual_rate_pct < 0.0 || !debt.annual_rate_pct.is_finite() {
            return Err(InputError::NegativeAmount {
                what: "annual_rate_pct",
                value: debt.annual_rate_pct,
            });
        }
        if debt.principal > 0.0 && debt.monthly_installment <= debt.first_month_interest() {
            return Err(InputError::InstallmentBelowInterest {
                debt: debt.name.clone(),
                installment: debt.monthly_installment,
                first_month_interest: debt.first_month_interest(),
            });
        }
    }

    let order = payoff_order(debts, method);
    let optimized = simulate_schedule(debts, &order, extra_payment, true, true);
    let baseline = simulate_schedule(debts, &order, 0.0, false, false);

    let per_debt = debts
        .iter()
        .enumerate()
        .map(|(i, d)| DebtSummary {
            name: d.name.clone(),
            cleared_in_month: optimized.cleared_in_month[i],
            total_paid: optimized.total_paid_per_debt[i],
            total_interest: optimized.total_interest_per_debt[i],
        })
        .collect();

    let total_paid = optimized.total_paid_per_debt.iter().sum();
    let total_interest: f64 = optimized.total_interest_per_debt.iter().sum();
    let baseline_interest: f64 = baseline.total_interest_per_debt.iter().sum();

    let horizon = if optimized.completed {
        Horizon::Months(optimized.months)
    } else {
        Horizon::Unreachable
    };
    let baseline_horizon = if baseline.completed {
        Horizon::Months(baseline.months)
    } else {
        Horizon::Unreachable
    };

    let months_saved = match (baseline_horizon, horizon) {
        (Horizon::Months(base), Horizon::Months(plan)) => base.saturating_sub(plan),
        _ => 0,
    };

    Ok(PayoffPlan {
        schedule: optimized.rows,
        per_debt,
        horizon,
        total_paid,
        total_interest,
        baseline_horizon,
        baseline_interest,
        months_saved,
        interest_saved: baseline_interest - total_interest,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LoanCategory;

    fn debt(name: &str, principal: f64, rate: f64, emi: f64, category: LoanCategory) -> DebtRecord {
        DebtRecord {
            name: name.to_string(),
            principal,
            annual_rate_pct: rate,
            monthly_installment: emi,
            category,
        }
    }

    #[test]
    fn test_priority_prefers_expensive_revolving_credit() {
        let card = debt("card", 80_000.0, 36.0, 5_000.0, LoanCategory::CreditCard);
        let home = debt("home", 3_000_000.0, 9.0, 28_000.0, LoanCategory::Mortgage);
        assert!(priority_score(&card) > priority_score(&home));
    }

    #[test]
    fn test_tax_benefit_penalty_lowers_priority() {
        // same rate band, but education interest is deductible
        let education = debt("edu", 300_000.0, 13.0, 8_000.0, LoanCategory::Education);
        let auto = debt("auto", 300_000.0, 13.0, 8_000.0, LoanCategory::Auto);
        assert!(priority_score(&auto) > priority_score(&education));
    }

    #[test]
    fn test_small_balance_bonus() {
        let small = debt("small", 30_000.0, 10.0, 3_000.0, LoanCategory::Auto);
        let large = debt("large", 900_000.0, 10.0, 15_000.0, LoanCategory::Auto);
        assert!(priority_score(&small) > priority_score(&large));
    }

    #[test]
    fn test_avalanche_order_rate_descending_stable_ties() {
        let debts = vec![
            debt("a", 100.0, 10.0, 50.0, LoanCategory::Personal),
            debt("b", 200.0, 24.0, 50.0, LoanCategory::Personal),
            debt("c", 300.0, 10.0, 50.0, LoanCategory::Personal),
        ];
        assert_eq!(payoff_order(&debts, PayoffMethod::Avalanche), vec![1, 0, 2]);
    }

    #[test]
    fn test_snowball_order_balance_ascending() {
        let debts = vec![
            debt("a", 500.0, 10.0, 50.0, LoanCategory::Personal),
            debt("b", 100.0, 24.0, 50.0, LoanCategory::Personal),
        ];
        assert_eq!(payoff_order(&debts, PayoffMethod::Snowball), vec![1, 0]);
    }

    #[test]
    fn test_installment_below_interest_rejected() {
        let debts = vec![debt("trap", 100_000.0, 24.0, 1_500.0, LoanCategory::CreditCard)];
        // first month's interest is 2,000
        let err = build_payoff_plan(&debts, 0.0, PayoffMethod::Avalanche).unwrap_err();
        assert!(matches!(err, InputError::InstallmentBelowInterest { .. }));
    }
}
