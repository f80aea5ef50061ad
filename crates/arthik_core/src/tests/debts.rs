use crate::debts::{build_payoff_plan, recommended_order};
use crate::model::{DebtRecord, Horizon, LoanCategory, PayoffMethod};

fn debt(name: &str, principal: f64, rate: f64, emi: f64, category: LoanCategory) -> DebtRecord {
    DebtRecord {
        name: name.to_string(),
        principal,
        annual_rate_pct: rate,
        monthly_installment: emi,
        category,
    }
}

fn two_debt_set() -> Vec<DebtRecord> {
    vec![
        debt("card", 100_000.0, 24.0, 5_000.0, LoanCategory::CreditCard),
        debt("home", 500_000.0, 9.0, 6_000.0, LoanCategory::Mortgage),
    ]
}

#[test]
fn test_avalanche_extra_goes_to_highest_rate_first() {
    let debts = two_debt_set();
    let plan = build_payoff_plan(&debts, 2_000.0, PayoffMethod::Avalanche).unwrap();

    // month 1: the 24% debt (index 0) gets installment + extra
    let first_month: Vec<_> = plan.schedule.iter().filter(|r| r.month == 1).collect();
    let card = first_month.iter().find(|r| r.debt == 0).unwrap();
    let home = first_month.iter().find(|r| r.debt == 1).unwrap();
    assert!((card.payment - 7_000.0).abs() < 1e-9);
    assert!((home.payment - 6_000.0).abs() < 1e-9);

    // and it clears strictly before the 9% debt
    let card_cleared = plan.per_debt[0].cleared_in_month.unwrap();
    let home_cleared = plan.per_debt[1].cleared_in_month.unwrap();
    assert!(card_cleared < home_cleared);
}

#[test]
fn test_waterfall_reallocates_freed_installment() {
    let debts = two_debt_set();
    let plan = build_payoff_plan(&debts, 2_000.0, PayoffMethod::Avalanche).unwrap();
    let card_cleared = plan.per_debt[0].cleared_in_month.unwrap();

    // the month after the card closes, its 5k installment plus the 2k extra
    // lands on the mortgage
    let row = plan
        .schedule
        .iter()
        .find(|r| r.month == card_cleared + 1 && r.debt == 1)
        .unwrap();
    assert!((row.payment - 13_000.0).abs() < 1e-9);
}

#[test]
fn test_optimized_never_slower_or_costlier_than_baseline() {
    for method in [PayoffMethod::Avalanche, PayoffMethod::Snowball] {
        for extra in [0.0, 1_000.0, 10_000.0] {
            let plan = build_payoff_plan(&two_debt_set(), extra, method).unwrap();
            let (Horizon::Months(plan_months), Horizon::Months(base_months)) =
                (plan.horizon, plan.baseline_horizon)
            else {
                panic!("both schedules should converge");
            };
            assert!(plan_months <= base_months);
            assert!(plan.interest_saved >= -1e-9);
            assert!(plan.total_interest <= plan.baseline_interest + 1e-9);
        }
    }
}

#[test]
fn test_snowball_targets_smallest_balance() {
    let debts = vec![
        debt("big", 400_000.0, 18.0, 10_000.0, LoanCategory::Personal),
        debt("small", 50_000.0, 10.0, 2_000.0, LoanCategory::Auto),
    ];
    let plan = build_payoff_plan(&debts, 3_000.0, PayoffMethod::Snowball).unwrap();

    let first_month: Vec<_> = plan.schedule.iter().filter(|r| r.month == 1).collect();
    let small = first_month.iter().find(|r| r.debt == 1).unwrap();
    assert!((small.payment - 5_000.0).abs() < 1e-9);
}

#[test]
fn test_tie_break_keeps_input_order() {
    // identical rates: avalanche must attack the first-listed debt
    let debts = vec![
        debt("first", 100_000.0, 12.0, 3_000.0, LoanCategory::Personal),
        debt("second", 100_000.0, 12.0, 3_000.0, LoanCategory::Personal),
    ];
    let plan = build_payoff_plan(&debts, 2_000.0, PayoffMethod::Avalanche).unwrap();
    let first_month: Vec<_> = plan.schedule.iter().filter(|r| r.month == 1).collect();
    assert!((first_month.iter().find(|r| r.debt == 0).unwrap().payment - 5_000.0).abs() < 1e-9);
    assert!((first_month.iter().find(|r| r.debt == 1).unwrap().payment - 3_000.0).abs() < 1e-9);
    assert!(
        plan.per_debt[0].cleared_in_month.unwrap() < plan.per_debt[1].cleared_in_month.unwrap()
    );
}

#[test]
fn test_payment_capped_at_balance_plus_interest() {
    // tiny balance, huge installment: the last payment must not overshoot
    let debts = vec![debt("tiny", 1_000.0, 12.0, 50_000.0, LoanCategory::Personal)];
    let plan = build_payoff_plan(&debts, 0.0, PayoffMethod::Avalanche).unwrap();

    assert_eq!(plan.horizon, Horizon::Months(1));
    let row = &plan.schedule[0];
    assert!((row.payment - (1_000.0 + 10.0)).abs() < 1e-9);
    assert_eq!(row.closing_balance, 0.0);
}

#[test]
fn test_zero_principal_debt_is_inert() {
    let debts = vec![
        debt("paid off", 0.0, 24.0, 5_000.0, LoanCategory::CreditCard),
        debt("active", 50_000.0, 12.0, 5_000.0, LoanCategory::Personal),
    ];
    let plan = build_payoff_plan(&debts, 0.0, PayoffMethod::Avalanche).unwrap();
    assert!(plan.schedule.iter().all(|r| r.debt == 1));
    assert_eq!(plan.per_debt[0].cleared_in_month, Some(0));
    assert_eq!(plan.per_debt[0].total_paid, 0.0);
}

#[test]
fn test_empty_debt_list() {
    let plan = build_payoff_plan(&[], 5_000.0, PayoffMethod::Snowball).unwrap();
    assert_eq!(plan.horizon, Horizon::Months(0));
    assert!(plan.schedule.is_empty());
    assert_eq!(plan.interest_saved, 0.0);
}

#[test]
fn test_per_debt_totals_match_schedule() {
    let plan = build_payoff_plan(&two_debt_set(), 2_000.0, PayoffMethod::Avalanche).unwrap();
    for (i, summary) in plan.per_debt.iter().enumerate() {
        let paid: f64 = plan
            .schedule
            .iter()
            .filter(|r| r.debt == i)
            .map(|r| r.payment)
            .sum();
        assert!((paid - summary.total_paid).abs() < 1e-6);
    }
    let total: f64 = plan.per_debt.iter().map(|s| s.total_paid).sum();
    assert!((total - plan.total_paid).abs() < 1e-6);
}

#[test]
fn test_recommended_order_puts_revolving_credit_first() {
    let debts = vec![
        debt("home", 3_000_000.0, 9.0, 28_000.0, LoanCategory::Mortgage),
        debt("card", 80_000.0, 36.0, 5_000.0, LoanCategory::CreditCard),
        debt("auto", 400_000.0, 11.0, 9_000.0, LoanCategory::Auto),
    ];
    let order = recommended_order(&debts);
    assert_eq!(order[0], 1);
    // mortgage last: moderate rate and a tax-benefit penalty
    assert_eq!(order[2], 0);
}
