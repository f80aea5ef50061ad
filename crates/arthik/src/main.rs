//! Command-line caller for the arthik planning core
//!
//! Owns everything the core refuses to: file I/O, logging, argument parsing,
//! and presentation. Each subcommand loads a scenario, calls the relevant
//! engine, and prints a summary.

mod scenario;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use arthik_core::debts::recommended_order;
use arthik_core::goals::disposable_income;
use arthik_core::model::{Horizon, PayoffMethod, RegimeChoice};
use arthik_core::{
    build_payoff_plan, compare_regimes, compute_tax, goal_achievability, simulate_portfolio,
};
use scenario::{Scenario, regime_by_name};

#[derive(Parser, Debug)]
#[command(name = "arthik")]
#[command(about = "Household financial planning: tax, goals, debts, projections")]
struct Args {
    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute tax liability for a gross income, or compare both regimes
    Tax {
        #[arg(long)]
        gross: f64,
        /// "old", "new", or "both"
        #[arg(long, default_value = "both")]
        regime: String,
        /// Optional scenario file supplying deduction claims
        #[arg(long)]
        scenario: Option<PathBuf>,
    },
    /// Required contribution and achievability for every goal in a scenario
    Goal {
        #[arg(long)]
        scenario: PathBuf,
        /// Evaluation date, defaults to today (YYYY-MM-DD)
        #[arg(long)]
        today: Option<String>,
    },
    /// Optimized debt payoff plan versus minimum payments
    Debts {
        #[arg(long)]
        scenario: PathBuf,
        #[arg(long, value_enum, default_value = "avalanche")]
        method: MethodArg,
        /// Monthly surplus directed at the plan
        #[arg(long, default_value_t = 0.0)]
        extra: f64,
    },
    /// Monte Carlo projection of the scenario's asset portfolio
    Simulate {
        #[arg(long)]
        scenario: PathBuf,
        #[arg(long)]
        years: f64,
        #[arg(long, default_value_t = 0.0)]
        target: f64,
    },
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum MethodArg {
    Avalanche,
    Snowball,
}

impl From<MethodArg> for PayoffMethod {
    fn from(m: MethodArg) -> Self {
        match m {
            MethodArg::Avalanche => PayoffMethod::Avalanche,
            MethodArg::Snowball => PayoffMethod::Snowball,
        }
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(args.log_level.clone())),
        )
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Command::Tax {
            gross,
            regime,
            scenario,
        } => run_tax(gross, &regime, scenario.as_deref()),
        Command::Goal { scenario, today } => run_goals(&scenario, today.as_deref()),
        Command::Debts {
            scenario,
            method,
            extra,
        } => run_debts(&scenario, method.into(), extra),
        Command::Simulate {
            scenario,
            years,
            target,
        } => run_simulate(&scenario, years, target),
    }
}

fn run_tax(
    gross: f64,
    regime_name: &str,
    scenario_path: Option<&std::path::Path>,
) -> color_eyre::Result<()> {
    let deductions = match scenario_path {
        Some(path) => Scenario::load(path)?.deductions,
        None => Default::default(),
    };

    if regime_name == "both" {
        let cmp = compare_regimes(
            gross,
            &regime_by_name("old")?,
            &regime_by_name("new")?,
            &deductions,
        )?;
        println!("old regime : total {:>14.2}", cmp.old.total_tax);
        println!("new regime : total {:>14.2}", cmp.new.total_tax);
        let winner = match cmp.cheaper {
            RegimeChoice::Old => "old",
            RegimeChoice::New => "new",
        };
        println!("cheaper    : {winner} (saves {:.2})", cmp.savings.abs());
        return Ok(());
    }

    let result = compute_tax(gross, &regime_by_name(regime_name)?, &deductions)?;
    println!("taxable income    : {:>14.2}", result.taxable_income);
    for slab in &result.slab_breakdown {
        let upper = slab
            .upper
            .map_or_else(|| "above".to_string(), |u| format!("{u:.0}"));
        println!(
            "  slab {:>9.0} - {:>9} @ {:>4.1}% : {:>12.2}",
            slab.lower, upper, slab.rate_pct, slab.tax
        );
    }
    println!("base tax          : {:>14.2}", result.base_tax);
    println!("rebate            : {:>14.2}", result.rebate);
    println!("surcharge         : {:>14.2}", result.surcharge);
    println!("cess              : {:>14.2}", result.cess);
    println!("capital gains tax : {:>14.2}", result.capital_gains_tax);
    println!("total tax         : {:>14.2}", result.total_tax);
    println!(
        "effective rate    : {:>13.2}%",
        result.effective_rate * 100.0
    );
    Ok(())
}

fn run_goals(path: &std::path::Path, today: Option<&str>) -> color_eyre::Result<()> {
    let scenario = Scenario::load(path)?;
    let regime = scenario.tax_regime()?;
    let today = match today {
        Some(s) => s.parse()?,
        None => jiff::Zoned::now().date(),
    };

    let disposable = disposable_income(&scenario.household, &regime, &scenario.deductions)?;
    tracing::info!(disposable, "derived monthly disposable income");
    println!("monthly disposable income: {disposable:.2}\n");

    for goal in &scenario.goals {
        let outcome = goal_achievability(
            goal,
            today,
            disposable,
            scenario.inflation_rate_pct,
            scenario.iterations,
            scenario.seed,
        )?;
        println!("goal: {}", goal.name);
        println!("  target (effective)    : {:>14.2}", outcome.effective_target);
        println!(
            "  required contribution : {:>14.2}",
            outcome.required_contribution
        );
        println!(
            "  affordable            : {:>14.2}",
            outcome.affordable_contribution
        );
        println!(
            "  achievability         : {:>13.1}%",
            outcome.probability * 100.0
        );
        let p = &outcome.projection.percentiles;
        println!(
            "  outcomes p10/p50/p90  : {:.0} / {:.0} / {:.0}",
            p.p10, p.p50, p.p90
        );
    }
    Ok(())
}

fn run_debts(
    path: &std::path::Path,
    method: PayoffMethod,
    extra: f64,
) -> color_eyre::Result<()> {
    let scenario = Scenario::load(path)?;
    let plan = build_payoff_plan(&scenario.debts, extra, method)?;

    println!("pay-first recommendation:");
    for (rank, &i) in recommended_order(&scenario.debts).iter().enumerate() {
        println!("  {}. {}", rank + 1, scenario.debts[i].name);
    }

    match plan.horizon {
        Horizon::Months(m) => println!("\ndebt-free in {m} months"),
        Horizon::Unreachable => println!("\nnot debt-free within 50 years"),
    }
    println!("total paid     : {:>14.2}", plan.total_paid);
    println!("total interest : {:>14.2}", plan.total_interest);
    println!("months saved   : {}", plan.months_saved);
    println!("interest saved : {:>14.2}", plan.interest_saved);

    for summary in &plan.per_debt {
        let cleared = summary
            .cleared_in_month
            .map_or_else(|| "never".to_string(), |m| format!("month {m}"));
        println!(
            "  {:<20} cleared {:>10}  paid {:>12.2}  interest {:>12.2}",
            summary.name, cleared, summary.total_paid, summary.total_interest
        );
    }
    Ok(())
}

fn run_simulate(path: &std::path::Path, years: f64, target: f64) -> color_eyre::Result<()> {
    let scenario = Scenario::load(path)?;
    let result = simulate_portfolio(
        &scenario.assets,
        years,
        target,
        scenario.iterations,
        scenario.seed,
    )?;

    if target > 0.0 {
        println!(
            "probability of reaching {target:.0}: {:.1}%",
            result.success_probability * 100.0
        );
    }
    println!("mean terminal value : {:>14.2}", result.mean);
    let p = &result.percentiles;
    println!("p10 / p25 / p50     : {:.0} / {:.0} / {:.0}", p.p10, p.p25, p.p50);
    println!("p75 / p90           : {:.0} / {:.0}", p.p75, p.p90);
    println!("min / max           : {:.0} / {:.0}", result.min, result.max);
    Ok(())
}
