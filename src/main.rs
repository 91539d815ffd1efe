//! Household Projection CLI
//!
//! Runs two scenarios through the projection engine and prints their
//! month-by-month net worth side by side.

use anyhow::{anyhow, bail, Context};
use clap::Parser;
use std::path::PathBuf;

use household_projection::household::load_scenarios;
use household_projection::{ProjectionResult, Scenario, ScenarioRunner};

#[derive(Parser, Debug)]
#[command(
    name = "household_projection",
    about = "Project household net worth over a multi-decade horizon and compare two scenarios"
)]
struct Args {
    /// JSON file with the scenarios to compare (the first two are used).
    /// Without it, a built-in demo pair differing in mortgage rate is run.
    #[arg(long)]
    scenarios: Option<PathBuf>,

    /// Mortgage rate (percent) for the second built-in scenario
    #[arg(long, default_value_t = 3.0)]
    second_rate: f64,

    /// Leading rows to print per scenario
    #[arg(long, default_value_t = 24)]
    rows: usize,

    /// Directory to write each scenario's full monthly table as CSV
    #[arg(long)]
    csv_dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!("Household Projection v0.1.0");
    println!("===========================\n");

    let (first, second) = match &args.scenarios {
        Some(path) => {
            let scenarios = load_scenarios(path).map_err(|e| anyhow!("{e}"))?;
            if scenarios.len() < 2 {
                bail!(
                    "scenario file {} holds {} scenario(s); two are needed for a comparison",
                    path.display(),
                    scenarios.len()
                );
            }
            let mut iter = scenarios.into_iter();
            (iter.next().unwrap(), iter.next().unwrap())
        }
        None => demo_pair(args.second_rate),
    };

    print_scenario_header(&first)?;
    print_scenario_header(&second)?;

    let runner = ScenarioRunner::new();
    let comparison = runner.compare(&first, &second)?;

    for result in [&comparison.first, &comparison.second] {
        print_table(result, args.rows);
        print_summary(result);
    }

    let delta = comparison.final_net_worth_delta();
    println!("\nFinal net worth: `{}` ends {:.2} {} `{}`",
        comparison.second.scenario_name,
        delta.abs(),
        if delta >= 0.0 { "above" } else { "below" },
        comparison.first.scenario_name,
    );

    if let Some(dir) = &args.csv_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating {}", dir.display()))?;
        for result in [&comparison.first, &comparison.second] {
            let path = dir.join(format!("{}.csv", slug(&result.scenario_name)));
            write_csv(&path, result)?;
            println!("Full table written to: {}", path.display());
        }
    }

    Ok(())
}

/// Built-in pair mirroring the reference model's defaults: identical
/// households, differing only in the mortgage rate.
fn demo_pair(second_rate: f64) -> (Scenario, Scenario) {
    let first = Scenario::baseline("scenario 1 (2.5%)");
    let mut second = Scenario::baseline(&format!("scenario 2 ({second_rate}%)"));
    second.mortgage.annual_interest_rate_pct = second_rate;
    (first, second)
}

fn print_scenario_header(scenario: &Scenario) -> anyhow::Result<()> {
    println!("Scenario: {}", scenario.name);
    println!("  Horizon: {} years", scenario.horizon_years);
    println!("  Income: {:.2}/mo", scenario.monthly_net_income);
    println!(
        "  Expenses: {:.2}/mo + {:.2}/yr, inflation {:.1}%/yr",
        scenario.monthly_fixed_expenses,
        scenario.annual_fixed_expenses,
        scenario.annual_inflation_rate_pct
    );
    if scenario.mortgage.is_financed() {
        println!(
            "  Mortgage: {:.0} at {:.2}% over {} years -> payment {:.2}/mo",
            scenario.mortgage.principal,
            scenario.mortgage.annual_interest_rate_pct,
            scenario.mortgage.term_years,
            scenario.mortgage.monthly_payment()?,
        );
    } else {
        println!("  Mortgage: none");
    }
    println!(
        "  Investing: {:?}, {:.2}%/yr expected return\n",
        scenario.risk_profile, scenario.expected_annual_return_pct
    );
    Ok(())
}

fn print_table(result: &ProjectionResult, rows: usize) {
    println!("Projection `{}` ({} months):", result.scenario_name, result.snapshots.len());
    println!(
        "{:>5} {:>6} {:>14} {:>14} {:>14} {:>12}",
        "Month", "Year", "Checking", "Investment", "Net worth", "Expenses"
    );
    println!("{}", "-".repeat(70));

    for row in result.snapshots.iter().take(rows) {
        println!(
            "{:>5} {:>6.2} {:>14.2} {:>14.2} {:>14.2} {:>12.2}",
            row.month,
            row.year,
            row.checking_balance,
            row.investment_balance,
            row.total_net_worth,
            row.total_expenses,
        );
    }

    if result.snapshots.len() > rows {
        println!("... ({} more months)", result.snapshots.len() - rows);
    }
}

fn print_summary(result: &ProjectionResult) {
    let summary = result.summary();
    println!("\nSummary `{}`:", result.scenario_name);
    println!("  Total months: {}", summary.total_months);
    println!("  Final checking: {:.2}", summary.final_checking);
    println!("  Final investment: {:.2}", summary.final_investment);
    println!("  Final net worth: {:.2}", summary.final_net_worth);
    println!("  Peak net worth: {:.2}\n", summary.peak_net_worth);
}

fn write_csv(path: &std::path::Path, result: &ProjectionResult) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    for row in &result.snapshots {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

fn slug(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}
