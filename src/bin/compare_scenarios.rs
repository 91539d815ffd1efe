//! Compare two scenarios month by month, highlighting where they diverge
//!
//! Usage: cargo run --bin compare_scenarios [scenarios.json]

use anyhow::{anyhow, bail};

use household_projection::household::load_scenarios;
use household_projection::{MonthlySnapshot, Scenario, ScenarioRunner};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let (first, second) = match std::env::args().nth(1) {
        Some(path) => {
            let scenarios = load_scenarios(&path).map_err(|e| anyhow!("{e}"))?;
            if scenarios.len() < 2 {
                bail!("{path} holds fewer than two scenarios");
            }
            let mut iter = scenarios.into_iter();
            (iter.next().unwrap(), iter.next().unwrap())
        }
        None => {
            let first = Scenario::baseline("scenario 1 (2.5%)");
            let mut second = Scenario::baseline("scenario 2 (3.0%)");
            second.mortgage.annual_interest_rate_pct = 3.0;
            (first, second)
        }
    };

    let runner = ScenarioRunner::new();
    let comparison = runner.compare(&first, &second)?;

    println!("\n{}", "=".repeat(60));
    println!("`{}` vs `{}`", first.name, second.name);
    println!("{}", "=".repeat(60));

    println!(
        "\n  {:<5} {:>14} {:>14} {:>12}",
        "Month", "NetWorth_1", "NetWorth_2", "Delta"
    );
    println!("  {:-<47}", "");

    let mut first_divergence_found = false;

    for (row_1, row_2) in comparison
        .first
        .snapshots
        .iter()
        .zip(&comparison.second.snapshots)
    {
        let delta = row_2.total_net_worth - row_1.total_net_worth;
        let has_divergence = delta.abs() > 0.01;

        // Show the opening months plus every divergent year boundary
        if !(has_divergence && !first_divergence_found)
            && row_1.month > 15
            && row_1.month % 12 != 0
        {
            continue;
        }

        let marker = if has_divergence && !first_divergence_found {
            ">>>"
        } else {
            "   "
        };
        println!(
            "{} {:<5} {:>14.2} {:>14.2} {:>12.2}",
            marker, row_1.month, row_1.total_net_worth, row_2.total_net_worth, delta
        );

        if has_divergence && !first_divergence_found {
            first_divergence_found = true;
            print_breakdown(row_1, row_2);
        }
    }

    if !first_divergence_found {
        println!("\n  No significant divergence over {} months", comparison.first.snapshots.len());
    } else {
        println!(
            "\n  Final delta after {} months: {:.2}",
            comparison.first.snapshots.len(),
            comparison.final_net_worth_delta()
        );
    }

    Ok(())
}

fn print_breakdown(row_1: &MonthlySnapshot, row_2: &MonthlySnapshot) {
    println!("\n  === BREAKDOWN FOR MONTH {} ===", row_1.month);
    println!(
        "  {:28} {:>14} {:>14} {:>12}",
        "Field", "Scenario 1", "Scenario 2", "Diff"
    );
    println!("  {:-<71}", "");

    let fields = [
        ("Mortgage payment", row_1.mortgage_payment, row_2.mortgage_payment),
        ("Deduction offset", row_1.deduction_offset, row_2.deduction_offset),
        ("Total expenses", row_1.total_expenses, row_2.total_expenses),
        ("Surplus", row_1.surplus, row_2.surplus),
        (
            "Checking contribution",
            row_1.checking_contribution,
            row_2.checking_contribution,
        ),
        (
            "Investment contribution",
            row_1.investment_contribution,
            row_2.investment_contribution,
        ),
        ("Checking balance", row_1.checking_balance, row_2.checking_balance),
        ("Investment balance", row_1.investment_balance, row_2.investment_balance),
    ];

    for (label, a, b) in fields {
        println!("  {:28} {:>14.2} {:>14.2} {:>12.2}", label, a, b, b - a);
    }
    println!();
}
