//! Sweep the mortgage rate across its contract range and report final net
//! worth per rate
//!
//! Usage: cargo run --bin sweep_rates

use std::time::Instant;

use household_projection::{Scenario, ScenarioRunner};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let start = Instant::now();

    // Contract range for the mortgage rate, in 0.25% steps
    let rates: Vec<f64> = (0..=22).map(|i| 0.5 + 0.25 * i as f64).collect();

    let scenarios: Vec<Scenario> = rates
        .iter()
        .map(|&rate| {
            let mut scenario = Scenario::baseline(&format!("{rate:.2}%"));
            scenario.mortgage.annual_interest_rate_pct = rate;
            scenario
        })
        .collect();

    println!("Sweeping {} mortgage rates...", scenarios.len());
    let results = ScenarioRunner::new().run_batch(&scenarios)?;
    println!("Projections complete in {:?}\n", start.elapsed());

    println!(
        "{:>7} {:>12} {:>16} {:>16}",
        "Rate", "Payment/mo", "Final net worth", "Peak net worth"
    );
    println!("{}", "-".repeat(54));

    for (scenario, result) in scenarios.iter().zip(&results) {
        let summary = result.summary();
        println!(
            "{:>6.2}% {:>12.2} {:>16.2} {:>16.2}",
            scenario.mortgage.annual_interest_rate_pct,
            scenario.mortgage.monthly_payment()?,
            summary.final_net_worth,
            summary.peak_net_worth,
        );
    }

    // Cost of each additional percent of rate, per the swept grid
    let cheapest = results.first().map(|r| r.final_net_worth()).unwrap_or(0.0);
    let dearest = results.last().map(|r| r.final_net_worth()).unwrap_or(0.0);
    println!(
        "\nSpread across the range: {:.2} ({:.2}% -> {:.2}%)",
        cheapest - dearest,
        rates.first().unwrap(),
        rates.last().unwrap(),
    );

    println!("Total time: {:?}", start.elapsed());
    Ok(())
}
