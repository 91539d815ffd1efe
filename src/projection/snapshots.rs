//! Snapshot output structures for projections

use serde::{Deserialize, Serialize};

/// A single row of projection output for one month
///
/// Besides the balances, each row carries the intermediate cash-flow terms
/// so a comparison surface can show where two scenarios diverge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlySnapshot {
    // Timing
    pub month: u32,
    /// Fractional year (month / 12)
    pub year: f64,

    // Cash-flow terms
    pub savings_target: f64,
    pub total_expenses: f64,
    pub mortgage_payment: f64,
    pub deduction_offset: f64,
    pub surplus: f64,
    pub checking_contribution: f64,
    pub investment_contribution: f64,
    pub investment_growth: f64,

    // End-of-month balances
    pub checking_balance: f64,
    pub investment_balance: f64,
    pub total_net_worth: f64,
}

/// Complete projection result for one scenario
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Scenario label
    pub scenario_name: String,

    /// Monthly snapshot rows, ordered by month
    pub snapshots: Vec<MonthlySnapshot>,
}

impl ProjectionResult {
    pub fn new(scenario_name: &str) -> Self {
        Self {
            scenario_name: scenario_name.to_string(),
            snapshots: Vec::new(),
        }
    }

    /// Add a snapshot row
    pub fn add_row(&mut self, row: MonthlySnapshot) {
        self.snapshots.push(row);
    }

    /// Net worth at the end of the horizon
    pub fn final_net_worth(&self) -> f64 {
        self.snapshots.last().map(|r| r.total_net_worth).unwrap_or(0.0)
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let peak_net_worth = self
            .snapshots
            .iter()
            .map(|r| r.total_net_worth)
            .fold(0.0_f64, f64::max);

        let final_checking = self.snapshots.last().map(|r| r.checking_balance).unwrap_or(0.0);
        let final_investment = self
            .snapshots
            .last()
            .map(|r| r.investment_balance)
            .unwrap_or(0.0);

        ProjectionSummary {
            total_months: self.snapshots.len() as u32,
            final_checking,
            final_investment,
            final_net_worth: final_checking + final_investment,
            peak_net_worth,
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub total_months: u32,
    pub final_checking: f64,
    pub final_investment: f64,
    pub final_net_worth: f64,
    pub peak_net_worth: f64,
}
