//! Running simulation state for a single scenario

use crate::household::Scenario;

/// Balances and timing carried across the monthly iteration
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Current month (1-indexed; 0 before the first advance)
    pub month: u32,

    /// Whole years elapsed since the start (month / 12)
    pub elapsed_years: u32,

    /// Liquid checking-account balance
    pub checking_balance: f64,

    /// Invested capital
    pub investment_balance: f64,

    /// Fixed mortgage payment, computed once upfront (0 when no loan)
    pub monthly_payment: f64,
}

impl SimulationState {
    /// Initialize state from a scenario at projection start
    pub fn from_scenario(scenario: &Scenario, monthly_payment: f64) -> Self {
        Self {
            month: 0,
            elapsed_years: 0,
            checking_balance: scenario.initial_cash,
            investment_balance: scenario.initial_investment,
            monthly_payment,
        }
    }

    /// Advance to the next month
    pub fn advance_month(&mut self) {
        self.month += 1;
        self.elapsed_years = self.month / 12;
    }

    /// Sum of liquid and invested balances
    pub fn total_net_worth(&self) -> f64 {
        self.checking_balance + self.investment_balance
    }
}
