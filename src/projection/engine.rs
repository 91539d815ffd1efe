//! Core projection engine for monthly household cash-flow simulation

use crate::error::ParameterError;
use crate::household::{Deduction, Scenario};

use super::snapshots::{MonthlySnapshot, ProjectionResult};
use super::state::SimulationState;

/// Flat deduction rate on the mortgage principal for the primary-residence
/// offset. Illustrative, not tax-accurate.
const PRIMARY_RESIDENCE_DEDUCTION_RATE: f64 = 0.19;

/// Main projection engine
///
/// A pure computation: validates the scenario, computes the mortgage payment
/// once, then iterates month-by-month over the horizon. Identical inputs
/// always produce identical snapshot sequences.
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine;

impl ProjectionEngine {
    pub fn new() -> Self {
        Self
    }

    /// Run the projection for a single scenario
    pub fn project(&self, scenario: &Scenario) -> Result<ProjectionResult, ParameterError> {
        scenario.validate()?;

        let monthly_payment = if scenario.mortgage.is_financed() {
            scenario.mortgage.monthly_payment()?
        } else {
            0.0
        };

        log::debug!(
            "projecting `{}`: {} months, mortgage payment {:.2}/mo",
            scenario.name,
            scenario.horizon_months(),
            monthly_payment,
        );

        let mut result = ProjectionResult::new(&scenario.name);
        let mut state = SimulationState::from_scenario(scenario, monthly_payment);

        for _month in 1..=scenario.horizon_months() {
            state.advance_month();
            let row = self.calculate_month(scenario, &mut state);
            result.add_row(row);
        }

        Ok(result)
    }

    /// Compute one month's cash flow and advance the balances
    fn calculate_month(&self, scenario: &Scenario, state: &mut SimulationState) -> MonthlySnapshot {
        let savings_target = scenario.effective_monthly_savings();

        // Inflation applies to expenses only; income is deliberately flat
        let inflation_factor = (1.0 + scenario.annual_inflation_rate_pct / 100.0)
            .powi(state.elapsed_years as i32);
        let monthly_expenses = scenario.monthly_fixed_expenses * inflation_factor;
        let annual_expenses_prorated = scenario.annual_fixed_expenses / 12.0 * inflation_factor;

        let mortgage_payment = if state.month <= scenario.mortgage.term_months() {
            state.monthly_payment
        } else {
            0.0
        };

        // Flat and month-invariant: the offset does not decay with the loan
        // balance and outlives the loan term
        let deduction_offset = if scenario.has_deduction(Deduction::PrimaryResidenceMortgage) {
            scenario.mortgage.principal * PRIMARY_RESIDENCE_DEDUCTION_RATE / 12.0
        } else {
            0.0
        };

        let total_expenses =
            monthly_expenses + annual_expenses_prorated + mortgage_payment - deduction_offset;
        let surplus = scenario.monthly_net_income - total_expenses;

        // Allocation policy: savings go to investment, the rest to checking.
        // A shortfall is pulled from the investment contribution; the
        // checking balance itself never decreases.
        let mut investment_contribution = savings_target;
        let mut checking_contribution = surplus - savings_target;
        if checking_contribution < 0.0 {
            investment_contribution += checking_contribution;
            checking_contribution = 0.0;
        }

        // Growth compounds on the prior balance; new money earns no return
        // in its first month. A negative net contribution is floored to zero,
        // never withdrawn.
        let monthly_return = scenario.expected_annual_return_pct / 100.0 / 12.0;
        let investment_growth = state.investment_balance * monthly_return;

        state.checking_balance += checking_contribution;
        state.investment_balance += investment_growth;
        state.investment_balance += investment_contribution.max(0.0);

        MonthlySnapshot {
            month: state.month,
            year: state.month as f64 / 12.0,
            savings_target,
            total_expenses,
            mortgage_payment,
            deduction_offset,
            surplus,
            checking_contribution,
            investment_contribution,
            investment_growth,
            checking_balance: state.checking_balance,
            investment_balance: state.investment_balance,
            total_net_worth: state.total_net_worth(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::household::RiskProfile;
    use crate::mortgage::Mortgage;
    use approx::assert_abs_diff_eq;

    /// Bare scenario with every optional effect turned off
    fn flat_scenario() -> Scenario {
        Scenario {
            name: "flat".to_string(),
            initial_cash: 1_000.0,
            initial_investment: 0.0,
            monthly_net_income: 2_000.0,
            monthly_fixed_expenses: 500.0,
            annual_fixed_expenses: 0.0,
            monthly_savings_target: 200.0,
            savings_is_percentage: false,
            horizon_years: 5,
            annual_inflation_rate_pct: 0.0,
            risk_profile: RiskProfile::Conservative,
            expected_annual_return_pct: 0.0,
            mortgage: Mortgage::none(),
            deductions: Vec::new(),
        }
    }

    #[test]
    fn test_single_month_trace() {
        // surplus = 2000 - 500 = 1500; 200 to investment, 1300 to checking
        let engine = ProjectionEngine::new();
        let result = engine.project(&flat_scenario()).unwrap();

        let first = &result.snapshots[0];
        assert_abs_diff_eq!(first.surplus, 1_500.0);
        assert_abs_diff_eq!(first.checking_contribution, 1_300.0);
        assert_abs_diff_eq!(first.investment_contribution, 200.0);
        assert_abs_diff_eq!(first.checking_balance, 2_300.0);
        assert_abs_diff_eq!(first.investment_balance, 200.0);
        assert_abs_diff_eq!(first.total_net_worth, 2_500.0);
    }

    #[test]
    fn test_shortfall_comes_out_of_investment_contribution() {
        // surplus = 1000 - 1500 = -500; checking contribution would be -700,
        // transferred into the investment contribution (200 - 700 = -500),
        // which is then floored to zero. Both balances stay put at 0% growth.
        let mut scenario = flat_scenario();
        scenario.monthly_net_income = 1_000.0;
        scenario.monthly_fixed_expenses = 1_500.0;
        scenario.initial_investment = 500.0;

        let engine = ProjectionEngine::new();
        let result = engine.project(&scenario).unwrap();

        let first = &result.snapshots[0];
        assert_abs_diff_eq!(first.checking_contribution, 0.0);
        assert_abs_diff_eq!(first.investment_contribution, -500.0);
        assert_abs_diff_eq!(first.checking_balance, 1_000.0);
        assert_abs_diff_eq!(first.investment_balance, 500.0);
    }

    #[test]
    fn test_growth_compounds_before_contribution() {
        // 12%/yr = 1%/mo on the prior balance only:
        // 1000 * 1.01 + 100 = 1110, not 1111
        let mut scenario = flat_scenario();
        scenario.initial_investment = 1_000.0;
        scenario.monthly_fixed_expenses = 0.0;
        scenario.monthly_savings_target = 100.0;
        scenario.expected_annual_return_pct = 12.0;

        let engine = ProjectionEngine::new();
        let result = engine.project(&scenario).unwrap();

        let first = &result.snapshots[0];
        assert_abs_diff_eq!(first.investment_growth, 10.0, epsilon = 1e-9);
        assert_abs_diff_eq!(first.investment_balance, 1_110.0, epsilon = 1e-9);
    }

    #[test]
    fn test_mortgage_payment_stops_after_term() {
        let mut scenario = flat_scenario();
        scenario.horizon_years = 10;
        scenario.mortgage = Mortgage {
            principal: 120_000.0,
            annual_interest_rate_pct: 1.0,
            term_years: 5,
        };

        let engine = ProjectionEngine::new();
        let result = engine.project(&scenario).unwrap();

        let last_with_loan = &result.snapshots[59]; // month 60
        let first_without = &result.snapshots[60]; // month 61
        assert!(last_with_loan.mortgage_payment > 0.0);
        assert_eq!(first_without.mortgage_payment, 0.0);
        assert_eq!(result.snapshots.len(), 120);
    }

    #[test]
    fn test_inflation_steps_at_month_twelve() {
        let mut scenario = flat_scenario();
        scenario.monthly_fixed_expenses = 100.0;
        scenario.annual_inflation_rate_pct = 2.0;

        let engine = ProjectionEngine::new();
        let result = engine.project(&scenario).unwrap();

        // Months 1-11 are uninflated; the factor first steps at month 12
        assert_abs_diff_eq!(result.snapshots[10].total_expenses, 100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(result.snapshots[11].total_expenses, 102.0, epsilon = 1e-9);
        // Month 24 carries two years of inflation
        assert_abs_diff_eq!(
            result.snapshots[23].total_expenses,
            100.0 * 1.02 * 1.02,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_deduction_offset_is_flat_and_month_invariant() {
        let mut scenario = flat_scenario();
        scenario.horizon_years = 10;
        scenario.mortgage = Mortgage {
            principal: 120_000.0,
            annual_interest_rate_pct: 1.0,
            term_years: 5,
        };
        scenario.deductions = vec![Deduction::PrimaryResidenceMortgage];

        let engine = ProjectionEngine::new();
        let result = engine.project(&scenario).unwrap();

        let expected_offset = 120_000.0 * 0.19 / 12.0;
        assert_abs_diff_eq!(result.snapshots[0].deduction_offset, expected_offset);
        // The offset does not decay with the balance and outlives the term
        assert_abs_diff_eq!(result.snapshots[119].deduction_offset, expected_offset);

        // Other deduction kinds carry no modeled effect
        scenario.deductions = vec![Deduction::Renovation, Deduction::OtherDeductible];
        let result = engine.project(&scenario).unwrap();
        assert_eq!(result.snapshots[0].deduction_offset, 0.0);
    }

    #[test]
    fn test_percentage_savings_target_routes_share_of_income() {
        let mut scenario = flat_scenario();
        scenario.monthly_savings_target = 10.0;
        scenario.savings_is_percentage = true;

        let engine = ProjectionEngine::new();
        let result = engine.project(&scenario).unwrap();

        let first = &result.snapshots[0];
        assert_abs_diff_eq!(first.savings_target, 200.0);
        assert_abs_diff_eq!(first.investment_contribution, 200.0);
    }

    #[test]
    fn test_net_worth_identity_holds_per_row() {
        let engine = ProjectionEngine::new();
        let result = engine.project(&Scenario::baseline("base")).unwrap();

        assert_eq!(result.snapshots.len(), 360);
        for row in &result.snapshots {
            assert_abs_diff_eq!(
                row.total_net_worth,
                row.checking_balance + row.investment_balance,
                epsilon = 1e-9
            );
        }
        assert_abs_diff_eq!(result.snapshots.last().unwrap().year, 30.0);
    }

    #[test]
    fn test_invalid_scenario_fails_before_simulation() {
        let mut scenario = flat_scenario();
        scenario.initial_cash = -1.0;

        let engine = ProjectionEngine::new();
        let err = engine.project(&scenario).unwrap_err();
        assert_eq!(err.field(), "initial_cash");
    }

    #[test]
    fn test_negative_return_cannot_drain_the_investment_balance() {
        // A large negative return would turn the growth term into a
        // withdrawal and push the balance below zero within a month;
        // validation rejects it before any month is simulated
        let mut scenario = flat_scenario();
        scenario.initial_investment = 1_000.0;
        scenario.expected_annual_return_pct = -1_300.0;

        let engine = ProjectionEngine::new();
        let err = engine.project(&scenario).unwrap_err();
        assert_eq!(err.field(), "expected_annual_return_pct");
    }

    #[test]
    fn test_identical_inputs_produce_identical_series() {
        let engine = ProjectionEngine::new();
        let scenario = Scenario::baseline("base");

        let a = engine.project(&scenario).unwrap();
        let b = engine.project(&scenario).unwrap();

        assert_eq!(a.snapshots.len(), b.snapshots.len());
        for (ra, rb) in a.snapshots.iter().zip(&b.snapshots) {
            assert_eq!(ra.checking_balance.to_bits(), rb.checking_balance.to_bits());
            assert_eq!(
                ra.investment_balance.to_bits(),
                rb.investment_balance.to_bits()
            );
            assert_eq!(ra.total_net_worth.to_bits(), rb.total_net_worth.to_bits());
        }
    }
}
