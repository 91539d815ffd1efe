//! Scenario parameter set and its input contract

use serde::{Deserialize, Serialize};

use crate::error::{require_finite, require_in_range, require_non_negative, ParameterError};
use crate::mortgage::Mortgage;

/// Investor risk posture, mapped to a plausible annual return range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskProfile {
    Conservative,
    Balanced,
    Aggressive,
}

impl RiskProfile {
    /// Plausible annual return range for the profile, in percent
    pub fn return_range_pct(&self) -> (f64, f64) {
        match self {
            RiskProfile::Conservative => (3.0, 4.0),
            RiskProfile::Balanced => (5.0, 7.0),
            RiskProfile::Aggressive => (7.0, 10.0),
        }
    }

    /// Midpoint of the profile's range, used when no explicit return is given
    pub fn default_return_pct(&self) -> f64 {
        let (lo, hi) = self.return_range_pct();
        (lo + hi) / 2.0
    }
}

/// Tax deduction category attached to a scenario.
///
/// Only the primary-residence mortgage deduction affects the cash flow;
/// the other categories are carried for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Deduction {
    PrimaryResidenceMortgage,
    Renovation,
    OtherDeductible,
}

/// Complete parameter set for one projection run.
///
/// A scenario is a plain value: two scenarios with equal fields produce
/// bit-identical projections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Label used in reports and comparisons
    pub name: String,

    /// Opening checking-account balance
    pub initial_cash: f64,

    /// Opening investment-portfolio balance
    pub initial_investment: f64,

    /// Net income credited each month (may be negative for a net-outflow
    /// household)
    pub monthly_net_income: f64,

    /// Recurring monthly expenses, subject to inflation
    pub monthly_fixed_expenses: f64,

    /// Recurring annual expenses, prorated monthly and subject to inflation
    pub annual_fixed_expenses: f64,

    /// Amount routed to investments each month, either absolute or a
    /// percentage of income depending on `savings_is_percentage`
    pub monthly_savings_target: f64,

    /// Interpret `monthly_savings_target` as a percentage of monthly income
    #[serde(default)]
    pub savings_is_percentage: bool,

    /// Projection horizon in years
    pub horizon_years: u32,

    /// Annual inflation applied to expenses, in percent
    pub annual_inflation_rate_pct: f64,

    /// Risk posture bounding the plausible return
    pub risk_profile: RiskProfile,

    /// Expected annual investment return, in percent
    pub expected_annual_return_pct: f64,

    /// Mortgage terms; a zero principal means no loan
    pub mortgage: Mortgage,

    /// Tax deductions claimed by the household
    #[serde(default)]
    pub deductions: Vec<Deduction>,
}

impl Scenario {
    /// A representative financed-household scenario, useful as a starting
    /// point for demos and tests.
    pub fn baseline(name: &str) -> Self {
        Self {
            name: name.to_string(),
            initial_cash: 100_000.0,
            initial_investment: 0.0,
            monthly_net_income: 1_700.0,
            monthly_fixed_expenses: 800.0,
            annual_fixed_expenses: 1_200.0,
            monthly_savings_target: 200.0,
            savings_is_percentage: false,
            horizon_years: 30,
            annual_inflation_rate_pct: 2.0,
            risk_profile: RiskProfile::Balanced,
            expected_annual_return_pct: 6.0,
            mortgage: Mortgage {
                principal: 200_000.0,
                annual_interest_rate_pct: 2.5,
                term_years: 25,
            },
            deductions: vec![Deduction::PrimaryResidenceMortgage],
        }
    }

    /// Projection horizon in months
    pub fn horizon_months(&self) -> u32 {
        self.horizon_years * 12
    }

    /// Whether the scenario claims the given deduction
    pub fn has_deduction(&self, deduction: Deduction) -> bool {
        self.deductions.contains(&deduction)
    }

    /// Monthly amount routed to investments, resolving the percentage mode
    pub fn effective_monthly_savings(&self) -> f64 {
        if self.savings_is_percentage {
            self.monthly_net_income * self.monthly_savings_target / 100.0
        } else {
            self.monthly_savings_target
        }
    }

    /// Clamp the expected return into the risk profile's plausible range,
    /// warning when the stated value falls outside it. Input surfaces call
    /// this before handing scenarios to the engine; the engine itself
    /// consumes the field as given.
    pub fn clamp_return_to_profile(&mut self) {
        let (lo, hi) = self.risk_profile.return_range_pct();
        let clamped = self.expected_annual_return_pct.clamp(lo, hi);
        if clamped != self.expected_annual_return_pct {
            log::warn!(
                "scenario '{}': expected return {}% outside {:?} range [{}, {}], clamped to {}%",
                self.name,
                self.expected_annual_return_pct,
                self.risk_profile,
                lo,
                hi,
                clamped
            );
            self.expected_annual_return_pct = clamped;
        }
    }

    /// Check every parameter against the input contract. Runs before any
    /// simulation; the engine never computes with an invalid scenario.
    pub fn validate(&self) -> Result<(), ParameterError> {
        require_non_negative("initial_cash", self.initial_cash)?;
        require_non_negative("initial_investment", self.initial_investment)?;
        require_finite("monthly_net_income", self.monthly_net_income)?;
        require_non_negative("monthly_fixed_expenses", self.monthly_fixed_expenses)?;
        require_non_negative("annual_fixed_expenses", self.annual_fixed_expenses)?;
        require_non_negative("monthly_savings_target", self.monthly_savings_target)?;
        require_in_range("horizon_years", self.horizon_years as f64, 5.0, 40.0)?;
        require_in_range(
            "annual_inflation_rate_pct",
            self.annual_inflation_rate_pct,
            0.0,
            5.0,
        )?;
        require_non_negative("expected_annual_return_pct", self.expected_annual_return_pct)?;
        self.mortgage.validate()?;
        Ok(())
    }
}
