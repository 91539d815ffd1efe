//! Fixed-rate mortgage amortization

use serde::{Deserialize, Serialize};

use crate::error::{require_in_range, require_non_negative, require_positive, ParameterError};

/// Mortgage terms for one scenario
///
/// A zero principal means the household carries no loan; the payment
/// calculator is then never invoked and the rate/term bounds do not apply.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mortgage {
    /// Loan principal
    pub principal: f64,

    /// Annual interest rate in percent
    pub annual_interest_rate_pct: f64,

    /// Loan term in years
    pub term_years: u32,
}

impl Mortgage {
    /// A scenario without a loan
    pub fn none() -> Self {
        Self {
            principal: 0.0,
            annual_interest_rate_pct: 0.0,
            term_years: 0,
        }
    }

    /// Whether the scenario carries a loan at all
    pub fn is_financed(&self) -> bool {
        self.principal > 0.0
    }

    /// Loan term in months
    pub fn term_months(&self) -> u32 {
        self.term_years * 12
    }

    /// Check the terms against the input contract.
    ///
    /// The term and rate bounds only bind when a loan is present.
    pub fn validate(&self) -> Result<(), ParameterError> {
        require_non_negative("mortgage.principal", self.principal)?;
        if self.is_financed() {
            require_in_range("mortgage.term_years", self.term_years as f64, 5.0, 35.0)?;
            require_in_range(
                "mortgage.annual_interest_rate_pct",
                self.annual_interest_rate_pct,
                0.5,
                6.0,
            )?;
        }
        Ok(())
    }

    /// Fixed monthly payment from the standard amortization formula.
    ///
    /// A zero rate makes the closed form singular ((1+r)^n - 1 = 0), so it is
    /// special-cased to straight principal division. Zero principal or term
    /// is degenerate and rejected rather than producing a zero or infinite
    /// payment.
    pub fn monthly_payment(&self) -> Result<f64, ParameterError> {
        let principal = require_positive("mortgage.principal", self.principal)?;
        if self.term_years == 0 {
            return Err(ParameterError::NonPositive {
                field: "mortgage.term_years",
                value: 0.0,
            });
        }
        let rate = require_non_negative(
            "mortgage.annual_interest_rate_pct",
            self.annual_interest_rate_pct,
        )?;

        let n = self.term_months() as f64;
        if rate == 0.0 {
            return Ok(principal / n);
        }

        let r = rate / 100.0 / 12.0;
        let growth = (1.0 + r).powf(n);
        Ok(principal * (r * growth) / (growth - 1.0))
    }
}
