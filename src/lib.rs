//! Household Projection - deterministic net-worth projection engine
//!
//! This library provides:
//! - Fixed-rate mortgage amortization (with zero-rate handling)
//! - Month-by-month household cash-flow simulation over multi-decade horizons
//! - Inflation-adjusted expenses, savings allocation, compounding growth
//! - Scenario comparison and parallel batch runs
//! - Up-front parameter validation with field-level errors

pub mod error;
pub mod household;
pub mod mortgage;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use error::ParameterError;
pub use household::{Deduction, RiskProfile, Scenario};
pub use mortgage::Mortgage;
pub use projection::{MonthlySnapshot, ProjectionEngine, ProjectionResult};
pub use scenario::{ScenarioComparison, ScenarioRunner};
