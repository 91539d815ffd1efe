//! Household scenario parameters and input loading

mod data;
pub mod loader;

pub use data::{Deduction, RiskProfile, Scenario};
pub use loader::{load_scenarios, load_scenarios_from_reader};
