//! Monthly financial projection: engine, state, and snapshot outputs

mod engine;
mod snapshots;
mod state;

pub use engine::ProjectionEngine;
pub use snapshots::{MonthlySnapshot, ProjectionResult, ProjectionSummary};
pub use state::SimulationState;
