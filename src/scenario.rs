//! Scenario runner for single, paired, and batch projections

use rayon::prelude::*;

use crate::error::ParameterError;
use crate::household::Scenario;
use crate::projection::{ProjectionEngine, ProjectionResult};

/// Runs scenarios through the projection engine
///
/// Each run is an independent pure computation; batch runs are parallelized
/// since no state is shared between scenarios.
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    engine: ProjectionEngine,
}

impl ScenarioRunner {
    pub fn new() -> Self {
        Self {
            engine: ProjectionEngine::new(),
        }
    }

    /// Run a single scenario projection
    pub fn run(&self, scenario: &Scenario) -> Result<ProjectionResult, ParameterError> {
        self.engine.project(scenario)
    }

    /// Run two scenarios and pair their series for comparison.
    ///
    /// Each scenario carries its own full parameter set, mortgage included;
    /// the second run never reuses the first run's computed payment.
    pub fn compare(
        &self,
        first: &Scenario,
        second: &Scenario,
    ) -> Result<ScenarioComparison, ParameterError> {
        log::info!(
            "comparing `{}` against `{}`",
            first.name,
            second.name
        );
        Ok(ScenarioComparison {
            first: self.engine.project(first)?,
            second: self.engine.project(second)?,
        })
    }

    /// Run many scenarios in parallel, preserving input order
    pub fn run_batch(&self, scenarios: &[Scenario]) -> Result<Vec<ProjectionResult>, ParameterError> {
        scenarios
            .par_iter()
            .map(|scenario| self.engine.project(scenario))
            .collect()
    }
}

/// Paired projection results for two compared scenarios
#[derive(Debug, Clone)]
pub struct ScenarioComparison {
    pub first: ProjectionResult,
    pub second: ProjectionResult,
}

impl ScenarioComparison {
    /// Final net worth of the second scenario minus the first
    pub fn final_net_worth_delta(&self) -> f64 {
        self.second.final_net_worth() - self.first.final_net_worth()
    }

    /// Month-by-month net worth difference (second minus first)
    pub fn net_worth_deltas(&self) -> Vec<f64> {
        self.first
            .snapshots
            .iter()
            .zip(&self.second.snapshots)
            .map(|(a, b)| b.total_net_worth - a.total_net_worth)
            .collect()
    }
}
