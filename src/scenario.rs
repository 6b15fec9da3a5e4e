//! Scenario runner for batch projections and sensitivity analysis
//!
//! Holds a base input snapshot once, then runs the engine for the base
//! case and any number of variant snapshots without touching the base.

use crate::inputs::FinancialInputs;
use crate::projection::{compute_financial_model, FinancialResults};

/// Pre-loaded scenario runner for efficient batch projections
///
/// # Example
/// ```
/// use windfarm_finance::{FinancialInputs, ScenarioRunner};
///
/// let runner = ScenarioRunner::new(FinancialInputs::default());
/// for fit in [0.10, 0.12, 0.14] {
///     let results = runner.run_with(|inputs| inputs.fit = fit);
///     println!("FIT {fit}: NPV {:.0}", results.npv);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    /// Base input snapshot all variants start from
    base_inputs: FinancialInputs,
}

impl ScenarioRunner {
    /// Create a runner with the given base inputs
    pub fn new(base_inputs: FinancialInputs) -> Self {
        Self { base_inputs }
    }

    /// Run the base case unchanged
    pub fn run(&self) -> FinancialResults {
        compute_financial_model(&self.base_inputs)
    }

    /// Run one variant: clone the base inputs, apply the edit, recompute
    pub fn run_with<F>(&self, edit: F) -> FinancialResults
    where
        F: FnOnce(&mut FinancialInputs),
    {
        let mut inputs = self.base_inputs.clone();
        edit(&mut inputs);
        compute_financial_model(&inputs)
    }

    /// Run a batch of complete input snapshots, preserving order
    pub fn run_batch(&self, scenarios: &[FinancialInputs]) -> Vec<FinancialResults> {
        scenarios.iter().map(compute_financial_model).collect()
    }

    /// Sweep the feed-in tariff across the given values
    pub fn fit_sweep(&self, fits: &[f64]) -> Vec<(f64, FinancialResults)> {
        fits.iter()
            .map(|&fit| (fit, self.run_with(|inputs| inputs.fit = fit)))
            .collect()
    }

    /// Get reference to base inputs for inspection
    pub fn inputs(&self) -> &FinancialInputs {
        &self.base_inputs
    }

    /// Get mutable reference to base inputs for customization
    pub fn inputs_mut(&mut self) -> &mut FinancialInputs {
        &mut self.base_inputs
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new(FinancialInputs::default())
    }
}
