//! Windfarm Finance - Deterministic financial projection engine for single-asset wind projects
//!
//! This library provides:
//! - Year-by-year pro-forma projections (revenue, OPEX, debt service, free cash flow)
//! - Straight-line debt amortization with interest on the outstanding balance
//! - Equity-return metrics (NPV, IRR, cumulative cash flow), aggregate and per-year
//! - Scenario batching for sensitivity analysis

pub mod inputs;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use inputs::{DepreciationMethod, FinancialInputs, InputError};
pub use projection::{FinancialResults, ProjectionEngine, YearlyRow};
pub use scenario::ScenarioRunner;
