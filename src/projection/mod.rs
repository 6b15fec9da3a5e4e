//! Projection engine for the year-by-year pro-forma and equity-return metrics

mod engine;
mod metrics;
mod proforma;
mod state;

pub use engine::{compute_financial_model, ProjectionEngine};
pub use metrics::{internal_rate_of_return, present_value, DEFAULT_IRR_GUESS};
pub use proforma::{FinancialResults, YearlyRow, ROW_LABELS};
pub use state::ProjectionState;
