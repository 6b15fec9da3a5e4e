//! Techno-economic input parameters for a projection run

mod data;
mod loader;

pub use data::{DepreciationMethod, FinancialInputs};
pub use loader::InputError;
