//! Load input snapshots from JSON files

use super::FinancialInputs;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use thiserror::Error;

/// Errors raised while reading an input file
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read input file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse input file: {0}")]
    Parse(#[from] serde_json::Error),
}

impl FinancialInputs {
    /// Load a complete input snapshot from a JSON file
    ///
    /// All fields must be present; there are no file-level defaults.
    pub fn from_json_path(path: &Path) -> Result<Self, InputError> {
        let file = File::open(path)?;
        let inputs = serde_json::from_reader(BufReader::new(file))?;
        log::info!("loaded inputs from {}", path.display());
        Ok(inputs)
    }
}
