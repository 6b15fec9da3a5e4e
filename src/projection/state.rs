//! Loop-carried projection state for a single run

use crate::inputs::FinancialInputs;

/// State carried across year steps during one projection call
///
/// Constructed at the start of a call and discarded afterward; the engine
/// holds no state between calls.
#[derive(Debug, Clone)]
pub struct ProjectionState {
    /// Current projection year (1-indexed)
    pub year: u32,

    /// Debt balance outstanding at the start of the year, before this
    /// year's principal repayment
    pub outstanding_principal: f64,

    /// Feed-in tariff escalated up to the current year
    pub current_fit: f64,

    /// Insurance cost escalated up to the current year
    pub current_insurance: f64,

    /// Spare parts cost escalated up to the current year
    pub current_spare_parts: f64,

    /// Management cost escalated up to the current year
    pub current_management: f64,
}

impl ProjectionState {
    /// Initialize state at year 1 from an input snapshot
    pub fn from_inputs(inputs: &FinancialInputs) -> Self {
        Self {
            year: 1,
            outstanding_principal: inputs.total_debt(),
            current_fit: inputs.fit,
            current_insurance: inputs.insurance,
            current_spare_parts: inputs.spare_parts,
            current_management: inputs.management,
        }
    }

    /// Advance to the next year: repay principal and apply escalation
    ///
    /// The principal balance is floored at zero. Escalation is applied only
    /// when the corresponding inflation rate is non-zero; repairs is not
    /// tracked here because it is re-derived from CAPEX each year.
    pub fn advance_year(&mut self, inputs: &FinancialInputs) {
        self.year += 1;

        self.outstanding_principal =
            (self.outstanding_principal - inputs.principal_repayment()).max(0.0);

        if inputs.inflation_fit != 0.0 {
            self.current_fit *= 1.0 + inputs.inflation_fit;
        }
        if inputs.inflation_opex != 0.0 {
            self.current_insurance *= 1.0 + inputs.inflation_opex;
            self.current_spare_parts *= 1.0 + inputs.inflation_opex;
            self.current_management *= 1.0 + inputs.inflation_opex;
        }
    }
}
