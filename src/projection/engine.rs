//! Core projection engine for yearly pro-forma cashflow projections

use super::metrics::{internal_rate_of_return, present_value, DEFAULT_IRR_GUESS};
use super::proforma::{FinancialResults, ProformaRows, ProformaYear};
use super::state::ProjectionState;
use crate::inputs::FinancialInputs;

/// Main projection engine
///
/// Stateless across calls: every run builds its own iteration state from
/// the input snapshot and discards it when the result is returned.
pub struct ProjectionEngine {
    inputs: FinancialInputs,
}

impl ProjectionEngine {
    /// Create a new projection engine for one input snapshot
    pub fn new(inputs: FinancialInputs) -> Self {
        Self { inputs }
    }

    /// Run the projection over the full repayment period
    pub fn run(&self) -> FinancialResults {
        let inputs = &self.inputs;
        let years = inputs.repayment_period;

        let mut state = ProjectionState::from_inputs(inputs);
        let mut rows = ProformaRows::default();

        // Equity sequence starts with the t=0 outflow, then one inflow per year
        let mut equity_cash_flows = Vec::with_capacity(years as usize + 1);
        equity_cash_flows.push(-inputs.total_equity());

        for _year in 1..=years {
            let row = self.calculate_year(&state);
            equity_cash_flows.push(row.free_cash_flow_to_equity);
            rows.push_year(&row);

            // Repay principal and escalate prices for the next year
            state.advance_year(inputs);
        }

        let npv = present_value(inputs.discount_rate, &equity_cash_flows);
        let irr = internal_rate_of_return(&equity_cash_flows, DEFAULT_IRR_GUESS);
        let cumulative_equity_cash_flow: f64 = equity_cash_flows.iter().sum();

        // Per-year metrics on each truncated prefix t=0..k, each IRR solved
        // independently from the default guess
        let mut per_year_npv = Vec::with_capacity(years as usize);
        let mut per_year_irr = Vec::with_capacity(years as usize);
        let mut per_year_cumulative_equity = Vec::with_capacity(years as usize);

        for k in 1..=years as usize {
            let prefix = &equity_cash_flows[..=k];
            per_year_npv.push(present_value(inputs.discount_rate, prefix));

            let irr_k = internal_rate_of_return(prefix, DEFAULT_IRR_GUESS);
            per_year_irr.push(if irr_k.is_finite() { irr_k } else { f64::NAN });

            per_year_cumulative_equity.push(prefix.iter().sum());
        }

        FinancialResults {
            rows: rows.into_rows(),
            npv,
            irr,
            cumulative_equity_cash_flow,
            per_year_npv,
            per_year_irr,
            per_year_cumulative_equity,
        }
    }

    /// Calculate the pro-forma for a single year from the current state
    fn calculate_year(&self, state: &ProjectionState) -> ProformaYear {
        let inputs = &self.inputs;

        let revenue = inputs.annual_energy_production() * state.current_fit;

        // OPEX: repairs stays a fixed share of CAPEX, the absolute costs
        // carry this year's escalation, depreciation is straight-line
        let repairs = inputs.repairs_amount();
        let insurance = state.current_insurance;
        let spare_parts = state.current_spare_parts;
        let management = state.current_management;
        let depreciation = inputs.annual_depreciation();
        let total_opex = repairs + insurance + spare_parts + management + depreciation;

        let ebit = revenue - total_opex;

        // Interest accrues on the balance before this year's repayment
        let interest_expense = state.outstanding_principal * inputs.interest_rate;

        let ebt = ebit - interest_expense;
        // No floor at zero: negative EBT yields a tax credit
        let tax = ebt * inputs.tax_rate;
        let net_income = ebt - tax;

        // Add back non-cash depreciation; tax stays EBT-based here, which
        // ties CFADS to the debt schedule (this engine's accounting
        // convention, kept for output parity)
        let cfads = ebit - tax + depreciation;

        let principal_repayment = inputs.principal_repayment();
        let free_cash_flow_to_equity = cfads - interest_expense - principal_repayment;

        let debt_service = interest_expense + principal_repayment;
        let dscr = if debt_service == 0.0 {
            f64::INFINITY
        } else {
            cfads / debt_service
        };

        ProformaYear {
            revenue,
            repairs,
            insurance,
            spare_parts,
            management,
            depreciation,
            total_opex,
            ebit,
            interest_expense,
            ebt,
            tax,
            net_income,
            cfads,
            principal_repayment,
            free_cash_flow_to_equity,
            dscr,
        }
    }
}

/// Compute the full financial model for one input snapshot
///
/// Convenience wrapper around [`ProjectionEngine`] for callers that hold
/// inputs by reference.
pub fn compute_financial_model(inputs: &FinancialInputs) -> FinancialResults {
    ProjectionEngine::new(inputs.clone()).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::ROW_LABELS;
    use approx::assert_relative_eq;

    fn reference_inputs() -> FinancialInputs {
        FinancialInputs::default()
    }

    #[test]
    fn test_every_row_spans_the_repayment_period() {
        let inputs = reference_inputs();
        let results = compute_financial_model(&inputs);

        assert_eq!(results.rows.len(), ROW_LABELS.len());
        for row in &results.rows {
            assert_eq!(row.values.len(), inputs.repayment_period as usize);
        }
        assert_eq!(results.per_year_npv.len(), inputs.repayment_period as usize);
        assert_eq!(results.per_year_irr.len(), inputs.repayment_period as usize);
        assert_eq!(
            results.per_year_cumulative_equity.len(),
            inputs.repayment_period as usize
        );
    }

    #[test]
    fn test_reference_case_year_one() {
        let results = compute_financial_model(&reference_inputs());

        // 1500 kW * 0.3 CF * 0.95 availability * 8760 h = 3,742,740 kWh
        let revenue = results.row("Revenue").unwrap();
        assert_relative_eq!(revenue.values[0], 3_742_740.0 * 0.14, epsilon = 1e-6);

        let interest = results.row("Interest Expense").unwrap();
        assert_relative_eq!(interest.values[0], 1_751_250.0 * 0.08, epsilon = 1e-6);

        let principal = results.row("Principal Repayment").unwrap();
        assert_relative_eq!(principal.values[0], 87_562.5, epsilon = 1e-6);

        let depreciation = results.row("Depreciation").unwrap();
        assert_relative_eq!(depreciation.values[0], 116_750.0, epsilon = 1e-6);
    }

    #[test]
    fn test_zero_inflation_has_no_drift() {
        let results = compute_financial_model(&reference_inputs());

        for label in ["Revenue", "Insurance", "Spare Parts", "Management"] {
            let row = results.row(label).unwrap();
            for &v in &row.values {
                assert_relative_eq!(v, row.values[0], epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_interest_declines_to_one_final_installment() {
        let inputs = reference_inputs();
        let results = compute_financial_model(&inputs);

        let interest = &results.row("Interest Expense").unwrap().values;
        for pair in interest.windows(2) {
            assert!(pair[1] < pair[0]);
        }

        // Final-year balance is exactly one remaining installment
        let last = interest[interest.len() - 1];
        assert_relative_eq!(
            last,
            inputs.principal_repayment() * inputs.interest_rate,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_income_statement_identities() {
        let results = compute_financial_model(&reference_inputs());
        let years = results.years();

        for y in 0..years {
            let get = |label: &str| results.row(label).unwrap().values[y];

            assert_relative_eq!(
                get("Total OPEX"),
                get("Repairs & Maintenance")
                    + get("Insurance")
                    + get("Spare Parts")
                    + get("Management")
                    + get("Depreciation"),
                epsilon = 1e-9
            );
            assert_relative_eq!(get("EBT"), get("EBIT") - get("Interest Expense"), epsilon = 1e-9);
            assert_relative_eq!(get("Net Income"), get("EBT") - get("Tax"), epsilon = 1e-9);
            assert_relative_eq!(
                get("CFADS"),
                get("EBIT") - get("Tax") + get("Depreciation"),
                epsilon = 1e-9
            );
            assert_relative_eq!(
                get("Free Cash Flow to Equity"),
                get("CFADS") - get("Interest Expense") - get("Principal Repayment"),
                epsilon = 1e-9
            );
            assert_relative_eq!(
                get("DSCR"),
                get("CFADS") / (get("Interest Expense") + get("Principal Repayment")),
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn test_cumulative_metrics_are_prefix_sums() {
        let inputs = reference_inputs();
        let results = compute_financial_model(&inputs);

        let fcfe = &results.row("Free Cash Flow to Equity").unwrap().values;
        let mut running = -inputs.total_equity();

        for (k, &cf) in fcfe.iter().enumerate() {
            running += cf;
            assert_relative_eq!(results.per_year_cumulative_equity[k], running, epsilon = 1e-6);
        }
        assert_relative_eq!(results.cumulative_equity_cash_flow, running, epsilon = 1e-6);
    }

    #[test]
    fn test_aggregate_irr_zeroes_the_equity_npv() {
        let inputs = reference_inputs();
        let results = compute_financial_model(&inputs);

        let mut equity_flows = vec![-inputs.total_equity()];
        equity_flows.extend_from_slice(&results.row("Free Cash Flow to Equity").unwrap().values);

        assert!(present_value(results.irr, &equity_flows).abs() < 1e-6);
        assert_relative_eq!(
            results.npv,
            present_value(inputs.discount_rate, &equity_flows),
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_final_year_metrics_match_aggregates() {
        let results = compute_financial_model(&reference_inputs());
        let last = results.years() - 1;

        assert_relative_eq!(results.per_year_npv[last], results.npv, epsilon = 1e-9);
        assert_relative_eq!(
            results.per_year_cumulative_equity[last],
            results.cumulative_equity_cash_flow,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_all_equity_project_has_infinite_dscr() {
        let inputs = FinancialInputs {
            debt_ratio: 0.0,
            equity_ratio: 1.0,
            ..FinancialInputs::default()
        };
        let results = compute_financial_model(&inputs);

        for &dscr in &results.row("DSCR").unwrap().values {
            assert!(dscr.is_infinite() && dscr > 0.0);
        }
        for &interest in &results.row("Interest Expense").unwrap().values {
            assert_eq!(interest, 0.0);
        }
    }

    #[test]
    fn test_negative_ebt_produces_a_tax_credit() {
        // Tariff low enough that the project runs at a loss
        let inputs = FinancialInputs {
            fit: 0.001,
            ..FinancialInputs::default()
        };
        let results = compute_financial_model(&inputs);

        let ebt = results.row("EBT").unwrap().values[0];
        let tax = results.row("Tax").unwrap().values[0];
        assert!(ebt < 0.0);
        assert!(tax < 0.0);
        assert_relative_eq!(tax, ebt * inputs.tax_rate, epsilon = 1e-9);
    }

    #[test]
    fn test_escalated_case_compounds_revenue() {
        let inputs = FinancialInputs {
            inflation_fit: 0.02,
            ..FinancialInputs::default()
        };
        let results = compute_financial_model(&inputs);

        let revenue = &results.row("Revenue").unwrap().values;
        for (y, &v) in revenue.iter().enumerate() {
            let expected = inputs.annual_energy_production() * inputs.fit * 1.02f64.powi(y as i32);
            assert_relative_eq!(v, expected, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_degenerate_inputs_still_return_a_result() {
        // Zero-size project: all-negative equity flows, no meaningful IRR.
        // The engine must still hand back a complete result.
        let inputs = FinancialInputs {
            size_kw: 0.0,
            ..FinancialInputs::default()
        };
        let results = compute_financial_model(&inputs);

        assert_eq!(results.rows.len(), ROW_LABELS.len());
        assert!(results.cumulative_equity_cash_flow < 0.0);
    }
}
