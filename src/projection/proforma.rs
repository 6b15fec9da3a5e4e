//! Pro-forma output structures for projections

use serde::{Deserialize, Serialize};

/// Canonical pro-forma row labels, in output order
pub const ROW_LABELS: [&str; 16] = [
    "Revenue",
    "Repairs & Maintenance",
    "Insurance",
    "Spare Parts",
    "Management",
    "Depreciation",
    "Total OPEX",
    "EBIT",
    "Interest Expense",
    "EBT",
    "Tax",
    "Net Income",
    "CFADS",
    "Principal Repayment",
    "Free Cash Flow to Equity",
    "DSCR",
];

/// A named time series: one pro-forma line with one value per projection year
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearlyRow {
    pub label: String,
    /// Per-year values, in year order; length = repayment period
    pub values: Vec<f64>,
}

impl YearlyRow {
    pub fn new(label: &str, values: Vec<f64>) -> Self {
        Self {
            label: label.to_string(),
            values,
        }
    }
}

/// Complete projection result
///
/// Values may be NaN or ±Infinity for degenerate inputs; consumers are
/// responsible for rendering non-finite values distinctly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialResults {
    /// Pro-forma rows in canonical label order
    pub rows: Vec<YearlyRow>,

    /// NPV of the full equity cash-flow sequence (t=0..N) at the discount rate
    pub npv: f64,

    /// IRR of the full equity cash-flow sequence
    pub irr: f64,

    /// Undiscounted sum of the full equity cash-flow sequence
    pub cumulative_equity_cash_flow: f64,

    /// NPV of the sequence truncated after each year k=1..N
    pub per_year_npv: Vec<f64>,

    /// IRR of the truncated sequence, NaN where no finite root was found
    pub per_year_irr: Vec<f64>,

    /// Cumulative equity cash flow through each year k=1..N
    pub per_year_cumulative_equity: Vec<f64>,
}

impl FinancialResults {
    /// Look up a pro-forma row by its label
    pub fn row(&self, label: &str) -> Option<&YearlyRow> {
        self.rows.iter().find(|r| r.label == label)
    }

    /// Number of projected years
    pub fn years(&self) -> usize {
        self.rows.first().map(|r| r.values.len()).unwrap_or(0)
    }
}

/// All computed values for a single projection year
#[derive(Debug, Clone)]
pub(crate) struct ProformaYear {
    pub revenue: f64,
    pub repairs: f64,
    pub insurance: f64,
    pub spare_parts: f64,
    pub management: f64,
    pub depreciation: f64,
    pub total_opex: f64,
    pub ebit: f64,
    pub interest_expense: f64,
    pub ebt: f64,
    pub tax: f64,
    pub net_income: f64,
    pub cfads: f64,
    pub principal_repayment: f64,
    pub free_cash_flow_to_equity: f64,
    pub dscr: f64,
}

/// Accumulator pivoting per-year values into per-metric rows
#[derive(Debug, Default)]
pub(crate) struct ProformaRows {
    revenue: Vec<f64>,
    repairs: Vec<f64>,
    insurance: Vec<f64>,
    spare_parts: Vec<f64>,
    management: Vec<f64>,
    depreciation: Vec<f64>,
    total_opex: Vec<f64>,
    ebit: Vec<f64>,
    interest_expense: Vec<f64>,
    ebt: Vec<f64>,
    tax: Vec<f64>,
    net_income: Vec<f64>,
    cfads: Vec<f64>,
    principal_repayment: Vec<f64>,
    free_cash_flow_to_equity: Vec<f64>,
    dscr: Vec<f64>,
}

impl ProformaRows {
    pub fn push_year(&mut self, year: &ProformaYear) {
        self.revenue.push(year.revenue);
        self.repairs.push(year.repairs);
        self.insurance.push(year.insurance);
        self.spare_parts.push(year.spare_parts);
        self.management.push(year.management);
        self.depreciation.push(year.depreciation);
        self.total_opex.push(year.total_opex);
        self.ebit.push(year.ebit);
        self.interest_expense.push(year.interest_expense);
        self.ebt.push(year.ebt);
        self.tax.push(year.tax);
        self.net_income.push(year.net_income);
        self.cfads.push(year.cfads);
        self.principal_repayment.push(year.principal_repayment);
        self.free_cash_flow_to_equity.push(year.free_cash_flow_to_equity);
        self.dscr.push(year.dscr);
    }

    /// Emit the finished rows in canonical label order
    pub fn into_rows(self) -> Vec<YearlyRow> {
        let series = [
            self.revenue,
            self.repairs,
            self.insurance,
            self.spare_parts,
            self.management,
            self.depreciation,
            self.total_opex,
            self.ebit,
            self.interest_expense,
            self.ebt,
            self.tax,
            self.net_income,
            self.cfads,
            self.principal_repayment,
            self.free_cash_flow_to_equity,
            self.dscr,
        ];

        ROW_LABELS
            .into_iter()
            .zip(series)
            .map(|(label, values)| YearlyRow::new(label, values))
            .collect()
    }
}
