//! Input parameter record matching the project's techno-economic assumptions

use serde::{Deserialize, Serialize};

/// Depreciation method for the CAPEX schedule
///
/// Only straight-line depreciation is computed; other values are accepted
/// and carried through as a label without changing the math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DepreciationMethod {
    StraightLine,
    Other,
}

impl DepreciationMethod {
    /// Get the string representation used in input files
    pub fn as_str(&self) -> &'static str {
        match self {
            DepreciationMethod::StraightLine => "straight-line",
            DepreciationMethod::Other => "other",
        }
    }
}

/// Complete input snapshot for one projection run
///
/// All fields are required; no defaults are applied inside the engine.
/// The engine performs no validation: degenerate values (zero repayment
/// period, negative rates) propagate as NaN/Infinity in the results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialInputs {
    // Project parameters
    /// Capacity factor (0-1)
    pub capacity_factor: f64,

    /// Rated size in kW
    pub size_kw: f64,

    /// Operating hours per year (8760 for a full calendar year)
    pub hours_in_year: f64,

    /// Availability rate (0-1)
    pub availability_rate: f64,

    /// Feed-in tariff in currency per kWh
    pub fit: f64,

    /// Annual FIT escalation rate (decimal, may be zero or negative)
    pub inflation_fit: f64,

    /// Annual OPEX escalation rate (decimal, may be zero or negative)
    pub inflation_opex: f64,

    // CAPEX items
    pub capex_turbines_transformer: f64,
    pub capex_foundations: f64,
    pub capex_internal_cables: f64,
    pub capex_permits_legal_financing: f64,

    // OPEX base-year values
    /// Annual repairs & maintenance as a fraction of total CAPEX
    pub repairs_pct: f64,

    /// Annual insurance cost (absolute, base year)
    pub insurance: f64,

    /// Annual spare parts cost (absolute, base year)
    pub spare_parts: f64,

    /// Annual management cost (absolute, base year)
    pub management: f64,

    // Financing
    /// Debt share of total CAPEX (decimal)
    pub debt_ratio: f64,

    /// Equity share of total CAPEX (decimal, expected to sum with debt_ratio to 1, not enforced)
    pub equity_ratio: f64,

    /// Nominal annual interest rate on outstanding debt
    pub interest_rate: f64,

    /// Flat tax rate applied to EBT
    pub tax_rate: f64,

    /// Repayment period in whole years; defines the projection horizon
    pub repayment_period: u32,

    /// Depreciation method label
    pub depreciation_method: DepreciationMethod,

    /// Discount rate for NPV
    pub discount_rate: f64,
}

impl FinancialInputs {
    /// Total capital expenditure (sum of the four CAPEX components)
    pub fn total_capex(&self) -> f64 {
        self.capex_turbines_transformer
            + self.capex_foundations
            + self.capex_internal_cables
            + self.capex_permits_legal_financing
    }

    /// Debt-financed share of total CAPEX
    pub fn total_debt(&self) -> f64 {
        self.total_capex() * self.debt_ratio
    }

    /// Equity-financed share of total CAPEX (the t=0 outflow)
    pub fn total_equity(&self) -> f64 {
        self.total_capex() * self.equity_ratio
    }

    /// Flat annual principal repayment (straight-line amortization)
    pub fn principal_repayment(&self) -> f64 {
        self.total_debt() / f64::from(self.repayment_period)
    }

    /// Annual energy production in kWh, constant across years
    pub fn annual_energy_production(&self) -> f64 {
        self.size_kw * self.capacity_factor * self.availability_rate * self.hours_in_year
    }

    /// Straight-line annual depreciation over the repayment period
    pub fn annual_depreciation(&self) -> f64 {
        self.total_capex() / f64::from(self.repayment_period)
    }

    /// Annual repairs & maintenance cost, re-derived from CAPEX (never escalated)
    pub fn repairs_amount(&self) -> f64 {
        self.total_capex() * self.repairs_pct
    }
}

impl Default for FinancialInputs {
    /// Reference case: 1.5 MW onshore turbine, 20-year 75/25 debt/equity financing
    fn default() -> Self {
        Self {
            capacity_factor: 0.3,
            size_kw: 1500.0,
            hours_in_year: 8760.0,
            availability_rate: 0.95,
            fit: 0.14,
            inflation_fit: 0.0,
            inflation_opex: 0.0,

            capex_turbines_transformer: 1_725_000.0,
            capex_foundations: 250_000.0,
            capex_internal_cables: 160_000.0,
            capex_permits_legal_financing: 200_000.0,

            repairs_pct: 0.03,
            insurance: 15_728.58,
            spare_parts: 20_700.0,
            management: 7_864.29,

            debt_ratio: 0.75,
            equity_ratio: 0.25,
            interest_rate: 0.08,
            tax_rate: 0.02,
            repayment_period: 20,
            depreciation_method: DepreciationMethod::StraightLine,

            discount_rate: 0.08,
        }
    }
}
