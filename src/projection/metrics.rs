//! Present value and internal rate of return over arbitrary cash-flow sequences
//!
//! Both functions operate on a sequence indexed from t=0 (the undiscounted
//! flow) and never raise: undefined arithmetic propagates as NaN/Infinity.

/// Default initial guess for the IRR iteration
pub const DEFAULT_IRR_GUESS: f64 = 0.1;

/// Newton-Raphson iteration cap
const MAX_ITERATIONS: u32 = 200;

/// Convergence tolerance on the rate update
const CONVERGENCE_TOLERANCE: f64 = 1e-9;

/// Present value of a cash-flow sequence at a given discount rate
///
/// Returns Σ C[t] / (1+r)^t for t=0..n. Not guarded: r = -1 yields a
/// division by zero whose ±Infinity/NaN result is propagated to the caller.
pub fn present_value(rate: f64, cash_flows: &[f64]) -> f64 {
    cash_flows
        .iter()
        .enumerate()
        .map(|(t, &cf)| cf / (1.0 + rate).powi(t as i32))
        .sum()
}

/// Internal rate of return of a cash-flow sequence via Newton-Raphson
///
/// Iterates up to the fixed cap from the given guess and returns the rate r
/// with present_value(r, cash_flows) ≈ 0. If an update goes non-finite
/// (derivative near zero), iteration stops and the last finite estimate is
/// returned; the caller must treat a non-finite or wildly out-of-range
/// result as "no meaningful IRR" rather than as an error. Convergence is
/// not guaranteed for sequences without exactly one sign change.
pub fn internal_rate_of_return(cash_flows: &[f64], guess: f64) -> f64 {
    let mut x0 = guess;

    for _ in 0..MAX_ITERATIONS {
        let (f, df) = pv_and_derivative(cash_flows, x0);
        let x1 = x0 - f / df;

        if !x1.is_finite() {
            break;
        }
        if (x1 - x0).abs() < CONVERGENCE_TOLERANCE {
            return x1;
        }
        x0 = x1;
    }

    x0
}

/// Present value and its derivative with respect to the rate
fn pv_and_derivative(cash_flows: &[f64], rate: f64) -> (f64, f64) {
    let mut f = 0.0;
    let mut df = 0.0;

    for (t, &cf) in cash_flows.iter().enumerate() {
        f += cf / (1.0 + rate).powi(t as i32);
        df += -(t as f64) * cf / (1.0 + rate).powi(t as i32 + 1);
    }

    (f, df)
}
