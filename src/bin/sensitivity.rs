//! Tariff x discount-rate sensitivity sweep
//!
//! Runs the projection across a grid of feed-in tariffs and discount rates
//! and writes one summary line per cell for comparison in a spreadsheet.

use rayon::prelude::*;
use std::fs::File;
use std::io::Write;
use std::time::Instant;
use windfarm_finance::projection::compute_financial_model;
use windfarm_finance::FinancialInputs;

/// Summary metrics for one grid cell
#[derive(Debug, Clone)]
struct SweepPoint {
    fit: f64,
    discount_rate: f64,
    npv: f64,
    irr: f64,
    cumulative_equity: f64,
    min_dscr: f64,
}

fn main() {
    env_logger::init();

    let base = FinancialInputs::default();
    println!("Base case: FIT {:.4}/kWh, discount rate {:.2}%", base.fit, base.discount_rate * 100.0);

    // +/-40% around the base tariff in 5% steps, discount rates 4%..12%
    let fits: Vec<f64> = (0..=16).map(|i| base.fit * (0.6 + 0.05 * i as f64)).collect();
    let discount_rates: Vec<f64> = (4..=12).map(|i| i as f64 / 100.0).collect();

    let grid: Vec<(f64, f64)> = fits
        .iter()
        .flat_map(|&fit| discount_rates.iter().map(move |&dr| (fit, dr)))
        .collect();

    println!("Running {} scenarios...", grid.len());
    let start = Instant::now();

    let points: Vec<SweepPoint> = grid
        .par_iter()
        .map(|&(fit, discount_rate)| {
            let inputs = FinancialInputs {
                fit,
                discount_rate,
                ..base.clone()
            };
            let results = compute_financial_model(&inputs);

            let min_dscr = results
                .row("DSCR")
                .expect("known label")
                .values
                .iter()
                .copied()
                .fold(f64::INFINITY, f64::min);

            SweepPoint {
                fit,
                discount_rate,
                npv: results.npv,
                irr: results.irr,
                cumulative_equity: results.cumulative_equity_cash_flow,
                min_dscr,
            }
        })
        .collect();

    println!("Completed in {:?}", start.elapsed());

    let csv_path = "sensitivity_output.csv";
    let mut file = File::create(csv_path).expect("Unable to create CSV file");
    writeln!(file, "FIT,DiscountRate,NPV,IRR,CumulativeEquity,MinDSCR").unwrap();
    for p in &points {
        writeln!(
            file,
            "{:.4},{:.4},{:.2},{:.6},{:.2},{:.4}",
            p.fit, p.discount_rate, p.npv, p.irr, p.cumulative_equity, p.min_dscr
        )
        .unwrap();
    }
    println!("Results written to: {}", csv_path);

    // Break-even tariff at the base discount rate
    let breakeven = points
        .iter()
        .filter(|p| (p.discount_rate - base.discount_rate).abs() < 1e-12 && p.npv >= 0.0)
        .min_by(|a, b| a.fit.total_cmp(&b.fit));

    match breakeven {
        Some(p) => println!(
            "Lowest tariff with NPV >= 0 at {:.0}% discount: {:.4}/kWh (NPV {:.0}, min DSCR {:.2})",
            base.discount_rate * 100.0,
            p.fit,
            p.npv,
            p.min_dscr
        ),
        None => println!("No swept tariff reaches NPV >= 0 at the base discount rate"),
    }
}
