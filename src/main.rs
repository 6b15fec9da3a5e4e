//! Windfarm Finance CLI
//!
//! Runs the projection for an input snapshot (JSON file or the built-in
//! reference case), prints the pro-forma with summary metrics, and writes
//! the full table to CSV.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use windfarm_finance::{FinancialInputs, FinancialResults, ProjectionEngine};

#[derive(Debug, Parser)]
#[command(name = "windfarm_finance", about = "Financial projection for a single wind project")]
struct Args {
    /// JSON file with a complete input snapshot (defaults to the reference case)
    #[arg(long)]
    inputs: Option<PathBuf>,

    /// Path for the CSV pro-forma output
    #[arg(long, default_value = "proforma_output.csv")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!("Windfarm Finance v0.1.0");
    println!("=======================\n");

    let inputs = match &args.inputs {
        Some(path) => FinancialInputs::from_json_path(path)
            .with_context(|| format!("loading inputs from {}", path.display()))?,
        None => FinancialInputs::default(),
    };

    println!("Project:");
    println!("  Rated Size: {:.0} kW", inputs.size_kw);
    println!("  Capacity Factor: {:.2}", inputs.capacity_factor);
    println!("  Feed-in Tariff: {:.4}/kWh", inputs.fit);
    println!("  Total CAPEX: {:.2}", inputs.total_capex());
    println!(
        "  Financing: {:.0}% debt / {:.0}% equity over {} years at {:.2}%",
        inputs.debt_ratio * 100.0,
        inputs.equity_ratio * 100.0,
        inputs.repayment_period,
        inputs.interest_rate * 100.0
    );
    println!();

    let results = ProjectionEngine::new(inputs.clone()).run();

    // Print a condensed per-year view to the console
    println!("Projection Results ({} years):", results.years());
    println!(
        "{:>4} {:>14} {:>14} {:>14} {:>14} {:>14} {:>8}",
        "Year", "Revenue", "Total OPEX", "EBIT", "Interest", "FCFE", "DSCR"
    );
    println!("{}", "-".repeat(90));

    let value = |label: &str, year: usize| results.row(label).expect("known label").values[year];
    for year in 0..results.years() {
        println!(
            "{:>4} {:>14.2} {:>14.2} {:>14.2} {:>14.2} {:>14.2} {:>8.3}",
            year + 1,
            value("Revenue", year),
            value("Total OPEX", year),
            value("EBIT", year),
            value("Interest Expense", year),
            value("Free Cash Flow to Equity", year),
            value("DSCR", year),
        );
    }

    write_csv(&args.output, &results).with_context(|| format!("writing {}", args.output.display()))?;
    println!("\nFull results written to: {}", args.output.display());

    println!("\nSummary:");
    println!("  Equity Invested: {:.2}", inputs.total_equity());
    println!("  NPV @ {:.1}%: {:.2}", inputs.discount_rate * 100.0, results.npv);
    println!("  Equity IRR: {}", format_rate(results.irr));
    println!("  Cumulative Equity Cash Flow: {:.2}", results.cumulative_equity_cash_flow);

    Ok(())
}

/// Render a rate as a percentage, keeping non-finite values visible
fn format_rate(rate: f64) -> String {
    if rate.is_finite() {
        format!("{:.2}%", rate * 100.0)
    } else {
        "n/a".to_string()
    }
}

/// Write the full pro-forma plus per-year metrics, one line per year
fn write_csv(path: &PathBuf, results: &FinancialResults) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    let mut header = vec!["Year".to_string()];
    header.extend(results.rows.iter().map(|r| r.label.clone()));
    header.extend(["NPV_to_date", "IRR_to_date", "Cumulative_Equity"].map(String::from));
    writer.write_record(&header)?;

    for year in 0..results.years() {
        let mut record = vec![(year + 1).to_string()];
        record.extend(results.rows.iter().map(|r| format!("{:.8}", r.values[year])));
        record.push(format!("{:.8}", results.per_year_npv[year]));
        record.push(format!("{:.8}", results.per_year_irr[year]));
        record.push(format!("{:.8}", results.per_year_cumulative_equity[year]));
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}
