//! trip-settle: balance and settle a trip snapshot
//!
//! Usage:
//!   trip-settle <trip.json>                         print balances and plan
//!   trip-settle <trip.json> export-expenses <out>   write expenses CSV
//!   trip-settle <trip.json> export-balances <out> [CUR]
//!                                                   write balances CSV

mod export;
mod render;
mod trip_file;

use anyhow::{bail, Result};
use std::env;
use std::path::Path;
use trip_settlement_core_rs::{compute_balances, plan_settlement, Roster};
use trip_file::TripFile;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        bail!("usage: trip-settle <trip.json> [report | export-expenses <out.csv> | export-balances <out.csv> [CURRENCY]]");
    }

    let trip = TripFile::load(Path::new(&args[1]))?;
    let roster = trip.roster()?;

    match args.get(2).map(String::as_str).unwrap_or("report") {
        "report" => run_report(&trip, &roster)?,
        "export-expenses" => {
            let out = args
                .get(3)
                .ok_or_else(|| anyhow::anyhow!("export-expenses needs an output path"))?;
            export::write_expenses_csv(Path::new(out), &trip, &roster)?;
            println!("Wrote {} expenses to {}", trip.expenses.len(), out);
        }
        "export-balances" => {
            let out = args
                .get(3)
                .ok_or_else(|| anyhow::anyhow!("export-balances needs an output path"))?;
            let currency = args.get(4).cloned().unwrap_or_else(|| "USD".to_string());
            let report = compute_balances(&roster, &trip.expenses, &trip.shares, &currency);
            export::write_balances_csv(Path::new(out), &report)?;
            println!("Wrote {} balances to {}", report.entries.len(), out);
        }
        other => bail!("unknown command: {other}"),
    }

    Ok(())
}

/// Print the per-currency balance report and settlement plan
fn run_report(trip: &TripFile, roster: &Roster) -> Result<()> {
    println!("Trip: {}\n", trip.name);

    let buckets = trip.currencies();
    if buckets.is_empty() {
        println!("No expenses recorded.");
        return Ok(());
    }

    for (i, currency) in buckets.iter().enumerate() {
        if i > 0 {
            println!();
        }
        let report = compute_balances(roster, &trip.expenses, &trip.shares, currency);
        let plan = plan_settlement(&report);
        render::print_report(&report, &plan);
    }

    Ok(())
}
