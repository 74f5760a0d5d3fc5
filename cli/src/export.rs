//! CSV exports
//!
//! Two export surfaces: the raw expense list and the computed net
//! balances. Column layouts match the web app's download feature:
//! expenses as `Date, Description, Category, Paid By, Amount, Currency`,
//! balances as `Member, Net Balance (<CUR>)`.

use crate::render::format_decimal;
use crate::trip_file::TripFile;
use anyhow::{Context, Result};
use std::path::Path;
use trip_settlement_core_rs::{BalanceReport, Roster};

/// Write all expenses of a trip to a CSV file
pub fn write_expenses_csv(path: &Path, trip: &TripFile, roster: &Roster) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    writer.write_record(["Date", "Description", "Category", "Paid By", "Amount", "Currency"])?;

    for expense in &trip.expenses {
        let date = expense
            .spent_at()
            .map(|d| d.to_string())
            .unwrap_or_default();
        let payer = roster
            .display_name_of(expense.payer_id())
            .unwrap_or("Unknown");

        writer.write_record([
            date.as_str(),
            expense.memo().unwrap_or("No description"),
            expense.category().unwrap_or("Uncategorized"),
            payer,
            format_decimal(expense.amount()).as_str(),
            expense.currency(),
        ])?;
    }

    writer.flush().context("Failed to write expenses CSV")?;
    Ok(())
}

/// Write a balance report to a CSV file
pub fn write_balances_csv(path: &Path, report: &BalanceReport) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    let balance_header = format!("Net Balance ({})", report.currency);
    writer.write_record(["Member", balance_header.as_str()])?;

    for entry in &report.entries {
        writer.write_record([entry.display_name.as_str(), format_decimal(entry.net).as_str()])?;
    }

    writer.flush().context("Failed to write balances CSV")?;
    Ok(())
}
