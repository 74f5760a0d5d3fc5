//! Report rendering
//!
//! The only place minor units ever get divided by 100. Everything upstream
//! of this module works in integer cents.

use trip_settlement_core_rs::{BalanceReport, Transfer, UnknownRef};

/// Format minor units as a currency string, e.g. `USD 50.00`, `USD -33.34`
pub fn format_minor_units(cents: i64, currency: &str) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{currency} {sign}{}.{:02}", abs / 100, abs % 100)
}

/// Format minor units without the currency prefix, e.g. `-33.34`
///
/// Used for CSV cells, where the currency is its own column.
pub fn format_decimal(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{sign}{}.{:02}", abs / 100, abs % 100)
}

/// Print net balances and the suggested settlement plan for one currency
pub fn print_report(report: &BalanceReport, plan: &[Transfer]) {
    let currency = report.currency.as_str();
    let name_of = |id: &str| -> String {
        report
            .entries
            .iter()
            .find(|e| e.member_id == id)
            .map(|e| e.display_name.clone())
            .unwrap_or_else(|| id.to_string())
    };

    println!("Net Balances ({currency})");
    for entry in &report.entries {
        println!(
            "  {:<20} {}",
            entry.display_name,
            format_minor_units(entry.net, currency)
        );
    }

    println!("\nSuggested Settlements ({currency})");
    if plan.is_empty() {
        println!("  All balances are settled!");
    } else {
        for transfer in plan {
            println!(
                "  {} -> {}  {}",
                name_of(&transfer.from),
                name_of(&transfer.to),
                format_minor_units(transfer.amount, currency)
            );
        }
    }

    // Stale references are a data-integrity signal, not part of the report
    for unknown in &report.unknown_refs {
        match unknown {
            UnknownRef::Payer {
                expense_id,
                payer_id,
            } => eprintln!("warning: expense {expense_id} paid by unknown member {payer_id}"),
            UnknownRef::Beneficiary {
                expense_id,
                beneficiary_id,
            } => eprintln!(
                "warning: expense {expense_id} has share for unknown member {beneficiary_id}"
            ),
        }
    }
}
