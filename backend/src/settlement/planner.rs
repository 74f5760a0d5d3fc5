//! Greedy settlement planner
//!
//! Turns a balance report into a short list of pairwise payments that
//! zeroes every balance. The heuristic matches the largest debtor against
//! the largest creditor and emits `min(owe, due)` each step, so every
//! step fully settles at least one side.
//!
//! # Properties
//!
//! - At most `non_zero_count - 1` transfers for a zero-sum report
//! - Applying every transfer to a zero-sum report zeroes every balance
//! - `from != to` and `amount > 0` for every emitted transfer
//! - Deterministic: ties between equal balances fall back to roster join
//!   order (stable sorts keyed on the net only)
//! - Total: a non-zero-sum report (a caller data-integrity symptom) still
//!   terminates, leaving the residue unpaid on the last participant
//!
//! Greedy matching is not provably minimum-cardinality on every adversarial
//! distribution; that trade-off is accepted for simplicity.

use crate::balance::BalanceReport;
use serde::{Deserialize, Serialize};

/// A balance whose absolute value is below this many minor units counts as
/// settled and its cursor advances. With integer nets this is exactly
/// "remaining == 0".
pub const SETTLED_TOLERANCE: i64 = 1;

/// One suggested payment: `from` pays `to` `amount` minor units
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    pub from: String,
    pub to: String,

    /// Always positive, in minor units of the report's currency
    pub amount: i64,
}

/// Plan the payments that settle all debts in a balance report
///
/// Works on a local copy of the nets; the report itself is never mutated.
/// Members with a zero balance take no part in the plan. An empty plan
/// means the trip is already settled.
///
/// # Example
/// ```
/// use trip_settlement_core_rs::{compute_balances, plan_settlement};
/// use trip_settlement_core_rs::{ExpenseRecord, Member, Roster, ShareRecord};
///
/// let roster = Roster::new(vec![
///     Member::new("alice".to_string(), "Alice".to_string()).unwrap(),
///     Member::new("bob".to_string(), "Bob".to_string()).unwrap(),
/// ]).unwrap();
/// let expenses = vec![ExpenseRecord::with_id(
///     "e1".to_string(), "alice".to_string(), 10_000, "USD".to_string(),
/// ).unwrap()];
/// let shares = vec![
///     ShareRecord::new("e1".to_string(), "alice".to_string(), 5_000).unwrap(),
///     ShareRecord::new("e1".to_string(), "bob".to_string(), 5_000).unwrap(),
/// ];
///
/// let report = compute_balances(&roster, &expenses, &shares, "USD");
/// let plan = plan_settlement(&report);
///
/// assert_eq!(plan.len(), 1);
/// assert_eq!(plan[0].from, "bob");
/// assert_eq!(plan[0].to, "alice");
/// assert_eq!(plan[0].amount, 5_000);
/// ```
pub fn plan_settlement(report: &BalanceReport) -> Vec<Transfer> {
    // Local working copies: (member_id, net). Entries arrive in roster
    // join order, and sort_by is stable, so equal nets keep that order.
    let mut debtors: Vec<(&str, i64)> = report
        .entries
        .iter()
        .filter(|entry| entry.net < 0)
        .map(|entry| (entry.member_id.as_str(), entry.net))
        .collect();
    let mut creditors: Vec<(&str, i64)> = report
        .entries
        .iter()
        .filter(|entry| entry.net > 0)
        .map(|entry| (entry.member_id.as_str(), entry.net))
        .collect();

    // Most negative first / most positive first
    debtors.sort_by(|a, b| a.1.cmp(&b.1));
    creditors.sort_by(|a, b| b.1.cmp(&a.1));

    let mut transfers = Vec::new();
    let mut i = 0;
    let mut j = 0;

    // Each iteration fully settles at least one side, so the loop runs at
    // most debtors.len() + creditors.len() times even on malformed input.
    while i < debtors.len() && j < creditors.len() {
        let owe = -debtors[i].1;
        let due = creditors[j].1;
        let pay = owe.min(due);

        transfers.push(Transfer {
            from: debtors[i].0.to_string(),
            to: creditors[j].0.to_string(),
            amount: pay,
        });

        debtors[i].1 += pay;
        creditors[j].1 -= pay;

        if debtors[i].1.abs() < SETTLED_TOLERANCE {
            i += 1;
        }
        if creditors[j].1.abs() < SETTLED_TOLERANCE {
            j += 1;
        }
    }

    transfers
}
