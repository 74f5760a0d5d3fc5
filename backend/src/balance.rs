//! Balance Aggregator
//!
//! Reduces the full expense history of a trip into one signed net balance
//! per member, in minor currency units. Positive means the member is owed
//! money; negative means the member owes.
//!
//! Balances are derived data: they are recomputed from scratch on every
//! call and never cached or incrementally updated. The data volume of one
//! trip is small, and a pure recompute cannot drift out of sync with the
//! underlying records.
//!
//! # Critical Invariants
//!
//! 1. Every roster member appears in the report, inactive ones at 0
//! 2. When every expense's shares sum to its amount, the report sums to 0
//! 3. The aggregator never assumes invariant 2 — malformed caller data
//!    produces a mathematically consistent non-zero-sum report, not an error
//! 4. Ids absent from the roster contribute nothing; each such reference is
//!    recorded in `unknown_refs` as a data-integrity signal for the caller

use crate::models::expense::{ExpenseRecord, ShareRecord};
use crate::models::member::Roster;
use serde::Serialize;
use std::collections::HashSet;

/// One member's net position
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberBalance {
    pub member_id: String,
    pub display_name: String,

    /// Net balance in minor units: positive = owed to, negative = owes
    pub net: i64,
}

/// A reference to a member id that is not in the roster
///
/// Stale expenses can point at members who have since left the trip. The
/// aggregator drops their contribution rather than failing, and reports
/// each occurrence here so the caller can surface the integrity problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum UnknownRef {
    /// An expense whose payer is not in the roster
    Payer { expense_id: String, payer_id: String },

    /// A share whose beneficiary is not in the roster
    Beneficiary {
        expense_id: String,
        beneficiary_id: String,
    },
}

/// Result of one aggregation pass over a single currency bucket
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BalanceReport {
    /// Currency this report was computed for
    pub currency: String,

    /// Per-member balances, in roster join order
    pub entries: Vec<MemberBalance>,

    /// Member references that were dropped because the id is unknown
    pub unknown_refs: Vec<UnknownRef>,
}

impl BalanceReport {
    /// Net balance for a member id, `None` for ids outside the roster
    pub fn net_of(&self, member_id: &str) -> Option<i64> {
        self.entries
            .iter()
            .find(|entry| entry.member_id == member_id)
            .map(|entry| entry.net)
    }

    /// Sum of all nets
    ///
    /// Exactly 0 for well-formed data; anything else signals shares that do
    /// not sum to their expense totals or dropped unknown references.
    pub fn total(&self) -> i64 {
        self.entries.iter().map(|entry| entry.net).sum()
    }

    /// True when every member's net is exactly 0
    pub fn is_settled(&self) -> bool {
        self.entries.iter().all(|entry| entry.net == 0)
    }

    /// Number of members with a non-zero net
    pub fn non_zero_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.net != 0).count()
    }
}

/// Compute net balances for one trip and one currency
///
/// Pure function of its inputs:
/// - every roster member starts at 0 and stays in the report
/// - each expense in `currency` adds its amount to the payer's net
/// - each share of such an expense subtracts its amount from the
///   beneficiary's net
///
/// Expenses in other currencies, and the shares attached to them, are
/// ignored; each currency bucket is balanced independently. Shares whose
/// `expense_id` matches no expense in the bucket are ignored as well.
///
/// # Example
/// ```
/// use trip_settlement_core_rs::{compute_balances, ExpenseRecord, Member, Roster, ShareRecord};
///
/// let roster = Roster::new(vec![
///     Member::new("alice".to_string(), "Alice".to_string()).unwrap(),
///     Member::new("bob".to_string(), "Bob".to_string()).unwrap(),
/// ]).unwrap();
///
/// let expenses = vec![ExpenseRecord::with_id(
///     "e1".to_string(),
///     "alice".to_string(),
///     10_000,
///     "USD".to_string(),
/// ).unwrap()];
///
/// let shares = vec![
///     ShareRecord::new("e1".to_string(), "alice".to_string(), 5_000).unwrap(),
///     ShareRecord::new("e1".to_string(), "bob".to_string(), 5_000).unwrap(),
/// ];
///
/// let report = compute_balances(&roster, &expenses, &shares, "USD");
/// assert_eq!(report.net_of("alice"), Some(5_000));
/// assert_eq!(report.net_of("bob"), Some(-5_000));
/// assert_eq!(report.total(), 0);
/// ```
pub fn compute_balances(
    roster: &Roster,
    expenses: &[ExpenseRecord],
    shares: &[ShareRecord],
    currency: &str,
) -> BalanceReport {
    // Working nets in roster join order, so the report order is stable
    let mut nets: Vec<i64> = vec![0; roster.len()];
    let mut unknown_refs = Vec::new();

    // Expense ids in this currency bucket; shares outside it are skipped
    let mut bucket_ids: HashSet<&str> = HashSet::new();

    for expense in expenses {
        if expense.currency() != currency {
            continue;
        }
        bucket_ids.insert(expense.id());

        match roster.position(expense.payer_id()) {
            Some(pos) => nets[pos] += expense.amount(),
            None => unknown_refs.push(UnknownRef::Payer {
                expense_id: expense.id().to_string(),
                payer_id: expense.payer_id().to_string(),
            }),
        }
    }

    for share in shares {
        if !bucket_ids.contains(share.expense_id()) {
            continue;
        }
        match roster.position(share.beneficiary_id()) {
            Some(pos) => nets[pos] -= share.amount(),
            None => unknown_refs.push(UnknownRef::Beneficiary {
                expense_id: share.expense_id().to_string(),
                beneficiary_id: share.beneficiary_id().to_string(),
            }),
        }
    }

    let entries = roster
        .iter()
        .zip(nets)
        .map(|(member, net)| MemberBalance {
            member_id: member.id().to_string(),
            display_name: member.display_name().to_string(),
            net,
        })
        .collect();

    BalanceReport {
        currency: currency.to_string(),
        entries,
        unknown_refs,
    }
}
