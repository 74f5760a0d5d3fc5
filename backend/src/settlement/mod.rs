//! Settlement Module
//!
//! Consumes a `BalanceReport` and produces the fewest pairwise payments the
//! greedy largest-first heuristic can find to bring every member's net to
//! zero.
//!
//! # Critical Invariants
//!
//! 1. **Pure**: the planner never mutates the report it is given
//! 2. **Closed**: a transfer only ever moves money between a debtor and a
//!    creditor of the same report; applying the full plan to a zero-sum
//!    report leaves every balance at exactly 0
//! 3. **Bounded**: at most one transfer per non-zero balance, minus one
//!
//! # Example
//!
//! ```rust
//! use trip_settlement_core_rs::{compute_balances, plan_settlement};
//! use trip_settlement_core_rs::{ExpenseRecord, Member, Roster, ShareRecord};
//!
//! let roster = Roster::new(vec![
//!     Member::new("alice".to_string(), "Alice".to_string()).unwrap(),
//!     Member::new("bob".to_string(), "Bob".to_string()).unwrap(),
//! ]).unwrap();
//! let expenses = vec![ExpenseRecord::with_id(
//!     "e1".to_string(), "alice".to_string(), 10_000, "USD".to_string(),
//! ).unwrap()];
//! let shares = vec![
//!     ShareRecord::new("e1".to_string(), "alice".to_string(), 5_000).unwrap(),
//!     ShareRecord::new("e1".to_string(), "bob".to_string(), 5_000).unwrap(),
//! ];
//!
//! let report = compute_balances(&roster, &expenses, &shares, "USD");
//! let plan = plan_settlement(&report);
//! assert_eq!(plan.len(), 1);
//! assert_eq!(plan[0].from, "bob");
//! ```

pub mod planner;

// Re-export public API
pub use planner::{plan_settlement, Transfer, SETTLED_TOLERANCE};
