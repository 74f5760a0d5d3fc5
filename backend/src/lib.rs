//! Trip Settlement Core - Rust Engine
//!
//! Balance aggregation and debt-settlement engine for shared trip expenses:
//! who paid, who owes, and the fewest payments that square everyone up.
//!
//! # Architecture
//!
//! - **models**: Domain types (Member, Roster, ExpenseRecord, ShareRecord)
//! - **balance**: Balance aggregator (expense history → net per member)
//! - **settlement**: Settlement planner (nets → pairwise transfer plan)
//!
//! # Critical Invariants
//!
//! 1. All money values are i64 (minor currency units, e.g. cents);
//!    division by 100 is presentation, never engine arithmetic
//! 2. Both stages are pure functions of their inputs: no I/O, no shared
//!    state, derived results are recomputed per request and never cached
//! 3. Each currency is balanced independently
//! 4. Caller data-integrity problems (ids outside the roster, shares that
//!    do not sum to their expense) are tolerated and surfaced as data,
//!    never raised as errors

// Module declarations
pub mod balance;
pub mod models;
pub mod settlement;

// Re-exports for convenience
pub use balance::{compute_balances, BalanceReport, MemberBalance, UnknownRef};
pub use models::{
    expense::{currencies, split_equally, ExpenseError, ExpenseRecord, ShareRecord},
    member::{Member, MemberError, Roster},
};
pub use settlement::{plan_settlement, Transfer, SETTLED_TOLERANCE};
