//! Domain models for the trip settlement engine

pub mod expense;
pub mod member;

// Re-exports
pub use expense::{currencies, split_equally, ExpenseError, ExpenseRecord, ShareRecord};
pub use member::{Member, MemberError, Roster};
