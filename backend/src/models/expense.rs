//! Expense and share models
//!
//! An `ExpenseRecord` is a single payment made by one member on behalf of
//! the group; `ShareRecord`s distribute its amount over the beneficiaries.
//! Both are immutable once created.
//!
//! Well-formed data keeps, per expense, `sum(share amounts) == expense
//! amount`. The engine does not enforce that at aggregation time (it is the
//! recording boundary's job), but `split_equally` below produces shares
//! that satisfy it exactly, including the rounding remainder of uneven
//! divisions.
//!
//! CRITICAL: All money values are i64 (minor currency units, e.g. cents)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when constructing expense or share records
#[derive(Debug, Error, PartialEq)]
pub enum ExpenseError {
    #[error("Amount must be non-negative, got {amount}")]
    NegativeAmount { amount: i64 },

    #[error("Payer id must not be empty")]
    EmptyPayerId,

    #[error("Currency code must not be empty")]
    EmptyCurrency,

    #[error("Expense id must not be empty")]
    EmptyExpenseId,

    #[error("Beneficiary id must not be empty")]
    EmptyBeneficiaryId,
}

/// A single payment made by one member
///
/// `category`, `memo` and `spent_at` are descriptive metadata; they do not
/// participate in balance arithmetic and exist for export/reporting.
///
/// # Example
/// ```
/// use trip_settlement_core_rs::ExpenseRecord;
///
/// let dinner = ExpenseRecord::new(
///     "u-alice".to_string(),
///     10_000, // $100.00 in cents
///     "USD".to_string(),
/// ).unwrap();
///
/// assert_eq!(dinner.payer_id(), "u-alice");
/// assert_eq!(dinner.amount(), 10_000);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Unique expense identifier (UUID for freshly created records)
    id: String,

    /// Member who paid
    payer_id: String,

    /// Total amount paid (i64 minor units, non-negative)
    amount: i64,

    /// ISO currency code, e.g. "USD"
    currency: String,

    /// Free-form category label, e.g. "Food"
    #[serde(default)]
    category: Option<String>,

    /// Free-form description
    #[serde(default)]
    memo: Option<String>,

    /// Date the money was spent
    #[serde(default)]
    spent_at: Option<NaiveDate>,
}

impl ExpenseRecord {
    /// Create a new expense with a freshly generated UUID id
    pub fn new(payer_id: String, amount: i64, currency: String) -> Result<Self, ExpenseError> {
        Self::with_id(uuid::Uuid::new_v4().to_string(), payer_id, amount, currency)
    }

    /// Create an expense with a storage-supplied id
    pub fn with_id(
        id: String,
        payer_id: String,
        amount: i64,
        currency: String,
    ) -> Result<Self, ExpenseError> {
        if id.is_empty() {
            return Err(ExpenseError::EmptyExpenseId);
        }
        if payer_id.is_empty() {
            return Err(ExpenseError::EmptyPayerId);
        }
        if amount < 0 {
            return Err(ExpenseError::NegativeAmount { amount });
        }
        if currency.is_empty() {
            return Err(ExpenseError::EmptyCurrency);
        }
        Ok(Self {
            id,
            payer_id,
            amount,
            currency,
            category: None,
            memo: None,
            spent_at: None,
        })
    }

    /// Attach a category label
    pub fn with_category(mut self, category: String) -> Self {
        self.category = Some(category);
        self
    }

    /// Attach a free-form description
    pub fn with_memo(mut self, memo: String) -> Self {
        self.memo = Some(memo);
        self
    }

    /// Attach the spend date
    pub fn with_spent_at(mut self, spent_at: NaiveDate) -> Self {
        self.spent_at = Some(spent_at);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn payer_id(&self) -> &str {
        &self.payer_id
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn memo(&self) -> Option<&str> {
        self.memo.as_deref()
    }

    pub fn spent_at(&self) -> Option<NaiveDate> {
        self.spent_at
    }
}

/// One member's portion of responsibility for an expense
///
/// # Example
/// ```
/// use trip_settlement_core_rs::ShareRecord;
///
/// let share = ShareRecord::new(
///     "e-1".to_string(),
///     "u-bob".to_string(),
///     5_000,
/// ).unwrap();
///
/// assert_eq!(share.beneficiary_id(), "u-bob");
/// assert_eq!(share.amount(), 5_000);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareRecord {
    /// Expense this share belongs to
    expense_id: String,

    /// Member responsible for this portion
    beneficiary_id: String,

    /// Portion amount (i64 minor units, non-negative)
    amount: i64,
}

impl ShareRecord {
    pub fn new(
        expense_id: String,
        beneficiary_id: String,
        amount: i64,
    ) -> Result<Self, ExpenseError> {
        if expense_id.is_empty() {
            return Err(ExpenseError::EmptyExpenseId);
        }
        if beneficiary_id.is_empty() {
            return Err(ExpenseError::EmptyBeneficiaryId);
        }
        if amount < 0 {
            return Err(ExpenseError::NegativeAmount { amount });
        }
        Ok(Self {
            expense_id,
            beneficiary_id,
            amount,
        })
    }

    pub fn expense_id(&self) -> &str {
        &self.expense_id
    }

    pub fn beneficiary_id(&self) -> &str {
        &self.beneficiary_id
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }
}

/// Split an expense equally over the given beneficiaries
///
/// Every beneficiary gets `amount / n`; the remainder of the integer
/// division is distributed one minor unit each to the earliest-listed
/// beneficiaries. The returned shares therefore always sum to exactly the
/// expense amount, which keeps the aggregate balance zero-sum.
///
/// Returns an empty vector for an empty beneficiary list.
///
/// # Example
/// ```
/// use trip_settlement_core_rs::{ExpenseRecord, split_equally};
///
/// let expense = ExpenseRecord::with_id(
///     "e-1".to_string(),
///     "a".to_string(),
///     100, // 100 cents, three ways
///     "USD".to_string(),
/// ).unwrap();
///
/// let shares = split_equally(&expense, &["a", "b", "c"]);
/// let amounts: Vec<i64> = shares.iter().map(|s| s.amount()).collect();
/// assert_eq!(amounts, vec![34, 33, 33]);
/// assert_eq!(amounts.iter().sum::<i64>(), 100);
/// ```
pub fn split_equally(expense: &ExpenseRecord, beneficiary_ids: &[&str]) -> Vec<ShareRecord> {
    let n = beneficiary_ids.len() as i64;
    if n == 0 {
        return Vec::new();
    }

    let base = expense.amount() / n;
    let remainder = expense.amount() % n;

    beneficiary_ids
        .iter()
        .enumerate()
        .map(|(pos, beneficiary_id)| {
            let extra = if (pos as i64) < remainder { 1 } else { 0 };
            ShareRecord {
                expense_id: expense.id().to_string(),
                beneficiary_id: beneficiary_id.to_string(),
                amount: base + extra,
            }
        })
        .collect()
}

/// Distinct currency codes present in a set of expenses, sorted
///
/// Each currency is balanced independently; callers use this to enumerate
/// the buckets to feed through `compute_balances`.
pub fn currencies(expenses: &[ExpenseRecord]) -> Vec<String> {
    let mut codes: Vec<String> = expenses.iter().map(|e| e.currency().to_string()).collect();
    codes.sort();
    codes.dedup();
    codes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(id: &str, payer: &str, amount: i64) -> ExpenseRecord {
        ExpenseRecord::with_id(
            id.to_string(),
            payer.to_string(),
            amount,
            "USD".to_string(),
        )
        .unwrap()
    }

    #[test]
    fn test_expense_validation() {
        assert_eq!(
            ExpenseRecord::with_id("e".to_string(), "a".to_string(), -1, "USD".to_string()),
            Err(ExpenseError::NegativeAmount { amount: -1 })
        );
        assert_eq!(
            ExpenseRecord::with_id("e".to_string(), String::new(), 100, "USD".to_string()),
            Err(ExpenseError::EmptyPayerId)
        );
        assert_eq!(
            ExpenseRecord::with_id("e".to_string(), "a".to_string(), 100, String::new()),
            Err(ExpenseError::EmptyCurrency)
        );
    }

    #[test]
    fn test_new_generates_unique_ids() {
        let e1 = ExpenseRecord::new("a".to_string(), 100, "USD".to_string()).unwrap();
        let e2 = ExpenseRecord::new("a".to_string(), 100, "USD".to_string()).unwrap();
        assert_ne!(e1.id(), e2.id());
    }

    #[test]
    fn test_share_validation() {
        assert_eq!(
            ShareRecord::new("e".to_string(), "a".to_string(), -5),
            Err(ExpenseError::NegativeAmount { amount: -5 })
        );
        assert_eq!(
            ShareRecord::new(String::new(), "a".to_string(), 5),
            Err(ExpenseError::EmptyExpenseId)
        );
        assert_eq!(
            ShareRecord::new("e".to_string(), String::new(), 5),
            Err(ExpenseError::EmptyBeneficiaryId)
        );
    }

    #[test]
    fn test_split_equally_even() {
        let e = expense("e1", "a", 9_000);
        let shares = split_equally(&e, &["a", "b", "c"]);
        assert_eq!(shares.len(), 3);
        assert!(shares.iter().all(|s| s.amount() == 3_000));
        assert!(shares.iter().all(|s| s.expense_id() == "e1"));
    }

    #[test]
    fn test_split_equally_remainder_goes_to_earliest() {
        let e = expense("e1", "a", 100);
        let shares = split_equally(&e, &["a", "b", "c"]);
        let amounts: Vec<i64> = shares.iter().map(ShareRecord::amount).collect();
        assert_eq!(amounts, vec![34, 33, 33]);
        assert_eq!(amounts.iter().sum::<i64>(), 100, "shares must sum to amount");
    }

    #[test]
    fn test_split_equally_empty_beneficiaries() {
        let e = expense("e1", "a", 100);
        assert!(split_equally(&e, &[]).is_empty());
    }

    #[test]
    fn test_expense_json_shape() {
        // Storage rows deserialize directly; metadata fields are optional
        let expense: ExpenseRecord = serde_json::from_str(
            r#"{
                "id": "e-77",
                "payer_id": "u-alice",
                "amount": 12345,
                "currency": "USD",
                "memo": "Ferry tickets",
                "spent_at": "2025-07-14"
            }"#,
        )
        .unwrap();

        assert_eq!(expense.id(), "e-77");
        assert_eq!(expense.amount(), 12_345);
        assert_eq!(expense.memo(), Some("Ferry tickets"));
        assert_eq!(expense.category(), None);
        assert_eq!(
            expense.spent_at(),
            Some(NaiveDate::from_ymd_opt(2025, 7, 14).unwrap())
        );

        let share: ShareRecord =
            serde_json::from_str(r#"{"expense_id":"e-77","beneficiary_id":"u-bob","amount":6173}"#)
                .unwrap();
        assert_eq!(share.beneficiary_id(), "u-bob");
        assert_eq!(share.amount(), 6_173);
    }

    #[test]
    fn test_currencies_sorted_and_deduped() {
        let expenses = vec![
            ExpenseRecord::with_id("1".into(), "a".into(), 10, "USD".into()).unwrap(),
            ExpenseRecord::with_id("2".into(), "a".into(), 10, "EUR".into()).unwrap(),
            ExpenseRecord::with_id("3".into(), "a".into(), 10, "USD".into()).unwrap(),
        ];
        assert_eq!(currencies(&expenses), vec!["EUR", "USD"]);
        assert!(currencies(&[]).is_empty());
    }
}
