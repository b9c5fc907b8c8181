//! Domain model for transaction records as supplied by the storage layer.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Label used for records that carry no category.
pub const UNKNOWN_CATEGORY: &str = "Unbekannt";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Classifies a transaction for reporting purposes.
pub enum TransactionKind {
    Income,
    Expense,
    /// Internal movement between two owned accounts; never counts as
    /// earning or spending.
    Transfer,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
            TransactionKind::Transfer => "Transfer",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// A single booked transaction, read-only from the aggregator's point of view.
pub struct TransactionRecord {
    pub id: Uuid,
    pub date: NaiveDate,
    /// Stored amount. Upstream data is inconsistent about signs, so raw
    /// values must only be interpreted through
    /// [`TransactionRecord::signed_amount`].
    pub amount: f64,
    pub kind: TransactionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    #[serde(default)]
    pub excluded_from_balance: bool,
}

impl TransactionRecord {
    pub fn new(date: NaiveDate, amount: f64, kind: TransactionKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            amount,
            kind,
            category_name: None,
            excluded_from_balance: false,
        }
    }

    pub fn with_category(mut self, name: impl Into<String>) -> Self {
        self.category_name = Some(name.into());
        self
    }

    pub fn excluded(mut self) -> Self {
        self.excluded_from_balance = true;
        self
    }

    /// Canonical signed value: income is positive, expenses negative,
    /// transfers keep their stored sign. The stored sign convention is
    /// normalized here and nowhere else.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionKind::Income => self.amount.abs(),
            TransactionKind::Expense => -self.amount.abs(),
            TransactionKind::Transfer => self.amount,
        }
    }

    /// Unsigned size of the transaction.
    pub fn magnitude(&self) -> f64 {
        self.amount.abs()
    }

    /// Whether the record participates in any aggregation at all.
    pub fn counts_toward_balance(&self) -> bool {
        !self.excluded_from_balance
    }

    /// Category label with the unknown-category fallback applied.
    pub fn category_label(&self) -> &str {
        self.category_name.as_deref().unwrap_or(UNKNOWN_CATEGORY)
    }
}
