//! Output data model consumed by the presentation layer. All values are raw
//! numbers and raw labels; currency formatting and localization happen
//! downstream.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::month::MonthKey;
use crate::domain::transaction::TransactionRecord;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// Income, expense, and surplus totals for one calendar month, with the
/// partitioned record lists kept for drill-down views.
pub struct MonthlySummary {
    pub month: MonthKey,
    /// Sum of canonical income amounts (always non-negative).
    pub income: f64,
    /// Sum of expense magnitudes (always non-negative).
    pub expenses: f64,
    /// `income - expenses`.
    pub surplus: f64,
    pub income_records: Vec<TransactionRecord>,
    pub expense_records: Vec<TransactionRecord>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
/// Overview totals for a whole reporting scope.
pub struct RangeTotals {
    pub income: f64,
    pub expenses: f64,
    pub surplus: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// One slice of a category breakdown chart.
pub struct CategorySummary {
    pub name: String,
    /// Sum of magnitudes of the contributing records.
    pub total: f64,
    /// Percentage of the scope total, 0.0 when the scope is empty.
    pub share: f64,
    /// Deterministic display color (hex string); identical names always
    /// receive the identical color.
    pub color: String,
    pub records: Vec<TransactionRecord>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
/// One month on the forecast axis.
pub struct ForecastPoint {
    pub month: MonthKey,
    pub surplus: f64,
    pub projected_balance: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
/// Running balance after applying one transaction; the series forms a step
/// function over time, one point per record.
pub struct BalancePoint {
    pub date: NaiveDate,
    pub record_id: Uuid,
    pub balance: f64,
}
