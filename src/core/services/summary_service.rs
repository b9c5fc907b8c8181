//! Aggregation helpers for monthly summaries and scope totals.

use std::collections::BTreeMap;

use crate::domain::filter::DateRange;
use crate::domain::month::MonthKey;
use crate::domain::report::{MonthlySummary, RangeTotals};
use crate::domain::transaction::{TransactionKind, TransactionRecord};

/// Aggregates transaction records into report-ready summaries.
///
/// Every public entry point drops `excluded_from_balance` records before
/// aggregating. [`SummaryService::filter_by_range`] deliberately does not:
/// it only subsets by date, so exclusion is applied exactly once per report.
pub struct SummaryService;

impl SummaryService {
    /// Returns the records whose date falls inside `range`, preserving the
    /// original relative order.
    pub fn filter_by_range(
        records: &[TransactionRecord],
        range: &DateRange,
    ) -> Vec<TransactionRecord> {
        records
            .iter()
            .filter(|record| range.contains(record.date))
            .cloned()
            .collect()
    }

    /// Groups records by calendar month and partitions each group into
    /// income and expense contributions. Transfers contribute to neither
    /// total. Output is ordered chronologically; empty input yields an
    /// empty vector.
    pub fn monthly_summaries(records: &[TransactionRecord]) -> Vec<MonthlySummary> {
        let mut groups: BTreeMap<MonthKey, (Vec<TransactionRecord>, Vec<TransactionRecord>)> =
            BTreeMap::new();

        for record in records.iter().filter(|r| r.counts_toward_balance()) {
            let month = MonthKey::from_date(record.date);
            match record.kind {
                TransactionKind::Income => {
                    groups.entry(month).or_default().0.push(record.clone());
                }
                TransactionKind::Expense => {
                    groups.entry(month).or_default().1.push(record.clone());
                }
                // A month holding only transfers gets no summary at all.
                TransactionKind::Transfer => {}
            }
        }

        let summaries: Vec<MonthlySummary> = groups
            .into_iter()
            .map(|(month, (income_records, expense_records))| {
                let income: f64 = income_records.iter().map(|r| r.signed_amount()).sum();
                let expenses: f64 = expense_records.iter().map(|r| r.magnitude()).sum();
                MonthlySummary {
                    month,
                    income,
                    expenses,
                    surplus: income - expenses,
                    income_records,
                    expense_records,
                }
            })
            .collect();

        tracing::debug!(
            months = summaries.len(),
            records = records.len(),
            "built monthly summaries"
        );
        summaries
    }

    /// Income/expense/surplus totals for a whole scope.
    pub fn range_totals(records: &[TransactionRecord]) -> RangeTotals {
        let (income, expenses) = records
            .iter()
            .filter(|r| r.counts_toward_balance())
            .fold((0.0, 0.0), |acc, record| match record.kind {
                TransactionKind::Income => (acc.0 + record.signed_amount(), acc.1),
                TransactionKind::Expense => (acc.0, acc.1 + record.magnitude()),
                TransactionKind::Transfer => acc,
            });
        RangeTotals {
            income,
            expenses,
            surplus: income - expenses,
        }
    }
}
