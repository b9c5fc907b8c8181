//! Naive balance projection and per-transaction balance history.

use std::collections::BTreeMap;

use crate::core::services::SummaryService;
use crate::domain::month::MonthKey;
use crate::domain::report::{BalancePoint, ForecastPoint};
use crate::domain::transaction::TransactionRecord;

/// Projects balances over time. The forecast is a plain cumulative sum over
/// monthly surpluses; there is no statistical modelling, and months without
/// records (including every future month) contribute zero surplus.
pub struct ForecastService;

impl ForecastService {
    /// One point per month on a contiguous axis from the first observed
    /// month through the last observed month plus `horizon` future months.
    /// The running balance is seeded with `starting_balance` (or zero) and
    /// carries each month's surplus forward. Without any observed month
    /// there is no axis anchor and the result is empty.
    pub fn forecast_series(
        records: &[TransactionRecord],
        horizon: u32,
        starting_balance: Option<f64>,
    ) -> Vec<ForecastPoint> {
        let monthly = SummaryService::monthly_summaries(records);
        let Some(first) = monthly.first().map(|s| s.month) else {
            return Vec::new();
        };
        let last = monthly.last().map(|s| s.month).unwrap_or(first);

        let surpluses: BTreeMap<MonthKey, f64> = monthly
            .into_iter()
            .map(|summary| (summary.month, summary.surplus))
            .collect();

        let mut points = Vec::new();
        let mut balance = starting_balance.unwrap_or(0.0);
        let mut month = first;
        let mut remaining_future = horizon;
        loop {
            let past_observed = month > last;
            if past_observed {
                if remaining_future == 0 {
                    break;
                }
                remaining_future -= 1;
            }
            let surplus = surpluses.get(&month).copied().unwrap_or(0.0);
            balance += surplus;
            points.push(ForecastPoint {
                month,
                surplus,
                projected_balance: balance,
            });
            month = month.next();
        }

        tracing::debug!(points = points.len(), horizon, "built forecast series");
        points
    }

    /// Sorts records chronologically (stable, so same-day records keep
    /// their input order) and emits the running balance after each one.
    /// Transfers move the balance; excluded records never appear.
    pub fn balance_history(
        records: &[TransactionRecord],
        starting_balance: f64,
    ) -> Vec<BalancePoint> {
        let mut relevant: Vec<&TransactionRecord> = records
            .iter()
            .filter(|r| r.counts_toward_balance())
            .collect();
        relevant.sort_by_key(|record| record.date);

        let mut balance = starting_balance;
        relevant
            .into_iter()
            .map(|record| {
                balance += record.signed_amount();
                BalancePoint {
                    date: record.date,
                    record_id: record.id,
                    balance,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::transaction::TransactionKind;
    use chrono::NaiveDate;

    fn record(y: i32, m: u32, d: u32, amount: f64, kind: TransactionKind) -> TransactionRecord {
        TransactionRecord::new(NaiveDate::from_ymd_opt(y, m, d).unwrap(), amount, kind)
    }

    #[test]
    fn forecast_extends_axis_by_horizon_with_flat_balance() {
        let records = vec![
            record(2024, 1, 10, 1000.0, TransactionKind::Income),
            record(2024, 1, 20, 400.0, TransactionKind::Expense),
            record(2024, 2, 5, 100.0, TransactionKind::Expense),
        ];
        let series = ForecastService::forecast_series(&records, 2, Some(500.0));
        assert_eq!(series.len(), 4);
        assert_eq!(series[0].month, MonthKey::new(2024, 1));
        assert_eq!(series[0].projected_balance, 1100.0);
        assert_eq!(series[1].projected_balance, 1000.0);
        // Future months carry the last balance forward unchanged.
        assert_eq!(series[2].surplus, 0.0);
        assert_eq!(series[2].projected_balance, 1000.0);
        assert_eq!(series[3].month, MonthKey::new(2024, 4));
        assert_eq!(series[3].projected_balance, 1000.0);
    }

    #[test]
    fn forecast_fills_gap_months_with_zero_surplus() {
        let records = vec![
            record(2024, 1, 10, 100.0, TransactionKind::Income),
            record(2024, 3, 10, 100.0, TransactionKind::Income),
        ];
        let series = ForecastService::forecast_series(&records, 0, None);
        assert_eq!(series.len(), 3);
        assert_eq!(series[1].month, MonthKey::new(2024, 2));
        assert_eq!(series[1].surplus, 0.0);
        assert_eq!(series[1].projected_balance, 100.0);
        assert_eq!(series[2].projected_balance, 200.0);
    }

    #[test]
    fn forecast_without_observed_months_is_empty() {
        assert!(ForecastService::forecast_series(&[], 6, Some(100.0)).is_empty());
    }

    #[test]
    fn balance_history_applies_signed_deltas_in_date_order() {
        let records = vec![
            record(2024, 3, 2, 30.0, TransactionKind::Expense),
            record(2024, 3, 1, 50.0, TransactionKind::Income),
        ];
        let history = ForecastService::balance_history(&records, 100.0);
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].balance, 150.0);
        assert_eq!(history[1].balance, 120.0);
        assert_eq!(history[0].record_id, records[1].id);
    }

    #[test]
    fn balance_history_includes_transfers_but_not_excluded_records() {
        let records = vec![
            record(2024, 3, 1, -200.0, TransactionKind::Transfer),
            record(2024, 3, 2, 75.0, TransactionKind::Income).excluded(),
        ];
        let history = ForecastService::balance_history(&records, 1000.0);
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].balance, 800.0);
    }
}
