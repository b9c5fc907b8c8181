#![doc(test(attr(deny(warnings))))]

//! Report Core turns a flat collection of transaction records plus an
//! explicit date filter into chart-ready summaries: monthly totals,
//! category breakdowns, naive forecasts, and balance history. Pure,
//! synchronous, and stateless; storage and presentation live elsewhere.

pub mod core;
pub mod domain;
pub mod errors;
pub mod utils;

pub use crate::core::services::{CategoryService, ForecastService, SummaryService};
pub use crate::domain::filter::DateRange;
pub use crate::domain::month::MonthKey;
pub use crate::domain::report::{
    BalancePoint, CategorySummary, ForecastPoint, MonthlySummary, RangeTotals,
};
pub use crate::domain::transaction::{TransactionKind, TransactionRecord, UNKNOWN_CATEGORY};
pub use crate::errors::{ReportError, Result};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Report Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
