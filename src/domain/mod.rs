pub mod filter;
pub mod month;
pub mod report;
pub mod transaction;

pub use filter::DateRange;
pub use month::MonthKey;
pub use report::{BalancePoint, CategorySummary, ForecastPoint, MonthlySummary, RangeTotals};
pub use transaction::{TransactionKind, TransactionRecord, UNKNOWN_CATEGORY};
