//! Reporting scope filters passed into the aggregation services.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::month::MonthKey;
use crate::errors::{ReportError, Result};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Defines the date scope of a report. Filter state is always passed in
/// explicitly; the services never read ambient selection state.
#[derive(Default)]
pub enum DateRange {
    /// No date restriction.
    #[default]
    AllTime,
    /// A single calendar month.
    Month(MonthKey),
    /// An explicit interval, inclusive on both ends.
    Between { start: NaiveDate, end: NaiveDate },
}

impl DateRange {
    /// Builds an explicit interval, rejecting inverted bounds.
    pub fn between(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end < start {
            return Err(ReportError::InvalidRange(format!(
                "range end {end} is before start {start}"
            )));
        }
        Ok(Self::Between { start, end })
    }

    /// Whether `date` falls inside the range.
    pub fn contains(&self, date: NaiveDate) -> bool {
        match self {
            DateRange::AllTime => true,
            DateRange::Month(key) => key.contains(date),
            DateRange::Between { start, end } => date >= *start && date <= *end,
        }
    }
}
