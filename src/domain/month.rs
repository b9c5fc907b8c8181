//! Calendar-month grouping key for report aggregation.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Identifies one calendar month. Ordering is derived from the
/// `(year, month)` tuple, so it is chronologically correct across year
/// boundaries; the formatted label is for display only and must never be
/// used as a sort key.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    pub year: i32,
    /// 1-based calendar month.
    pub month: u32,
}

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Self {
        debug_assert!((1..=12).contains(&month));
        Self { year, month }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Display label in the fixed `"Mar 2024"` format. Localization belongs
    /// to the presentation layer.
    pub fn label(&self) -> String {
        format!("{} {}", MONTH_LABELS[(self.month - 1) as usize], self.year)
    }

    /// First day of the month.
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default()
    }

    /// The month immediately after this one.
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Whether `date` falls inside this calendar month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_calendar_month_maps_to_same_key() {
        let early = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let late = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
        assert_eq!(MonthKey::from_date(early), MonthKey::from_date(late));
    }

    #[test]
    fn ordering_is_chronological_across_year_boundaries() {
        let dec = MonthKey::new(2024, 12);
        let jan = MonthKey::new(2025, 1);
        let apr = MonthKey::new(2025, 4);
        assert!(dec < jan);
        assert!(jan < apr);
        // The labels would sort the later month first alphabetically.
        assert!(apr.label() < dec.label());
    }

    #[test]
    fn label_format() {
        assert_eq!(MonthKey::new(2024, 3).label(), "Mar 2024");
        assert_eq!(MonthKey::new(2025, 1).label(), "Jan 2025");
    }

    #[test]
    fn next_rolls_over_december() {
        assert_eq!(MonthKey::new(2024, 12).next(), MonthKey::new(2025, 1));
        assert_eq!(MonthKey::new(2024, 5).next(), MonthKey::new(2024, 6));
    }
}
