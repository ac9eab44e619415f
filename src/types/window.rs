use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::types::{Month, Year};

const MONTHS_PER_YEAR: Month = 12;

/// A half-open `[start, end)` date interval covering one calendar month.
///
/// Windows are only a pagination unit for fetching; a transaction is always
/// bucketed by its own trade date, never by the window it arrived in.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize)]
pub struct MonthlyWindow {
    /// First day of the month (inclusive).
    pub start: NaiveDate,
    /// First day of the following month (exclusive).
    pub end: NaiveDate
}

impl MonthlyWindow {
    /// The calendar month (1-12) this window covers.
    pub fn month(&self) -> Month {
        self.start.month()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }
}

/// Builds the twelve contiguous month windows of `year`, January first.
///
/// December's window ends on January 1 of `year + 1`.
pub fn build_monthly_windows(year: Year) -> Vec<MonthlyWindow> {
    let year = i32::from(year);

    (1..=MONTHS_PER_YEAR)
        .map(|month| {
            let end = if month == MONTHS_PER_YEAR {
                first_of_month(year + 1, 1)
            } else {
                first_of_month(year, month + 1)
            };

            MonthlyWindow {
                start: first_of_month(year, month),
                end
            }
        })
        .collect()
}

fn first_of_month(year: i32, month: Month) -> NaiveDate {
    //NOTE: Year is bounded by u16 so every first-of-month lies well inside chrono's supported range
    NaiveDate::from_ymd_opt(year, month, 1)
        .expect("first day of a month in a u16 year is always a valid date")
}
