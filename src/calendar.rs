//! Calendar utilities.
//!
//! Pure date arithmetic used by the period splitter and the sheet populator:
//! month lengths, month boundaries and the `MMMYYYY` month labels printed on
//! every timesheet.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Returns true if `year` is a leap year in the proleptic Gregorian calendar.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the number of calendar days in the given month.
///
/// Returns 0 for a month outside `1..=12`.
///
/// # Example
///
/// ```
/// use bctd_timesheet::calendar::days_in_month;
///
/// assert_eq!(days_in_month(2024, 2), 29);
/// assert_eq!(days_in_month(2023, 2), 28);
/// assert_eq!(days_in_month(2024, 4), 30);
/// ```
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

fn following_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 { (year + 1, 1) } else { (year, month + 1) }
}

/// Returns the first calendar day of `date`'s month.
pub fn first_day_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Returns the last calendar day of `date`'s month.
pub fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(days_in_month(date.year(), date.month()))
        .unwrap_or(date)
}

/// Returns the last calendar day of the month following `date`'s month.
///
/// December rolls over into January of the next year. Dates in the final
/// representable month saturate to [`NaiveDate::MAX`].
///
/// # Example
///
/// ```
/// use bctd_timesheet::calendar::end_of_next_month;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2023, 12, 10).unwrap();
/// assert_eq!(end_of_next_month(date), NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
/// ```
pub fn end_of_next_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = following_month(date.year(), date.month());
    NaiveDate::from_ymd_opt(year, month, days_in_month(year, month)).unwrap_or(NaiveDate::MAX)
}

/// A calendar month of a specific year.
///
/// Timesheet sheets are scoped to exactly one `MonthYear`; its two textual
/// forms are the sheet-title form (`JAN2024`) and the in-sheet label
/// (`JAN 2024`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthYear {
    /// The four-digit year.
    pub year: i32,
    /// The month number, 1 through 12.
    pub month: u32,
}

impl MonthYear {
    /// Returns the month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Number of days in this month.
    pub fn days(&self) -> u32 {
        days_in_month(self.year, self.month)
    }

    /// Uppercase three-letter month abbreviation, e.g. `MAR`.
    pub fn abbreviation(&self) -> String {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .map(|d| d.format("%b").to_string().to_uppercase())
            .unwrap_or_default()
    }

    /// Sheet-title form without a separator, e.g. `MAR2024`.
    pub fn title(&self) -> String {
        format!("{}{}", self.abbreviation(), self.year)
    }

    /// Human-readable in-sheet form with a space, e.g. `MAR 2024`.
    pub fn label(&self) -> String {
        format!("{} {}", self.abbreviation(), self.year)
    }
}

impl fmt::Display for MonthYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_in_month_thirty_one_day_months() {
        for month in [1, 3, 5, 7, 8, 10, 12] {
            assert_eq!(days_in_month(2025, month), 31, "month {}", month);
        }
    }

    #[test]
    fn test_days_in_month_thirty_day_months() {
        for month in [4, 6, 9, 11] {
            assert_eq!(days_in_month(2025, month), 30, "month {}", month);
        }
    }

    #[test]
    fn test_days_in_month_february_leap_rules() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
    }

    #[test]
    fn test_days_in_month_matches_chrono() {
        for year in [1999, 2000, 2023, 2024, 2100] {
            for month in 1..=12 {
                let last = last_day_of_month(date(year, month, 1));
                assert_eq!(days_in_month(year, month), last.day());
                assert_eq!(last.succ_opt().unwrap().day(), 1);
            }
        }
    }

    #[test]
    fn test_days_in_month_invalid_month_is_zero() {
        assert_eq!(days_in_month(2024, 0), 0);
        assert_eq!(days_in_month(2024, 13), 0);
    }

    #[test]
    fn test_end_of_next_month_within_year() {
        assert_eq!(end_of_next_month(date(2024, 1, 20)), date(2024, 2, 29));
        assert_eq!(end_of_next_month(date(2023, 1, 31)), date(2023, 2, 28));
        assert_eq!(end_of_next_month(date(2024, 3, 1)), date(2024, 4, 30));
    }

    #[test]
    fn test_end_of_next_month_rolls_over_year() {
        assert_eq!(end_of_next_month(date(2024, 12, 31)), date(2025, 1, 31));
    }

    #[test]
    fn test_first_and_last_day_of_month() {
        assert_eq!(first_day_of_month(date(2024, 2, 17)), date(2024, 2, 1));
        assert_eq!(last_day_of_month(date(2024, 2, 17)), date(2024, 2, 29));
    }

    #[test]
    fn test_month_year_labels() {
        let month = MonthYear::of(date(2024, 1, 20));
        assert_eq!(month.title(), "JAN2024");
        assert_eq!(month.label(), "JAN 2024");
        assert_eq!(month.to_string(), "JAN2024");
        assert_eq!(month.days(), 31);
    }

    #[test]
    fn test_month_year_abbreviations_are_three_uppercase_letters() {
        let expected = [
            "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
        ];
        for (i, abbr) in expected.iter().enumerate() {
            let month = MonthYear {
                year: 2024,
                month: i as u32 + 1,
            };
            assert_eq!(&month.abbreviation(), abbr);
        }
    }
}
