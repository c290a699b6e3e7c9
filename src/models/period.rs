//! Period model.
//!
//! A [`Period`] is a date sub-range confined to one calendar month. Every
//! output sheet is scoped to exactly one period.

use std::ops::RangeInclusive;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::calendar::MonthYear;
use crate::error::{TimesheetError, TimesheetResult};

/// A single-calendar-month date range used to scope one output sheet.
///
/// The range is inclusive at both ends and always satisfies
/// `start_date <= end_date` with both dates in the same month. Periods are
/// created through [`Period::new`] (normally by the period splitter) and are
/// immutable afterwards.
///
/// # Example
///
/// ```
/// use bctd_timesheet::models::Period;
/// use chrono::NaiveDate;
///
/// let period = Period::new(
///     NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
/// ).unwrap();
///
/// assert_eq!(period.hitch_days(), 11);
/// assert_eq!(period.title(), "MAR2024");
/// assert_eq!(period.month_label(), "MAR 2024");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Period {
    start_date: NaiveDate,
    end_date: NaiveDate,
    month: MonthYear,
}

impl Period {
    /// Creates a period, rejecting reversed ranges and ranges that leave
    /// the start date's month.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> TimesheetResult<Self> {
        if start_date > end_date {
            return Err(TimesheetError::InvalidDateRange {
                start_date,
                end_date,
                message: "starting date must be earlier than ending date".to_string(),
            });
        }

        let month = MonthYear::of(start_date);
        if MonthYear::of(end_date) != month {
            return Err(TimesheetError::InvalidDateRange {
                start_date,
                end_date,
                message: "a period must not cross a month boundary".to_string(),
            });
        }

        Ok(Self {
            start_date,
            end_date,
            month,
        })
    }

    /// The first day of the period (inclusive).
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// The last day of the period (inclusive).
    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// The calendar month the period lies in.
    pub fn month(&self) -> MonthYear {
        self.month
    }

    /// Number of days in the period's month.
    pub fn days_in_month(&self) -> u32 {
        self.month.days()
    }

    /// Days of the month on which attendance is recorded.
    pub fn attendance_days(&self) -> RangeInclusive<u32> {
        self.start_date.day()..=self.end_date.day()
    }

    /// Count of days in the attendance range.
    pub fn hitch_days(&self) -> u32 {
        self.end_date.day() - self.start_date.day() + 1
    }

    /// Sheet-title form of the month, e.g. `JAN2024`.
    pub fn title(&self) -> String {
        self.month.title()
    }

    /// In-sheet month label, e.g. `JAN 2024`.
    pub fn month_label(&self) -> String {
        self.month.label()
    }
}
