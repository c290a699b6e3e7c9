//! Period splitting.
//!
//! This module turns a requested date range into one or two single-month
//! [`Period`]s. A range that ends in the month after it starts is split at
//! the month boundary ("double sheets").

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::{end_of_next_month, first_day_of_month, last_day_of_month};
use crate::error::{TimesheetError, TimesheetResult};
use crate::models::Period;

/// Which shapes of date range a caller accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodMode {
    /// Start and end must share a month (the single-employee form).
    SingleMonth,
    /// The end may fall in the month after the start.
    AllowDouble,
}

fn invalid_range(start_date: NaiveDate, end_date: NaiveDate, message: &str) -> TimesheetError {
    TimesheetError::InvalidDateRange {
        start_date,
        end_date,
        message: message.to_string(),
    }
}

/// Checks a requested range before anything is built.
///
/// # Errors
///
/// Returns `InvalidDateRange` if:
/// - `start_date` is after `end_date`
/// - the range leaves the start month in [`PeriodMode::SingleMonth`]
/// - the range ends after [`end_of_next_month`] of the start date
pub fn validate_range(
    start_date: NaiveDate,
    end_date: NaiveDate,
    mode: PeriodMode,
) -> TimesheetResult<()> {
    if start_date > end_date {
        return Err(invalid_range(
            start_date,
            end_date,
            "starting date must be earlier than ending date",
        ));
    }

    let same_month = first_day_of_month(start_date) == first_day_of_month(end_date);
    match mode {
        PeriodMode::SingleMonth if !same_month => Err(invalid_range(
            start_date,
            end_date,
            "starting date and ending date must be in the same month/year",
        )),
        PeriodMode::AllowDouble if end_date > end_of_next_month(start_date) => Err(invalid_range(
            start_date,
            end_date,
            "a timesheet can span at most two consecutive months",
        )),
        _ => Ok(()),
    }
}

/// Splits a requested range into one or two periods.
///
/// Same-month ranges yield one period `[start_date, end_date]`. Ranges
/// ending in the following month yield `[start_date, last day of its month]`
/// and `[first day of the end month, end_date]`.
///
/// # Example
///
/// ```
/// use bctd_timesheet::timesheet::{split_periods, PeriodMode};
/// use chrono::NaiveDate;
///
/// let periods = split_periods(
///     NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
///     PeriodMode::AllowDouble,
/// ).unwrap();
///
/// assert_eq!(periods.len(), 2);
/// assert_eq!(periods[0].title(), "JAN2024");
/// assert_eq!(periods[0].hitch_days(), 12);
/// assert_eq!(periods[1].title(), "FEB2024");
/// assert_eq!(periods[1].hitch_days(), 10);
/// ```
pub fn split_periods(
    start_date: NaiveDate,
    end_date: NaiveDate,
    mode: PeriodMode,
) -> TimesheetResult<Vec<Period>> {
    validate_range(start_date, end_date, mode)?;

    if first_day_of_month(start_date) == first_day_of_month(end_date) {
        return Ok(vec![Period::new(start_date, end_date)?]);
    }

    Ok(vec![
        Period::new(start_date, last_day_of_month(start_date))?,
        Period::new(first_day_of_month(end_date), end_date)?,
    ])
}
