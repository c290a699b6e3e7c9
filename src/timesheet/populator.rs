//! Sheet population.
//!
//! Writes the derived cell values of a [`SheetFillSpec`] into a sheet. Period
//! fields (day-of-month column, month label) and employee fields (attendance,
//! header, pay summary, signatures) are written by separate functions so a
//! period-only sheet can be prepared once and layered per employee.

use rust_decimal::Decimal;

use crate::models::{EmployeeContext, OrganizationFields, Period, SheetFillSpec};
use crate::sheet::{CellRef, Sheet, layout};

/// Pay figures written into the summary cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitchSummary {
    /// Attended days in the period.
    pub hitch_days: u32,
    /// Pay per attended day.
    pub day_rate: Decimal,
    /// `hitch_days * day_rate`.
    pub total: Decimal,
}

impl HitchSummary {
    /// Computes the summary for one employee over one period.
    pub fn new(period: &Period, day_rate: Decimal) -> Self {
        let hitch_days = period.hitch_days();
        Self {
            hitch_days,
            day_rate,
            total: Decimal::from(hitch_days) * day_rate,
        }
    }
}

/// Writes the period-level fields: the day-of-month column for every day of
/// the month and the month/year label. Also clears the print footer.
pub fn fill_period(sheet: &mut Sheet, period: &Period) {
    sheet.clear_footer();

    for day in 1..=period.days_in_month() {
        sheet.set(CellRef::new(layout::day_row(day), layout::DAY_COLUMN), day);
    }

    sheet.set(layout::MONTH_YEAR, period.month_label());
}

/// Writes the employee-level fields and returns the pay summary.
pub fn fill_employee(
    sheet: &mut Sheet,
    period: &Period,
    employee: &EmployeeContext,
    organization: &OrganizationFields,
) -> HitchSummary {
    let rig = employee.rig_name.to_uppercase();
    for day in period.attendance_days() {
        let row = layout::day_row(day);
        sheet.set(
            CellRef::new(row, layout::STATUS_COLUMN),
            organization.attendance_marker.as_str(),
        );
        sheet.set(CellRef::new(row, layout::LOCATION_COLUMN), rig.as_str());
    }

    let name = employee.full_name.to_uppercase();
    sheet.set(layout::EMPLOYEE_NAME, name.as_str());
    sheet.set(layout::EMPLOYEE_ID, employee.employee_id);
    sheet.set(layout::COUNTRY, organization.country_code.as_str());

    let summary = HitchSummary::new(period, employee.day_rate);
    sheet.set(layout::HITCH_DAYS, summary.hitch_days);
    sheet.set(layout::DAY_RATE, summary.day_rate);
    sheet.set(layout::HITCH_TOTAL, summary.total);
    sheet.set(layout::GRAND_TOTAL, summary.total);

    sheet.set(layout::EMPLOYEE_SIGNATURE, name);
    sheet.set(
        layout::TEAM_LEADER,
        organization.team_leader_name.to_uppercase(),
    );
    sheet.set(layout::LEADERSHIP, organization.leadership_name.to_uppercase());

    summary
}

/// Populates `sheet` from `spec` and titles it.
///
/// Only `sheet` is touched; populating independent copies never interferes.
///
/// # Example
///
/// ```
/// use bctd_timesheet::models::{EmployeeContext, OrganizationFields, Period, SheetFillSpec, SheetNaming};
/// use bctd_timesheet::sheet::{layout, CellValue, Sheet};
/// use bctd_timesheet::timesheet::populate_sheet;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let spec = SheetFillSpec {
///     period: Period::new(
///         NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
///         NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
///     ).unwrap(),
///     employee: Some(EmployeeContext::new(1234, "Saleh Ali", "BCTD-4", Decimal::new(500, 0)).unwrap()),
///     organization: OrganizationFields {
///         country_code: "KSA".to_string(),
///         leadership_name: "Jahad Aldawood".to_string(),
///         team_leader_name: "Ken Lynn".to_string(),
///         attendance_marker: "ARAMCO".to_string(),
///     },
///     naming: SheetNaming::MonthOnly,
/// };
///
/// let sheet = populate_sheet(Sheet::new("timesheet"), &spec);
/// assert_eq!(sheet.title(), "MAR2024");
/// assert_eq!(sheet.get(layout::HITCH_TOTAL).and_then(CellValue::as_number), Some(Decimal::new(5500, 0)));
/// ```
pub fn populate_sheet(mut sheet: Sheet, spec: &SheetFillSpec) -> Sheet {
    fill_period(&mut sheet, &spec.period);
    if let Some(employee) = &spec.employee {
        fill_employee(&mut sheet, &spec.period, employee, &spec.organization);
    }
    sheet.set_title(spec.title());
    sheet
}
