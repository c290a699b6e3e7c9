//! Sheet fill specification.
//!
//! A [`SheetFillSpec`] bundles everything needed to populate one output
//! sheet: the period, the optional employee and the fixed organizational
//! fields.

use serde::{Deserialize, Serialize};

use super::{EmployeeContext, Period};

/// How an output sheet is titled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SheetNaming {
    /// Bare month title, `MAR2024`. Used by the single-employee form.
    MonthOnly,
    /// Employee-prefixed title, `1234 - MAR2024`. Used for rosters.
    EmployeePrefixed,
}

/// Organizational fields printed on every sheet of a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationFields {
    /// Country code for the header, e.g. `KSA`.
    pub country_code: String,
    /// Supervising leadership name for the approval cell.
    pub leadership_name: String,
    /// Wellsite team leader chosen for this request.
    pub team_leader_name: String,
    /// Marker written into the status column on attended days.
    pub attendance_marker: String,
}

/// Everything needed to populate one output sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetFillSpec {
    /// The period the sheet covers.
    pub period: Period,
    /// The employee, absent for period-only templates.
    pub employee: Option<EmployeeContext>,
    /// Fixed organizational fields.
    pub organization: OrganizationFields,
    /// Title style.
    pub naming: SheetNaming,
}

impl SheetFillSpec {
    /// Title of the sheet this spec produces.
    ///
    /// Period-only specs and [`SheetNaming::MonthOnly`] yield the bare month
    /// title; employee-prefixed specs yield `{employee_id} - {MONTHYEAR}`.
    pub fn title(&self) -> String {
        match (&self.employee, self.naming) {
            (Some(employee), SheetNaming::EmployeePrefixed) => {
                format!("{} - {}", employee.employee_id, self.period.title())
            }
            _ => self.period.title(),
        }
    }
}
