//! Request types for the timesheet API.
//!
//! This module defines the JSON request structures for the
//! `/timesheets/single` and `/timesheets` endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::render::OutputFormat;
use crate::timesheet::{EmployeeForm, EmployeeSelection};

/// Request body for the `/timesheets/single` endpoint.
///
/// Mirrors the single-employee form: every employee field is typed in, and
/// a `#token` full name requests quick access.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SingleTimesheetRequest {
    /// Full name, or `#token` for quick access.
    pub full_name: String,
    /// Employee identifier.
    pub employee_id: u32,
    /// Day rate.
    pub day_rate: Decimal,
    /// First day of the hitch (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the hitch (inclusive); same month as `start_date`.
    pub end_date: NaiveDate,
    /// Rig label, e.g. `BCTD-4`.
    #[serde(default)]
    pub rig_name: String,
    /// Wellsite team leader.
    #[serde(default)]
    pub team_leader: String,
    /// Overrides the configured output format.
    #[serde(default)]
    pub format: Option<OutputFormat>,
}

impl SingleTimesheetRequest {
    /// The employee fields as entered.
    pub fn employee_form(&self) -> EmployeeForm {
        EmployeeForm {
            full_name: self.full_name.clone(),
            employee_id: self.employee_id,
            day_rate: self.day_rate,
            rig_name: self.rig_name.clone(),
        }
    }
}

/// One employee in a roster request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeSelectionRequest {
    /// Directory identifier.
    pub id: u32,
    /// Day rate for this engagement.
    pub day_rate: Decimal,
}

/// Request body for the `/timesheets` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterTimesheetRequest {
    /// Employees to produce sheets for.
    pub employees: Vec<EmployeeSelectionRequest>,
    /// First day of the hitch (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the hitch (inclusive); at most the end of the next month.
    pub end_date: NaiveDate,
    /// Wellsite team leader.
    #[serde(default)]
    pub team_leader: String,
    /// Overrides the configured output format.
    #[serde(default)]
    pub format: Option<OutputFormat>,
}

impl From<EmployeeSelectionRequest> for EmployeeSelection {
    fn from(req: EmployeeSelectionRequest) -> Self {
        EmployeeSelection {
            id: req.id,
            day_rate: req.day_rate,
        }
    }
}
