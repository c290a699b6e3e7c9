//! Employee context model.
//!
//! This module defines [`EmployeeContext`], the resolved per-employee data
//! layered onto a period sheet.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{TimesheetError, TimesheetResult};

/// An employee resolved for timesheet generation.
///
/// Name and rig come from the employee directory (or the legacy form); the
/// day rate is supplied per engagement by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeContext {
    /// Payroll identifier of the employee.
    pub employee_id: u32,
    /// Full name as printed on the sheet (uppercased when written).
    pub full_name: String,
    /// Rig label, e.g. `BCTD-4`.
    pub rig_name: String,
    /// Pay per attended day.
    pub day_rate: Decimal,
}

impl EmployeeContext {
    /// Creates an employee context, rejecting negative day rates.
    ///
    /// # Example
    ///
    /// ```
    /// use bctd_timesheet::models::EmployeeContext;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = EmployeeContext::new(1234, "Saleh Ali", "BCTD-4", Decimal::new(500, 0)).unwrap();
    /// assert_eq!(employee.employee_id, 1234);
    /// assert!(EmployeeContext::new(1, "X", "BCTD-4", Decimal::new(-1, 0)).is_err());
    /// ```
    pub fn new(
        employee_id: u32,
        full_name: impl Into<String>,
        rig_name: impl Into<String>,
        day_rate: Decimal,
    ) -> TimesheetResult<Self> {
        if day_rate < Decimal::ZERO {
            return Err(TimesheetError::InvalidField {
                field: "day_rate".to_string(),
                message: format!("must not be negative, got {}", day_rate),
            });
        }

        Ok(Self {
            employee_id,
            full_name: full_name.into(),
            rig_name: rig_name.into(),
            day_rate,
        })
    }
}
