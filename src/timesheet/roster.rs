//! Roster resolution.
//!
//! Maps selected employee identifiers to [`EmployeeContext`]s using the
//! injected [`EmployeeDirectory`]. Unknown identifiers are collected rather
//! than aborting the batch.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::EmployeeDirectory;
use crate::error::{TimesheetError, TimesheetResult};
use crate::models::EmployeeContext;

/// One employee picked for a roster request, with the engagement day rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeSelection {
    /// Directory identifier.
    pub id: u32,
    /// Pay per attended day for this engagement.
    pub day_rate: Decimal,
}

/// Outcome of resolving a roster.
#[derive(Debug, Default)]
pub struct RosterResolution {
    /// Employees resolved, in selection order.
    pub resolved: Vec<EmployeeContext>,
    /// Per-employee failures, in selection order.
    pub failures: Vec<TimesheetError>,
}

impl RosterResolution {
    /// Identifiers that were not found in the directory.
    pub fn unresolved_ids(&self) -> Vec<u32> {
        self.failures
            .iter()
            .filter_map(|failure| match failure {
                TimesheetError::EmployeeNotFound { employee_id } => Some(*employee_id),
                _ => None,
            })
            .collect()
    }
}

/// Builds a rig label such as `BCTD-4`.
pub fn rig_label(prefix: &str, rig: u32) -> String {
    format!("{}-{}", prefix, rig)
}

/// Resolves employee selections against a directory.
#[derive(Debug, Clone, Copy)]
pub struct RosterResolver<'a> {
    directory: &'a EmployeeDirectory,
    rig_prefix: &'a str,
}

impl<'a> RosterResolver<'a> {
    /// Creates a resolver over `directory`, labelling rigs with `rig_prefix`.
    pub fn new(directory: &'a EmployeeDirectory, rig_prefix: &'a str) -> Self {
        Self {
            directory,
            rig_prefix,
        }
    }

    /// Resolves a single selection.
    ///
    /// # Errors
    ///
    /// - `EmployeeNotFound` if the identifier is not in the directory
    /// - `InvalidField` if the day rate is negative
    pub fn resolve_one(&self, selection: &EmployeeSelection) -> TimesheetResult<EmployeeContext> {
        let entry = self.directory.lookup(selection.id)?;
        EmployeeContext::new(
            selection.id,
            entry.name.clone(),
            rig_label(self.rig_prefix, entry.rig),
            selection.day_rate,
        )
    }

    /// Resolves every selection, collecting failures per employee.
    pub fn resolve(&self, selections: &[EmployeeSelection]) -> RosterResolution {
        let mut resolution = RosterResolution::default();

        for selection in selections {
            match self.resolve_one(selection) {
                Ok(employee) => resolution.resolved.push(employee),
                Err(err) => {
                    warn!(employee_id = selection.id, error = %err, "Employee not resolved");
                    resolution.failures.push(err);
                }
            }
        }

        resolution
    }
}
