//! Timesheet generation logic.
//!
//! This module contains the period splitter, roster resolution, quick
//! access for the single-employee form, sheet population and document
//! assembly.

mod assembler;
mod period_splitter;
mod populator;
mod quick_access;
mod roster;

pub use assembler::{DocumentAssembler, PeriodTemplate, roster_file_stem, single_file_stem};
pub use period_splitter::{PeriodMode, split_periods, validate_range};
pub use populator::{HitchSummary, fill_employee, fill_period, populate_sheet};
pub use quick_access::{
    EmployeeForm, QUICK_ACCESS_PREFIX, QuickAccessPolicy, apply_quick_access,
    lookup_quick_access, quick_access_token,
};
pub use roster::{EmployeeSelection, RosterResolution, RosterResolver, rig_label};
