//! Cell layout of the `timesheet` template.
//!
//! These positions are load-bearing: existing templates and the printed
//! forms depend on them.

use super::cell::{CellRef, Column};

/// Day-of-month numbers, one per row.
pub const DAY_COLUMN: Column = Column::A;
/// Attendance marker on worked days.
pub const STATUS_COLUMN: Column = Column::B;
/// Rig name on worked days.
pub const LOCATION_COLUMN: Column = Column::D;

/// Employee name (uppercase).
pub const EMPLOYEE_NAME: CellRef = CellRef::new(2, Column::Q);
/// Employee identifier.
pub const EMPLOYEE_ID: CellRef = CellRef::new(3, Column::Q);
/// Country code.
pub const COUNTRY: CellRef = CellRef::new(4, Column::Q);
/// Month/year label, e.g. `MAR 2024`.
pub const MONTH_YEAR: CellRef = CellRef::new(5, Column::Q);

/// Count of attended days.
pub const HITCH_DAYS: CellRef = CellRef::new(8, Column::O);
/// Day rate.
pub const DAY_RATE: CellRef = CellRef::new(8, Column::Q);
/// Hitch total on the summary line.
pub const HITCH_TOTAL: CellRef = CellRef::new(8, Column::T);
/// Grand total; always equal to [`HITCH_TOTAL`].
pub const GRAND_TOTAL: CellRef = CellRef::new(19, Column::T);

/// Employee signature name.
pub const EMPLOYEE_SIGNATURE: CellRef = CellRef::new(22, Column::O);
/// Wellsite team leader name.
pub const TEAM_LEADER: CellRef = CellRef::new(24, Column::O);
/// Supervising leadership name.
pub const LEADERSHIP: CellRef = CellRef::new(26, Column::O);

/// Row holding calendar day `day`; row 1 is the column header.
pub const fn day_row(day: u32) -> u32 {
    day + 1
}
