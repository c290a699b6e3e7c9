//! HTTP API module for the timesheet generator.
//!
//! This module provides the REST endpoints that turn a hitch and one or more
//! employees into a timesheet document.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{
    UNRESOLVED_EMPLOYEES_HEADER, build_roster_document, build_single_document, create_router,
};
pub use request::{EmployeeSelectionRequest, RosterTimesheetRequest, SingleTimesheetRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
