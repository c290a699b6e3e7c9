//! Core data models for the timesheet generator.
//!
//! This module contains all the domain models used throughout the crate.

mod document;
mod employee;
mod fill_spec;
mod period;

pub use document::AssembledDocument;
pub use employee::EmployeeContext;
pub use fill_spec::{OrganizationFields, SheetFillSpec, SheetNaming};
pub use period::Period;
