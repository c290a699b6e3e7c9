//! Payroll timesheet generator for rig field personnel
//!
//! This crate turns a hitch (a date range) and one or more employees into a
//! workbook of monthly timesheets built from a spreadsheet template, and
//! optionally renders that workbook to PDF through an external service.
//!
//! The pipeline is:
//!
//! 1. [`timesheet::split_periods`] cuts the hitch into one or two monthly periods.
//! 2. [`timesheet::RosterResolver`] resolves employee ids against the directory.
//! 3. [`timesheet::DocumentAssembler`] fills one template copy per employee and period.
//! 4. [`models::AssembledDocument::to_xlsx`] writes the sheets into a copy of the
//!    template workbook.
//! 5. [`render::Renderer`] converts it for delivery.

#![warn(missing_docs)]

pub mod api;
pub mod calendar;
pub mod config;
pub mod error;
pub mod models;
pub mod render;
pub mod sheet;
pub mod timesheet;
