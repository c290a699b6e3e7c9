//! In-memory spreadsheet model.
//!
//! This module provides the typed grid ([`CellRef`], [`CellValue`]), the
//! [`Sheet`] that timesheets are written into, template loading from `.xlsx`
//! workbooks and workbook export.

mod cell;
mod export;
pub mod layout;
mod template;

use std::collections::BTreeMap;

pub use cell::{CellRef, CellValue, Column};
pub use export::write_workbook;
pub use template::{DEFAULT_TEMPLATE_SHEET, Template};

/// The three print-footer regions of a sheet.
///
/// Region text uses header/footer code syntax, so `&P` is the page number
/// and `&&` a literal ampersand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Footer {
    /// Left footer text.
    pub left: String,
    /// Center footer text.
    pub center: String,
    /// Right footer text.
    pub right: String,
}

impl Footer {
    /// Returns true if all three regions are empty.
    pub fn is_empty(&self) -> bool {
        self.left.is_empty() && self.center.is_empty() && self.right.is_empty()
    }
}

/// A titled grid of cell values.
///
/// Cloning a sheet yields a structurally independent copy; writes to one
/// copy never show up in another.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sheet {
    title: String,
    cells: BTreeMap<CellRef, CellValue>,
    footer: Footer,
}

impl Sheet {
    /// Creates an empty sheet with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// The sheet title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Renames the sheet.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Writes a value, replacing whatever the cell held.
    pub fn set(&mut self, cell: CellRef, value: impl Into<CellValue>) {
        self.cells.insert(cell, value.into());
    }

    /// Reads a cell.
    pub fn get(&self, cell: CellRef) -> Option<&CellValue> {
        self.cells.get(&cell)
    }

    /// All non-empty cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (&CellRef, &CellValue)> {
        self.cells.iter()
    }

    /// The print footer.
    pub fn footer(&self) -> &Footer {
        &self.footer
    }

    /// Replaces the print footer.
    pub fn set_footer(&mut self, footer: Footer) {
        self.footer = footer;
    }

    /// Empties all three footer regions.
    pub fn clear_footer(&mut self) {
        self.footer = Footer::default();
    }
}
