//! Typed grid positions and cell values.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A spreadsheet column, stored as a zero-based index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Column(pub u16);

impl Column {
    /// Column A.
    pub const A: Column = Column(0);
    /// Column B.
    pub const B: Column = Column(1);
    /// Column D.
    pub const D: Column = Column(3);
    /// Column O.
    pub const O: Column = Column(14);
    /// Column Q.
    pub const Q: Column = Column(16);
    /// Column T.
    pub const T: Column = Column(19);

    /// Zero-based column index.
    pub fn index(&self) -> u16 {
        self.0
    }

    /// Column letters in A1 notation (`A`, `Z`, `AA`, ...).
    pub fn letters(&self) -> String {
        let mut n = u32::from(self.0) + 1;
        let mut letters = Vec::new();
        while n > 0 {
            let rem = ((n - 1) % 26) as u8;
            letters.push((b'A' + rem) as char);
            n = (n - 1) / 26;
        }
        letters.iter().rev().collect()
    }
}

/// A cell position with a 1-indexed row, as spreadsheets number them.
///
/// # Example
///
/// ```
/// use bctd_timesheet::sheet::{CellRef, Column};
///
/// let cell = CellRef::new(5, Column::Q);
/// assert_eq!(cell.to_string(), "Q5");
/// assert_eq!(cell.zero_based(), (4, 16));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CellRef {
    /// 1-indexed row number.
    pub row: u32,
    /// The column.
    pub column: Column,
}

impl CellRef {
    /// Creates a reference from a 1-indexed row and a column.
    pub const fn new(row: u32, column: Column) -> Self {
        Self { row, column }
    }

    /// Creates a reference from zero-based coordinates.
    pub fn from_zero_based(row: u32, column: u16) -> Self {
        Self {
            row: row + 1,
            column: Column(column),
        }
    }

    /// Zero-based `(row, column)` coordinates for workbook writers.
    pub fn zero_based(&self) -> (u32, u16) {
        (self.row.saturating_sub(1), self.column.index())
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column.letters(), self.row)
    }
}

/// The value held by a cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// A numeric value.
    Number(Decimal),
    /// A text value.
    Text(String),
}

impl CellValue {
    /// Returns the numeric value, if any.
    pub fn as_number(&self) -> Option<Decimal> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Text(_) => None,
        }
    }

    /// Returns the text value, if any.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            CellValue::Number(_) => None,
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<Decimal> for CellValue {
    fn from(value: Decimal) -> Self {
        CellValue::Number(value)
    }
}

impl From<u32> for CellValue {
    fn from(value: u32) -> Self {
        CellValue::Number(Decimal::from(value))
    }
}
