//! Template loading.
//!
//! Templates are `.xlsx` workbooks. Cell values are read with `calamine` and
//! the print footer with `umya_spreadsheet`. The raw workbook is kept so that
//! export can fill a copy of it in place; the cell layout is described in
//! [`super::layout`].

use std::fs;
use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

use calamine::{Data, Reader, Xlsx};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use tracing::debug;

use crate::error::{TimesheetError, TimesheetResult};

use super::{CellRef, CellValue, Footer, Sheet};

/// Name of the sheet holding the timesheet layout.
pub const DEFAULT_TEMPLATE_SHEET: &str = "timesheet";

const IN_MEMORY: &str = "<memory>";

/// A loaded timesheet template.
///
/// Every generation request starts from [`Template::instantiate`], which
/// hands out a fresh copy of the template sheet. Templates loaded from a
/// workbook also carry its bytes; cloning shares them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    sheet: Sheet,
    workbook: Option<Arc<[u8]>>,
}

impl Template {
    /// Loads the named sheet from an `.xlsx` file.
    ///
    /// # Errors
    ///
    /// - `TemplateNotFound` if the file cannot be read
    /// - `TemplateMalformed` if the workbook cannot be parsed or lacks the sheet
    pub fn load<P: AsRef<Path>>(path: P, sheet_name: &str) -> TimesheetResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let bytes = fs::read(path).map_err(|_| TimesheetError::TemplateNotFound {
            path: path_str.clone(),
        })?;

        Self::parse(bytes, sheet_name, &path_str)
    }

    /// Loads the named sheet from an in-memory `.xlsx` workbook.
    pub fn from_bytes(bytes: Vec<u8>, sheet_name: &str) -> TimesheetResult<Self> {
        Self::parse(bytes, sheet_name, IN_MEMORY)
    }

    /// Wraps an already constructed sheet. Such a template has no source
    /// workbook, so export starts from an empty one.
    pub fn from_sheet(sheet: Sheet) -> Self {
        Self {
            sheet,
            workbook: None,
        }
    }

    /// The template sheet.
    pub fn sheet(&self) -> &Sheet {
        &self.sheet
    }

    /// The `.xlsx` bytes the template was read from, if any.
    pub fn workbook(&self) -> Option<&[u8]> {
        self.workbook.as_deref()
    }

    /// Returns an independent copy of the template sheet.
    pub fn instantiate(&self) -> Sheet {
        self.sheet.clone()
    }

    fn parse(bytes: Vec<u8>, sheet_name: &str, origin: &str) -> TimesheetResult<Self> {
        let malformed = |message: String| TimesheetError::TemplateMalformed {
            path: origin.to_string(),
            message,
        };

        let mut sheet = read_values(&bytes, sheet_name).map_err(malformed)?;
        let footer = read_footer(&bytes, sheet_name).map_err(malformed)?;
        sheet.set_footer(footer);

        debug!(
            template = origin,
            sheet = sheet_name,
            cells = sheet.cells().count(),
            footer = !sheet.footer().is_empty(),
            "Loaded timesheet template"
        );

        Ok(Self {
            sheet,
            workbook: Some(Arc::from(bytes)),
        })
    }
}

fn read_values(bytes: &[u8], sheet_name: &str) -> Result<Sheet, String> {
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes)).map_err(|e| e.to_string())?;

    if !workbook.sheet_names().iter().any(|name| name == sheet_name) {
        return Err(format!("missing sheet '{}'", sheet_name));
    }

    let range = workbook
        .worksheet_range(sheet_name)
        .map_err(|e| e.to_string())?;

    let mut sheet = Sheet::new(sheet_name);
    let (row_offset, col_offset) = range.start().unwrap_or((0, 0));
    for (row, col, data) in range.cells() {
        if let Some(value) = to_cell_value(data) {
            let cell = CellRef::from_zero_based(
                row_offset + row as u32,
                (col_offset + col as u32) as u16,
            );
            sheet.set(cell, value);
        }
    }

    Ok(sheet)
}

fn read_footer(bytes: &[u8], sheet_name: &str) -> Result<Footer, String> {
    let book = umya_spreadsheet::reader::xlsx::read_reader(Cursor::new(bytes), true)
        .map_err(|e| e.to_string())?;
    let worksheet = book
        .get_sheet_by_name(sheet_name)
        .ok_or_else(|| format!("missing sheet '{}'", sheet_name))?;

    Ok(parse_footer_code(
        worksheet.get_header_footer().get_odd_footer().get_value(),
    ))
}

/// Splits an `&L..&C..&R..` header/footer code into its three regions.
///
/// `&&` is an escaped ampersand. Other codes such as `&P` stay in the region
/// text. Text before any region marker belongs to the center.
pub(crate) fn parse_footer_code(code: &str) -> Footer {
    let mut footer = Footer::default();
    let mut current = &mut footer.center;
    let mut chars = code.chars();

    while let Some(c) = chars.next() {
        if c != '&' {
            current.push(c);
            continue;
        }
        match chars.next() {
            Some('L') => current = &mut footer.left,
            Some('C') => current = &mut footer.center,
            Some('R') => current = &mut footer.right,
            Some('&') => current.push('&'),
            Some(other) => {
                current.push('&');
                current.push(other);
            }
            None => current.push('&'),
        }
    }

    footer
}

fn to_cell_value(data: &Data) -> Option<CellValue> {
    match data {
        Data::Int(i) => Some(CellValue::Number(Decimal::from(*i))),
        Data::Float(f) => Decimal::from_f64(*f).map(CellValue::Number),
        Data::String(s) => Some(CellValue::Text(s.clone())),
        Data::Bool(b) => Some(CellValue::Text(if *b { "TRUE" } else { "FALSE" }.to_string())),
        Data::DateTime(dt) => Decimal::from_f64(dt.as_f64()).map(CellValue::Number),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Some(CellValue::Text(s.clone())),
        _ => None,
    }
}
