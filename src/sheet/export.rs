//! Workbook export.
//!
//! When the sheets come from a loaded [`Template`], each one is written into a
//! copy of the template worksheet, so formulas, merged ranges, column widths,
//! styles and print setup carry over. Only cells whose value differs from the
//! template are written. The template worksheet itself is not part of the
//! output.

use std::fmt::Display;
use std::io::Cursor;

use rust_decimal::prelude::ToPrimitive;
use tracing::debug;
use umya_spreadsheet::{Spreadsheet, Worksheet};

use crate::error::{TimesheetError, TimesheetResult};

use super::{CellRef, CellValue, Footer, Sheet, Template};

/// Writes the sheets, in order, into an `.xlsx` byte buffer.
///
/// With a `template` that was read from a workbook, the output is that
/// workbook with the template sheet replaced by the given sheets. Otherwise
/// a new workbook is created.
///
/// # Errors
///
/// Returns `Export` if the template workbook cannot be reopened, a sheet
/// title is rejected, or the workbook cannot be serialized.
pub fn write_workbook(template: Option<&Template>, sheets: &[Sheet]) -> TimesheetResult<Vec<u8>> {
    let base = template.and_then(|t| t.workbook().map(|bytes| (t, bytes)));

    let (mut book, scaffold) = match base {
        Some((template, bytes)) => {
            let mut book = umya_spreadsheet::reader::xlsx::read_reader(Cursor::new(bytes), true)
                .map_err(export_error)?;
            let name = template.sheet().title();
            let worksheet = book
                .get_sheet_by_name(name)
                .cloned()
                .ok_or_else(|| export_error(format!("template sheet '{}' is missing", name)))?;
            book.remove_sheet_by_name(name).map_err(export_error)?;
            (book, Some((template.sheet(), worksheet)))
        }
        None => (umya_spreadsheet::new_file_empty_worksheet(), None),
    };

    for sheet in sheets {
        validate_title(sheet.title())?;
        let worksheet = match &scaffold {
            Some((_, worksheet)) => {
                let mut copy = worksheet.clone();
                copy.set_name(sheet.title());
                book.add_sheet(copy).map_err(export_error)?
            }
            None => book.new_sheet(sheet.title()).map_err(export_error)?,
        };

        let original = scaffold.as_ref().map(|(values, _)| *values);
        let mut written = 0usize;
        for (cell, value) in sheet.cells() {
            if original.and_then(|o| o.get(*cell)) == Some(value) {
                continue;
            }
            write_cell(worksheet, *cell, value);
            written += 1;
        }

        if original.map(Sheet::footer) != Some(sheet.footer()) {
            worksheet
                .get_header_footer_mut()
                .get_odd_footer_mut()
                .set_value(footer_code(sheet.footer()));
        }

        debug!(sheet = sheet.title(), cells = written, "Wrote sheet");
    }

    save(&book)
}

/// Sheet names are 1 to 31 characters and exclude `[ ] : * ? / \`.
fn validate_title(title: &str) -> TimesheetResult<()> {
    let length = title.chars().count();
    if length == 0 || length > 31 {
        return Err(export_error(format!(
            "sheet title '{}' must be 1 to 31 characters",
            title
        )));
    }
    if title.contains(['[', ']', ':', '*', '?', '/', '\\']) {
        return Err(export_error(format!(
            "sheet title '{}' contains a forbidden character",
            title
        )));
    }
    Ok(())
}

fn write_cell(worksheet: &mut Worksheet, cell: CellRef, value: &CellValue) {
    let target = worksheet.get_cell_mut((u32::from(cell.column.0) + 1, cell.row));
    match value {
        CellValue::Text(text) => {
            target.set_value_string(text.as_str());
        }
        CellValue::Number(number) => {
            target.set_value_number(number.to_f64().unwrap_or_default());
        }
    }
}

fn save(book: &Spreadsheet) -> TimesheetResult<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    umya_spreadsheet::writer::xlsx::write_writer(book, &mut buffer).map_err(export_error)?;
    Ok(buffer.into_inner())
}

fn export_error(err: impl Display) -> TimesheetError {
    TimesheetError::Export {
        message: err.to_string(),
    }
}

/// Header/footer code for `footer`; empty when every region is empty.
fn footer_code(footer: &Footer) -> String {
    if footer.is_empty() {
        return String::new();
    }
    format!("&L{}&C{}&R{}", footer.left, footer.center, footer.right)
}
