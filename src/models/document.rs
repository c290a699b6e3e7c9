//! Assembled document model.

use crate::error::{TimesheetError, TimesheetResult};
use crate::sheet::{Sheet, Template, write_workbook};

/// An ordered collection of uniquely titled output sheets.
///
/// Titles are checked on insertion, so a document can never hold two sheets
/// with the same title. A document built from a template is exported into a
/// copy of the template workbook.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssembledDocument {
    file_stem: String,
    sheets: Vec<Sheet>,
    template: Option<Template>,
}

impl AssembledDocument {
    /// Creates an empty document that will be delivered as `file_stem`.
    pub fn new(file_stem: impl Into<String>) -> Self {
        Self {
            file_stem: file_stem.into(),
            sheets: Vec::new(),
            template: None,
        }
    }

    /// Creates an empty document whose sheets are written into `template`'s
    /// workbook on export.
    pub fn from_template(file_stem: impl Into<String>, template: &Template) -> Self {
        Self {
            template: Some(template.clone()),
            ..Self::new(file_stem)
        }
    }

    /// Appends a sheet.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateSheetTitle` if a sheet with the same title exists.
    pub fn push(&mut self, sheet: Sheet) -> TimesheetResult<()> {
        if self.contains_title(sheet.title()) {
            return Err(TimesheetError::DuplicateSheetTitle {
                title: sheet.title().to_string(),
            });
        }
        self.sheets.push(sheet);
        Ok(())
    }

    /// Returns true if a sheet with `title` is present.
    pub fn contains_title(&self, title: &str) -> bool {
        self.sheets.iter().any(|s| s.title() == title)
    }

    /// The sheets in output order.
    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    /// Looks a sheet up by title.
    pub fn sheet(&self, title: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.title() == title)
    }

    /// Sheet titles in output order.
    pub fn titles(&self) -> Vec<&str> {
        self.sheets.iter().map(Sheet::title).collect()
    }

    /// File name without extension, e.g. `TS-1234-MAR2024`.
    pub fn file_stem(&self) -> &str {
        &self.file_stem
    }

    /// Number of sheets.
    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    /// Returns true if the document has no sheets.
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// Serializes the document as an `.xlsx` workbook.
    pub fn to_xlsx(&self) -> TimesheetResult<Vec<u8>> {
        write_workbook(self.template.as_ref(), &self.sheets)
    }
}
