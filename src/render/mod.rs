//! Rendering collaborator.
//!
//! Converts an assembled `.xlsx` workbook into the distributable format.
//! The conversion itself happens in an external service; this module only
//! defines the contract ([`Renderer`]) and a client for it.

mod convert_api;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::TimesheetResult;

pub use convert_api::ConvertApiRenderer;

/// MIME type of `.xlsx` workbooks.
pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Format of the delivered timesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Printable document produced by the rendering service.
    #[default]
    Pdf,
    /// The spreadsheet itself; no rendering service call.
    Xlsx,
}

impl OutputFormat {
    /// File extension without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Pdf => "pdf",
            OutputFormat::Xlsx => "xlsx",
        }
    }

    /// MIME type for HTTP responses.
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Pdf => "application/pdf",
            OutputFormat::Xlsx => XLSX_MIME,
        }
    }
}

/// Converts a spreadsheet byte stream into `format`.
///
/// Implementations make a single blocking attempt; failures are terminal
/// for the request and are reported as `RenderFailed`.
#[async_trait]
pub trait Renderer: Send + Sync {
    /// Renders `document` (an `.xlsx` workbook uploaded as `file_name`).
    async fn render(
        &self,
        document: Vec<u8>,
        file_name: &str,
        format: OutputFormat,
    ) -> TimesheetResult<Vec<u8>>;
}
