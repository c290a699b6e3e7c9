//! ConvertAPI client.

use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64_STANDARD};
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{TimesheetError, TimesheetResult};

use super::{OutputFormat, Renderer, XLSX_MIME};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ConversionResponse {
    files: Vec<ConvertedFile>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ConvertedFile {
    file_name: String,
    file_data: String,
}

fn render_failed(message: impl Into<String>) -> TimesheetError {
    TimesheetError::RenderFailed {
        message: message.into(),
    }
}

/// Renders workbooks through the ConvertAPI HTTP service.
///
/// The workbook is uploaded as a multipart `File` field and the converted
/// file comes back base64-encoded in the JSON response. There is no
/// timeout and no retry.
#[derive(Debug, Clone)]
pub struct ConvertApiRenderer {
    client: Client,
    base_url: String,
    secret: String,
}

impl ConvertApiRenderer {
    /// Creates a renderer for the service at `base_url`.
    pub fn new(base_url: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            secret: secret.into(),
        }
    }

    fn endpoint(&self, format: OutputFormat) -> String {
        format!(
            "{}/convert/xlsx/to/{}",
            self.base_url.trim_end_matches('/'),
            format.extension()
        )
    }
}

fn decode_response(response: ConversionResponse) -> TimesheetResult<Vec<u8>> {
    let file = response
        .files
        .into_iter()
        .next()
        .ok_or_else(|| render_failed("conversion returned no files"))?;

    debug!(file_name = %file.file_name, "Decoding converted file");

    BASE64_STANDARD
        .decode(file.file_data.as_bytes())
        .map_err(|e| render_failed(format!("invalid file data: {}", e)))
}

#[async_trait]
impl Renderer for ConvertApiRenderer {
    async fn render(
        &self,
        document: Vec<u8>,
        file_name: &str,
        format: OutputFormat,
    ) -> TimesheetResult<Vec<u8>> {
        let url = self.endpoint(format);
        let upload_size = document.len();

        let part = Part::bytes(document)
            .file_name(file_name.to_string())
            .mime_str(XLSX_MIME)
            .map_err(|e| render_failed(e.to_string()))?;
        let form = Form::new()
            .part("File", part)
            .text("StoreFile", "false");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.secret)
            .multipart(form)
            .send()
            .await
            .map_err(|e| render_failed(format!("request to {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(render_failed(format!("HTTP {}: {}", status, body)));
        }

        let conversion: ConversionResponse = response
            .json()
            .await
            .map_err(|e| render_failed(format!("unexpected response: {}", e)))?;

        let rendered = decode_response(conversion)?;
        info!(
            upload_bytes = upload_size,
            rendered_bytes = rendered.len(),
            format = format.extension(),
            "Rendered timesheet"
        );
        Ok(rendered)
    }
}
