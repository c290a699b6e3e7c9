//! HTTP request handlers for the timesheet API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{HeaderName, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::ConfigLoader;
use crate::error::{TimesheetError, TimesheetResult};
use crate::models::{AssembledDocument, EmployeeContext};
use crate::render::{OutputFormat, Renderer};
use crate::timesheet::{
    DocumentAssembler, EmployeeSelection, PeriodMode, RosterResolution, RosterResolver,
    apply_quick_access, validate_range,
};

use super::request::{RosterTimesheetRequest, SingleTimesheetRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Response header listing roster ids that could not be resolved.
pub const UNRESOLVED_EMPLOYEES_HEADER: HeaderName =
    HeaderName::from_static("x-unresolved-employees");

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/timesheets", post(roster_handler))
        .route("/timesheets/single", post(single_handler))
        .with_state(state)
}

/// Handler for GET /health.
async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// A document ready to be sent back to the caller.
struct Delivery {
    bytes: Vec<u8>,
    file_name: String,
    format: OutputFormat,
    unresolved: Vec<u32>,
}

impl IntoResponse for Delivery {
    fn into_response(self) -> Response {
        let disposition = format!("attachment; filename=\"{}\"", self.file_name);
        let mut response = (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, self.format.mime_type().to_string()),
                (header::CONTENT_DISPOSITION, disposition),
            ],
            self.bytes,
        )
            .into_response();

        if !self.unresolved.is_empty() {
            let ids: Vec<String> = self.unresolved.iter().map(u32::to_string).collect();
            if let Ok(value) = HeaderValue::from_str(&ids.join(",")) {
                response
                    .headers_mut()
                    .insert(UNRESOLVED_EMPLOYEES_HEADER, value);
            }
        }

        response
    }
}

/// Converts a JSON extraction failure into a 400 response.
fn json_rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    (StatusCode::BAD_REQUEST, Json(error)).into_response()
}

fn error_response(correlation_id: Uuid, err: TimesheetError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Timesheet generation failed"
    );
    ApiErrorResponse::from(err).into_response()
}

/// Handler for POST /timesheets/single.
///
/// Builds the single-employee timesheet from the form fields.
async fn single_handler(
    State(state): State<AppState>,
    payload: Result<Json<SingleTimesheetRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing single timesheet request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    let format = request
        .format
        .unwrap_or(state.config().organization().render.format);

    let config = state.shared_config();
    let result: TimesheetResult<Delivery> = async {
        let (file_stem, workbook) = run_blocking(move || {
            let document = build_single_document(&config, &request)?;
            Ok((document.file_stem().to_string(), document.to_xlsx()?))
        })
        .await?;
        deliver(state.renderer(), file_stem, workbook, format, Vec::new()).await
    }
    .await;

    match result {
        Ok(delivery) => {
            info!(
                correlation_id = %correlation_id,
                file_name = %delivery.file_name,
                duration_us = start_time.elapsed().as_micros() as u64,
                "Single timesheet generated"
            );
            delivery.into_response()
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /timesheets.
///
/// Builds one sheet per resolved employee and period. Unknown employees are
/// skipped and reported in [`UNRESOLVED_EMPLOYEES_HEADER`].
async fn roster_handler(
    State(state): State<AppState>,
    payload: Result<Json<RosterTimesheetRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing roster timesheet request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    let format = request
        .format
        .unwrap_or(state.config().organization().render.format);

    let config = state.shared_config();
    let result: TimesheetResult<Delivery> = async {
        let (file_stem, workbook, unresolved) = run_blocking(move || {
            let (document, unresolved) = build_roster_document(&config, request)?;
            Ok((document.file_stem().to_string(), document.to_xlsx()?, unresolved))
        })
        .await?;
        deliver(state.renderer(), file_stem, workbook, format, unresolved).await
    }
    .await;

    match result {
        Ok(delivery) => {
            info!(
                correlation_id = %correlation_id,
                file_name = %delivery.file_name,
                unresolved = delivery.unresolved.len(),
                duration_us = start_time.elapsed().as_micros() as u64,
                "Roster timesheet generated"
            );
            delivery.into_response()
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Runs template loading and workbook export on the blocking thread pool.
async fn run_blocking<T, F>(work: F) -> TimesheetResult<T>
where
    F: FnOnce() -> TimesheetResult<T> + Send + 'static,
    T: Send + 'static,
{
    match tokio::task::spawn_blocking(work).await {
        Ok(result) => result,
        Err(err) => Err(TimesheetError::Export {
            message: format!("document task failed: {}", err),
        }),
    }
}

/// Builds the single-employee document, applying quick access first.
///
/// Reads the template from disk; call it off the async executor.
pub fn build_single_document(
    config: &ConfigLoader,
    request: &SingleTimesheetRequest,
) -> TimesheetResult<AssembledDocument> {
    validate_range(request.start_date, request.end_date, PeriodMode::SingleMonth)?;

    let form = apply_quick_access(
        request.employee_form(),
        config.secrets(),
        config.organization().quick_access_policy,
    )?;
    let employee = EmployeeContext::new(
        form.employee_id,
        form.full_name,
        form.rig_name,
        form.day_rate,
    )?;

    let template = config.load_template()?;
    let assembler =
        DocumentAssembler::new(&template, config.organization_fields(&request.team_leader));
    assembler.assemble_single(request.start_date, request.end_date, &employee)
}

/// Builds the roster document and returns the ids that did not resolve.
///
/// Reads the template from disk; call it off the async executor.
///
/// If no employee resolves, the first resolution failure is returned. Unknown
/// ids are otherwise skipped; other failures, such as a negative day rate,
/// reject the whole request.
pub fn build_roster_document(
    config: &ConfigLoader,
    request: RosterTimesheetRequest,
) -> TimesheetResult<(AssembledDocument, Vec<u32>)> {
    validate_range(request.start_date, request.end_date, PeriodMode::AllowDouble)?;

    let selections: Vec<EmployeeSelection> =
        request.employees.into_iter().map(Into::into).collect();
    let resolver = RosterResolver::new(config.directory(), &config.organization().rig_prefix);
    let resolution = resolver.resolve(&selections);
    let unresolved = resolution.unresolved_ids();

    let RosterResolution { resolved, failures } = resolution;
    let mut failures = failures.into_iter();
    if resolved.is_empty() {
        if let Some(err) = failures.next() {
            return Err(err);
        }
    }
    // Only unknown ids are skipped; any other failure rejects the request.
    if let Some(err) = failures.find(|f| !matches!(f, TimesheetError::EmployeeNotFound { .. })) {
        return Err(err);
    }

    let template = config.load_template()?;
    let assembler =
        DocumentAssembler::new(&template, config.organization_fields(&request.team_leader));
    let document =
        assembler.assemble_roster(request.start_date, request.end_date, &resolved)?;

    Ok((document, unresolved))
}

/// Hands the exported workbook to the renderer unless the caller asked for
/// the spreadsheet itself.
async fn deliver(
    renderer: &dyn Renderer,
    file_stem: String,
    workbook: Vec<u8>,
    format: OutputFormat,
    unresolved: Vec<u32>,
) -> TimesheetResult<Delivery> {
    let file_name = format!("{}.{}", file_stem, format.extension());

    let bytes = match format {
        OutputFormat::Xlsx => workbook,
        OutputFormat::Pdf => {
            let upload_name = format!("{}.xlsx", file_stem);
            renderer.render(workbook, &upload_name, format).await?
        }
    };

    Ok(Delivery {
        bytes,
        file_name,
        format,
        unresolved,
    })
}
