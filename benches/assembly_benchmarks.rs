//! Performance benchmarks for timesheet generation.
//!
//! Covers document assembly for growing rosters, workbook export, and a full
//! single-employee request through the router.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use bctd_timesheet::api::{AppState, create_router};
use bctd_timesheet::config::ConfigLoader;
use bctd_timesheet::error::TimesheetResult;
use bctd_timesheet::models::{EmployeeContext, OrganizationFields};
use bctd_timesheet::render::{OutputFormat, Renderer};
use bctd_timesheet::sheet::{Sheet, Template, layout};
use bctd_timesheet::timesheet::DocumentAssembler;

use axum::{body::Body, http::Request};
use std::sync::Arc;
use tower::ServiceExt;

struct NoopRenderer;

#[async_trait::async_trait]
impl Renderer for NoopRenderer {
    async fn render(
        &self,
        document: Vec<u8>,
        _file_name: &str,
        _format: OutputFormat,
    ) -> TimesheetResult<Vec<u8>> {
        Ok(document)
    }
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn template() -> Template {
    let mut sheet = Sheet::new("timesheet");
    sheet.set(layout::EMPLOYEE_NAME, "Name");
    sheet.set(layout::HITCH_TOTAL, "Total");
    Template::from_sheet(sheet)
}

fn organization() -> OrganizationFields {
    OrganizationFields {
        country_code: "KSA".to_string(),
        leadership_name: "Jahad Aldawood".to_string(),
        team_leader_name: "Ken Lynn".to_string(),
        attendance_marker: "ARAMCO".to_string(),
    }
}

fn roster(size: u32) -> Vec<EmployeeContext> {
    (1..=size)
        .map(|id| {
            EmployeeContext::new(
                id,
                format!("Employee {}", id),
                format!("BCTD-{}", id % 6),
                Decimal::new(500, 0),
            )
            .unwrap()
        })
        .collect()
}

/// Benchmark: roster assembly over two months.
fn bench_roster_assembly(c: &mut Criterion) {
    let template = template();
    let assembler = DocumentAssembler::new(&template, organization());

    let mut group = c.benchmark_group("roster_assembly");
    for size in [1u32, 10, 50] {
        let employees = roster(size);
        group.throughput(Throughput::Elements(u64::from(size) * 2));
        group.bench_with_input(BenchmarkId::from_parameter(size), &employees, |b, employees| {
            b.iter(|| {
                black_box(
                    assembler
                        .assemble_roster(date("2024-01-20"), date("2024-02-10"), employees)
                        .unwrap(),
                )
            })
        });
    }
    group.finish();
}

/// Benchmark: writing an assembled roster into a copy of the sample template
/// workbook.
fn bench_workbook_export(c: &mut Criterion) {
    let template = Template::load("./config/bctd/template.xlsx", "timesheet").unwrap();
    let assembler = DocumentAssembler::new(&template, organization());
    let document = assembler
        .assemble_roster(date("2024-01-20"), date("2024-02-10"), &roster(10))
        .unwrap();

    c.bench_function("workbook_export_20_sheets", |b| {
        b.iter(|| black_box(document.to_xlsx().unwrap()))
    });
}

/// Benchmark: full single-employee request, including template loading.
fn bench_single_request(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let config = ConfigLoader::load("./config/bctd").expect("Failed to load config");
    let router = create_router(AppState::new(config, Arc::new(NoopRenderer)));
    let body = serde_json::json!({
        "full_name": "Ken Lynn",
        "employee_id": 1001,
        "day_rate": 500,
        "start_date": "2024-03-05",
        "end_date": "2024-03-15",
        "format": "xlsx"
    })
    .to_string();

    c.bench_function("single_request", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/timesheets/single")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_roster_assembly,
    bench_workbook_export,
    bench_single_request
);
criterion_main!(benches);
