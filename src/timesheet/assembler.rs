//! Document assembly.
//!
//! Assembly is two-phase. First one [`PeriodTemplate`] per period is built
//! from the template sheet with only period-level fields written. Then one
//! sheet per (employee, period) pair is materialized from it. Period
//! templates live outside the document, so they can never reach the output.

use std::time::Instant;

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::error::{TimesheetError, TimesheetResult};
use crate::models::{
    AssembledDocument, EmployeeContext, OrganizationFields, Period, SheetFillSpec, SheetNaming,
};
use crate::sheet::{Sheet, Template};

use super::period_splitter::{PeriodMode, split_periods};
use super::populator::{fill_employee, fill_period};

/// A template sheet with the period-level fields of one period written.
#[derive(Debug, Clone)]
pub struct PeriodTemplate {
    period: Period,
    sheet: Sheet,
}

impl PeriodTemplate {
    /// Prepares the period-only sheet for `period`.
    pub fn new(template: &Template, period: Period) -> Self {
        let mut sheet = template.instantiate();
        fill_period(&mut sheet, &period);
        sheet.set_title(period.title());
        Self { period, sheet }
    }

    /// The period this template covers.
    pub fn period(&self) -> &Period {
        &self.period
    }

    /// Title of the period-only sheet, e.g. `MAR2024`.
    pub fn title(&self) -> &str {
        self.sheet.title()
    }

    /// Creates an employee sheet from a copy of the period-only sheet.
    pub fn materialize(
        &self,
        employee: &EmployeeContext,
        organization: &OrganizationFields,
        naming: SheetNaming,
    ) -> Sheet {
        let spec = SheetFillSpec {
            period: self.period.clone(),
            employee: Some(employee.clone()),
            organization: organization.clone(),
            naming,
        };

        let mut sheet = self.sheet.clone();
        fill_employee(&mut sheet, &self.period, employee, organization);
        sheet.set_title(spec.title());
        sheet
    }
}

/// File stem for a single-employee document, e.g. `TS-1234-MAR2024`.
pub fn single_file_stem(employee_id: u32, period: &Period) -> String {
    format!("TS-{}-{}", employee_id, period.title())
}

/// File stem for a roster document: the employee ids concatenated.
pub fn roster_file_stem(employees: &[EmployeeContext]) -> String {
    employees
        .iter()
        .map(|e| e.employee_id.to_string())
        .collect()
}

/// Builds timesheet documents from a template.
#[derive(Debug, Clone)]
pub struct DocumentAssembler<'a> {
    template: &'a Template,
    organization: OrganizationFields,
}

impl<'a> DocumentAssembler<'a> {
    /// Creates an assembler over `template` with the request's organization
    /// fields.
    pub fn new(template: &'a Template, organization: OrganizationFields) -> Self {
        Self {
            template,
            organization,
        }
    }

    /// Builds the single-employee document: one sheet titled `MMMYYYY`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDateRange` if the range is reversed or leaves the
    /// start month.
    pub fn assemble_single(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
        employee: &EmployeeContext,
    ) -> TimesheetResult<AssembledDocument> {
        let periods = split_periods(start_date, end_date, PeriodMode::SingleMonth)?;
        let file_stem = single_file_stem(employee.employee_id, &periods[0]);

        self.assemble(
            periods,
            std::slice::from_ref(employee),
            SheetNaming::MonthOnly,
            file_stem,
        )
    }

    /// Builds the roster document: one sheet per employee and period,
    /// titled `{employee_id} - MMMYYYY`, ordered by employee then period.
    ///
    /// # Errors
    ///
    /// - `InvalidDateRange` if the range is reversed or spans more than two months
    /// - `InvalidField` if `employees` is empty
    /// - `DuplicateSheetTitle` if an employee appears twice
    pub fn assemble_roster(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
        employees: &[EmployeeContext],
    ) -> TimesheetResult<AssembledDocument> {
        let periods = split_periods(start_date, end_date, PeriodMode::AllowDouble)?;

        if employees.is_empty() {
            return Err(TimesheetError::InvalidField {
                field: "employees".to_string(),
                message: "at least one employee is required".to_string(),
            });
        }

        self.assemble(
            periods,
            employees,
            SheetNaming::EmployeePrefixed,
            roster_file_stem(employees),
        )
    }

    fn assemble(
        &self,
        periods: Vec<Period>,
        employees: &[EmployeeContext],
        naming: SheetNaming,
        file_stem: String,
    ) -> TimesheetResult<AssembledDocument> {
        let start_time = Instant::now();

        let period_templates: Vec<PeriodTemplate> = periods
            .into_iter()
            .map(|period| PeriodTemplate::new(self.template, period))
            .collect();
        debug!(
            periods = period_templates.len(),
            "Prepared period templates"
        );

        let mut document = AssembledDocument::from_template(file_stem, self.template);
        for employee in employees {
            for period_template in &period_templates {
                let sheet = period_template.materialize(employee, &self.organization, naming);
                document.push(sheet)?;
            }
        }

        info!(
            file_stem = document.file_stem(),
            employees = employees.len(),
            sheets = document.len(),
            duration_us = start_time.elapsed().as_micros() as u64,
            "Assembled timesheet document"
        );

        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::{CellRef, CellValue, layout};
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use std::collections::HashSet;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn template() -> Template {
        let mut sheet = Sheet::new("timesheet");
        sheet.set(CellRef::new(1, layout::DAY_COLUMN), "Day");
        Template::from_sheet(sheet)
    }

    fn organization() -> OrganizationFields {
        OrganizationFields {
            country_code: "KSA".to_string(),
            leadership_name: "Jahad Aldawood".to_string(),
            team_leader_name: "Ahmed Mansour".to_string(),
            attendance_marker: "ARAMCO".to_string(),
        }
    }

    fn employee(id: u32, rate: i64) -> EmployeeContext {
        EmployeeContext::new(id, format!("Employee {}", id), "BCTD-4", Decimal::new(rate, 0))
            .unwrap()
    }

    fn number(sheet: &Sheet, cell: CellRef) -> Option<Decimal> {
        sheet.get(cell).and_then(CellValue::as_number)
    }

    #[test]
    fn test_single_employee_document() {
        let template = template();
        let assembler = DocumentAssembler::new(&template, organization());

        let document = assembler
            .assemble_single(date(2024, 3, 5), date(2024, 3, 15), &employee(1234, 500))
            .unwrap();

        assert_eq!(document.titles(), vec!["MAR2024"]);
        assert_eq!(document.file_stem(), "TS-1234-MAR2024");

        let sheet = &document.sheets()[0];
        assert_eq!(number(sheet, layout::HITCH_DAYS), Some(Decimal::new(11, 0)));
        assert_eq!(number(sheet, layout::HITCH_TOTAL), Some(Decimal::new(5500, 0)));
        assert_eq!(number(sheet, layout::GRAND_TOTAL), Some(Decimal::new(5500, 0)));
    }

    #[test]
    fn test_single_employee_rejects_cross_month() {
        let template = template();
        let assembler = DocumentAssembler::new(&template, organization());

        let result = assembler.assemble_single(date(2024, 1, 20), date(2024, 2, 10), &employee(1, 500));
        assert!(matches!(
            result,
            Err(TimesheetError::InvalidDateRange { .. })
        ));
    }

    #[test]
    fn test_roster_single_period_has_no_scaffold_sheet() {
        let template = template();
        let assembler = DocumentAssembler::new(&template, organization());

        let document = assembler
            .assemble_roster(
                date(2024, 3, 1),
                date(2024, 3, 5),
                &[employee(10, 500), employee(20, 600)],
            )
            .unwrap();

        assert_eq!(document.titles(), vec!["10 - MAR2024", "20 - MAR2024"]);
        assert!(!document.contains_title("MAR2024"));
        assert_eq!(document.file_stem(), "1020");
    }

    #[test]
    fn test_roster_double_period_boundaries() {
        let template = template();
        let assembler = DocumentAssembler::new(&template, organization());

        let document = assembler
            .assemble_roster(date(2024, 1, 20), date(2024, 2, 10), &[employee(10, 100)])
            .unwrap();

        assert_eq!(document.titles(), vec!["10 - JAN2024", "10 - FEB2024"]);

        let january = document.sheet("10 - JAN2024").unwrap();
        assert_eq!(number(january, layout::HITCH_DAYS), Some(Decimal::new(12, 0)));
        assert_eq!(
            january
                .get(CellRef::new(layout::day_row(31), layout::STATUS_COLUMN))
                .and_then(CellValue::as_text),
            Some("ARAMCO")
        );
        assert_eq!(
            january.get(CellRef::new(layout::day_row(19), layout::STATUS_COLUMN)),
            None
        );

        let february = document.sheet("10 - FEB2024").unwrap();
        assert_eq!(number(february, layout::HITCH_DAYS), Some(Decimal::new(10, 0)));
        assert_eq!(
            february
                .get(CellRef::new(layout::day_row(1), layout::STATUS_COLUMN))
                .and_then(CellValue::as_text),
            Some("ARAMCO")
        );
        assert_eq!(
            february.get(CellRef::new(layout::day_row(11), layout::STATUS_COLUMN)),
            None
        );
        assert_eq!(
            february.get(CellRef::new(layout::day_row(30), layout::DAY_COLUMN)),
            None
        );
    }

    #[test]
    fn test_roster_sheets_are_independent() {
        let template = template();
        let assembler = DocumentAssembler::new(&template, organization());

        let document = assembler
            .assemble_roster(
                date(2024, 3, 1),
                date(2024, 3, 5),
                &[employee(10, 500), employee(20, 600)],
            )
            .unwrap();

        let first = document.sheet("10 - MAR2024").unwrap();
        let second = document.sheet("20 - MAR2024").unwrap();
        assert_eq!(number(first, layout::EMPLOYEE_ID), Some(Decimal::new(10, 0)));
        assert_eq!(number(second, layout::EMPLOYEE_ID), Some(Decimal::new(20, 0)));
        assert_eq!(number(first, layout::HITCH_TOTAL), Some(Decimal::new(2500, 0)));
        assert_eq!(number(second, layout::HITCH_TOTAL), Some(Decimal::new(3000, 0)));
        assert_eq!(
            first
                .get(CellRef::new(1, layout::DAY_COLUMN))
                .and_then(CellValue::as_text),
            Some("Day")
        );
    }

    #[test]
    fn test_roster_requires_employees() {
        let template = template();
        let assembler = DocumentAssembler::new(&template, organization());

        let result = assembler.assemble_roster(date(2024, 3, 1), date(2024, 3, 5), &[]);
        assert!(matches!(result, Err(TimesheetError::InvalidField { .. })));
    }

    #[test]
    fn test_roster_duplicate_employee_fails_whole_document() {
        let template = template();
        let assembler = DocumentAssembler::new(&template, organization());

        let result = assembler.assemble_roster(
            date(2024, 3, 1),
            date(2024, 3, 5),
            &[employee(10, 500), employee(10, 500)],
        );
        assert!(matches!(
            result,
            Err(TimesheetError::DuplicateSheetTitle { .. })
        ));
    }

    #[test]
    fn test_template_is_not_modified() {
        let template = template();
        let assembler = DocumentAssembler::new(&template, organization());

        assembler
            .assemble_roster(date(2024, 3, 1), date(2024, 3, 5), &[employee(10, 500)])
            .unwrap();

        assert_eq!(template.sheet().title(), "timesheet");
        assert_eq!(template.sheet().get(layout::MONTH_YEAR), None);
    }

    proptest! {
        #[test]
        fn prop_roster_titles_unique_and_never_scaffold(
            ids in proptest::collection::hash_set(0u32..100_000, 1..8),
            start_offset in 0i64..730,
            length in 0i64..45,
        ) {
            let start = date(2024, 1, 1) + chrono::Duration::days(start_offset);
            let end = start + chrono::Duration::days(length);
            prop_assume!(end <= crate::calendar::end_of_next_month(start));

            let employees: Vec<EmployeeContext> = ids.iter().map(|id| employee(*id, 100)).collect();
            let template = template();
            let assembler = DocumentAssembler::new(&template, organization());
            let document = assembler.assemble_roster(start, end, &employees).unwrap();

            let periods = split_periods(start, end, PeriodMode::AllowDouble).unwrap();
            prop_assert_eq!(document.len(), employees.len() * periods.len());

            let titles: HashSet<&str> = document.titles().into_iter().collect();
            prop_assert_eq!(titles.len(), document.len());
            for period in &periods {
                prop_assert!(!document.contains_title(&period.title()));
            }
        }
    }
}
