//! `vitrine table`: sort and paginate JSON rows through the table engine.

use serde::Serialize;
use serde_json::{Map, Value};
use vitrine_ui::config::{LibraryConfig, TableConfig};
use vitrine_ui::core::table::{CellValue, Column, DataTable, Paging, SortDirective, TableBody};
use vitrine_ui::error::UiError;

use crate::cli::{OutputFormat, TableArgs};
use crate::commands::read_json;
use crate::error::{CliError, CliResult};
use crate::output;

type Row = Map<String, Value>;

/// One rendered row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct TableLine {
    pub(crate) number: Option<usize>,
    pub(crate) cells: Vec<String>,
}

/// Outcome of a `table` run.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct TableReport {
    pub(crate) columns: Vec<String>,
    pub(crate) numeration: bool,
    pub(crate) rows: Vec<TableLine>,
    pub(crate) sort: SortDirective,
    pub(crate) paged: bool,
    pub(crate) page: usize,
    pub(crate) page_count: usize,
    pub(crate) total_rows: usize,
}

pub(crate) fn handle_table(
    args: &TableArgs,
    config: &LibraryConfig,
    format: OutputFormat,
) -> CliResult<()> {
    let values: Vec<Value> = read_json(&args.rows, "rows")?;
    let rows = into_rows(values)?;
    let report = build_report(&rows, args, &config.table)?;
    output::render_table(&report, format)
}

fn into_rows(values: Vec<Value>) -> CliResult<Vec<Row>> {
    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| match value {
            Value::Object(row) => Ok(row),
            other => Err(CliError::validation(format!(
                "row {} is not a JSON object: {other}",
                index + 1
            ))),
        })
        .collect()
}

fn column_for(key: &str) -> Column<Row> {
    let lookup = key.to_string();
    Column::new(key, key, move |row: &Row| {
        row.get(&lookup).map_or(CellValue::Empty, CellValue::from)
    })
    .sortable(true)
}

pub(crate) fn build_report(
    rows: &[Row],
    args: &TableArgs,
    config: &TableConfig,
) -> CliResult<TableReport> {
    if args.rows_per_page.unwrap_or(config.rows_per_page) == 0 {
        return Err(UiError::InvalidConfig {
            field: "table.rows_per_page".to_string(),
            message: "must be greater than zero".to_string(),
        }
        .into());
    }
    let Some(first) = rows.first() else {
        return Ok(TableReport {
            columns: Vec::new(),
            numeration: false,
            rows: Vec::new(),
            sort: SortDirective::none(),
            paged: false,
            page: 1,
            page_count: 1,
            total_rows: 0,
        });
    };

    let mut builder = DataTable::builder()
        .config(config)
        .columns(first.keys().map(|key| column_for(key)))
        .numeration(config.numeration && !args.no_numeration);
    if let Some(rows_per_page) = args.rows_per_page {
        builder = builder.rows_per_page(rows_per_page);
    }
    if args.page.is_some() || args.rows_per_page.is_some() {
        builder = builder.paging(Paging::Local);
    }
    let table = builder.build()?;

    let mut directive = SortDirective::none();
    if let Some(key) = &args.sort {
        let clicks = if args.desc { 2 } else { 1 };
        for _ in 0..clicks {
            directive = table
                .header_clicked(&directive, key)
                .ok_or_else(|| CliError::validation(format!("unknown sort column '{key}'")))?;
        }
    }

    let mut state = table.page_state(1, rows.len());
    if let Some(requested) = args.page {
        state = table.request_page(state, requested);
    }

    let view = table.view(Some(rows), &directive, state.page());
    let lines = match &view.body {
        TableBody::Rows(visible) => visible
            .iter()
            .map(|row| TableLine {
                number: row.number,
                cells: row.cells.clone(),
            })
            .collect(),
        TableBody::Loading | TableBody::Empty => Vec::new(),
    };

    Ok(TableReport {
        columns: view.headers.iter().map(|header| header.title.clone()).collect(),
        numeration: view.numeration,
        rows: lines,
        sort: view.directive.clone(),
        paged: table.paging() != Paging::Off,
        page: view.page,
        page_count: view.page_count,
        total_rows: rows.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_test_support::fixtures::{numbered_rows_json, scores_json};

    fn rows_from(json: &str) -> Vec<Row> {
        into_rows(serde_json::from_str(json).expect("fixture json")).expect("objects")
    }

    fn first_cells(report: &TableReport) -> Vec<String> {
        report
            .rows
            .iter()
            .map(|line| line.cells[0].clone())
            .collect()
    }

    #[test]
    fn columns_follow_the_first_row_and_sort_by_key() {
        let rows = rows_from(&scores_json());
        let args = TableArgs {
            sort: Some("score".into()),
            desc: true,
            ..TableArgs::default()
        };
        let report = build_report(&rows, &args, &TableConfig::default()).expect("report");
        assert_eq!(report.columns, vec!["name", "score", "joined"]);
        assert_eq!(
            first_cells(&report),
            vec!["Chloé", "Bastien", "Élodie", "Amine", "Dana"]
        );
        assert_eq!(report.rows[0].cells[2], "2024-03-01 09:00");
        assert_eq!(report.rows[0].number, Some(1));
        assert!(!report.paged);
    }

    #[test]
    fn paging_clamps_and_numbers_continuously() {
        let rows = rows_from(&numbered_rows_json(25));
        let args = TableArgs {
            page: Some(9999),
            rows_per_page: Some(10),
            ..TableArgs::default()
        };
        let report = build_report(&rows, &args, &TableConfig::default()).expect("report");
        assert!(report.paged);
        assert_eq!(report.page, 3);
        assert_eq!(report.page_count, 3);
        assert_eq!(report.rows.len(), 5);
        assert_eq!(report.rows[0].number, Some(21));

        let args = TableArgs {
            page: Some(-5),
            rows_per_page: Some(10),
            no_numeration: true,
            ..TableArgs::default()
        };
        let report = build_report(&rows, &args, &TableConfig::default()).expect("report");
        assert_eq!(report.page, 1);
        assert_eq!(report.rows[0].number, None);
    }

    #[test]
    fn bad_input_is_a_validation_error() {
        let rows = rows_from(&scores_json());
        let args = TableArgs {
            sort: Some("missing".into()),
            ..TableArgs::default()
        };
        let err = build_report(&rows, &args, &TableConfig::default()).expect_err("unknown column");
        assert_eq!(err.exit_code(), 2);

        let zero = TableArgs {
            rows_per_page: Some(0),
            ..TableArgs::default()
        };
        assert!(build_report(&rows, &zero, &TableConfig::default()).is_err());

        let err = into_rows(vec![serde_json::json!(1)]).expect_err("not an object");
        assert!(err.display_message().starts_with("row 1"));
    }

    #[test]
    fn empty_input_yields_an_empty_single_page() {
        let report =
            build_report(&[], &TableArgs::default(), &TableConfig::default()).expect("report");
        assert!(report.rows.is_empty());
        assert_eq!(report.page_count, 1);
        assert_eq!(report.total_rows, 0);
    }

    #[test]
    fn zero_rows_per_page_is_rejected_even_without_rows() {
        let args = TableArgs {
            rows_per_page: Some(0),
            ..TableArgs::default()
        };
        let err = build_report(&[], &args, &TableConfig::default()).expect_err("zero page size");
        assert_eq!(err.exit_code(), 2);
        assert!(err.display_message().contains("table.rows_per_page"));
    }
}
