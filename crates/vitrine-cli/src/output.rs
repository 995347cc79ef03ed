//! Output renderers and formatting helpers for CLI commands.

use std::fmt::Write as _;

use anyhow::anyhow;
use serde::Serialize;
use vitrine_ui::core::highlight::Segment;

use crate::cli::OutputFormat;
use crate::commands::select::SelectionReport;
use crate::commands::table::TableReport;
use crate::error::{CliError, CliResult};

pub(crate) fn render_selection(report: &SelectionReport, format: OutputFormat) -> CliResult<()> {
    emit(report, format, format_selection)
}

pub(crate) fn render_table(report: &TableReport, format: OutputFormat) -> CliResult<()> {
    emit(report, format, format_table)
}

fn emit<T: Serialize>(value: &T, format: OutputFormat, table: fn(&T) -> String) -> CliResult<()> {
    match format {
        OutputFormat::Json => {
            let text = serde_json::to_string_pretty(value)
                .map_err(|err| CliError::failure(anyhow!("failed to format JSON: {err}")))?;
            println!("{text}");
        }
        OutputFormat::Table => print!("{}", table(value)),
    }
    Ok(())
}

/// Matched runs wrapped in brackets, e.g. `[Par]is`.
pub(crate) fn mark_segments(segments: &[Segment]) -> String {
    segments.iter().fold(String::new(), |mut out, segment| {
        if segment.matched {
            let _ = write!(out, "[{}]", segment.text);
        } else {
            out.push_str(&segment.text);
        }
        out
    })
}

pub(crate) fn format_selection(report: &SelectionReport) -> String {
    let mut out = String::new();
    let id_width = report
        .options
        .iter()
        .map(|option| option.id.to_string().chars().count())
        .max()
        .unwrap_or(0)
        .max("ID".len());
    let _ = writeln!(out, "  {:<id_width$} LABEL", "ID");
    if report.options.is_empty() {
        let _ = writeln!(out, "  (aucun résultat)");
    }
    for option in &report.options {
        let marker = if option.selected { '*' } else { ' ' };
        let mut label = mark_segments(&option.segments);
        if option.custom {
            label = format!("« {label} »");
        }
        if option.disabled {
            label.push_str(" (disabled)");
        }
        let _ = writeln!(out, "{marker} {:<id_width$} {label}", option.id.to_string());
    }
    let _ = writeln!(out, "selection: {}", report.display);
    if !report.ignored.is_empty() {
        let _ = writeln!(out, "ignored picks: {}", report.ignored.join(", "));
    }
    out
}

pub(crate) fn format_table(report: &TableReport) -> String {
    let mut out = String::new();
    if report.rows.is_empty() {
        let _ = writeln!(out, "Aucune donnée");
        return out;
    }

    let mut headers: Vec<String> = Vec::with_capacity(report.columns.len() + 1);
    if report.numeration {
        headers.push("#".to_string());
    }
    headers.extend(report.columns.iter().map(|column| column.to_uppercase()));

    let lines: Vec<Vec<String>> = report
        .rows
        .iter()
        .map(|line| {
            let mut cells = Vec::with_capacity(line.cells.len() + 1);
            if let Some(number) = line.number {
                cells.push(number.to_string());
            }
            cells.extend(line.cells.iter().cloned());
            cells
        })
        .collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(idx, header)| {
            lines
                .iter()
                .filter_map(|cells| cells.get(idx))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let _ = writeln!(out, "{}", join_padded(&headers, &widths));
    for cells in &lines {
        let _ = writeln!(out, "{}", join_padded(cells, &widths));
    }

    if report.paged {
        let _ = writeln!(
            out,
            "page {} / {} ({} rows)",
            report.page, report.page_count, report.total_rows
        );
    } else {
        let _ = writeln!(out, "{} éléments affichés", report.total_rows);
    }
    if let Some(column) = &report.sort.column {
        let direction = report.sort.direction.map_or("asc", |dir| dir.as_str());
        let _ = writeln!(out, "sorted by {column} ({direction})");
    }
    out
}

fn join_padded(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::select::OptionLine;
    use crate::commands::table::TableLine;
    use vitrine_ui::core::highlight::highlight;
    use vitrine_ui::core::selection::{Item, ItemId, SelectionState};
    use vitrine_ui::core::table::{SortDirection, SortDirective};

    #[test]
    fn selection_listing_marks_matches_and_picks() {
        let report = SelectionReport {
            query: "par".into(),
            multi: false,
            options: vec![OptionLine {
                id: ItemId::Number(1),
                label: "Paris".into(),
                disabled: false,
                selected: true,
                custom: false,
                segments: highlight("Paris", "par"),
            }],
            selection: SelectionState::Single(Some(Item::new(1, "Paris"))),
            display: "Paris".into(),
            changes: 1,
            ignored: Vec::new(),
        };
        assert_eq!(
            format_selection(&report),
            "  ID LABEL\n* 1  [Par]is\nselection: Paris\n"
        );
    }

    #[test]
    fn table_listing_aligns_columns() {
        let report = TableReport {
            columns: vec!["name".into(), "score".into()],
            numeration: true,
            rows: vec![
                TableLine {
                    number: Some(11),
                    cells: vec!["Dana".into(), "8".into()],
                },
                TableLine {
                    number: Some(12),
                    cells: vec!["Amine".into(), "17".into()],
                },
            ],
            sort: SortDirective::by("score", SortDirection::Asc),
            paged: true,
            page: 2,
            page_count: 3,
            total_rows: 25,
        };
        assert_eq!(
            format_table(&report),
            "#   NAME   SCORE\n11  Dana   8\n12  Amine  17\npage 2 / 3 (25 rows)\nsorted by score (asc)\n"
        );
    }

    #[test]
    fn empty_tables_say_so() {
        let report = TableReport {
            columns: Vec::new(),
            numeration: false,
            rows: Vec::new(),
            sort: SortDirective::none(),
            paged: false,
            page: 1,
            page_count: 1,
            total_rows: 0,
        };
        assert_eq!(format_table(&report), "Aucune donnée\n");
    }
}
