//! `vitrine select`: filter items and replay picks through the selection engine.

use std::cell::Cell;
use std::rc::Rc;

use serde::Serialize;
use tracing::debug;
use vitrine_ui::config::{LibraryConfig, SelectConfig};
use vitrine_ui::core::highlight::{Segment, highlight};
use vitrine_ui::core::selection::{Item, ItemId, SearchSelect, SelectionState, display_value};

use crate::cli::{OutputFormat, SelectArgs};
use crate::commands::read_json;
use crate::error::{CliError, CliResult};
use crate::output;

/// One option as offered after the picks were applied.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct OptionLine {
    pub(crate) id: ItemId,
    pub(crate) label: String,
    pub(crate) disabled: bool,
    pub(crate) selected: bool,
    pub(crate) custom: bool,
    pub(crate) segments: Vec<Segment>,
}

/// Outcome of a `select` run.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct SelectionReport {
    pub(crate) query: String,
    pub(crate) multi: bool,
    pub(crate) options: Vec<OptionLine>,
    pub(crate) selection: SelectionState,
    pub(crate) display: String,
    pub(crate) changes: usize,
    pub(crate) ignored: Vec<String>,
}

pub(crate) fn handle_select(
    args: &SelectArgs,
    config: &LibraryConfig,
    format: OutputFormat,
) -> CliResult<()> {
    let items: Vec<Item> = read_json(&args.items, "items")?;
    let report = run_select(&items, args, &config.select)?;
    output::render_selection(&report, format)
}

pub(crate) fn run_select(
    items: &[Item],
    args: &SelectArgs,
    config: &SelectConfig,
) -> CliResult<SelectionReport> {
    let changes = Rc::new(Cell::new(0_usize));
    let engine = {
        let changes = Rc::clone(&changes);
        SearchSelect::builder()
            .config(config)
            .multi(args.multi)
            .allow_custom_value(args.allow_custom || config.allow_custom_value)
            .allow_deselect(args.allow_deselect || config.allow_deselect)
            .on_change(move |_state: SelectionState| changes.set(changes.get() + 1))
            .build()?
    };

    let mut selected = engine.empty_selection();
    let mut ignored = Vec::new();
    for pick in &args.picks {
        let view = engine.view(items, &args.query, &selected, false);
        let Some(candidate) = view
            .options
            .iter()
            .find(|item| item.id.to_string() == *pick)
        else {
            return Err(CliError::validation(format!(
                "item '{pick}' is not offered for query '{}'",
                args.query
            )));
        };
        match engine.choose(&selected, candidate, false) {
            Some(next) => selected = next,
            None => {
                debug!(pick = %pick, "pick left the selection unchanged");
                ignored.push(pick.clone());
            }
        }
    }

    let view = engine.view(items, &args.query, &selected, false);
    let custom_id = view.custom().map(|item| item.id.clone());
    let options = view
        .options
        .iter()
        .map(|item| OptionLine {
            id: item.id.clone(),
            label: item.label.clone(),
            disabled: item.disabled,
            selected: selected.contains(&item.id),
            custom: custom_id.as_ref() == Some(&item.id),
            segments: highlight(&item.label, &args.query),
        })
        .collect();

    Ok(SelectionReport {
        query: args.query.clone(),
        multi: engine.is_multi(),
        options,
        display: display_value(&selected),
        selection: selected,
        changes: changes.get(),
        ignored,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_test_support::fixtures::CITY_RECORDS;

    fn cities() -> Vec<Item> {
        CITY_RECORDS
            .iter()
            .map(|(id, label, disabled)| Item::new(*id, *label).with_disabled(*disabled))
            .collect()
    }

    fn args(query: &str, picks: &[&str]) -> SelectArgs {
        SelectArgs {
            query: query.to_string(),
            picks: picks.iter().map(ToString::to_string).collect(),
            ..SelectArgs::default()
        }
    }

    #[test]
    fn single_picks_replace_each_other() {
        let report =
            run_select(&cities(), &args("", &["1", "3"]), &SelectConfig::default()).expect("ok");
        assert_eq!(report.display, "Berlin");
        assert_eq!(report.changes, 2);
        assert!(report.options.iter().any(|o| o.selected && o.label == "Berlin"));
    }

    #[test]
    fn multi_picks_toggle_and_disabled_picks_are_ignored() {
        let mut multi = args("lon", &["2", "6", "2", "2"]);
        multi.multi = true;
        let report = run_select(&cities(), &multi, &SelectConfig::default()).expect("ok");
        assert_eq!(report.display, "London");
        assert_eq!(report.changes, 3);
        assert_eq!(report.ignored, vec!["6".to_string()]);
        let labels: Vec<_> = report.options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["London", "Londonderry"]);
        assert!(report.options[0].segments[0].matched);
    }

    #[test]
    fn custom_values_can_be_picked_by_query() {
        let mut custom = args(" Atlantis ", &["Atlantis"]);
        custom.allow_custom = true;
        let report = run_select(&cities(), &custom, &SelectConfig::default()).expect("ok");
        assert_eq!(
            report.selection,
            SelectionState::Single(Some(Item::new("Atlantis", "Atlantis")))
        );
        assert!(report.options.last().is_some_and(|o| o.custom && o.selected));
    }

    #[test]
    fn picks_outside_the_filtered_options_are_rejected() {
        let err = run_select(&cities(), &args("par", &["2"]), &SelectConfig::default())
            .expect_err("london is filtered out");
        assert_eq!(err.exit_code(), 2);
        assert!(err.display_message().contains("'2'"));
    }
}
