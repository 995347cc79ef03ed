//! Filterable selection engine behind the search-select (combo-box) component.
//!
//! # Design
//! - Keep items and selection controlled by the caller; only compute views and transitions.
//! - Match labels by case-insensitive substring containment, preserving input order.
//! - Treat whitespace-only queries as empty.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::SelectConfig;
use crate::core::callback::Callback;
use crate::error::{UiError, UiResult};

/// Identity of a selectable item.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    /// Numeric identifier.
    Number(i64),
    /// Textual identifier (also used for custom values).
    Text(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl From<i64> for ItemId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Selectable option with identity and display text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Stable identifier.
    pub id: ItemId,
    /// Searchable display text.
    pub label: String,
    /// Disabled items are shown but cannot be selected.
    #[serde(default)]
    pub disabled: bool,
}

impl Item {
    /// Build an enabled item.
    pub fn new(id: impl Into<ItemId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            disabled: false,
        }
    }

    /// Return the item with its disabled flag replaced.
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Synthesize the free-text option for a query; `None` when the query is blank.
    #[must_use]
    pub fn custom(query: &str) -> Option<Self> {
        let text = query.trim();
        if text.is_empty() {
            None
        } else {
            Some(Self::new(text, text))
        }
    }
}

/// Current selection of a picker.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "items", rename_all = "snake_case")]
pub enum SelectionState {
    /// Single-select: at most one item.
    Single(Option<Item>),
    /// Multi-select: distinct items in selection order.
    Multi(Vec<Item>),
}

impl SelectionState {
    /// Empty selection for the requested mode.
    #[must_use]
    pub const fn empty(is_multi: bool) -> Self {
        if is_multi {
            Self::Multi(Vec::new())
        } else {
            Self::Single(None)
        }
    }

    /// Whether this is a multi-select state.
    #[must_use]
    pub const fn is_multi(&self) -> bool {
        matches!(self, Self::Multi(_))
    }

    /// Selected items as a slice.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        match self {
            Self::Single(Some(item)) => std::slice::from_ref(item),
            Self::Single(None) => &[],
            Self::Multi(items) => items,
        }
    }

    /// Whether an item with `id` is selected.
    #[must_use]
    pub fn contains(&self, id: &ItemId) -> bool {
        self.items().iter().any(|item| &item.id == id)
    }
}

/// Items whose label contains `query`, ignoring case. Blank queries keep every item.
///
/// Non-blank queries are matched as typed, surrounding spaces included.
#[must_use]
pub fn filter(items: &[Item], query: &str) -> Vec<Item> {
    if query.trim().is_empty() {
        return items.to_vec();
    }
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| item.label.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Append the custom-value option when free text is allowed and not already listed.
///
/// The option is skipped when a listed label matches it or a listed id equals it.
#[must_use]
pub fn with_custom_option(
    mut filtered: Vec<Item>,
    query: &str,
    allow_custom: bool,
    is_multi: bool,
) -> Vec<Item> {
    if !allow_custom || is_multi {
        return filtered;
    }
    let Some(custom) = Item::custom(query) else {
        return filtered;
    };
    let needle = custom.label.to_lowercase();
    if filtered
        .iter()
        .any(|item| item.label.to_lowercase() == needle || item.id.to_string() == custom.label)
    {
        return filtered;
    }
    filtered.push(custom);
    filtered
}

/// Apply a click on `candidate` to the current selection.
///
/// Returns `None` when the click is ignored (disabled candidate). In single
/// mode, reselecting the current item clears the selection only when
/// `allow_deselect` is set; otherwise the candidate stays selected. In multi
/// mode the candidate is toggled by id and new picks are appended.
#[must_use]
pub fn select(
    current: &SelectionState,
    candidate: &Item,
    allow_deselect: bool,
) -> Option<SelectionState> {
    if candidate.disabled {
        debug!(id = %candidate.id, "ignoring click on disabled item");
        return None;
    }
    let next = match current {
        SelectionState::Single(Some(existing)) if existing.id == candidate.id => {
            if allow_deselect {
                SelectionState::Single(None)
            } else {
                SelectionState::Single(Some(candidate.clone()))
            }
        }
        SelectionState::Single(_) => SelectionState::Single(Some(candidate.clone())),
        SelectionState::Multi(items) => {
            let mut next = items.clone();
            if let Some(position) = next.iter().position(|item| item.id == candidate.id) {
                next.remove(position);
            } else {
                next.push(candidate.clone());
            }
            SelectionState::Multi(next)
        }
    };
    Some(next)
}

/// Keep selected items listed even when the caller's item list no longer contains them.
///
/// Only multi-select states are merged; selected items missing from `items`
/// are appended in selection order.
#[must_use]
pub fn ensure_visible(items: &[Item], selected: &SelectionState) -> Vec<Item> {
    let mut merged = items.to_vec();
    if let SelectionState::Multi(chosen) = selected {
        for item in chosen {
            if !merged.iter().any(|existing| existing.id == item.id) {
                merged.push(item.clone());
            }
        }
    }
    merged
}

/// Text shown in the input when the picker is closed.
#[must_use]
pub fn display_value(selected: &SelectionState) -> String {
    match selected {
        SelectionState::Single(item) => item
            .as_ref()
            .map(|item| item.label.clone())
            .unwrap_or_default(),
        SelectionState::Multi(items) => items
            .iter()
            .map(|item| item.label.as_str())
            .collect::<Vec<_>>()
            .join(", "),
    }
}

/// Options to render for the current query.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectView {
    /// Visible options, custom value last when present.
    pub options: Vec<Item>,
    /// True when the last option is the synthesized custom value.
    pub has_custom: bool,
}

impl SelectView {
    /// Whether nothing is offered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// The custom-value option, when offered.
    #[must_use]
    pub fn custom(&self) -> Option<&Item> {
        if self.has_custom {
            self.options.last()
        } else {
            None
        }
    }
}

/// Configured search-select engine.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchSelect {
    is_multi: bool,
    allow_custom_value: bool,
    allow_deselect: bool,
    on_change: Callback<SelectionState>,
}

impl SearchSelect {
    /// Start building an engine.
    #[must_use]
    pub fn builder() -> SearchSelectBuilder {
        SearchSelectBuilder::default()
    }

    /// Whether the picker selects several items.
    #[must_use]
    pub const fn is_multi(&self) -> bool {
        self.is_multi
    }

    /// Empty selection matching this picker's mode.
    #[must_use]
    pub const fn empty_selection(&self) -> SelectionState {
        SelectionState::empty(self.is_multi)
    }

    /// Compute the options for `query`. A loading picker offers nothing.
    #[must_use]
    pub fn view(
        &self,
        items: &[Item],
        query: &str,
        selected: &SelectionState,
        loading: bool,
    ) -> SelectView {
        if loading {
            trace!("picker loading; suppressing options");
            return SelectView::default();
        }
        let pool = if self.is_multi {
            ensure_visible(items, selected)
        } else {
            items.to_vec()
        };
        let filtered = filter(&pool, query);
        let matched = filtered.len();
        let options = with_custom_option(filtered, query, self.allow_custom_value, self.is_multi);
        let has_custom = options.len() > matched;
        trace!(matched, has_custom, "recomputed picker options");
        SelectView {
            options,
            has_custom,
        }
    }

    /// Apply a click and notify `on_change` when the selection actually changes.
    ///
    /// Returns the new selection, or `None` when nothing changed.
    pub fn choose(
        &self,
        selected: &SelectionState,
        candidate: &Item,
        loading: bool,
    ) -> Option<SelectionState> {
        if loading {
            debug!(id = %candidate.id, "ignoring pick while loading");
            return None;
        }
        let next = select(selected, candidate, self.allow_deselect)?;
        if &next == selected {
            return None;
        }
        self.on_change.emit(next.clone());
        Some(next)
    }
}

/// Builder for [`SearchSelect`].
#[derive(Clone, Debug, Default)]
pub struct SearchSelectBuilder {
    is_multi: bool,
    allow_custom_value: bool,
    allow_deselect: bool,
    on_change: Option<Callback<SelectionState>>,
}

impl SearchSelectBuilder {
    /// Seed flags from library configuration.
    #[must_use]
    pub fn config(mut self, config: &SelectConfig) -> Self {
        self.allow_custom_value = config.allow_custom_value;
        self.allow_deselect = config.allow_deselect;
        self
    }

    /// Select several items instead of one.
    #[must_use]
    pub fn multi(mut self, is_multi: bool) -> Self {
        self.is_multi = is_multi;
        self
    }

    /// Offer the typed text as an extra option (single mode only).
    #[must_use]
    pub fn allow_custom_value(mut self, allow: bool) -> Self {
        self.allow_custom_value = allow;
        self
    }

    /// Clear a single selection when its item is picked again.
    #[must_use]
    pub fn allow_deselect(mut self, allow: bool) -> Self {
        self.allow_deselect = allow;
        self
    }

    /// Selection change callback (required).
    #[must_use]
    pub fn on_change(mut self, callback: impl Into<Callback<SelectionState>>) -> Self {
        self.on_change = Some(callback.into());
        self
    }

    /// Finish building.
    ///
    /// # Errors
    /// Returns [`UiError::MissingCallback`] when no `on_change` callback was supplied.
    pub fn build(self) -> UiResult<SearchSelect> {
        let on_change = self
            .on_change
            .ok_or(UiError::MissingCallback { name: "on_change" })?;
        Ok(SearchSelect {
            is_multi: self.is_multi,
            allow_custom_value: self.allow_custom_value,
            allow_deselect: self.allow_deselect,
            on_change,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn cities() -> Vec<Item> {
        vitrine_test_support::fixtures::CITY_RECORDS
            .iter()
            .map(|(id, label, disabled)| Item::new(*id, *label).with_disabled(*disabled))
            .collect()
    }

    fn recording_select(multi: bool) -> (SearchSelect, Rc<RefCell<Vec<SelectionState>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let engine = SearchSelect::builder()
            .multi(multi)
            .allow_custom_value(true)
            .on_change(move |state| sink.borrow_mut().push(state))
            .build()
            .expect("engine builds");
        (engine, seen)
    }

    #[test]
    fn filter_matches_substring_case_insensitively() {
        let items = vec![Item::new(1, "Paris"), Item::new(2, "London")];
        assert_eq!(filter(&items, "par"), vec![Item::new(1, "Paris")]);
        assert_eq!(filter(&items, "ON"), vec![Item::new(2, "London")]);
        assert!(filter(&items, "berlin").is_empty());
    }

    #[test]
    fn surrounding_spaces_in_a_query_still_narrow_matches() {
        let items = vec![Item::new(1, "Le Mans"), Item::new(2, "Marseille")];
        assert_eq!(filter(&items, "le "), vec![Item::new(1, "Le Mans")]);
        assert_eq!(filter(&items, " mar"), Vec::<Item>::new());
        assert_eq!(filter(&items, "le"), items);
    }

    #[test]
    fn blank_query_is_identity() {
        let items = cities();
        assert_eq!(filter(&items, ""), items);
        assert_eq!(filter(&items, "   "), items);
    }

    #[test]
    fn filter_is_idempotent() {
        let items = cities();
        for query in ["a", "on", "  Ber ", "zz"] {
            let once = filter(&items, query);
            assert_eq!(filter(&once, query), once, "query {query:?}");
        }
    }

    #[test]
    fn custom_option_is_appended_only_when_new() {
        let items = vec![Item::new(1, "Paris")];
        let with_new = with_custom_option(filter(&items, "Lyon"), " Lyon ", true, false);
        assert_eq!(with_new, vec![Item::new("Lyon", "Lyon")]);

        let existing = with_custom_option(filter(&items, "paris"), "paris", true, false);
        assert_eq!(existing, vec![Item::new(1, "Paris")]);

        assert!(with_custom_option(Vec::new(), "Lyon", false, false).is_empty());
        assert!(with_custom_option(Vec::new(), "Lyon", true, true).is_empty());
        assert!(with_custom_option(Vec::new(), "   ", true, false).is_empty());
    }

    #[test]
    fn custom_option_never_duplicates_a_listed_id() {
        let listed = vec![Item::new("lyon", "Lyon (Rhône)")];
        let options = with_custom_option(listed.clone(), "lyon", true, false);
        assert_eq!(options, listed);

        let numbered = vec![Item::new(7, "Seven")];
        assert_eq!(with_custom_option(numbered.clone(), "7", true, false), numbered);
    }

    #[test]
    fn single_select_replaces_and_keeps_on_reselect() {
        let paris = Item::new(1, "Paris");
        let london = Item::new(2, "London");
        let state = select(&SelectionState::Single(None), &paris, false).expect("selects");
        assert_eq!(state, SelectionState::Single(Some(paris.clone())));
        let state = select(&state, &london, false).expect("replaces");
        assert_eq!(state, SelectionState::Single(Some(london.clone())));
        assert_eq!(
            select(&state, &london, false),
            Some(SelectionState::Single(Some(london)))
        );
    }

    #[test]
    fn single_select_clears_on_reselect_when_deselect_allowed() {
        let paris = Item::new(1, "Paris");
        let current = SelectionState::Single(Some(paris.clone()));
        assert_eq!(
            select(&current, &paris, true),
            Some(SelectionState::Single(None))
        );
    }

    #[test]
    fn multi_select_toggle_is_an_involution() {
        let start = SelectionState::Multi(vec![Item::new(2, "London")]);
        let candidate = Item::new(1, "Paris");
        let once = select(&start, &candidate, false).expect("toggles on");
        assert_eq!(
            once,
            SelectionState::Multi(vec![Item::new(2, "London"), Item::new(1, "Paris")])
        );
        let twice = select(&once, &candidate, false).expect("toggles off");
        assert_eq!(twice, start);
    }

    #[test]
    fn disabled_candidates_are_ignored() {
        let blocked = Item::new(9, "Closed").with_disabled(true);
        assert_eq!(select(&SelectionState::Single(None), &blocked, false), None);
        assert_eq!(select(&SelectionState::Multi(Vec::new()), &blocked, true), None);
    }

    #[test]
    fn ensure_visible_appends_filtered_out_selections() {
        let items = vec![Item::new(1, "Paris"), Item::new(2, "London")];
        let selected = SelectionState::Multi(vec![Item::new(2, "London"), Item::new(7, "Oslo")]);
        assert_eq!(
            ensure_visible(&items, &selected),
            vec![Item::new(1, "Paris"), Item::new(2, "London"), Item::new(7, "Oslo")]
        );
        let single = SelectionState::Single(Some(Item::new(7, "Oslo")));
        assert_eq!(ensure_visible(&items, &single), items);
    }

    #[test]
    fn display_value_joins_multi_labels() {
        let multi = SelectionState::Multi(vec![Item::new(1, "Paris"), Item::new(2, "London")]);
        assert_eq!(display_value(&multi), "Paris, London");
        assert_eq!(display_value(&SelectionState::Single(None)), "");
    }

    #[test]
    fn builder_requires_on_change() {
        let err = SearchSelect::builder().build().expect_err("missing callback");
        assert_eq!(err, UiError::MissingCallback { name: "on_change" });
    }

    #[test]
    fn view_offers_custom_value_and_suppresses_while_loading() {
        let (engine, _) = recording_select(false);
        let items = cities();
        let view = engine.view(&items, "Atlantis", &engine.empty_selection(), false);
        assert!(view.has_custom);
        assert_eq!(view.custom(), Some(&Item::new("Atlantis", "Atlantis")));

        let loading = engine.view(&items, "", &engine.empty_selection(), true);
        assert!(loading.is_empty());
        assert!(loading.custom().is_none());
    }

    #[test]
    fn multi_view_keeps_selected_items_listed() {
        let (engine, _) = recording_select(true);
        let items = vec![Item::new(1, "Paris")];
        let selected = SelectionState::Multi(vec![Item::new(7, "Oslo")]);
        let view = engine.view(&items, "", &selected, false);
        assert_eq!(view.options, vec![Item::new(1, "Paris"), Item::new(7, "Oslo")]);
        assert!(!view.has_custom);
    }

    #[test]
    fn choose_emits_only_for_real_transitions() {
        let (engine, seen) = recording_select(false);
        let paris = Item::new(1, "Paris");
        let next = engine
            .choose(&engine.empty_selection(), &paris, false)
            .expect("changes");
        assert_eq!(engine.choose(&next, &paris, false), None);
        assert_eq!(
            engine.choose(&next, &Item::new(2, "Rome").with_disabled(true), false),
            None
        );
        assert_eq!(engine.choose(&next, &Item::new(3, "Lima"), true), None);
        assert_eq!(*seen.borrow(), vec![SelectionState::Single(Some(paris))]);
    }

    #[test]
    fn item_ids_deserialize_from_numbers_and_strings() {
        let items: Vec<Item> = serde_json::from_str(
            r#"[{"id": 1, "label": "Paris"}, {"id": "lyon", "label": "Lyon", "disabled": true}]"#,
        )
        .expect("valid json");
        assert_eq!(items[0].id, ItemId::Number(1));
        assert_eq!(items[1].id, ItemId::Text("lyon".into()));
        assert!(items[1].disabled);
    }
}
