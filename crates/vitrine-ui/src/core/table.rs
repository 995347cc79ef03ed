//! Sortable, paginated data-table engine.
//!
//! # Design
//! - Columns read rows through typed accessors returning [`CellValue`], which is totally ordered.
//! - Sorting is stable: rows with equal values keep their input order in both directions.
//! - The engine derives a [`TableView`]; rendering stays with the component.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::num::NonZeroUsize;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, trace};

use crate::config::TableConfig;
use crate::core::callback::Callback;
use crate::core::paging::{PageState, paginate, row_number};
use crate::error::{UiError, UiResult};

/// Comparable value produced by a column accessor.
///
/// Values of different kinds order by kind: empty, booleans, numbers, text, dates.
/// Integers compare exactly, also against floats; floats use IEEE total ordering
/// so `NaN` sorts deterministically.
#[derive(Clone, Debug)]
pub enum CellValue {
    /// Missing value.
    Empty,
    /// Boolean flag.
    Bool(bool),
    /// Integer value, kept exact beyond the `f64` mantissa.
    Integer(i128),
    /// Floating-point value.
    Number(f64),
    /// Text value.
    Text(String),
    /// Timestamp.
    Date(DateTime<Utc>),
}

impl CellValue {
    const fn rank(&self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::Bool(_) => 1,
            Self::Integer(_) | Self::Number(_) => 2,
            Self::Text(_) => 3,
            Self::Date(_) => 4,
        }
    }
}

impl Ord for CellValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::Integer(a), Self::Integer(b)) => a.cmp(b),
            (Self::Number(a), Self::Number(b)) => unsigned_zero(*a).total_cmp(&unsigned_zero(*b)),
            (Self::Integer(a), Self::Number(b)) => cmp_integer_float(*a, *b),
            (Self::Number(a), Self::Integer(b)) => cmp_integer_float(*b, *a).reverse(),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Date(a), Self::Date(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

/// `-0.0` and `0.0` are the same cell value.
fn unsigned_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}

/// Exact comparison of an integer against a float, with `NaN` placed the way
/// `f64::total_cmp` places it.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn cmp_integer_float(int: i128, float: f64) -> Ordering {
    const LIMIT: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0;
    if float.is_nan() {
        return if float.is_sign_negative() {
            Ordering::Greater
        } else {
            Ordering::Less
        };
    }
    if float >= LIMIT {
        return Ordering::Less;
    }
    if float < -LIMIT {
        return Ordering::Greater;
    }
    let whole = float.trunc();
    match int.cmp(&(whole as i128)) {
        Ordering::Equal => 0.0_f64.total_cmp(&unsigned_zero(float - whole)),
        other => other,
    }
}

impl PartialOrd for CellValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for CellValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for CellValue {}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
            Self::Date(value) => write!(f, "{}", value.format("%Y-%m-%d %H:%M")),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Integer(i128::from(value))
    }
}

impl From<u64> for CellValue {
    fn from(value: u64) -> Self {
        Self::Integer(i128::from(value))
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<DateTime<Utc>> for CellValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Date(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}

impl From<&Value> for CellValue {
    /// JSON strings holding RFC 3339 timestamps become dates; nested values render as JSON text.
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Self::Empty,
            Value::Bool(flag) => Self::Bool(*flag),
            Value::Number(number) => number
                .as_i64()
                .map(Self::from)
                .or_else(|| number.as_u64().map(Self::from))
                .or_else(|| number.as_f64().map(Self::Number))
                .unwrap_or(Self::Empty),
            Value::String(text) => DateTime::parse_from_rfc3339(text).map_or_else(
                |_| Self::Text(text.clone()),
                |date| Self::Date(date.with_timezone(&Utc)),
            ),
            Value::Array(_) | Value::Object(_) => Self::Text(value.to_string()),
        }
    }
}

type Accessor<R> = Rc<dyn Fn(&R) -> CellValue>;
type CellRenderer<R> = Rc<dyn Fn(&R, usize) -> String>;

/// Column descriptor: header text plus how to read and render a row.
pub struct Column<R> {
    key: String,
    title: String,
    value: Accessor<R>,
    cell: Option<CellRenderer<R>>,
    sortable: bool,
    width: Option<String>,
}

impl<R> Column<R> {
    /// Build a non-sortable column reading rows through `value`.
    pub fn new(
        key: impl Into<String>,
        title: impl Into<String>,
        value: impl Fn(&R) -> CellValue + 'static,
    ) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            value: Rc::new(value),
            cell: None,
            sortable: false,
            width: None,
        }
    }

    /// Allow sorting by this column.
    #[must_use]
    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Preferred width (CSS length) for the header.
    #[must_use]
    pub fn width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }

    /// Custom cell renderer receiving the row and its position on the page.
    #[must_use]
    pub fn cell(mut self, render: impl Fn(&R, usize) -> String + 'static) -> Self {
        self.cell = Some(Rc::new(render));
        self
    }

    /// Stable key used by sort directives.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Header text.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Whether header clicks sort by this column.
    #[must_use]
    pub const fn is_sortable(&self) -> bool {
        self.sortable
    }

    /// Preferred header width, when set.
    #[must_use]
    pub fn width_hint(&self) -> Option<&str> {
        self.width.as_deref()
    }

    /// Comparable value for `row`.
    pub fn value(&self, row: &R) -> CellValue {
        (self.value)(row)
    }

    /// Display text for `row` at `position` on the page.
    pub fn render(&self, row: &R, position: usize) -> String {
        self.cell.as_ref().map_or_else(
            || self.value(row).to_string(),
            |render| render(row, position),
        )
    }
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            title: self.title.clone(),
            value: Rc::clone(&self.value),
            cell: self.cell.clone(),
            sortable: self.sortable,
            width: self.width.clone(),
        }
    }
}

impl<R> fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("title", &self.title)
            .field("sortable", &self.sortable)
            .field("width", &self.width)
            .finish_non_exhaustive()
    }
}

/// Sort direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smaller values first.
    Asc,
    /// Larger values first.
    Desc,
}

impl SortDirection {
    /// The opposite direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// Lowercase label (`asc` / `desc`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Column and direction currently applied to a table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortDirective {
    /// Key of the sorted column; `None` keeps input order.
    pub column: Option<String>,
    /// Direction; treated as ascending when a column is set without one.
    pub direction: Option<SortDirection>,
}

impl SortDirective {
    /// Directive that keeps input order.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            column: None,
            direction: None,
        }
    }

    /// Sort by `key` in `direction`.
    pub fn by(key: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            column: Some(key.into()),
            direction: Some(direction),
        }
    }

    /// Direction applied to `key`, if that column is the sorted one.
    #[must_use]
    pub fn direction_for(&self, key: &str) -> Option<SortDirection> {
        if self.column.as_deref() == Some(key) {
            Some(self.direction.unwrap_or(SortDirection::Asc))
        } else {
            None
        }
    }
}

/// Directive after a click on `column`'s header; `None` when the column is not sortable.
#[must_use]
pub fn toggle_sort<R>(current: &SortDirective, column: &Column<R>) -> Option<SortDirective> {
    if !column.is_sortable() {
        debug!(column = column.key(), "ignoring click on non-sortable header");
        return None;
    }
    let direction = if current.column.as_deref() == Some(column.key()) {
        current
            .direction
            .map_or(SortDirection::Asc, SortDirection::flipped)
    } else {
        SortDirection::Asc
    };
    Some(SortDirective::by(column.key(), direction))
}

/// Row indices of `rows` in the order required by `directive`.
fn sorted_indices<R>(rows: &[R], columns: &[Column<R>], directive: &SortDirective) -> Vec<usize> {
    let Some(key) = directive.column.as_deref() else {
        return (0..rows.len()).collect();
    };
    let Some(column) = columns.iter().find(|column| column.key() == key) else {
        debug!(column = key, "sort directive names an unknown column; keeping input order");
        return (0..rows.len()).collect();
    };
    let direction = directive.direction.unwrap_or(SortDirection::Asc);
    let mut keyed: Vec<(CellValue, usize)> = rows
        .iter()
        .enumerate()
        .map(|(index, row)| (column.value(row), index))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| match direction {
        SortDirection::Asc => a.cmp(b),
        SortDirection::Desc => b.cmp(a),
    });
    keyed.into_iter().map(|(_, index)| index).collect()
}

/// Rows ordered by `directive`; input order when no column is set.
#[must_use]
pub fn sort<'a, R>(rows: &'a [R], columns: &[Column<R>], directive: &SortDirective) -> Vec<&'a R> {
    sorted_indices(rows, columns, directive)
        .into_iter()
        .map(|index| &rows[index])
        .collect()
}

/// How a table splits rows into pages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Paging {
    /// Show every row; the footer reports the row count.
    #[default]
    Off,
    /// Slice the supplied rows in memory.
    Local,
    /// Rows are already the current page; `total_rows` drives navigation.
    Remote {
        /// Row count across all pages on the server.
        total_rows: usize,
    },
}

/// Header cell ready for rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderCell {
    /// Column key.
    pub key: String,
    /// Header text.
    pub title: String,
    /// Whether clicking sorts.
    pub sortable: bool,
    /// Preferred width.
    pub width: Option<String>,
    /// Active sort direction on this column.
    pub direction: Option<SortDirection>,
}

/// Row ready for rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct VisibleRow<'a, R> {
    /// Continuous row number when numbering is enabled.
    pub number: Option<usize>,
    /// Rendered cells, one per column.
    pub cells: Vec<String>,
    /// Whether the row receives the zebra background.
    pub striped: bool,
    /// Index of the row in the caller's slice.
    pub source_index: usize,
    /// The row itself.
    pub row: &'a R,
}

/// Table body state.
#[derive(Clone, Debug, PartialEq)]
pub enum TableBody<'a, R> {
    /// Rows not yet available.
    Loading,
    /// Data loaded but empty.
    Empty,
    /// Rows on the current page.
    Rows(Vec<VisibleRow<'a, R>>),
}

/// Pager controls state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PagerView {
    /// Current page.
    pub page: usize,
    /// Number of pages.
    pub page_count: usize,
    /// Whether "previous" is enabled.
    pub has_prev: bool,
    /// Whether "next" is enabled.
    pub has_next: bool,
}

/// Table footer state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableFooter {
    /// Row count summary for unpaginated tables.
    Count(usize),
    /// Pagination controls.
    Pager(PagerView),
}

/// Everything a renderer needs for one frame of the table.
#[derive(Clone, Debug, PartialEq)]
pub struct TableView<'a, R> {
    /// Header cells.
    pub headers: Vec<HeaderCell>,
    /// Whether the leading `#` column is shown.
    pub numeration: bool,
    /// Body state.
    pub body: TableBody<'a, R>,
    /// Footer, when enabled.
    pub footer: Option<TableFooter>,
    /// Directive used for this view.
    pub directive: SortDirective,
    /// Current page after clamping.
    pub page: usize,
    /// Number of pages.
    pub page_count: usize,
}

impl<'a, R> TableView<'a, R> {
    /// Rows on the current page; empty while loading.
    #[must_use]
    pub fn rows(&self) -> &[VisibleRow<'a, R>] {
        match &self.body {
            TableBody::Rows(rows) => rows,
            TableBody::Loading | TableBody::Empty => &[],
        }
    }
}

/// Configured data-table engine.
#[derive(Clone, Debug)]
pub struct DataTable<R> {
    columns: Vec<Column<R>>,
    rows_per_page: NonZeroUsize,
    numeration: bool,
    striped: bool,
    show_footer: bool,
    paging: Paging,
    on_sort_change: Option<Callback<SortDirective>>,
    on_page_change: Option<Callback<usize>>,
    on_row_click: Option<Callback<usize>>,
}

impl<R> DataTable<R> {
    /// Start building a table.
    #[must_use]
    pub fn builder() -> DataTableBuilder<R> {
        DataTableBuilder::default()
    }

    /// Configured columns.
    #[must_use]
    pub fn columns(&self) -> &[Column<R>] {
        &self.columns
    }

    /// Rows per page.
    #[must_use]
    pub const fn rows_per_page(&self) -> NonZeroUsize {
        self.rows_per_page
    }

    /// Paging mode.
    #[must_use]
    pub const fn paging(&self) -> Paging {
        self.paging
    }

    /// Page state for `page` given the number of rows supplied.
    #[must_use]
    pub fn page_state(&self, page: usize, row_count: usize) -> PageState {
        let total_rows = match self.paging {
            Paging::Remote { total_rows } => total_rows,
            Paging::Off | Paging::Local => row_count,
        };
        PageState::new(page, self.rows_per_page, total_rows)
    }

    /// Derive the view for `rows` (`None` while loading), `directive` and `page`.
    #[must_use]
    pub fn view<'a>(
        &self,
        rows: Option<&'a [R]>,
        directive: &SortDirective,
        page: usize,
    ) -> TableView<'a, R> {
        let headers = self
            .columns
            .iter()
            .map(|column| HeaderCell {
                key: column.key().to_string(),
                title: column.title().to_string(),
                sortable: column.is_sortable(),
                width: column.width_hint().map(str::to_string),
                direction: directive.direction_for(column.key()),
            })
            .collect();

        let state = self.page_state(page, rows.map_or(0, <[R]>::len));
        let body = match rows {
            None => TableBody::Loading,
            Some([]) => TableBody::Empty,
            Some(rows) => TableBody::Rows(self.visible_rows(rows, directive, state)),
        };

        let footer = if self.show_footer {
            match (self.paging, rows) {
                (Paging::Off, Some(rows)) => Some(TableFooter::Count(rows.len())),
                (Paging::Off, None) => None,
                (Paging::Local | Paging::Remote { .. }, _) => Some(TableFooter::Pager(PagerView {
                    page: state.page(),
                    page_count: state.page_count(),
                    has_prev: state.has_prev(),
                    has_next: state.has_next(),
                })),
            }
        } else {
            None
        };

        trace!(
            page = state.page(),
            page_count = state.page_count(),
            "recomputed table view"
        );
        TableView {
            headers,
            numeration: self.numeration,
            body,
            footer,
            directive: directive.clone(),
            page: state.page(),
            page_count: state.page_count(),
        }
    }

    fn visible_rows<'a>(
        &self,
        rows: &'a [R],
        directive: &SortDirective,
        state: PageState,
    ) -> Vec<VisibleRow<'a, R>> {
        let order = sorted_indices(rows, &self.columns, directive);
        let (window, numbering_page) = match self.paging {
            Paging::Local => (paginate(&order, state.page(), self.rows_per_page), state.page()),
            Paging::Remote { .. } => (order.as_slice(), state.page()),
            Paging::Off => (order.as_slice(), 1),
        };
        window
            .iter()
            .enumerate()
            .map(|(position, &index)| {
                let row = &rows[index];
                VisibleRow {
                    number: self
                        .numeration
                        .then(|| row_number(position, numbering_page, self.rows_per_page)),
                    cells: self
                        .columns
                        .iter()
                        .map(|column| column.render(row, position))
                        .collect(),
                    striped: self.striped && position % 2 == 0,
                    source_index: index,
                    row,
                }
            })
            .collect()
    }

    /// Handle a header click; emits `on_sort_change` and returns the new directive.
    ///
    /// Unknown and non-sortable columns are ignored.
    pub fn header_clicked(&self, current: &SortDirective, key: &str) -> Option<SortDirective> {
        let Some(column) = self.columns.iter().find(|column| column.key() == key) else {
            debug!(column = key, "ignoring click on unknown header");
            return None;
        };
        let next = toggle_sort(current, column)?;
        if let Some(callback) = &self.on_sort_change {
            callback.emit(next.clone());
        }
        Some(next)
    }

    /// Navigate to `requested` (clamped); emits `on_page_change` when the page changes.
    pub fn request_page(&self, current: PageState, requested: i64) -> PageState {
        let next = current.goto(requested);
        if next.page() != current.page()
            && let Some(callback) = &self.on_page_change
        {
            callback.emit(next.page());
        }
        next
    }

    /// Forward a row click (by source index) to `on_row_click`.
    pub fn row_clicked(&self, source_index: usize) {
        if let Some(callback) = &self.on_row_click {
            callback.emit(source_index);
        }
    }

    /// Whether rows react to clicks.
    #[must_use]
    pub const fn rows_clickable(&self) -> bool {
        self.on_row_click.is_some()
    }
}

/// Builder for [`DataTable`].
#[derive(Debug)]
pub struct DataTableBuilder<R> {
    columns: Vec<Column<R>>,
    rows_per_page: usize,
    numeration: bool,
    striped: bool,
    show_footer: bool,
    paging: Paging,
    on_sort_change: Option<Callback<SortDirective>>,
    on_page_change: Option<Callback<usize>>,
    on_row_click: Option<Callback<usize>>,
}

impl<R> Default for DataTableBuilder<R> {
    fn default() -> Self {
        let defaults = TableConfig::default();
        Self {
            columns: Vec::new(),
            rows_per_page: defaults.rows_per_page,
            numeration: defaults.numeration,
            striped: defaults.striped,
            show_footer: defaults.show_footer,
            paging: Paging::Off,
            on_sort_change: None,
            on_page_change: None,
            on_row_click: None,
        }
    }
}

impl<R> DataTableBuilder<R> {
    /// Seed display options from library configuration.
    ///
    /// `pagination = true` selects local paging; call [`Self::paging`] afterwards
    /// for server-side pages.
    #[must_use]
    pub fn config(mut self, config: &TableConfig) -> Self {
        self.rows_per_page = config.rows_per_page;
        self.numeration = config.numeration;
        self.striped = config.striped;
        self.show_footer = config.show_footer;
        self.paging = if config.pagination {
            Paging::Local
        } else {
            Paging::Off
        };
        self
    }

    /// Append a column.
    #[must_use]
    pub fn column(mut self, column: Column<R>) -> Self {
        self.columns.push(column);
        self
    }

    /// Append several columns.
    #[must_use]
    pub fn columns(mut self, columns: impl IntoIterator<Item = Column<R>>) -> Self {
        self.columns.extend(columns);
        self
    }

    /// Rows per page (must be positive).
    #[must_use]
    pub fn rows_per_page(mut self, rows_per_page: usize) -> Self {
        self.rows_per_page = rows_per_page;
        self
    }

    /// Show the continuous `#` column.
    #[must_use]
    pub fn numeration(mut self, numeration: bool) -> Self {
        self.numeration = numeration;
        self
    }

    /// Zebra-stripe alternate rows.
    #[must_use]
    pub fn striped(mut self, striped: bool) -> Self {
        self.striped = striped;
        self
    }

    /// Render the footer (count or pager).
    #[must_use]
    pub fn show_footer(mut self, show_footer: bool) -> Self {
        self.show_footer = show_footer;
        self
    }

    /// Paging mode.
    #[must_use]
    pub fn paging(mut self, paging: Paging) -> Self {
        self.paging = paging;
        self
    }

    /// Sort change callback.
    #[must_use]
    pub fn on_sort_change(mut self, callback: impl Into<Callback<SortDirective>>) -> Self {
        self.on_sort_change = Some(callback.into());
        self
    }

    /// Page change callback.
    #[must_use]
    pub fn on_page_change(mut self, callback: impl Into<Callback<usize>>) -> Self {
        self.on_page_change = Some(callback.into());
        self
    }

    /// Row click callback receiving the row's index in the caller's slice.
    #[must_use]
    pub fn on_row_click(mut self, callback: impl Into<Callback<usize>>) -> Self {
        self.on_row_click = Some(callback.into());
        self
    }

    /// Validate and finish building.
    ///
    /// # Errors
    /// Returns [`UiError::NoColumns`], [`UiError::InvalidColumn`] or
    /// [`UiError::DuplicateColumn`] for malformed column sets, and
    /// [`UiError::InvalidConfig`] when `rows_per_page` is zero.
    pub fn build(self) -> UiResult<DataTable<R>> {
        if self.columns.is_empty() {
            return Err(UiError::NoColumns);
        }
        let mut seen = HashSet::new();
        for column in &self.columns {
            if column.key().trim().is_empty() {
                return Err(UiError::InvalidColumn {
                    key: column.key().to_string(),
                    reason: "key must not be empty",
                });
            }
            if column.title().trim().is_empty() {
                return Err(UiError::InvalidColumn {
                    key: column.key().to_string(),
                    reason: "title must not be empty",
                });
            }
            if !seen.insert(column.key()) {
                return Err(UiError::DuplicateColumn {
                    key: column.key().to_string(),
                });
            }
        }
        let rows_per_page =
            NonZeroUsize::new(self.rows_per_page).ok_or_else(|| UiError::InvalidConfig {
                field: "table.rows_per_page".to_string(),
                message: "must be greater than zero".to_string(),
            })?;
        Ok(DataTable {
            columns: self.columns,
            rows_per_page,
            numeration: self.numeration,
            striped: self.striped,
            show_footer: self.show_footer,
            paging: self.paging,
            on_sort_change: self.on_sort_change,
            on_page_change: self.on_page_change,
            on_row_click: self.on_row_click,
        })
    }
}
