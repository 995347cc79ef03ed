//! Page arithmetic shared by the data table and pagination controls.
//!
//! # Design
//! - An empty data set still has one (empty) page, so navigation never shows "page 1 / 0".
//! - Out-of-range navigation is clamped, never rejected.
//! - Row numbering continues across pages.

use std::num::NonZeroUsize;

use tracing::debug;

/// Query-string key used by hosts to persist the current page.
pub const PAGE_QUERY_KEY: &str = "page";

/// Number of pages needed for `total_rows`; at least one.
#[must_use]
pub const fn page_count(total_rows: usize, rows_per_page: NonZeroUsize) -> usize {
    let pages = total_rows.div_ceil(rows_per_page.get());
    if pages == 0 { 1 } else { pages }
}

/// Clamp a requested page into `[1, page_count]`.
#[must_use]
pub fn goto_page(requested: i64, total_rows: usize, rows_per_page: NonZeroUsize) -> usize {
    let last = page_count(total_rows, rows_per_page);
    if requested < 1 {
        return 1;
    }
    usize::try_from(requested).map_or(last, |page| page.min(last))
}

/// Rows belonging to `page` (1-based); empty when the page lies past the data.
#[must_use]
pub fn paginate<T>(rows: &[T], page: usize, rows_per_page: NonZeroUsize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(rows_per_page.get());
    if start >= rows.len() {
        return &[];
    }
    let end = start.saturating_add(rows_per_page.get()).min(rows.len());
    &rows[start..end]
}

/// Displayed number of the row at `position` (0-based) within `page`.
#[must_use]
pub const fn row_number(position: usize, page: usize, rows_per_page: NonZeroUsize) -> usize {
    position + 1 + page.saturating_sub(1) * rows_per_page.get()
}

/// Current page together with the figures needed to clamp it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageState {
    page: usize,
    rows_per_page: NonZeroUsize,
    total_rows: usize,
}

impl PageState {
    /// Build a state, clamping `page` into range.
    #[must_use]
    pub fn new(page: usize, rows_per_page: NonZeroUsize, total_rows: usize) -> Self {
        let requested = i64::try_from(page).unwrap_or(i64::MAX);
        Self {
            page: goto_page(requested, total_rows, rows_per_page),
            rows_per_page,
            total_rows,
        }
    }

    /// First page for a data set.
    #[must_use]
    pub const fn first(rows_per_page: NonZeroUsize, total_rows: usize) -> Self {
        Self {
            page: 1,
            rows_per_page,
            total_rows,
        }
    }

    /// Current page (1-based).
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Rows shown per page.
    #[must_use]
    pub const fn rows_per_page(&self) -> NonZeroUsize {
        self.rows_per_page
    }

    /// Total rows across all pages.
    #[must_use]
    pub const fn total_rows(&self) -> usize {
        self.total_rows
    }

    /// Number of pages.
    #[must_use]
    pub const fn page_count(&self) -> usize {
        page_count(self.total_rows, self.rows_per_page)
    }

    /// Whether a previous page exists.
    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Whether a next page exists.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page < self.page_count()
    }

    /// Index of the first row on the current page.
    #[must_use]
    pub const fn offset(&self) -> usize {
        (self.page - 1) * self.rows_per_page.get()
    }

    /// Navigate to `requested`, clamped.
    #[must_use]
    pub fn goto(self, requested: i64) -> Self {
        let page = goto_page(requested, self.total_rows, self.rows_per_page);
        if i64::try_from(page).ok() != Some(requested) {
            debug!(requested, page, "clamped page request");
        }
        Self { page, ..self }
    }

    /// Step forward one page (stays on the last page).
    #[must_use]
    pub fn next(self) -> Self {
        let requested = i64::try_from(self.page).unwrap_or(i64::MAX);
        self.goto(requested.saturating_add(1))
    }

    /// Step back one page (stays on the first page).
    #[must_use]
    pub fn prev(self) -> Self {
        let requested = i64::try_from(self.page).unwrap_or(i64::MAX);
        self.goto(requested.saturating_sub(1))
    }

    /// Re-clamp against a new row total.
    #[must_use]
    pub fn with_total_rows(self, total_rows: usize) -> Self {
        Self::new(self.page, self.rows_per_page, total_rows)
    }
}

/// Read the page number from a URL query string such as `?page=3&sort=name`.
///
/// Missing, malformed and zero values yield `None`.
#[must_use]
pub fn page_from_query(query: &str) -> Option<usize> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| urlencoding::decode(key).is_ok_and(|key| key == PAGE_QUERY_KEY))
        .and_then(|(_, value)| urlencoding::decode(value).ok())
        .and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|page| *page >= 1)
}

/// Query string carrying only the page number.
#[must_use]
pub fn page_query(page: usize) -> String {
    format!("?{PAGE_QUERY_KEY}={page}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn per_page(value: usize) -> NonZeroUsize {
        NonZeroUsize::new(value).expect("non-zero")
    }

    #[test]
    fn page_count_rounds_up_and_never_hits_zero() {
        assert_eq!(page_count(100, per_page(10)), 10);
        assert_eq!(page_count(101, per_page(10)), 11);
        assert_eq!(page_count(0, per_page(10)), 1);
        assert_eq!(page_count(3, per_page(50)), 1);
    }

    #[test]
    fn goto_page_clamps_out_of_range_requests() {
        assert_eq!(goto_page(-5, 100, per_page(10)), 1);
        assert_eq!(goto_page(0, 100, per_page(10)), 1);
        assert_eq!(goto_page(9999, 100, per_page(10)), 10);
        assert_eq!(goto_page(4, 100, per_page(10)), 4);
        assert_eq!(goto_page(3, 0, per_page(10)), 1);
        assert_eq!(goto_page(i64::MAX, 100, per_page(10)), 10);
    }

    #[test]
    fn paginate_slices_half_open_ranges() {
        let rows: Vec<u32> = (1..=25).collect();
        assert_eq!(paginate(&rows, 1, per_page(10)), &rows[0..10]);
        assert_eq!(paginate(&rows, 3, per_page(10)), &rows[20..25]);
        assert!(paginate(&rows, 4, per_page(10)).is_empty());
        assert!(paginate::<u32>(&[], 1, per_page(10)).is_empty());
    }

    #[test]
    fn row_numbers_continue_across_pages() {
        assert_eq!(row_number(0, 1, per_page(10)), 1);
        assert_eq!(row_number(0, 2, per_page(10)), 11);
        assert_eq!(row_number(4, 3, per_page(50)), 105);
    }

    #[test]
    fn page_state_navigation_stays_in_bounds() {
        let state = PageState::new(42, per_page(10), 35);
        assert_eq!(state.page(), 4);
        assert!(!state.has_next());
        assert_eq!(state.next().page(), 4);
        assert_eq!(state.prev().page(), 3);
        assert_eq!(state.offset(), 30);

        let first = PageState::first(per_page(10), 35);
        assert!(!first.has_prev());
        assert_eq!(first.prev().page(), 1);
        assert_eq!(first.goto(-3).page(), 1);

        let shrunk = state.with_total_rows(12);
        assert_eq!(shrunk.page(), 2);
        assert_eq!(shrunk.page_count(), 2);
    }

    #[test]
    fn page_query_round_trips_through_url_helpers() {
        assert_eq!(page_from_query("?page=3"), Some(3));
        assert_eq!(page_from_query("sort=name&page=%207"), Some(7));
        assert_eq!(page_from_query("?page=0"), None);
        assert_eq!(page_from_query("?page=abc"), None);
        assert_eq!(page_from_query(""), None);
        assert_eq!(page_query(2), "?page=2");
    }
}
