//! Yew renderers over the core engines.
//!
//! # Design
//! - Components stay thin: state transitions come from `crate::core`.
//! - Styling uses DaisyUI/Tailwind class names only.

pub mod data_table;
pub mod dialog_host;
pub mod drop_zone;
pub mod pagination;
pub mod search_select;
pub mod toast_host;

pub use data_table::{DataTableProps, DataTableView};
pub use dialog_host::{DialogHostProps, DialogHostView};
pub use drop_zone::{DropZone, DropZoneProps};
pub use pagination::{Pagination, PaginationProps};
pub use search_select::{SearchSelectProps, SearchSelectView};
pub use toast_host::{ToastHostProps, ToastHostView};

use crate::core::highlight::highlight;
use yew::prelude::*;

/// Milliseconds since page load, used as the toast clock.
pub(crate) fn now_ms() -> u64 {
    let now = web_sys::window()
        .and_then(|window| window.performance())
        .map_or(0.0, |performance| performance.now());
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let ms = now.max(0.0) as u64;
    ms
}

/// Label with matching runs wrapped in `<mark>`.
pub(crate) fn highlighted(text: &str, needle: &str) -> Html {
    html! {
        <>
            {for highlight(text, needle).into_iter().map(|segment| if segment.matched {
                html! { <mark>{segment.text}</mark> }
            } else {
                html! { {segment.text} }
            })}
        </>
    }
}
