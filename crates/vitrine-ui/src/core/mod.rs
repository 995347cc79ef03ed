//! Core, DOM-free engines and helpers for the component library.
pub mod callback;
pub mod dialogs;
pub mod drop_zone;
pub mod highlight;
pub mod paging;
pub mod selection;
pub mod table;
pub mod toast;
