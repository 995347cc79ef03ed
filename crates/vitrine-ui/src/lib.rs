#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls
)]
#![warn(
    missing_docs,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Vitrine presentational component library.
//!
//! Layout:
//! - `core/`: DOM-free engines (selection, table, paging, toasts, dialogs, drop zone, highlight)
//! - `config.rs`: library defaults loaded from JSON
//! - `error.rs`: construction-time error taxonomy
//! - `components/`: Yew renderers over the engines (wasm32 only)

pub mod config;
pub mod core;
pub mod error;

#[cfg(target_arch = "wasm32")]
pub mod components;

pub use error::{UiError, UiResult};
