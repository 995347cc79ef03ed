#![forbid(unsafe_code)]
#![deny(unused_must_use, rustdoc::broken_intra_doc_links, rustdoc::bare_urls)]
#![warn(
    missing_docs,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery
)]

//! Logging setup shared by Vitrine binaries.
//!
//! Library crates only emit `tracing` events; binaries call [`init_logging`]
//! once at startup to decide where and how those events are written.

pub mod init;

pub use init::{
    DEFAULT_LOG_LEVEL, GlobalContextGuard, LogFormat, LoggingConfig, build_sha, init_logging,
    log_format_from_config,
};
