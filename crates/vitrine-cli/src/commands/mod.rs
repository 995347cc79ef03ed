//! Command handlers grouped by engine.

pub(crate) mod select;
pub(crate) mod table;

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::de::DeserializeOwned;

use crate::error::{CliError, CliResult};

/// Read and decode a JSON input file; unreadable files are failures, malformed ones validation errors.
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path, what: &str) -> CliResult<T> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {what} file {}", path.display()))
        .map_err(CliError::failure)?;
    serde_json::from_str(&raw).map_err(|err| {
        CliError::validation(format!("{what} file {} is invalid: {err}", path.display()))
    })
}
