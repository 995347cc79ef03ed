//! Library-wide defaults for tables, pickers and toasts.
//!
//! # Design
//! - Every field has a default matching the stock component props, so partial documents load.
//! - Validation runs once at load time and reports the dotted field path.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::toast::ToastKind;
use crate::error::{UiError, UiResult};

/// Data-table defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Rows per page.
    pub rows_per_page: usize,
    /// Show the continuous `#` column.
    pub numeration: bool,
    /// Zebra-stripe alternate rows.
    pub striped: bool,
    /// Paginate locally instead of showing every row.
    pub pagination: bool,
    /// Render the footer (row count or pager).
    pub show_footer: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            rows_per_page: 50,
            numeration: true,
            striped: true,
            pagination: false,
            show_footer: true,
        }
    }
}

/// Search-select defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectConfig {
    /// Placeholder shown in the empty input.
    pub placeholder: String,
    /// Offer the typed text as an option.
    pub allow_custom_value: bool,
    /// Clear a single selection when its item is picked again.
    pub allow_deselect: bool,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            placeholder: "Rechercher...".to_string(),
            allow_custom_value: false,
            allow_deselect: false,
        }
    }
}

/// Toast defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
    /// Maximum number of toasts visible at once.
    pub capacity: usize,
    /// Error toast lifetime in milliseconds.
    pub error_ms: u64,
    /// Info toast lifetime in milliseconds.
    pub info_ms: u64,
    /// Success toast lifetime in milliseconds.
    pub success_ms: u64,
    /// Warning toast lifetime in milliseconds.
    pub warning_ms: u64,
    /// Clipboard toast lifetime in milliseconds.
    pub clipboard_ms: u64,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            capacity: 5,
            error_ms: 10_000,
            info_ms: 6_000,
            success_ms: 6_000,
            warning_ms: 6_000,
            clipboard_ms: 5_000,
        }
    }
}

impl ToastConfig {
    /// Default lifetime for a toast kind.
    #[must_use]
    pub const fn duration_ms(&self, kind: ToastKind) -> u64 {
        match kind {
            ToastKind::Error => self.error_ms,
            ToastKind::Info => self.info_ms,
            ToastKind::Success => self.success_ms,
            ToastKind::Warning => self.warning_ms,
            ToastKind::Clipboard => self.clipboard_ms,
        }
    }
}

/// Complete library configuration document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LibraryConfig {
    /// Table defaults.
    pub table: TableConfig,
    /// Picker defaults.
    pub select: SelectConfig,
    /// Toast defaults.
    pub toast: ToastConfig,
    /// Preferred log output (`pretty` or `json`) for hosts that install logging.
    pub log_format: Option<String>,
}

impl LibraryConfig {
    /// Parse and validate a JSON document.
    ///
    /// # Errors
    /// Returns [`UiError::InvalidConfig`] when the document is malformed or a value is out of range.
    pub fn from_json_str(raw: &str) -> UiResult<Self> {
        let config: Self = serde_json::from_str(raw).map_err(|err| UiError::InvalidConfig {
            field: "<document>".to_string(),
            message: err.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate an already-parsed JSON value.
    ///
    /// # Errors
    /// Returns [`UiError::InvalidConfig`] when the value does not describe a valid configuration.
    pub fn from_value(value: Value) -> UiResult<Self> {
        let config: Self = serde_json::from_value(value).map_err(|err| UiError::InvalidConfig {
            field: "<document>".to_string(),
            message: err.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    ///
    /// # Errors
    /// Returns [`UiError::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> UiResult<()> {
        if self.table.rows_per_page == 0 {
            return Err(invalid("table.rows_per_page", "must be greater than zero"));
        }
        if self.toast.capacity == 0 {
            return Err(invalid("toast.capacity", "must be greater than zero"));
        }
        for kind in ToastKind::all() {
            if self.toast.duration_ms(kind) == 0 {
                return Err(invalid(
                    &format!("toast.{}_ms", kind.as_str()),
                    "must be greater than zero",
                ));
            }
        }
        if let Some(format) = self.log_format.as_deref()
            && !matches!(format, "pretty" | "json")
        {
            return Err(invalid("log_format", "must be 'pretty' or 'json'"));
        }
        Ok(())
    }
}

fn invalid(field: &str, message: &str) -> UiError {
    UiError::InvalidConfig {
        field: field.to_string(),
        message: message.to_string(),
    }
}
