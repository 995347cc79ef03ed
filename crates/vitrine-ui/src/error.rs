//! Error types for component construction and host wiring.

use thiserror::Error;

/// Primary error type for the component engines.
///
/// These represent integration bugs (a missing callback, a malformed column
/// set, an unmounted host) and are surfaced at construction time.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UiError {
    /// A required callback was not supplied to a builder.
    #[error("missing required callback '{name}'")]
    MissingCallback {
        /// Name of the missing callback.
        name: &'static str,
    },
    /// A table was built without any column.
    #[error("a table needs at least one column")]
    NoColumns,
    /// A column descriptor failed validation.
    #[error("invalid column '{key}': {reason}")]
    InvalidColumn {
        /// Key of the offending column.
        key: String,
        /// Machine-readable reason for the failure.
        reason: &'static str,
    },
    /// Two columns share the same key.
    #[error("duplicate column key '{key}'")]
    DuplicateColumn {
        /// Duplicated key.
        key: String,
    },
    /// Configuration value was invalid.
    #[error("invalid value for '{field}': {message}")]
    InvalidConfig {
        /// Dotted path of the field that failed validation.
        field: String,
        /// Human-readable error description.
        message: String,
    },
    /// The toast or dialog host is not mounted (its inbox was dropped).
    #[error("{host} host is not mounted")]
    HostUnavailable {
        /// Which host was expected.
        host: &'static str,
    },
    /// An input dialog marked as required was submitted empty.
    #[error("a value is required")]
    InputRequired,
}

/// Convenience alias for component results.
pub type UiResult<T> = Result<T, UiError>;

#[cfg(test)]
mod tests {
    use super::UiError;

    #[test]
    fn messages_name_the_offending_part() {
        let err = UiError::InvalidColumn {
            key: "city".into(),
            reason: "title must not be empty",
        };
        assert_eq!(
            err.to_string(),
            "invalid column 'city': title must not be empty"
        );
        assert_eq!(
            UiError::MissingCallback { name: "on_change" }.to_string(),
            "missing required callback 'on_change'"
        );
        assert_eq!(
            UiError::HostUnavailable { host: "toast" }.to_string(),
            "toast host is not mounted"
        );
    }
}
