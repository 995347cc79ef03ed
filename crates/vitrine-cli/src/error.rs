//! CLI error type and exit-code mapping.

use std::fmt::{self, Display, Formatter};

#[derive(Debug)]
pub(crate) enum CliError {
    /// Bad input from the user (arguments, files, configuration values).
    Validation(String),
    /// Anything else that prevented the command from completing.
    Failure(anyhow::Error),
}

pub(crate) type CliResult<T> = Result<T, CliError>;

impl CliError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub(crate) fn failure(error: impl Into<anyhow::Error>) -> Self {
        Self::Failure(error.into())
    }

    pub(crate) const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            Self::Failure(_) => 3,
        }
    }

    pub(crate) fn display_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Failure(error) => format!("{error:#}"),
        }
    }
}

impl Display for CliError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.display_message())
    }
}

impl std::error::Error for CliError {}

impl From<vitrine_ui::UiError> for CliError {
    fn from(error: vitrine_ui::UiError) -> Self {
        Self::Validation(error.to_string())
    }
}
