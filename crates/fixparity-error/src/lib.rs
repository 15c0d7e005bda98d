use std::path::PathBuf;

use thiserror::Error;

/// Primary error type for fixture generation and parity runs.
///
/// Comparison mismatches are not errors: they are reported as values on a
/// parity verdict. Everything here aborts the operation that raised it.
#[derive(Error, Debug)]
pub enum ParityError {
    /// A fixture spec or generator call was malformed. Raised before any
    /// file is touched.
    #[error("invalid argument: {detail}")]
    InvalidArgument { detail: String },

    /// Schema creation or row insertion failed while building a fixture.
    #[error("write failure on '{path}': {detail}")]
    WriteFailure { path: PathBuf, detail: String },

    /// A driver failed to connect, execute, or fetch.
    #[error("fetch failure in driver `{driver}`: {detail}")]
    FetchFailure { driver: String, detail: String },

    /// File I/O error outside of a database handle.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ParityError {
    /// Build a [`ParityError::InvalidArgument`].
    pub fn invalid(detail: impl Into<String>) -> Self {
        Self::InvalidArgument {
            detail: detail.into(),
        }
    }

    /// Build a [`ParityError::WriteFailure`] for the fixture at `path`.
    pub fn write(path: impl Into<PathBuf>, detail: impl ToString) -> Self {
        Self::WriteFailure {
            path: path.into(),
            detail: detail.to_string(),
        }
    }

    /// Build a [`ParityError::FetchFailure`] attributed to `driver`.
    pub fn fetch(driver: impl Into<String>, detail: impl ToString) -> Self {
        Self::FetchFailure {
            driver: driver.into(),
            detail: detail.to_string(),
        }
    }

    /// Whether this error was raised during spec validation.
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Whether this error came from a driver during a parity run.
    pub const fn is_fetch_failure(&self) -> bool {
        matches!(self, Self::FetchFailure { .. })
    }
}

/// Result type alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, ParityError>;
