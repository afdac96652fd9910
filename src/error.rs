//! # JWE Model Errors

use thiserror::Error;

/// Result type for JWE model lookups.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors returned when reading from a JWE message model.
///
/// Both variants indicate a caller error: an index or header parameter name
/// that was assumed to exist but does not. Neither is transient.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A recipient index does not address an entry in the recipient list.
    #[error("outOfRange: {0}")]
    OutOfRange(String),

    /// A header parameter was requested with a get-or-fail accessor but is
    /// not present in the header.
    #[error("missingParameter: {0}")]
    MissingParameter(String),
}

impl Error {
    /// Returns the error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::OutOfRange(_) => "outOfRange",
            Self::MissingParameter(_) => "missingParameter",
        }
    }

    /// Returns the associated error message.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::OutOfRange(msg) | Self::MissingParameter(msg) => msg.clone(),
        }
    }
}
