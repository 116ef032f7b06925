//! Error types for the license keys service.

use thiserror::Error;

/// License service errors.
#[derive(Debug, Error)]
pub enum LicenseError {
    /// Malformed input such as an empty platform id.
    #[error(transparent)]
    Types(#[from] entitle_types::Error),

    /// The secrets manager answered with something we did not expect.
    #[error("secrets manager error: {0}")]
    SecretsManager(String),

    /// Platform plan persistence failed.
    #[error("storage error: {0}")]
    Storage(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<rusqlite::Error> for LicenseError {
    fn from(e: rusqlite::Error) -> Self {
        Self::Storage(e.to_string())
    }
}

/// Result type for license operations.
pub type LicenseResult<T> = Result<T, LicenseError>;
