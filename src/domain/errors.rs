//! Domain errors for Monkeyhub.

use thiserror::Error;

/// Failure while fetching the monkey collection from its source.
///
/// Every variant means the same thing to callers ("fetch failed"); the split
/// only exists so the diagnostic log line says what went wrong.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

pub type FetchResult<T> = Result<T, FetchError>;

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}
