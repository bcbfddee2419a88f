//! Error Types
//!
//! Failures that can leave the API layer. Form validation has its own
//! type in `validation`; `SubmitError` is where the two meet.

use thiserror::Error;

use crate::validation::ValidationErrors;

/// Common result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// API-level errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response (network down, CORS, bad URL)
    #[error("transport error: {0}")]
    Transport(String),
    /// The server answered with a status >= 400
    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },
    /// The body could not be decoded into the expected shape
    #[error("unable to decode response: {0}")]
    Decode(String),
    /// No response within the configured timeout (milliseconds)
    #[error("request timed out after {0} ms")]
    Timeout(u32),
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

/// Outcome of submitting the add-property form
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    /// The draft was rejected locally; nothing was sent
    #[error("invalid property: {0}")]
    Invalid(ValidationErrors),
    #[error(transparent)]
    Api(#[from] ApiError),
}
