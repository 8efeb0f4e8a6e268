//! Errors raised while talking to the GIF provider.
//!
//! These never reach the presentation layer: the API client collapses them
//! into empty result lists (see [`OrEmpty`](super::OrEmpty)). They exist so the
//! failure is logged with its cause and so tests can assert on it.

use crate::traits::HttpError;

/// Coarse classification of a failed provider call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// DNS, connection or timeout failure
    Transport,
    /// The provider answered with a non-200 status
    Status,
    /// The body did not match the expected JSON shape
    Decode,
}

impl ApiErrorKind {
    /// Short code for log lines.
    pub fn code(&self) -> &'static str {
        match self {
            ApiErrorKind::Transport => "E_API_TRANSPORT",
            ApiErrorKind::Status => "E_API_STATUS",
            ApiErrorKind::Decode => "E_API_DECODE",
        }
    }
}

/// A failed provider call.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("transport failure: {0}")]
    Transport(#[from] HttpError),

    /// The provider answered with something other than 200.
    #[error("unexpected HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    /// The body could not be decoded as the expected type.
    #[error("failed to decode response from {url}: {message}")]
    Decode { url: String, message: String },
}

impl ApiError {
    pub fn kind(&self) -> ApiErrorKind {
        match self {
            ApiError::Transport(_) => ApiErrorKind::Transport,
            ApiError::Status { .. } => ApiErrorKind::Status,
            ApiError::Decode { .. } => ApiErrorKind::Decode,
        }
    }
}
