//! Error types for ProjectManager API operations.
//!
//! A non-2xx response is not an error at this level: it arrives as a failed
//! [`ApiResult`](crate::ApiResult). These variants cover everything that
//! stops a call from producing an envelope at all, plus [`PmError::Api`] for
//! callers that opt into `?`-style handling via
//! [`ApiResult::into_result`](crate::ApiResult::into_result).

use thiserror::Error;

use crate::envelope::ErrorInfo;

/// Errors that can occur during ProjectManager API operations.
#[derive(Debug, Error)]
pub enum PmError {
    /// Configuration is missing or incomplete.
    #[error("ProjectManager configuration required: {0}")]
    ConfigMissing(String),

    /// Configuration value could not be used.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The server answered with a non-2xx status.
    #[error("ProjectManager API error ({status_code}): {}", info.message)]
    Api { status_code: u16, info: ErrorInfo },

    /// HTTP transport error (connection refused, timeout, ...).
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A success response body did not match the expected payload type.
    #[error("Failed to decode response (status {status}): {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    /// A request body could not be encoded.
    #[error("Failed to encode request body: {0}")]
    Serialize(#[source] serde_json::Error),

    /// An identifier that cannot stand as a single URL path segment.
    #[error("Invalid identifier for a request path: {0:?}")]
    InvalidPath(String),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

impl PmError {
    /// HTTP status associated with this error, when one was received.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            PmError::Api { status_code, .. } => Some(*status_code),
            PmError::Decode { status, .. } => Some(*status),
            PmError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether this is a decode failure on a success path.
    pub fn is_decode(&self) -> bool {
        matches!(self, PmError::Decode { .. })
    }
}

/// Result type alias for ProjectManager operations.
pub type Result<T> = core::result::Result<T, PmError>;
