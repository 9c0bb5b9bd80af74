//! Client error taxonomy

use serde_json::Value;
use thiserror::Error;

/// Errors surfaced by the admin API client.
///
/// Every failure a caller can observe is normalized into one of these three
/// kinds before it leaves the client boundary; callers never interpret raw
/// HTTP status codes themselves.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The session could not be established or renewed. The local session
    /// has been cleared by the time this error is returned.
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// Login succeeded at the backend but the user's role is not permitted
    /// to use the admin console. No session state was persisted.
    #[error("access denied: {0}")]
    ForbiddenUser(String),

    /// Any other failed request: a non-2xx response, a transport failure
    /// (status 0), or an undecodable body.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code, or 0 when no response was received.
        status: u16,
        /// Human-readable message extracted from the error body.
        message: String,
        /// The raw response body, when one was received.
        body: Option<Value>,
    },
}

impl ClientError {
    /// Returns true for errors that force a return to the login screen.
    #[must_use]
    pub const fn requires_login(&self) -> bool {
        matches!(self, Self::Authentication(_))
    }

    /// The HTTP status carried by this error, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Authentication(_) | Self::ForbiddenUser(_) => None,
        }
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;
