//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("Unknown record type: {0}")]
    UnknownRecordType(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SdkError {
    /// Whether the caller has to log in again before retrying.
    pub fn requires_login(&self) -> bool {
        matches!(
            self,
            SdkError::Auth(
                AuthError::NoToken
                    | AuthError::InvalidToken { .. }
                    | AuthError::NotAuthenticated
            )
        )
    }
}

/// Transport-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Transport error: {0}")]
    Transport(String),
}

/// Authentication and session errors.
#[derive(Error, Debug)]
pub enum AuthError {
    /// No usable persisted session (missing file or expired token).
    #[error("No token available")]
    NoToken,

    /// Token rejected by the server (403) or past the local renewal window.
    #[error("Invalid token: {reason}")]
    InvalidToken {
        reason: String,
        headers: Vec<(String, String)>,
    },

    /// Login rejected. Carries the raw response body.
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    #[error("Not authenticated")]
    NotAuthenticated,
}

impl AuthError {
    pub(crate) fn expired() -> Self {
        AuthError::InvalidToken {
            reason: "Token expired".to_string(),
            headers: Vec::new(),
        }
    }
}

/// Generic server-side failure.
///
/// Either a non-success status, or a `200` whose JSON body carries a
/// `message` field.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{}", self.describe())]
pub struct ApiError {
    pub status: u16,
    pub message: Option<String>,
    pub body: String,
}

impl ApiError {
    fn describe(&self) -> String {
        match &self.message {
            Some(message) => format!("{} ({})", message, self.status),
            None if self.body.is_empty() => format!("HTTP {}", self.status),
            None => format!("HTTP {}: {}", self.status, self.body),
        }
    }
}
