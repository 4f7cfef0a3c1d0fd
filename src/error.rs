//! Failure taxonomy for the request pipeline.
//!
//! Backend error bodies are heterogeneous (`error`, `message`, or DRF's
//! `detail`); everything is normalized into one user-facing string at the
//! client boundary before it can reach the notification surface.

use serde::Deserialize;

/// Shown when a failure carries no usable message at all.
pub const GENERIC_FALLBACK: &str = "Unexpected error. Please try again later.";

/// Shown once when the session guard detects an expired session.
pub const SESSION_EXPIRED_MESSAGE: &str = "Session expired. Please log in again.";

/// Normalized error payload. The backend emits one of three key spellings
/// depending on the endpoint's vintage; decoding tries them in order.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ErrorBody {
    Error { error: String },
    Message { message: String },
    Detail { detail: String },
}

impl ErrorBody {
    pub fn into_text(self) -> String {
        match self {
            Self::Error { error } => error,
            Self::Message { message } => message,
            Self::Detail { detail } => detail,
        }
    }
}

/// The status echo used when an error body carries no message field.
/// Deliberately matches the wording suppressed from toasts, so unhelpful
/// "the request failed" text never reaches the user.
pub fn status_echo(status: u16) -> String {
    format!("Request failed with status code {status}")
}

/// True for messages that merely restate the HTTP status.
pub fn is_status_echo(message: &str) -> bool {
    message.contains("Request failed with status code")
}

/// Extract a user-facing message from a failed response body.
///
/// Empty body: the generic fallback. Body with a recognized message
/// field: that text. Anything else (JSON without a message field,
/// non-JSON): the status echo, which callers suppress from toasts.
pub fn normalize_failure(status: u16, body: &[u8]) -> String {
    if body.is_empty() {
        return GENERIC_FALLBACK.to_string();
    }
    match serde_json::from_slice::<ErrorBody>(body) {
        Ok(parsed) => parsed.into_text(),
        Err(_) => status_echo(status),
    }
}

/// Errors surfaced to calling views by the request pipeline.
///
/// Every variant is terminal for the call that produced it; there is no
/// automatic retry anywhere in this layer.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// 401 outside the pre-auth allow-list. The global logout side effect
    /// has already run by the time the caller sees this.
    #[error("Session expired")]
    SessionExpired,
    /// Any other non-success response, message already normalized.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
    #[error("Response decoding error: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Session store error: {0}")]
    Session(#[from] crate::session::SessionStoreError),
}

/// Errors from the transport seam (connection-level, before any HTTP
/// status exists).
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Connection failed: {0}")]
    Connect(String),
    #[error("Request timed out")]
    Timeout,
    #[error("HTTP transport error: {0}")]
    Http(String),
}
