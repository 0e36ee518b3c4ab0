//! Shared error types for the auction client.

use serde::Deserialize;
use thiserror::Error;

/// Error body the auction backend sends alongside non-2xx responses.
///
/// The backend is not consistent about the field name, so both `message`
/// and `error` are accepted. `detail`/`title` cover RFC7807-style bodies
/// coming from a reverse proxy.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

/// Attempt to pull a user-facing message out of an error body.
/// Prefers `message`, then `error`, then `detail`, then `title`.
pub fn try_error_message(body: &str) -> Option<String> {
    let parsed = serde_json::from_str::<ErrorBody>(body).ok()?;
    [parsed.message, parsed.error, parsed.detail, parsed.title]
        .into_iter()
        .flatten()
        .find(|m| !m.trim().is_empty())
}

/// API error type for client-side use
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },
    #[error("Deserialization error: {0}")]
    Deserialize(String),
    /// The request body could not be encoded; nothing was sent
    #[error("Serialization error: {0}")]
    Serialize(String),
}

impl ApiError {
    /// Short message suitable for a toast.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Http { status, body } => {
                try_error_message(body).unwrap_or_else(|| format!("Request failed ({status})"))
            }
            ApiError::Network(_) => "Server unreachable".to_string(),
            ApiError::Deserialize(_) => "Unexpected response from server".to_string(),
            ApiError::Serialize(_) => "Could not build the request".to_string(),
        }
    }
}

/// Errors raised while decoding realtime packets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    #[error("empty packet")]
    Empty,
    #[error("unknown engine packet type '{0}'")]
    UnknownEngineType(char),
    #[error("unknown socket packet type '{0}'")]
    UnknownSocketType(char),
    #[error("invalid payload: {0}")]
    InvalidPayload(String),
}

impl From<serde_json::Error> for ProtocolError {
    fn from(e: serde_json::Error) -> Self {
        ProtocolError::InvalidPayload(e.to_string())
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;
