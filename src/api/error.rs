use http::StatusCode;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("Unable to reach the server: {0}")]
    Network(String),

    #[error("Session expired, please sign in again")]
    Unauthorized,

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{message}")]
    Validation { status: u16, message: String },

    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// `{success: false}` envelope on an otherwise successful response.
    #[error("{0}")]
    Rejected(String),

    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("Could not encode request: {0}")]
    Encode(String),
}

impl ApiError {
    /// Map a non-success status. The backend's `message` (or `error`) text
    /// is kept verbatim.
    #[must_use]
    pub fn from_status(status: StatusCode, body: &Value) -> Self {
        let message = backend_message(body).unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string()
        });
        match status {
            StatusCode::UNAUTHORIZED => Self::Unauthorized,
            StatusCode::NOT_FOUND => Self::NotFound(message),
            StatusCode::CONFLICT => Self::Conflict(message),
            s if s.is_server_error() => Self::Server {
                status: s.as_u16(),
                message,
            },
            s => Self::Validation {
                status: s.as_u16(),
                message,
            },
        }
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// Notification text naming the attempted action, e.g.
    /// `Failed to delete FAQ: FAQ is referenced by the home page`.
    #[must_use]
    pub fn user_message(&self, action: &str) -> String {
        match self {
            Self::Network(_) => format!("Failed to {action}: unable to reach the server"),
            other => format!("Failed to {action}: {other}"),
        }
    }
}

/// Human text carried by an error or rejection body, if any.
pub(crate) fn backend_message(body: &Value) -> Option<String> {
    match body {
        Value::Object(map) => ["message", "error"]
            .iter()
            .find_map(|key| map.get(*key).and_then(Value::as_str))
            .map(ToString::to_string),
        Value::String(text) if !text.trim().is_empty() => Some(text.trim().to_string()),
        _ => None,
    }
}
