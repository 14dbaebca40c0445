use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Every failure the API client can produce.
///
/// Display strings are prefixed with the calling operation's context
/// ("Login failed", "Failed to save idea", ...) so they can be shown as-is.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The backend could not be reached at all.
    #[error("{context}: Server is not reachable. Try again.")]
    Unreachable { context: &'static str },

    /// Generation refused for lack of a valid session.
    #[error("{message}")]
    Unauthorized { message: String },

    /// Any other non-2xx response.
    #[error("{context}: {message}")]
    Backend {
        context: &'static str,
        status: StatusCode,
        message: String,
    },

    /// The request went out but no reply arrived (includes timeouts).
    #[error("{context}: No response from server. Try again.")]
    NoResponse { context: &'static str },

    /// The client itself could not be built from its configuration.
    #[error("Invalid client configuration: {0}")]
    Config(String),

    /// A 2xx reply whose body did not match the expected shape.
    #[error("{context}: {message}")]
    InvalidResponse {
        context: &'static str,
        message: String,
    },
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    /// Classify a transport-level failure (no HTTP status available).
    pub(crate) fn from_transport(context: &'static str, err: reqwest::Error) -> Self {
        if err.is_connect() {
            tracing::debug!(context, error = %err, "backend unreachable");
            ApiError::Unreachable { context }
        } else if err.is_decode() {
            ApiError::InvalidResponse {
                context,
                message: err.to_string(),
            }
        } else {
            tracing::debug!(context, error = %err, timeout = err.is_timeout(), "no response");
            ApiError::NoResponse { context }
        }
    }
}

/// Error body sent by the backend on non-2xx responses.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct BackendErrorPayload {
    pub message: Option<MessageField>,
    pub error: Option<String>,
}

/// Validation failures arrive as a list, everything else as a string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum MessageField {
    One(String),
    Many(Vec<String>),
}

impl BackendErrorPayload {
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }

    /// The backend's message as a single string, if it gave one.
    pub fn message(&self) -> Option<String> {
        let message = match &self.message {
            Some(MessageField::One(s)) => s.clone(),
            Some(MessageField::Many(list)) => list.join("; "),
            None => String::new(),
        };
        if !message.is_empty() {
            return Some(message);
        }
        self.error.clone().filter(|e| !e.is_empty())
    }

    /// Only a plain string message, as used for the sign-in prompt.
    pub fn plain_message(&self) -> Option<&str> {
        match &self.message {
            Some(MessageField::One(s)) if !s.is_empty() => Some(s.as_str()),
            _ => None,
        }
    }
}

/// Human-readable message for a failed response body.
pub(crate) fn extract_message(status: StatusCode, body: &str) -> String {
    BackendErrorPayload::parse(body)
        .and_then(|p| p.message())
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .map(String::from)
                .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()))
        })
}
