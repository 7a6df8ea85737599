//! Request errors and backend `detail` extraction.
//!
//! ERROR HANDLING
//! ==============
//! The backend reports failures as `{"detail": ...}`. Only a body carrying
//! such a detail becomes [`ApiError::Rejected`], whose message pages show to
//! the user unchanged. Any other non-success body (a proxy's HTML error page,
//! an empty 500) is [`ApiError::Status`] and never reaches the screen; its
//! text is kept for logs. Transport and decode failures carry the underlying
//! error text.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

/// Failure of a single HTTP call against the backend.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The backend answered with a non-success status and a `detail` message.
    #[error("{detail}")]
    Rejected { status: u16, detail: String },
    /// A non-success status without a usable `detail`.
    #[error("request failed: {status}")]
    Status { status: u16, body: String },
    /// The request never produced a response (offline, CORS, DNS).
    #[error("request failed: {0}")]
    Transport(String),
    /// A success response whose body did not match the expected shape.
    #[error("invalid response: {0}")]
    Decode(String),
    /// No browser transport in this build.
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Classify a non-success response by its status code and raw body.
    pub fn rejected(status: u16, body: &str) -> Self {
        match serde_json::from_str::<Value>(body).ok().as_ref().and_then(detail_message) {
            Some(detail) => Self::Rejected { status, detail },
            None => Self::Status {
                status,
                body: body.trim().to_owned(),
            },
        }
    }

    /// HTTP status for non-success responses, `None` for everything else.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } | Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The backend's own explanation, when it sent one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Rejected { detail, .. } => Some(detail),
            _ => None,
        }
    }
}

fn detail_message(value: &Value) -> Option<String> {
    match value.get("detail")? {
        Value::String(detail) if !detail.trim().is_empty() => Some(detail.clone()),
        // Validation failures: `[{"loc": [...], "msg": "...", "type": "..."}]`.
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            (!messages.is_empty()).then(|| messages.join("; "))
        }
        _ => None,
    }
}
