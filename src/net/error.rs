//! The single failure type surfaced by every API call.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-2xx responses, and undecodable bodies all collapse
//! into [`ApiError`]. Its `Display` output is the best-effort human message,
//! so views can render `err.to_string()` inline without further mapping.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// A failed API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    status: Option<u16>,
    message: String,
}

impl ApiError {
    /// A failure the server answered with `status`.
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self { status: Some(status), message: message.into() }
    }

    /// A failure before any HTTP status was received (network, CORS, encoding).
    pub fn transport(message: impl Into<String>) -> Self {
        Self { status: None, message: message.into() }
    }

    /// Normalize a non-success response into an error.
    pub fn from_response(status: u16, status_text: &str, body: &str) -> Self {
        Self::http(status, extract_error_message(status, status_text, body))
    }

    /// HTTP status, when the server responded at all.
    pub fn status(&self) -> Option<u16> {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The requested record does not exist (or is no longer visible).
    pub fn is_not_found(&self) -> bool {
        self.status == Some(404)
    }

    /// The bearer token was missing, expired, or rejected.
    pub fn is_unauthorized(&self) -> bool {
        self.status == Some(401)
    }
}

/// Pick the message for a failed response.
///
/// Order: JSON `message`, then JSON `error` (empty strings skipped), then the
/// transport status text, then a generic `request failed: <status>`.
pub fn extract_error_message(status: u16, status_text: &str, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| body_message(&value, "message").or_else(|| body_message(&value, "error")))
        .or_else(|| non_empty(status_text))
        .unwrap_or_else(|| request_failed_message(status))
}

fn body_message(value: &serde_json::Value, field: &str) -> Option<String> {
    value.get(field).and_then(serde_json::Value::as_str).and_then(non_empty)
}

fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

fn request_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}
