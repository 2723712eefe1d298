use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error payload returned by the service (google.rpc.Status shape): a
/// numeric code, a developer-facing message, and optional structured
/// details. Carried verbatim; nothing here reinterprets it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Status {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<serde_json::Value>>,
}

/// Wrapper the REST surface puts around `Status` in error responses.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: Status,
}

impl Status {
    /// Parse a non-success response body. Falls back to the HTTP status code
    /// and raw body text when the body is not the expected envelope.
    pub fn from_error_body(http_status: u16, body: &str) -> Self {
        match serde_json::from_str::<ErrorEnvelope>(body) {
            Ok(envelope) => envelope.error,
            Err(_) => Status {
                code: i32::from(http_status),
                message: body.trim().to_string(),
                details: None,
            },
        }
    }
}

/// Failures surfaced by the request dispatcher. The API binding generates
/// none of these itself; every error a caller sees originates in transport,
/// the service, or response decoding.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("request transport failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("service returned error {}: {}", .status.code, .status.message)]
    Api { status: Status },

    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("missing required parameter `{name}`")]
    MissingParam { name: &'static str },
}

impl DispatchError {
    /// Whether retrying the request could plausibly succeed. Rate limiting
    /// and server-side failures qualify; caller mistakes do not.
    pub fn is_retryable(&self) -> bool {
        match self {
            DispatchError::Transport(e) => e.is_timeout() || e.is_connect(),
            DispatchError::Api { status } => {
                matches!(status.code, 429 | 500 | 502 | 503 | 504)
            }
            _ => false,
        }
    }
}
