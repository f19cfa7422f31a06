//! Error types for the Roam backend client.
//!
//! Every non-success outcome of a backend call surfaces as a [`RoamError`].
//! Status-derived variants mirror the backend's HTTP status taxonomy:
//!
//! | Status | Variant |
//! |--------|---------|
//! | `400`, `500` | [`RoamError::BadRequest`] |
//! | `401` | [`RoamError::Unauthorized`] |
//! | `503` | [`RoamError::NotReady`] |
//! | other non-200 | [`RoamError::Http`] |
//!
//! Transport and decoding failures are passed through as they were produced.
//! Nothing in this crate retries a failed request.

use thiserror::Error;

/// Result type alias for Roam backend operations.
pub type Result<T> = std::result::Result<T, RoamError>;

/// Errors returned by the Roam backend client.
#[derive(Debug, Error)]
pub enum RoamError {
    /// The backend rejected the request (400) or failed internally (500).
    ///
    /// `message` is the `message` field of the JSON error body, or
    /// `HTTP <status>` when the body carries none.
    #[error("Error: {message}")]
    BadRequest {
        /// HTTP status code (400 or 500)
        status: u16,
        /// Backend-provided message, or the `HTTP <status>` fallback
        message: String,
    },

    /// The token is invalid or lacks privileges for the graph (401).
    #[error("Invalid token or token doesn't have enough privileges.")]
    Unauthorized,

    /// The graph is still loading on the backend (503).
    #[error("HTTP Status: 503. Your graph is not ready yet for a request, please retry in a few seconds.")]
    NotReady,

    /// Any other non-200 status, reported with the transport's status text.
    #[error("{status_text}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Reason phrase reported by the transport
        status_text: String,
    },

    /// The default reqwest transport failed to complete the exchange.
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    /// A custom transport failed to complete the exchange.
    #[error("HTTP request failed: {0}")]
    Transport(String),

    /// JSON encoding of a request body or decoding of a response body failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// A header value (usually the bearer token) is not valid in HTTP.
    #[error("Invalid header value: {0}")]
    InvalidHeader(String),

    /// The client configuration is unusable.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl RoamError {
    /// HTTP status code that produced this error, if it came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            RoamError::BadRequest { status, .. } | RoamError::Http { status, .. } => Some(*status),
            RoamError::Unauthorized => Some(401),
            RoamError::NotReady => Some(503),
            RoamError::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether the backend suggested trying again later.
    ///
    /// Advisory only: the client itself never retries.
    pub fn is_retryable(&self) -> bool {
        matches!(self, RoamError::NotReady)
    }
}

impl From<http::header::InvalidHeaderValue> for RoamError {
    fn from(err: http::header::InvalidHeaderValue) -> Self {
        RoamError::InvalidHeader(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_request_display() {
        let err = RoamError::BadRequest {
            status: 400,
            message: "bad field".to_string(),
        };
        assert_eq!(err.to_string(), "Error: bad field");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_fixed_messages() {
        assert_eq!(
            RoamError::Unauthorized.to_string(),
            "Invalid token or token doesn't have enough privileges."
        );
        assert!(RoamError::NotReady.to_string().starts_with("HTTP Status: 503."));
    }

    #[test]
    fn test_http_uses_status_text() {
        let err = RoamError::Http {
            status: 404,
            status_text: "Not Found".to_string(),
        };
        assert_eq!(err.to_string(), "Not Found");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_is_retryable() {
        assert!(RoamError::NotReady.is_retryable());
        assert!(!RoamError::Unauthorized.is_retryable());
        assert!(!RoamError::Transport("reset".into()).is_retryable());
    }
}
