//! Error types for the backend transport client.
//!
//! # Design
//! Every failure a call can produce lands in one `ApiError`. Non-2xx
//! responses become `Http` with the status code and the best-effort message
//! pulled from the response body. A body that claims to be JSON but does not
//! decode is reported as `Deserialization`, which callers treat in the same
//! class as a network failure.

use thiserror::Error;

/// Errors returned by `ApiClient` calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },

    /// The call could not complete: connection, DNS, body read, or the
    /// transport rejected the request before sending it.
    #[error("transport failed: {0}")]
    Transport(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl ApiError {
    /// HTTP status carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for failures that never produced a usable response.
    pub fn is_transport_class(&self) -> bool {
        matches!(self, ApiError::Transport(_) | ApiError::Deserialization(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_display() {
        let err = ApiError::Http {
            status: 404,
            message: "not found".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP error 404: not found");
        assert_eq!(err.status(), Some(404));
        assert!(!err.is_transport_class());
    }

    #[test]
    fn decode_failures_are_transport_class() {
        let err = ApiError::Deserialization("expected value".to_string());
        assert!(err.is_transport_class());
        assert!(err.status().is_none());
        assert!(ApiError::Transport("refused".to_string()).is_transport_class());
        assert!(!ApiError::Serialization("bad key".to_string()).is_transport_class());
    }
}
