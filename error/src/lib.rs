//! Common error types for token handling.
//!
//! This crate provides the failure taxonomy shared by the token and guard
//! crates, plus the JSON error body returned at the HTTP boundary.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Token-related errors.
///
/// Verification failures are kept distinct so callers can branch on cause;
/// the HTTP boundary is free to collapse them into a single response.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token creation failed")]
    CreationFailed,

    #[error("No token provided")]
    Missing,

    #[error("Malformed token")]
    Malformed,

    #[error("Token expired")]
    Expired,

    #[error("Token signature mismatch")]
    SignatureMismatch,
}

/// JSON error body for API clients.
///
/// Serializes as `{"error": "<message>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable error message
    pub error: String,
}

impl ErrorBody {
    /// Create a new error body.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

impl From<&TokenError> for ErrorBody {
    fn from(err: &TokenError) -> Self {
        let message = match err {
            TokenError::Missing => "Access Denied: No Token Provided",
            TokenError::CreationFailed
            | TokenError::Malformed
            | TokenError::Expired
            | TokenError::SignatureMismatch => "Invalid or Expired Token",
        };
        Self::new(message)
    }
}

/// Result type alias using TokenError.
pub type Result<T> = std::result::Result<T, TokenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_wire_shape() {
        let body = ErrorBody::new("Access Denied: No Token Provided");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"error": "Access Denied: No Token Provided"})
        );
    }

    #[test]
    fn test_missing_maps_to_access_denied() {
        let body = ErrorBody::from(&TokenError::Missing);
        assert_eq!(body.error, "Access Denied: No Token Provided");
    }

    #[test]
    fn test_verification_failures_share_message() {
        for err in [
            TokenError::Malformed,
            TokenError::Expired,
            TokenError::SignatureMismatch,
        ] {
            assert_eq!(ErrorBody::from(&err).error, "Invalid or Expired Token");
        }
    }
}
