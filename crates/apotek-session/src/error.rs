//! # Session Error Type
//!
//! Unified error type for controller operations.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Apotek                             │
//! │                                                                     │
//! │  Controller method                                                  │
//! │  Result<(), SessionError>                                           │
//! │         │                                                           │
//! │         ├── Gateway failed? ── GatewayError ──┐                     │
//! │         │                                     │                     │
//! │         ├── Draft invalid?  ── ValidationError│                     │
//! │         │                                     ▼                     │
//! │         └── Local rule hit? ── CoreError ── SessionError            │
//! │                                                │                    │
//! │              every branch ALSO records exactly one destructive      │
//! │              toast and logs via tracing before returning            │
//! │                                                                     │
//! │  There is no retry, backoff, or partial-failure recovery: the       │
//! │  previously rendered mirror stays authoritative until the next      │
//! │  successful load().                                                 │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use apotek_core::{CoreError, ValidationError};
use apotek_db::GatewayError;

/// Error returned from controller operations.
///
/// Callers that only render the toast feed can ignore the returned error;
/// it exists so programmatic callers (and tests) can branch on the cause.
#[derive(Debug, Error)]
pub enum SessionError {
    /// A remote store operation failed.
    #[error("Remote operation failed: {0}")]
    Remote(#[from] GatewayError),

    /// A draft was rejected before any remote call was issued.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// A local domain rule was violated (e.g. quick-add on an id that is
    /// not in the loaded mirror).
    #[error(transparent)]
    Domain(#[from] CoreError),
}

/// Result type for controller operations.
pub type SessionResult<T> = Result<T, SessionError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_error_message() {
        let err = SessionError::Remote(GatewayError::ConnectionFailed(
            "network unreachable".to_string(),
        ));
        assert_eq!(
            err.to_string(),
            "Remote operation failed: Connection failed: network unreachable"
        );
    }

    #[test]
    fn test_validation_error_converts() {
        let err: SessionError = ValidationError::Required {
            field: "name".to_string(),
        }
        .into();
        assert!(matches!(err, SessionError::Validation(_)));
    }
}
