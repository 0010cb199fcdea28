//! # Failure Classification
//!
//! The backend signals distinct failure classes through non-standard HTTP
//! status codes. The original client mapped them inside an axios response
//! interceptor with a chain of `if` branches, several of whose side
//! effects were disabled. Here the mapping is a closed enumeration plus a
//! pure classifier, and the side effects live behind [`UiHooks`].
//!
//! ## Status Table
//!
//! | Status | Meaning | Variant |
//! |--------|---------|---------|
//! | 404 / body 504 | network/connectivity failure | `NetworkUnreachable` |
//! | 500 / 599 | generic backend error (silent) | `Backend` |
//! | 520 | uniqueness-validation conflict | `Conflict` |
//! | 530 | advisory, toast-only | `Advisory` |
//! | 531 | fatal, error-page redirect | `Fatal` |
//! | 540 | authorization failure | `Unauthorized` |
//! | 550 / 551 | authentication/session failure | `SessionExpired` |
//! | other | unclassified | `Unclassified` |
//!
//! [`UiHooks`]: super::hooks::UiHooks

use serde::Deserialize;
use thiserror::Error;

use crate::envelope::CodecError;

/// Every way a request can fail.
///
/// Callers match on the variant; the transport guarantees it has already
/// run the variant's side effect (toast for `Advisory`, error recording
/// for `Fatal`) before returning.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP 404, or an upstream gateway reporting 504 in the body.
    #[error("Backend unreachable")]
    NetworkUnreachable,

    /// HTTP 500/599. The original client suppressed the message.
    #[error("Backend error")]
    Backend,

    /// HTTP 520: a uniqueness check found an existing record. The server
    /// message describes the conflict.
    #[error("Uniqueness conflict: {0}")]
    Conflict(String),

    /// HTTP 530: advisory error, surfaced as a non-blocking notification.
    #[error("{0}")]
    Advisory(String),

    /// HTTP 531: fatal error; the message is recorded for an error page.
    #[error("Fatal backend error: {0}")]
    Fatal(String),

    /// HTTP 540: the session lacks permission for the operation.
    #[error("Not authorized")]
    Unauthorized,

    /// HTTP 550/551: the session is missing or expired.
    #[error("Session expired")]
    SessionExpired,

    /// Any other non-success status; carries the raw server body.
    #[error("Unclassified server error: {0}")]
    Unclassified(String),

    /// The request never completed at the HTTP layer.
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Client configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// The response envelope failed verification or decryption.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// A download response was missing its `filename` header.
    #[error("Download response carried no filename header")]
    MissingFilename,
}

/// The parts of an error body the classifier inspects.
///
/// Bodies are JSON of the shape `{ "status": ..., "message": ... }`, but
/// neither field is guaranteed.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    status: Option<u16>,
    message: Option<String>,
}

/// Map a non-success HTTP status and its raw body onto an [`ApiError`].
///
/// Pure: side effects are applied by the transport after classification.
pub fn classify(status: u16, body: &str) -> ApiError {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    let message = || parsed.message.clone().unwrap_or_default();

    // The gateway reports upstream timeouts as 504 inside the body while
    // the HTTP status line stays 200-family or 500; the original client
    // checked the body first.
    if status == 404 || parsed.status == Some(504) {
        return ApiError::NetworkUnreachable;
    }

    match status {
        500 | 599 => ApiError::Backend,
        520 => ApiError::Conflict(message()),
        530 => ApiError::Advisory(message()),
        531 => ApiError::Fatal(message()),
        540 => ApiError::Unauthorized,
        550 | 551 => ApiError::SessionExpired,
        _ => ApiError::Unclassified(body.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_failures() {
        assert!(matches!(classify(404, ""), ApiError::NetworkUnreachable));
        assert!(matches!(
            classify(502, r#"{"status":504}"#),
            ApiError::NetworkUnreachable
        ));
    }

    #[test]
    fn test_backend_errors_are_silent() {
        assert!(matches!(classify(500, r#"{"message":"boom"}"#), ApiError::Backend));
        assert!(matches!(classify(599, ""), ApiError::Backend));
    }

    #[test]
    fn test_conflict_carries_server_message() {
        match classify(520, r#"{"message":"contract no already exists"}"#) {
            ApiError::Conflict(msg) => assert_eq!(msg, "contract no already exists"),
            other => panic!("expected Conflict, got {:?}", other),
        }
    }

    #[test]
    fn test_advisory_and_fatal() {
        assert!(matches!(
            classify(530, r#"{"message":"quota exceeded"}"#),
            ApiError::Advisory(m) if m == "quota exceeded"
        ));
        assert!(matches!(
            classify(531, r#"{"message":"plan closed"}"#),
            ApiError::Fatal(m) if m == "plan closed"
        ));
    }

    #[test]
    fn test_auth_failures() {
        assert!(matches!(classify(540, ""), ApiError::Unauthorized));
        assert!(matches!(classify(550, ""), ApiError::SessionExpired));
        assert!(matches!(classify(551, ""), ApiError::SessionExpired));
    }

    #[test]
    fn test_unclassified_keeps_raw_body() {
        match classify(418, "short and stout") {
            ApiError::Unclassified(body) => assert_eq!(body, "short and stout"),
            other => panic!("expected Unclassified, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_message_becomes_empty() {
        assert!(matches!(classify(530, "not json"), ApiError::Advisory(m) if m.is_empty()));
    }
}
