//! # Session Store
//!
//! In the browser build the auth token lived in session storage and was
//! read on every request; the error-page message was stashed the same way.
//! This module replaces both with a small shared store that the transport
//! and the host application can clone freely.

use std::sync::{Arc, RwLock};

#[derive(Debug, Default)]
struct SessionState {
    token: Option<String>,
    error_message: Option<String>,
}

/// Shared session state: the bearer token attached to every request and
/// the last fatal error message recorded for an error page.
///
/// Cloning is cheap; all clones observe the same state.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<SessionState>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the session token returned by the login flow.
    pub fn set_token(&self, token: impl Into<String>) {
        self.inner.write().expect("session lock poisoned").token = Some(token.into());
    }

    /// Clear the session token (logout).
    pub fn clear_token(&self) {
        self.inner.write().expect("session lock poisoned").token = None;
    }

    /// Current token, if a session is active.
    pub fn token(&self) -> Option<String> {
        self.inner.read().expect("session lock poisoned").token.clone()
    }

    /// Record a fatal error message for the host's error page.
    pub fn record_error(&self, message: impl Into<String>) {
        self.inner.write().expect("session lock poisoned").error_message = Some(message.into());
    }

    /// Take the recorded error message, clearing it.
    pub fn take_error(&self) -> Option<String> {
        self.inner.write().expect("session lock poisoned").error_message.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_shared_across_clones() {
        let store = SessionStore::new();
        let clone = store.clone();

        store.set_token("abc123");
        assert_eq!(clone.token().as_deref(), Some("abc123"));

        clone.clear_token();
        assert_eq!(store.token(), None);
    }

    #[test]
    fn test_error_message_taken_once() {
        let store = SessionStore::new();
        store.record_error("backend on fire");
        assert_eq!(store.take_error().as_deref(), Some("backend on fire"));
        assert_eq!(store.take_error(), None);
    }
}
