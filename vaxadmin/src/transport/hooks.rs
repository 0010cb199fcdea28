//! # UI Hook Strategies
//!
//! The browser build drove three UI side effects from the transport layer:
//! an error toast (status 530), a redirect to an error page (531), and a
//! global loading indicator keyed off the in-flight request counter. All
//! three were wired through framework globals and were partially disabled
//! in the shipped build.
//!
//! Here they are an explicit strategy trait. The default implementation is
//! a no-op, matching the disabled state; a host application swaps in its
//! own implementation to light the behaviors up.

use std::sync::Mutex;

/// Side-effect hooks the transport invokes around requests and failures.
///
/// All methods default to no-ops so implementors only override what they
/// surface.
pub trait UiHooks: Send + Sync {
    /// A non-blocking advisory error (status 530) should be shown.
    fn notify_error(&self, _message: &str) {}

    /// A fatal error (status 531) was recorded; the host may navigate to
    /// an error page.
    fn fatal_error(&self, _message: &str) {}

    /// The number of in-flight requests changed (loading indicator).
    fn loading_changed(&self, _inflight: usize) {}
}

/// The default strategy: every hook is a no-op.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHooks;

impl UiHooks for NoopHooks {}

/// A recording strategy for tests and diagnostics: captures every hook
/// invocation instead of surfacing it.
#[derive(Debug, Default)]
pub struct RecordingHooks {
    /// Messages passed to `notify_error`.
    pub notifications: Mutex<Vec<String>>,

    /// Messages passed to `fatal_error`.
    pub fatal_errors: Mutex<Vec<String>>,

    /// Every `loading_changed` count, in order.
    pub loading_counts: Mutex<Vec<usize>>,
}

impl UiHooks for RecordingHooks {
    fn notify_error(&self, message: &str) {
        self.notifications
            .lock()
            .expect("hooks lock poisoned")
            .push(message.to_string());
    }

    fn fatal_error(&self, message: &str) {
        self.fatal_errors
            .lock()
            .expect("hooks lock poisoned")
            .push(message.to_string());
    }

    fn loading_changed(&self, inflight: usize) {
        self.loading_counts
            .lock()
            .expect("hooks lock poisoned")
            .push(inflight);
    }
}
