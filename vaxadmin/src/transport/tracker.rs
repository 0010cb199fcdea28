//! # In-Flight Request Tracker
//!
//! The original client kept a module-level counter that incremented on
//! every outgoing request and decremented on completion, feeding a global
//! loading indicator. Uniqueness-check calls (`/check/isExist`) were
//! excluded so background validation never flashed the spinner.
//!
//! This port replaces the bare counter with scoped acquisition: a guard
//! increments on creation and decrements on drop, so early returns and
//! error paths can never leak a count.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use super::hooks::UiHooks;

/// Path fragment identifying uniqueness-check calls, which bypass
/// tracking.
pub const UNIQUENESS_CHECK_PATH: &str = "/check/isExist";

/// Shared in-flight request counter.
///
/// Clones observe the same count.
#[derive(Debug, Clone, Default)]
pub struct InflightTracker {
    count: Arc<AtomicUsize>,
}

impl InflightTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current number of tracked in-flight requests.
    pub fn inflight(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Begin tracking one request against the given URL.
    ///
    /// Returns `None` for uniqueness-check URLs. Otherwise the returned
    /// guard holds the count until it is dropped, reporting each change
    /// through the hooks.
    pub fn track(&self, url: &str, hooks: Arc<dyn UiHooks>) -> Option<InflightGuard> {
        if url.contains(UNIQUENESS_CHECK_PATH) {
            return None;
        }

        let now = self.count.fetch_add(1, Ordering::SeqCst) + 1;
        hooks.loading_changed(now);

        Some(InflightGuard {
            count: Arc::clone(&self.count),
            hooks,
        })
    }
}

/// RAII guard for one tracked request.
pub struct InflightGuard {
    count: Arc<AtomicUsize>,
    hooks: Arc<dyn UiHooks>,
}

impl Drop for InflightGuard {
    fn drop(&mut self) {
        let now = self.count.fetch_sub(1, Ordering::SeqCst) - 1;
        self.hooks.loading_changed(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::hooks::{NoopHooks, RecordingHooks};

    #[test]
    fn test_guard_increments_and_decrements() {
        let tracker = InflightTracker::new();
        let hooks: Arc<dyn UiHooks> = Arc::new(NoopHooks);

        let a = tracker.track("/contract/", Arc::clone(&hooks));
        let b = tracker.track("/order/user/", Arc::clone(&hooks));
        assert_eq!(tracker.inflight(), 2);

        drop(a);
        assert_eq!(tracker.inflight(), 1);
        drop(b);
        assert_eq!(tracker.inflight(), 0);
    }

    #[test]
    fn test_uniqueness_checks_not_tracked() {
        let tracker = InflightTracker::new();
        let hooks: Arc<dyn UiHooks> = Arc::new(NoopHooks);

        let guard = tracker.track("/check/isExist/heTong", hooks);
        assert!(guard.is_none());
        assert_eq!(tracker.inflight(), 0);
    }

    #[test]
    fn test_loading_hook_sees_each_transition() {
        let tracker = InflightTracker::new();
        let recording = Arc::new(RecordingHooks::default());
        let hooks: Arc<dyn UiHooks> = recording.clone();

        let guard = tracker.track("/report/station/page", Arc::clone(&hooks));
        drop(guard);

        let counts = recording.loading_counts.lock().unwrap();
        assert_eq!(*counts, vec![1, 0]);
    }
}
