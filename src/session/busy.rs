//! Busy flag for front ends
//!
//! The session holds the flag while an upload or chat message is being
//! processed. Front ends clone the flag to grey out input while it is set.
//! Overlapping operations are already ruled out by `&mut self` on the
//! session, so the flag only reports; it never refuses work.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared view of whether the session is processing something
#[derive(Debug, Clone, Default)]
pub struct BusyFlag(Arc<AtomicBool>);

impl BusyFlag {
    /// Whether an operation is in flight
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Mark the session busy until the returned guard is dropped
    ///
    /// The guard clears the flag whichever way the operation ends,
    /// including the operation's future being dropped.
    pub(crate) fn hold(&self) -> BusyGuard {
        self.0.store(true, Ordering::Release);
        BusyGuard(Arc::clone(&self.0))
    }
}

/// Clears the busy flag on drop
#[derive(Debug)]
pub(crate) struct BusyGuard(Arc<AtomicBool>);

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
