// SPDX-License-Identifier: MPL-2.0
//! Scoped pointer-listener registrations.
//!
//! A drag needs window-wide pointer move/release tracking for its whole
//! lifetime. Each registration is a [`PointerCapture`] guard: dropping it
//! releases the listener, so every path that ends a drag (release, pointer
//! leaving the window, teardown) gives it back without extra bookkeeping.
//! Hosts subscribe to global pointer events only while
//! [`ListenerRegistry::active`] is non-zero.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Counts live pointer captures.
#[derive(Debug, Clone, Default)]
pub struct ListenerRegistry {
    active: Arc<AtomicUsize>,
}

impl ListenerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener; it stays attached until the guard is dropped.
    pub fn acquire(&self) -> PointerCapture {
        self.active.fetch_add(1, Ordering::SeqCst);
        PointerCapture {
            active: Arc::clone(&self.active),
        }
    }

    /// Number of attached listeners.
    #[must_use]
    pub fn active(&self) -> usize {
        self.active.load(Ordering::SeqCst)
    }
}

/// Guard for one attached global pointer listener.
#[derive(Debug)]
#[must_use = "dropping the capture detaches the pointer listener immediately"]
pub struct PointerCapture {
    active: Arc<AtomicUsize>,
}

impl Drop for PointerCapture {
    fn drop(&mut self) {
        // fetch_update keeps the counter at zero if it somehow underflows.
        let _ = self
            .active
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1));
    }
}
