// SPDX-License-Identifier: MPL-2.0
//! Virtual timer queue.
//!
//! The engine never reads the wall clock. Hosts feed monotonic elapsed time
//! and the queue hands back due timers one at a time, in deadline order, with
//! its clock positioned on the deadline being processed. A large time jump
//! therefore replays exactly the fires that would have happened in real time.

use super::transition::Generation;
use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

/// Opaque handle to a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerHandle(u64);

/// Timers used by the navigation engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Periodic autoplay advance.
    Autoplay,
    /// End of the transition identified by the generation token.
    TransitionComplete(Generation),
}

/// Deadline-ordered set of one-shot timers.
#[derive(Debug)]
pub struct TimerQueue<K> {
    now: Duration,
    next_id: u64,
    pending: BTreeMap<(Duration, u64), K>,
    deadlines: HashMap<u64, Duration>,
}

impl<K> Default for TimerQueue<K> {
    fn default() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            pending: BTreeMap::new(),
            deadlines: HashMap::new(),
        }
    }
}

impl<K: Copy> TimerQueue<K> {
    /// Creates an empty queue with its clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current engine time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedules `kind` to fire `delay` after the current time.
    pub fn schedule_in(&mut self, delay: Duration, kind: K) -> TimerHandle {
        let id = self.next_id;
        self.next_id += 1;
        let deadline = self.now + delay;
        self.pending.insert((deadline, id), kind);
        self.deadlines.insert(id, deadline);
        TimerHandle(id)
    }

    /// Cancels a timer. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        match self.deadlines.remove(&handle.0) {
            Some(deadline) => self.pending.remove(&(deadline, handle.0)).is_some(),
            None => false,
        }
    }

    /// Returns true while the timer is still pending.
    #[must_use]
    pub fn is_live(&self, handle: TimerHandle) -> bool {
        self.deadlines.contains_key(&handle.0)
    }

    /// Number of pending timers.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.pending.len()
    }

    /// Deadline of the earliest pending timer.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.keys().next().map(|(deadline, _)| *deadline)
    }

    /// Pops the earliest timer due at or before `until`.
    ///
    /// The clock moves to the popped deadline, so anything scheduled while
    /// handling it is relative to that instant.
    pub fn pop_due(&mut self, until: Duration) -> Option<(TimerHandle, K)> {
        let (&(deadline, id), _) = self.pending.iter().next()?;
        if deadline > until {
            return None;
        }
        let kind = self.pending.remove(&(deadline, id))?;
        self.deadlines.remove(&id);
        self.now = self.now.max(deadline);
        Some((TimerHandle(id), kind))
    }

    /// Moves the clock forward to `until`. Earlier instants are ignored.
    pub fn settle(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }

    /// Drops every pending timer.
    pub fn clear(&mut self) {
        self.pending.clear();
        self.deadlines.clear();
    }
}
