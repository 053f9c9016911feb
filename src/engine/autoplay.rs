// SPDX-License-Identifier: MPL-2.0
//! Autoplay scheduler.
//!
//! Keeps at most one live timer, and keeps one exactly when autoplay is
//! enabled, not paused, not blocked by a drag or a hover, and there is more
//! than one item. Every mutating method re-establishes that rule through
//! [`AutoplayScheduler::sync`].
//!
//! An explicit pause and the hover/drag block are tracked separately: ending
//! a drag or leaving the carousel lifts only the block it caused.

use super::timer::{TimerHandle, TimerKind, TimerQueue};
use crate::domain::AutoplayInterval;

/// Autoplay snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoplayState {
    pub is_enabled: bool,
    pub interval: AutoplayInterval,
    /// Paused explicitly through [`AutoplayScheduler::pause`].
    pub is_paused: bool,
    /// Held back by a drag, or by a hover with pause-on-hover.
    pub is_blocked: bool,
    pub timer: Option<TimerHandle>,
}

#[derive(Debug, Clone, Default)]
pub struct AutoplayScheduler {
    enabled: bool,
    interval: AutoplayInterval,
    paused: bool,
    pause_on_hover: bool,
    hovered: bool,
    dragging: bool,
    timer: Option<TimerHandle>,
}

impl AutoplayScheduler {
    #[must_use]
    pub fn new(interval: AutoplayInterval, pause_on_hover: bool) -> Self {
        Self {
            interval,
            pause_on_hover,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn state(&self) -> AutoplayState {
        AutoplayState {
            is_enabled: self.enabled,
            interval: self.interval,
            is_paused: self.paused,
            is_blocked: self.is_blocked(),
            timer: self.timer,
        }
    }

    #[must_use]
    pub fn has_live_timer(&self) -> bool {
        self.timer.is_some()
    }

    /// Enables autoplay and (re)schedules its timer.
    ///
    /// Starting while already running replaces the previous timer and clears
    /// an explicit pause. While hovered (with pause-on-hover) or dragging, the
    /// timer waits for the block to lift.
    pub fn start(
        &mut self,
        interval: AutoplayInterval,
        timers: &mut TimerQueue<TimerKind>,
        item_count: usize,
    ) {
        self.cancel_timer(timers);
        self.enabled = true;
        self.interval = interval;
        self.paused = false;
        self.sync(timers, item_count);
    }

    /// Pauses without forgetting the interval.
    pub fn pause(&mut self, timers: &mut TimerQueue<TimerKind>, item_count: usize) {
        self.paused = true;
        self.sync(timers, item_count);
    }

    /// Clears an explicit pause.
    ///
    /// No timer is scheduled while disabled, dragging, or hovered with
    /// pause-on-hover.
    pub fn resume(&mut self, timers: &mut TimerQueue<TimerKind>, item_count: usize) {
        if !self.enabled {
            return;
        }
        self.paused = false;
        self.sync(timers, item_count);
    }

    /// Disables autoplay and clears its timer.
    pub fn stop(&mut self, timers: &mut TimerQueue<TimerKind>) {
        self.enabled = false;
        self.paused = false;
        self.cancel_timer(timers);
    }

    pub fn set_hovered(
        &mut self,
        hovered: bool,
        timers: &mut TimerQueue<TimerKind>,
        item_count: usize,
    ) {
        self.hovered = hovered;
        self.sync(timers, item_count);
    }

    pub fn set_dragging(
        &mut self,
        dragging: bool,
        timers: &mut TimerQueue<TimerKind>,
        item_count: usize,
    ) {
        self.dragging = dragging;
        self.sync(timers, item_count);
    }

    /// Restarts the countdown, used after any committed index change.
    pub fn restart_interval(&mut self, timers: &mut TimerQueue<TimerKind>, item_count: usize) {
        if self.timer.is_some() {
            self.cancel_timer(timers);
            self.sync(timers, item_count);
        }
    }

    /// Consumes a fired timer. Returns true if it was this scheduler's live
    /// timer and an advance is allowed.
    ///
    /// The caller must call [`sync`](Self::sync) once it has handled the
    /// advance so the next period gets scheduled.
    pub fn take_fired(&mut self, handle: TimerHandle) -> bool {
        if self.timer != Some(handle) {
            return false;
        }
        self.timer = None;
        self.should_run_ignoring_count()
    }

    /// Schedules or cancels the timer so that it is live exactly when it should be.
    pub fn sync(&mut self, timers: &mut TimerQueue<TimerKind>, item_count: usize) {
        let should_run = self.should_run_ignoring_count() && item_count > 1;
        match (should_run, self.timer) {
            (true, None) => {
                self.timer = Some(timers.schedule_in(self.interval.as_duration(), TimerKind::Autoplay));
            }
            (false, Some(_)) => self.cancel_timer(timers),
            _ => {}
        }
    }

    /// Releases the timer without changing the configuration.
    pub fn teardown(&mut self, timers: &mut TimerQueue<TimerKind>) {
        self.cancel_timer(timers);
    }

    fn should_run_ignoring_count(&self) -> bool {
        self.enabled && !self.paused && !self.is_blocked()
    }

    fn is_blocked(&self) -> bool {
        self.dragging || (self.hovered && self.pause_on_hover)
    }

    fn cancel_timer(&mut self, timers: &mut TimerQueue<TimerKind>) {
        if let Some(handle) = self.timer.take() {
            timers.cancel(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn started(count: usize) -> (AutoplayScheduler, TimerQueue<TimerKind>) {
        let mut timers = TimerQueue::new();
        let mut autoplay = AutoplayScheduler::new(AutoplayInterval::new(1_000), true);
        autoplay.start(AutoplayInterval::new(1_000), &mut timers, count);
        (autoplay, timers)
    }

    #[test]
    fn start_schedules_one_timer() {
        let (autoplay, timers) = started(3);
        assert!(autoplay.has_live_timer());
        assert_eq!(timers.live_count(), 1);
        assert_eq!(timers.next_deadline(), Some(Duration::from_millis(1_000)));
    }

    #[test]
    fn starting_twice_keeps_a_single_timer() {
        let (mut autoplay, mut timers) = started(3);
        autoplay.start(AutoplayInterval::new(2_000), &mut timers, 3);
        assert_eq!(timers.live_count(), 1);
        assert_eq!(timers.next_deadline(), Some(Duration::from_millis(2_000)));
    }

    #[test]
    fn no_timer_for_a_single_item() {
        let (autoplay, timers) = started(1);
        assert!(autoplay.state().is_enabled);
        assert!(!autoplay.has_live_timer());
        assert_eq!(timers.live_count(), 0);
    }

    #[test]
    fn pause_and_resume_keep_interval() {
        let (mut autoplay, mut timers) = started(3);
        autoplay.pause(&mut timers, 3);
        assert!(!autoplay.has_live_timer());
        assert_eq!(timers.live_count(), 0);

        autoplay.resume(&mut timers, 3);
        assert!(autoplay.has_live_timer());
        assert_eq!(autoplay.state().interval.millis(), 1_000);
    }

    #[test]
    fn resume_is_blocked_while_dragging() {
        let (mut autoplay, mut timers) = started(3);
        autoplay.set_dragging(true, &mut timers, 3);
        autoplay.resume(&mut timers, 3);
        assert!(!autoplay.has_live_timer());
        autoplay.set_dragging(false, &mut timers, 3);
        assert!(autoplay.has_live_timer());
    }

    #[test]
    fn hover_pause_outlives_drag_end() {
        let (mut autoplay, mut timers) = started(3);
        autoplay.set_hovered(true, &mut timers, 3);
        autoplay.set_dragging(true, &mut timers, 3);
        autoplay.set_dragging(false, &mut timers, 3);
        assert!(!autoplay.has_live_timer());
        autoplay.set_hovered(false, &mut timers, 3);
        assert!(autoplay.has_live_timer());
    }

    #[test]
    fn hover_is_ignored_without_pause_on_hover() {
        let mut timers = TimerQueue::new();
        let mut autoplay = AutoplayScheduler::new(AutoplayInterval::new(1_000), false);
        autoplay.start(AutoplayInterval::new(1_000), &mut timers, 3);
        autoplay.set_hovered(true, &mut timers, 3);
        assert!(autoplay.has_live_timer());
    }

    #[test]
    fn explicit_pause_survives_a_drag() {
        let (mut autoplay, mut timers) = started(3);
        autoplay.pause(&mut timers, 3);
        autoplay.set_dragging(true, &mut timers, 3);
        autoplay.set_dragging(false, &mut timers, 3);
        assert!(autoplay.state().is_paused);
        assert!(!autoplay.has_live_timer());
    }

    #[test]
    fn explicit_pause_survives_hover_without_pause_on_hover() {
        let mut timers = TimerQueue::new();
        let mut autoplay = AutoplayScheduler::new(AutoplayInterval::new(1_000), false);
        autoplay.start(AutoplayInterval::new(1_000), &mut timers, 3);
        autoplay.pause(&mut timers, 3);
        autoplay.set_hovered(true, &mut timers, 3);
        autoplay.set_hovered(false, &mut timers, 3);
        assert!(autoplay.state().is_paused);
        assert!(!autoplay.has_live_timer());
    }

    #[test]
    fn resume_while_hovered_waits_for_hover_exit() {
        let (mut autoplay, mut timers) = started(3);
        autoplay.pause(&mut timers, 3);
        autoplay.set_hovered(true, &mut timers, 3);
        autoplay.resume(&mut timers, 3);
        assert!(autoplay.state().is_blocked);
        assert!(!autoplay.has_live_timer());
        autoplay.set_hovered(false, &mut timers, 3);
        assert!(autoplay.has_live_timer());
    }

    #[test]
    fn resume_is_a_no_op_when_disabled() {
        let mut timers = TimerQueue::new();
        let mut autoplay = AutoplayScheduler::new(AutoplayInterval::default(), true);
        autoplay.resume(&mut timers, 3);
        assert!(!autoplay.has_live_timer());
    }

    #[test]
    fn stop_clears_timer_and_disables() {
        let (mut autoplay, mut timers) = started(3);
        autoplay.stop(&mut timers);
        assert!(!autoplay.state().is_enabled);
        assert_eq!(timers.live_count(), 0);
        autoplay.resume(&mut timers, 3);
        assert!(!autoplay.has_live_timer());
    }

    #[test]
    fn fired_timer_is_consumed_once() {
        let (mut autoplay, mut timers) = started(3);
        let (handle, kind) = timers
            .pop_due(Duration::from_millis(1_000))
            .expect("timer due");
        assert_eq!(kind, TimerKind::Autoplay);
        assert!(autoplay.take_fired(handle));
        assert!(!autoplay.take_fired(handle));
        autoplay.sync(&mut timers, 3);
        assert_eq!(timers.next_deadline(), Some(Duration::from_millis(2_000)));
    }

    #[test]
    fn restart_interval_pushes_deadline_back() {
        let (mut autoplay, mut timers) = started(3);
        timers.settle(Duration::from_millis(600));
        autoplay.restart_interval(&mut timers, 3);
        assert_eq!(timers.live_count(), 1);
        assert_eq!(timers.next_deadline(), Some(Duration::from_millis(1_600)));
    }
}
