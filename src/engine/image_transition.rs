// SPDX-License-Identifier: MPL-2.0
//! Index-driven image transition.
//!
//! The host owns the index and pushes it in with [`ImageTransition::set_index`].
//! There is no navigation logic here; the component only animates between
//! whatever indices it is given, with the same cancellation rules as the
//! carousel.

use super::timer::{TimerKind, TimerQueue};
use super::transition::{
    LayerVisual, Motion, TransitionAnimator, TransitionCompleted, TransitionStarted,
    TransitionState,
};
use crate::domain::{TransitionDuration, TransitionKind};
use std::time::Duration;

#[derive(Debug)]
pub struct ImageTransition {
    animator: TransitionAnimator,
    timers: TimerQueue<TimerKind>,
    disposed: bool,
}

impl ImageTransition {
    #[must_use]
    pub fn new(kind: TransitionKind, duration: TransitionDuration, initial_index: usize) -> Self {
        Self {
            animator: TransitionAnimator::new(kind, Motion::Layered, duration, Some(initial_index)),
            timers: TimerQueue::new(),
            disposed: false,
        }
    }

    #[must_use]
    pub fn kind(&self) -> TransitionKind {
        self.animator.kind()
    }

    /// Index the host asked for most recently.
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.animator.active_index()
    }

    /// Index whose transition has completed.
    #[must_use]
    pub fn displayed_index(&self) -> Option<usize> {
        self.animator.displayed_index()
    }

    #[must_use]
    pub fn state(&self) -> Option<TransitionState> {
        self.animator.state()
    }

    #[must_use]
    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    #[must_use]
    pub fn live_timer_count(&self) -> usize {
        self.timers.live_count()
    }

    #[must_use]
    pub fn needs_frame(&self) -> bool {
        !self.disposed && self.animator.needs_frame()
    }

    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Starts a transition towards `index`.
    ///
    /// Setting the index that is already active is a no-op.
    pub fn set_index(&mut self, index: usize) -> Option<TransitionStarted> {
        if self.disposed {
            return None;
        }
        let from = self.animator.active_index()?;
        if from == index {
            return None;
        }
        Some(self.animator.request(from, index, &mut self.timers))
    }

    /// Advances the clock to `elapsed` and returns the completions that applied.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<TransitionCompleted> {
        let mut completed = Vec::new();
        if self.disposed {
            return completed;
        }
        while let Some((_, kind)) = self.timers.pop_due(elapsed) {
            if let TimerKind::TransitionComplete(generation) = kind {
                completed.extend(self.animator.on_completion(generation));
            }
        }
        self.timers.settle(elapsed);
        completed
    }

    /// Reports a presented frame. Returns true if it started the animation.
    pub fn frame(&mut self) -> bool {
        if self.disposed {
            return false;
        }
        let now = self.timers.now();
        self.animator.on_frame(now)
    }

    #[must_use]
    pub fn layers(&self) -> Vec<LayerVisual> {
        self.animator.layers(self.timers.now())
    }

    #[must_use]
    pub fn progress(&self) -> f32 {
        self.animator.progress(self.timers.now())
    }

    /// Drops any in-flight transition along with its timer and frame request.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.animator.cancel(&mut self.timers);
        self.timers.clear();
    }
}

impl Drop for ImageTransition {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::transition::{Cycle, LayerRole};

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn setting_the_same_index_does_nothing() {
        let mut transition =
            ImageTransition::new(TransitionKind::Fade, TransitionDuration::new(300), 2);
        assert!(transition.set_index(2).is_none());
        assert_eq!(transition.live_timer_count(), 0);
    }

    #[test]
    fn completion_applies_after_duration() {
        let mut transition =
            ImageTransition::new(TransitionKind::Fade, TransitionDuration::new(300), 0);
        transition.set_index(1);
        assert!(transition.advance(ms(299)).is_empty());
        assert_eq!(transition.displayed_index(), Some(0));

        let completed = transition.advance(ms(300));
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].index, 1);
        assert_eq!(transition.displayed_index(), Some(1));
    }

    #[test]
    fn zoom_waits_for_a_frame_before_animating() {
        let mut transition =
            ImageTransition::new(TransitionKind::Zoom, TransitionDuration::new(300), 0);
        transition.set_index(1);
        assert_eq!(transition.state().map(|s| s.cycle), Some(Cycle::Armed));
        assert!(transition.needs_frame());
        assert_eq!(transition.progress(), 0.0);

        assert!(transition.frame());
        assert!(!transition.frame());
        assert_eq!(transition.state().map(|s| s.cycle), Some(Cycle::Animating));
    }

    #[test]
    fn superseded_request_never_completes() {
        let mut transition =
            ImageTransition::new(TransitionKind::Reveal, TransitionDuration::new(300), 0);
        let first = transition.set_index(1).expect("first request");
        transition.advance(ms(100));
        let second = transition.set_index(3).expect("second request");
        assert!(second.generation > first.generation);

        let completed = transition.advance(ms(1_000));
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].generation, second.generation);
        assert_eq!(transition.displayed_index(), Some(3));
    }

    #[test]
    fn superseded_request_keeps_the_displayed_layer_outgoing() {
        let mut transition =
            ImageTransition::new(TransitionKind::Fade, TransitionDuration::new(300), 0);
        transition.set_index(1);
        transition.advance(ms(50));
        transition.set_index(2);

        let layers = transition.layers();
        assert_eq!(layers.len(), 2);
        assert_eq!((layers[0].index, layers[0].role), (0, LayerRole::Exiting));
        assert_eq!((layers[1].index, layers[1].role), (2, LayerRole::Entering));
    }

    #[test]
    fn dispose_releases_everything() {
        let mut transition =
            ImageTransition::new(TransitionKind::Flip, TransitionDuration::new(300), 0);
        transition.set_index(1);
        transition.dispose();
        assert_eq!(transition.live_timer_count(), 0);
        assert!(!transition.needs_frame());
        assert!(transition.set_index(2).is_none());
        assert!(transition.advance(ms(1_000)).is_empty());
        assert_eq!(transition.displayed_index(), Some(0));
    }
}
