// SPDX-License-Identifier: MPL-2.0
//! Transition animator.
//!
//! Turns an index change into a timed visual transition and guarantees that
//! only the latest requested transition ever completes.
//!
//! # Lifecycle
//!
//! ```text
//! idle ──request──▶ in flight (exiting + entering) ──completion timer──▶ idle
//! ```
//!
//! Effects that need a discrete restart (slide, zoom, reveal, flip) go
//! through `Rest → Armed → Animating`: the start pose is held until the host
//! reports one presented frame, so the start and animated poses never merge
//! into a single paint. Fade and track motion animate right away.
//!
//! # Cancellation
//!
//! Every request bumps a [`Generation`]. The completion timer and the armed
//! frame request both carry the generation they were issued for; a callback
//! with a stale generation is ignored. Superseded timers are also cancelled
//! outright, so a stale completion can only come from a host replaying an
//! old token.

use super::timer::{TimerHandle, TimerKind, TimerQueue};
use crate::domain::{Direction, TransitionDuration, TransitionKind};
use std::time::Duration;

/// Starting scale of an entering item in the zoom effect.
const ZOOM_START_SCALE: f32 = 1.15;

/// Monotonic token identifying one transition request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Generation(u64);

impl Generation {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// Three-phase cycle used to force an animation restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cycle {
    /// Nothing in flight.
    #[default]
    Rest,
    /// Start pose applied, waiting for one presented frame.
    Armed,
    /// Interpolating towards the end pose.
    Animating,
}

/// How the host renders index changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Motion {
    /// Stacked layers, outgoing and incoming mounted together.
    #[default]
    Layered,
    /// One continuous track translated by index (carousel slide).
    Track,
}

/// Snapshot of the in-flight transition.
///
/// While in flight, the `from` side is exiting and the `to` side is entering,
/// concurrently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionState {
    pub from_index: usize,
    pub to_index: usize,
    pub direction: Direction,
    pub cycle: Cycle,
    pub generation: Generation,
}

/// Emitted when a transition is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionStarted {
    pub from: usize,
    pub to: usize,
    pub direction: Direction,
    pub generation: Generation,
}

/// Emitted exactly once per transition that was not superseded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionCompleted {
    pub index: usize,
    pub generation: Generation,
}

/// Role of a mounted layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerRole {
    /// Displayed item with nothing in flight.
    Resting,
    /// Outgoing item of an in-flight transition.
    Exiting,
    /// Incoming item of an in-flight transition.
    Entering,
}

/// Computed pose of one mounted item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerVisual {
    pub index: usize,
    pub role: LayerRole,
    /// 0.0 (transparent) to 1.0 (opaque).
    pub opacity: f32,
    /// Horizontal offset in percent of the viewport width.
    pub translate_x_percent: f32,
    /// Uniform scale factor.
    pub scale: f32,
    /// Visible share of the layer in percent, revealed from the leading edge.
    pub reveal_percent: f32,
    /// Rotation around the vertical axis in degrees.
    pub rotate_y_degrees: f32,
}

impl LayerVisual {
    fn at_rest(index: usize, role: LayerRole) -> Self {
        Self {
            index,
            role,
            opacity: 1.0,
            translate_x_percent: 0.0,
            scale: 1.0,
            reveal_percent: 100.0,
            rotate_y_degrees: 0.0,
        }
    }
}

#[derive(Debug, Clone)]
struct InFlight {
    state: TransitionState,
    /// Item mounted under the incoming one, if any.
    outgoing: Option<usize>,
    completion: TimerHandle,
    armed_frame: Option<Generation>,
    animating_since: Option<Duration>,
}

#[derive(Debug, Clone)]
pub struct TransitionAnimator {
    kind: TransitionKind,
    motion: Motion,
    duration: TransitionDuration,
    generation: Generation,
    displayed_index: Option<usize>,
    active_index: Option<usize>,
    in_flight: Option<InFlight>,
}

impl TransitionAnimator {
    #[must_use]
    pub fn new(
        kind: TransitionKind,
        motion: Motion,
        duration: TransitionDuration,
        initial_index: Option<usize>,
    ) -> Self {
        Self {
            kind,
            motion,
            duration,
            generation: Generation::default(),
            displayed_index: initial_index,
            active_index: initial_index,
            in_flight: None,
        }
    }

    #[must_use]
    pub fn kind(&self) -> TransitionKind {
        self.kind
    }

    #[must_use]
    pub fn motion(&self) -> Motion {
        self.motion
    }

    #[must_use]
    pub fn duration(&self) -> TransitionDuration {
        self.duration
    }

    /// Index whose completion has been applied.
    #[must_use]
    pub fn displayed_index(&self) -> Option<usize> {
        self.displayed_index
    }

    /// Index most recently requested.
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    #[must_use]
    pub fn state(&self) -> Option<TransitionState> {
        self.in_flight.as_ref().map(|flight| flight.state)
    }

    #[must_use]
    pub fn cycle(&self) -> Cycle {
        self.in_flight
            .as_ref()
            .map_or(Cycle::Rest, |flight| flight.state.cycle)
    }

    /// Returns true while an armed transition waits for a presented frame.
    #[must_use]
    pub fn needs_frame(&self) -> bool {
        self.in_flight
            .as_ref()
            .is_some_and(|flight| flight.armed_frame.is_some())
    }

    /// Starts a transition, superseding any in-flight one.
    pub fn request(
        &mut self,
        from: usize,
        to: usize,
        timers: &mut TimerQueue<TimerKind>,
    ) -> TransitionStarted {
        let superseded_to = self.in_flight.as_ref().map(|flight| flight.state.to_index);
        self.supersede(timers);

        self.generation = self.generation.next();
        let generation = self.generation;
        let direction = Direction::between(from, to);
        let restart = self.motion == Motion::Layered && self.kind.requires_restart();
        let (cycle, armed_frame, animating_since) = if restart {
            (Cycle::Armed, Some(generation), None)
        } else {
            (Cycle::Animating, None, Some(timers.now()))
        };

        let completion = timers.schedule_in(
            self.duration.as_duration(),
            TimerKind::TransitionComplete(generation),
        );
        // Heading back to the displayed item: the superseded target exits instead.
        let outgoing = self
            .displayed_index
            .filter(|&index| index != to)
            .or_else(|| superseded_to.filter(|&index| index != to));
        self.active_index = Some(to);
        self.in_flight = Some(InFlight {
            state: TransitionState {
                from_index: from,
                to_index: to,
                direction,
                cycle,
                generation,
            },
            outgoing,
            completion,
            armed_frame,
            animating_since,
        });

        tracing::debug!(
            from,
            to,
            ?direction,
            generation = generation.value(),
            kind = %self.kind,
            "transition requested"
        );

        TransitionStarted {
            from,
            to,
            direction,
            generation,
        }
    }

    /// Handles a presented frame. Returns true if it moved `Armed → Animating`.
    pub fn on_frame(&mut self, now: Duration) -> bool {
        let current = self.generation;
        let Some(flight) = self.in_flight.as_mut() else {
            return false;
        };
        match flight.armed_frame.take() {
            Some(requested) if requested == current => {
                flight.state.cycle = Cycle::Animating;
                flight.animating_since = Some(now);
                true
            }
            _ => false,
        }
    }

    /// Handles a fired completion timer.
    ///
    /// Applies `displayed_index` and reports completion only if `generation`
    /// still identifies the in-flight transition.
    pub fn on_completion(&mut self, generation: Generation) -> Option<TransitionCompleted> {
        let is_current = self
            .in_flight
            .as_ref()
            .is_some_and(|flight| flight.state.generation == generation);
        if !is_current {
            tracing::debug!(
                generation = generation.value(),
                current = self.generation.value(),
                "stale transition completion ignored"
            );
            return None;
        }

        let flight = self.in_flight.take()?;
        let index = flight.state.to_index;
        self.displayed_index = Some(index);
        tracing::debug!(index, generation = generation.value(), "transition completed");
        Some(TransitionCompleted { index, generation })
    }

    /// Drops the in-flight transition, its completion timer, and its frame request.
    pub fn cancel(&mut self, timers: &mut TimerQueue<TimerKind>) {
        self.supersede(timers);
    }

    /// Shows `index` immediately, with no transition.
    pub fn reset(&mut self, index: Option<usize>, timers: &mut TimerQueue<TimerKind>) {
        self.supersede(timers);
        self.generation = self.generation.next();
        self.displayed_index = index;
        self.active_index = index;
    }

    /// Linear progress of the in-flight transition, 1.0 when idle.
    #[must_use]
    pub fn progress(&self, now: Duration) -> f32 {
        let Some(flight) = self.in_flight.as_ref() else {
            return 1.0;
        };
        match (flight.state.cycle, flight.animating_since) {
            (Cycle::Animating, Some(since)) => {
                let elapsed = now.saturating_sub(since).as_secs_f32();
                let total = self.duration.as_duration().as_secs_f32();
                (elapsed / total).clamp(0.0, 1.0)
            }
            _ => 0.0,
        }
    }

    /// Mounted layers, bottom first.
    ///
    /// At rest only the displayed item is mounted. In flight the outgoing
    /// item stays mounted under the incoming one until the completion
    /// applies. The outgoing item is the displayed one, or the superseded
    /// target when the request heads back to the displayed item.
    #[must_use]
    pub fn layers(&self, now: Duration) -> Vec<LayerVisual> {
        let Some(flight) = self.in_flight.as_ref() else {
            return self
                .displayed_index
                .map(|index| LayerVisual::at_rest(index, LayerRole::Resting))
                .into_iter()
                .collect();
        };

        let to = flight.state.to_index;
        if self.motion == Motion::Track {
            return vec![LayerVisual::at_rest(to, LayerRole::Entering)];
        }

        let t = ease_out(self.progress(now));
        let sign = flight.state.direction.sign();
        let (exiting, entering) = pose(self.kind, t, sign);

        let mut layers = Vec::with_capacity(2);
        if let Some(from) = flight.outgoing {
            layers.push(exiting.place(from, LayerRole::Exiting));
        }
        layers.push(entering.place(to, LayerRole::Entering));
        layers
    }

    fn supersede(&mut self, timers: &mut TimerQueue<TimerKind>) {
        if let Some(flight) = self.in_flight.take() {
            timers.cancel(flight.completion);
            tracing::debug!(
                generation = flight.state.generation.value(),
                to = flight.state.to_index,
                "transition superseded"
            );
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Pose {
    opacity: f32,
    translate_x_percent: f32,
    scale: f32,
    reveal_percent: f32,
    rotate_y_degrees: f32,
}

impl Pose {
    const REST: Pose = Pose {
        opacity: 1.0,
        translate_x_percent: 0.0,
        scale: 1.0,
        reveal_percent: 100.0,
        rotate_y_degrees: 0.0,
    };

    fn place(self, index: usize, role: LayerRole) -> LayerVisual {
        LayerVisual {
            index,
            role,
            opacity: self.opacity,
            translate_x_percent: self.translate_x_percent,
            scale: self.scale,
            reveal_percent: self.reveal_percent,
            rotate_y_degrees: self.rotate_y_degrees,
        }
    }
}

/// Exiting and entering poses at eased progress `t`.
fn pose(kind: TransitionKind, t: f32, sign: f32) -> (Pose, Pose) {
    match kind {
        TransitionKind::Fade => (
            Pose {
                opacity: 1.0 - t,
                ..Pose::REST
            },
            Pose {
                opacity: t,
                ..Pose::REST
            },
        ),
        TransitionKind::Slide => (
            Pose {
                translate_x_percent: -sign * 100.0 * t,
                ..Pose::REST
            },
            Pose {
                translate_x_percent: sign * 100.0 * (1.0 - t),
                ..Pose::REST
            },
        ),
        TransitionKind::Zoom => (
            Pose {
                opacity: 1.0 - t,
                ..Pose::REST
            },
            Pose {
                opacity: t,
                scale: ZOOM_START_SCALE + (1.0 - ZOOM_START_SCALE) * t,
                ..Pose::REST
            },
        ),
        TransitionKind::Reveal => (
            Pose::REST,
            Pose {
                reveal_percent: 100.0 * t,
                ..Pose::REST
            },
        ),
        TransitionKind::Flip => {
            // First half turns the outgoing item edge-on, second half turns
            // the incoming one back face-on.
            if t < 0.5 {
                (
                    Pose {
                        rotate_y_degrees: sign * 180.0 * t,
                        ..Pose::REST
                    },
                    Pose {
                        opacity: 0.0,
                        rotate_y_degrees: -sign * 90.0,
                        ..Pose::REST
                    },
                )
            } else {
                (
                    Pose {
                        opacity: 0.0,
                        rotate_y_degrees: sign * 90.0,
                        ..Pose::REST
                    },
                    Pose {
                        rotate_y_degrees: -sign * 180.0 * (1.0 - t),
                        ..Pose::REST
                    },
                )
            }
        }
    }
}

/// Quadratic ease-out.
pub(crate) fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn animator(kind: TransitionKind) -> (TransitionAnimator, TimerQueue<TimerKind>) {
        (
            TransitionAnimator::new(kind, Motion::Layered, TransitionDuration::new(300), Some(0)),
            TimerQueue::new(),
        )
    }

    fn fire_all(
        animator: &mut TransitionAnimator,
        timers: &mut TimerQueue<TimerKind>,
        until: Duration,
    ) -> Vec<TransitionCompleted> {
        let mut completed = Vec::new();
        while let Some((_, kind)) = timers.pop_due(until) {
            if let TimerKind::TransitionComplete(generation) = kind {
                completed.extend(animator.on_completion(generation));
            }
        }
        timers.settle(until);
        completed
    }

    #[test]
    fn generation_increases_with_every_request() {
        let (mut animator, mut timers) = animator(TransitionKind::Fade);
        let first = animator.request(0, 1, &mut timers);
        let second = animator.request(1, 2, &mut timers);
        assert!(second.generation > first.generation);
    }

    #[test]
    fn fade_animates_immediately() {
        let (mut animator, mut timers) = animator(TransitionKind::Fade);
        animator.request(0, 1, &mut timers);
        assert_eq!(animator.cycle(), Cycle::Animating);
        assert!(!animator.needs_frame());
    }

    #[test]
    fn restart_effects_wait_for_a_frame() {
        for kind in [
            TransitionKind::Slide,
            TransitionKind::Zoom,
            TransitionKind::Reveal,
            TransitionKind::Flip,
        ] {
            let (mut animator, mut timers) = animator(kind);
            animator.request(0, 1, &mut timers);
            assert_eq!(animator.cycle(), Cycle::Armed, "{kind}");
            assert_eq!(animator.progress(ms(100)), 0.0);
            assert!(animator.on_frame(ms(16)));
            assert_eq!(animator.cycle(), Cycle::Animating);
            assert!(!animator.on_frame(ms(32)));
        }
    }

    #[test]
    fn armed_layers_show_the_start_pose() {
        let (mut animator, mut timers) = animator(TransitionKind::Slide);
        animator.request(0, 1, &mut timers);
        let layers = animator.layers(ms(200));
        assert_eq!(layers.len(), 2);
        assert_eq!(layers[0].role, LayerRole::Exiting);
        assert_eq!(layers[0].translate_x_percent, 0.0);
        assert_eq!(layers[1].role, LayerRole::Entering);
        assert_eq!(layers[1].translate_x_percent, 100.0);
    }

    #[test]
    fn completion_applies_displayed_index_once() {
        let (mut animator, mut timers) = animator(TransitionKind::Fade);
        let started = animator.request(0, 2, &mut timers);
        assert_eq!(animator.displayed_index(), Some(0));

        let completed = fire_all(&mut animator, &mut timers, ms(300));
        assert_eq!(
            completed,
            vec![TransitionCompleted {
                index: 2,
                generation: started.generation
            }]
        );
        assert_eq!(animator.displayed_index(), Some(2));
        assert!(animator.on_completion(started.generation).is_none());
    }

    #[test]
    fn superseded_transition_never_completes() {
        let (mut animator, mut timers) = animator(TransitionKind::Fade);
        let first = animator.request(0, 2, &mut timers);
        timers.settle(ms(50));
        let second = animator.request(2, 4, &mut timers);

        let early = fire_all(&mut animator, &mut timers, ms(300));
        assert!(early.is_empty());
        assert_eq!(animator.displayed_index(), Some(0));

        let late = fire_all(&mut animator, &mut timers, ms(350));
        assert_eq!(late.len(), 1);
        assert_eq!(late[0].generation, second.generation);
        assert_eq!(animator.displayed_index(), Some(4));

        // A replayed stale token is ignored.
        assert!(animator.on_completion(first.generation).is_none());
        assert_eq!(animator.displayed_index(), Some(4));
    }

    #[test]
    fn superseded_armed_frame_is_dropped() {
        let (mut animator, mut timers) = animator(TransitionKind::Zoom);
        animator.request(0, 1, &mut timers);
        animator.request(1, 2, &mut timers);
        assert_eq!(animator.cycle(), Cycle::Armed);
        assert!(animator.on_frame(ms(16)));
        assert_eq!(animator.state().map(|s| s.to_index), Some(2));
    }

    #[test]
    fn fade_mounts_both_layers_until_completion() {
        let (mut animator, mut timers) = animator(TransitionKind::Fade);
        animator.request(0, 1, &mut timers);
        let mid = animator.layers(ms(150));
        assert_eq!(mid.len(), 2);
        assert!(mid[0].opacity < 1.0 && mid[0].opacity > 0.0);
        assert!((mid[0].opacity + mid[1].opacity - 1.0).abs() < 1e-6);

        fire_all(&mut animator, &mut timers, ms(300));
        let rest = animator.layers(ms(300));
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0].index, 1);
        assert_eq!(rest[0].role, LayerRole::Resting);
    }

    #[test]
    fn heading_back_mid_fade_keeps_the_superseded_target_visible() {
        let (mut animator, mut timers) = animator(TransitionKind::Fade);
        animator.request(0, 1, &mut timers);
        timers.settle(ms(200));
        animator.request(1, 0, &mut timers);

        let layers = animator.layers(ms(200));
        assert_eq!(layers.len(), 2);
        assert_eq!(layers[0].index, 1);
        assert_eq!(layers[0].role, LayerRole::Exiting);
        assert_eq!(layers[0].opacity, 1.0);
        assert_eq!(layers[1].index, 0);
        assert_eq!(layers[1].role, LayerRole::Entering);

        let mid = animator.layers(ms(350));
        assert!((mid[0].opacity + mid[1].opacity - 1.0).abs() < 1e-6);

        let completed = fire_all(&mut animator, &mut timers, ms(1_000));
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].index, 0);
        assert_eq!(animator.layers(ms(1_000)).len(), 1);
    }

    #[test]
    fn cancel_releases_the_completion_timer() {
        let (mut animator, mut timers) = animator(TransitionKind::Flip);
        animator.request(0, 1, &mut timers);
        assert_eq!(timers.live_count(), 1);
        animator.cancel(&mut timers);
        assert_eq!(timers.live_count(), 0);
        assert!(!animator.needs_frame());
        assert_eq!(animator.cycle(), Cycle::Rest);
    }

    #[test]
    fn track_motion_skips_the_armed_phase() {
        let mut timers = TimerQueue::new();
        let mut animator = TransitionAnimator::new(
            TransitionKind::Slide,
            Motion::Track,
            TransitionDuration::default(),
            Some(0),
        );
        animator.request(0, 1, &mut timers);
        assert_eq!(animator.cycle(), Cycle::Animating);
    }

    #[test]
    fn flip_hides_incoming_during_first_half() {
        let (exiting, entering) = pose(TransitionKind::Flip, 0.25, 1.0);
        assert_eq!(entering.opacity, 0.0);
        assert_eq!(exiting.rotate_y_degrees, 45.0);

        let (exiting, entering) = pose(TransitionKind::Flip, 1.0, 1.0);
        assert_eq!(exiting.opacity, 0.0);
        assert_eq!(entering.rotate_y_degrees, 0.0);
    }

    #[test]
    fn easing_keeps_endpoints() {
        assert_eq!(ease_out(0.0), 0.0);
        assert_eq!(ease_out(1.0), 1.0);
        assert!(ease_out(0.5) > 0.5);
    }
}
