// SPDX-License-Identifier: MPL-2.0
//! Carousel orchestrator.
//!
//! [`Carousel::update`] is the single entry point for every input source:
//! pointer and keyboard events, the autoplay timer, and transition frame and
//! completion callbacks. Each goes through the same path into the
//! [`IndexController`], so navigation state has exactly one writer.
//! Requests are never queued: a new index change supersedes whatever
//! transition is still running.

use super::autoplay::{AutoplayScheduler, AutoplayState};
use super::capture::ListenerRegistry;
use super::gesture::{self, DragState, GestureRecognizer};
use super::index::{IndexChange, IndexController, NavigatorState, Step};
use super::indicator::{ArrowKey, IndicatorBinding, IndicatorForm, IndicatorModel};
use super::timer::{TimerKind, TimerQueue};
use super::transition::{
    ease_out, LayerVisual, Motion, TransitionAnimator, TransitionCompleted, TransitionStarted,
    TransitionState,
};
use crate::domain::{
    AutoplayInterval, CarouselTransition, DragReferenceWidth, DragThreshold, IndicatorKind,
    IndicatorPosition, Item, TransitionDuration,
};
use std::time::Duration;

/// Indicator settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IndicatorOptions {
    pub kind: IndicatorKind,
    pub position: IndicatorPosition,
}

/// Construction options for a [`Carousel`].
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselOptions {
    pub transition: CarouselTransition,
    pub transition_duration: TransitionDuration,
    pub autoplay: bool,
    pub autoplay_interval: AutoplayInterval,
    pub looping: bool,
    pub pause_on_hover: bool,
    pub drag_threshold: DragThreshold,
    pub drag_reference_width: DragReferenceWidth,
    pub indicator: Option<IndicatorOptions>,
    pub arrows: bool,
    pub initial_index: usize,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            transition: CarouselTransition::default(),
            transition_duration: TransitionDuration::default(),
            autoplay: false,
            autoplay_interval: AutoplayInterval::default(),
            looping: true,
            pause_on_hover: true,
            drag_threshold: DragThreshold::default(),
            drag_reference_width: DragReferenceWidth::default(),
            indicator: Some(IndicatorOptions::default()),
            arrows: true,
            initial_index: 0,
        }
    }
}

/// Inputs accepted by the carousel.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Arrow button or key: one step forward.
    Next,
    /// Arrow button or key: one step backward.
    Previous,
    /// Absolute request, wrapped or ignored when out of range.
    GoTo(isize),
    /// Pointer pressed on the viewport.
    DragStarted(f32),
    /// Pointer moved while a drag is active.
    DragMoved(f32),
    /// Pointer released.
    DragEnded,
    /// Pointer left the tracked region.
    PointerLeft,
    /// Pointer entered the carousel.
    HoverEntered,
    /// Pointer left the carousel.
    HoverExited,
    /// Indicator segment clicked.
    IndicatorPressed(usize),
    /// Indicator container gained or lost focus.
    IndicatorFocused(bool),
    /// Arrow key pressed; only honored while the indicator has focus.
    IndicatorKey(ArrowKey),
    /// (Re)start autoplay, optionally with a new interval.
    StartAutoplay(Option<AutoplayInterval>),
    PauseAutoplay,
    ResumeAutoplay,
    StopAutoplay,
    /// Monotonic time elapsed since mount.
    Tick(Duration),
    /// A frame with the current visual state was presented.
    Frame,
}

/// Notifications for the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    /// A navigation was committed. Fired once per change, never per drag move.
    SlideChanged(usize),
    TransitionStarted(TransitionStarted),
    TransitionCompleted(TransitionCompleted),
}

/// Prev/next affordance state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrowState {
    pub previous_enabled: bool,
    pub next_enabled: bool,
}

/// Where a navigation request comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Request {
    To(isize),
    Step(Step),
    Jump(usize),
}

#[derive(Debug)]
pub struct Carousel {
    items: Vec<Item>,
    options: CarouselOptions,
    index: IndexController,
    gesture: GestureRecognizer,
    autoplay: AutoplayScheduler,
    animator: TransitionAnimator,
    indicator: Option<IndicatorBinding>,
    timers: TimerQueue<TimerKind>,
    listeners: ListenerRegistry,
    hovered: bool,
    indicator_focused: bool,
    disposed: bool,
    /// Drag percent of the release that committed the current step, 0 otherwise.
    release_percent: f32,
    /// Track offset the in-flight slide eases from.
    track_from_percent: f32,
}

impl Carousel {
    /// Mounts a carousel over `items`.
    #[must_use]
    pub fn new(items: Vec<Item>, options: CarouselOptions) -> Self {
        let index = IndexController::new(items.len(), options.initial_index, options.looping);
        let listeners = ListenerRegistry::new();
        let gesture = GestureRecognizer::new(options.drag_threshold, listeners.clone());
        let motion = match options.transition {
            CarouselTransition::Slide => Motion::Track,
            CarouselTransition::Fade => Motion::Layered,
        };
        let animator = TransitionAnimator::new(
            options.transition.kind(),
            motion,
            options.transition_duration,
            index.current_index(),
        );
        let indicator = options.indicator.map(|indicator| {
            IndicatorBinding::new(indicator.kind, indicator.position).with_navigation(true)
        });

        let mut carousel = Self {
            items,
            autoplay: AutoplayScheduler::new(options.autoplay_interval, options.pause_on_hover),
            options,
            index,
            gesture,
            animator,
            indicator,
            timers: TimerQueue::new(),
            listeners,
            hovered: false,
            indicator_focused: false,
            disposed: false,
            release_percent: 0.0,
            track_from_percent: 0.0,
        };

        if carousel.options.autoplay {
            let count = carousel.items.len();
            carousel
                .autoplay
                .start(carousel.options.autoplay_interval, &mut carousel.timers, count);
        }

        tracing::debug!(
            items = carousel.items.len(),
            index = carousel.index.state().current_index,
            transition = ?carousel.options.transition,
            autoplay = carousel.options.autoplay,
            "carousel mounted"
        );
        carousel
    }

    /// Handle a carousel message.
    ///
    /// Once disposed, every message is ignored.
    #[allow(clippy::needless_pass_by_value)]
    pub fn update(&mut self, msg: Message) -> Vec<Output> {
        let mut out = Vec::new();
        if self.disposed {
            return out;
        }

        match msg {
            Message::Next => self.navigate(Request::Step(Step::Next), &mut out),
            Message::Previous => self.navigate(Request::Step(Step::Previous), &mut out),
            Message::GoTo(target) => self.navigate(Request::To(target), &mut out),
            Message::DragStarted(x) => self.handle_gesture(gesture::Message::Start(x), &mut out),
            Message::DragMoved(x) => self.handle_gesture(gesture::Message::Move(x), &mut out),
            Message::DragEnded => self.handle_gesture(gesture::Message::End, &mut out),
            Message::PointerLeft => self.handle_gesture(gesture::Message::Leave, &mut out),
            Message::HoverEntered => self.set_hovered(true),
            Message::HoverExited => self.set_hovered(false),
            Message::IndicatorPressed(index) => {
                let target = self
                    .indicator
                    .and_then(|binding| binding.click(self.indicator_model(), index));
                if let Some(target) = target {
                    self.navigate(Request::Jump(target), &mut out);
                }
            }
            Message::IndicatorFocused(focused) => self.indicator_focused = focused,
            Message::IndicatorKey(key) => {
                let step = self
                    .indicator
                    .filter(|_| self.indicator_focused)
                    .and_then(|binding| binding.key(key));
                if let Some(step) = step {
                    self.navigate(Request::Step(step), &mut out);
                }
            }
            Message::StartAutoplay(interval) => {
                let interval = interval.unwrap_or(self.autoplay.state().interval);
                let count = self.items.len();
                self.autoplay.start(interval, &mut self.timers, count);
            }
            Message::PauseAutoplay => {
                let count = self.items.len();
                self.autoplay.pause(&mut self.timers, count);
            }
            Message::ResumeAutoplay => {
                let count = self.items.len();
                self.autoplay.resume(&mut self.timers, count);
            }
            Message::StopAutoplay => self.autoplay.stop(&mut self.timers),
            Message::Tick(elapsed) => self.advance(elapsed, &mut out),
            Message::Frame => {
                let now = self.timers.now();
                self.animator.on_frame(now);
            }
        }
        out
    }

    /// Releases every resource: autoplay timer, completion timer, armed frame
    /// request, and pointer capture. Safe to call at any point, more than once.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.gesture.release();
        self.autoplay.teardown(&mut self.timers);
        self.animator.cancel(&mut self.timers);
        self.timers.clear();
        tracing::debug!("carousel disposed");
    }

    /// Replaces the item sequence, keeping the index when still in range.
    ///
    /// Any drag or transition in flight is dropped; no change is reported.
    pub fn set_items(&mut self, items: Vec<Item>) {
        if self.disposed {
            return;
        }
        let current = self.index.state().current_index;
        self.items = items;
        self.gesture.release();
        self.index.reset(self.items.len(), current);
        self.animator
            .reset(self.index.current_index(), &mut self.timers);
        let count = self.items.len();
        self.autoplay.set_dragging(false, &mut self.timers, count);
        self.autoplay.sync(&mut self.timers, count);
    }

    fn navigate(&mut self, request: Request, out: &mut Vec<Output>) {
        let change = match request {
            Request::To(target) => self.index.go_to(target),
            Request::Step(step) => self.index.step(step),
            Request::Jump(index) => self.index.jump_to(index),
        };
        if let Some(change) = change {
            self.commit(change, out);
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn commit(&mut self, change: IndexChange, out: &mut Vec<Output>) {
        tracing::debug!(
            previous = change.previous,
            next = change.next,
            "slide changed"
        );
        let started = self
            .animator
            .request(change.previous, change.next, &mut self.timers);
        let count = self.items.len();
        let release = std::mem::take(&mut self.release_percent);
        self.track_from_percent = -(change.previous as f32 * self.track_share()) + release;
        self.autoplay.restart_interval(&mut self.timers, count);
        out.push(Output::SlideChanged(change.next));
        out.push(Output::TransitionStarted(started));
    }

    fn handle_gesture(&mut self, msg: gesture::Message, out: &mut Vec<Output>) {
        let released_at = self.drag_percent();
        let effect = self.gesture.handle(msg);
        let count = self.items.len();
        match effect {
            gesture::Effect::Began => {
                self.autoplay.set_dragging(true, &mut self.timers, count);
            }
            gesture::Effect::Commit(step) => {
                self.release_percent = released_at;
                self.navigate(Request::Step(step), out);
                self.release_percent = 0.0;
            }
            gesture::Effect::None | gesture::Effect::Moved(_) | gesture::Effect::Revert => {}
        }
        if effect.ends_drag() {
            self.autoplay.set_dragging(false, &mut self.timers, count);
        }
    }

    fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
        let count = self.items.len();
        self.autoplay.set_hovered(hovered, &mut self.timers, count);
    }

    fn advance(&mut self, elapsed: Duration, out: &mut Vec<Output>) {
        while let Some((handle, kind)) = self.timers.pop_due(elapsed) {
            match kind {
                TimerKind::Autoplay => {
                    tracing::trace!(at = ?self.timers.now(), "autoplay timer fired");
                    if self.autoplay.take_fired(handle) && !self.gesture.is_dragging() {
                        self.navigate(Request::Step(Step::Next), out);
                    }
                    let count = self.items.len();
                    self.autoplay.sync(&mut self.timers, count);
                }
                TimerKind::TransitionComplete(generation) => {
                    tracing::trace!(at = ?self.timers.now(), generation = generation.value(), "completion timer fired");
                    if let Some(completed) = self.animator.on_completion(generation) {
                        out.push(Output::TransitionCompleted(completed));
                    }
                }
            }
        }
        self.timers.settle(elapsed);
    }

    // =========================================================================
    // View model
    // =========================================================================

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.index.current_index()
    }

    /// Index whose transition has completed.
    #[must_use]
    pub fn displayed_index(&self) -> Option<usize> {
        self.animator.displayed_index()
    }

    #[must_use]
    pub fn navigator_state(&self) -> NavigatorState {
        self.index.state()
    }

    #[must_use]
    pub fn drag_state(&self) -> DragState {
        self.gesture.state()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    #[must_use]
    pub fn autoplay_state(&self) -> AutoplayState {
        self.autoplay.state()
    }

    #[must_use]
    pub fn transition_state(&self) -> Option<TransitionState> {
        self.animator.state()
    }

    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    #[must_use]
    pub fn is_indicator_focused(&self) -> bool {
        self.indicator_focused
    }

    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Engine time of the last processed tick.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    /// Number of pending timers (autoplay and transition completion).
    #[must_use]
    pub fn live_timer_count(&self) -> usize {
        self.timers.live_count()
    }

    /// Registry of global pointer listeners; non-zero only during a drag.
    #[must_use]
    pub fn listeners(&self) -> &ListenerRegistry {
        &self.listeners
    }

    /// Returns true while the host should keep delivering frames.
    #[must_use]
    pub fn needs_frame(&self) -> bool {
        !self.disposed && self.animator.needs_frame()
    }

    /// Returns true while the host should keep delivering ticks.
    #[must_use]
    pub fn needs_tick(&self) -> bool {
        !self.disposed && self.timers.live_count() > 0
    }

    #[must_use]
    pub fn indicator_model(&self) -> IndicatorModel {
        IndicatorModel {
            total: self.items.len(),
            current: self.index.state().current_index,
        }
    }

    /// Indicator form, or `None` when the carousel has no indicator.
    #[must_use]
    pub fn indicator_form(&self) -> Option<IndicatorForm> {
        self.indicator
            .map(|binding| binding.form(self.indicator_model()))
    }

    #[must_use]
    pub fn indicator(&self) -> Option<IndicatorBinding> {
        self.indicator
    }

    /// Arrow affordances, or `None` when arrows are disabled.
    #[must_use]
    pub fn arrows(&self) -> Option<ArrowState> {
        self.options.arrows.then(|| ArrowState {
            previous_enabled: self.index.can_go_prev(),
            next_enabled: self.index.can_go_next(),
        })
    }

    /// Horizontal track offset in percent of the track width.
    ///
    /// `-(current × 100 / count) + drag_percent`, where the drag percent uses
    /// the fixed reference width rather than the rendered one.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn track_offset_percent(&self) -> f32 {
        if self.items.is_empty() {
            return 0.0;
        }
        -(self.index.state().current_index as f32 * self.track_share()) + self.drag_percent()
    }

    /// Width of one item in percent of the track.
    #[allow(clippy::cast_precision_loss)]
    fn track_share(&self) -> f32 {
        match self.items.len() {
            0 => 0.0,
            count => 100.0 / count as f32,
        }
    }

    fn drag_percent(&self) -> f32 {
        self.gesture.offset() / self.options.drag_reference_width.pixels() * self.track_share()
    }

    /// The track follows the pointer 1:1 while dragging and eases otherwise.
    #[must_use]
    pub fn track_animated(&self) -> bool {
        !self.gesture.is_dragging()
    }

    /// Track offset to render right now.
    ///
    /// Equal to [`track_offset_percent`](Self::track_offset_percent) except
    /// while an undragged slide is in flight, where it eases from the
    /// outgoing position. After a committing drag the outgoing position is
    /// where the pointer released the track.
    #[must_use]
    pub fn rendered_track_offset_percent(&self) -> f32 {
        let target = self.track_offset_percent();
        if self.animator.state().is_none()
            || self.items.is_empty()
            || !self.track_animated()
            || self.animator.motion() != Motion::Track
        {
            return target;
        }
        let from = self.track_from_percent;
        let t = ease_out(self.animator.progress(self.timers.now()));
        from + (target - from) * t
    }

    /// Mounted layers for the fade transition.
    #[must_use]
    pub fn layers(&self) -> Vec<LayerVisual> {
        self.animator.layers(self.timers.now())
    }

    /// Linear progress of the current transition, 1.0 when idle.
    #[must_use]
    pub fn transition_progress(&self) -> f32 {
        self.animator.progress(self.timers.now())
    }
}

impl Drop for Carousel {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::item::normalize;

    fn items(count: usize) -> Vec<Item> {
        normalize((0..count).map(|i| format!("{i}.png")))
    }

    fn carousel(count: usize, options: CarouselOptions) -> Carousel {
        Carousel::new(items(count), options)
    }

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn slide_changes(outputs: &[Output]) -> Vec<usize> {
        outputs
            .iter()
            .filter_map(|output| match output {
                Output::SlideChanged(index) => Some(*index),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn next_emits_one_slide_change_and_one_transition() {
        let mut carousel = carousel(3, CarouselOptions::default());
        let out = carousel.update(Message::Next);
        assert_eq!(slide_changes(&out), vec![1]);
        assert!(matches!(out[1], Output::TransitionStarted(started) if started.to == 1));
    }

    #[test]
    fn drag_moves_never_emit_slide_changes() {
        let mut carousel = carousel(3, CarouselOptions::default());
        carousel.update(Message::DragStarted(200.0));
        for x in [190.0, 150.0, 120.0] {
            assert!(carousel.update(Message::DragMoved(x)).is_empty());
        }
        assert_eq!(carousel.current_index(), Some(0));
        let out = carousel.update(Message::DragEnded);
        assert_eq!(slide_changes(&out), vec![1]);
    }

    #[test]
    fn drag_pauses_autoplay_until_release() {
        let options = CarouselOptions {
            autoplay: true,
            autoplay_interval: AutoplayInterval::new(1_000),
            ..CarouselOptions::default()
        };
        let mut carousel = carousel(3, options);
        carousel.update(Message::DragStarted(0.0));
        assert!(carousel.autoplay_state().timer.is_none());
        carousel.update(Message::Tick(ms(5_000)));
        assert_eq!(carousel.current_index(), Some(0));

        carousel.update(Message::DragEnded);
        assert!(carousel.autoplay_state().timer.is_some());
    }

    #[test]
    fn track_offset_combines_index_and_drag() {
        let mut carousel = carousel(4, CarouselOptions::default());
        carousel.update(Message::Next);
        assert_eq!(carousel.track_offset_percent(), -25.0);

        carousel.update(Message::DragStarted(300.0));
        carousel.update(Message::DragMoved(150.0));
        // -150 / 300 * 25 = -12.5
        assert_eq!(carousel.track_offset_percent(), -37.5);
        assert!(!carousel.track_animated());
    }

    #[test]
    fn rendered_track_eases_towards_the_target() {
        let mut carousel = carousel(4, CarouselOptions::default());
        carousel.update(Message::Next);
        assert_eq!(carousel.rendered_track_offset_percent(), 0.0);

        carousel.update(Message::Tick(ms(250)));
        let mid = carousel.rendered_track_offset_percent();
        assert!(mid < 0.0 && mid > -25.0);

        carousel.update(Message::Tick(ms(500)));
        assert_eq!(carousel.rendered_track_offset_percent(), -25.0);
    }

    #[test]
    fn committed_drag_eases_from_the_release_position() {
        let mut carousel = carousel(4, CarouselOptions::default());
        carousel.update(Message::DragStarted(300.0));
        carousel.update(Message::DragMoved(150.0));
        assert_eq!(carousel.rendered_track_offset_percent(), -12.5);

        let out = carousel.update(Message::DragEnded);
        assert_eq!(slide_changes(&out), vec![1]);
        assert_eq!(carousel.rendered_track_offset_percent(), -12.5);

        carousel.update(Message::Tick(ms(250)));
        let mid = carousel.rendered_track_offset_percent();
        assert!(mid < -12.5 && mid > -25.0);

        carousel.update(Message::Tick(ms(500)));
        assert_eq!(carousel.rendered_track_offset_percent(), -25.0);

        // A later button step starts from the resting position again.
        carousel.update(Message::Next);
        assert_eq!(carousel.rendered_track_offset_percent(), -25.0);
    }

    #[test]
    fn arrows_disable_at_non_looping_boundaries() {
        let options = CarouselOptions {
            looping: false,
            ..CarouselOptions::default()
        };
        let carousel = carousel(3, options);
        assert_eq!(
            carousel.arrows(),
            Some(ArrowState {
                previous_enabled: false,
                next_enabled: true
            })
        );
    }

    #[test]
    fn arrows_can_be_turned_off() {
        let options = CarouselOptions {
            arrows: false,
            ..CarouselOptions::default()
        };
        assert!(carousel(3, options).arrows().is_none());
    }

    #[test]
    fn indicator_keys_need_focus() {
        let mut carousel = carousel(3, CarouselOptions::default());
        assert!(carousel
            .update(Message::IndicatorKey(ArrowKey::Right))
            .is_empty());
        carousel.update(Message::IndicatorFocused(true));
        let out = carousel.update(Message::IndicatorKey(ArrowKey::Right));
        assert_eq!(slide_changes(&out), vec![1]);
    }

    #[test]
    fn indicator_is_absent_when_disabled() {
        let options = CarouselOptions {
            indicator: None,
            ..CarouselOptions::default()
        };
        let mut carousel = carousel(3, options);
        assert!(carousel.indicator_form().is_none());
        assert!(carousel.update(Message::IndicatorPressed(2)).is_empty());
    }

    #[test]
    fn empty_carousel_ignores_navigation() {
        let mut carousel = carousel(0, CarouselOptions::default());
        assert!(carousel.update(Message::Next).is_empty());
        assert!(carousel.update(Message::GoTo(3)).is_empty());
        assert_eq!(carousel.current_index(), None);
        assert_eq!(carousel.indicator_form(), Some(IndicatorForm::Hidden));
        assert_eq!(carousel.track_offset_percent(), 0.0);
        assert!(carousel.layers().is_empty());
    }

    #[test]
    fn manual_navigation_restarts_the_autoplay_countdown() {
        let options = CarouselOptions {
            autoplay: true,
            autoplay_interval: AutoplayInterval::new(1_000),
            pause_on_hover: false,
            ..CarouselOptions::default()
        };
        let mut carousel = carousel(5, options);
        carousel.update(Message::Tick(ms(900)));
        carousel.update(Message::Next);
        carousel.update(Message::Tick(ms(1_500)));
        assert_eq!(carousel.current_index(), Some(1));
        carousel.update(Message::Tick(ms(1_900)));
        assert_eq!(carousel.current_index(), Some(2));
    }

    #[test]
    fn set_items_clamps_and_cancels_in_flight_work() {
        let mut carousel = carousel(5, CarouselOptions::default());
        carousel.update(Message::GoTo(4));
        carousel.update(Message::DragStarted(10.0));
        carousel.set_items(items(2));
        assert_eq!(carousel.current_index(), Some(1));
        assert_eq!(carousel.displayed_index(), Some(1));
        assert!(carousel.transition_state().is_none());
        assert_eq!(carousel.listeners().active(), 0);
    }

    #[test]
    fn fade_carousel_exposes_two_layers_mid_transition() {
        let options = CarouselOptions {
            transition: CarouselTransition::Fade,
            transition_duration: TransitionDuration::new(300),
            ..CarouselOptions::default()
        };
        let mut carousel = carousel(3, options);
        carousel.update(Message::Next);
        carousel.update(Message::Tick(ms(100)));
        let layers = carousel.layers();
        assert_eq!(layers.len(), 2);
        assert_eq!(layers[0].index, 0);
        assert_eq!(layers[1].index, 1);
    }
}
