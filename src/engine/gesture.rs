// SPDX-License-Identifier: MPL-2.0
//! Drag/swipe sub-component.
//!
//! Turns horizontal pointer movement into a live offset and, on release, a
//! commit or revert decision. The live offset only feeds the visual track
//! transform; the index is touched once, when the drag ends.

use super::capture::{ListenerRegistry, PointerCapture};
use super::index::Step;
use crate::domain::DragThreshold;

/// Live drag data. `current_offset` is zero whenever no drag is active.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragState {
    pub is_dragging: bool,
    pub start_pointer_x: Option<f32>,
    pub current_offset: f32,
}

/// Messages for the gesture sub-component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// Pointer pressed at the given horizontal position.
    Start(f32),
    /// Pointer moved while pressed.
    Move(f32),
    /// Pointer released.
    End,
    /// Pointer left the tracked region mid-drag. Handled exactly like `End`.
    Leave,
}

/// Effects produced by gesture handling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// No effect.
    None,
    /// A drag began; autoplay must pause.
    Began,
    /// The live offset changed.
    Moved(f32),
    /// The drag ended past the threshold; navigate one step.
    Commit(Step),
    /// The drag ended inside the threshold; nothing to navigate.
    Revert,
}

impl Effect {
    /// Returns true for the two effects that end a drag.
    #[must_use]
    pub fn ends_drag(self) -> bool {
        matches!(self, Self::Commit(_) | Self::Revert)
    }
}

#[derive(Debug, Default)]
pub struct GestureRecognizer {
    drag: DragState,
    threshold: DragThreshold,
    registry: ListenerRegistry,
    capture: Option<PointerCapture>,
}

impl GestureRecognizer {
    /// Creates a recognizer that attaches its global listeners to `registry`.
    #[must_use]
    pub fn new(threshold: DragThreshold, registry: ListenerRegistry) -> Self {
        Self {
            drag: DragState::default(),
            threshold,
            registry,
            capture: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> DragState {
        self.drag
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging
    }

    #[must_use]
    pub fn offset(&self) -> f32 {
        self.drag.current_offset
    }

    /// Handle a gesture message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Start(x) => self.start(x),
            Message::Move(x) => self.move_to(x),
            Message::End | Message::Leave => self.end(),
        }
    }

    fn start(&mut self, x: f32) -> Effect {
        if !x.is_finite() {
            return Effect::None;
        }
        let already_dragging = self.drag.is_dragging;
        self.drag = DragState {
            is_dragging: true,
            start_pointer_x: Some(x),
            current_offset: 0.0,
        };
        if self.capture.is_none() {
            self.capture = Some(self.registry.acquire());
        }
        if already_dragging {
            Effect::None
        } else {
            Effect::Began
        }
    }

    fn move_to(&mut self, x: f32) -> Effect {
        let Some(start) = self.drag.start_pointer_x else {
            return Effect::None;
        };
        if !self.drag.is_dragging || !x.is_finite() {
            return Effect::None;
        }
        self.drag.current_offset = x - start;
        Effect::Moved(self.drag.current_offset)
    }

    fn end(&mut self) -> Effect {
        if !self.drag.is_dragging {
            return Effect::None;
        }
        let offset = self.drag.current_offset;
        self.release();

        if !self.threshold.is_exceeded_by(offset) {
            Effect::Revert
        } else if offset > 0.0 {
            Effect::Commit(Step::Previous)
        } else {
            Effect::Commit(Step::Next)
        }
    }

    /// Drops the drag and its pointer capture without producing an effect.
    pub fn release(&mut self) {
        self.drag = DragState::default();
        self.capture = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recognizer() -> (GestureRecognizer, ListenerRegistry) {
        let registry = ListenerRegistry::new();
        (
            GestureRecognizer::new(DragThreshold::new(50.0), registry.clone()),
            registry,
        )
    }

    #[test]
    fn default_state_is_not_dragging() {
        let (gesture, registry) = recognizer();
        assert_eq!(gesture.state(), DragState::default());
        assert_eq!(registry.active(), 0);
    }

    #[test]
    fn start_records_pointer_and_captures() {
        let (mut gesture, registry) = recognizer();
        assert_eq!(gesture.handle(Message::Start(120.0)), Effect::Began);
        assert!(gesture.is_dragging());
        assert_eq!(gesture.state().start_pointer_x, Some(120.0));
        assert_eq!(registry.active(), 1);
    }

    #[test]
    fn move_updates_offset_relative_to_start() {
        let (mut gesture, _registry) = recognizer();
        gesture.handle(Message::Start(200.0));
        assert_eq!(gesture.handle(Message::Move(170.0)), Effect::Moved(-30.0));
        assert_eq!(gesture.offset(), -30.0);
    }

    #[test]
    fn move_without_drag_is_ignored() {
        let (mut gesture, _registry) = recognizer();
        assert_eq!(gesture.handle(Message::Move(10.0)), Effect::None);
        assert_eq!(gesture.offset(), 0.0);
    }

    #[test]
    fn small_drag_reverts_and_resets() {
        let (mut gesture, registry) = recognizer();
        gesture.handle(Message::Start(100.0));
        gesture.handle(Message::Move(150.0));
        assert_eq!(gesture.handle(Message::End), Effect::Revert);
        assert_eq!(gesture.state(), DragState::default());
        assert_eq!(registry.active(), 0);
    }

    #[test]
    fn positive_drag_past_threshold_goes_previous() {
        let (mut gesture, _registry) = recognizer();
        gesture.handle(Message::Start(100.0));
        gesture.handle(Message::Move(151.0));
        assert_eq!(
            gesture.handle(Message::End),
            Effect::Commit(Step::Previous)
        );
    }

    #[test]
    fn negative_drag_past_threshold_goes_next() {
        let (mut gesture, _registry) = recognizer();
        gesture.handle(Message::Start(100.0));
        gesture.handle(Message::Move(20.0));
        assert_eq!(gesture.handle(Message::End), Effect::Commit(Step::Next));
    }

    #[test]
    fn leaving_behaves_like_release() {
        let (mut gesture, registry) = recognizer();
        gesture.handle(Message::Start(100.0));
        gesture.handle(Message::Move(0.0));
        assert_eq!(gesture.handle(Message::Leave), Effect::Commit(Step::Next));
        assert!(!gesture.is_dragging());
        assert_eq!(registry.active(), 0);
    }

    #[test]
    fn restart_mid_drag_keeps_a_single_capture() {
        let (mut gesture, registry) = recognizer();
        gesture.handle(Message::Start(100.0));
        assert_eq!(gesture.handle(Message::Start(300.0)), Effect::None);
        assert_eq!(registry.active(), 1);
        assert_eq!(gesture.state().start_pointer_x, Some(300.0));
    }

    #[test]
    fn release_drops_capture_silently() {
        let (mut gesture, registry) = recognizer();
        gesture.handle(Message::Start(100.0));
        gesture.release();
        assert_eq!(registry.active(), 0);
        assert_eq!(gesture.handle(Message::End), Effect::None);
    }
}
