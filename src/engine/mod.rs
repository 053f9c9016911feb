// SPDX-License-Identifier: MPL-2.0
//! Headless navigation engine.
//!
//! Everything in here is renderer-agnostic and clock-agnostic: hosts feed
//! events, elapsed time, and presented frames, and read back state and
//! visual poses. The `ui` module is one such host.

pub mod autoplay;
pub mod capture;
pub mod carousel;
pub mod gesture;
pub mod image_transition;
pub mod index;
pub mod indicator;
pub mod timer;
pub mod transition;

pub use autoplay::{AutoplayScheduler, AutoplayState};
pub use capture::{ListenerRegistry, PointerCapture};
pub use carousel::{ArrowState, Carousel, CarouselOptions, IndicatorOptions, Message, Output};
pub use gesture::{DragState, GestureRecognizer};
pub use image_transition::ImageTransition;
pub use index::{IndexChange, IndexController, NavigatorState, Step};
pub use indicator::{ArrowKey, IndicatorBinding, IndicatorForm, IndicatorModel, Segment};
pub use timer::{TimerHandle, TimerKind, TimerQueue};
pub use transition::{
    Cycle, Generation, LayerRole, LayerVisual, Motion, TransitionAnimator, TransitionCompleted,
    TransitionStarted, TransitionState,
};
