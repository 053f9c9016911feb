// SPDX-License-Identifier: MPL-2.0
//! Navigation newtypes.
//!
//! This module provides type-safe wrappers for timing and gesture values,
//! ensuring they are always within valid ranges.

use crate::config::defaults::{
    DEFAULT_AUTOPLAY_INTERVAL_MS, DEFAULT_CAROUSEL_TRANSITION_MS, DEFAULT_DRAG_REFERENCE_WIDTH_PX,
    DEFAULT_DRAG_THRESHOLD_PX, MAX_AUTOPLAY_INTERVAL_MS, MAX_DRAG_REFERENCE_WIDTH_PX,
    MAX_DRAG_THRESHOLD_PX, MAX_TRANSITION_MS, MIN_AUTOPLAY_INTERVAL_MS,
    MIN_DRAG_REFERENCE_WIDTH_PX, MIN_DRAG_THRESHOLD_PX, MIN_TRANSITION_MS,
};
use std::time::Duration;

// =============================================================================
// AutoplayInterval
// =============================================================================

/// Delay between two automatic advances, in milliseconds.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (100 ms – 10 min).
///
/// # Example
///
/// ```
/// use iced_carousel::domain::AutoplayInterval;
///
/// let interval = AutoplayInterval::new(3_000);
/// assert_eq!(interval.millis(), 3_000);
///
/// // Values outside range are clamped
/// let too_fast = AutoplayInterval::new(1);
/// assert_eq!(too_fast.millis(), 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AutoplayInterval(u64);

impl AutoplayInterval {
    /// Creates a new interval, clamping to the valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_AUTOPLAY_INTERVAL_MS, MAX_AUTOPLAY_INTERVAL_MS))
    }

    /// Returns the interval in milliseconds.
    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    /// Returns the interval as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for AutoplayInterval {
    fn default() -> Self {
        Self(DEFAULT_AUTOPLAY_INTERVAL_MS)
    }
}

// =============================================================================
// TransitionDuration
// =============================================================================

/// Length of one index-change animation, in milliseconds.
///
/// The completion timer of a transition is scheduled exactly this long after
/// the index change is recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransitionDuration(u64);

impl TransitionDuration {
    /// Creates a new duration, clamping to the valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_TRANSITION_MS, MAX_TRANSITION_MS))
    }

    /// Returns the duration in milliseconds.
    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    /// Returns the value as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for TransitionDuration {
    fn default() -> Self {
        Self(DEFAULT_CAROUSEL_TRANSITION_MS)
    }
}

// =============================================================================
// DragThreshold
// =============================================================================

/// Minimum absolute drag offset, in pixels, that commits a navigation.
///
/// An offset exactly equal to the threshold does not commit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragThreshold(f32);

impl DragThreshold {
    /// Creates a new threshold, clamping to the valid range.
    ///
    /// Non-finite input falls back to the default.
    #[must_use]
    pub fn new(pixels: f32) -> Self {
        if !pixels.is_finite() {
            return Self::default();
        }
        Self(pixels.clamp(MIN_DRAG_THRESHOLD_PX, MAX_DRAG_THRESHOLD_PX))
    }

    /// Returns the threshold in pixels.
    #[must_use]
    pub fn pixels(self) -> f32 {
        self.0
    }

    /// Returns true if `offset` is far enough from the origin to commit.
    #[must_use]
    pub fn is_exceeded_by(self, offset: f32) -> bool {
        offset.abs() > self.0
    }
}

impl Default for DragThreshold {
    fn default() -> Self {
        Self(DEFAULT_DRAG_THRESHOLD_PX)
    }
}

// =============================================================================
// DragReferenceWidth
// =============================================================================

/// Fixed width used to convert a drag offset into a track percentage.
///
/// The track transform divides by this constant, not by the rendered width,
/// so a drag of `reference` pixels always moves the track by exactly one item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragReferenceWidth(f32);

impl DragReferenceWidth {
    /// Creates a new reference width, clamping to the valid range.
    ///
    /// Non-finite input falls back to the default.
    #[must_use]
    pub fn new(pixels: f32) -> Self {
        if !pixels.is_finite() {
            return Self::default();
        }
        Self(pixels.clamp(MIN_DRAG_REFERENCE_WIDTH_PX, MAX_DRAG_REFERENCE_WIDTH_PX))
    }

    /// Returns the width in pixels.
    #[must_use]
    pub fn pixels(self) -> f32 {
        self.0
    }
}

impl Default for DragReferenceWidth {
    fn default() -> Self {
        Self(DEFAULT_DRAG_REFERENCE_WIDTH_PX)
    }
}
