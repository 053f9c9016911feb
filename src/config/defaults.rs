// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the engine and the demo application. Constants are organized
//! by category.
//!
//! # Categories
//!
//! - **Transition**: Duration of index-change animations
//! - **Autoplay**: Interval between automatic advances
//! - **Gesture**: Drag commit threshold and slide reference width
//! - **Frame**: Host tick cadence

// ==========================================================================
// Transition Defaults
// ==========================================================================

/// Default transition duration for the carousel (in milliseconds).
pub const DEFAULT_CAROUSEL_TRANSITION_MS: u64 = 500;

/// Default transition duration for the standalone image transition (in milliseconds).
pub const DEFAULT_IMAGE_TRANSITION_MS: u64 = 300;

/// Minimum transition duration (in milliseconds).
pub const MIN_TRANSITION_MS: u64 = 50;

/// Maximum transition duration (in milliseconds).
pub const MAX_TRANSITION_MS: u64 = 5_000;

// ==========================================================================
// Autoplay Defaults
// ==========================================================================

/// Default interval between autoplay advances (in milliseconds).
pub const DEFAULT_AUTOPLAY_INTERVAL_MS: u64 = 5_000;

/// Minimum autoplay interval (in milliseconds).
pub const MIN_AUTOPLAY_INTERVAL_MS: u64 = 100;

/// Maximum autoplay interval (in milliseconds).
pub const MAX_AUTOPLAY_INTERVAL_MS: u64 = 600_000;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Minimum horizontal drag distance that commits a navigation (in pixels).
pub const DEFAULT_DRAG_THRESHOLD_PX: f32 = 50.0;

/// Smallest accepted drag threshold (in pixels).
pub const MIN_DRAG_THRESHOLD_PX: f32 = 1.0;

/// Largest accepted drag threshold (in pixels).
pub const MAX_DRAG_THRESHOLD_PX: f32 = 1_000.0;

/// Fixed width used to convert drag pixels into track percent.
///
/// This is not the rendered width of the carousel.
pub const DEFAULT_DRAG_REFERENCE_WIDTH_PX: f32 = 300.0;

/// Smallest accepted drag reference width (in pixels).
pub const MIN_DRAG_REFERENCE_WIDTH_PX: f32 = 10.0;

/// Largest accepted drag reference width (in pixels).
pub const MAX_DRAG_REFERENCE_WIDTH_PX: f32 = 10_000.0;

// ==========================================================================
// Frame Defaults
// ==========================================================================

/// Host tick period used to drive the engine clock (~60 FPS).
pub const TICK_INTERVAL_MS: u64 = 16;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Transition validation
    assert!(MIN_TRANSITION_MS > 0);
    assert!(MAX_TRANSITION_MS >= MIN_TRANSITION_MS);
    assert!(DEFAULT_CAROUSEL_TRANSITION_MS >= MIN_TRANSITION_MS);
    assert!(DEFAULT_CAROUSEL_TRANSITION_MS <= MAX_TRANSITION_MS);
    assert!(DEFAULT_IMAGE_TRANSITION_MS >= MIN_TRANSITION_MS);
    assert!(DEFAULT_IMAGE_TRANSITION_MS <= MAX_TRANSITION_MS);

    // Autoplay validation
    assert!(MIN_AUTOPLAY_INTERVAL_MS > 0);
    assert!(MAX_AUTOPLAY_INTERVAL_MS >= MIN_AUTOPLAY_INTERVAL_MS);
    assert!(DEFAULT_AUTOPLAY_INTERVAL_MS >= MIN_AUTOPLAY_INTERVAL_MS);
    assert!(DEFAULT_AUTOPLAY_INTERVAL_MS <= MAX_AUTOPLAY_INTERVAL_MS);

    // Gesture validation
    assert!(MIN_DRAG_THRESHOLD_PX > 0.0);
    assert!(MAX_DRAG_THRESHOLD_PX >= MIN_DRAG_THRESHOLD_PX);
    assert!(DEFAULT_DRAG_THRESHOLD_PX >= MIN_DRAG_THRESHOLD_PX);
    assert!(DEFAULT_DRAG_THRESHOLD_PX <= MAX_DRAG_THRESHOLD_PX);
    assert!(MIN_DRAG_REFERENCE_WIDTH_PX > 0.0);
    assert!(DEFAULT_DRAG_REFERENCE_WIDTH_PX >= MIN_DRAG_REFERENCE_WIDTH_PX);
    assert!(DEFAULT_DRAG_REFERENCE_WIDTH_PX <= MAX_DRAG_REFERENCE_WIDTH_PX);

    // Frame validation
    assert!(TICK_INTERVAL_MS > 0);
    assert!(TICK_INTERVAL_MS < MIN_TRANSITION_MS);
};
