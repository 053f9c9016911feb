// SPDX-License-Identifier: MPL-2.0
//! Domain layer - value objects shared by the engine and its hosts.
//!
//! This module contains pure domain types and validation rules. Beyond
//! `std` it only uses `serde` so the same types can appear in configuration.
//!
//! # Modules
//!
//! - [`item`]: Item model ([`Item`], [`ItemSpec`]) and plain-string normalization
//! - [`kinds`]: Shared enums ([`Direction`], [`TransitionKind`],
//!   [`CarouselTransition`], [`IndicatorKind`], [`IndicatorPosition`])
//! - [`newtypes`]: Clamped values ([`AutoplayInterval`], [`TransitionDuration`],
//!   [`DragThreshold`], [`DragReferenceWidth`])

pub mod item;
pub mod kinds;
pub mod newtypes;

pub use item::{Item, ItemSpec};
pub use kinds::{
    CarouselTransition, Direction, IndicatorKind, IndicatorPosition, Orientation, TransitionKind,
};
pub use newtypes::{AutoplayInterval, DragReferenceWidth, DragThreshold, TransitionDuration};
