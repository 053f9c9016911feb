// SPDX-License-Identifier: MPL-2.0
//! Iced rendering of the navigation engine.
//!
//! Views take the engine state down and send [`crate::engine::Message`]s up;
//! nothing here mutates navigation state directly.
//!
//! - [`carousel`] - Full carousel view (viewport, caption, arrows, indicator)
//! - [`viewport`] - Canvas painting the mounted items
//! - [`indicator`] - Dot, line, dash, fraction and progress indicators
//! - [`subscription`] - Pointer capture and indicator keyboard routing
//! - [`styles`] - Centralized styling
//! - [`design_tokens`] - Design system constants

pub mod carousel;
pub mod design_tokens;
pub mod indicator;
pub mod styles;
pub mod subscription;
pub mod viewport;
