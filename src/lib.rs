// SPDX-License-Identifier: MPL-2.0
//! `iced_carousel` is a sequential media navigation engine rendered with the
//! Iced GUI framework.
//!
//! The [`engine`] drives index arithmetic, swipe gestures, autoplay timers,
//! slide and layered transitions, and indicator models on a virtual clock.
//! The [`ui`] layer paints that state and turns pointer and keyboard input
//! into engine messages, and [`app`] hosts one carousel in a window.

#![doc(html_root_url = "https://docs.rs/iced_carousel/0.1.0")]

pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod ui;
