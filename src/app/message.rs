// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::config::CarouselConfig;
use crate::engine;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Forwarded to the carousel engine.
    Carousel(engine::Message),
    /// Clock tick while timers are pending.
    Tick(Instant),
    /// A frame was presented while a transition waits for one.
    Frame(Instant),
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Effective configuration (file + command-line overrides).
    pub config: CarouselConfig,
    /// Warning key from loading the config file, if any.
    pub config_warning: Option<String>,
}
