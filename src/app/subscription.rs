// SPDX-License-Identifier: MPL-2.0
//! Clock and frame subscriptions for the application.

use super::Message;
use crate::config::TICK_INTERVAL_MS;
use crate::engine::Carousel;
use crate::ui;
use iced::{time, window, Subscription};
use std::time::Duration;

/// Periodic clock, active only while the engine has pending timers.
pub fn create_tick_subscription(carousel: &Carousel) -> Subscription<Message> {
    if carousel.needs_tick() {
        time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Presented-frame notifications, active only while a transition is armed.
pub fn create_frame_subscription(carousel: &Carousel) -> Subscription<Message> {
    if carousel.needs_frame() {
        window::frames().map(Message::Frame)
    } else {
        Subscription::none()
    }
}

/// Pointer capture and indicator keys.
pub fn create_event_subscription(carousel: &Carousel) -> Subscription<Message> {
    ui::subscription::subscription(carousel).map(Message::Carousel)
}
