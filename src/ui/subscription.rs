// SPDX-License-Identifier: MPL-2.0
//! Native event routing for the carousel.
//!
//! Pointer moves and releases are only listened for while a drag holds a
//! capture on the engine's [`ListenerRegistry`](crate::engine::ListenerRegistry),
//! so the global listener exists exactly as long as the drag.

use crate::engine::{ArrowKey, Carousel, Message};
use iced::{event, keyboard, mouse, window, Subscription};

/// Event subscriptions for `carousel`.
pub fn subscription(carousel: &Carousel) -> Subscription<Message> {
    if carousel.is_disposed() {
        return Subscription::none();
    }

    let capture = if carousel.listeners().active() > 0 {
        event::listen_with(pointer_capture)
    } else {
        Subscription::none()
    };

    let keys = if carousel.indicator().is_some() {
        event::listen_with(indicator_keys)
    } else {
        Subscription::none()
    };

    Subscription::batch([capture, keys])
}

fn pointer_capture(
    event: iced::Event,
    _status: event::Status,
    _window: window::Id,
) -> Option<Message> {
    match event {
        iced::Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::DragMoved(position.x))
        }
        iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            Some(Message::DragEnded)
        }
        iced::Event::Mouse(mouse::Event::CursorLeft)
        | iced::Event::Window(window::Event::Unfocused) => Some(Message::PointerLeft),
        _ => None,
    }
}

fn indicator_keys(
    event: iced::Event,
    status: event::Status,
    _window: window::Id,
) -> Option<Message> {
    if status == event::Status::Captured {
        return None;
    }
    match event {
        iced::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(named),
            ..
        }) => arrow_key(named).map(Message::IndicatorKey),
        _ => None,
    }
}

fn arrow_key(named: keyboard::key::Named) -> Option<ArrowKey> {
    match named {
        keyboard::key::Named::ArrowLeft => Some(ArrowKey::Left),
        keyboard::key::Named::ArrowRight => Some(ArrowKey::Right),
        keyboard::key::Named::ArrowUp => Some(ArrowKey::Up),
        keyboard::key::Named::ArrowDown => Some(ArrowKey::Down),
        _ => None,
    }
}
