// SPDX-License-Identifier: MPL-2.0
//! Demo application hosting one carousel in a window.
//!
//! The `App` owns the engine and is its only host: it converts wall-clock
//! instants into engine time, forwards widget and subscription messages, and
//! reports engine outputs through `tracing`.

mod message;
mod subscription;

pub use message::{Flags, Message};

use crate::engine::{self, Carousel, CarouselOptions, Output};
use crate::ui;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

const APP_NAME: &str = "IcedCarousel";

pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 320;
pub const MIN_WINDOW_WIDTH: u32 = 400;

/// Root Iced application state.
pub struct App {
    carousel: Carousel,
    mounted_at: Instant,
    /// Number of committed slide changes, for the title bar.
    slide_changes: u64,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("items", &self.carousel.items().len())
            .field("current_index", &self.carousel.current_index())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot function; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Mounts the carousel described by `flags`.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        if let Some(warning) = &flags.config_warning {
            tracing::warn!(warning = %warning, "configuration fell back to defaults");
        }

        let items = flags.config.items();
        if items.is_empty() {
            tracing::info!("no items configured; pass image paths or set `items` in settings.toml");
        }
        let options = CarouselOptions::from(&flags.config);

        let app = Self {
            carousel: Carousel::new(items, options),
            mounted_at: Instant::now(),
            slide_changes: 0,
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        let total = self.carousel.items().len();
        match self
            .carousel
            .current_index()
            .and_then(|index| self.carousel.items().get(index).map(|item| (index, item)))
        {
            Some((index, item)) => {
                format!("{} ({} / {total}) - {APP_NAME}", item.alt, index + 1)
            }
            None => APP_NAME.to_string(),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_tick_subscription(&self.carousel),
            subscription::create_frame_subscription(&self.carousel),
            subscription::create_event_subscription(&self.carousel),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Carousel(msg) => {
                // Focus follows the last press: the viewport takes it away
                // from the indicator, a segment gives it back.
                match msg {
                    engine::Message::DragStarted(_) => {
                        self.carousel
                            .update(engine::Message::IndicatorFocused(false));
                    }
                    engine::Message::IndicatorPressed(_) => {
                        self.carousel
                            .update(engine::Message::IndicatorFocused(true));
                    }
                    _ => {}
                }
                let outputs = self.carousel.update(msg);
                self.report(outputs);
            }
            Message::Tick(now) => {
                self.advance_to(now);
            }
            Message::Frame(now) => {
                self.advance_to(now);
                let outputs = self.carousel.update(engine::Message::Frame);
                self.report(outputs);
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        ui::carousel::view(&self.carousel).map(Message::Carousel)
    }

    fn advance_to(&mut self, now: Instant) {
        let elapsed = now.saturating_duration_since(self.mounted_at);
        let outputs = self.carousel.update(engine::Message::Tick(elapsed));
        self.report(outputs);
    }

    fn report(&mut self, outputs: Vec<Output>) {
        for output in outputs {
            match output {
                Output::SlideChanged(index) => {
                    self.slide_changes += 1;
                    tracing::info!(index, "slide changed");
                }
                Output::TransitionStarted(started) => {
                    tracing::trace!(from = started.from, to = started.to, "transition started");
                }
                Output::TransitionCompleted(completed) => {
                    tracing::trace!(index = completed.index, "transition completed");
                }
            }
        }
    }

    /// Committed slide changes since launch.
    pub fn slide_changes(&self) -> u64 {
        self.slide_changes
    }
}
