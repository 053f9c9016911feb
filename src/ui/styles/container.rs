// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Viewport background behind the items.
pub fn viewport(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_900)),
        ..Default::default()
    }
}

/// Indicator segment fill; active segments use the brand color.
pub fn segment(is_active: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let color = if is_active {
            palette::PRIMARY_500
        } else {
            Color {
                a: opacity::INDICATOR_IDLE,
                ..palette::WHITE
            }
        };
        container::Style {
            background: Some(Background::Color(color)),
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Unfilled part of the progress indicator.
pub fn progress_track(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::WHITE
        })),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Filled part of the progress indicator.
pub fn progress_fill(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::PRIMARY_500)),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Pill behind the fraction indicator and caption text.
///
/// A focused indicator gets a brand-colored outline.
pub fn label(focused: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        border: Border {
            color: if focused {
                palette::PRIMARY_400
            } else {
                Color::TRANSPARENT
            },
            width: if focused { 1.0 } else { 0.0 },
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}
