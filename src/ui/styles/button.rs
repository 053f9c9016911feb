// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Round overlay button used for the previous/next arrows.
///
/// Disabled arrows stay visible but dimmed so the layout does not shift at a
/// non-looping boundary.
pub fn arrow(_theme: &Theme, status: button::Status) -> button::Style {
    let (alpha, text_color) = match status {
        button::Status::Hovered => (opacity::OVERLAY_HOVER, WHITE),
        button::Status::Pressed => (opacity::OVERLAY_PRESSED, WHITE),
        button::Status::Disabled => (opacity::OVERLAY_SUBTLE, palette::GRAY_400),
        button::Status::Active => (opacity::OVERLAY_MEDIUM, WHITE),
    };

    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..BLACK })),
        text_color,
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        shadow: if status == button::Status::Disabled {
            shadow::NONE
        } else {
            shadow::MD
        },
        snap: true,
    }
}

/// Transparent hit area around an indicator segment.
pub fn segment(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: WHITE,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}
