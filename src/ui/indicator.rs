// SPDX-License-Identifier: MPL-2.0
//! Position indicator view.
//!
//! Renders an [`IndicatorForm`]: clickable segments for dot, line and dash,
//! a `current / total` label for fraction, and a filled bar for progress.

use crate::domain::{IndicatorKind, Orientation};
use crate::engine::{IndicatorForm, Message, Segment};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, mouse_area, text, Column, Container, Row, Space, Stack};
use iced::{Element, Length};

/// Builds the indicator, or an empty space for [`IndicatorForm::Hidden`].
pub fn view<'a>(
    form: IndicatorForm,
    orientation: Orientation,
    focused: bool,
) -> Element<'a, Message> {
    let content: Element<'a, Message> = match form {
        IndicatorForm::Hidden => return Space::new().into(),
        IndicatorForm::Segments { kind, segments } => {
            segments_view(kind, &segments, orientation)
        }
        IndicatorForm::Fraction { position, total } => {
            text(format!("{position} / {total}"))
                .size(typography::BODY)
                .into()
        }
        IndicatorForm::Progress { ratio } => progress_view(ratio, orientation),
    };

    let framed = Container::new(content)
        .padding(spacing::XS)
        .style(styles::container::label(focused));

    // Pressing the indicator gives it keyboard focus.
    mouse_area(framed)
        .on_press(Message::IndicatorFocused(true))
        .into()
}

fn segments_view<'a>(
    kind: IndicatorKind,
    segments: &[Segment],
    orientation: Orientation,
) -> Element<'a, Message> {
    let marks = segments.iter().map(|segment| segment_view(kind, *segment, orientation));
    match orientation {
        Orientation::Horizontal => Row::with_children(marks)
            .spacing(spacing::XXS)
            .align_y(Vertical::Center)
            .into(),
        Orientation::Vertical => Column::with_children(marks)
            .spacing(spacing::XXS)
            .align_x(Horizontal::Center)
            .into(),
    }
}

fn segment_view<'a>(
    kind: IndicatorKind,
    segment: Segment,
    orientation: Orientation,
) -> Element<'a, Message> {
    let (along, across) = match kind {
        IndicatorKind::Line => (sizing::LINE_LENGTH, sizing::SEGMENT_THICKNESS),
        IndicatorKind::Dash => (sizing::DASH_LENGTH, sizing::SEGMENT_THICKNESS),
        _ => (sizing::DOT, sizing::DOT),
    };
    let (width, height) = match orientation {
        Orientation::Horizontal => (along, across),
        Orientation::Vertical => (across, along),
    };

    let mark = Container::new(Space::new().width(width).height(height))
        .style(styles::container::segment(segment.is_active));

    let hit = Container::new(mark)
        .width(Length::Fixed(sizing::SEGMENT_HIT))
        .height(Length::Fixed(sizing::SEGMENT_HIT))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center);

    let target = button(hit).padding(0).style(styles::button::segment);
    if segment.is_clickable {
        target
            .on_press(Message::IndicatorPressed(segment.index))
            .into()
    } else {
        target.into()
    }
}

fn progress_view<'a>(ratio: f32, orientation: Orientation) -> Element<'a, Message> {
    let filled = sizing::PROGRESS_LENGTH * ratio.clamp(0.0, 1.0);
    let (track_size, fill_size) = match orientation {
        Orientation::Horizontal => (
            (sizing::PROGRESS_LENGTH, sizing::PROGRESS_THICKNESS),
            (filled, sizing::PROGRESS_THICKNESS),
        ),
        Orientation::Vertical => (
            (sizing::PROGRESS_THICKNESS, sizing::PROGRESS_LENGTH),
            (sizing::PROGRESS_THICKNESS, filled),
        ),
    };

    let track = Container::new(Space::new().width(track_size.0).height(track_size.1))
        .style(styles::container::progress_track);
    let fill = Container::new(Space::new().width(fill_size.0).height(fill_size.1))
        .style(styles::container::progress_fill);

    Stack::new().push(track).push(fill).into()
}
