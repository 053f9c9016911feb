// SPDX-License-Identifier: MPL-2.0
//! Carousel view.
//!
//! Stacks, bottom to top: the item viewport, the alt-text caption, the arrow
//! zones, and the position indicator. The whole stack reports hover so
//! autoplay can pause while the pointer is over it.

use crate::domain::{CarouselTransition, IndicatorPosition};
use crate::engine::{Carousel, Message};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::indicator;
use crate::ui::styles;
use crate::ui::viewport::{Scene, Viewport};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, mouse_area, text, Container, Space, Stack, Text};
use iced::{Element, Length};

/// Renders `carousel`. An empty carousel renders nothing.
pub fn view(carousel: &Carousel) -> Element<'_, Message> {
    if carousel.is_empty() {
        return Space::new().into();
    }

    let scene = match carousel.options().transition {
        CarouselTransition::Slide => {
            Scene::track(carousel.items(), carousel.rendered_track_offset_percent())
        }
        CarouselTransition::Fade => Scene::layers(carousel.items(), carousel.layers()),
    };
    let viewport = Container::new(
        Viewport::new(scene)
            .pressable(carousel.items().len() > 1)
            .into_element(),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .clip(true)
    .style(styles::container::viewport);

    let mut stack = Stack::new().push(viewport);

    if let Some(item) = carousel.current_index().and_then(|i| carousel.items().get(i)) {
        let caption = Container::new(text(item.alt.as_str()).size(typography::CAPTION))
            .padding([spacing::XXS, spacing::XS])
            .style(styles::container::label(false));
        stack = stack.push(
            Container::new(caption)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::MD)
                .align_x(Horizontal::Left)
                .align_y(Vertical::Top),
        );
    }

    if let Some(arrows) = carousel.arrows() {
        stack = stack
            .push(arrow_zone(
                "◀",
                arrows.previous_enabled.then_some(Message::Previous),
                Horizontal::Left,
            ))
            .push(arrow_zone(
                "▶",
                arrows.next_enabled.then_some(Message::Next),
                Horizontal::Right,
            ));
    }

    if let (Some(form), Some(binding)) = (carousel.indicator_form(), carousel.indicator()) {
        let (align_x, align_y) = match binding.position() {
            IndicatorPosition::Top => (Horizontal::Center, Vertical::Top),
            IndicatorPosition::Bottom => (Horizontal::Center, Vertical::Bottom),
            IndicatorPosition::Left => (Horizontal::Left, Vertical::Center),
            IndicatorPosition::Right => (Horizontal::Right, Vertical::Center),
        };
        let content = indicator::view(
            form,
            binding.orientation(),
            carousel.is_indicator_focused(),
        );
        stack = stack.push(
            Container::new(content)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::MD)
                .align_x(align_x)
                .align_y(align_y),
        );
    }

    mouse_area(stack)
        .on_enter(Message::HoverEntered)
        .on_exit(Message::HoverExited)
        .into()
}

fn arrow_zone<'a>(
    glyph: &'a str,
    on_press: Option<Message>,
    align_x: Horizontal,
) -> Element<'a, Message> {
    let arrow = button(
        Container::new(Text::new(glyph).size(typography::ARROW))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center),
    )
    .width(Length::Fixed(sizing::ARROW_BUTTON))
    .height(Length::Fixed(sizing::ARROW_BUTTON))
    .padding(0)
    .style(styles::button::arrow)
    .on_press_maybe(on_press);

    Container::new(arrow)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_x(align_x)
        .align_y(Vertical::Center)
        .into()
}
