// SPDX-License-Identifier: MPL-2.0
//! Canvas that paints the mounted items.
//!
//! Layered transitions draw each [`LayerVisual`] with its pose applied; the
//! slide track draws every item side by side, shifted by the track offset.
//! The canvas also reports pointer presses so the engine can start a drag.
//! Moves and releases after that arrive through the pointer capture
//! subscription, not through this widget.

use crate::domain::Item;
use crate::engine::{LayerVisual, Message};
use iced::widget::canvas::{self, Canvas, Frame, Geometry};
use iced::widget::{image, Action};
use iced::{mouse, Element, Length, Point, Rectangle, Renderer, Size, Theme};

/// What the canvas draws.
#[derive(Debug, Clone)]
pub enum Scene {
    /// Stacked layers, bottom first.
    Layers(Vec<(image::Handle, LayerVisual)>),
    /// Every item on one horizontal track.
    Track {
        items: Vec<image::Handle>,
        offset_percent: f32,
    },
}

impl Scene {
    /// Builds the layered scene for `layers`, skipping indices with no item.
    #[must_use]
    pub fn layers(items: &[Item], layers: Vec<LayerVisual>) -> Self {
        Self::Layers(
            layers
                .into_iter()
                .filter_map(|layer| {
                    items
                        .get(layer.index)
                        .map(|item| (handle(item), layer))
                })
                .collect(),
        )
    }

    #[must_use]
    pub fn track(items: &[Item], offset_percent: f32) -> Self {
        Self::Track {
            items: items.iter().map(handle).collect(),
            offset_percent,
        }
    }
}

fn handle(item: &Item) -> image::Handle {
    image::Handle::from_path(&item.src)
}

#[derive(Debug, Clone)]
pub struct Viewport {
    scene: Scene,
    pressable: bool,
}

impl Viewport {
    #[must_use]
    pub fn new(scene: Scene) -> Self {
        Self {
            scene,
            pressable: true,
        }
    }

    /// Disables drag start (e.g. with fewer than two items).
    #[must_use]
    pub fn pressable(mut self, pressable: bool) -> Self {
        self.pressable = pressable;
        self
    }

    pub fn into_element<'a>(self) -> Element<'a, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

impl canvas::Program<Message> for Viewport {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        if !self.pressable {
            return None;
        }
        match event {
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                // Window coordinates, to match the capture subscription.
                cursor.position_over(bounds).map(|position| {
                    Action::publish(Message::DragStarted(position.x)).and_capture()
                })
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let size = bounds.size();

        match &self.scene {
            Scene::Layers(layers) => {
                for (handle, layer) in layers {
                    draw_layer(&mut frame, size, handle, layer);
                }
            }
            Scene::Track {
                items,
                offset_percent,
            } => {
                #[allow(clippy::cast_precision_loss)]
                let track_width = size.width * items.len() as f32;
                let origin = offset_percent / 100.0 * track_width;
                for (index, handle) in items.iter().enumerate() {
                    #[allow(clippy::cast_precision_loss)]
                    let x = origin + index as f32 * size.width;
                    if x + size.width <= 0.0 || x >= size.width {
                        continue;
                    }
                    frame.draw_image(
                        Rectangle::new(Point::new(x, 0.0), size),
                        canvas::Image::new(handle.clone()),
                    );
                }
            }
        }

        vec![frame.into_geometry()]
    }
}

/// Paints one layer. Scale is applied around the center, the reveal clips
/// from the leading edge, and the flip is projected as a horizontal squeeze.
fn draw_layer(frame: &mut Frame, size: Size, handle: &image::Handle, layer: &LayerVisual) {
    if layer.opacity <= 0.0 || layer.reveal_percent <= 0.0 {
        return;
    }

    let squeeze = layer.rotate_y_degrees.to_radians().cos().abs();
    let width = size.width * layer.scale * squeeze;
    let height = size.height * layer.scale;
    let x = (size.width - width) / 2.0 + layer.translate_x_percent / 100.0 * size.width;
    let y = (size.height - height) / 2.0;
    let target = Rectangle::new(Point::new(x, y), Size::new(width, height));
    let image = canvas::Image::new(handle.clone()).opacity(layer.opacity);

    if layer.reveal_percent >= 100.0 {
        frame.draw_image(target, image);
    } else {
        let clip = Rectangle::new(
            Point::ORIGIN,
            Size::new(size.width * layer.reveal_percent / 100.0, size.height),
        );
        frame.with_clip(clip, |frame| {
            frame.draw_image(target, image);
        });
    }
}
