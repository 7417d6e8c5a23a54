// SPDX-License-Identifier: MPL-2.0
//! Rotating arc drawn on a canvas, shown by the loader overlay.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::{PI, TAU};

/// Rotation added per animation tick, in radians.
pub const ROTATION_STEP: f32 = 0.12;

const ARC_SEGMENTS: u16 = 30;
const STROKE_WIDTH: f32 = 3.0;

/// Advances `rotation` by one tick, wrapping at a full turn.
#[must_use]
pub fn advance(rotation: f32) -> f32 {
    (rotation + ROTATION_STEP) % TAU
}

/// Half-circle arc rotating over a faint full circle.
pub struct Spinner {
    cache: Cache,
    rotation: f32,
    color: Color,
}

impl Spinner {
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation,
            color,
        }
    }

    pub fn into_element<Message: 'static>(self) -> Element<'static, Message> {
        Canvas::new(self)
            .width(Length::Fixed(sizing::SPINNER))
            .height(Length::Fixed(sizing::SPINNER))
            .into()
    }
}

impl<Message> canvas::Program<Message> for Spinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let radius = frame.width().min(frame.height()) / 2.0 - 4.0;

                frame.stroke(
                    &Path::circle(center, radius),
                    Stroke::default().with_width(STROKE_WIDTH).with_color(Color {
                        a: 0.25,
                        ..self.color
                    }),
                );

                // Start at 12 o'clock and sweep half a turn.
                let start = self.rotation - PI / 2.0;
                let mut arc = canvas::path::Builder::new();
                arc.move_to(Point::new(
                    center.x + radius * start.cos(),
                    center.y + radius * start.sin(),
                ));
                for i in 1..=ARC_SEGMENTS {
                    let angle = start + PI * f32::from(i) / f32::from(ARC_SEGMENTS);
                    arc.line_to(Point::new(
                        center.x + radius * angle.cos(),
                        center.y + radius * angle.sin(),
                    ));
                }

                frame.stroke(
                    &arc.build(),
                    Stroke::default()
                        .with_width(STROKE_WIDTH)
                        .with_color(self.color)
                        .with_line_cap(canvas::LineCap::Round),
                );
            });

        vec![geometry]
    }
}
