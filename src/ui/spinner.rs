/// Loading indicator shown while the catalog request is in flight
/// Draws a rotating arc that fades from magenta to cyan
use iced::widget::canvas::{self, path::Arc, Stroke};
use iced::{Color, Radians, Rectangle};

use crate::Message;

/// Number of arc pieces the gradient is approximated with
const SEGMENTS: usize = 24;
/// How much of the circle the arc covers
const SWEEP: f32 = 1.5 * std::f32::consts::PI;

const START_COLOR: Color = Color::from_rgb(0.878, 0.110, 0.835); // #e01cd5
const END_COLOR: Color = Color::from_rgb(0.110, 0.710, 0.878); // #1CB5E0

#[derive(Debug, Clone, Copy)]
pub struct Spinner {
    /// Current rotation in radians
    pub rotation: f32,
}

impl canvas::Program<Message> for Spinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        let stroke_width = (bounds.width.min(bounds.height) * 0.1).max(2.0);
        let radius = bounds.width.min(bounds.height) / 2.0 - stroke_width;
        if radius <= 0.0 {
            return vec![frame.into_geometry()];
        }
        let center = frame.center();
        let piece = SWEEP / SEGMENTS as f32;

        for i in 0..SEGMENTS {
            let start = self.rotation + i as f32 * piece;
            let mut builder = canvas::path::Builder::new();
            builder.arc(Arc {
                center,
                radius,
                start_angle: Radians(start),
                end_angle: Radians(start + piece),
            });

            let t = i as f32 / (SEGMENTS - 1) as f32;
            frame.stroke(
                &builder.build(),
                Stroke::default()
                    .with_color(lerp(START_COLOR, END_COLOR, t))
                    .with_width(stroke_width),
            );
        }

        vec![frame.into_geometry()]
    }
}

/// Advance the rotation by one animation tick
pub fn advance(rotation: f32) -> f32 {
    (rotation + 0.12) % std::f32::consts::TAU
}

fn lerp(a: Color, b: Color, t: f32) -> Color {
    Color::from_rgb(
        a.r + (b.r - a.r) * t,
        a.g + (b.g - a.g) * t,
        a.b + (b.b - a.b) * t,
    )
}
