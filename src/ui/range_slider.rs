use iced::mouse::{self, Cursor};
use iced::widget::canvas::{self, Path, Program, Stroke};
use iced::{Color, Point, Rectangle, Renderer, Theme};

use crate::state::price::{PriceRange, SliderBounds, Thumb};
use crate::Message;

/// Radius of a thumb; also the horizontal inset of the track
const THUMB_RADIUS: f32 = 8.0;
const TRACK_WIDTH: f32 = 4.0;

const TRACK_COLOR: Color = Color::from_rgb(0.80, 0.80, 0.84);
const ACTIVE_COLOR: Color = Color::from_rgb(0.10, 0.46, 0.82);

/// Two-thumb price slider drawn on a canvas
///
/// The widget only reports which thumb moved and where; clamping is left to
/// the `PriceSlider` controller.
pub struct RangeSlider {
    pub range: PriceRange,
    pub bounds: SliderBounds,
}

impl RangeSlider {
    /// Map a horizontal offset inside the widget to a slider value
    fn value_at(&self, x: f32, width: f32) -> f64 {
        let track = (width - 2.0 * THUMB_RADIUS).max(1.0);
        let t = ((x - THUMB_RADIUS) / track).clamp(0.0, 1.0) as f64;
        self.bounds.min + t * (self.bounds.max - self.bounds.min)
    }

    /// Map a slider value to a horizontal offset inside the widget
    fn x_of(&self, value: f64, width: f32) -> f32 {
        let span = self.bounds.max - self.bounds.min;
        let t = if span > 0.0 {
            ((value - self.bounds.min) / span).clamp(0.0, 1.0)
        } else {
            0.0
        };
        THUMB_RADIUS + t as f32 * (width - 2.0 * THUMB_RADIUS).max(0.0)
    }

    /// The thumb a press at `value` should grab
    fn nearest_thumb(&self, value: f64) -> Thumb {
        let to_low = (value - self.range.low).abs();
        let to_high = (value - self.range.high).abs();
        if to_high < to_low || (to_high == to_low && value > self.range.high) {
            Thumb::High
        } else {
            Thumb::Low
        }
    }
}

impl Program<Message> for RangeSlider {
    type State = DragState;

    fn draw(
        &self,
        state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let mid_y = bounds.height / 2.0;
        let width = bounds.width;

        let rail = Path::line(
            Point::new(THUMB_RADIUS, mid_y),
            Point::new(width - THUMB_RADIUS, mid_y),
        );
        frame.stroke(&rail, Stroke::default().with_color(TRACK_COLOR).with_width(TRACK_WIDTH));

        let low_x = self.x_of(self.range.low, width);
        let high_x = self.x_of(self.range.high, width);

        let selected = Path::line(Point::new(low_x, mid_y), Point::new(high_x, mid_y));
        frame.stroke(&selected, Stroke::default().with_color(ACTIVE_COLOR).with_width(TRACK_WIDTH));

        for (thumb, x) in [(Thumb::Low, low_x), (Thumb::High, high_x)] {
            // Grabbed thumb is drawn slightly larger
            let radius = if state.active == Some(thumb) {
                THUMB_RADIUS
            } else {
                THUMB_RADIUS - 1.5
            };
            frame.fill(&Path::circle(Point::new(x, mid_y), radius), ACTIVE_COLOR);
        }

        vec![frame.into_geometry()]
    }

    fn update(
        &self,
        state: &mut Self::State,
        event: canvas::Event,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> (canvas::event::Status, Option<Message>) {
        match event {
            // Press on the track grabs the nearest thumb and jumps it there
            canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if let Some(pos) = cursor.position_in(bounds) {
                    let value = self.value_at(pos.x, bounds.width);
                    let thumb = self.nearest_thumb(value);
                    state.active = Some(thumb);
                    return (
                        canvas::event::Status::Captured,
                        Some(Message::PriceDragged(thumb, value)),
                    );
                }
            }

            canvas::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                if state.active.take().is_some() {
                    return (canvas::event::Status::Captured, None);
                }
            }

            // Keep tracking while dragging even if the cursor leaves the widget
            canvas::Event::Mouse(mouse::Event::CursorMoved { position }) => {
                if let Some(thumb) = state.active {
                    let value = self.value_at(position.x - bounds.x, bounds.width);
                    return (
                        canvas::event::Status::Captured,
                        Some(Message::PriceDragged(thumb, value)),
                    );
                }
            }

            _ => {}
        }

        (canvas::event::Status::Ignored, None)
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> mouse::Interaction {
        if state.active.is_some() {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(bounds) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}

/// State for drag interactions
#[derive(Debug, Clone, Default)]
pub struct DragState {
    /// Thumb currently held by the mouse
    pub active: Option<Thumb>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slider(low: f64, high: f64) -> RangeSlider {
        RangeSlider {
            range: PriceRange::new(low, high),
            bounds: SliderBounds::default(),
        }
    }

    #[test]
    fn test_value_mapping_endpoints() {
        let s = slider(0.0, 200.0);
        let width = 216.0;
        assert_eq!(s.value_at(THUMB_RADIUS, width), 0.0);
        assert_eq!(s.value_at(width - THUMB_RADIUS, width), 200.0);
        // past the ends clamps
        assert_eq!(s.value_at(-30.0, width), 0.0);
        assert_eq!(s.value_at(500.0, width), 200.0);
        assert_eq!(s.x_of(100.0, width), 108.0);
    }

    #[test]
    fn test_nearest_thumb() {
        let s = slider(50.0, 150.0);
        assert_eq!(s.nearest_thumb(10.0), Thumb::Low);
        assert_eq!(s.nearest_thumb(140.0), Thumb::High);
        assert_eq!(s.nearest_thumb(100.0), Thumb::Low);
    }

    #[test]
    fn test_stacked_thumbs_split_by_side() {
        let s = slider(100.0, 110.0);
        assert_eq!(s.nearest_thumb(180.0), Thumb::High);
        assert_eq!(s.nearest_thumb(20.0), Thumb::Low);
    }
}
