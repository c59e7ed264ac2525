//! Analog clock face rendering.
//!
//! Layers are painted back to front:
//! 1. Background fill
//! 2. Inner tint disc (optional)
//! 3. Bezel ring (optional)
//! 4. 12 tick marks
//! 5. Hour hand, then minute hand
//! 6. Pivot dot (with optional inner dot for the halo look)

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;

use crate::config::{ClockStyle, HandShape, HandStyle};
use crate::face::{ClockFace, Vec2, point_at, slab_outline};
use crate::widgets::primitives::{fill_canvas, fill_circle, fill_quad, stroke_circle, stroke_line};

/// Bezel ring thickness and its distance inside the rim.
const BEZEL_WIDTH: u32 = 2;

/// Draw a complete face for `hour:minute` and return the computed geometry.
pub fn draw_clock<D>(display: &mut D, style: &ClockStyle, hour: u32, minute: u32) -> ClockFace
where
    D: DrawTarget<Color = Rgb888> + OriginDimensions,
{
    let face = ClockFace::new(style, hour, minute);
    log::debug!(
        "clock '{}' {hour:02}:{minute:02}: hour {:.1} deg, minute {:.1} deg",
        style.name,
        face.hour_angle.to_degrees(),
        face.minute_angle.to_degrees()
    );

    fill_canvas(display, style.background);

    if let Some((color, fraction)) = style.inner_tint {
        let diameter = (2.0 * face.radius * fraction).round() as u32;
        fill_circle(display, face.center, diameter, color);
    }

    if let Some(color) = style.bezel {
        let diameter = (2.0 * (face.radius - BEZEL_WIDTH as f32)).round() as u32;
        stroke_circle(display, face.center, diameter, BEZEL_WIDTH, color);
    }

    for tick in &face.ticks {
        let (inner, outer) = face.tick_segment(tick, style.ticks.inset);
        stroke_line(display, inner, outer, tick.width, tick.color);
    }

    draw_hand(display, &face, face.hour_angle, &style.hour_hand, style.hand_shape);
    draw_hand(display, &face, face.minute_angle, &style.minute_hand, style.hand_shape);

    fill_circle(display, face.center, style.pivot.diameter, style.pivot.color);
    if let Some((color, diameter)) = style.pivot.inner {
        fill_circle(display, face.center, diameter, color);
    }

    face
}

fn draw_hand<D>(display: &mut D, face: &ClockFace, angle: f32, hand: &HandStyle, shape: HandShape)
where
    D: DrawTarget<Color = Rgb888>,
{
    let length = face.radius * hand.length;
    match shape {
        HandShape::Line => {
            let tip = point_at(face.center, length, angle);
            stroke_line(display, face.center, tip, hand.width, hand.color);
            fill_circle(display, tip, hand.width, hand.color);
        }
        HandShape::Slab => draw_slab_hand(display, face.center, angle, length, hand),
    }
}

fn draw_slab_hand<D>(display: &mut D, center: Vec2, angle: f32, length: f32, hand: &HandStyle)
where
    D: DrawTarget<Color = Rgb888>,
{
    let slab = slab_outline(center, angle, length, hand.width as f32);
    fill_quad(display, &slab.corners, hand.color);
    fill_circle(display, slab.tip, hand.width, hand.color);
    fill_circle(display, slab.back, hand.width, hand.color);
}
