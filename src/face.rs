//! Analog clock geometry.
//!
//! Everything here is pure math over `f32` screen coordinates: hand angles
//! from the time of day, tick descriptors, and the outline of a slab hand.
//! Drawing lives in [`crate::widgets`].
//!
//! # Angle Convention
//!
//! Angles are radians with 0 pointing right. Screen Y grows downward, so the
//! plain `cos`/`sin` projection already rotates clockwise on screen:
//!
//! ```text
//!              -pi/2 (12)
//!                  |
//!      pi (9) -----+----- 0 (3)
//!                  |
//!              pi/2 (6)
//! ```

use core::f32::consts::{FRAC_PI_2, TAU};

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::Point;

use crate::config::ClockStyle;

/// Number of tick marks on the dial.
pub const TICK_COUNT: usize = 12;

/// Every `MAJOR_TICK_STEP`-th tick (12, 3, 6, 9) is a major tick.
pub const MAJOR_TICK_STEP: usize = 3;

/// Angle of the 12 o'clock position.
pub const TWELVE_O_CLOCK: f32 = -FRAC_PI_2;

// =============================================================================
// Vector Helper
// =============================================================================

/// Sub-pixel screen position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self { Self { x, y } }

    /// Nearest integer pixel.
    #[inline]
    pub fn to_point(self) -> Point { Point::new(self.x.round() as i32, self.y.round() as i32) }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Self) -> f32 { (self.x - other.x).hypot(self.y - other.y) }
}

/// Project `length` along `angle` from `center`.
#[inline]
pub fn point_at(center: Vec2, length: f32, angle: f32) -> Vec2 {
    Vec2::new(center.x + length * angle.cos(), center.y + length * angle.sin())
}

// =============================================================================
// Hand Angles
// =============================================================================

/// Hour hand angle. The hour hand creeps forward with the minutes.
pub fn hour_hand_angle(hour: u32, minute: u32) -> f32 {
    let hours = (hour % 12) as f32 + minute as f32 / 60.0;
    hours / 12.0 * TAU + TWELVE_O_CLOCK
}

/// Minute hand angle.
pub fn minute_hand_angle(minute: u32) -> f32 { minute as f32 / 60.0 * TAU + TWELVE_O_CLOCK }

// =============================================================================
// Ticks
// =============================================================================

/// One tick mark on the dial.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    pub angle: f32,
    pub major: bool,
    pub length: f32,
    pub color: Rgb888,
    pub width: u32,
}

/// The 12 ticks of a face, starting at 12 o'clock and going clockwise.
pub fn ticks(style: &ClockStyle) -> [Tick; TICK_COUNT] {
    let t = &style.ticks;
    core::array::from_fn(|i| {
        let major = i % MAJOR_TICK_STEP == 0;
        Tick {
            angle: i as f32 / TICK_COUNT as f32 * TAU + TWELVE_O_CLOCK,
            major,
            length: if major { t.major_length } else { t.minor_length },
            color: if major { t.major_color } else { t.minor_color },
            width: if major { t.major_width } else { t.minor_width },
        }
    })
}

// =============================================================================
// Slab Hands
// =============================================================================

/// Filled rotated-rectangle hand.
///
/// `back` sits half a hand-width behind the center so the round back cap
/// covers the pivot cleanly; `corners` are in drawing order (a closed quad).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlabOutline {
    pub back: Vec2,
    pub tip: Vec2,
    pub corners: [Vec2; 4],
}

/// Outline of a slab hand of `width` pixels pointing along `angle`.
pub fn slab_outline(center: Vec2, angle: f32, length: f32, width: f32) -> SlabOutline {
    let (sin, cos) = angle.sin_cos();
    let half = width / 2.0;

    let back = Vec2::new(center.x - cos * half, center.y - sin * half);
    let tip = Vec2::new(center.x + cos * length, center.y + sin * length);

    // Perpendicular offset, half a width to each side
    let ux = sin * half;
    let uy = -cos * half;

    SlabOutline {
        back,
        tip,
        corners: [
            Vec2::new(back.x + ux, back.y + uy),
            Vec2::new(tip.x + ux, tip.y + uy),
            Vec2::new(tip.x - ux, tip.y - uy),
            Vec2::new(back.x - ux, back.y - uy),
        ],
    }
}

// =============================================================================
// Clock Face
// =============================================================================

/// Geometry of one rendered face. Created, drawn, discarded.
#[derive(Clone, Debug, PartialEq)]
pub struct ClockFace {
    pub center: Vec2,
    pub radius: f32,
    pub ticks: [Tick; TICK_COUNT],
    pub hour_angle: f32,
    pub minute_angle: f32,
}

impl ClockFace {
    /// Lay out a face for `hour:minute` (24h input is fine).
    pub fn new(style: &ClockStyle, hour: u32, minute: u32) -> Self {
        let width = style.width as f32;
        let height = style.height as f32;
        Self {
            center: Vec2::new(width / 2.0, height / 2.0),
            radius: width.min(height) / 2.0,
            ticks: ticks(style),
            hour_angle: hour_hand_angle(hour, minute),
            minute_angle: minute_hand_angle(minute),
        }
    }

    /// Inner and outer end of a tick, measured inward from the rim.
    pub fn tick_segment(&self, tick: &Tick, inset: f32) -> (Vec2, Vec2) {
        let outer = self.radius - inset;
        (
            point_at(self.center, outer - tick.length, tick.angle),
            point_at(self.center, outer, tick.angle),
        )
    }
}
