//! Low-level drawing primitives shared by the clock and grid widgets.
//!
//! Geometry arrives as sub-pixel [`Vec2`] values and is snapped to the pixel
//! grid here. Draw results are discarded with `.ok()`: the framebuffer
//! targets used by the widgets cannot fail.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{
    Circle, Line, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, RoundedRectangle, StrokeAlignment, Triangle,
};

use crate::face::Vec2;

/// Fill the whole target with one color.
pub fn fill_canvas<D>(display: &mut D, color: Rgb888)
where
    D: DrawTarget<Color = Rgb888> + OriginDimensions,
{
    Rectangle::new(Point::zero(), display.size())
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();
}

/// Filled disc centered on a sub-pixel position.
pub fn fill_circle<D>(display: &mut D, center: Vec2, diameter: u32, color: Rgb888)
where
    D: DrawTarget<Color = Rgb888>,
{
    Circle::with_center(center.to_point(), diameter)
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();
}

/// Ring of `width` pixels whose stroke is centered on the given diameter.
pub fn stroke_circle<D>(display: &mut D, center: Vec2, diameter: u32, width: u32, color: Rgb888)
where
    D: DrawTarget<Color = Rgb888>,
{
    let style = PrimitiveStyleBuilder::new()
        .stroke_color(color)
        .stroke_width(width)
        .stroke_alignment(StrokeAlignment::Center)
        .build();
    Circle::with_center(center.to_point(), diameter).into_styled(style).draw(display).ok();
}

/// Straight segment with the given stroke width.
pub fn stroke_line<D>(display: &mut D, from: Vec2, to: Vec2, width: u32, color: Rgb888)
where
    D: DrawTarget<Color = Rgb888>,
{
    Line::new(from.to_point(), to.to_point())
        .into_styled(PrimitiveStyle::with_stroke(color, width))
        .draw(display)
        .ok();
}

/// Filled convex quadrilateral, corners in order around the outline.
///
/// embedded-graphics has no general polygon fill, so the quad is split along
/// the `corners[0]`-`corners[2]` diagonal into two triangles.
pub fn fill_quad<D>(display: &mut D, corners: &[Vec2; 4], color: Rgb888)
where
    D: DrawTarget<Color = Rgb888>,
{
    let [a, b, c, d] = corners.map(Vec2::to_point);
    let style = PrimitiveStyle::with_fill(color);
    Triangle::new(a, b, c).into_styled(style).draw(display).ok();
    Triangle::new(a, c, d).into_styled(style).draw(display).ok();
}

/// Filled square with equal rounded corners.
pub fn fill_rounded_square<D>(display: &mut D, top_left: Point, side: u32, radius: u32, color: Rgb888)
where
    D: DrawTarget<Color = Rgb888>,
{
    RoundedRectangle::with_equal_corners(
        Rectangle::new(top_left, Size::new(side, side)),
        Size::new(radius, radius),
    )
    .into_styled(PrimitiveStyle::with_fill(color))
    .draw(display)
    .ok();
}
