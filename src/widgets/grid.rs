//! Contribution grid rendering.
//!
//! Month labels run along the top, weekday initials down the left, and one
//! rounded cell per day fills the rest. A cell is highlighted when its date
//! key is marked in the store; every other cell uses the single empty color.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;

use crate::calendar::{DAY_LABELS, GridGeometry, MonthLabel, date_key};
use crate::config::GridConfig;
use crate::store::Contributions;
use crate::styles::{LABEL_FONT, TOP_LEFT};
use crate::widgets::primitives::{fill_canvas, fill_rounded_square};

/// Top-left corner of the cell at (`week`, `day`).
pub fn cell_origin(config: &GridConfig, week: u32, day: u32) -> Point {
    Point::new(
        (config.left_margin + week * config.pitch()) as i32,
        (config.month_label_height + day * config.pitch()) as i32,
    )
}

/// Anchor of the month label above `week`.
pub fn month_label_origin(config: &GridConfig, week: u32) -> Point {
    Point::new(
        (config.left_margin + config.cell_gap + week * config.pitch()) as i32,
        (config.month_label_height / 4) as i32,
    )
}

/// Month label text, shifted left when it would run past the canvas edge.
pub fn month_label_text<'a>(
    config: &GridConfig,
    label: &MonthLabel,
    style: MonoTextStyle<'a, Rgb888>,
) -> Text<'a, MonoTextStyle<'a, Rgb888>> {
    let text = Text::with_text_style(label.text(), month_label_origin(config, label.column), style, TOP_LEFT);
    let bounds = text.bounding_box();
    let overflow = bounds.top_left.x + bounds.size.width as i32 - config.canvas_width() as i32;
    if overflow > 0 { text.translate(Point::new(-overflow, 0)) } else { text }
}

/// Anchor of the weekday label for row `day`.
pub fn day_label_origin(config: &GridConfig, day: u32) -> Point {
    Point::new(config.day_label_left as i32, (config.month_label_height + 2 + day * config.pitch()) as i32)
}

/// Draw labels and cells for the window described by `grid`.
pub fn draw_grid<D>(display: &mut D, config: &GridConfig, grid: &GridGeometry, contributions: &Contributions)
where
    D: DrawTarget<Color = Rgb888> + OriginDimensions,
{
    fill_canvas(display, config.background);

    let label_style = MonoTextStyle::new(LABEL_FONT, config.label_color);

    for label in grid.month_labels() {
        month_label_text(config, &label, label_style).draw(display).ok();
    }

    for (day, label) in DAY_LABELS.iter().enumerate().take(config.days as usize) {
        Text::with_text_style(label, day_label_origin(config, day as u32), label_style, TOP_LEFT)
            .draw(display)
            .ok();
    }

    let mut marked = 0u32;
    for (week, day, date) in grid.cells() {
        let key = date_key(date);
        let color = if contributions.is_marked(&key) {
            marked += 1;
            config.highlight_color
        } else {
            config.empty_color
        };
        log::trace!("cell [{week}, {day}] {key}");
        fill_rounded_square(
            display,
            cell_origin(config, week, day),
            config.cell_size,
            config.corner_radius(),
            color,
        );
    }

    log::debug!("grid from {} with {marked} highlighted day(s)", grid.anchor);
}
