//! Widget configuration: layout constants and the immutable style values
//! handed to the renderers.
//!
//! Layout numbers live as `const` items so derived values (canvas size,
//! label offsets) are computed at compile time. Renderers never read these
//! constants directly; they receive a [`ClockStyle`] or [`GridConfig`] so
//! each face variant is just another value of the same type.

use std::time::Duration;

use embedded_graphics::pixelcolor::Rgb888;

use crate::colors::{
    ACCENT_BLUE, ACCENT_ORANGE, BEZEL_GRAY, BLACK, CHARCOAL, CONTRIBUTION_GREEN, GRAPHITE, GRAPHITE_TINT, LABEL_GRAY,
    MINOR_TICK_GRAY, NO_CONTRIBUTION, WHITE,
};

// =============================================================================
// Clock Layout
// =============================================================================

/// Medium widget canvas width in points.
pub const CLOCK_WIDTH: u32 = 364;

/// Medium widget canvas height in points.
pub const CLOCK_HEIGHT: u32 = 169;

/// Refresh cadence requested by the per-minute faces.
pub const CLOCK_REFRESH_INTERVAL: Duration = Duration::from_secs(60);

// =============================================================================
// Contribution Grid Layout
// =============================================================================

/// Number of week columns shown.
pub const GRID_WEEKS: u32 = 18;

/// Rows per column (Monday..Sunday).
pub const GRID_DAYS: u32 = 7;

/// Side length of one cell.
pub const CELL_SIZE: u32 = 16;

/// Spacing between neighbouring cells.
pub const CELL_GAP: u32 = 4;

/// Widget padding around the grid image.
pub const GRID_PADDING: u32 = 20;

/// Height of the month label row above the cells.
pub const MONTH_LABEL_HEIGHT: u32 = 28;

/// Horizontal space reserved for weekday labels.
pub const LEFT_MARGIN: u32 = 45;

/// X position of the weekday labels.
pub const DAY_LABEL_LEFT: u32 = LEFT_MARGIN - 24;

/// File holding the toggled days, relative to the state directory.
pub const STORAGE_FILE: &str = "contributions.json";

// =============================================================================
// Clock Style
// =============================================================================

/// How a clock hand body is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandShape {
    /// Stroked segment from the center to the tip with a round cap at the tip.
    Line,
    /// Filled rotated rectangle with round caps at both ends.
    Slab,
}

/// One hand: length relative to the face radius, stroke thickness, color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandStyle {
    pub length: f32,
    pub width: u32,
    pub color: Rgb888,
}

/// Tick ring styling. Lengths and inset are in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickStyle {
    pub major_color: Rgb888,
    pub minor_color: Rgb888,
    pub major_length: f32,
    pub minor_length: f32,
    pub major_width: u32,
    pub minor_width: u32,
    /// Gap between the rim and the outer end of every tick.
    pub inset: f32,
}

/// Center marker: an outer dot and an optional inner dot drawn on top of it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PivotStyle {
    pub color: Rgb888,
    pub diameter: u32,
    pub inner: Option<(Rgb888, u32)>,
}

/// Everything that distinguishes one clock face from another.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClockStyle {
    pub name: &'static str,
    pub width: u32,
    pub height: u32,
    pub background: Rgb888,
    /// Tinted disc behind the dial: color and radius as a fraction of the face radius.
    pub inner_tint: Option<(Rgb888, f32)>,
    /// Thin ring drawn 2px inside the rim.
    pub bezel: Option<Rgb888>,
    pub ticks: TickStyle,
    pub hour_hand: HandStyle,
    pub minute_hand: HandStyle,
    pub hand_shape: HandShape,
    pub pivot: PivotStyle,
    /// When set, the widget asks the host to re-render after this interval.
    pub refresh_interval: Option<Duration>,
}

const STANDARD_TICKS: TickStyle = TickStyle {
    major_color: WHITE,
    minor_color: MINOR_TICK_GRAY,
    major_length: 14.0,
    minor_length: 8.0,
    major_width: 2,
    minor_width: 1,
    inset: 10.0,
};

impl ClockStyle {
    /// Black face with a bezel ring, slab hands and a blue halo pivot.
    pub const MIDNIGHT: Self = Self {
        name: "midnight",
        width: CLOCK_WIDTH,
        height: CLOCK_HEIGHT,
        background: BLACK,
        inner_tint: Some((BLACK, 0.9)),
        bezel: Some(BEZEL_GRAY),
        ticks: STANDARD_TICKS,
        hour_hand: HandStyle { length: 0.45, width: 6, color: WHITE },
        minute_hand: HandStyle { length: 0.75, width: 4, color: ACCENT_BLUE },
        hand_shape: HandShape::Slab,
        pivot: PivotStyle { color: ACCENT_BLUE, diameter: 24, inner: Some((BLACK, 12)) },
        refresh_interval: None,
    };

    /// Charcoal face with plain stroked hands, refreshed every minute.
    pub const CLASSIC: Self = Self {
        name: "classic",
        width: CLOCK_WIDTH,
        height: CLOCK_HEIGHT,
        background: CHARCOAL,
        inner_tint: None,
        bezel: None,
        ticks: STANDARD_TICKS,
        hour_hand: HandStyle { length: 0.5, width: 6, color: WHITE },
        minute_hand: HandStyle { length: 0.8, width: 4, color: WHITE },
        hand_shape: HandShape::Line,
        pivot: PivotStyle { color: WHITE, diameter: 10, inner: None },
        refresh_interval: Some(CLOCK_REFRESH_INTERVAL),
    };

    /// Graphite face with a tinted dial, bezel and orange accents, refreshed every minute.
    pub const GRAPHITE: Self = Self {
        name: "graphite",
        width: CLOCK_WIDTH,
        height: CLOCK_HEIGHT,
        background: GRAPHITE,
        inner_tint: Some((GRAPHITE_TINT, 0.9)),
        bezel: Some(BEZEL_GRAY),
        ticks: STANDARD_TICKS,
        hour_hand: HandStyle { length: 0.5, width: 6, color: WHITE },
        minute_hand: HandStyle { length: 0.8, width: 4, color: ACCENT_ORANGE },
        hand_shape: HandShape::Line,
        pivot: PivotStyle { color: ACCENT_ORANGE, diameter: 14, inner: Some((GRAPHITE, 6)) },
        refresh_interval: Some(CLOCK_REFRESH_INTERVAL),
    };

    /// All built-in faces.
    pub const PRESETS: [Self; 3] = [Self::MIDNIGHT, Self::CLASSIC, Self::GRAPHITE];

    /// Look up a built-in face by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<Self> {
        Self::PRESETS.into_iter().find(|style| style.name.eq_ignore_ascii_case(name))
    }
}

impl Default for ClockStyle {
    fn default() -> Self { Self::MIDNIGHT }
}

// =============================================================================
// Grid Config
// =============================================================================

/// Layout and palette of the contribution grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridConfig {
    pub weeks: u32,
    pub days: u32,
    pub cell_size: u32,
    pub cell_gap: u32,
    pub padding: u32,
    pub month_label_height: u32,
    pub left_margin: u32,
    pub day_label_left: u32,
    pub background: Rgb888,
    /// Color of a day without a contribution. Single level only.
    pub empty_color: Rgb888,
    pub highlight_color: Rgb888,
    pub label_color: Rgb888,
}

impl GridConfig {
    pub const DEFAULT: Self = Self {
        weeks: GRID_WEEKS,
        days: GRID_DAYS,
        cell_size: CELL_SIZE,
        cell_gap: CELL_GAP,
        padding: GRID_PADDING,
        month_label_height: MONTH_LABEL_HEIGHT,
        left_margin: LEFT_MARGIN,
        day_label_left: DAY_LABEL_LEFT,
        background: BLACK,
        empty_color: NO_CONTRIBUTION,
        highlight_color: CONTRIBUTION_GREEN,
        label_color: LABEL_GRAY,
    };

    /// Distance from one cell origin to the next.
    #[inline]
    pub const fn pitch(&self) -> u32 { self.cell_size + self.cell_gap }

    /// Canvas width derived from columns, gap and the weekday label margin.
    pub const fn canvas_width(&self) -> u32 { self.weeks * self.pitch() + self.cell_gap + self.left_margin }

    /// Canvas height derived from rows, gap and the month label row.
    pub const fn canvas_height(&self) -> u32 { self.days * self.pitch() + self.cell_gap + self.month_label_height }

    /// Corner radius of the rounded cells.
    pub const fn corner_radius(&self) -> u32 { self.cell_size / 4 }
}

impl Default for GridConfig {
    fn default() -> Self { Self::DEFAULT }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_canvas_size() {
        let config = GridConfig::default();
        // 18 * 20 + 4 + 45, 7 * 20 + 4 + 28
        assert_eq!(config.canvas_width(), 409);
        assert_eq!(config.canvas_height(), 172);
    }

    #[test]
    fn test_grid_canvas_tracks_layout() {
        let config = GridConfig { weeks: 4, cell_size: 10, cell_gap: 2, ..GridConfig::default() };
        assert_eq!(config.canvas_width(), 4 * 12 + 2 + LEFT_MARGIN);
        assert_eq!(config.corner_radius(), 2);
    }

    #[test]
    fn test_day_label_left() {
        assert_eq!(DAY_LABEL_LEFT, 21);
    }

    #[test]
    fn test_clock_style_lookup() {
        assert_eq!(ClockStyle::by_name("midnight"), Some(ClockStyle::MIDNIGHT));
        assert_eq!(ClockStyle::by_name("Classic"), Some(ClockStyle::CLASSIC));
        assert_eq!(ClockStyle::by_name("GRAPHITE"), Some(ClockStyle::GRAPHITE));
        assert_eq!(ClockStyle::by_name("sundial"), None);
    }

    #[test]
    fn test_clock_presets_cover_both_hand_shapes() {
        assert!(ClockStyle::PRESETS.iter().any(|s| s.hand_shape == HandShape::Line));
        assert!(ClockStyle::PRESETS.iter().any(|s| s.hand_shape == HandShape::Slab));
    }

    #[test]
    fn test_per_minute_faces_refresh() {
        assert_eq!(ClockStyle::MIDNIGHT.refresh_interval, None);
        assert_eq!(ClockStyle::CLASSIC.refresh_interval, Some(CLOCK_REFRESH_INTERVAL));
        assert_eq!(ClockStyle::GRAPHITE.refresh_interval, Some(CLOCK_REFRESH_INTERVAL));
    }

    #[test]
    fn test_hand_lengths_within_face() {
        for style in ClockStyle::PRESETS {
            assert!(style.hour_hand.length < style.minute_hand.length, "{}: hour hand longer", style.name);
            assert!(style.minute_hand.length < 1.0, "{}: minute hand leaves the face", style.name);
        }
    }
}
