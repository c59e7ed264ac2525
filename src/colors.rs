//! Color constants for the widget faces.
//!
//! Widgets are rendered into an `Rgb888` framebuffer so the hex colors used
//! by the home-screen palette survive without quantization. Colors that
//! `embedded_graphics` already provides through the `RgbColor` trait are
//! re-exported from there; the rest are spelled out as `Rgb888::new(r, g, b)`.

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black. Clock and grid backgrounds, pivot center dot.
pub const BLACK: Rgb888 = Rgb888::BLACK;

/// Pure white. Major ticks and hour hands.
pub const WHITE: Rgb888 = Rgb888::WHITE;

// =============================================================================
// Clock Palette
// =============================================================================

/// `#444446` - fine bezel ring just inside the rim.
pub const BEZEL_GRAY: Rgb888 = Rgb888::new(0x44, 0x44, 0x46);

/// `#6e6e70` - minor tick marks.
pub const MINOR_TICK_GRAY: Rgb888 = Rgb888::new(0x6e, 0x6e, 0x70);

/// `#0a84ff` - minute hand and pivot accent.
pub const ACCENT_BLUE: Rgb888 = Rgb888::new(0x0a, 0x84, 0xff);

/// `#ff9f0a` - accent for the graphite face.
pub const ACCENT_ORANGE: Rgb888 = Rgb888::new(0xff, 0x9f, 0x0a);

/// `#1c1c1e` - classic face background.
pub const CHARCOAL: Rgb888 = Rgb888::new(0x1c, 0x1c, 0x1e);

/// `#2c2c2e` - graphite face background.
pub const GRAPHITE: Rgb888 = Rgb888::new(0x2c, 0x2c, 0x2e);

/// `#3a3a3c` - graphite face inner tint.
pub const GRAPHITE_TINT: Rgb888 = Rgb888::new(0x3a, 0x3a, 0x3c);

// =============================================================================
// Contribution Grid Palette
// =============================================================================

/// `#151b22` - cell with no contribution recorded.
pub const NO_CONTRIBUTION: Rgb888 = Rgb888::new(0x15, 0x1b, 0x22);

/// `#239a3b` - highlighted day.
pub const CONTRIBUTION_GREEN: Rgb888 = Rgb888::new(0x23, 0x9a, 0x3b);

/// `#888888` - month and weekday labels.
pub const LABEL_GRAY: Rgb888 = Rgb888::new(0x88, 0x88, 0x88);
