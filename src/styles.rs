//! Pre-computed text styles for widget labels.
//!
//! Label color is part of [`GridConfig`](crate::config::GridConfig), so only
//! the font and the alignment are fixed here. Callers build the character
//! style with `MonoTextStyle::new(LABEL_FONT, color)`.

use embedded_graphics::{
    mono_font::MonoFont,
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::PROFONT_12_POINT;

/// Label font (`ProFont` 12pt, 8x15 px glyphs).
pub const LABEL_FONT: &MonoFont = &PROFONT_12_POINT;

/// Left-aligned text anchored at its top-left corner.
pub const TOP_LEFT: TextStyle = TextStyleBuilder::new().alignment(Alignment::Left).baseline(Baseline::Top).build();
