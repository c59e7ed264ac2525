//! Widget renderers.
//!
//! - [`clock`]: analog clock face (background, bezel, ticks, hands, pivot)
//! - [`grid`]: contribution heatmap (month labels, weekday labels, cells)
//! - [`primitives`]: shared drawing helpers over sub-pixel geometry
//!
//! Every renderer is generic over `DrawTarget<Color = Rgb888>`, so tests draw
//! into a `SimulatorDisplay` and probe pixels while the binary uses the same
//! framebuffer type for PNG export.

mod clock;
mod grid;
pub(crate) mod primitives;

pub use clock::draw_clock;
pub use grid::{cell_origin, draw_grid};
