//! Home-screen widgets: analog clock faces and a contribution grid.
//!
//! Each widget is a single pipeline run once per invocation:
//!
//! - **Clock**: time of day -> hand angles -> face drawn into a framebuffer ->
//!   widget with an optional refresh request.
//! - **Contribution grid**: JSON toggle store -> optional yes/no prompt to
//!   flip today -> 18x7 calendar grid -> widget.
//!
//! Modules:
//!
//! - [`colors`]: palette constants
//! - [`config`]: layout constants, [`ClockStyle`] presets and [`GridConfig`]
//! - [`styles`]: pre-computed text styles
//! - [`face`]: clock geometry (angles, ticks, slab outlines)
//! - [`calendar`]: grid date math and month labels
//! - [`store`]: contribution map and its JSON repository
//! - [`widgets`]: drawing
//! - [`host`]: execution mode, prompt and widget sink
//! - [`app`]: the two pipelines and the fail-soft store policy
//! - [`args`]: command-line parsing for the binary

// Crate-level lints: pixel math casts between f32, u32 and i32 on small values
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod app;
pub mod args;
pub mod calendar;
pub mod colors;
pub mod config;
pub mod face;
pub mod host;
pub mod store;
pub mod styles;
pub mod widgets;

// Re-export commonly used items
pub use config::{ClockStyle, GridConfig, HandShape};
pub use host::ExecutionMode;
pub use store::{ContributionRepository, Contributions, JsonFileRepository, StoreError};
