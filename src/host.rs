//! Host-side collaborators: execution mode, yes/no prompt and widget sink.
//!
//! The renderers only produce a framebuffer. Everything the home-screen host
//! would normally provide (deciding whether a person is watching, asking a
//! question, showing the bitmap) is modelled here as a small trait so the
//! orchestration in [`crate::app`] can be driven by tests.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay};
use thiserror::Error;

use crate::widgets::primitives::fill_canvas;

/// In-memory bitmap a widget renders into.
pub type Bitmap = SimulatorDisplay<Rgb888>;

/// Create a bitmap of the given size.
pub fn new_bitmap(width: u32, height: u32) -> Bitmap { SimulatorDisplay::new(Size::new(width, height)) }

#[derive(Debug, Error)]
pub enum HostError {
    #[error("failed to write widget image `{path}`: {message}")]
    Image { path: PathBuf, message: String },
}

// =============================================================================
// Execution Mode
// =============================================================================

/// How the current run was started. Chosen by the caller, never sniffed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExecutionMode {
    /// Scheduled refresh: render from saved state, never ask anything.
    #[default]
    WidgetRefresh,
    /// Manual run with a person at the keyboard.
    Interactive,
}

impl ExecutionMode {
    #[inline]
    pub const fn is_interactive(self) -> bool { matches!(self, Self::Interactive) }
}

// =============================================================================
// Prompt
// =============================================================================

/// A yes/no question with one confirming and one cancelling action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PromptRequest {
    pub title: String,
    pub message: String,
    pub confirm: String,
    pub cancel: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PromptChoice {
    Confirm,
    Cancel,
}

pub trait Prompt {
    /// Block until the user answers. Dismissing counts as `Cancel`.
    fn ask(&mut self, request: &PromptRequest) -> PromptChoice;
}

/// Line-based prompt over any reader/writer pair (stdin/stdout in the binary).
pub struct TerminalPrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self { Self { input, output } }

    fn write_question(&mut self, request: &PromptRequest) -> io::Result<()> {
        writeln!(self.output, "{}", request.title)?;
        write!(self.output, "{} [{}/{}] ", request.message, request.confirm, request.cancel)?;
        self.output.flush()
    }
}

impl<R: BufRead, W: Write> Prompt for TerminalPrompt<R, W> {
    fn ask(&mut self, request: &PromptRequest) -> PromptChoice {
        if let Err(err) = self.write_question(request) {
            log::warn!("prompt output failed: {err}");
        }

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => PromptChoice::Cancel,
            Ok(_) => parse_answer(&line, &request.confirm),
            Err(err) => {
                log::warn!("prompt input failed: {err}");
                PromptChoice::Cancel
            }
        }
    }
}

/// `y`, `yes` or the confirm label itself (any case) confirm; anything else cancels.
fn parse_answer(line: &str, confirm: &str) -> PromptChoice {
    let answer = line.trim();
    if answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes") || answer.eq_ignore_ascii_case(confirm)
    {
        PromptChoice::Confirm
    } else {
        PromptChoice::Cancel
    }
}

// =============================================================================
// Widget
// =============================================================================

/// Finished widget handed to the host.
pub struct Widget {
    pub background: Rgb888,
    /// Space around the image on every side.
    pub padding: u32,
    pub image: Bitmap,
    /// Ask the host to render again at this time.
    pub refresh_after: Option<DateTime<Local>>,
}

impl Widget {
    /// Image placed on the background with padding applied.
    pub fn compose(&self) -> Bitmap {
        let image_size = self.image.size();
        let mut canvas = new_bitmap(image_size.width + 2 * self.padding, image_size.height + 2 * self.padding);
        fill_canvas(&mut canvas, self.background);

        let offset = Point::new(self.padding as i32, self.padding as i32);
        let pixels = self
            .image
            .bounding_box()
            .points()
            .map(|p| Pixel(p + offset, self.image.get_pixel(p)));
        canvas.draw_iter(pixels).ok();
        canvas
    }
}

/// Receives the finished widget.
pub trait WidgetHost {
    fn set_widget(&mut self, widget: Widget) -> Result<(), HostError>;
}

/// Writes the composed widget to a PNG file.
pub struct PngWidgetHost {
    path: PathBuf,
    scale: u32,
}

impl PngWidgetHost {
    /// `scale` multiplies every pixel, like a device screen scale.
    pub fn new(path: impl Into<PathBuf>, scale: u32) -> Self { Self { path: path.into(), scale: scale.max(1) } }

    pub fn path(&self) -> &Path { &self.path }
}

impl WidgetHost for PngWidgetHost {
    fn set_widget(&mut self, widget: Widget) -> Result<(), HostError> {
        let settings = OutputSettingsBuilder::new().scale(self.scale).build();
        widget
            .compose()
            .to_rgb_output_image(&settings)
            .save_png(&self.path)
            .map_err(|err| HostError::Image { path: self.path.clone(), message: err.to_string() })?;

        log::info!("widget written to {}", self.path.display());
        if let Some(at) = widget.refresh_after {
            log::info!("next refresh requested at {}", at.format("%Y-%m-%d %H:%M:%S"));
        }
        Ok(())
    }
}
