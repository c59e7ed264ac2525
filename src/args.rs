//! Command-line arguments for the widget binary.
//!
//! ```text
//! homescreen-widgets clock [STYLE] [--interactive] [--out PATH] [--scale N]
//! homescreen-widgets grid [--interactive] [--out PATH] [--scale N] [--state-dir DIR]
//! ```
//!
//! Runs default to [`ExecutionMode::WidgetRefresh`]: a scheduler calling the
//! binary never blocks on a prompt. `--interactive` is the manual run.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ClockStyle;
use crate::host::ExecutionMode;

/// Environment variable overriding the state directory.
pub const STATE_DIR_ENV: &str = "HOMESCREEN_WIDGETS_DIR";

pub const USAGE: &str = "usage: homescreen-widgets <clock [midnight|classic|graphite] | grid> [--interactive] [--out PATH] \
                         [--scale N] [--state-dir DIR]";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgsError {
    #[error("missing widget name")]
    MissingWidget,
    #[error("unknown widget `{0}`")]
    UnknownWidget(String),
    #[error("unknown clock style `{0}`")]
    UnknownStyle(String),
    #[error("`{0}` needs a value")]
    MissingValue(&'static str),
    #[error("invalid scale `{0}`")]
    InvalidScale(String),
    #[error("unexpected argument `{0}`")]
    Unexpected(String),
}

#[derive(Clone, Debug, PartialEq)]
pub enum WidgetKind {
    Clock(ClockStyle),
    Grid,
}

impl WidgetKind {
    /// Output file used when `--out` is not given.
    pub fn default_output(&self) -> &'static str {
        match self {
            Self::Clock(_) => "clock.png",
            Self::Grid => "grid.png",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Args {
    pub widget: WidgetKind,
    pub mode: ExecutionMode,
    pub output: PathBuf,
    pub scale: u32,
    pub state_dir: Option<PathBuf>,
}

impl Args {
    /// Parse arguments without the program name.
    pub fn parse<I, S>(args: I) -> Result<Self, ArgsError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = args.into_iter().map(Into::into).peekable();

        let widget = match args.next().as_deref() {
            None => return Err(ArgsError::MissingWidget),
            Some("clock") => {
                let style = match args.next_if(|a| !a.starts_with("--")) {
                    Some(name) => ClockStyle::by_name(&name).ok_or(ArgsError::UnknownStyle(name))?,
                    None => ClockStyle::default(),
                };
                WidgetKind::Clock(style)
            }
            Some("grid") => WidgetKind::Grid,
            Some(other) => return Err(ArgsError::UnknownWidget(other.to_owned())),
        };

        let mut mode = ExecutionMode::WidgetRefresh;
        let mut output = None;
        let mut scale = 1;
        let mut state_dir = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--interactive" => mode = ExecutionMode::Interactive,
                "--out" => output = Some(PathBuf::from(args.next().ok_or(ArgsError::MissingValue("--out"))?)),
                "--scale" => {
                    let value = args.next().ok_or(ArgsError::MissingValue("--scale"))?;
                    scale = match value.parse::<u32>() {
                        Ok(n) if n > 0 => n,
                        _ => return Err(ArgsError::InvalidScale(value)),
                    };
                }
                "--state-dir" => {
                    state_dir = Some(PathBuf::from(args.next().ok_or(ArgsError::MissingValue("--state-dir"))?));
                }
                _ => return Err(ArgsError::Unexpected(arg)),
            }
        }

        let output = output.unwrap_or_else(|| PathBuf::from(widget.default_output()));
        Ok(Self { widget, mode, output, scale, state_dir })
    }
}
