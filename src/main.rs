//! Home-screen widget renderer.
//!
//! Stands in for the widget host: renders one widget per invocation and
//! writes it as a PNG. A scheduler calls it without `--interactive`; a person
//! toggling today's contribution adds the flag and answers the prompt on the
//! terminal.
//!
//! Logging goes through `env_logger` (`RUST_LOG=debug` for geometry,
//! `RUST_LOG=trace` for per-cell dates).

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use chrono::Local;
use homescreen_widgets::app::{GridRun, run_clock, run_grid};
use homescreen_widgets::args::{Args, STATE_DIR_ENV, USAGE, WidgetKind};
use homescreen_widgets::config::{GridConfig, STORAGE_FILE};
use homescreen_widgets::host::{PngWidgetHost, TerminalPrompt};
use homescreen_widgets::store::JsonFileRepository;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = match Args::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{err}\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let mut host = PngWidgetHost::new(&args.output, args.scale);
    let now = Local::now();

    match args.widget {
        WidgetKind::Clock(style) => run_clock(&style, now, &mut host).context("clock widget")?,
        WidgetKind::Grid => {
            let state_dir = args.state_dir.unwrap_or_else(default_state_dir);
            let repo = JsonFileRepository::in_dir(&state_dir, STORAGE_FILE);
            log::debug!("contribution store at {}", repo.path().display());

            let stdin = io::stdin();
            let mut prompt = TerminalPrompt::new(stdin.lock(), io::stdout());
            let run = GridRun {
                config: &GridConfig::DEFAULT,
                today: now.date_naive(),
                mode: args.mode,
                repo: &repo,
                prompt: &mut prompt,
            };
            run_grid(run, &mut host).context("contribution grid widget")?;
        }
    }
    Ok(())
}

/// `$HOMESCREEN_WIDGETS_DIR`, else the user's documents directory, else the working directory.
fn default_state_dir() -> PathBuf {
    std::env::var_os(STATE_DIR_ENV)
        .map(PathBuf::from)
        .or_else(dirs::document_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}
