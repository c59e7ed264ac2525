//! Widget pipelines: one function per widget, run once per invocation.
//!
//! This is the only layer that applies the fail-soft store policy. A store
//! that cannot be read renders as empty; a store that cannot be written is
//! logged and the widget still renders from the in-memory map.

use chrono::{DateTime, Local, NaiveDate, TimeDelta, Timelike};

use crate::calendar::{GridGeometry, date_key};
use crate::config::{ClockStyle, GridConfig};
use crate::host::{Bitmap, ExecutionMode, HostError, Prompt, PromptChoice, PromptRequest, Widget, WidgetHost, new_bitmap};
use crate::store::{ContributionRepository, Contributions, toggle};
use crate::widgets::{draw_clock, draw_grid};

// =============================================================================
// Clock
// =============================================================================

/// Render a clock face for the wall-clock time `now`.
pub fn render_clock(style: &ClockStyle, now: DateTime<Local>) -> Bitmap {
    let mut image = new_bitmap(style.width, style.height);
    draw_clock(&mut image, style, now.hour(), now.minute());
    image
}

/// Build the clock widget, requesting a refresh when the style has an interval.
pub fn clock_widget(style: &ClockStyle, now: DateTime<Local>) -> Widget {
    let refresh_after = style
        .refresh_interval
        .and_then(|interval| TimeDelta::from_std(interval).ok())
        .map(|delta| now + delta);
    Widget { background: style.background, padding: 0, image: render_clock(style, now), refresh_after }
}

/// Clock pipeline: render and hand the widget to the host.
pub fn run_clock<H: WidgetHost>(style: &ClockStyle, now: DateTime<Local>, host: &mut H) -> Result<(), HostError> {
    log::info!("rendering '{}' clock for {}", style.name, now.format("%H:%M"));
    host.set_widget(clock_widget(style, now))
}

// =============================================================================
// Contribution Grid
// =============================================================================

/// Load the store, treating any failure as "no data yet".
pub fn load_or_empty<R: ContributionRepository>(repo: &R) -> Contributions {
    match repo.load() {
        Ok(contributions) => contributions,
        Err(err) => {
            log::warn!("starting with no contributions: {err}");
            Contributions::new()
        }
    }
}

/// Save the store; failures are logged and otherwise ignored.
pub fn save_or_log<R: ContributionRepository>(repo: &R, contributions: &Contributions) {
    if let Err(err) = repo.save(contributions) {
        log::error!("contributions not saved: {err}");
    }
}

/// Question asked before flipping today's highlight.
pub fn toggle_request(currently_marked: bool) -> PromptRequest {
    let message = if currently_marked {
        "Remove today's contribution highlight?"
    } else {
        "Add today's contribution highlight?"
    };
    PromptRequest {
        title: "Toggle today's contribution".to_owned(),
        message: message.to_owned(),
        confirm: "Yes".to_owned(),
        cancel: "No".to_owned(),
    }
}

/// Ask whether to flip `today` and persist the change when confirmed.
///
/// Only called for interactive runs. Returns the map to render with.
pub fn confirm_toggle<R, P>(repo: &R, prompt: &mut P, contributions: Contributions, today: NaiveDate) -> Contributions
where
    R: ContributionRepository,
    P: Prompt + ?Sized,
{
    let key = date_key(today);
    let request = toggle_request(contributions.is_marked(&key));
    match prompt.ask(&request) {
        PromptChoice::Confirm => {
            let updated = toggle(contributions, &key);
            log::info!("{key} {}", if updated.is_marked(&key) { "highlighted" } else { "cleared" });
            save_or_log(repo, &updated);
            updated
        }
        PromptChoice::Cancel => contributions,
    }
}

/// Render the grid for `today` from `contributions`.
pub fn render_grid(config: &GridConfig, today: NaiveDate, contributions: &Contributions) -> Bitmap {
    let grid = GridGeometry::new(today, config);
    let mut image = new_bitmap(config.canvas_width(), config.canvas_height());
    draw_grid(&mut image, config, &grid, contributions);
    image
}

/// Inputs of one grid run.
pub struct GridRun<'a, R: ContributionRepository, P: Prompt + ?Sized> {
    pub config: &'a GridConfig,
    pub today: NaiveDate,
    pub mode: ExecutionMode,
    pub repo: &'a R,
    pub prompt: &'a mut P,
}

/// Grid pipeline: load, maybe toggle today, render, hand to the host.
///
/// Returns the map that was rendered.
pub fn run_grid<R, P, H>(run: GridRun<'_, R, P>, host: &mut H) -> Result<Contributions, HostError>
where
    R: ContributionRepository,
    P: Prompt + ?Sized,
    H: WidgetHost,
{
    let GridRun { config, today, mode, repo, prompt } = run;
    log::info!("rendering contribution grid for {today} ({mode:?})");

    let mut contributions = load_or_empty(repo);
    if mode.is_interactive() {
        contributions = confirm_toggle(repo, prompt, contributions, today);
    }

    let widget = Widget {
        background: config.background,
        padding: config.padding,
        image: render_grid(config, today, &contributions),
        refresh_after: None,
    };
    host.set_widget(widget)?;
    Ok(contributions)
}
