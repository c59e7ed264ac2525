use std::cell::RefCell;

use chrono::NaiveDate;
use embedded_graphics::prelude::*;
use homescreen_widgets::app::{GridRun, confirm_toggle, run_grid};
use homescreen_widgets::colors::{CONTRIBUTION_GREEN, NO_CONTRIBUTION};
use homescreen_widgets::host::{HostError, Prompt, PromptChoice, PromptRequest, Widget, WidgetHost};
use homescreen_widgets::store::{StoreError, StoreResult};
use homescreen_widgets::widgets::cell_origin;
use homescreen_widgets::{ContributionRepository, Contributions, ExecutionMode, GridConfig};

// -----------------------------------------------------------------------------
// Fakes
// -----------------------------------------------------------------------------

#[derive(Default)]
struct MemoryRepo {
    stored: RefCell<Option<Contributions>>,
    saves: RefCell<u32>,
    fail_reads: bool,
    fail_writes: bool,
}

impl MemoryRepo {
    fn with(keys: &[&str]) -> Self {
        Self { stored: RefCell::new(Some(keys.iter().copied().collect())), ..Self::default() }
    }
}

impl ContributionRepository for MemoryRepo {
    fn load(&self) -> StoreResult<Contributions> {
        if self.fail_reads {
            let source = serde_json::from_str::<Contributions>("{").unwrap_err();
            return Err(StoreError::Parse { path: "memory".into(), source });
        }
        Ok(self.stored.borrow().clone().unwrap_or_default())
    }

    fn save(&self, contributions: &Contributions) -> StoreResult<()> {
        *self.saves.borrow_mut() += 1;
        if self.fail_writes {
            return Err(StoreError::Write {
                path: "memory".into(),
                source: std::io::Error::other("disk full"),
            });
        }
        *self.stored.borrow_mut() = Some(contributions.clone());
        Ok(())
    }
}

/// Answers every question with a fixed choice and records what was asked.
struct ScriptedPrompt {
    answer: PromptChoice,
    asked: Vec<PromptRequest>,
}

impl ScriptedPrompt {
    fn new(answer: PromptChoice) -> Self { Self { answer, asked: Vec::new() } }
}

impl Prompt for ScriptedPrompt {
    fn ask(&mut self, request: &PromptRequest) -> PromptChoice {
        self.asked.push(request.clone());
        self.answer
    }
}

#[derive(Default)]
struct CapturingHost {
    widgets: Vec<Widget>,
}

impl WidgetHost for CapturingHost {
    fn set_widget(&mut self, widget: Widget) -> Result<(), HostError> {
        self.widgets.push(widget);
        Ok(())
    }
}

fn monday() -> NaiveDate { NaiveDate::from_ymd_opt(2024, 6, 10).unwrap() }

fn run(
    repo: &MemoryRepo,
    prompt: &mut ScriptedPrompt,
    mode: ExecutionMode,
    host: &mut CapturingHost,
) -> Contributions {
    let run = GridRun { config: &GridConfig::DEFAULT, today: monday(), mode, repo, prompt };
    run_grid(run, host).unwrap()
}

fn today_cell_color(host: &CapturingHost) -> embedded_graphics::pixelcolor::Rgb888 {
    let config = GridConfig::DEFAULT;
    let center = cell_origin(&config, 17, 0) + Point::new(8, 8);
    host.widgets.last().unwrap().image.get_pixel(center)
}

// -----------------------------------------------------------------------------
// Widget refresh
// -----------------------------------------------------------------------------

#[test]
fn refresh_never_prompts_or_saves() {
    let repo = MemoryRepo::with(&["2024-06-10"]);
    let mut prompt = ScriptedPrompt::new(PromptChoice::Confirm);
    let mut host = CapturingHost::default();

    let rendered = run(&repo, &mut prompt, ExecutionMode::WidgetRefresh, &mut host);

    assert!(prompt.asked.is_empty());
    assert_eq!(*repo.saves.borrow(), 0);
    assert!(rendered.is_marked("2024-06-10"));
    assert_eq!(today_cell_color(&host), CONTRIBUTION_GREEN);
}

#[test]
fn widget_carries_grid_padding_and_background() {
    let repo = MemoryRepo::default();
    let mut prompt = ScriptedPrompt::new(PromptChoice::Cancel);
    let mut host = CapturingHost::default();
    run(&repo, &mut prompt, ExecutionMode::WidgetRefresh, &mut host);

    let widget = &host.widgets[0];
    assert_eq!(widget.padding, 20);
    assert_eq!(widget.background, GridConfig::DEFAULT.background);
    assert_eq!(widget.refresh_after, None);
    assert_eq!(widget.image.size(), Size::new(409, 172));
}

// -----------------------------------------------------------------------------
// Interactive
// -----------------------------------------------------------------------------

#[test]
fn interactive_yes_adds_and_saves() {
    let repo = MemoryRepo::default();
    let mut prompt = ScriptedPrompt::new(PromptChoice::Confirm);
    let mut host = CapturingHost::default();

    let rendered = run(&repo, &mut prompt, ExecutionMode::Interactive, &mut host);

    assert_eq!(prompt.asked.len(), 1);
    assert_eq!(prompt.asked[0].title, "Toggle today's contribution");
    assert_eq!(prompt.asked[0].message, "Add today's contribution highlight?");
    assert!(rendered.is_marked("2024-06-10"));
    assert_eq!(repo.stored.borrow().as_ref(), Some(&rendered));
    assert_eq!(today_cell_color(&host), CONTRIBUTION_GREEN);
}

#[test]
fn interactive_yes_on_marked_day_removes() {
    let repo = MemoryRepo::with(&["2024-06-10", "2024-06-03"]);
    let mut prompt = ScriptedPrompt::new(PromptChoice::Confirm);
    let mut host = CapturingHost::default();

    let rendered = run(&repo, &mut prompt, ExecutionMode::Interactive, &mut host);

    assert_eq!(prompt.asked[0].message, "Remove today's contribution highlight?");
    assert!(!rendered.is_marked("2024-06-10"));
    assert!(rendered.is_marked("2024-06-03"));
    assert_eq!(today_cell_color(&host), NO_CONTRIBUTION);
}

#[test]
fn interactive_no_leaves_store_untouched() {
    let repo = MemoryRepo::with(&["2024-06-03"]);
    let mut prompt = ScriptedPrompt::new(PromptChoice::Cancel);
    let mut host = CapturingHost::default();

    let rendered = run(&repo, &mut prompt, ExecutionMode::Interactive, &mut host);

    assert_eq!(prompt.asked.len(), 1);
    assert_eq!(*repo.saves.borrow(), 0);
    assert!(!rendered.is_marked("2024-06-10"));
    assert_eq!(today_cell_color(&host), NO_CONTRIBUTION);
}

// -----------------------------------------------------------------------------
// Failure policy
// -----------------------------------------------------------------------------

#[test]
fn unreadable_store_renders_empty() {
    let repo = MemoryRepo { fail_reads: true, ..MemoryRepo::with(&["2024-06-10"]) };
    let mut prompt = ScriptedPrompt::new(PromptChoice::Cancel);
    let mut host = CapturingHost::default();

    let rendered = run(&repo, &mut prompt, ExecutionMode::WidgetRefresh, &mut host);

    assert!(rendered.is_empty());
    assert_eq!(today_cell_color(&host), NO_CONTRIBUTION);
}

#[test]
fn failed_save_still_renders_toggle() {
    let repo = MemoryRepo { fail_writes: true, ..MemoryRepo::default() };
    let mut prompt = ScriptedPrompt::new(PromptChoice::Confirm);

    let updated = confirm_toggle(&repo, &mut prompt, Contributions::new(), monday());

    assert_eq!(*repo.saves.borrow(), 1);
    assert!(updated.is_marked("2024-06-10"));
    assert_eq!(repo.stored.borrow().as_ref(), None);
}
