use std::fs;
use std::path::Path;

use chrono::{DateTime, Local, NaiveDate, TimeZone};
use homescreen_widgets::app::{GridRun, run_clock, run_grid};
use homescreen_widgets::host::{HostError, PngWidgetHost, Prompt, PromptChoice, PromptRequest};
use homescreen_widgets::{ClockStyle, ExecutionMode, GridConfig, JsonFileRepository};

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

struct NeverAsked;

impl Prompt for NeverAsked {
    fn ask(&mut self, _request: &PromptRequest) -> PromptChoice { panic!("widget refresh must not prompt") }
}

fn evening() -> DateTime<Local> { Local.with_ymd_and_hms(2024, 6, 10, 21, 45, 0).earliest().unwrap() }

/// Width and height from the IHDR chunk.
fn png_size(path: &Path) -> (u32, u32) {
    let bytes = fs::read(path).unwrap();
    assert_eq!(bytes[..8], PNG_SIGNATURE, "not a PNG");
    assert_eq!(&bytes[12..16], b"IHDR");
    let width = u32::from_be_bytes(bytes[16..20].try_into().unwrap());
    let height = u32::from_be_bytes(bytes[20..24].try_into().unwrap());
    (width, height)
}

#[test]
fn clock_png_is_scaled() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clock.png");
    let mut host = PngWidgetHost::new(&path, 2);

    run_clock(&ClockStyle::CLASSIC, evening(), &mut host).unwrap();

    assert_eq!(png_size(&path), (728, 338));
}

#[test]
fn grid_png_includes_padding() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("grid.png");
    let repo = JsonFileRepository::in_dir(dir.path(), "contributions.json");
    let mut host = PngWidgetHost::new(&path, 1);
    let mut prompt = NeverAsked;
    let run = GridRun {
        config: &GridConfig::DEFAULT,
        today: NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
        mode: ExecutionMode::WidgetRefresh,
        repo: &repo,
        prompt: &mut prompt,
    };

    run_grid(run, &mut host).unwrap();

    assert_eq!(png_size(&path), (409 + 2 * 20, 172 + 2 * 20));
}

#[test]
fn missing_output_directory_is_an_image_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("clock.png");
    let mut host = PngWidgetHost::new(&path, 1);

    let err = run_clock(&ClockStyle::MIDNIGHT, evening(), &mut host).unwrap_err();

    assert!(matches!(&err, HostError::Image { path: p, .. } if *p == path), "got {err:?}");
    assert!(!path.exists());
}
