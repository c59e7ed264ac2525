//! Calendar math for the contribution grid.
//!
//! The grid shows `weeks` Monday-aligned columns ending with the current
//! week. Column 0 holds the oldest week; row 0 is Monday.
//!
//! ```text
//!           anchor                          today's week
//!             |                                  |
//!   M  [w0d0] [w1d0] ...                     [w17d0]
//!   T  [w0d1] ...
//!   ...
//!   S  [w0d6] ...                            [w17d6]
//! ```

use core::fmt::Write;

use chrono::{Datelike, Days, NaiveDate};
use heapless::String;

use crate::config::GridConfig;

/// Length of a `YYYY-MM-DD` key.
pub const DATE_KEY_LEN: usize = 10;

/// Canonical store key for one calendar day.
pub type DateKey = String<DATE_KEY_LEN>;

/// Three-letter month names, January first.
pub const MONTH_LABELS: [&str; 12] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];

/// Single-letter weekday names, Monday first.
pub const DAY_LABELS: [&str; 7] = ["M", "T", "W", "T", "F", "S", "S"];

/// Format `date` as a `YYYY-MM-DD` store key.
///
/// Keys fit exactly for years 0..=9999. Years outside that range need more
/// than four characters and come back truncated (debug builds assert).
pub fn date_key(date: NaiveDate) -> DateKey {
    let mut key = DateKey::new();
    let written = write!(key, "{:04}-{:02}-{:02}", date.year(), date.month(), date.day());
    debug_assert!(written.is_ok(), "date key overflow for {date}");
    key
}

/// Days elapsed since the most recent Monday (0 on Mondays, 6 on Sundays).
#[inline]
pub fn days_since_monday(date: NaiveDate) -> u32 { date.weekday().num_days_from_monday() }

/// Monday of the oldest column: this week's Monday minus `weeks - 1` weeks.
///
/// Saturates at `NaiveDate::MIN` instead of underflowing.
pub fn anchor_date(today: NaiveDate, weeks: u32) -> NaiveDate {
    let back = u64::from(days_since_monday(today)) + u64::from(weeks.saturating_sub(1)) * 7;
    today.checked_sub_days(Days::new(back)).unwrap_or(NaiveDate::MIN)
}

/// Label drawn above a column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonthLabel {
    pub column: u32,
    pub year: i32,
    /// Month index, 0 = January.
    pub month0: u32,
}

impl MonthLabel {
    pub fn text(&self) -> &'static str { MONTH_LABELS[self.month0 as usize] }
}

/// Keep the first label of each calendar month, in column order.
///
/// `firsts` yields `(column, date)` for every column showing a 1st of the
/// month. A month already labeled further left is skipped.
pub fn dedup_month_labels<I>(firsts: I) -> Vec<MonthLabel>
where
    I: IntoIterator<Item = (u32, NaiveDate)>,
{
    let mut labels: Vec<MonthLabel> = Vec::new();
    for (column, date) in firsts {
        let label = MonthLabel { column, year: date.year(), month0: date.month0() };
        if labels.iter().any(|l| l.year == label.year && l.month0 == label.month0) {
            continue;
        }
        labels.push(label);
    }
    labels
}

/// Date layout of the visible window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridGeometry {
    pub anchor: NaiveDate,
    pub weeks: u32,
    pub days: u32,
}

impl GridGeometry {
    /// Window ending with the week that contains `today`.
    pub fn new(today: NaiveDate, config: &GridConfig) -> Self {
        Self { anchor: anchor_date(today, config.weeks), weeks: config.weeks, days: config.days }
    }

    /// Calendar date shown at (`week`, `day`), saturating at `NaiveDate::MAX`.
    pub fn cell_date(&self, week: u32, day: u32) -> NaiveDate {
        let offset = u64::from(week) * 7 + u64::from(day);
        self.anchor.checked_add_days(Days::new(offset)).unwrap_or(NaiveDate::MAX)
    }

    /// Every visible cell in column-major order.
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32, NaiveDate)> + '_ {
        (0..self.weeks).flat_map(move |week| (0..self.days).map(move |day| (week, day, self.cell_date(week, day))))
    }

    /// First visible 1st-of-month in a column, scanning Monday to Sunday.
    pub fn first_of_month_in(&self, week: u32) -> Option<NaiveDate> {
        (0..self.days).map(|day| self.cell_date(week, day)).find(|date| date.day() == 1)
    }

    /// Month labels for the window; columns without a visible 1st get none.
    pub fn month_labels(&self) -> Vec<MonthLabel> {
        dedup_month_labels((0..self.weeks).filter_map(|week| self.first_of_month_in(week).map(|date| (week, date))))
    }
}
