//! Type definitions and constants for range calculation and rendering.

use chrono::NaiveDate;
use clap::ValueEnum;

/// When to emit ANSI escape sequences.
#[derive(Debug, Clone, Copy, PartialEq, Default, ValueEnum)]
pub enum ColorMode {
    /// Always colorize (default).
    #[default]
    Always,
    /// Colorize only when stdout is a terminal.
    Auto,
    /// Plain text output.
    Never,
}

/// Inclusive date span with `from <= to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    /// Build a range, swapping the endpoints if `to` precedes `from`.
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        if to < from {
            DateRange { from: to, to: from }
        } else {
            DateRange { from, to }
        }
    }

    /// Single-day range.
    pub fn single(date: NaiveDate) -> Self {
        DateRange {
            from: date,
            to: date,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }

    pub fn is_single_day(&self) -> bool {
        self.from == self.to
    }

    /// Iterate every day in the range, both ends included.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let to = self.to;
        self.from.iter_days().take_while(move |d| *d <= to)
    }
}

/// Workday/weekend breakdown of a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DayCounts {
    pub workdays: u64,
    pub weekend_days: u64,
}

impl DayCounts {
    pub fn total(&self) -> u64 {
        self.workdays + self.weekend_days
    }

    /// Nights spent between the first and the last day.
    pub fn nights(&self) -> u64 {
        self.total().saturating_sub(1)
    }
}

/// Rendering options shared by the calendar and summary formatters.
#[derive(Clone, Debug)]
pub struct RenderContext {
    /// Today's date for highlighting.
    pub today: NaiveDate,
    /// Whether to use ANSI color codes in output.
    pub color: bool,
}

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const USAGE: &str = "Usage: days [<from> <to>|<+-days>]";

// Calendar layout
pub const WEEKDAY_HEADER: &str = "     Mon Tue Wed Thu Fri Sat Sun";
pub const ROW_INDENT: &str = "     ";
pub const BLANK_CELL: &str = "    ";

// ANSI codes
pub const COLOR_RESET: &str = "\x1b[0m";
pub const COLOR_REVERSE: &str = "\x1b[7m";

// 256-color palette indices
pub const COLOR_LABEL: u8 = 231;
pub const COLOR_WORKDAY: u8 = 39;
pub const COLOR_WEEKEND: u8 = 197;
pub const COLOR_OUT_OF_RANGE: u8 = 251;
