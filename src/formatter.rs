//! Calendar grid and summary formatting with ANSI color support.

use std::io::{ErrorKind, Write};

use chrono::{Datelike, NaiveDate, Weekday};

use crate::calendar::{count_days, is_weekend, month_span};
use crate::error::Result;
use crate::types::{
    BLANK_CELL, COLOR_LABEL, COLOR_OUT_OF_RANGE, COLOR_RESET, COLOR_REVERSE, COLOR_WEEKEND,
    COLOR_WORKDAY, DATE_FORMAT, DateRange, DayCounts, ROW_INDENT, RenderContext, WEEKDAY_HEADER,
};

/// Wrap text in a 256-color foreground escape.
pub fn fg(text: &str, color: u8) -> String {
    format!("\x1b[38;5;{}m{}{}", color, text, COLOR_RESET)
}

/// Wrap text in inverted video.
pub fn invert(text: &str) -> String {
    format!("{}{}{}", COLOR_REVERSE, text, COLOR_RESET)
}

fn paint(ctx: &RenderContext, text: &str, color: u8) -> String {
    if ctx.color {
        fg(text, color)
    } else {
        text.to_string()
    }
}

/// Format day cell with color highlighting.
///
/// Today is inverted first, then colored by range membership and weekday.
fn format_day(ctx: &RenderContext, range: &DateRange, date: NaiveDate) -> String {
    let mut cell = format!("{:>3}", date.day());

    if !ctx.color {
        return cell;
    }

    if date == ctx.today {
        cell = invert(&cell);
    }

    let color = if !range.contains(date) {
        COLOR_OUT_OF_RANGE
    } else if is_weekend(date.weekday()) {
        COLOR_WEEKEND
    } else {
        COLOR_WORKDAY
    };
    fg(&cell, color)
}

/// Render whole months covering `range` as a Monday-start grid.
///
/// Each month begins on its own row labelled with the month abbreviation.
/// The year follows the first row of the first month and of every January.
/// No trailing newline.
pub fn render_calendar(ctx: &RenderContext, range: &DateRange) -> String {
    let span = month_span(range);
    let mut out = paint(ctx, WEEKDAY_HEADER, COLOR_LABEL);
    let mut first_row_of_month = false;

    for date in span.days() {
        let weekday = date.weekday();

        if date.day() == 1 {
            first_row_of_month = true;
            if !out.ends_with('\n') {
                out.push('\n');
            }
            out.push_str(&paint(ctx, &date.format("%b").to_string(), COLOR_LABEL));
            out.push_str("  ");
            out.push_str(&BLANK_CELL.repeat(weekday.num_days_from_monday() as usize));
        } else if weekday == Weekday::Mon {
            first_row_of_month = false;
            out.push_str(ROW_INDENT);
        }

        out.push_str(&format_day(ctx, range, date));

        if weekday != Weekday::Sun {
            out.push(' ');
            continue;
        }

        let opens_span = date.year() == span.from.year() && date.month() == span.from.month();
        if first_row_of_month && (opens_span || date.month() == 1) {
            out.push_str("  ");
            out.push_str(&paint(ctx, &date.year().to_string(), COLOR_LABEL));
        }

        if date != span.to {
            out.push('\n');
        }
    }

    out
}

fn plural(n: u64) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Describe the range as a count of days and nights.
///
/// Returns `None` for a single-day range.
pub fn format_summary(range: &DateRange, counts: &DayCounts) -> Option<String> {
    if range.is_single_day() {
        return None;
    }

    let DayCounts {
        workdays,
        weekend_days,
    } = *counts;
    let total = counts.total();

    let breakdown = match (workdays, weekend_days) {
        (0, weekend) => format!("{} weekend day{}", weekend, plural(weekend)),
        (work, 0) => format!("{} work day{}", work, plural(work)),
        (work, weekend) => format!(
            "{} day{} ({} work day{} + {} weekend day{})",
            total,
            plural(total),
            work,
            plural(work),
            weekend,
            plural(weekend)
        ),
    };

    let nights = counts.nights();
    Some(format!(
        "{} - {}: {} ({} night{})",
        range.from.format(DATE_FORMAT),
        range.to.format(DATE_FORMAT),
        breakdown,
        nights,
        plural(nights)
    ))
}

/// Full program output: calendar, then a blank line and the summary when the
/// range spans more than one day.
pub fn render(ctx: &RenderContext, range: &DateRange) -> String {
    let mut out = render_calendar(ctx, range);
    out.push('\n');

    if let Some(summary) = format_summary(range, &count_days(range)) {
        out.push('\n');
        out.push_str(&summary);
        out.push('\n');
    }

    out
}

/// Write rendered output. A reader that went away early is not an error.
pub fn write_output(out: &mut impl Write, text: &str) -> Result<()> {
    match out.write_all(text.as_bytes()).and_then(|()| out.flush()) {
        Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
        result => Ok(result?),
    }
}
