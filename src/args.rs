//! Command-line argument parsing using clap.
//!
//! Positional arguments follow `days [<from> <to>|<+-days>]`.

use chrono::NaiveDate;
use clap::{Parser, ValueHint};
use std::io::IsTerminal;
use tracing::debug;

use crate::calendar::apply_delta;
use crate::error::{DaysError, Result};
use crate::types::{ColorMode, DATE_FORMAT, DateRange, RenderContext};

#[derive(Parser, Debug)]
#[command(name = "days")]
#[command(about = "Counts days between two dates and shows them on a calendar", long_about = None)]
#[command(version)]
#[command(after_help = HELP_MESSAGE)]
pub struct Args {
    /// Start date (YYYY-MM-DD), then an end date or a signed day offset.
    ///
    /// Once the first date is given, every remaining token is positional so
    /// that malformed offsets such as `-5x` reach the date parser.
    #[arg(
        value_name = "ARGS",
        allow_hyphen_values = true,
        value_hint = ValueHint::Other
    )]
    pub dates: Vec<String>,

    /// When to colorize output.
    #[arg(
        long,
        default_value = "always",
        help_heading = "Output options",
        value_name = "when"
    )]
    pub color: ColorMode,

    /// Print debug logs to stderr.
    #[arg(short = 'v', long, help_heading = "Output options")]
    pub verbose: bool,
}

/// Help message displayed with --help.
const HELP_MESSAGE: &str = "Without any arguments, show the current month with today highlighted.

Examples:
  days                          Current month
  days 2024-12-20 2025-01-06    Calendar and day count for the span
  days 2024-01-01 +5            Six days starting 2024-01-01
  days 2024-01-10 -5            Six days ending 2024-01-10
  days --color never 2024-03-01 2024-03-31";

impl Args {
    /// Resolve the positional arguments into a normalized range.
    pub fn date_range(&self, today: NaiveDate) -> Result<DateRange> {
        parse_range(&self.dates, today)
    }

    pub fn render_context(&self, today: NaiveDate) -> RenderContext {
        let color = match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        };
        RenderContext { today, color }
    }
}

/// Get today's date, respecting DAYS_TEST_TIME environment variable for testing.
pub fn get_today_date() -> NaiveDate {
    if let Ok(test_time) = std::env::var("DAYS_TEST_TIME")
        && let Ok(date) = parse_date(&test_time)
    {
        return date;
    }
    chrono::Local::now().date_naive()
}

/// Check for exactly four year digits, two month digits and two day digits.
fn is_iso_date_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Parse an ISO `YYYY-MM-DD` date.
///
/// Unpadded fields, signs and years outside 0000-9999 are rejected.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    if !is_iso_date_shape(s) {
        return Err(DaysError::MalformedDate(s.to_string()));
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|source| DaysError::InvalidDate {
        input: s.to_string(),
        source,
    })
}

/// Parse a signed day offset such as `+5`, `-5` or `5`.
pub fn parse_delta(s: &str) -> Option<i64> {
    s.parse::<i64>().ok()
}

/// Build the range described by the positional arguments.
///
/// Argument patterns:
/// - 0 args: today
/// - 2 args: date date, or date delta
/// - 3 args: accepted but ignored, today
pub fn parse_range(dates: &[String], today: NaiveDate) -> Result<DateRange> {
    match dates {
        [] => Ok(DateRange::single(today)),
        [from, to] => {
            let from = parse_date(from)?;
            if let Ok(to) = parse_date(to) {
                return Ok(DateRange::new(from, to));
            }
            let delta =
                parse_delta(to).ok_or_else(|| DaysError::InvalidDateOrDelta(to.clone()))?;
            debug!(delta, "second argument parsed as day offset");
            apply_delta(from, delta)
        }
        [_, _, _] => {
            debug!(?dates, "three arguments given, showing today");
            Ok(DateRange::single(today))
        }
        _ => Err(DaysError::ArgCount(dates.len())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 18).unwrap()
    }

    #[test]
    fn no_arguments_is_today() {
        let range = parse_range(&[], today()).unwrap();
        assert_eq!(range, DateRange::single(today()));
    }

    #[test]
    fn reversed_dates_are_swapped() {
        let range = parse_range(&strings(&["2024-03-10", "2024-03-01"]), today()).unwrap();
        assert_eq!(range.from.to_string(), "2024-03-01");
        assert_eq!(range.to.to_string(), "2024-03-10");
    }

    #[test]
    fn plus_sign_delta() {
        let range = parse_range(&strings(&["2024-01-01", "+5"]), today()).unwrap();
        assert_eq!(range.to.to_string(), "2024-01-06");
    }

    #[test]
    fn single_argument_is_rejected() {
        assert!(matches!(
            parse_range(&strings(&["2024-01-01"]), today()),
            Err(DaysError::ArgCount(1))
        ));
    }

    #[test]
    fn bad_first_date() {
        let err = parse_range(&strings(&["2024-13-01", "+1"]), today()).unwrap_err();
        assert!(matches!(err, DaysError::InvalidDate { ref input, .. } if input == "2024-13-01"));
    }

    #[test]
    fn bad_second_argument() {
        let err = parse_range(&strings(&["2024-01-01", "tomorrow"]), today()).unwrap_err();
        assert_eq!(err.to_string(), "error parsing date or delta \"tomorrow\"");
    }

    #[test]
    fn unpadded_date_is_rejected() {
        for input in ["2024-1-5", "+2024-01-05", "12024-01-05", "2024/01/05"] {
            assert!(
                matches!(parse_date(input), Err(DaysError::MalformedDate(_))),
                "{input}"
            );
        }
        assert!(parse_date("0099-03-01").is_ok());
    }

    #[test]
    fn unpadded_second_date_is_not_a_delta() {
        let err = parse_range(&strings(&["2024-01-01", "2024-1-5"]), today()).unwrap_err();
        assert!(matches!(err, DaysError::InvalidDateOrDelta(ref s) if s == "2024-1-5"));
    }

    #[test]
    fn hyphenated_garbage_is_positional() {
        for bad in ["-5x", "--5", "-abc"] {
            let args = Args::try_parse_from(["days", "2024-01-01", bad]).unwrap();
            assert_eq!(args.dates, strings(&["2024-01-01", bad]));
            assert!(matches!(
                args.date_range(today()),
                Err(DaysError::InvalidDateOrDelta(_))
            ));
        }
    }

    #[test]
    fn unknown_option_is_a_lone_positional() {
        let args = Args::try_parse_from(["days", "--bogus"]).unwrap();
        assert!(matches!(args.date_range(today()), Err(DaysError::ArgCount(1))));
    }

    #[test]
    fn negative_number_is_positional() {
        let args = Args::try_parse_from(["days", "2024-01-10", "-5"]).unwrap();
        assert_eq!(args.dates, strings(&["2024-01-10", "-5"]));
    }
}
