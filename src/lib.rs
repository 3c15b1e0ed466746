//! Date range calculator with a colored month calendar.
//!
//! Features:
//! - Explicit `from`/`to` dates or a start date plus a signed day offset
//! - Monday-start month grid with today and the range highlighted
//! - Workday, weekend day and night counts for the range

pub mod args;
pub mod calendar;
pub mod error;
pub mod formatter;
pub mod logger;
pub mod types;
