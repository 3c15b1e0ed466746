//! Date range calculator CLI.
//!
//! # Usage
//! ```ignore
//! days                          // Current month, today highlighted
//! days 2024-12-20 2025-01-06    // Span between two dates
//! days 2024-01-01 +5            // Six days starting 2024-01-01
//! days 2024-01-10 -5            // Six days ending 2024-01-10
//! ```

use clap::Parser;
use clap::error::ErrorKind;

use days::args::{Args, get_today_date};
use days::error::DaysError;
use days::formatter::{render, write_output};
use days::logger::init_cli_logger;
use days::types::USAGE;
use tracing::debug;

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            eprint!("{}", e);
            eprintln!("{}", USAGE);
            std::process::exit(1);
        }
    };
    init_cli_logger(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("days: {}", e);
        if e.is_usage_error() {
            eprintln!("{}", USAGE);
        }
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), DaysError> {
    let today = get_today_date();
    let range = args.date_range(today)?;
    debug!(from = %range.from, to = %range.to, "resolved range");

    let ctx = args.render_context(today);
    let output = render(&ctx, &range);

    write_output(&mut std::io::stdout().lock(), &output)
}
