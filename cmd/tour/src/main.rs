//! Run several lessons in one go
//!
//! ```text
//! tour                     # every lesson, in registry order
//! tour loops ranges        # just these, in this order
//! tour --list              # lesson names and summaries
//! ```
//!
//! # Environment Variables
//!
//! - `PRIMER_TOUR=loops,ranges` - Lessons to run when none are given on the command line
//! - `PRIMER_LOG_LEVEL=info` - Set log level (off, error, warn, info, debug, trace)
//! - `PRIMER_FLUSH_EPRINT=1` - Flush stderr after each log line
//! - `PRIMER_KPRINT_TIME=1` - Prefix log lines with elapsed microseconds

use std::io::Write;

use primer::{kdebug, lessons, PrimerResult, LESSONS};

fn list(out: &mut dyn Write) -> PrimerResult<()> {
    for lesson in LESSONS {
        writeln!(out, "{:<24} {}", lesson.name, lesson.summary)?;
    }
    Ok(())
}

fn main() {
    let config = primer::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if args.iter().any(|a| a == "--list") {
        primer::exit_on_error(list(&mut out));
        return;
    }

    // Command line wins over PRIMER_TOUR
    let names = if args.is_empty() { config.lessons } else { args };
    kdebug!("tour: {:?}", names);

    primer::exit_on_error(lessons::run_tour(&mut out, &names));
}
