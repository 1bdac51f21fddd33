//! Half-open slice views over a vector
//!
//! Out-of-range bounds abort with a panic instead of truncating.
//!
//! Prints the `ranges` lesson to stdout. Logging (stderr only) follows
//! `PRIMER_LOG_LEVEL`, `PRIMER_FLUSH_EPRINT` and `PRIMER_KPRINT_TIME`.

use primer::lessons::ranges;

fn main() {
    primer::init();

    let stdout = std::io::stdout();
    primer::exit_on_error(ranges::run(&mut stdout.lock()));
}
