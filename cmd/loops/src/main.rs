//! Index loops over an array and a growable vector
//!
//! Prints the `loops` lesson to stdout. Logging (stderr only) follows
//! `PRIMER_LOG_LEVEL`, `PRIMER_FLUSH_EPRINT` and `PRIMER_KPRINT_TIME`.

use primer::lessons::loops;

fn main() {
    primer::init();

    let stdout = std::io::stdout();
    primer::exit_on_error(loops::run(&mut stdout.lock()));
}
