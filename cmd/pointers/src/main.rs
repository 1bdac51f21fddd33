//! A reference and its referent share storage
//!
//! Prints the `pointers` lesson to stdout. Logging (stderr only) follows
//! `PRIMER_LOG_LEVEL`, `PRIMER_FLUSH_EPRINT` and `PRIMER_KPRINT_TIME`.

use primer::lessons::pointers;

fn main() {
    primer::init();

    let stdout = std::io::stdout();
    primer::exit_on_error(pointers::run(&mut stdout.lock()));
}
