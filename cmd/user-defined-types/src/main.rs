//! Build a struct three ways
//!
//! Prints the `user-defined-types` lesson to stdout. Logging (stderr only) follows
//! `PRIMER_LOG_LEVEL`, `PRIMER_FLUSH_EPRINT` and `PRIMER_KPRINT_TIME`.

use primer::lessons::user_defined_types;

fn main() {
    primer::init();

    let stdout = std::io::stdout();
    primer::exit_on_error(user_defined_types::run(&mut stdout.lock()));
}
