//! Any number of trailing arguments
//!
//! Prints the `variadic-functions` lesson to stdout. Logging (stderr only) follows
//! `PRIMER_LOG_LEVEL`, `PRIMER_FLUSH_EPRINT` and `PRIMER_KPRINT_TIME`.

use primer::lessons::variadic_functions;

fn main() {
    primer::init();

    let stdout = std::io::stdout();
    primer::exit_on_error(variadic_functions::run(&mut stdout.lock()));
}
