//! Pass a function as an argument
//!
//! Prints the `passing-a-function` lesson to stdout. Logging (stderr only) follows
//! `PRIMER_LOG_LEVEL`, `PRIMER_FLUSH_EPRINT` and `PRIMER_KPRINT_TIME`.

use primer::lessons::passing_a_function;

fn main() {
    primer::init();

    let stdout = std::io::stdout();
    primer::exit_on_error(passing_a_function::run(&mut stdout.lock()));
}
