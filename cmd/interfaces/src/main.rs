//! Dispatch through a trait object
//!
//! Prints the `interfaces` lesson to stdout. Logging (stderr only) follows
//! `PRIMER_LOG_LEVEL`, `PRIMER_FLUSH_EPRINT` and `PRIMER_KPRINT_TIME`.

use primer::lessons::interfaces;

fn main() {
    primer::init();

    let stdout = std::io::stdout();
    primer::exit_on_error(interfaces::run(&mut stdout.lock()));
}
