//! By-value vs. by-reference receivers
//!
//! Expected output: `Hello, John`, `John`, `Dinah`.

use primer::lessons::methods;

fn main() {
    primer::init();

    let stdout = std::io::stdout();
    primer::exit_on_error(methods::run(&mut stdout.lock()));
}
