//! Destructure two values returned from one call

use primer::lessons::multiple_return_values;

fn main() {
    primer::init();

    let stdout = std::io::stdout();
    primer::exit_on_error(multiple_return_values::run(&mut stdout.lock()));
}
