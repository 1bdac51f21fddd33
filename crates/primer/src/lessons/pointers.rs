//! `pointers`: write through a reference, read the owner

use std::io::Write;

use primer_core::{address_of, write_through, PrimerResult};

pub fn run(out: &mut dyn Write) -> PrimerResult<()> {
    let mut name = String::from("John");
    let message = &mut name;

    writeln!(out, "{}", address_of(&*message))?;
    writeln!(out, "{}", *message)?;

    // Both names refer to the same storage
    write_through(message, String::from("Mary"));
    writeln!(out, "{}", name)?;
    Ok(())
}
