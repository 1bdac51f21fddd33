//! `variadic-functions`: any number of trailing messages

use std::io::Write;

use primer_core::{greet, PrimerResult};

pub fn run(out: &mut dyn Write) -> PrimerResult<()> {
    greet!(out, "Andy", "Hello", "Greetings", "Salutations")?;
    Ok(())
}
