//! `multiple-return-values`: destructure two results from one call

use std::io::Write;

use primer_core::{create_greetings, PrimerResult};

pub fn run(out: &mut dyn Write) -> PrimerResult<()> {
    let (greeting, alternate) = create_greetings("Andy");
    writeln!(out, "{}", greeting)?;
    writeln!(out, "{}", alternate)?;
    Ok(())
}
