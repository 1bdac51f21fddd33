//! `user-defined-types`: zero value plus assignment, positional, named fields

use std::io::Write;

use primer_core::{PrimerResult, Record};

pub fn run(out: &mut dyn Write) -> PrimerResult<()> {
    let mut bob = Record::default();
    bob.name = String::from("Bob");
    bob.age = 45;
    writeln!(out, "{}", bob)?;

    let sandra = Record::new("Sandra", 55);
    writeln!(out, "{}", sandra)?;

    let maria = Record {
        age: 65,
        name: String::from("Maria"),
    };
    writeln!(out, "{}", maria)?;
    Ok(())
}
