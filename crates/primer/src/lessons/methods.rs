//! `methods`: a by-value receiver cannot change the caller, `&mut self` can

use std::io::Write;

use primer_core::{Person, PrimerResult};

pub fn run(out: &mut dyn Write) -> PrimerResult<()> {
    let mut person = Person::new("John", "123 Birch Street", 45);

    // greet() renames its own copy to "Jane"
    person.clone().greet(out)?;
    writeln!(out, "{}", person.name)?;

    person.set_name("Dinah");
    writeln!(out, "{}", person.name)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lessons::capture;

    #[test]
    fn test_output() {
        assert_eq!(capture(run), "Hello, John\nJohn\nDinah\n");
    }
}
